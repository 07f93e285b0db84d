//! Integration tests for the projects section.
//!
//! Tests cover:
//! - Category filtering, order preservation and the empty notice
//! - Selecting a project for the detail dialog
//! - Re-registering the card reveal when the category changes

mod common;

use folio::content::{self, NO_PROJECTS_NOTICE, PROJECTS};
use folio::page::{CategoryFilter, DetailDialog, ProjectSelection, filter_projects};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use common::*;

fn titles(projects: &[&folio::Project]) -> Vec<&'static str> {
    projects.iter().map(|project| project.title).collect()
}

#[test]
fn test_filter_by_category() -> anyhow::Result<()> {
    // 1. "streaming" keeps exactly the two streaming projects, in order
    let streaming = filter_projects(PROJECTS, "streaming");
    assert_eq!(titles(&streaming), vec!["Watch Series", "Watchit"]);

    // 2. "all" keeps every project in its original order
    let all = filter_projects(PROJECTS, "all");
    assert_eq!(all.len(), 6);
    let ids: Vec<u32> = all.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    // 3. An unused category yields nothing
    assert!(filter_projects(PROJECTS, "nonexistent").is_empty());

    Ok(())
}

#[test]
fn test_category_filter_notice() -> anyhow::Result<()> {
    let mut filter = CategoryFilter::default();
    assert_eq!(filter.active(), "all");
    assert_eq!(filter.notice(), None);

    assert!(filter.set_category("nonexistent"));
    assert!(filter.visible().is_empty());
    assert_eq!(filter.notice(), Some(NO_PROJECTS_NOTICE));

    // Selecting the active category again is not a change
    assert!(!filter.set_category("nonexistent"));

    Ok(())
}

#[test]
fn test_selection_replaces_previous() -> anyhow::Result<()> {
    let first = content::project(3).expect("project 3 exists");
    let second = content::project(5).expect("project 5 exists");

    let mut selection = ProjectSelection::default();
    assert_eq!(selection.select(first), None);
    assert_eq!(selection.select(second).map(|p| p.id), Some(3));
    assert_eq!(selection.selected().map(|p| p.id), Some(5));

    let mut dialog = DetailDialog::default();
    dialog.open_for(first);
    dialog.open_for(second);
    assert!(dialog.is_open());
    assert_eq!(dialog.project().map(|p| p.title), Some("Watchit"));

    // Closing clears the selection as well
    dialog.close();
    assert!(!dialog.is_open());
    assert_eq!(dialog.project(), None);
    assert_eq!(dialog.selection().selected(), None);

    Ok(())
}

#[test]
fn test_page_details() -> anyhow::Result<()> {
    let mut page = mounted_page();

    assert!(page.open_details(1));
    assert!(page.open_details(4));
    assert_eq!(page.details().project().map(|p| p.id), Some(4));

    // Unknown ids leave the dialog as it was
    assert!(!page.open_details(99));
    assert_eq!(page.details().project().map(|p| p.id), Some(4));

    page.close_details();
    assert_eq!(page.details().project(), None);

    Ok(())
}

#[test]
fn test_category_change_reregisters_card_reveal() -> anyhow::Result<()> {
    let mut page = mounted_page();
    let triggers = page.triggers().len();

    // 1. Play the about title so there is a running trigger outside projects
    page.on_scroll(200.0, DEFAULT_VIEWPORT);
    page.tick(0.2);
    let about_title = page.styles().of("about.title").opacity;
    assert!(about_title > 0.0);

    // 2. Switch to streaming: two cards, six before
    page.set_category("streaming");
    assert_eq!(page.visible_projects().len(), 2);
    assert_eq!(page.triggers().len(), triggers);
    assert_eq!(page.triggers().scope_len("projects"), 2);

    let styles = page.styles();
    assert_eq!(styles.get(&ElementId::indexed("projects.card", 0)).opacity, 0.0);
    // the old six-card reveal no longer styles anything
    assert_eq!(styles.get(&ElementId::indexed("projects.card", 5)), Style::default());

    // 3. Other sections' triggers were left alone
    assert!(styles.of("about.title").opacity >= about_title);

    Ok(())
}

#[test]
fn test_category_change_while_cards_in_view() -> anyhow::Result<()> {
    let mut page = mounted_page();
    let cards = page
        .layout()
        .section(Section::Projects)
        .expect("projects laid out");

    // 1. Scroll the card grid into view and let the reveal finish
    page.on_scroll(cards.top + 100.0, DEFAULT_VIEWPORT);
    page.tick(2.0);
    assert_eq!(page.styles().get(&ElementId::indexed("projects.card", 0)).opacity, 1.0);

    // 2. The replacement trigger fires right away at the current position
    page.set_category("web");
    assert_eq!(page.styles().get(&ElementId::indexed("projects.card", 0)).opacity, 0.0);
    page.tick(2.0);
    let visible = page.visible_projects().len();
    for i in 0..visible {
        let style = page.styles().get(&ElementId::indexed("projects.card", i));
        assert_eq!(style.opacity, 1.0, "card {i}");
    }

    Ok(())
}

#[test]
fn test_empty_category_keeps_page_consistent() -> anyhow::Result<()> {
    let mut page = mounted_page();

    page.set_category("nonexistent");
    assert!(page.visible_projects().is_empty());
    assert_eq!(page.filter().notice(), Some(NO_PROJECTS_NOTICE));
    assert_eq!(page.triggers().scope_len("projects"), 2);

    // Scrolling over an empty grid is harmless
    let height = page.layout().page_height();
    page.on_scroll(height, DEFAULT_VIEWPORT);
    page.tick(1.0);

    Ok(())
}

proptest! {
    #[test]
    fn filter_is_an_ordered_subset(category in prop_oneof![
        Just("all".to_string()),
        Just("web".to_string()),
        Just("streaming".to_string()),
        Just("utilities".to_string()),
        Just("video".to_string()),
        "[a-z]{0,12}",
    ]) {
        let filtered = filter_projects(PROJECTS, &category);

        // every kept project matches and order follows the source
        let mut last_index = None;
        for project in &filtered {
            prop_assert!(category == "all" || project.category == category);
            let index = PROJECTS.iter().position(|p| p.id == project.id);
            prop_assert!(index > last_index);
            last_index = index;
        }

        // nothing matching was dropped
        let expected = PROJECTS
            .iter()
            .filter(|p| category == "all" || p.category == category)
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }
}
