//! Integration tests for the scroll- and pointer-linked chrome.
//!
//! Tests cover:
//! - Nav bar style flipping at the scroll threshold
//! - Anchor resolution with the header offset
//! - Smooth scrolling towards anchors and back to the top
//! - Mobile menu toggling
//! - Cursor follower reveal, hover and window presence
//! - Time scale applied to smooth scrolling

mod common;

use folio::page::layout::{self, Layout};
use folio::page::{CursorFollower, NavBar, SmoothScroll, resolve_anchor};
use pretty_assertions::assert_eq;

use common::*;

#[test]
fn test_nav_bar_flips_once_past_threshold() -> anyhow::Result<()> {
    let mut page = mounted_page();

    // 1. At the top nothing changes
    assert_eq!(page.on_scroll(0.0, DEFAULT_VIEWPORT).nav_scrolled, None);

    // 2. 0 -> 120 flips to scrolled exactly once
    assert_eq!(page.on_scroll(120.0, DEFAULT_VIEWPORT).nav_scrolled, Some(true));
    assert_eq!(page.on_scroll(130.0, DEFAULT_VIEWPORT).nav_scrolled, None);
    assert!(page.nav().is_scrolled());

    // 3. Back above the threshold flips back
    assert_eq!(page.on_scroll(10.0, DEFAULT_VIEWPORT).nav_scrolled, Some(false));

    Ok(())
}

#[test]
fn test_nav_threshold_is_strict() -> anyhow::Result<()> {
    let mut nav = NavBar::new(50.0);
    assert_eq!(nav.on_scroll(50.0), None);
    assert_eq!(nav.on_scroll(50.5), Some(true));
    Ok(())
}

#[test]
fn test_anchor_resolution() -> anyhow::Result<()> {
    let layout = Layout::new(6);
    let projects = layout.section(Section::Projects).expect("projects laid out");

    assert_eq!(resolve_anchor("#projects", &layout, 80.0), Some(projects.top - 80.0));
    assert_eq!(resolve_anchor("/", &layout, 80.0), Some(0.0));
    assert_eq!(resolve_anchor("#", &layout, 80.0), None);
    assert_eq!(resolve_anchor("#nowhere", &layout, 80.0), None);
    assert_eq!(resolve_anchor("https://github.com", &layout, 80.0), None);

    // Offsets never go above the page top
    let about = layout.section(Section::About).expect("about laid out");
    assert_eq!(resolve_anchor("#about", &layout, about.top + 500.0), Some(0.0));

    Ok(())
}

#[test]
fn test_layout_stacks_sections() -> anyhow::Result<()> {
    let layout = Layout::new(6);
    let hero = layout.section(Section::Hero).expect("hero laid out");
    let about = layout.section(Section::About).expect("about laid out");

    assert_eq!(hero.top, 0.0);
    assert_eq!(about.top, layout::HERO_HEIGHT);

    // Fewer projects, shorter page
    assert!(Layout::new(2).page_height() < layout.page_height());
    assert!(Layout::new(0).section(Section::Contact).is_some());

    Ok(())
}

#[test]
fn test_navigate_smooth_scrolls_to_anchor() -> anyhow::Result<()> {
    let mut page = mounted_page();
    let contact = page.layout().section(Section::Contact).expect("contact laid out");

    // 1. The link resolves to the section top minus the header offset
    let target = page.navigate("#contact");
    assert_eq!(target, Some(contact.top - 80.0));

    // 2. The first frame moves part of the way
    let first = page.tick(0.1).expect("scroll in flight");
    assert!(first > 0.0 && first < contact.top - 80.0);

    // 3. It settles on the target and stops
    assert_eq!(settle_scroll(&mut page), Some(contact.top - 80.0));
    assert_eq!(page.tick(0.1), None);

    Ok(())
}

#[test]
fn test_unknown_anchor_is_ignored() -> anyhow::Result<()> {
    let mut page = mounted_page();

    assert_eq!(page.navigate("#"), None);
    assert_eq!(page.navigate("#missing"), None);
    assert_eq!(page.tick(0.1), None);

    Ok(())
}

#[test]
fn test_scroll_to_top() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.on_scroll(2400.0, DEFAULT_VIEWPORT);

    page.scroll_to_top();
    assert_eq!(settle_scroll(&mut page), Some(0.0));

    Ok(())
}

#[test]
fn test_smooth_scroll_retargets_in_flight() -> anyhow::Result<()> {
    let mut scroll = SmoothScroll::new(0.6);
    scroll.start(0.0, 1000.0);
    let mid = scroll.tick(0.3).expect("in flight");

    // A new target continues from where the scroll is, not from the old origin
    scroll.start(0.0, 200.0);
    assert_eq!(scroll.target(), Some(200.0));
    let next = scroll.tick(0.01).expect("in flight");
    assert!((next - mid).abs() < 50.0);

    Ok(())
}

#[test]
fn test_menu_closes_on_navigation() -> anyhow::Result<()> {
    let mut page = mounted_page();

    assert!(page.toggle_menu());
    assert!(page.menu().is_open());
    page.navigate("#skills");
    assert!(!page.menu().is_open());

    // Toggling twice ends closed
    page.toggle_menu();
    assert!(!page.toggle_menu());

    Ok(())
}

#[test]
fn test_cursor_reveal_and_follow() -> anyhow::Result<()> {
    let mut cursor = CursorFollower::default();
    assert!(!cursor.is_shown());
    assert_eq!(cursor.ring().opacity, 0.0);

    // 1. First move jumps to the pointer and fades in over 0.4s
    cursor.reveal(100.0, 100.0);
    assert!(cursor.is_shown());
    assert_eq!(cursor.dot().x, 100.0);
    cursor.tick(0.4);
    assert!(approx(cursor.ring().opacity, 1.0));
    assert!(approx(cursor.ring().scale, 1.0));

    // 2. The dot catches up within 0.1s, the ring lags behind
    cursor.track(200.0, 100.0);
    cursor.tick(0.1);
    assert!(approx(cursor.dot().x, 200.0));
    assert!(cursor.ring().x < 200.0);
    cursor.tick(0.4);
    assert!(approx(cursor.ring().x, 200.0));
    assert!(!cursor.is_animating());

    Ok(())
}

#[test]
fn test_cursor_hover_and_window_presence() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.on_pointer_move(50.0, 50.0);
    page.tick(1.0);

    // 1. Hovering an interactive element grows the ring and shrinks the dot
    page.on_hover(true);
    page.tick(0.3);
    let cursor = page.cursor().expect("cursor mounted");
    assert!(approx(cursor.ring().scale, 1.5));
    assert!(approx(cursor.ring().opacity, 0.7));
    assert!(approx(cursor.dot().scale, 0.5));

    // 2. Leaving the window fades both marks out, entering fades them back
    page.on_window_presence(false);
    page.tick(0.3);
    let cursor = page.cursor().expect("cursor mounted");
    assert_eq!(cursor.ring().opacity, 0.0);
    assert_eq!(cursor.dot().opacity, 0.0);

    page.on_window_presence(true);
    page.tick(0.3);
    assert_eq!(page.cursor().expect("cursor mounted").dot().opacity, 1.0);

    Ok(())
}

#[test]
fn test_hover_moves_between_controls() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.on_pointer_move(50.0, 50.0);
    page.tick(1.0);

    // 1. Leaving one button and entering the next keeps the ring grown
    page.on_hover(true);
    page.on_hover(false);
    page.on_hover(true);
    page.tick(0.3);
    assert!(approx(page.cursor().expect("cursor mounted").ring().scale, 1.5));

    // 2. Off every control the marks return to rest
    page.on_hover(false);
    page.tick(0.3);
    let cursor = page.cursor().expect("cursor mounted");
    assert!(approx(cursor.ring().scale, 1.0));
    assert!(approx(cursor.ring().opacity, 1.0));
    assert!(approx(cursor.dot().scale, 1.0));

    Ok(())
}

#[test]
fn test_time_scale_speeds_up_smooth_scroll() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.animation.time_scale = 2.0;
    let mut page = mounted_page_with(&config);
    let target = page.navigate("#about").expect("about resolves");

    // 0.6s scroll at double speed lands after 0.3s of wall time
    assert_eq!(page.tick(0.3), Some(target));
    assert_eq!(page.tick(0.1), None);

    Ok(())
}
