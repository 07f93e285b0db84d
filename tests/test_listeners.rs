//! Integration tests for listener lifetimes.
//!
//! Tests cover:
//! - Listeners attached per section on mount
//! - Repeated mount/unmount cycles leaving nothing behind
//! - Removal by id succeeding exactly once
//! - The cursor's first-move listener handing over to the tracking one
//! - Coarse pointers skipping the cursor listeners

mod common;

use folio::page::ListenerRegistry;
use pretty_assertions::assert_eq;

use common::*;

/// Shell 1, navbar 1, cursor 4, and one scroll-trigger listener for each
/// scroll-animated content section.
const MOUNTED_LISTENERS: usize = 11;

#[test]
fn test_mount_attaches_section_listeners() -> anyhow::Result<()> {
    let page = mounted_page();
    let listeners = page.listeners();

    assert_eq!(listeners.len(), MOUNTED_LISTENERS);
    assert_eq!(listeners.scope_len(Section::Shell), 1);
    assert_eq!(listeners.scope_len(Section::Navbar), 1);
    assert_eq!(listeners.scope_len(Section::Cursor), 4);
    assert_eq!(listeners.scope_len(Section::Hero), 0);
    assert_eq!(listeners.count(EventKind::Scroll), 6);
    assert_eq!(listeners.count(EventKind::AnchorClick), 1);

    Ok(())
}

#[test]
fn test_mount_unmount_cycles_do_not_leak() -> anyhow::Result<()> {
    let mut page = mounted_page();
    let triggers = page.triggers().len();

    for _ in 0..5 {
        // 1. Tear everything down
        page.unmount_all();
        assert!(page.listeners().is_empty());
        assert!(page.triggers().is_empty());
        for section in Section::ALL {
            assert!(!page.is_mounted(section));
        }

        // 2. Mount again, counts match the first mount
        page.mount_all();
        assert_eq!(page.listeners().len(), MOUNTED_LISTENERS);
        assert_eq!(page.triggers().len(), triggers);
    }

    Ok(())
}

#[test]
fn test_mount_twice_is_idempotent() -> anyhow::Result<()> {
    let mut page = mounted_page();
    let triggers = page.triggers().len();

    page.mount(Section::Projects);
    page.mount_all();

    assert_eq!(page.listeners().len(), MOUNTED_LISTENERS);
    assert_eq!(page.triggers().len(), triggers);

    Ok(())
}

#[test]
fn test_unmount_one_section_keeps_the_rest() -> anyhow::Result<()> {
    let mut page = mounted_page();

    page.unmount(Section::Projects);

    assert_eq!(page.listeners().len(), MOUNTED_LISTENERS - 1);
    assert_eq!(page.listeners().scope_len(Section::Projects), 0);
    assert_eq!(page.triggers().scope_len("projects"), 0);
    assert!(page.triggers().scope_len("about") > 0);

    Ok(())
}

#[test]
fn test_remove_by_id_succeeds_once() -> anyhow::Result<()> {
    let mut registry = ListenerRegistry::default();
    let first = registry.add(Section::Navbar, Handler::NavScroll);
    let second = registry.add(Section::Navbar, Handler::NavScroll);

    // Same handler, distinct identities
    assert_ne!(first, second);

    assert!(registry.remove(first));
    assert!(!registry.remove(first));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(second).map(|l| l.handler), Some(Handler::NavScroll));

    Ok(())
}

#[test]
fn test_first_pointer_move_swaps_listener() -> anyhow::Result<()> {
    let mut page = mounted_page();

    // 1. Before any movement the first-move handler is attached
    let before = page.listeners().for_event(EventKind::PointerMove);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].handler, Handler::CursorFirstMove);
    assert!(!page.cursor().expect("cursor mounted").is_shown());

    // 2. First move reveals the cursor and installs the tracker
    page.on_pointer_move(200.0, 150.0);
    let after = page.listeners().for_event(EventKind::PointerMove);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].handler, Handler::CursorTrack);
    assert_ne!(after[0].id, before[0].id);
    assert!(page.listeners().get(before[0].id).is_none());

    // 3. Later moves keep the same tracker
    page.on_pointer_move(220.0, 160.0);
    let tracked = page.listeners().for_event(EventKind::PointerMove);
    assert_eq!(tracked[0].id, after[0].id);

    // 4. Unmounting removes the replacement too
    page.unmount(Section::Cursor);
    assert_eq!(page.listeners().count(EventKind::PointerMove), 0);
    assert!(page.cursor().is_none());

    Ok(())
}

#[test]
fn test_coarse_pointer_skips_cursor() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.chrome.coarse_pointer = true;
    let mut page = mounted_page_with(&config);

    assert_eq!(page.listeners().scope_len(Section::Cursor), 0);
    assert_eq!(page.listeners().len(), MOUNTED_LISTENERS - 4);
    assert!(page.cursor().is_none());

    // Pointer events are dropped without a listener
    page.on_pointer_move(10.0, 10.0);
    page.on_hover(true);
    assert_eq!(page.listeners().count(EventKind::PointerMove), 0);

    Ok(())
}

#[test]
fn test_events_without_listeners_do_nothing() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.unmount(Section::Navbar);
    page.unmount(Section::Shell);

    let update = page.on_scroll(500.0, DEFAULT_VIEWPORT);
    assert_eq!(update.nav_scrolled, None);
    assert!(!page.nav().is_scrolled());
    assert_eq!(page.navigate("#about"), None);

    Ok(())
}
