//! Headless page state: everything the front-end shows, minus the drawing.
//!
//! The front-end forwards scroll, pointer and frame events here and reads
//! back styles, the visible projects and the chrome state.

pub mod chrome;
pub mod contact;
pub mod cursor;
pub mod filter;
pub mod layout;
pub mod listeners;
pub mod sections;
pub mod selection;

use tracing::{debug, info};

use crate::animation::{Fired, ScrollPlugin, StyleSheet, TriggerId, TriggerRegistry};
use crate::config::Config;
use crate::content;
use crate::models::Project;

pub use chrome::{MobileMenu, NavBar, SmoothScroll, resolve_anchor};
pub use contact::{ContactField, ContactForm};
pub use cursor::{CursorFollower, CursorMark};
pub use filter::{CategoryFilter, filter_projects};
pub use layout::Layout;
pub use listeners::{EventKind, Handler, Listener, ListenerId, ListenerRegistry};
pub use sections::{Animation, Section};
pub use selection::{DetailDialog, ProjectSelection};

/// What changed in response to a scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    /// New nav bar state, when it flipped.
    pub nav_scrolled: Option<bool>,
    pub fired: Vec<Fired>,
}

#[derive(Debug)]
pub struct Page {
    filter: CategoryFilter,
    details: DetailDialog,
    nav: NavBar,
    menu: MobileMenu,
    cursor: CursorFollower,
    smooth_scroll: SmoothScroll,
    contact: ContactForm,
    listeners: ListenerRegistry,
    triggers: TriggerRegistry,
    layout: Layout,
    mounted: Vec<Section>,
    card_trigger: Option<TriggerId>,
    anchor_offset: f32,
    coarse_pointer: bool,
    time_scale: f32,
    scroll_y: f32,
    viewport_height: f32,
}

impl Page {
    pub fn new(plugin: ScrollPlugin, config: &Config) -> Self {
        let filter = CategoryFilter::default();
        let layout = Layout::new(filter.visible().len());
        Self {
            filter,
            details: DetailDialog::default(),
            nav: NavBar::new(config.chrome.nav_scroll_threshold),
            menu: MobileMenu::default(),
            cursor: CursorFollower::default(),
            smooth_scroll: SmoothScroll::new(config.chrome.smooth_scroll_secs),
            contact: ContactForm::default(),
            listeners: ListenerRegistry::default(),
            triggers: TriggerRegistry::new(plugin)
                .with_time_scale(config.animation.time_scale)
                .with_reduced_motion(config.animation.reduced_motion),
            layout,
            mounted: Vec::new(),
            card_trigger: None,
            anchor_offset: config.chrome.anchor_offset,
            coarse_pointer: config.chrome.coarse_pointer,
            time_scale: config.animation.time_scale,
            scroll_y: 0.0,
            viewport_height: config.window.height,
        }
    }

    pub fn mount_all(&mut self) {
        for section in Section::ALL {
            self.mount(section);
        }
    }

    pub fn unmount_all(&mut self) {
        for section in Section::ALL {
            self.unmount(section);
        }
    }

    /// Attach the section's listeners and animations. Mounting twice is a
    /// no-op.
    pub fn mount(&mut self, section: Section) {
        if self.is_mounted(section) {
            return;
        }
        debug!(%section, "mounting");
        self.mounted.push(section);

        match section {
            Section::Shell => {
                self.listeners.add(section, Handler::AnchorNavigation);
            }
            Section::Navbar => {
                self.listeners.add(section, Handler::NavScroll);
            }
            Section::Cursor => {
                self.cursor = CursorFollower::default();
                if !self.coarse_pointer {
                    self.listeners.add(section, Handler::CursorFirstMove);
                    self.listeners.add(section, Handler::CursorHover);
                    self.listeners.add(section, Handler::CursorLeave);
                    self.listeners.add(section, Handler::CursorEnter);
                }
            }
            _ => {}
        }

        let animations = section.animations(self.filter.visible().len());
        let scroll_driven = animations
            .iter()
            .any(|animation| matches!(animation, Animation::Scroll { .. }));
        let ids: Vec<TriggerId> = animations
            .into_iter()
            .map(|animation| self.register(section, animation))
            .collect();
        if section == Section::Projects {
            // the card reveal is registered last
            self.card_trigger = ids.last().copied();
        }
        if scroll_driven {
            self.listeners.add(section, Handler::ScrollTriggers);
            self.refresh_triggers();
        }
    }

    /// Detach everything the section attached.
    pub fn unmount(&mut self, section: Section) {
        if !self.is_mounted(section) {
            return;
        }
        debug!(%section, "unmounting");
        self.mounted.retain(|mounted| *mounted != section);
        self.listeners.remove_scope(section);
        self.triggers.kill_scope(section.name());
        match section {
            Section::Projects => {
                self.card_trigger = None;
                self.details.close();
            }
            Section::Navbar => self.menu.close(),
            _ => {}
        }
    }

    pub fn is_mounted(&self, section: Section) -> bool {
        self.mounted.contains(&section)
    }

    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> ScrollUpdate {
        self.scroll_y = scroll_y.max(0.0);
        self.viewport_height = viewport_height;

        let mut update = ScrollUpdate::default();
        let mut triggers_done = false;
        for listener in self.listeners.for_event(EventKind::Scroll) {
            match listener.handler {
                Handler::NavScroll => {
                    if let Some(scrolled) = self.nav.on_scroll(self.scroll_y) {
                        update.nav_scrolled = Some(scrolled);
                    }
                }
                Handler::ScrollTriggers if !triggers_done => {
                    update.fired = self.triggers.update(
                        self.scroll_y,
                        self.viewport_height,
                        &self.layout,
                    );
                    triggers_done = true;
                }
                _ => {}
            }
        }
        update
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        for listener in self.listeners.for_event(EventKind::PointerMove) {
            match listener.handler {
                Handler::CursorFirstMove => {
                    self.cursor.reveal(x, y);
                    self.listeners.replace(listener.id, Handler::CursorTrack);
                }
                Handler::CursorTrack => self.cursor.track(x, y),
                _ => {}
            }
        }
    }

    /// Pointer entered (`true`) or left (`false`) an interactive element.
    pub fn on_hover(&mut self, hovering: bool) {
        if self.listeners.count(EventKind::PointerHover) > 0 {
            self.cursor.hover(hovering);
        }
    }

    /// Pointer entered (`true`) or left (`false`) the window.
    pub fn on_window_presence(&mut self, inside: bool) {
        let kind = if inside {
            EventKind::PointerEnter
        } else {
            EventKind::PointerLeave
        };
        if self.listeners.count(kind) > 0 {
            self.cursor.window_presence(inside);
        }
    }

    /// Advance animations by `dt` seconds. Returns the scroll offset to
    /// apply while a smooth scroll is in flight.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.triggers.advance(dt);
        let scaled = dt.max(0.0) * self.time_scale;
        self.cursor.tick(scaled);
        self.smooth_scroll.tick(scaled)
    }

    pub fn is_animating(&self) -> bool {
        self.triggers.is_animating() || self.cursor.is_animating() || self.smooth_scroll.is_active()
    }

    /// Follow an in-page link. Returns the target offset, or `None` when
    /// the link has no target or no anchor handler is mounted.
    pub fn navigate(&mut self, href: &str) -> Option<f32> {
        self.menu.close();
        if self.listeners.count(EventKind::AnchorClick) == 0 {
            return None;
        }
        let target = resolve_anchor(href, &self.layout, self.anchor_offset)?;
        debug!(href, target, "smooth scrolling to anchor");
        self.smooth_scroll.start(self.scroll_y, target);
        Some(target)
    }

    pub fn scroll_to_top(&mut self) {
        self.smooth_scroll.start(self.scroll_y, 0.0);
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    /// Switch the projects tab and re-run the card reveal for the new set.
    pub fn set_category(&mut self, category: &str) {
        if !self.filter.set_category(category) {
            return;
        }
        let visible = self.filter.visible().len();
        debug!(category, visible, "category changed");
        self.layout = Layout::new(visible);

        if let Some(id) = self.card_trigger.take() {
            self.triggers.kill(id);
        }
        if self.is_mounted(Section::Projects) {
            let id = self.register(Section::Projects, sections::project_cards(visible));
            self.card_trigger = Some(id);
        }
        self.refresh_triggers();
    }

    /// Open the detail dialog for project `id`. Unknown ids are ignored.
    pub fn open_details(&mut self, id: u32) -> bool {
        match content::project(id) {
            Some(project) => {
                self.details.open_for(project);
                true
            }
            None => {
                debug!(id, "no such project");
                false
            }
        }
    }

    pub fn close_details(&mut self) {
        self.details.close();
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: String) {
        self.contact.set(field, value);
    }

    pub fn submit_contact(&self) {
        self.contact.submit();
    }

    /// An outbound link was activated. There is nothing to open it with,
    /// so it is only recorded.
    pub fn open_link(&self, url: &str) {
        info!(url, "external link requested");
    }

    pub fn styles(&self) -> StyleSheet {
        self.triggers.render()
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.filter.visible()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn details(&self) -> &DetailDialog {
        &self.details
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn cursor(&self) -> Option<&CursorFollower> {
        (self.is_mounted(Section::Cursor) && !self.coarse_pointer).then_some(&self.cursor)
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn register(&mut self, section: Section, animation: Animation) -> TriggerId {
        match animation {
            Animation::Autoplay(timeline) => self.triggers.autoplay(section.name(), timeline),
            Animation::Scroll {
                element,
                spec,
                timeline,
            } => self.triggers.register(section.name(), element, spec, timeline),
        }
    }

    fn refresh_triggers(&mut self) {
        if self.listeners.count(EventKind::Scroll) == 0 {
            return;
        }
        self.triggers
            .update(self.scroll_y, self.viewport_height, &self.layout);
    }
}
