use std::time::Instant;

use iced::{Point, Size};

use crate::page::ContactField;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled { y: f32, viewport_height: f32 },
    Frame(Instant),
    Resized(Size),
    PointerMoved(Point),
    PointerLeft,
    PointerEntered,
    /// Pointer over (`true`) or off (`false`) an interactive element.
    Hover(bool),
    Navigate(&'static str),
    ScrollToTop,
    ToggleMenu,
    SelectCategory(&'static str),
    OpenDetails(u32),
    CloseDetails,
    ContactInput(ContactField, String),
    SubmitContact,
    OpenLink(String),
}
