mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::animation::{
    Action, Bounds, Callback, Direction, ElementId, Ease, Fired, Position, Repeat, Style,
    Timeline, Timing, ToggleActions, TriggerPosition, TriggerRegistry, TriggerSpec, Vars,
};
pub use folio::config::Config;
pub use folio::page::{EventKind, Handler, Page, Section};
