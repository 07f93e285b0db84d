pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod page;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Category, Profile, Project, Skill};
pub use page::{Page, Section};

#[cfg(feature = "gui")]
pub mod gui;
