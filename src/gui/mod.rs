mod app;
mod cursor;
mod message;
mod sections;
mod state;
mod widgets;

pub use app::FolioApp;
pub use message::Message;
pub use state::AppState;

use crate::animation::ScrollPlugin;
use crate::config::Config;

/// Open the portfolio window and block until it closes.
pub fn run(plugin: ScrollPlugin, config: Config) -> iced::Result {
    let size = iced::Size::new(config.window.width, config.window.height);
    iced::application(FolioApp::title, FolioApp::update, FolioApp::view)
        .subscription(FolioApp::subscription)
        .theme(FolioApp::theme)
        .window_size(size)
        .run_with(move || FolioApp::new(plugin, &config))
}
