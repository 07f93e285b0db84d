use iced::event::{self, Event};
use iced::keyboard::{self, key};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{Column, Scrollable, canvas, column, stack};
use iced::{Element, Length, Subscription, Task, Theme, mouse, window};
use tracing::debug;

use crate::animation::ScrollPlugin;
use crate::config::Config;
use crate::gui::cursor::CursorLayer;
use crate::gui::sections::{self, SectionView};
use crate::gui::{AppState, Message};
use crate::page::Section;

pub struct FolioApp {
    state: AppState,
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl FolioApp {
    pub fn new(plugin: ScrollPlugin, config: &Config) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(plugin, config),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("{} | Portfolio", crate::content::PROFILE.full_name())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let page = &mut self.state.page;
        match message {
            Message::Scrolled { y, viewport_height } => {
                let update = page.on_scroll(y, viewport_height);
                if let Some(scrolled) = update.nav_scrolled {
                    debug!(scrolled, "nav bar style changed");
                }
                Task::none()
            }
            Message::Frame(now) => {
                match self.state.on_frame(now) {
                    Some(y) => scrollable::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y }),
                    None => Task::none(),
                }
            }
            Message::Resized(size) => {
                self.state.window_width = size.width;
                Task::none()
            }
            Message::PointerMoved(position) => {
                page.on_pointer_move(position.x, position.y);
                Task::none()
            }
            Message::PointerLeft => {
                page.on_window_presence(false);
                Task::none()
            }
            Message::PointerEntered => {
                page.on_window_presence(true);
                Task::none()
            }
            Message::Hover(hovering) => {
                page.on_hover(hovering);
                Task::none()
            }
            Message::Navigate(href) => {
                page.navigate(href);
                Task::none()
            }
            Message::ScrollToTop => {
                page.scroll_to_top();
                Task::none()
            }
            Message::ToggleMenu => {
                page.toggle_menu();
                Task::none()
            }
            Message::SelectCategory(category) => {
                page.set_category(category);
                Task::none()
            }
            Message::OpenDetails(id) => {
                page.open_details(id);
                Task::none()
            }
            Message::CloseDetails => {
                page.close_details();
                Task::none()
            }
            Message::ContactInput(field, value) => {
                page.set_contact_field(field, value);
                Task::none()
            }
            Message::SubmitContact => {
                page.submit_contact();
                Task::none()
            }
            Message::OpenLink(url) => {
                page.open_link(&url);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = &self.state.page;
        let styles = page.styles();

        let content: Column<'_, Message> = column![
            sections::Hero::view(page, &styles),
            sections::About::view(page, &styles),
            sections::Skills::view(page, &styles),
            sections::Projects::view(page, &styles),
            sections::Contact::view(page, &styles),
            sections::Footer::view(page, &styles),
        ];
        let scroller = Scrollable::new(content)
            .id(page_scroll_id())
            .on_scroll(|viewport| Message::Scrolled {
                y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![
            scroller,
            sections::navbar(page, &styles, self.state.is_compact()),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        if page.is_mounted(Section::Shell) {
            layers = layers.push(sections::scroll_top_button());
        }
        if let Some(project) = page.details().project() {
            layers = layers.push(sections::project_dialog(project));
        }
        if let Some(cursor) = page.cursor().filter(|cursor| cursor.is_shown()) {
            layers = layers.push(
                canvas(CursorLayer::new(cursor.ring(), cursor.dot()))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }
        layers.into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.state.page.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };
        Subscription::batch([frames, event::listen_with(pointer_event)])
    }
}

fn pointer_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved(position)),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Mouse(mouse::Event::CursorEntered) => Some(Message::PointerEntered),
        Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::CloseDetails),
        _ => None,
    }
}
