mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use iced::widget::{Column, button, center, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::animation::StyleSheet;
use crate::content::{PROFILE, ROUTES};
use crate::gui::Message;
use crate::gui::widgets::{self, bold, faded};
use crate::models::Project;
use crate::page::{Page, Section, layout};

/// One content block of the scrolling page.
pub trait SectionView {
    const SECTION: Section;

    fn content<'a>(page: &'a Page, styles: &StyleSheet) -> Element<'a, Message>;

    /// The section at the fixed height the trigger geometry assumes.
    fn view<'a>(page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let height = layout::section_height(Self::SECTION, page.visible_projects().len());
        container(Self::content(page, styles))
            .padding([0.0, widgets::SECTION_PADDING])
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .clip(true)
            .into()
    }
}

pub fn navbar<'a>(page: &'a Page, styles: &StyleSheet, compact: bool) -> Element<'a, Message> {
    let style = styles.of("nav.bar");
    let scrolled = page.nav().is_scrolled();

    let brand = widgets::hoverable(
        button(row![
            text(PROFILE.first_name).size(22).font(bold()),
            text(PROFILE.last_name)
                .size(22)
                .font(bold())
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        ])
        .on_press(Message::Navigate("/"))
        .style(button::text),
    );

    let links = || {
        ROUTES
            .iter()
            .map(|route| {
                widgets::hoverable(
                    button(text(route.label).size(14))
                        .on_press(Message::Navigate(route.href))
                        .style(button::text),
                )
            })
            .collect::<Vec<_>>()
    };
    let touch = || {
        widgets::hoverable(
            button(text("Get In Touch").size(14))
                .on_press(Message::OpenLink(PROFILE.mailto()))
                .style(button::primary),
        )
    };

    let bar: Element<'a, Message> = if compact {
        row![
            brand,
            iced::widget::horizontal_space(),
            widgets::hoverable(button(text("Menu")).on_press(Message::ToggleMenu).style(button::secondary)),
        ]
        .align_y(Alignment::Center)
        .into()
    } else {
        row![brand, iced::widget::horizontal_space()]
            .extend(links())
            .push(touch())
            .spacing(24)
            .align_y(Alignment::Center)
            .into()
    };

    let mut header = Column::new().push(bar);
    if compact && page.menu().is_open() {
        header = header.push(Column::with_children(links()).push(touch()).spacing(8));
    }

    let vertical = if scrolled { 8.0 } else { 16.0 };
    let header = container(header)
        .padding([vertical, 32.0])
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            if scrolled {
                container::Style::default()
                    .background(faded(theme.palette().background, 0.9 * style.opacity))
            } else {
                container::Style::default()
            }
        });
    widgets::shifted(header, style)
}

pub fn scroll_top_button<'a>() -> Element<'a, Message> {
    container(widgets::hoverable(
        button(text("Top").size(14))
            .padding(12)
            .on_press(Message::ScrollToTop)
            .style(button::primary),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::End)
    .align_y(Alignment::End)
    .padding(24)
    .into()
}

/// Modal with the full details of `project`. Clicking the backdrop closes it.
pub fn project_dialog<'a>(project: &'static Project) -> Element<'a, Message> {
    let mut actions = row![widgets::link("View Repository", project.repo_url)].spacing(12);
    if let Some(demo) = project.demo_url() {
        actions = actions.push(widgets::link("Live Demo", demo));
    }

    let tags = row(project.tags.iter().map(|tag| widgets::badge(tag, 1.0))).spacing(8);

    let dialog = container(
        column![
            row![
                text(project.title).size(28).font(bold()),
                iced::widget::horizontal_space(),
                widgets::hoverable(button(text("Close")).on_press(Message::CloseDetails).style(button::secondary)),
            ]
            .align_y(Alignment::Center),
            text(project.description),
            tags,
            actions,
        ]
        .spacing(16),
    )
    .width(560)
    .padding(24)
    .style(container::rounded_box);

    opaque(
        mouse_area(center(opaque(dialog)).style(|_theme: &Theme| {
            container::Style::default().background(Color {
                a: 0.8,
                ..Color::BLACK
            })
        }))
        .on_press(Message::CloseDetails),
    )
}
