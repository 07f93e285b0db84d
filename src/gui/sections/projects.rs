use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::animation::{ElementId, StyleSheet};
use crate::content::{CATEGORIES, PROFILE};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets;
use crate::models::Project;
use crate::page::layout::PROJECTS_PER_ROW;
use crate::page::{Page, Section};

pub struct Projects;

fn project_card<'a>(index: usize, project: &'static Project, styles: &StyleSheet) -> Element<'a, Message> {
    let style = styles.get(&ElementId::indexed("projects.card", index));
    let tags = Row::with_children(project.tags.iter().map(|tag| widgets::badge(tag, style.opacity)))
        .spacing(6);
    widgets::card(
        column![
            widgets::label(project.title, 20.0, style.opacity),
            widgets::label(project.description, 14.0, style.opacity),
            tags,
            row![
                widgets::link("Code", project.repo_url),
                iced::widget::horizontal_space(),
                widgets::primary_button("Details", Message::OpenDetails(project.id)),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(12),
        style,
    )
}

impl SectionView for Projects {
    const SECTION: Section = Section::Projects;

    fn content<'a>(page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let active = page.filter().active();
        let tabs = Row::with_children(CATEGORIES.iter().map(|category| {
            let style = if category.id == active {
                button::primary
            } else {
                button::secondary
            };
            widgets::hoverable(
                button(text(category.label).size(14))
                    .on_press(Message::SelectCategory(category.id))
                    .style(style),
            )
        }))
        .spacing(8);

        let visible = page.visible_projects();
        let cards: Element<'a, Message> = match page.filter().notice() {
            Some(notice) => container(widgets::label(notice, 16.0, 1.0))
                .center_x(Length::Fill)
                .padding(48)
                .into(),
            None => visible
                .iter()
                .enumerate()
                .collect::<Vec<_>>()
                .chunks(PROJECTS_PER_ROW)
                .fold(Column::new().spacing(24), |grid, chunk| {
                    grid.push(
                        Row::with_children(
                            chunk.iter().map(|(i, project)| project_card(*i, *project, styles)),
                        )
                        .spacing(24),
                    )
                })
                .into(),
        };

        container(
            column![
                widgets::section_title("My Projects", styles.of("projects.title")),
                widgets::label(
                    "Here are some of the projects I've worked on. Check out my GitHub profile \
                     for more repositories and projects.",
                    16.0,
                    1.0,
                ),
                tabs,
                cards,
                widgets::link("View More on GitHub", PROFILE.repositories_url),
            ]
            .spacing(32)
            .align_x(Alignment::Center),
        )
        .padding([80.0, 0.0])
        .into()
    }
}
