use iced::widget::{Column, Row, column, container, progress_bar, text};
use iced::{Alignment, Element, Length};

use crate::animation::{ElementId, StyleSheet};
use crate::content::{PRINCIPLES, SKILLS};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets::{self, bold};
use crate::models::Skill;
use crate::page::layout::SKILLS_PER_ROW;
use crate::page::{Page, Section};

pub struct Skills;

fn skill_card<'a>(index: usize, skill: &'static Skill, styles: &StyleSheet) -> Element<'a, Message> {
    let style = styles.get(&ElementId::indexed("skills.card", index));
    let bar = styles.get(&ElementId::indexed("skills.bar", index));
    widgets::card(
        column![
            widgets::label(skill.name, 18.0, style.opacity),
            progress_bar(0.0..=100.0, f32::from(skill.level) * bar.width).height(10),
            widgets::label(format!("{}%", skill.level), 13.0, style.opacity),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
        style,
    )
}

impl SectionView for Skills {
    const SECTION: Section = Section::Skills;

    fn content<'a>(_page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let grid = SKILLS
            .iter()
            .enumerate()
            .collect::<Vec<_>>()
            .chunks(SKILLS_PER_ROW)
            .fold(Column::new().spacing(24), |grid, chunk| {
                grid.push(
                    Row::with_children(
                        chunk.iter().map(|(i, skill)| skill_card(*i, *skill, styles)),
                    )
                    .spacing(24),
                )
            });

        let principles = Row::with_children(PRINCIPLES.iter().map(|principle| {
            column![
                text(principle.title).size(18).font(bold()),
                widgets::label(principle.description, 14.0, 1.0),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
        }))
        .spacing(32);

        container(
            column![
                widgets::section_title("My Skills", styles.of("skills.title")),
                widgets::label(
                    "Here are the technologies and programming languages I work with. \
                     I'm constantly learning and adding new skills to my repertoire.",
                    16.0,
                    1.0,
                ),
                grid,
                widgets::card(
                    column![text("My Coding Philosophy").size(22).font(bold()), principles]
                        .spacing(24)
                        .align_x(Alignment::Center),
                    Default::default(),
                ),
            ]
            .spacing(40)
            .align_x(Alignment::Center),
        )
        .padding([80.0, 0.0])
        .into()
    }
}
