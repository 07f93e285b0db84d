use iced::widget::{Column, Row, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::animation::{ElementId, StyleSheet};
use crate::content::{EXPERIENCES, PROFILE, STATS};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets::{self, bold};
use crate::page::{Page, Section};

pub struct About;

impl SectionView for About {
    const SECTION: Section = Section::About;

    fn content<'a>(_page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let intro = styles.of("about.text");

        let journey = PROFILE
            .journey
            .iter()
            .fold(Column::new().push(text("My Journey").size(22).font(bold())), |col, paragraph| {
                col.push(widgets::label(*paragraph, 15.0, 1.0))
            })
            .push(widgets::outline_button("Let's Talk", Message::Navigate("#contact")))
            .spacing(16)
            .width(Length::FillPortion(1));

        let experience = EXPERIENCES
            .iter()
            .enumerate()
            .fold(Column::new().push(text("Experience").size(22).font(bold())), |col, (i, exp)| {
                let style = styles.get(&ElementId::indexed("about.card", i));
                col.push(widgets::card(
                    column![
                        widgets::accent(exp.period, 13.0, style.opacity),
                        widgets::label(exp.title, 18.0, style.opacity),
                        widgets::label(exp.description, 14.0, style.opacity),
                    ]
                    .spacing(6),
                    style,
                ))
            })
            .spacing(16)
            .width(Length::FillPortion(1));

        let stats = Row::with_children(STATS.iter().map(|stat| {
            column![
                widgets::accent(stat.value, 32.0, 1.0),
                widgets::label(stat.label, 14.0, 1.0),
            ]
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
        }));

        container(
            column![
                widgets::section_title("About Me", styles.of("about.title")),
                widgets::shifted(widgets::label(PROFILE.about, 17.0, intro.opacity), intro),
                row![journey, experience].spacing(48),
                stats,
            ]
            .spacing(40)
            .align_x(Alignment::Center),
        )
        .padding([80.0, 0.0])
        .into()
    }
}
