use iced::widget::{Column, Row, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::animation::{ElementId, StyleSheet};
use crate::content::{PROFILE, SOCIALS, WORKING_HOURS};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets;
use crate::page::{ContactField, Page, Section};

pub struct Contact;

fn field<'a>(page: &'a Page, field: ContactField, opacity: f32) -> Element<'a, Message> {
    column![
        widgets::label(field.label(), 14.0, opacity),
        widgets::hoverable(
            text_input(field.placeholder(), page.contact().get(field))
                .on_input(move |value| Message::ContactInput(field, value))
                .padding(10),
        ),
    ]
    .spacing(6)
    .into()
}

impl SectionView for Contact {
    const SECTION: Section = Section::Contact;

    fn content<'a>(page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let form_style = styles.of("contact.form");
        let opacity = form_style.opacity;
        let form = widgets::shifted(
            column![
                row![
                    field(page, ContactField::Name, opacity),
                    field(page, ContactField::Email, opacity),
                ]
                .spacing(16),
                field(page, ContactField::Subject, opacity),
                field(page, ContactField::Message, opacity),
                widgets::hoverable(
                    button(text("Send Message"))
                        .width(Length::Fill)
                        .padding(12)
                        .on_press(Message::SubmitContact)
                        .style(button::primary),
                ),
            ]
            .spacing(20)
            .width(Length::FillPortion(1)),
            form_style,
        );

        let card_style = |i: usize| styles.get(&ElementId::indexed("contact.info", i));
        let socials = Row::with_children(SOCIALS.iter().enumerate().map(|(i, social)| {
            let style = styles.get(&ElementId::indexed("contact.social", i));
            widgets::shifted(widgets::link(social.network.label(), social.url), style)
        }))
        .spacing(8);
        let hours = WORKING_HOURS.iter().fold(Column::new().spacing(6), |col, slot| {
            col.push(widgets::info_row(slot.days, slot.hours, card_style(3).opacity))
        });

        let info = column![
            widgets::card(
                column![
                    widgets::accent("Email", 16.0, card_style(0).opacity),
                    widgets::link(PROFILE.email, &PROFILE.mailto()),
                ]
                .spacing(4),
                card_style(0),
            ),
            widgets::card(
                widgets::info_row("Location", PROFILE.location, card_style(1).opacity),
                card_style(1),
            ),
            widgets::card(
                column![
                    widgets::accent("Connect with me", 16.0, card_style(2).opacity),
                    socials,
                ]
                .spacing(8),
                card_style(2),
            ),
            widgets::card(
                column![
                    widgets::accent("Working Hours", 16.0, card_style(3).opacity),
                    hours,
                ]
                .spacing(8),
                card_style(3),
            ),
        ]
        .spacing(20)
        .width(Length::FillPortion(1));

        container(
            column![
                widgets::section_title("Contact Me", styles.of("contact.title")),
                widgets::label(
                    "Feel free to reach out to me for collaboration, job opportunities, or just \
                     to say hello! I'm always interested in new projects and connections.",
                    16.0,
                    1.0,
                ),
                row![form, info].spacing(40).align_y(Alignment::Start),
            ]
            .spacing(40)
            .align_x(Alignment::Center),
        )
        .padding([80.0, 0.0])
        .into()
    }
}
