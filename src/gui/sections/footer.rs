use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Element, Length};

use crate::animation::StyleSheet;
use crate::content::{self, PROFILE, ROUTES, SOCIALS};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets::{self, bold};
use crate::page::{Page, Section};

pub struct Footer;

impl SectionView for Footer {
    const SECTION: Section = Section::Footer;

    fn content<'a>(_page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let style = styles.of("footer");
        let opacity = style.opacity;

        let brand = column![
            widgets::accent(PROFILE.full_name(), 22.0, opacity),
            widgets::label(PROFILE.blurb, 14.0, opacity),
            Row::with_children(
                SOCIALS
                    .iter()
                    .map(|social| widgets::link(social.network.label(), social.url)),
            )
            .spacing(8),
        ]
        .spacing(12)
        .width(Length::FillPortion(2));

        let quick_links = ROUTES
            .iter()
            .fold(Column::new().push(text("Quick Links").size(18).font(bold())), |col, route| {
                col.push(widgets::hoverable(
                    button(text(route.label).size(14))
                        .on_press(Message::Navigate(route.href))
                        .style(button::text),
                ))
            })
            .spacing(4)
            .width(Length::FillPortion(1));

        let reach = column![
            text("Contact").size(18).font(bold()),
            widgets::link(PROFILE.email, &PROFILE.mailto()),
            widgets::label(PROFILE.location, 14.0, opacity),
        ]
        .spacing(8)
        .width(Length::FillPortion(1));

        let copyright = content::copyright(content::current_year());

        widgets::shifted(
            container(
                column![
                    row![brand, quick_links, reach].spacing(40),
                    widgets::label(copyright, 13.0, opacity),
                ]
                .spacing(32),
            )
            .padding([48.0, 0.0]),
            style,
        )
    }
}
