use iced::widget::{Row, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::animation::{ElementId, StyleSheet};
use crate::content::{PROFILE, SOCIALS};
use crate::gui::Message;
use crate::gui::sections::SectionView;
use crate::gui::widgets::{self, bold, faded};
use crate::page::{Page, Section, layout};

const PORTRAIT_SIZE: f32 = 320.0;

pub struct Hero;

impl SectionView for Hero {
    const SECTION: Section = Section::Hero;

    fn content<'a>(_page: &'a Page, styles: &StyleSheet) -> Element<'a, Message> {
        let greeting = styles.get(&ElementId::indexed("hero.title", 0));
        let name = styles.get(&ElementId::indexed("hero.title", 1));
        let subtitle = styles.of("hero.subtitle");
        let description = styles.of("hero.description");
        let buttons = styles.of("hero.buttons");

        let title = column![
            widgets::shifted(
                text("Hi, I'm").size(56).font(bold()).style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, greeting.opacity)),
                }),
                greeting,
            ),
            widgets::shifted(widgets::accent(PROFILE.full_name(), 56.0, name.opacity), name),
        ];

        let socials = Row::with_children(SOCIALS.iter().enumerate().map(|(i, social)| {
            let style = styles.get(&ElementId::indexed("hero.social", i));
            widgets::shifted(widgets::link(social.network.label(), social.url), style)
        }))
        .spacing(8);

        let left = column![
            title,
            widgets::shifted(widgets::label(PROFILE.role, 24.0, subtitle.opacity), subtitle),
            widgets::shifted(widgets::label(PROFILE.headline, 16.0, description.opacity), description),
            widgets::shifted(
                row![
                    widgets::primary_button("View Projects", Message::Navigate("#projects")),
                    widgets::outline_button("Contact Me", Message::Navigate("#contact")),
                ]
                .spacing(16),
                buttons,
            ),
            socials,
        ]
        .spacing(20)
        .width(Length::FillPortion(1));

        let portrait = styles.of("hero.portrait");
        let float = styles.of("hero.float");
        let size = PORTRAIT_SIZE * portrait.scale;
        let initials = format!(
            "{}{}",
            PROFILE.first_name.chars().next().unwrap_or_default(),
            PROFILE.last_name.chars().next().unwrap_or_default()
        );
        let disc = container(widgets::accent(initials, 72.0, portrait.opacity))
            .center(size)
            .style(move |theme: &Theme| {
                let primary = theme.palette().primary;
                container::Style::default()
                    .background(faded(primary, 0.15 * portrait.opacity))
                    .border(Border {
                        color: faded(primary, 0.3 * portrait.opacity),
                        width: 4.0,
                        radius: (size / 2.0).into(),
                    })
            });
        let right = container(widgets::shifted(disc, float)).center_x(Length::FillPortion(1));

        container(
            row![left, right]
                .spacing(48)
                .align_y(Alignment::Center),
        )
        .padding([layout::NAV_HEIGHT + 16.0, 0.0])
        .center_y(Length::Fill)
        .into()
    }
}
