use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme, border, font};

use crate::animation::Style;
use crate::gui::Message;

pub const SECTION_PADDING: f32 = 48.0;

pub fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// `color` with its alpha scaled by an animated opacity.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Text tinted by the theme's text colour, faded by `opacity`.
pub fn label<'a>(content: impl text::IntoFragment<'a>, size: f32, opacity: f32) -> Element<'a, Message> {
    text(content)
        .size(size)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, opacity)),
        })
        .into()
}

pub fn accent<'a>(content: impl text::IntoFragment<'a>, size: f32, opacity: f32) -> Element<'a, Message> {
    text(content)
        .size(size)
        .font(bold())
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().primary, opacity)),
        })
        .into()
}

/// Moves `content` by the style's x/y offset. Offsets push the content away
/// from its resting place with padding, so the layout around it stays put.
pub fn shifted<'a>(content: impl Into<Element<'a, Message>>, style: Style) -> Element<'a, Message> {
    let padding = Padding {
        top: style.y.max(0.0),
        bottom: (-style.y).max(0.0),
        left: style.x.max(0.0),
        right: (-style.x).max(0.0),
    };
    container(content).padding(padding).into()
}

/// Section heading with its underline bar, driven by one element style.
pub fn section_title<'a>(title: &'a str, style: Style) -> Element<'a, Message> {
    let underline = container(text(""))
        .width(80)
        .height(4)
        .style(move |theme: &Theme| {
            container::Style::default().background(faded(theme.palette().primary, style.opacity))
        });
    shifted(
        column![
            text(title).size(36).font(bold()).style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, style.opacity)),
            }),
            underline,
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
        style,
    )
}

fn card_style(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style::default()
            .background(faded(palette.background.weak.color, opacity))
            .border(Border {
                color: faded(palette.background.strong.color, opacity),
                width: 1.0,
                radius: 12.0.into(),
            })
    }
}

/// Rounded panel faded by `style` and moved by its offset.
pub fn card<'a>(content: impl Into<Element<'a, Message>>, style: Style) -> Element<'a, Message> {
    shifted(
        container(content)
            .padding(20)
            .width(Length::Fill)
            .style(card_style(style.opacity)),
        style,
    )
}

pub fn badge<'a>(content: &'a str, opacity: f32) -> Element<'a, Message> {
    container(label(content, 12.0, opacity))
        .padding([2, 10])
        .style(move |theme: &Theme| {
            container::Style::default()
                .background(Background::Color(faded(theme.palette().primary, 0.15 * opacity)))
                .border(border::rounded(999.0))
        })
        .into()
}

/// Reports pointer enter/leave so the cursor follower can react.
pub fn hoverable<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    mouse_area(content)
        .on_enter(Message::Hover(true))
        .on_exit(Message::Hover(false))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

pub fn primary_button<'a>(content: &'a str, on_press: Message) -> Element<'a, Message> {
    hoverable(button(text(content)).padding([10, 24]).on_press(on_press).style(button::primary))
}

pub fn outline_button<'a>(content: &'a str, on_press: Message) -> Element<'a, Message> {
    hoverable(
        button(text(content))
            .padding([10, 24])
            .on_press(on_press)
            .style(button::secondary),
    )
}

/// Link that leaves the page.
pub fn link<'a>(content: &'a str, url: &str) -> Element<'a, Message> {
    hoverable(
        button(text(content).size(14))
            .on_press(Message::OpenLink(url.to_string()))
            .style(button::text),
    )
}

/// Caption and value pair used by the contact info cards.
pub fn info_row<'a>(caption: &'a str, value: &'a str, opacity: f32) -> Element<'a, Message> {
    row![
        accent(caption, 14.0, opacity),
        label(value, 14.0, opacity),
    ]
    .spacing(12)
    .into()
}
