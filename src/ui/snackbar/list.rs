// SPDX-License-Identifier: MPL-2.0
//! Snackbar list rendering.
//!
//! The list is drawn as a full-window layer anchored to the bottom-left
//! corner, oldest entry on top. Each entry is a button: an accent strip with
//! the kind's icon followed by the message. Pressing it dismisses the entry.

use super::kind::SnackbarKind;
use super::queue::{Message, QueuedSnackbar, SnackbarQueue};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, scrollable, svg, text, Column, Container, Row, Svg};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use std::time::Instant;

/// Renders the whole list. `now` drives the fade-in of fresh entries.
pub fn view(queue: &SnackbarQueue, now: Instant) -> Element<'_, Message> {
    let entries: Vec<Element<'_, Message>> = queue
        .entries()
        .map(|entry| view_entry(entry, now))
        .collect();

    if entries.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(entries)
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::SNACKBAR_LIST_WIDTH));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

/// Renders a single snackbar.
fn view_entry(entry: QueuedSnackbar<'_>, now: Instant) -> Element<'_, Message> {
    let snackbar = entry.snackbar();
    let kind = snackbar.kind();
    let alpha = entry.appearance(now);

    let icon = icons::sized(kind_icon(kind), sizing::ICON_LG).style(
        move |_theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(faded(palette::WHITE, alpha)),
        },
    );

    let strip = Container::new(icon)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| strip_style(kind.color(), alpha));

    let message = Container::new(scrollable(text(snackbar.message()).size(typography::BODY)))
        .padding([spacing::XS, spacing::XS])
        .width(Length::Fill)
        .max_height(sizing::SNACKBAR_MAX_HEIGHT);

    let content = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(strip)
        .push(message);

    button(content)
        .on_press(Message::Dismiss(entry.key().clone()))
        .padding(0)
        .width(Length::Fill)
        .style(move |theme: &Theme, status: button::Status| entry_style(theme, status, alpha))
        .into()
}

/// Icon shown for a kind.
fn kind_icon<'a>(kind: SnackbarKind) -> Svg<'a> {
    match kind {
        SnackbarKind::Info => icons::info(),
        SnackbarKind::Success => icons::checkmark(),
        SnackbarKind::Attention => icons::warning(),
        SnackbarKind::Failed => icons::close_circle(),
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn faded_shadow(base: Shadow, alpha: f32) -> Shadow {
    Shadow {
        color: faded(Color { a: 0.3, ..base.color }, alpha),
        ..base
    }
}

/// Style of the colored icon strip.
fn strip_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(accent, alpha))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style of the clickable entry surface.
fn entry_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let surface = theme.extended_palette().background.base.color;
    let text_color = faded(theme.palette().text, alpha);

    let elevation = match status {
        button::Status::Hovered | button::Status::Pressed => shadow::LG,
        button::Status::Active | button::Status::Disabled => shadow::MD,
    };

    button::Style {
        background: Some(Background::Color(faded(surface, alpha))),
        text_color,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: faded_shadow(elevation, alpha),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::Snackbar;

    #[test]
    fn strip_style_uses_kind_color() {
        let style = strip_style(SnackbarKind::Failed.color(), 1.0);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn entry_style_fades_with_appearance() {
        let theme = Theme::Dark;
        let hidden = entry_style(&theme, button::Status::Active, 0.0);
        let shown = entry_style(&theme, button::Status::Active, 1.0);

        assert_eq!(hidden.text_color.a, 0.0);
        assert_eq!(shown.text_color.a, theme.palette().text.a);
    }

    #[test]
    fn hover_raises_elevation() {
        let theme = Theme::Light;
        let active = entry_style(&theme, button::Status::Active, 1.0);
        let hovered = entry_style(&theme, button::Status::Hovered, 1.0);
        assert!(hovered.shadow.blur_radius > active.shadow.blur_radius);
    }

    #[test]
    fn every_kind_has_an_icon() {
        for kind in SnackbarKind::ALL {
            let _ = kind_icon(kind);
        }
    }

    #[test]
    fn view_renders_empty_and_filled_queues() {
        let mut queue = SnackbarQueue::default();
        let now = Instant::now();
        let _ = view(&queue, now);

        queue.add_at(Snackbar::info("Hello").unwrap(), now);
        queue.add_at(Snackbar::failed("Broken").unwrap(), now);
        let _ = view(&queue, now);
    }
}
