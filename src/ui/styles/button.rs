// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Filled brand button, used for the main page actions.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge, elevation) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::NONE)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            palette::WHITE
        },
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_is_lighter_and_raised() {
        let theme = Theme::Light;
        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);

        assert_eq!(
            active.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::PRIMARY_400))
        );
        assert!(hovered.shadow.blur_radius > active.shadow.blur_radius);
    }

    #[test]
    fn disabled_primary_is_grayed_out() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
