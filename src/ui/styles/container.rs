// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Raised dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_secondary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..shadow::LG.color
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Flat page background behind every layer.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_raised_above_the_page() {
        let theme = Theme::Dark;
        let dialog = dialog(&theme);
        let page = page(&theme);

        assert!(dialog.shadow.blur_radius > page.shadow.blur_radius);
        assert_ne!(dialog.background, page.background);
    }
}
