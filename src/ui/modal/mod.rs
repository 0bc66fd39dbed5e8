// SPDX-License-Identifier: MPL-2.0
//! Modal dialog that closes when the user presses outside of it.
//!
//! The dialog is rendered as its own full-window layer, centered, on top of
//! the page. Presses inside the dialog or on its toggler keep it open; any
//! other press publishes the caller's dismiss message. Nothing else is
//! tracked: the modal is shown exactly when the caller says so.
//!
//! # Components
//!
//! - [`dismiss`] - pure hit classification of pointer presses
//! - [`anchor`] - `Anchor` handle recording the toggler's bounds
//! - [`surface`] - the `Modal` widget that watches presses
//!
//! # Usage
//!
//! ```ignore
//! let toggler = anchored(button("OPEN").on_press(Message::Toggle), &self.anchor);
//! let layer = modal::dialog(self.shown, form, Message::Close, Some(&self.anchor));
//! stack![page_with(toggler), layer]
//! ```

pub mod anchor;
pub mod dismiss;
pub mod surface;

pub use anchor::{anchored, Anchor, Anchored};
pub use dismiss::PointerTarget;
pub use surface::Modal;

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::Container;
use iced::{alignment, Element, Length};

/// Builds the modal layer.
///
/// When `show` is false this is an empty, zero-sized element, so no press
/// listener exists. Otherwise `content` is wrapped in a dialog surface,
/// centered in the window, and `on_dismiss` is published for every press
/// that lands outside both the surface and `toggler`.
pub fn dialog<'a, Message>(
    show: bool,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
    toggler: Option<&Anchor>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    if !show {
        return Container::new(iced::widget::text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let surface = Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .style(styles::container::dialog);

    let mut modal = Modal::new(surface, on_dismiss);
    if let Some(anchor) = toggler {
        modal = modal.toggler(anchor);
    }

    Container::new(modal)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[derive(Debug, Clone)]
    enum Message {
        Close,
    }

    #[test]
    fn hidden_and_shown_dialogs_build() {
        let anchor = Anchor::new();
        let _hidden: Element<'_, Message> = dialog(false, text("body"), Message::Close, None);
        let _shown: Element<'_, Message> =
            dialog(true, text("body"), Message::Close, Some(&anchor));
    }
}
