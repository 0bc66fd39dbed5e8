// SPDX-License-Identifier: MPL-2.0
//! Demo page composing the modal and the snackbar queue.
//!
//! The page shows two buttons: `OPEN` toggles a login modal (and is its
//! toggler, so pressing it never counts as an outside press) and
//! `Add Snack` raises a success snackbar. The snackbar queue is not owned
//! here; it is handed in by the application on every update.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::modal::{self, anchored, Anchor};
use crate::ui::snackbar::{Snackbar, SnackbarQueue};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Message of the snackbar raised by `Add Snack`.
pub const DEMO_SNACKBAR_MESSAGE: &str = "Some testing";

/// Page state. The modal visibility lives here and is passed down.
#[derive(Debug, Default)]
pub struct State {
    modal_shown: bool,
    username: String,
    password: String,
    toggler: Anchor,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// `OPEN` was pressed.
    ToggleModal,
    /// Published by the modal; `false` on an outside press.
    SetModalShown(bool),
    /// `Add Snack` was pressed.
    AddSnackbar,
    UsernameChanged(String),
    PasswordChanged(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn modal_shown(&self) -> bool {
        self.modal_shown
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Handle to the `OPEN` button bounds.
    #[must_use]
    pub fn toggler(&self) -> &Anchor {
        &self.toggler
    }
}

/// Applies a page message. Snackbars are raised on the injected queue.
pub fn update(state: &mut State, message: Message, snackbars: &mut SnackbarQueue) {
    match message {
        Message::ToggleModal => {
            state.modal_shown = !state.modal_shown;
            tracing::debug!(shown = state.modal_shown, "modal toggled");
        }
        Message::SetModalShown(shown) => {
            if state.modal_shown != shown {
                tracing::debug!(shown, "modal visibility changed");
            }
            state.modal_shown = shown;
        }
        Message::AddSnackbar => match Snackbar::success(DEMO_SNACKBAR_MESSAGE) {
            Ok(snackbar) => {
                snackbars.add(snackbar);
            }
            Err(err) => tracing::warn!(%err, "demo snackbar rejected"),
        },
        Message::UsernameChanged(value) => state.username = value,
        Message::PasswordChanged(value) => state.password = value,
    }
}

/// Renders the page body: the two action buttons.
pub fn view(state: &State) -> Element<'_, Message> {
    let open = anchored(
        button(text("OPEN").size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::ToggleModal)
            .style(styles::button::primary),
        &state.toggler,
    );

    let add = button(text("Add Snack").size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::AddSnackbar)
        .style(styles::button::primary);

    let actions = Column::new().spacing(spacing::XS).push(open).push(add);

    Container::new(actions)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::page)
        .into()
}

/// Renders the modal layer, empty while the modal is hidden.
pub fn view_modal(state: &State) -> Element<'_, Message> {
    let title = Container::new(Text::new("Modal").size(typography::TITLE_MD))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let form = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(text("Username").size(typography::BODY))
        .push(
            text_input("", &state.username)
                .on_input(Message::UsernameChanged)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .push(text("Password").size(typography::BODY))
        .push(
            text_input("", &state.password)
                .on_input(Message::PasswordChanged)
                .secure(true)
                .padding(spacing::XS)
                .width(Length::Fill),
        );

    modal::dialog(
        state.modal_shown,
        form,
        Message::SetModalShown(false),
        Some(&state.toggler),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::SnackbarKind;

    #[test]
    fn open_button_toggles_modal() {
        let mut state = State::new();
        let mut queue = SnackbarQueue::default();

        update(&mut state, Message::ToggleModal, &mut queue);
        assert!(state.modal_shown());

        update(&mut state, Message::ToggleModal, &mut queue);
        assert!(!state.modal_shown());
    }

    #[test]
    fn outside_press_message_hides_modal() {
        let mut state = State::new();
        let mut queue = SnackbarQueue::default();

        update(&mut state, Message::ToggleModal, &mut queue);
        update(&mut state, Message::SetModalShown(false), &mut queue);
        assert!(!state.modal_shown());

        // Hiding an already hidden modal is a no-op
        update(&mut state, Message::SetModalShown(false), &mut queue);
        assert!(!state.modal_shown());
    }

    #[test]
    fn add_snack_enqueues_one_success_entry() {
        let mut state = State::new();
        let mut queue = SnackbarQueue::default();

        update(&mut state, Message::AddSnackbar, &mut queue);
        update(&mut state, Message::AddSnackbar, &mut queue);

        assert_eq!(queue.len(), 1);
        let (_, entry) = queue.iter().next().expect("entry should be queued");
        assert_eq!(entry.kind(), SnackbarKind::Success);
        assert_eq!(entry.message(), DEMO_SNACKBAR_MESSAGE);
    }

    #[test]
    fn inputs_update_form_fields() {
        let mut state = State::new();
        let mut queue = SnackbarQueue::default();

        update(
            &mut state,
            Message::UsernameChanged("alice".into()),
            &mut queue,
        );
        update(
            &mut state,
            Message::PasswordChanged("hunter2".into()),
            &mut queue,
        );

        assert_eq!(state.username(), "alice");
        assert_eq!(state.password(), "hunter2");
        assert!(queue.is_empty());
    }

    #[test]
    fn views_build_with_modal_hidden_and_shown() {
        let mut state = State::new();
        let mut queue = SnackbarQueue::default();
        let _ = view(&state);
        let _ = view_modal(&state);

        update(&mut state, Message::ToggleModal, &mut queue);
        let _ = view_modal(&state);
    }
}
