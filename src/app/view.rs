// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of three layers: the page, the snackbar list and
//! the modal. The modal is last so it receives the real cursor position for
//! every press.

use super::Message;
use crate::ui::page;
use crate::ui::snackbar::{self, SnackbarQueue};
use iced::widget::Stack;
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a page::State,
    pub snackbars: &'a SnackbarQueue,
    pub now: Instant,
}

/// Renders every layer of the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_layer = page::view(ctx.page).map(Message::Page);
    let snackbar_layer = snackbar::list::view(ctx.snackbars, ctx.now).map(Message::Snackbar);
    let modal_layer = page::view_modal(ctx.page).map(Message::Page);

    Stack::new()
        .push(page_layer)
        .push(snackbar_layer)
        .push(modal_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
