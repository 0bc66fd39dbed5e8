// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::page;
use crate::ui::snackbar::{self, SnackbarQueue};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub page: &'a mut page::State,
    pub snackbars: &'a mut SnackbarQueue,
    pub now: &'a mut Instant,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Page(page_message) => handle_page_message(ctx, page_message),
        Message::Snackbar(snackbar_message) => handle_snackbar_message(ctx, snackbar_message),
        Message::Tick(instant) => handle_tick(ctx, instant),
    }
}

fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    page::update(ctx.page, message, ctx.snackbars);
    Task::none()
}

fn handle_snackbar_message(
    ctx: &mut UpdateContext<'_>,
    message: snackbar::Message,
) -> Task<Message> {
    ctx.snackbars.handle_message(&message);
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) -> Task<Message> {
    *ctx.now = instant;
    ctx.snackbars
        .handle_message(&snackbar::Message::Tick(instant));
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::{Snackbar, SnackbarSettings};
    use std::time::Duration;

    struct Fixture {
        page: page::State,
        snackbars: SnackbarQueue,
        now: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                page: page::State::new(),
                snackbars: SnackbarQueue::new(SnackbarSettings::new(5, 1000)),
                now: Instant::now(),
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                page: &mut self.page,
                snackbars: &mut self.snackbars,
                now: &mut self.now,
            };
            let _ = update(&mut ctx, message);
        }
    }

    #[test]
    fn page_messages_reach_the_injected_queue() {
        let mut fixture = Fixture::new();
        fixture.send(Message::Page(page::Message::AddSnackbar));
        assert_eq!(fixture.snackbars.len(), 1);
    }

    #[test]
    fn dismiss_removes_the_snackbar() {
        let mut fixture = Fixture::new();
        let snackbar = Snackbar::info("Hello").expect("valid snackbar");
        let key = snackbar.key();
        fixture.snackbars.add_at(snackbar, fixture.now);

        fixture.send(Message::Snackbar(snackbar::Message::Dismiss(key.clone())));

        assert!(!fixture.snackbars.contains(&key));
    }

    #[test]
    fn tick_advances_clock_and_expires_due_entries() {
        let mut fixture = Fixture::new();
        let start = fixture.now;
        fixture
            .snackbars
            .add_at(Snackbar::info("Hello").expect("valid snackbar"), start);

        let early = start + Duration::from_millis(500);
        fixture.send(Message::Tick(early));
        assert_eq!(fixture.now, early);
        assert_eq!(fixture.snackbars.len(), 1);

        let late = start + Duration::from_millis(1000);
        fixture.send(Message::Tick(late));
        assert_eq!(fixture.now, late);
        assert!(fixture.snackbars.is_empty());
    }
}
