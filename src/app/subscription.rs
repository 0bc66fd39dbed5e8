// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks, or `None` when nothing needs a clock.
///
/// Entries fading in need frame-rate ticks; otherwise ticks only have to be
/// frequent enough to expire entries on time.
pub fn tick_interval(has_snackbars: bool, is_animating: bool) -> Option<Duration> {
    match (has_snackbars, is_animating) {
        (false, _) => None,
        (true, true) => Some(motion::FRAME),
        (true, false) => Some(motion::IDLE_TICK),
    }
}

/// Creates a periodic tick subscription for snackbar expiry and fade-in.
pub fn create_tick_subscription(has_snackbars: bool, is_animating: bool) -> Subscription<Message> {
    match tick_interval(has_snackbars, is_animating) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ticks_without_snackbars() {
        assert_eq!(tick_interval(false, false), None);
        assert_eq!(tick_interval(false, true), None);
    }

    #[test]
    fn fading_entries_tick_at_frame_rate() {
        assert_eq!(tick_interval(true, true), Some(motion::FRAME));
    }

    #[test]
    fn settled_entries_tick_slowly() {
        assert_eq!(tick_interval(true, false), Some(motion::IDLE_TICK));
    }
}
