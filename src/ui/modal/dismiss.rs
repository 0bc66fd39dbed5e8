// SPDX-License-Identifier: MPL-2.0
//! Outside-press classification for the modal.
//!
//! A press is tested by containment: inside the dialog surface or inside the
//! toggler keeps the modal open, anywhere else closes it.

use iced::advanced::mouse;
use iced::{touch, Event, Point, Rectangle};

/// Where a pointer-down landed relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// On the dialog itself.
    Surface,
    /// On the element that opens/closes the modal.
    Toggler,
    /// Anywhere else.
    Outside,
}

/// Classifies `point` against the dialog `surface` and the optional `toggler`.
#[must_use]
pub fn classify(point: Point, surface: Rectangle, toggler: Option<Rectangle>) -> PointerTarget {
    if surface.contains(point) {
        PointerTarget::Surface
    } else if toggler.is_some_and(|bounds| bounds.contains(point)) {
        PointerTarget::Toggler
    } else {
        PointerTarget::Outside
    }
}

/// Whether a press at `point` should close the modal.
#[must_use]
pub fn should_dismiss(point: Point, surface: Rectangle, toggler: Option<Rectangle>) -> bool {
    classify(point, surface, toggler) == PointerTarget::Outside
}

/// Position of a pointer-down event (mouse button or finger), if `event` is one.
///
/// A mouse press while the cursor position is unknown yields `None`.
#[must_use]
pub fn pressed_position(event: &Event, cursor: mouse::Cursor) -> Option<Point> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => cursor.position(),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(*position),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn surface() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 150.0))
    }

    fn toggler() -> Rectangle {
        Rectangle::new(Point::new(10.0, 10.0), Size::new(80.0, 40.0))
    }

    #[test]
    fn press_inside_surface_keeps_modal() {
        let point = Point::new(150.0, 150.0);
        assert_eq!(
            classify(point, surface(), Some(toggler())),
            PointerTarget::Surface
        );
        assert!(!should_dismiss(point, surface(), Some(toggler())));
    }

    #[test]
    fn press_inside_toggler_keeps_modal() {
        let point = Point::new(20.0, 20.0);
        assert_eq!(
            classify(point, surface(), Some(toggler())),
            PointerTarget::Toggler
        );
        assert!(!should_dismiss(point, surface(), Some(toggler())));
    }

    #[test]
    fn press_elsewhere_dismisses() {
        let point = Point::new(500.0, 500.0);
        assert!(should_dismiss(point, surface(), Some(toggler())));
        assert!(should_dismiss(point, surface(), None));
    }

    #[test]
    fn press_on_toggler_area_without_toggler_dismisses() {
        let point = Point::new(20.0, 20.0);
        assert!(should_dismiss(point, surface(), None));
    }

    #[test]
    fn mouse_press_uses_cursor_position() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(3.0, 4.0));
        assert_eq!(pressed_position(&event, cursor), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn mouse_press_without_cursor_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(pressed_position(&event, mouse::Cursor::Unavailable), None);
    }

    #[test]
    fn finger_press_uses_touch_position() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(7.0, 8.0),
        });
        assert_eq!(
            pressed_position(&event, mouse::Cursor::Unavailable),
            Some(Point::new(7.0, 8.0))
        );
    }

    #[test]
    fn other_events_are_not_presses() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(1.0, 1.0),
        });
        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(1.0, 1.0));

        assert_eq!(pressed_position(&moved, cursor), None);
        assert_eq!(pressed_position(&released, cursor), None);
    }
}
