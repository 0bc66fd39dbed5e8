// SPDX-License-Identifier: MPL-2.0
//! Bounds tracking for elements that live outside the modal.
//!
//! An [`Anchor`] is a cheap, cloneable handle to the last known bounds of an
//! element. Wrapping that element with [`anchored`] keeps the handle current;
//! the modal reads it to exempt presses on its toggler from dismissal.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the bounds of an anchored element.
#[derive(Debug, Clone, Default)]
pub struct Anchor {
    bounds: Rc<Cell<Option<Rectangle>>>,
}

impl Anchor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds recorded during the latest draw or event pass.
    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds.get()
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().is_some_and(|bounds| bounds.contains(point))
    }

    pub fn record(&self, bounds: Rectangle) {
        self.bounds.set(Some(bounds));
    }

    /// Forgets the bounds, e.g. when the anchored element is no longer shown.
    pub fn clear(&self) {
        self.bounds.set(None);
    }
}

/// Wraps content and records its bounds into an [`Anchor`].
pub struct Anchored<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    anchor: Anchor,
}

impl<'a, Message, Theme, Renderer> Anchored<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        anchor: &Anchor,
    ) -> Self {
        Self {
            content: content.into(),
            anchor: anchor.clone(),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Anchored<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.anchor.record(layout.bounds());

        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // Layout may have moved since the last frame
        self.anchor.record(layout.bounds());

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Anchored<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(anchored: Anchored<'a, Message, Theme, Renderer>) -> Self {
        Self::new(anchored)
    }
}

/// Wraps `content` so that `anchor` always holds its current bounds.
pub fn anchored<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    anchor: &Anchor,
) -> Anchored<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Anchored::new(content, anchor)
}
