use ringbar_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// The trait every drawable component implements.
///
/// The host owns layout and lifecycle: it measures the widget, hands it a
/// rect, and asks it to paint into a [`Painter`].
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Record draw commands for this widget within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
