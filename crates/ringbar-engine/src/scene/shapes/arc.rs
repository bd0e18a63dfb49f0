use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, PaintStyle};
use crate::scene::{DrawCmd, DrawList};

use super::ellipse_radius;

/// Arc draw payload.
///
/// The arc follows the ellipse inscribed in `rect`, starting at `start_deg`
/// and extending `sweep_deg` (clockwise when positive). A sweep of 360° or
/// more covers the full ellipse.
///
/// - `Stroke` draws a band along the arc
/// - `Fill` draws a wedge (pie slice) closed through the center
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub rect: Rect,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub paint: Paint,
    pub style: PaintStyle,
}

impl ArcCmd {
    #[inline]
    pub fn new(
        rect: Rect,
        start_deg: f32,
        sweep_deg: f32,
        paint: Paint,
        style: PaintStyle,
    ) -> Self {
        Self { rect, start_deg, sweep_deg, paint, style }
    }

    /// Returns true when `angle_deg` lies inside the swept range (inclusive).
    pub fn contains_angle(&self, angle_deg: f32) -> bool {
        if self.sweep_deg.abs() >= 360.0 {
            return true;
        }
        let rel = if self.sweep_deg >= 0.0 {
            (angle_deg - self.start_deg).rem_euclid(360.0)
        } else {
            (self.start_deg - angle_deg).rem_euclid(360.0)
        };
        rel <= self.sweep_deg.abs()
    }

    pub fn covers(&self, p: Vec2) -> bool {
        if self.rect.is_empty() || self.sweep_deg == 0.0 {
            return false;
        }
        let c = self.rect.center();
        let d = p - c;
        let r = ellipse_radius(self.rect, d);
        match self.style {
            PaintStyle::Stroke { width } => {
                (d.length() - r).abs() <= width * 0.5 && self.contains_angle(d.angle_deg())
            }
            PaintStyle::Fill => d.length() <= r && self.contains_angle(d.angle_deg()),
        }
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_stroke_arc(&mut self, rect: Rect, start_deg: f32, sweep_deg: f32, width: f32, paint: Paint) {
        self.push(DrawCmd::Arc(ArcCmd::new(
            rect,
            start_deg,
            sweep_deg,
            paint,
            PaintStyle::Stroke { width },
        )));
    }
}
