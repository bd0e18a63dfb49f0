//! Ring composition: picks which primitives to draw for a sweep angle and in
//! which order, so the caps overlap correctly.

use ringbar_engine::coords::Affine;
use ringbar_engine::paint::{Color, Paint, PaintStyle, SweepGradient, blend};
use ringbar_engine::scene::DrawCmd;
use ringbar_engine::scene::shapes::{ArcCmd, OvalCmd};

use crate::config::RingConfig;
use crate::geometry::RingGeometry;

/// Start cap wedge: from 10° back through 0° to -190°. The extra 20° past a
/// half turn hides the seam between the cap and the arc.
pub const START_CAP_START_DEG: f32 = 10.0;
pub const START_CAP_SWEEP_DEG: f32 = -200.0;

/// End cap wedge: the leading half of the cap circle.
pub const END_CAP_START_DEG: f32 = 0.0;
pub const END_CAP_SWEEP_DEG: f32 = 180.0;

/// Sweeps at or past this angle draw the start cap before the end-cap disc.
pub const LONG_SWEEP_DEG: f32 = 180.0;

// ── RingPart ──────────────────────────────────────────────────────────────

/// Role of a primitive within the ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RingPart {
    /// Full background circle in the track color.
    Track,
    /// Gradient-stroked arc from 0° to the sweep.
    GradientArc,
    /// Gradient disc under the end cap, rotated to the sweep.
    EndCapDisc,
    /// Solid start cap at 0°.
    StartCap,
    /// Solid end cap at the sweep, in the blended leading-edge color.
    EndCap,
}

// ── DrawPhase ─────────────────────────────────────────────────────────────

/// Draw-order state derived from the sweep angle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawPhase {
    /// `sweep == 0`: track only.
    Empty,
    /// `0 < sweep < 180`: the end-cap disc goes under the start cap.
    Short,
    /// `sweep >= 180`: the end-cap disc goes over the start cap.
    Long,
}

impl DrawPhase {
    pub fn from_sweep(sweep_deg: f32) -> Self {
        if sweep_deg <= 0.0 {
            DrawPhase::Empty
        } else if sweep_deg < LONG_SWEEP_DEG {
            DrawPhase::Short
        } else {
            DrawPhase::Long
        }
    }

    /// Parts to draw, back to front.
    pub fn parts(self) -> &'static [RingPart] {
        use RingPart::*;
        match self {
            DrawPhase::Empty => &[Track],
            DrawPhase::Short => &[Track, GradientArc, EndCapDisc, StartCap, EndCap],
            DrawPhase::Long => &[Track, GradientArc, StartCap, EndCapDisc, EndCap],
        }
    }
}

// ── RingPrimitive ─────────────────────────────────────────────────────────

/// One draw command plus its widget-space transform.
#[derive(Debug, Clone, PartialEq)]
pub struct RingPrimitive {
    pub part: RingPart,
    pub cmd: DrawCmd,
    pub transform: Affine,
}

// ── ArcComposer ───────────────────────────────────────────────────────────

/// Colors and presentation rotation used for every composition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStyle {
    pub start_color: Color,
    pub end_color: Color,
    pub track_color: Color,
    pub rotation_offset_deg: f32,
}

impl From<&RingConfig> for RingStyle {
    fn from(c: &RingConfig) -> Self {
        Self {
            start_color: c.start_color,
            end_color: c.end_color,
            track_color: c.border_background,
            rotation_offset_deg: c.rotation_offset_deg,
        }
    }
}

/// Turns `(sweep, geometry)` into an ordered primitive list.
///
/// Pure: equal inputs always produce equal output.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcComposer {
    style: RingStyle,
}

impl ArcComposer {
    pub fn new(style: RingStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &RingStyle {
        &self.style
    }

    /// Color of the ring at the sweep's leading edge.
    #[inline]
    pub fn leading_color(&self, sweep_deg: f32) -> Color {
        blend(self.style.start_color, self.style.end_color, sweep_deg / 360.0)
    }

    pub fn compose(&self, sweep_deg: f32, geo: &RingGeometry) -> Vec<RingPrimitive> {
        let phase = DrawPhase::from_sweep(sweep_deg);
        let center = geo.center();

        // Offset first, sweep rotation inside it.
        let base = Affine::rotation_about(self.style.rotation_offset_deg, center);
        let swept = base.rotated_about(sweep_deg, center);
        let gradient = SweepGradient::new(center, self.style.start_color, self.style.end_color);

        log::trace!("compose: sweep={sweep_deg:.2} phase={phase:?}");

        phase
            .parts()
            .iter()
            .map(|&part| {
                let (cmd, transform) = match part {
                    RingPart::Track => (
                        DrawCmd::Arc(ArcCmd::new(
                            geo.ring_rect,
                            0.0,
                            360.0,
                            Paint::Solid(self.style.track_color),
                            PaintStyle::Stroke { width: geo.stroke_width },
                        )),
                        base,
                    ),
                    RingPart::GradientArc => (
                        DrawCmd::Arc(ArcCmd::new(
                            geo.ring_rect,
                            0.0,
                            sweep_deg,
                            Paint::SweepGradient(gradient),
                            PaintStyle::Stroke { width: geo.stroke_width },
                        )),
                        base,
                    ),
                    RingPart::StartCap => (
                        DrawCmd::Arc(ArcCmd::new(
                            geo.cap_rect,
                            START_CAP_START_DEG,
                            START_CAP_SWEEP_DEG,
                            Paint::Solid(self.style.start_color),
                            PaintStyle::Fill,
                        )),
                        base,
                    ),
                    RingPart::EndCapDisc => (
                        // Counter-rotate the gradient so it stays fixed to the ring.
                        DrawCmd::Oval(OvalCmd::new(
                            geo.cap_rect,
                            Paint::SweepGradient(gradient.with_rotation(-sweep_deg)),
                            PaintStyle::Fill,
                        )),
                        swept,
                    ),
                    RingPart::EndCap => (
                        DrawCmd::Arc(ArcCmd::new(
                            geo.cap_rect,
                            END_CAP_START_DEG,
                            END_CAP_SWEEP_DEG,
                            Paint::Solid(self.leading_color(sweep_deg)),
                            PaintStyle::Fill,
                        )),
                        swept,
                    ),
                };
                RingPrimitive { part, cmd, transform }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringbar_engine::coords::{Rect, Vec2};

    fn style() -> RingStyle {
        RingStyle {
            start_color: Color::from_argb(0xFF00_0000),
            end_color: Color::from_argb(0xFF00_00FF),
            track_color: Color::LIGHT_GRAY,
            rotation_offset_deg: 0.0,
        }
    }

    fn geo() -> RingGeometry {
        RingGeometry::new(Rect::new(0.0, 0.0, 100.0, 100.0), 8.0)
    }

    fn parts(sweep: f32) -> Vec<RingPart> {
        ArcComposer::new(style()).compose(sweep, &geo()).iter().map(|p| p.part).collect()
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[test]
    fn zero_sweep_draws_track_only() {
        assert_eq!(parts(0.0), vec![RingPart::Track]);
    }

    #[test]
    fn short_sweep_puts_disc_under_start_cap() {
        use RingPart::*;
        assert_eq!(parts(90.0), vec![Track, GradientArc, EndCapDisc, StartCap, EndCap]);
        assert_eq!(parts(179.9), vec![Track, GradientArc, EndCapDisc, StartCap, EndCap]);
    }

    #[test]
    fn long_sweep_puts_disc_over_start_cap() {
        use RingPart::*;
        assert_eq!(parts(270.0), vec![Track, GradientArc, StartCap, EndCapDisc, EndCap]);
        assert_eq!(parts(180.0), vec![Track, GradientArc, StartCap, EndCapDisc, EndCap]);
        assert_eq!(parts(359.0), vec![Track, GradientArc, StartCap, EndCapDisc, EndCap]);
    }

    #[test]
    fn end_cap_is_always_last() {
        for sweep in [1.0, 45.0, 180.0, 300.0] {
            assert_eq!(parts(sweep).last(), Some(&RingPart::EndCap));
        }
    }

    // ── primitive contracts ───────────────────────────────────────────────

    #[test]
    fn gradient_arc_spans_the_sweep() {
        let prims = ArcComposer::new(style()).compose(90.0, &geo());
        let DrawCmd::Arc(arc) = &prims[1].cmd else { panic!("expected arc") };
        assert_eq!(arc.start_deg, 0.0);
        assert_eq!(arc.sweep_deg, 90.0);
        assert_eq!(arc.style, PaintStyle::Stroke { width: 8.0 });
        let expected = SweepGradient::new(geo().center(), style().start_color, style().end_color);
        assert_eq!(arc.paint, Paint::SweepGradient(expected));
        let Paint::SweepGradient(grad) = &arc.paint else { unreachable!() };
        assert_eq!(grad.rotation_deg, 0.0);
    }

    #[test]
    fn gradient_is_centered_on_offset_ring() {
        let moved = RingGeometry::new(Rect::new(20.0, 10.0, 100.0, 100.0), 8.0);
        let prims = ArcComposer::new(style()).compose(200.0, &moved);
        let DrawCmd::Arc(arc) = &prims[1].cmd else { panic!("expected arc") };
        let Paint::SweepGradient(grad) = &arc.paint else { panic!("expected gradient") };
        assert_eq!(grad.center, Vec2::new(70.0, 60.0));
        assert_eq!(grad.center, moved.center());
    }

    #[test]
    fn track_is_full_circle_in_track_color() {
        let prims = ArcComposer::new(style()).compose(0.0, &geo());
        let DrawCmd::Arc(arc) = &prims[0].cmd else { panic!("expected arc") };
        assert_eq!(arc.sweep_deg, 360.0);
        assert_eq!(arc.paint, Paint::Solid(Color::LIGHT_GRAY));
        assert_eq!(arc.rect, geo().ring_rect);
    }

    #[test]
    fn start_cap_is_fixed_wedge() {
        let prims = ArcComposer::new(style()).compose(270.0, &geo());
        let cap = prims.iter().find(|p| p.part == RingPart::StartCap).unwrap();
        let DrawCmd::Arc(arc) = &cap.cmd else { panic!("expected arc") };
        assert_eq!((arc.start_deg, arc.sweep_deg), (10.0, -200.0));
        assert_eq!(arc.style, PaintStyle::Fill);
        assert_eq!(arc.paint, Paint::Solid(style().start_color));
        assert_eq!(cap.transform, Affine::rotation_about(0.0, geo().center()));
    }

    #[test]
    fn end_cap_color_is_blend_at_sweep() {
        let prims = ArcComposer::new(style()).compose(90.0, &geo());
        let DrawCmd::Arc(arc) = &prims[4].cmd else { panic!("expected arc") };
        // 255 * 0.25 = 63.75 + 0.5 -> 64
        assert_eq!(arc.paint, Paint::Solid(Color::from_argb(0xFF00_0040)));
        assert_eq!((arc.start_deg, arc.sweep_deg), (0.0, 180.0));
    }

    #[test]
    fn end_cap_sits_at_arc_end() {
        let g = geo();
        let prims = ArcComposer::new(style()).compose(90.0, &g);
        let cap = &prims[4];
        // Rotating the cap center (96, 50) by 90° around (50, 50) lands at (50, 96).
        assert!(close(cap.transform.apply(g.cap_rect.center()), Vec2::new(50.0, 96.0)));
    }

    #[test]
    fn end_disc_gradient_is_counter_rotated() {
        let g = geo();
        let prims = ArcComposer::new(style()).compose(120.0, &g);
        let disc = prims.iter().find(|p| p.part == RingPart::EndCapDisc).unwrap();
        let DrawCmd::Oval(oval) = &disc.cmd else { panic!("expected oval") };
        let Paint::SweepGradient(grad) = &oval.paint else { panic!("expected gradient") };
        assert_eq!(grad.rotation_deg, -120.0);

        // A local point on the disc shows the ring color of where it lands on screen.
        let local = g.cap_rect.center();
        let screen = disc.transform.apply(local);
        let ring_grad = SweepGradient::new(g.center(), style().start_color, style().end_color);
        assert_eq!(grad.color_at(local), ring_grad.color_at(screen));
    }

    #[test]
    fn rotation_offset_wraps_every_part() {
        let mut s = style();
        s.rotation_offset_deg = -90.0;
        let g = geo();
        let prims = ArcComposer::new(s).compose(90.0, &g);
        // Start cap center moves from 3 o'clock to 12 o'clock.
        let start = prims.iter().find(|p| p.part == RingPart::StartCap).unwrap();
        assert!(close(start.transform.apply(g.cap_rect.center()), Vec2::new(50.0, 4.0)));
        // End cap: offset -90 then sweep 90 -> back at 3 o'clock.
        let end = prims.iter().find(|p| p.part == RingPart::EndCap).unwrap();
        assert!(close(end.transform.apply(g.cap_rect.center()), Vec2::new(96.0, 50.0)));
    }

    #[test]
    fn composing_twice_is_identical() {
        let c = ArcComposer::new(style());
        assert_eq!(c.compose(123.0, &geo()), c.compose(123.0, &geo()));
    }
}
