use ringbar_engine::coords::{Affine, Rect, Vec2};
use ringbar_engine::paint::Paint;
use ringbar_engine::scene::{DrawCmd, DrawList};

use crate::composer::RingPrimitive;

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a canvas-like API: shape calls plus a
/// save/rotate/restore transform stack.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    depth: usize,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, depth: 0 }
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Begins a transformed region. Must be paired with [`restore`](Self::restore).
    pub fn save_transform(&mut self, t: Affine) {
        self.draw_list.push_transform(t);
        self.depth += 1;
    }

    /// Begins a region rotated clockwise by `degrees` around `pivot`.
    pub fn save_rotated(&mut self, degrees: f32, pivot: Vec2) {
        self.save_transform(Affine::rotation_about(degrees, pivot));
    }

    /// Ends the most recent transformed region.
    pub fn restore(&mut self) {
        debug_assert!(self.depth > 0, "Painter::restore without matching save");
        self.draw_list.pop_transform();
        self.depth -= 1;
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Stroked arc over the ellipse inscribed in `rect`.
    pub fn stroke_arc(&mut self, rect: Rect, start_deg: f32, sweep_deg: f32, width: f32, paint: impl Into<Paint>) {
        self.draw_list.push_stroke_arc(rect, start_deg, sweep_deg, width, paint.into());
    }

    /// Filled ellipse inscribed in `rect`.
    pub fn fill_oval(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.draw_list.push_fill_oval(rect, paint.into());
    }

    /// Records a raw draw command under the current transform.
    pub fn draw(&mut self, cmd: DrawCmd) {
        self.draw_list.push(cmd);
    }

    /// Records composed ring primitives in order, each under its own transform.
    pub fn draw_primitives(&mut self, primitives: &[RingPrimitive]) {
        for p in primitives {
            self.save_transform(p.transform);
            self.draw(p.cmd.clone());
            self.restore();
        }
    }
}

impl Drop for Painter<'_> {
    fn drop(&mut self) {
        // Leave the list balanced even if a caller forgot a restore.
        while self.depth > 0 {
            self.draw_list.pop_transform();
            self.depth -= 1;
        }
    }
}
