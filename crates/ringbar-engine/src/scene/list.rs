use crate::coords::{Affine, Vec2};

use super::DrawCmd;

/// A single draw item: command + the transform in effect when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Local-to-surface transform. Paint sources are evaluated in local space.
    pub transform: Affine,
}

/// Recorded draw stream for a frame.
///
/// Items are kept in paint order (back-to-front), which is insertion order.
///
/// # Transforms
///
/// Use [`push_transform`] / [`pop_transform`] to scope draw commands to a
/// transform. Transforms compose with the current parent, like a canvas
/// `save` + `rotate` ... `restore` sequence.
///
/// ```ignore
/// draw_list.push_transform(Affine::rotation_about(-90.0, center));
/// // ... push items ...
/// draw_list.pop_transform();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active transforms. The top is always the effective transform,
    /// already composed with all parents.
    transform_stack: Vec<Affine>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.transform_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current effective transform.
    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform_stack.last().copied().unwrap_or(Affine::IDENTITY)
    }

    /// Pushes a draw command under the current transform.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let transform = self.transform();
        self.items.push(DrawItem { cmd, transform });
    }

    /// Begins a transformed region. `t` is applied to local coordinates before
    /// any enclosing transform.
    ///
    /// Calls must be balanced with [`pop_transform`].
    #[inline]
    pub fn push_transform(&mut self, t: Affine) {
        let effective = self.transform().concat(t);
        self.transform_stack.push(effective);
    }

    /// Shorthand for a clockwise rotation around `pivot`.
    #[inline]
    pub fn push_rotation(&mut self, degrees: f32, pivot: Vec2) {
        self.push_transform(Affine::rotation_about(degrees, pivot));
    }

    /// Ends the most recent region started by [`push_transform`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(!self.transform_stack.is_empty(), "pop_transform called without matching push_transform");
        self.transform_stack.pop();
    }
}
