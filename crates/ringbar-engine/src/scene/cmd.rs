use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::oval::OvalCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Arc(ArcCmd),
    Oval(OvalCmd),
}

impl DrawCmd {
    #[inline]
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCmd::Arc(a) => &a.paint,
            DrawCmd::Oval(o) => &o.paint,
        }
    }

    /// Hit test in the command's local (untransformed) space.
    #[inline]
    pub fn covers(&self, p: Vec2) -> bool {
        match self {
            DrawCmd::Arc(a) => a.covers(p),
            DrawCmd::Oval(o) => o.covers(p),
        }
    }
}
