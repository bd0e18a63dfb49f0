use bytemuck::{Pod, Zeroable};

/// Straight-alpha 8-bit sRGB color.
///
/// Field order is RGBA so a `Color` can be cast to `[u8; 4]` pixel data with
/// `bytemuck`. Packing to and from `u32` uses `0xAARRGGBB`, the layout used by
/// color literals such as `#AARRGGBB`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0x0000_0000);
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    pub const GREEN: Color = Color::from_argb(0xFF00_FF00);
    pub const BLUE: Color = Color::from_argb(0xFF00_00FF);
    pub const LIGHT_GRAY: Color = Color::from_argb(0xFFCC_CCCC);

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses `#RGB`, `#RRGGBB` or `#AARRGGBB`. The leading `#` is required.
    ///
    /// Six-digit literals are opaque.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            3 => {
                // Each nibble is doubled: #abc -> #aabbcc.
                let r = ((v >> 8) & 0xF) as u8 * 0x11;
                let g = ((v >> 4) & 0xF) as u8 * 0x11;
                let b = (v & 0xF) as u8 * 0x11;
                Some(Self::from_rgba8(r, g, b, 0xFF))
            }
            6 => Some(Self::from_argb(0xFF00_0000 | v)),
            8 => Some(Self::from_argb(v)),
            _ => None,
        }
    }

    /// Premultiplied linear-ish `f32` components in `[0, 1]`, ordered RGBA.
    ///
    /// No gamma conversion is performed; compositing happens in sRGB space.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}
