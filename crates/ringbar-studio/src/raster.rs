//! Minimal CPU surface: turns a recorded `DrawList` into an RGBA image.
//!
//! Each pixel is sampled on a 2×2 grid; every item is hit-tested in its own
//! local space (through the inverse of its transform) and composited
//! source-over in premultiplied space.

use image::{Rgba, RgbaImage};
use ringbar_engine::coords::{Affine, Vec2};
use ringbar_engine::paint::Color;
use ringbar_engine::scene::{DrawItem, DrawList};

const SUBSAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

pub fn rasterize(list: &DrawList, width: u32, height: u32, clear: Color) -> RgbaImage {
    // Items whose transform cannot be inverted are degenerate and skipped.
    let items: Vec<(&DrawItem, Affine)> = list
        .items()
        .iter()
        .filter_map(|item| item.transform.inverse().map(|inv| (item, inv)))
        .collect();

    let clear_premul = clear.to_premul_f32();

    RgbaImage::from_fn(width, height, |x, y| {
        let mut acc = [0.0f32; 4];
        for (dx, dy) in SUBSAMPLES {
            let p = Vec2::new(x as f32 + dx, y as f32 + dy);
            let mut px = clear_premul;
            for (item, inv) in &items {
                let local = inv.apply(p);
                if item.cmd.covers(local) {
                    px = over(item.cmd.paint().color_at(local).to_premul_f32(), px);
                }
            }
            for (a, v) in acc.iter_mut().zip(px) {
                *a += v;
            }
        }
        let n = SUBSAMPLES.len() as f32;
        Rgba(bytemuck::cast(unpremul([acc[0] / n, acc[1] / n, acc[2] / n, acc[3] / n])))
    })
}

#[inline]
fn over(src: [f32; 4], dst: [f32; 4]) -> [f32; 4] {
    let k = 1.0 - src[3];
    [src[0] + dst[0] * k, src[1] + dst[1] * k, src[2] + dst[2] * k, src[3] + dst[3] * k]
}

fn unpremul(c: [f32; 4]) -> Color {
    let a = c[3];
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    Color::from_rgba8(to_u8(c[0] / a), to_u8(c[1] / a), to_u8(c[2] / a), to_u8(a))
}
