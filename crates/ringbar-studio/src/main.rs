//! Ringbar studio: renders an animated gradient ring to PNG.
//!
//! ```text
//! ringbar-studio rotate=-90 start_color=#4CDEF6 end_color=#0070E3 \
//!     border_width=40 progress=10 target=85 size=320 out=ring.png frames=frames/
//! ```
//!
//! Arguments are `key=value` pairs. Ring attributes go to `RingConfig::from_attrs`;
//! `size`, `target`, `out` and `frames` are studio options.

mod raster;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use ringbar_engine::logging::{LoggingConfig, init_logging};
use ringbar_engine::time::FrameClock;
use ringbar_ui::prelude::*;

struct StudioOptions {
    size: f32,
    target: Option<i32>,
    out: PathBuf,
    frames: Option<PathBuf>,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self { size: 320.0, target: None, out: PathBuf::from("ring.png"), frames: None }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, attrs) = parse_args(&args)?;
    let config = RingConfig::from_attrs(attrs.iter().map(|(k, v)| (*k, *v)))
        .context("invalid ring attributes")?;

    let mut bar = GradientProgressBar::new(config).context("cannot build ring")?;
    let side = bar.measure(Constraints::loose(Vec2::new(options.size, options.size)));
    let rect = Rect::new(0.0, 0.0, side.x, side.y);
    bar.on_size_changed(rect);

    if let Some(dir) = &options.frames {
        std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }

    if let Some(target) = options.target {
        log::info!("animating {} -> {target} of {}", bar.progress(), bar.progress_max());
        let started = Instant::now();
        let frames = run_animation(&mut bar, target, rect, options.frames.as_deref())?;
        log::info!("animation done: {frames} frames in {:?}", started.elapsed());
    }

    save_frame(&bar, rect, &options.out)?;
    log::info!(
        "wrote {} (progress {}/{}, sweep {:.1}°)",
        options.out.display(),
        bar.progress(),
        bar.progress_max(),
        bar.sweep_angle(),
    );
    Ok(())
}

/// Drives the ring in real time until the animation settles.
fn run_animation(bar: &mut GradientProgressBar, target: i32, rect: Rect, frames: Option<&Path>) -> Result<u64> {
    let mut clock = FrameClock::new();
    bar.set_progress(target, true);

    let mut count = 0;
    loop {
        let ft = clock.tick();
        bar.tick(ft.now);
        if bar.take_needs_redraw() {
            if let Some(dir) = frames {
                save_frame(bar, rect, &dir.join(format!("frame_{:04}.png", ft.frame_index)))?;
            }
            count += 1;
        }
        if !bar.is_animating() {
            return Ok(count);
        }
        clock.wait_for_next_frame();
    }
}

fn save_frame(bar: &GradientProgressBar, rect: Rect, path: &Path) -> Result<()> {
    let mut draw_list = DrawList::new();
    bar.paint(&mut Painter::new(&mut draw_list), rect);
    let img = raster::rasterize(&draw_list, rect.width().ceil() as u32, rect.height().ceil() as u32, Color::TRANSPARENT);
    img.save(path).with_context(|| format!("cannot write {}", path.display()))?;
    log::debug!("saved {} ({} primitives)", path.display(), draw_list.len());
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(StudioOptions, Vec<(&str, &str)>)> {
    let mut options = StudioOptions::default();
    let mut attrs = Vec::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got {arg:?}");
        };
        match key {
            "size" => options.size = value.parse().with_context(|| format!("bad size {value:?}"))?,
            "target" => options.target = Some(value.parse().with_context(|| format!("bad target {value:?}"))?),
            "out" => options.out = PathBuf::from(value),
            "frames" => options.frames = Some(PathBuf::from(value)),
            _ => attrs.push((key, value)),
        }
    }
    if !(options.size.is_finite() && options.size > 0.0) {
        bail!("size must be a positive number");
    }
    Ok((options, attrs))
}
