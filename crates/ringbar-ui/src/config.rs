use std::time::Duration;

use ringbar_engine::paint::Color;

use crate::error::ConfigError;

/// Construction-time configuration for [`GradientProgressBar`].
///
/// Read once; the widget copies what it needs.
///
/// # Example
/// ```rust,ignore
/// let config = RingConfig::new()
///     .start_color(Color::from_argb(0xFF4CDEF6))
///     .end_color(Color::from_argb(0xFF0070E3))
///     .border_width(80.0)
///     .rotation_offset(-90.0)
///     .progress(85);
/// ```
///
/// [`GradientProgressBar`]: crate::widgets::gradient_ring::GradientProgressBar
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    pub start_color: Color,
    pub end_color: Color,
    /// Stroke width of the ring, in logical pixels.
    pub border_width: f32,
    pub border_background: Color,
    /// Static presentation rotation, applied to the whole ring. `-90` puts 0° at the top.
    pub rotation_offset_deg: f32,
    pub progress: i32,
    pub progress_max: i32,
    pub animation_duration: Duration,
}

impl RingConfig {
    pub fn new() -> Self {
        Self {
            start_color: Color::GREEN,
            end_color: Color::BLUE,
            border_width: 8.0,
            border_background: Color::LIGHT_GRAY,
            rotation_offset_deg: 0.0,
            progress: 0,
            progress_max: 100,
            animation_duration: Duration::from_millis(250),
        }
    }

    pub fn start_color(mut self, v: Color) -> Self { self.start_color = v; self }
    pub fn end_color(mut self, v: Color) -> Self { self.end_color = v; self }
    pub fn border_width(mut self, v: f32) -> Self { self.border_width = v; self }
    pub fn border_background(mut self, v: Color) -> Self { self.border_background = v; self }
    pub fn rotation_offset(mut self, deg: f32) -> Self { self.rotation_offset_deg = deg; self }
    pub fn progress(mut self, v: i32) -> Self { self.progress = v; self }
    pub fn progress_max(mut self, v: i32) -> Self { self.progress_max = v; self }
    pub fn animation_duration(mut self, v: Duration) -> Self { self.animation_duration = v; self }

    /// Checks the preconditions the geometry depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_max <= 0 {
            return Err(ConfigError::InvalidProgressMax(self.progress_max));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ConfigError::InvalidBorderWidth(self.border_width));
        }
        Ok(())
    }

    /// Builds a config from markup-style attributes, starting from the defaults.
    ///
    /// Recognized keys: `start_color`, `end_color`, `border_background` (hex
    /// colors), `border_width` (number, optional `dp`/`px` suffix), `rotate`,
    /// `progress`, `progress_max`, `anim_duration` (milliseconds).
    /// Unknown keys are skipped with a warning. The result is validated.
    pub fn from_attrs<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::new();
        for (key, value) in attrs {
            let value = value.trim();
            match key {
                "start_color" => config.start_color = parse_color(key, value)?,
                "end_color" => config.end_color = parse_color(key, value)?,
                "border_background" => config.border_background = parse_color(key, value)?,
                "border_width" => {
                    let raw = value
                        .strip_suffix("dp")
                        .or_else(|| value.strip_suffix("px"))
                        .unwrap_or(value);
                    config.border_width = parse_number(key, raw)?;
                }
                "rotate" => config.rotation_offset_deg = parse_number(key, value)?,
                "progress" => config.progress = parse_number(key, value)?,
                "progress_max" => config.progress_max = parse_number(key, value)?,
                "anim_duration" => {
                    config.animation_duration = Duration::from_millis(parse_number(key, value)?);
                }
                other => log::warn!("ignoring unknown ring attribute `{other}`"),
            }
        }
        config.validate()?;
        Ok(config)
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}
