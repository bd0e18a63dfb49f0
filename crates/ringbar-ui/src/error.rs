use std::fmt;

/// Invalid ring configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `progress_max` must be strictly positive; the sweep divides by it.
    InvalidProgressMax(i32),
    /// `border_width` must be finite and non-negative.
    InvalidBorderWidth(f32),
    /// An attribute value that should be a `#RGB`, `#RRGGBB` or `#AARRGGBB` color.
    InvalidColor { key: String, value: String },
    /// An attribute value that should be a number.
    InvalidNumber { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProgressMax(v) => {
                write!(f, "ring config error: progress_max must be > 0, got {v}")
            }
            ConfigError::InvalidBorderWidth(v) => {
                write!(f, "ring config error: border_width must be finite and >= 0, got {v}")
            }
            ConfigError::InvalidColor { key, value } => {
                write!(f, "ring config error: `{key}` expects a hex color, got {value:?}")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "ring config error: `{key}` expects a number, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
