//! Court dimensions
//!
//! The canvas size is the only geometry that comes from outside the binary,
//! so it is validated once at startup. Everything else lives in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error type for court construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Court dimensions must be finite and positive, got {width}x{height}")]
    NonPositive { width: f32, height: f32 },

    #[error("Court height {height} cannot fit a paddle of height {min}")]
    TooShort { height: f32, min: f32 },

    #[error("Court width {width} is narrower than the minimum {min}")]
    TooNarrow { width: f32, min: f32 },
}

/// Playing field dimensions (canvas size in pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    width: f32,
    height: f32,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl Court {
    /// Smallest width holding both paddles, their insets and a ball between them
    pub const MIN_WIDTH: f32 = 2.0 * (PADDLE_INSET + PADDLE_WIDTH) + 4.0 * BALL_RADIUS;
    /// Smallest height holding a paddle
    pub const MIN_HEIGHT: f32 = PADDLE_HEIGHT;

    /// Validate and build a court
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::NonPositive { width, height });
        }
        if height < Self::MIN_HEIGHT {
            return Err(ConfigError::TooShort {
                height,
                min: Self::MIN_HEIGHT,
            });
        }
        if width < Self::MIN_WIDTH {
            return Err(ConfigError::TooNarrow {
                width,
                min: Self::MIN_WIDTH,
            });
        }
        Ok(Self { width, height })
    }

    /// Build from a canvas size, falling back to the default court when invalid
    pub fn from_canvas_or_default(width: u32, height: u32) -> Self {
        match Self::new(width as f32, height as f32) {
            Ok(court) => court,
            Err(e) => {
                log::warn!("{e}; using default {CANVAS_WIDTH}x{CANVAS_HEIGHT} court");
                Self::default()
            }
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal midline (splits the user half from the AI half)
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Lowest legal paddle y (top edge)
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.height - PADDLE_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_court() {
        let court = Court::default();
        assert_eq!(court.width(), 600.0);
        assert_eq!(court.height(), 400.0);
        assert_eq!(court.paddle_max_y(), 310.0);
        assert_eq!(Court::new(600.0, 400.0), Ok(court));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Court::new(-1.0, 400.0),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            Court::new(f32::NAN, 400.0),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            Court::new(600.0, 50.0),
            Err(ConfigError::TooShort { .. })
        ));
        assert!(matches!(
            Court::new(40.0, 400.0),
            Err(ConfigError::TooNarrow { .. })
        ));
    }

    #[test]
    fn test_canvas_fallback() {
        assert_eq!(Court::from_canvas_or_default(0, 0), Court::default());
        let court = Court::from_canvas_or_default(800, 600);
        assert_eq!(court.width(), 800.0);
        assert_eq!(court.center_y(), 300.0);
    }
}
