//! Editor configuration loaded from the environment.
//!
//! Every value has a default matching the stock editor page (a 500×500
//! canvas at the top-left of the viewport, black shapes, radius-10 circles and
//! 100×100 rectangles), so an empty environment is a valid configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::shape::ShapeDefaults;
use canvas::surface::RecordingSurface;
use serde::Serialize;

/// Allowed range for `EDITOR_CIRCLE_RADIUS`.
const CIRCLE_RADIUS_RANGE: (f64, f64) = (10.0, 50.0);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be within {min}..={max}, got {value}")]
    OutOfRange { var: &'static str, value: f64, min: f64, max: f64 },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}

/// Surface placement and shape defaults for one editor session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub canvas_left: f64,
    pub canvas_top: f64,
    pub shapes: ShapeDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { canvas_width: 500.0, canvas_height: 500.0, canvas_left: 0.0, canvas_top: 0.0, shapes: ShapeDefaults::default() }
    }
}

impl EditorConfig {
    /// Load configuration from environment variables.
    ///
    /// - `EDITOR_CANVAS_WIDTH`, `EDITOR_CANVAS_HEIGHT`: surface size in pixels (default 500)
    /// - `EDITOR_CANVAS_LEFT`, `EDITOR_CANVAS_TOP`: surface offset in the viewport (default 0)
    /// - `EDITOR_CIRCLE_RADIUS`: radius of new circles, 10 to 50 (default 10)
    /// - `EDITOR_RECT_WIDTH`, `EDITOR_RECT_HEIGHT`: size of new rectangles (default 100)
    /// - `EDITOR_SHAPE_COLOR`: fill color of new shapes (default `black`)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something out of range or not
    /// a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`EditorConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = Self::default();
        let number = |var: &'static str, default: f64| -> Result<f64, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(value),
                    _ => Err(ConfigError::InvalidNumber { var, value: raw }),
                },
            }
        };
        let positive = |var: &'static str, default: f64| -> Result<f64, ConfigError> {
            let value = number(var, default)?;
            if value > 0.0 { Ok(value) } else { Err(ConfigError::NotPositive { var, value }) }
        };

        let (min, max) = CIRCLE_RADIUS_RANGE;
        let circle_radius = number("EDITOR_CIRCLE_RADIUS", base.shapes.circle_radius)?;
        if !(min..=max).contains(&circle_radius) {
            return Err(ConfigError::OutOfRange { var: "EDITOR_CIRCLE_RADIUS", value: circle_radius, min, max });
        }

        let color = lookup("EDITOR_SHAPE_COLOR")
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .unwrap_or(base.shapes.color);

        Ok(Self {
            canvas_width: positive("EDITOR_CANVAS_WIDTH", base.canvas_width)?,
            canvas_height: positive("EDITOR_CANVAS_HEIGHT", base.canvas_height)?,
            canvas_left: number("EDITOR_CANVAS_LEFT", base.canvas_left)?,
            canvas_top: number("EDITOR_CANVAS_TOP", base.canvas_top)?,
            shapes: ShapeDefaults {
                circle_radius,
                rect_width: positive("EDITOR_RECT_WIDTH", base.shapes.rect_width)?,
                rect_height: positive("EDITOR_RECT_HEIGHT", base.shapes.rect_height)?,
                color,
            },
        })
    }

    /// A recording surface placed and sized as configured.
    #[must_use]
    pub fn surface(&self) -> RecordingSurface {
        RecordingSurface::new(self.canvas_left, self.canvas_top, self.canvas_width, self.canvas_height)
    }
}
