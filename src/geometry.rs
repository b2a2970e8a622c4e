use serde::Deserialize;
use thiserror::Error;

/// Abstract lengths used by the margin math. Nothing here knows about pixels;
/// the host renderer decides what one unit means.
///
/// Fields are private so every geometry goes through [`Geometry::new`],
/// [`Geometry::from_toml_str`] or [`Default`], all of which keep
/// `indent_unit` positive.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Geometry {
    indent_unit: u32,
    bullet_radius: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("indent_unit must be positive")]
    NonPositiveIndent,
    #[error("invalid geometry config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            indent_unit: 10,
            bullet_radius: 3,
        }
    }
}

impl Geometry {
    /// Build a geometry, rejecting a zero `indent_unit`.
    pub fn new(indent_unit: u32, bullet_radius: u32) -> Result<Self, ConfigError> {
        Geometry {
            indent_unit,
            bullet_radius,
        }
        .validated()
    }

    /// Parse a geometry table such as:
    ///
    /// ```toml
    /// indent_unit = 12
    /// bullet_radius = 4
    /// ```
    ///
    /// Missing keys fall back to [`Geometry::default`].
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let g: Geometry = toml::from_str(s)?;
        g.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.indent_unit == 0 {
            return Err(ConfigError::NonPositiveIndent);
        }
        Ok(self)
    }

    /// Base indentation unit. Also the gap between a bullet and its text.
    pub fn indent_unit(&self) -> u32 {
        self.indent_unit
    }

    /// Radius of the bullet drawn for unordered items.
    pub fn bullet_radius(&self) -> u32 {
        self.bullet_radius
    }

    /// Indentation added per nesting level: twice the base unit.
    pub fn item_indent_unit(&self) -> i64 {
        i64::from(self.indent_unit) * 2
    }

    /// Horizontal space a bullet occupies on its own: the dot plus the gap
    /// before the text.
    pub fn bullet_leading_margin(&self) -> i64 {
        2 * i64::from(self.bullet_radius) + i64::from(self.indent_unit)
    }
}
