//! Typed interaction tokens, loadable from TOML.
//!
//! Every table is optional; missing keys fall back to the library defaults. The loaded value is
//! validated before it is returned so components can build their state without re-checking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bottom_sheet::BottomSheetConfig;
use crate::flow_layout::{FlowLayout, DEFAULT_FLOW_SPACING};
use crate::motion::SpringCurve;
use crate::swipeable_row::SwipeRowConfig;

#[derive(Debug, Error)]
/// Configuration loading failures.
pub enum ConfigError {
    /// TOML syntax or type mismatch.
    #[error("failed to parse interaction config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid interaction config `{field}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Flow layout tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Gap between elements and rows.
    pub spacing: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_FLOW_SPACING,
        }
    }
}

impl FlowConfig {
    /// Layout built from these tokens.
    ///
    /// # Panics
    ///
    /// Panics when the spacing is invalid; [`InteractionConfig::validate`] rules this out.
    pub fn layout(self) -> FlowLayout {
        FlowLayout::new(self.spacing)
    }
}

/// Spring curves used when primitives settle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Swipeable row settle curve.
    pub row_settle: SpringCurve,
    /// Bottom sheet settle and presentation curve.
    pub sheet_settle: SpringCurve,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            row_settle: SpringCurve::SNAPPY,
            sheet_settle: SpringCurve::SMOOTH,
        }
    }
}

/// All interaction tokens, passed explicitly into each component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Flow layout tokens.
    pub flow: FlowConfig,
    /// Swipeable row tokens.
    pub swipe: SwipeRowConfig,
    /// Bottom sheet options.
    pub sheet: BottomSheetConfig,
    /// Animation curves.
    pub motion: MotionConfig,
}

impl InteractionConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrong value types (including
    /// out-of-range detent ratios), and [`ConfigError::Invalid`] for values that fail
    /// [`Self::validate`].
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every token against the ranges the primitives accept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.flow.spacing.is_finite() && self.flow.spacing >= 0.0) {
            return Err(ConfigError::invalid(
                "flow.spacing",
                format!("must be non-negative, got {}", self.flow.spacing),
            ));
        }
        if !(self.swipe.action_width.is_finite() && self.swipe.action_width > 0.0) {
            return Err(ConfigError::invalid(
                "swipe.action_width",
                format!("must be positive, got {}", self.swipe.action_width),
            ));
        }
        if !(self.swipe.swipe_threshold.is_finite() && self.swipe.swipe_threshold >= 0.0) {
            return Err(ConfigError::invalid(
                "swipe.swipe_threshold",
                format!("must be non-negative, got {}", self.swipe.swipe_threshold),
            ));
        }
        if !(0.0..=1.0).contains(&self.swipe.resistance) {
            return Err(ConfigError::invalid(
                "swipe.resistance",
                format!("must lie in [0, 1], got {}", self.swipe.resistance),
            ));
        }
        if !(self.sheet.dismiss_velocity.is_finite() && self.sheet.dismiss_velocity > 0.0) {
            return Err(ConfigError::invalid(
                "sheet.dismiss_velocity",
                format!("must be positive, got {}", self.sheet.dismiss_velocity),
            ));
        }
        if !self.sheet.detents.contains(self.sheet.initial_detent) {
            return Err(ConfigError::invalid(
                "sheet.initial_detent",
                format!(
                    "{} is not one of the configured detents",
                    self.sheet.initial_detent.ratio()
                ),
            ));
        }
        Ok(())
    }
}
