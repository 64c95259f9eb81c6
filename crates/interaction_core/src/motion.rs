//! Spring parameters carried as data for the host rendering layer.
//!
//! Settled values never depend on these; they only shape how the host animates toward them.

use serde::{Deserialize, Serialize};

/// Spring described by its response time and damping fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringCurve {
    /// Approximate settle time in seconds.
    pub response: f64,
    /// 1.0 is critically damped; lower values overshoot.
    pub damping_fraction: f64,
}

impl SpringCurve {
    /// Quick, responsive feedback. Used for row settling.
    pub const SNAPPY: Self = Self::new(0.3, 0.7);
    /// Minimal overshoot.
    pub const SMOOTH: Self = Self::new(0.4, 0.8);
    /// Visible bounce.
    pub const BOUNCY: Self = Self::new(0.5, 0.6);
    /// Slow and subtle.
    pub const GENTLE: Self = Self::new(0.6, 0.9);
    /// Tuned for gesture hand-off.
    pub const INTERACTIVE: Self = Self::new(0.3, 0.86);

    /// Creates a spring.
    pub const fn new(response: f64, damping_fraction: f64) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    /// Transition duration in whole milliseconds.
    pub fn duration_ms(self) -> u32 {
        (self.response.max(0.0) * 1000.0).round() as u32
    }

    /// CSS `cubic-bezier` approximating the spring; underdamped springs overshoot past 1.
    pub fn cubic_bezier(self) -> String {
        let damping = self.damping_fraction.clamp(0.0, 1.0);
        let overshoot = 1.0 + (1.0 - damping) * 1.5;
        format!("cubic-bezier(0.2, {overshoot:.2}, 0.3, 1)")
    }

    /// CSS transition declaration for `property`.
    pub fn css_transition(self, property: &str) -> String {
        format!("{property} {}ms {}", self.duration_ms(), self.cubic_bezier())
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::SNAPPY
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn snappy_spring_maps_to_css_transition() {
        assert_eq!(
            SpringCurve::SNAPPY.css_transition("transform"),
            "transform 300ms cubic-bezier(0.2, 1.45, 0.3, 1)"
        );
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        assert_eq!(
            SpringCurve::new(0.25, 1.0).cubic_bezier(),
            "cubic-bezier(0.2, 1.00, 0.3, 1)"
        );
    }
}
