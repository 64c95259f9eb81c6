//! Plain value types shared by the layout and gesture modules.

use serde::{Deserialize, Serialize};

/// Width/height pair in host layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Zero-sized value.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size from its components.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position in host layout units, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Point {
    /// Coordinate origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `delta`.
    pub fn offset(self, delta: Vector) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }

    /// Returns the displacement from `origin` to this point.
    pub fn delta_from(self, origin: Self) -> Vector {
        Vector {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Displacement or rate along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component, positive downward.
    pub dy: f64,
}

impl Vector {
    /// Zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Returns the vector scaled by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            dx: self.dx * factor,
            dy: self.dy * factor,
        }
    }
}
