use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Display, Serialize, Deserialize)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A point with `value` on `axis` and zero on the other.
    pub fn on_axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, 0.0),
            Axis::Vertical => Self::new(0.0, value),
        }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Display, Serialize, Deserialize)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A size proposal where `None` leaves that dimension unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProposedSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ProposedSize {
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    pub fn on_axis(axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: Some(value),
                height: None,
            },
            Axis::Vertical => Self {
                width: None,
                height: Some(value),
            },
        }
    }

    pub fn along(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// The container edge a view hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}
