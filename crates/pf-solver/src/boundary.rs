//! Boundary shapes and their pseudo-steady shape factors.

use crate::error::SolverError;
use core::fmt;
use std::str::FromStr;

/// Shape factor and dimensionless-time validity thresholds for one boundary
/// geometry, after Dietz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    /// Shape factor C_A.
    pub factor: f64,
    /// PSS is exact for dimensionless times above this value.
    pub time_pss_accurate: f64,
    /// PSS gives less than 1% error for dimensionless times above this value.
    pub time_pss_error_prone: f64,
    /// The infinite-system solution holds with less than 1% error below this
    /// value.
    pub time_infinite: f64,
}

/// Closed set of supported boundary shapes for a centered well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryShape {
    #[default]
    Circle,
    Triangle,
    Square,
    Hexagon,
}

impl BoundaryShape {
    pub const ALL: [BoundaryShape; 4] = [
        BoundaryShape::Circle,
        BoundaryShape::Triangle,
        BoundaryShape::Square,
        BoundaryShape::Hexagon,
    ];

    /// Shape parameters for this boundary.
    pub fn bound(self) -> Boundary {
        match self {
            BoundaryShape::Circle => Boundary {
                factor: 31.62,
                time_pss_accurate: 0.1,
                time_pss_error_prone: 0.06,
                time_infinite: 0.1,
            },
            BoundaryShape::Triangle => Boundary {
                factor: 27.6,
                time_pss_accurate: 0.2,
                time_pss_error_prone: 0.07,
                time_infinite: 0.09,
            },
            BoundaryShape::Square => Boundary {
                factor: 30.8828,
                time_pss_accurate: 0.1,
                time_pss_error_prone: 0.05,
                time_infinite: 0.09,
            },
            BoundaryShape::Hexagon => Boundary {
                factor: 31.6,
                time_pss_accurate: 0.1,
                time_pss_error_prone: 0.06,
                time_infinite: 0.1,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoundaryShape::Circle => "circle",
            BoundaryShape::Triangle => "triangle",
            BoundaryShape::Square => "square",
            BoundaryShape::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for BoundaryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryShape {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(BoundaryShape::Circle),
            "triangle" => Ok(BoundaryShape::Triangle),
            "square" => Ok(BoundaryShape::Square),
            "hexagon" => Ok(BoundaryShape::Hexagon),
            other => Err(SolverError::UnknownShape {
                name: other.to_string(),
            }),
        }
    }
}
