//! Evaluated diagrams
//!
//! A [`Diagram`] is an equation evaluated over a sample sequence, ready to
//! hand to a renderer, plus the extremes a report needs.

use serde::{Deserialize, Serialize};

use crate::calculations::sampler::Sample;
use crate::calculations::{AnalysisCondition, DiagramPoint, Equation, Quantity};
use crate::errors::CalcResult;

/// Largest or smallest value on a diagram and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    pub x: f64,
    pub y: f64,
}

/// Sampled diagram for one quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub condition: AnalysisCondition,
    pub quantity: Quantity,
    /// Points in sample order; a discontinuity shows up as two points at the same x
    pub points: Vec<DiagramPoint>,
    /// Maximum y (first occurrence)
    pub max: Extreme,
    /// Minimum y (first occurrence)
    pub min: Extreme,
}

impl Diagram {
    /// Evaluate `equation` at every sample, failing on the first bad position
    pub fn from_samples<I>(equation: &Equation, samples: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        let points = samples
            .into_iter()
            .map(|s| equation.evaluate_sample(s))
            .collect::<CalcResult<Vec<_>>>()?;

        let mut max = Extreme {
            x: 0.0,
            y: f64::NEG_INFINITY,
        };
        let mut min = Extreme {
            x: 0.0,
            y: f64::INFINITY,
        };
        for p in &points {
            if p.y > max.y {
                max = Extreme { x: p.x, y: p.y };
            }
            if p.y < min.y {
                min = Extreme { x: p.x, y: p.y };
            }
        }

        Ok(Self {
            condition: equation.condition(),
            quantity: equation.quantity(),
            points,
            max,
            min,
        })
    }

    /// Extreme with the largest magnitude (governing value for design)
    pub fn max_abs(&self) -> Extreme {
        if self.min.y.abs() > self.max.y.abs() {
            self.min
        } else {
            self.max
        }
    }

    /// `(x, y)` pairs for plotting libraries
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}
