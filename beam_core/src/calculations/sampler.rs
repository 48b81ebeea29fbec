//! Diagram Sampling
//!
//! Produces the ordered positions a renderer evaluates an [`Equation`] at.
//!
//! For a two-span beam the interior support `L1` is emitted twice, first
//! tagged [`Side::Left`] and then [`Side::Right`], so the shear jump plots as
//! a vertical line instead of being interpolated across.
//!
//! ```text
//! two-span, L1 = 4, L2 = 6, 10 segments:
//!
//!   0  1  2  3  4  4  5  6  7  8  9  10
//!   L  L  L  L  L  R  R  R  R  R  R  R
//! ```
//!
//! [`Equation`]: crate::calculations::Equation

use serde::{Deserialize, Serialize};

use crate::calculations::{AnalysisCondition, Beam, Side};
use crate::errors::{CalcError, CalcResult};

/// Segment count used when the caller has no preference
pub const DEFAULT_SEGMENT_COUNT: usize = 10;

/// Positions closer than `step · SNAP_FRACTION` to a support snap onto it
const SNAP_FRACTION: f64 = 1e-9;

/// One position to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Distance from the left support
    pub value: f64,
    /// Span the position belongs to
    pub side: Side,
}

impl Sample {
    pub fn is_primary_span(&self) -> bool {
        self.side.is_primary_span()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Grid points `i · step` before the split, then the split itself
    Primary { index: usize },
    /// The split again, right-hand side
    SupportRight,
    /// Grid points `split + k · step`, then the end
    Secondary { index: usize },
    Done,
}

/// Single-pass iterator over the samples of one beam.
///
/// Call [`sample`] again for a second pass.
#[derive(Debug, Clone)]
pub struct Samples {
    step: f64,
    /// Interior support (equal to `total` for a single span)
    split: f64,
    total: f64,
    phase: Phase,
}

impl Samples {
    fn new(split: f64, total: f64, segment_count: usize) -> Self {
        Self {
            step: total / segment_count as f64,
            split,
            total,
            phase: Phase::Primary { index: 0 },
        }
    }

    fn snaps_to(&self, x: f64, target: f64) -> bool {
        x >= target - self.step * SNAP_FRACTION
    }
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        match self.phase {
            Phase::Primary { index } => {
                let x = index as f64 * self.step;
                // The origin is always emitted, however short the first span
                if index == 0 || !self.snaps_to(x, self.split) {
                    self.phase = Phase::Primary { index: index + 1 };
                    return Some(Sample {
                        value: x,
                        side: Side::Left,
                    });
                }
                self.phase = if self.split < self.total {
                    Phase::SupportRight
                } else {
                    Phase::Done
                };
                Some(Sample {
                    value: self.split,
                    side: Side::Left,
                })
            }
            Phase::SupportRight => {
                self.phase = Phase::Secondary { index: 1 };
                Some(Sample {
                    value: self.split,
                    side: Side::Right,
                })
            }
            Phase::Secondary { index } => {
                let x = self.split + index as f64 * self.step;
                if !self.snaps_to(x, self.total) {
                    self.phase = Phase::Secondary { index: index + 1 };
                    return Some(Sample {
                        value: x,
                        side: Side::Right,
                    });
                }
                self.phase = Phase::Done;
                Some(Sample {
                    value: self.total,
                    side: Side::Right,
                })
            }
            Phase::Done => None,
        }
    }
}

impl std::iter::FusedIterator for Samples {}

/// Sample `beam` under `condition` with `segment_count` steps over the full length.
///
/// # Errors
/// `InvalidArgument` if `segment_count` is zero or the beam geometry does not
/// suit the condition.
pub fn sample(
    beam: &Beam,
    condition: AnalysisCondition,
    segment_count: usize,
) -> CalcResult<Samples> {
    if segment_count == 0 {
        return Err(CalcError::invalid_argument(
            "segment_count",
            "0",
            "At least one segment is required",
        ));
    }
    beam.validate_for(condition)?;

    let total = beam.total_length(condition);
    let split = match condition {
        AnalysisCondition::SimplySupported => total,
        AnalysisCondition::TwoSpanUnequal => beam.primary_span,
    };
    tracing::trace!(%condition, split, total, segment_count, "sampling beam");

    Ok(Samples::new(split, total, segment_count))
}
