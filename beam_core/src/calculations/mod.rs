//! # Beam Calculations
//!
//! Closed-form internal-force and deflection equations for uniformly loaded
//! beams, and the sampling that turns them into plottable diagrams.
//!
//! Every calculation follows the same flow:
//!
//! - Build a [`Beam`] around a shared [`Material`](crate::materials::Material)
//! - Ask the [`BeamAnalysis`] registry for an [`Equation`] for a
//!   [`Quantity`] under an [`AnalysisCondition`]
//! - Evaluate the equation at the positions produced by [`sample`]
//!
//! ## Available Conditions
//!
//! - [`simply_supported`] - Single span, pinned at both ends
//! - [`two_span`] - Continuous over two unequal spans, one interior support
//!
//! ## Sign Convention
//!
//! - Positive load: downward
//! - Moment is reported with sagging negative (`M = -(w·x/2)(L - x)`)
//! - Deflection is negative downward
//! - Positive shear: left side up

pub mod beam;
pub mod beam_analysis;
pub mod diagram;
pub mod equation;
pub mod sampler;
pub mod simply_supported;
pub mod two_span;

use serde::{Deserialize, Serialize};

pub use beam::Beam;
pub use beam_analysis::{analyze, AnalysisResult, BeamAnalysis, BeamAnalyzer};
pub use diagram::{Diagram, Extreme};
pub use equation::{DiagramPoint, Equation, ScaledStiffness};
pub use sampler::{sample, Sample, Samples, DEFAULT_SEGMENT_COUNT};
pub use simply_supported::{SimpleSpanEquation, SimplySupported};
pub use two_span::{TwoSpanEquation, TwoSpanReactions, TwoSpanUnequal};

/// Structural support condition.
///
/// Closed set: each variant has exactly one analyzer in the default
/// [`BeamAnalysis`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisCondition {
    /// Single span on two end supports
    SimplySupported,
    /// Continuous beam over two unequal spans (three supports)
    TwoSpanUnequal,
}

impl AnalysisCondition {
    /// All available conditions for selection lists
    pub const ALL: [AnalysisCondition; 2] = [
        AnalysisCondition::SimplySupported,
        AnalysisCondition::TwoSpanUnequal,
    ];

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisCondition::SimplySupported => "Simply Supported",
            AnalysisCondition::TwoSpanUnequal => "Two-Span Unequal",
        }
    }

    /// Number of spans the condition models
    pub fn span_count(&self) -> usize {
        match self {
            AnalysisCondition::SimplySupported => 1,
            AnalysisCondition::TwoSpanUnequal => 2,
        }
    }
}

impl std::fmt::Display for AnalysisCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Diagram quantity an equation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Deflection,
    BendingMoment,
    ShearForce,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [
        Quantity::ShearForce,
        Quantity::BendingMoment,
        Quantity::Deflection,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection",
            Quantity::BendingMoment => "Bending Moment",
            Quantity::ShearForce => "Shear Force",
        }
    }

    /// Short symbol for table headers
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::Deflection => "δ",
            Quantity::BendingMoment => "M",
            Quantity::ShearForce => "V",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which side of the interior support a position belongs to.
///
/// Only meaningful at `x = L1` of a two-span beam, where shear jumps by the
/// interior reaction. `Left` is the primary span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Primary (left) span, evaluates the left-hand limit
    Left,
    /// Secondary (right) span, evaluates the right-hand limit
    Right,
}

impl Side {
    pub fn from_primary_span(is_primary_span: bool) -> Self {
        if is_primary_span {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn is_primary_span(&self) -> bool {
        matches!(self, Side::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_display() {
        assert_eq!(AnalysisCondition::SimplySupported.to_string(), "Simply Supported");
        assert_eq!(AnalysisCondition::TwoSpanUnequal.to_string(), "Two-Span Unequal");
        assert_eq!(AnalysisCondition::TwoSpanUnequal.span_count(), 2);
    }

    #[test]
    fn test_side_from_flag() {
        assert_eq!(Side::from_primary_span(true), Side::Left);
        assert_eq!(Side::from_primary_span(false), Side::Right);
        assert!(Side::Left.is_primary_span());
        assert!(!Side::Right.is_primary_span());
    }

    #[test]
    fn test_quantity_serialization() {
        let json = serde_json::to_string(&Quantity::BendingMoment).unwrap();
        assert_eq!(json, "\"BendingMoment\"");
    }
}
