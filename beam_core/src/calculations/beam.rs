//! Beam geometry
//!
//! A [`Beam`] is a prismatic member described by up to two span lengths and a
//! shared [`Material`]. Which spans matter depends on the
//! [`AnalysisCondition`] it is analyzed under.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::{AnalysisCondition, Beam};
//! use beam_core::materials::Material;
//!
//! let material = Arc::new(Material::new("CLT 5s", [("EI", 1.0e9), ("j2", 1.0)]));
//! let beam = Beam::new(4.0, 6.0, material).unwrap();
//!
//! assert_eq!(beam.total_length(AnalysisCondition::SimplySupported), 4.0);
//! assert_eq!(beam.total_length(AnalysisCondition::TwoSpanUnequal), 10.0);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculations::AnalysisCondition;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Prismatic beam over one or two spans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Length of the first (left) span
    pub primary_span: f64,

    /// Length of the second span. Ignored for a simply-supported analysis.
    #[serde(default)]
    pub secondary_span: f64,

    /// Material, shared with any other beam cut from the same stock
    pub material: Arc<Material>,
}

impl Beam {
    /// Create a validated beam
    pub fn new(
        primary_span: f64,
        secondary_span: f64,
        material: Arc<Material>,
    ) -> CalcResult<Self> {
        let beam = Self {
            primary_span,
            secondary_span,
            material,
        };
        beam.validate()?;
        Ok(beam)
    }

    /// Convenience for a single-span beam
    pub fn single_span(span: f64, material: Arc<Material>) -> CalcResult<Self> {
        Self::new(span, 0.0, material)
    }

    /// Length of the analysis domain `[0, total]` under `condition`
    pub fn total_length(&self, condition: AnalysisCondition) -> f64 {
        match condition {
            AnalysisCondition::SimplySupported => self.primary_span,
            AnalysisCondition::TwoSpanUnequal => self.primary_span + self.secondary_span,
        }
    }

    /// Check span geometry independent of condition
    pub fn validate(&self) -> CalcResult<()> {
        if !self.primary_span.is_finite() || self.primary_span <= 0.0 {
            return Err(CalcError::invalid_argument(
                "primary_span",
                self.primary_span.to_string(),
                "Primary span must be positive",
            ));
        }
        if !self.secondary_span.is_finite() || self.secondary_span < 0.0 {
            return Err(CalcError::invalid_argument(
                "secondary_span",
                self.secondary_span.to_string(),
                "Secondary span must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Check the geometry is usable under `condition`.
    ///
    /// A two-span analysis needs a real second span; with `secondary_span == 0`
    /// the three-moment reaction R3 divides by zero.
    pub fn validate_for(&self, condition: AnalysisCondition) -> CalcResult<()> {
        self.validate()?;
        match condition {
            AnalysisCondition::SimplySupported => {
                if self.secondary_span > 0.0 {
                    tracing::debug!(
                        secondary_span = self.secondary_span,
                        "secondary span ignored for simply-supported analysis"
                    );
                }
                Ok(())
            }
            AnalysisCondition::TwoSpanUnequal => {
                if self.secondary_span <= 0.0 {
                    return Err(CalcError::invalid_argument(
                        "secondary_span",
                        self.secondary_span.to_string(),
                        "Two-span analysis requires a positive secondary span",
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> Arc<Material> {
        Arc::new(Material::new("Test", [("EI", 1.0e9), ("j2", 1.0)]))
    }

    #[test]
    fn test_total_length() {
        let beam = Beam::new(4.0, 6.0, material()).unwrap();
        assert_eq!(beam.total_length(AnalysisCondition::SimplySupported), 4.0);
        assert_eq!(beam.total_length(AnalysisCondition::TwoSpanUnequal), 10.0);
    }

    #[test]
    fn test_validation() {
        assert!(Beam::new(0.0, 0.0, material()).is_err());
        assert!(Beam::new(-3.0, 0.0, material()).is_err());
        assert!(Beam::new(f64::NAN, 0.0, material()).is_err());
        assert!(Beam::new(3.0, -1.0, material()).is_err());
        assert!(Beam::single_span(3.0, material()).is_ok());
    }

    #[test]
    fn test_two_span_needs_secondary_span() {
        let beam = Beam::single_span(5.0, material()).unwrap();
        assert!(beam.validate_for(AnalysisCondition::SimplySupported).is_ok());
        let err = beam
            .validate_for(AnalysisCondition::TwoSpanUnequal)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_material_is_shared() {
        let mat = material();
        let a = Beam::single_span(3.0, Arc::clone(&mat)).unwrap();
        let b = Beam::new(3.0, 4.0, Arc::clone(&mat)).unwrap();
        assert!(Arc::ptr_eq(&a.material, &b.material));
        assert_eq!(Arc::strong_count(&mat), 3);
    }

    #[test]
    fn test_serialization() {
        let beam = Beam::new(4.0, 6.0, material()).unwrap();
        let json = serde_json::to_string(&beam).unwrap();
        let roundtrip: Beam = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }
}
