//! # Two-Span Continuous Beam Analysis
//!
//! Continuous beam over two unequal spans `L1` (primary) and `L2` (secondary)
//! with pinned supports at `x = 0`, `x = L1` and `x = L1 + L2`, uniform load
//! `w` over both spans.
//!
//! ## Method
//!
//! The interior-support moment comes from the three-moment relation with zero
//! end moments, and the reactions follow from statics:
//!
//! ```text
//! M1 = −(w·L2³ + w·L1³) / (8·(L1 + L2))
//! R1 = M1/L1 + w·L1/2
//! R3 = M1/L2 + w·L2/2
//! R2 = w·(L1 + L2) − R1 − R3
//! ```
//!
//! ## Interior Support
//!
//! Shear jumps by `R2` at `x = L1`. Evaluating shear there needs a
//! [`Side`]: `Left` gives `R1 − w·L1`, `Right` gives `R1 + R2 − w·L1`.
//! Moment and deflection are continuous and take no hint.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::TwoSpanReactions;
//!
//! let r = TwoSpanReactions::solve(4.0, 6.0, 5.0);
//! assert_eq!(r.m1, -17.5);
//! assert_eq!(r.r1, 5.625);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam_analysis::BeamAnalyzer;
use crate::calculations::equation::{check_domain, check_load, ScaledStiffness};
use crate::calculations::{AnalysisCondition, Beam, Equation, Quantity, Side};
use crate::errors::{CalcError, CalcResult};

/// Analyzer for a continuous beam over two unequal spans
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSpanUnequal;

/// Interior moment and support reactions of a two-span beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSpanReactions {
    /// Moment at the interior support (negative = hogging)
    pub m1: f64,
    /// Left end reaction
    pub r1: f64,
    /// Interior support reaction
    pub r2: f64,
    /// Right end reaction
    pub r3: f64,
}

impl TwoSpanReactions {
    /// Solve for spans `l1`, `l2` under uniform load `w`
    pub fn solve(l1: f64, l2: f64, w: f64) -> Self {
        let m1 = -(w * l2.powi(3) + w * l1.powi(3)) / (8.0 * (l1 + l2));
        let r1 = m1 / l1 + w * l1 / 2.0;
        let r3 = m1 / l2 + w * l2 / 2.0;
        let r2 = w * (l1 + l2) - r1 - r3;
        Self { m1, r1, r2, r3 }
    }

    /// Sum of reactions (equals total load `w·(L1 + L2)`)
    pub fn total(&self) -> f64 {
        self.r1 + self.r2 + self.r3
    }
}

/// Which formula a [`TwoSpanEquation`] evaluates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "quantity")]
pub enum TwoSpanForm {
    ShearForce,
    BendingMoment,
    Deflection { stiffness: ScaledStiffness },
}

/// Uniform-load equation on a two-span continuous beam.
///
/// Reactions are solved once when the equation is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSpanEquation {
    pub beam: Beam,
    /// Uniform load intensity w
    pub load: f64,
    pub reactions: TwoSpanReactions,
    pub form: TwoSpanForm,
}

impl TwoSpanEquation {
    pub fn quantity(&self) -> Quantity {
        match self.form {
            TwoSpanForm::ShearForce => Quantity::ShearForce,
            TwoSpanForm::BendingMoment => Quantity::BendingMoment,
            TwoSpanForm::Deflection { .. } => Quantity::Deflection,
        }
    }

    /// Position of the interior support
    pub fn support_position(&self) -> f64 {
        self.beam.primary_span
    }

    pub fn total_length(&self) -> f64 {
        self.beam.primary_span + self.beam.secondary_span
    }

    /// Evaluate at `x ∈ [0, L1 + L2]`
    pub fn evaluate(&self, x: f64, side: Option<Side>) -> CalcResult<f64> {
        check_domain(x, self.total_length())?;

        match self.form {
            TwoSpanForm::ShearForce => self.shear(x, side),
            TwoSpanForm::BendingMoment => Ok(self.moment(x)),
            TwoSpanForm::Deflection { stiffness } => Ok(self.deflection(x, stiffness)),
        }
    }

    fn shear(&self, x: f64, side: Option<Side>) -> CalcResult<f64> {
        let l1 = self.support_position();
        let w = self.load;
        let TwoSpanReactions { r1, r2, .. } = self.reactions;

        let side = if x < l1 {
            Side::Left
        } else if x > l1 {
            Side::Right
        } else {
            side.ok_or_else(|| {
                CalcError::invalid_argument(
                    "side",
                    "None",
                    format!("Shear at the interior support x = {} needs a side", l1),
                )
            })?
        };

        Ok(match side {
            Side::Left => r1 - w * x,
            Side::Right => r1 + r2 - w * x,
        })
    }

    fn moment(&self, x: f64) -> f64 {
        let l1 = self.support_position();
        let w = self.load;
        let TwoSpanReactions { r1, r2, .. } = self.reactions;

        if x <= l1 {
            -(r1 * x - w * x * x / 2.0)
        } else {
            -(r1 * x + r2 * (x - l1) - w * x * x / 2.0)
        }
    }

    fn deflection(&self, x: f64, stiffness: ScaledStiffness) -> f64 {
        if x == 0.0 {
            return 0.0;
        }

        let l1 = self.support_position();
        let w = self.load;
        let ei = stiffness.ei_scaled;
        let TwoSpanReactions { r1, r2, .. } = self.reactions;

        let raw = if x <= l1 {
            (x / (24.0 * ei))
                * (4.0 * r1 * x * x - w * x.powi(3) + w * l1.powi(3) - 4.0 * r1 * l1 * l1)
        } else {
            // p2 - p3 = R2·(x - L1)³/6
            let p1 = (r1 * x / 6.0) * (x * x - l1 * l1);
            let p2 = (r2 * x / 6.0) * (x * x - 3.0 * l1 * x + 3.0 * l1 * l1);
            let p3 = r2 * l1.powi(3) / 6.0;
            let p4 = (w * x / 24.0) * (x.powi(3) - l1.powi(3));
            (p1 + p2 - p3 - p4) / ei
        };
        stiffness.scale(raw)
    }

    pub fn formula(&self) -> &'static str {
        match self.form {
            TwoSpanForm::ShearForce => "V(x) = R1 - wx (x < L1); R1 + R2 - wx (x > L1)",
            TwoSpanForm::BendingMoment => {
                "M(x) = -(R1x - wx²/2) (x ≤ L1); -(R1x + R2(x - L1) - wx²/2) (x > L1)"
            }
            TwoSpanForm::Deflection { .. } => {
                "δ(x) = [R1x³/6 + R2⟨x - L1⟩³/6 - wx⁴/24 + C1x] / EI'·j2·1000"
            }
        }
    }
}

impl TwoSpanUnequal {
    fn equation(&self, beam: &Beam, load: f64, form: TwoSpanForm) -> CalcResult<Equation> {
        beam.validate_for(AnalysisCondition::TwoSpanUnequal)?;
        check_load(load)?;
        let reactions = TwoSpanReactions::solve(beam.primary_span, beam.secondary_span, load);
        tracing::debug!(
            l1 = beam.primary_span,
            l2 = beam.secondary_span,
            load,
            m1 = reactions.m1,
            r1 = reactions.r1,
            r2 = reactions.r2,
            r3 = reactions.r3,
            "solved two-span reactions"
        );
        Ok(Equation::TwoSpanUnequal(TwoSpanEquation {
            beam: beam.clone(),
            load,
            reactions,
            form,
        }))
    }
}

impl BeamAnalyzer for TwoSpanUnequal {
    fn condition(&self) -> AnalysisCondition {
        AnalysisCondition::TwoSpanUnequal
    }

    fn deflection_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        let stiffness = ScaledStiffness::from_material(&beam.material)?;
        self.equation(beam, load, TwoSpanForm::Deflection { stiffness })
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        self.equation(beam, load, TwoSpanForm::BendingMoment)
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        self.equation(beam, load, TwoSpanForm::ShearForce)
    }
}
