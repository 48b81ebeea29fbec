//! Diagram equations
//!
//! An [`Equation`] is an immutable value holding the beam, the load and any
//! constants derived from them (reactions, scaled stiffness). Evaluating it is
//! a pure function of position, so one equation can be evaluated from many
//! threads at once.

use serde::{Deserialize, Serialize};

use crate::calculations::sampler::Sample;
use crate::calculations::simply_supported::SimpleSpanEquation;
use crate::calculations::two_span::TwoSpanEquation;
use crate::calculations::{AnalysisCondition, Beam, Quantity, Side};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Divisor that rescales EI into the length unit of the span (1000³)
pub const EI_UNIT_DIVISOR: f64 = 1.0e9;

/// Multiplier applied to every deflection result
pub const DEFLECTION_SCALE: f64 = 1000.0;

/// One evaluated point of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance from the left support
    pub x: f64,
    /// Shear, moment or deflection at `x`
    pub y: f64,
}

/// Flexural stiffness in the units the deflection formulas expect.
///
/// `EI′ = EI / 1000³`, and results are multiplied by `j2 · 1000`. These
/// constants reconcile the length unit with the force unit of `EI` and must
/// not be simplified away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledStiffness {
    /// EI′ = EI / 1000³
    pub ei_scaled: f64,
    /// Material scaling coefficient j2
    pub j2: f64,
}

impl ScaledStiffness {
    pub fn from_material(material: &Material) -> CalcResult<Self> {
        let ei = material.flexural_rigidity()?;
        let ei_scaled = ei / EI_UNIT_DIVISOR;
        if ei_scaled == 0.0 {
            return Err(CalcError::invalid_argument(
                "EI",
                ei.to_string(),
                format!("Flexural rigidity of '{}' vanishes once rescaled", material.name),
            ));
        }
        Ok(Self {
            ei_scaled,
            j2: material.scaling_factor()?,
        })
    }

    /// Apply the `· 1000 · j2` output scaling
    #[inline]
    pub fn scale(&self, raw: f64) -> f64 {
        raw * DEFLECTION_SCALE * self.j2
    }
}

/// Reject positions outside `[0, total_length]` (NaN included)
pub(crate) fn check_domain(x: f64, total_length: f64) -> CalcResult<()> {
    if x >= 0.0 && x <= total_length {
        Ok(())
    } else {
        Err(CalcError::out_of_domain(x, total_length))
    }
}

/// Reject NaN and infinite loads
pub(crate) fn check_load(load: f64) -> CalcResult<()> {
    if load.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_argument(
            "load",
            load.to_string(),
            "Load must be finite",
        ))
    }
}

/// A diagram equation produced by one of the analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition")]
pub enum Equation {
    SimplySupported(SimpleSpanEquation),
    TwoSpanUnequal(TwoSpanEquation),
}

impl Equation {
    pub fn condition(&self) -> AnalysisCondition {
        match self {
            Equation::SimplySupported(_) => AnalysisCondition::SimplySupported,
            Equation::TwoSpanUnequal(_) => AnalysisCondition::TwoSpanUnequal,
        }
    }

    pub fn quantity(&self) -> Quantity {
        match self {
            Equation::SimplySupported(eq) => eq.quantity(),
            Equation::TwoSpanUnequal(eq) => eq.quantity(),
        }
    }

    pub fn beam(&self) -> &Beam {
        match self {
            Equation::SimplySupported(eq) => &eq.beam,
            Equation::TwoSpanUnequal(eq) => &eq.beam,
        }
    }

    pub fn load(&self) -> f64 {
        match self {
            Equation::SimplySupported(eq) => eq.load,
            Equation::TwoSpanUnequal(eq) => eq.load,
        }
    }

    /// Upper bound of the domain `[0, total_length]`
    pub fn total_length(&self) -> f64 {
        self.beam().total_length(self.condition())
    }

    /// Evaluate at `x`.
    ///
    /// `side` is only consulted where the quantity is discontinuous (two-span
    /// shear at the interior support); elsewhere it is ignored.
    ///
    /// # Errors
    /// `InvalidArgument` if `x` is outside the domain, or if `side` is needed
    /// and missing.
    pub fn evaluate(&self, x: f64, side: Option<Side>) -> CalcResult<DiagramPoint> {
        let y = match self {
            Equation::SimplySupported(eq) => eq.evaluate(x)?,
            Equation::TwoSpanUnequal(eq) => eq.evaluate(x, side)?,
        };
        Ok(DiagramPoint { x, y })
    }

    /// Evaluate at a sampler position, passing its side along
    pub fn evaluate_sample(&self, sample: Sample) -> CalcResult<DiagramPoint> {
        self.evaluate(sample.value, Some(sample.side))
    }

    /// Human-readable formula for reports
    pub fn formula(&self) -> &'static str {
        match self {
            Equation::SimplySupported(eq) => eq.formula(),
            Equation::TwoSpanUnequal(eq) => eq.formula(),
        }
    }
}
