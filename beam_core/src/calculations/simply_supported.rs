//! Simply-Supported Beam Analysis
//!
//! Single span `L`, pin at `x = 0`, roller at `x = L`, uniform load `w` over
//! the full span.
//!
//! ## Formulas
//! ```text
//! V(x) = w·(L/2 − x)
//! M(x) = −(w·x/2)·(L − x)
//! δ(x) = −(w·x / (24·EI′))·(L³ − 2·L·x² + x³)·j2·1000
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::{Beam, BeamAnalyzer, SimplySupported};
//! use beam_core::materials::Material;
//!
//! let material = Arc::new(Material::new("Test", [("EI", 1.0e9), ("j2", 1.0)]));
//! let beam = Beam::single_span(6.0, material).unwrap();
//!
//! let moment = SimplySupported.bending_moment_equation(&beam, 10.0).unwrap();
//! assert_eq!(moment.evaluate(3.0, None).unwrap().y, -45.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam_analysis::BeamAnalyzer;
use crate::calculations::equation::{check_domain, check_load, ScaledStiffness};
use crate::calculations::{AnalysisCondition, Beam, Equation, Quantity};
use crate::errors::CalcResult;

/// Analyzer for a single simply-supported span
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplySupported;

/// Which formula a [`SimpleSpanEquation`] evaluates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "quantity")]
pub enum SimpleSpanForm {
    ShearForce,
    BendingMoment,
    Deflection { stiffness: ScaledStiffness },
}

/// Uniform-load equation on a simply-supported span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleSpanEquation {
    pub beam: Beam,
    /// Uniform load intensity w
    pub load: f64,
    pub form: SimpleSpanForm,
}

impl SimpleSpanEquation {
    pub fn quantity(&self) -> Quantity {
        match self.form {
            SimpleSpanForm::ShearForce => Quantity::ShearForce,
            SimpleSpanForm::BendingMoment => Quantity::BendingMoment,
            SimpleSpanForm::Deflection { .. } => Quantity::Deflection,
        }
    }

    pub fn span(&self) -> f64 {
        self.beam.primary_span
    }

    /// Evaluate at `x ∈ [0, L]`
    pub fn evaluate(&self, x: f64) -> CalcResult<f64> {
        let l = self.span();
        check_domain(x, l)?;
        let w = self.load;

        let y = match self.form {
            SimpleSpanForm::ShearForce => w * (l / 2.0 - x),
            SimpleSpanForm::BendingMoment => -(w * x / 2.0) * (l - x),
            SimpleSpanForm::Deflection { stiffness } => {
                let raw = -(w * x / (24.0 * stiffness.ei_scaled))
                    * (l.powi(3) - 2.0 * l * x * x + x.powi(3));
                stiffness.scale(raw)
            }
        };
        Ok(y)
    }

    pub fn formula(&self) -> &'static str {
        match self.form {
            SimpleSpanForm::ShearForce => "V(x) = w(L/2 - x)",
            SimpleSpanForm::BendingMoment => "M(x) = -(wx/2)(L - x)",
            SimpleSpanForm::Deflection { .. } => {
                "δ(x) = -(wx / 24EI')(L³ - 2Lx² + x³)·j2·1000"
            }
        }
    }
}

impl SimplySupported {
    fn equation(&self, beam: &Beam, load: f64, form: SimpleSpanForm) -> CalcResult<Equation> {
        beam.validate_for(AnalysisCondition::SimplySupported)?;
        check_load(load)?;
        Ok(Equation::SimplySupported(SimpleSpanEquation {
            beam: beam.clone(),
            load,
            form,
        }))
    }
}

impl BeamAnalyzer for SimplySupported {
    fn condition(&self) -> AnalysisCondition {
        AnalysisCondition::SimplySupported
    }

    fn deflection_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        let stiffness = ScaledStiffness::from_material(&beam.material)?;
        self.equation(beam, load, SimpleSpanForm::Deflection { stiffness })
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        self.equation(beam, load, SimpleSpanForm::BendingMoment)
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> CalcResult<Equation> {
        self.equation(beam, load, SimpleSpanForm::ShearForce)
    }
}
