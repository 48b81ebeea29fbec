//! Beam Analysis Registry
//!
//! [`BeamAnalysis`] maps each [`AnalysisCondition`] to the [`BeamAnalyzer`]
//! that knows its formulas, and wraps every equation it hands out in an
//! [`AnalysisResult`] recording where it came from.
//!
//! Supporting a new condition means adding a variant and registering an
//! analyzer for it; the dispatch in this module does not change.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::{AnalysisCondition, Beam, BeamAnalysis, Side};
//! use beam_core::materials::Material;
//!
//! let material = Arc::new(Material::new("CLT", [("EI", 1.0e9), ("j2", 1.0)]));
//! let beam = Beam::new(4.0, 6.0, material).unwrap();
//!
//! let registry = BeamAnalysis::default();
//! let shear = registry
//!     .get_shear_force(&beam, 5.0, AnalysisCondition::TwoSpanUnequal)
//!     .unwrap();
//!
//! let left = shear.evaluate(4.0, Some(Side::Left)).unwrap();
//! assert_eq!(left.y, -14.375);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::diagram::Diagram;
use crate::calculations::sampler::sample;
use crate::calculations::simply_supported::SimplySupported;
use crate::calculations::two_span::TwoSpanUnequal;
use crate::calculations::{AnalysisCondition, Beam, DiagramPoint, Equation, Quantity, Side};
use crate::errors::{CalcError, CalcResult};

/// Formula provider for one support condition.
///
/// Each method builds a fresh [`Equation`] for the given beam and uniform
/// load. The defaults report [`CalcError::NotImplemented`], so an analyzer
/// can be registered before all of its formulas exist.
pub trait BeamAnalyzer: Send + Sync {
    /// Condition this analyzer handles
    fn condition(&self) -> AnalysisCondition;

    fn deflection_equation(&self, _beam: &Beam, _load: f64) -> CalcResult<Equation> {
        Err(CalcError::not_implemented(self.condition(), Quantity::Deflection))
    }

    fn bending_moment_equation(&self, _beam: &Beam, _load: f64) -> CalcResult<Equation> {
        Err(CalcError::not_implemented(self.condition(), Quantity::BendingMoment))
    }

    fn shear_force_equation(&self, _beam: &Beam, _load: f64) -> CalcResult<Equation> {
        Err(CalcError::not_implemented(self.condition(), Quantity::ShearForce))
    }
}

/// Equation plus the inputs it was derived from. Rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub condition: AnalysisCondition,
    pub quantity: Quantity,
    pub beam: Beam,
    pub load: f64,
    pub equation: Equation,
}

impl AnalysisResult {
    /// Evaluate the wrapped equation
    pub fn evaluate(&self, x: f64, side: Option<Side>) -> CalcResult<DiagramPoint> {
        self.equation.evaluate(x, side)
    }

    /// Sample the full domain and evaluate the equation at every position
    pub fn diagram(&self, segment_count: usize) -> CalcResult<Diagram> {
        let samples = sample(&self.beam, self.condition, segment_count)?;
        Diagram::from_samples(&self.equation, samples)
    }
}

/// Registry of analyzers keyed by condition
pub struct BeamAnalysis {
    analyzers: HashMap<AnalysisCondition, Box<dyn BeamAnalyzer>>,
}

impl BeamAnalysis {
    /// Registry with no analyzers
    pub fn empty() -> Self {
        Self {
            analyzers: HashMap::new(),
        }
    }

    /// Register `analyzer` under its own condition, replacing any previous one
    pub fn register<A: BeamAnalyzer + 'static>(&mut self, analyzer: A) -> &mut Self {
        let condition = analyzer.condition();
        if self.analyzers.insert(condition, Box::new(analyzer)).is_some() {
            tracing::warn!(%condition, "replaced existing analyzer");
        }
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_analyzer<A: BeamAnalyzer + 'static>(mut self, analyzer: A) -> Self {
        self.register(analyzer);
        self
    }

    pub fn supports(&self, condition: AnalysisCondition) -> bool {
        self.analyzers.contains_key(&condition)
    }

    fn analyzer(&self, condition: AnalysisCondition) -> CalcResult<&dyn BeamAnalyzer> {
        self.analyzers
            .get(&condition)
            .map(|a| &**a)
            .ok_or_else(|| CalcError::unsupported_condition(condition))
    }

    /// Build the equation for any quantity
    pub fn analyze(
        &self,
        beam: &Beam,
        load: f64,
        condition: AnalysisCondition,
        quantity: Quantity,
    ) -> CalcResult<AnalysisResult> {
        let analyzer = self.analyzer(condition)?;

        tracing::debug!(%condition, %quantity, load, "building equation");
        let equation = match quantity {
            Quantity::Deflection => analyzer.deflection_equation(beam, load)?,
            Quantity::BendingMoment => analyzer.bending_moment_equation(beam, load)?,
            Quantity::ShearForce => analyzer.shear_force_equation(beam, load)?,
        };

        Ok(AnalysisResult {
            condition,
            quantity,
            beam: beam.clone(),
            load,
            equation,
        })
    }

    pub fn get_deflection(
        &self,
        beam: &Beam,
        load: f64,
        condition: AnalysisCondition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze(beam, load, condition, Quantity::Deflection)
    }

    pub fn get_bending_moment(
        &self,
        beam: &Beam,
        load: f64,
        condition: AnalysisCondition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze(beam, load, condition, Quantity::BendingMoment)
    }

    pub fn get_shear_force(
        &self,
        beam: &Beam,
        load: f64,
        condition: AnalysisCondition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze(beam, load, condition, Quantity::ShearForce)
    }
}

impl Default for BeamAnalysis {
    /// Registry with both built-in analyzers
    fn default() -> Self {
        Self::empty()
            .with_analyzer(SimplySupported)
            .with_analyzer(TwoSpanUnequal)
    }
}

impl std::fmt::Debug for BeamAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut conditions: Vec<_> = self.analyzers.keys().collect();
        conditions.sort_by_key(|c| c.display_name());
        f.debug_struct("BeamAnalysis")
            .field("conditions", &conditions)
            .finish()
    }
}

static DEFAULT_REGISTRY: Lazy<BeamAnalysis> = Lazy::new(BeamAnalysis::default);

/// Analyze with the process-wide default registry
pub fn analyze(
    beam: &Beam,
    load: f64,
    condition: AnalysisCondition,
    quantity: Quantity,
) -> CalcResult<AnalysisResult> {
    DEFAULT_REGISTRY.analyze(beam, load, condition, quantity)
}
