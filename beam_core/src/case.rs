//! # Beam Case
//!
//! A [`BeamCase`] bundles everything one analysis run needs: the beam and its
//! material, the load, the support condition and the diagram settings. Cases
//! serialize to human-readable JSON (`*.beam.json`) so a shell can keep them
//! as configuration files.
//!
//! ## Structure
//!
//! ```text
//! BeamCase
//! ├── meta: CaseMetadata (version, id, label, timestamps)
//! ├── beam: Beam (spans + material)
//! ├── load: f64
//! ├── condition: AnalysisCondition
//! └── settings: DiagramSettings (segment count)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::{AnalysisCondition, Beam, Quantity};
//! use beam_core::case::BeamCase;
//! use beam_core::materials::Material;
//!
//! let material = Arc::new(Material::new("CLT", [("EI", 1.0e9), ("j2", 1.0)]));
//! let beam = Beam::single_span(6.0, material).unwrap();
//! let case = BeamCase::new("Roof panel", beam, 10.0, AnalysisCondition::SimplySupported);
//!
//! let moment = case.diagram(Quantity::BendingMoment).unwrap();
//! assert_eq!(moment.min.y, -45.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{
    analyze, AnalysisCondition, AnalysisResult, Beam, Diagram, Quantity, DEFAULT_SEGMENT_COUNT,
};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for case files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A single analysis case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamCase {
    pub meta: CaseMetadata,
    pub beam: Beam,
    /// Uniform load intensity w
    pub load: f64,
    pub condition: AnalysisCondition,
    #[serde(default)]
    pub settings: DiagramSettings,
}

impl BeamCase {
    pub fn new(
        label: impl Into<String>,
        beam: Beam,
        load: f64,
        condition: AnalysisCondition,
    ) -> Self {
        let now = Utc::now();
        BeamCase {
            meta: CaseMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                label: label.into(),
                created: now,
                modified: now,
            },
            beam,
            load,
            condition,
            settings: DiagramSettings::default(),
        }
    }

    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.settings.segment_count = segment_count;
        self
    }

    /// Check the case is analyzable before running anything
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate_for(self.condition)?;
        if !self.load.is_finite() {
            return Err(CalcError::invalid_argument(
                "load",
                self.load.to_string(),
                "Load must be finite",
            ));
        }
        if self.settings.segment_count == 0 {
            return Err(CalcError::invalid_argument(
                "settings.segment_count",
                "0",
                "At least one segment is required",
            ));
        }
        Ok(())
    }

    /// Equation for one quantity, from the default registry
    pub fn analyze(&self, quantity: Quantity) -> CalcResult<AnalysisResult> {
        analyze(&self.beam, self.load, self.condition, quantity)
    }

    /// Sampled diagram for one quantity at the configured resolution
    pub fn diagram(&self, quantity: Quantity) -> CalcResult<Diagram> {
        self.analyze(quantity)?.diagram(self.settings.segment_count)
    }

    /// Shear, moment and deflection diagrams, in that order
    pub fn diagrams(&self) -> CalcResult<Vec<Diagram>> {
        Quantity::ALL.iter().map(|&q| self.diagram(q)).collect()
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Case metadata stored in the file header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub id: Uuid,
    /// User label (e.g. "Floor panel, grid B-C")
    #[serde(default)]
    pub label: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Diagram resolution settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSettings {
    /// Segments over the full beam length
    pub segment_count: usize,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        DiagramSettings {
            segment_count: DEFAULT_SEGMENT_COUNT,
        }
    }
}
