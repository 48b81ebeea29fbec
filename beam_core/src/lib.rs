//! # beam_core - Beam Diagram Engine
//!
//! `beam_core` computes shear-force, bending-moment and deflection diagrams
//! for prismatic beams under a uniformly distributed load, and samples them
//! into point sequences a renderer can draw directly. All inputs and outputs
//! are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Equations are immutable values, evaluation is a pure function
//! - **Closed conditions**: Support conditions are an enum, each backed by one analyzer
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::calculations::{analyze, sample, AnalysisCondition, Beam, Quantity};
//! use beam_core::materials::Material;
//!
//! let material = Arc::new(Material::new("CLT 5s", [("EI", 1.0e9), ("j2", 1.0)]));
//! let beam = Beam::new(4.0, 6.0, material).unwrap();
//!
//! let condition = AnalysisCondition::TwoSpanUnequal;
//! let shear = analyze(&beam, 5.0, condition, Quantity::ShearForce).unwrap();
//! for s in sample(&beam, condition, 10).unwrap() {
//!     let point = shear.equation.evaluate_sample(s).unwrap();
//!     println!("{:>6.2} {:>10.3}", point.x, point.y);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beams, analyzers, equations, sampling and diagrams
//! - [`materials`] - Material stiffness records
//! - [`case`] - Self-contained analysis case (configuration file contents)
//! - [`errors`] - Structured error types
//! - [`file_io`] - Case file load/save with atomic writes

pub mod calculations;
pub mod case;
pub mod errors;
pub mod file_io;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, sample, AnalysisCondition, AnalysisResult, Beam, BeamAnalysis, Diagram, Equation,
    Quantity, Side,
};
pub use case::BeamCase;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_case, save_case};
pub use materials::Material;
