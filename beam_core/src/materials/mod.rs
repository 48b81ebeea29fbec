//! # Materials
//!
//! A [`Material`] is a named bag of stiffness coefficients. The analyzers only
//! look up the keys they need; anything else stored on the material is carried
//! along untouched so a caller can keep layup-specific data next to it.
//!
//! ## Property Keys
//!
//! | Key  | Meaning                                  | Used by            |
//! |------|------------------------------------------|--------------------|
//! | `EI` | Flexural rigidity (N·mm² scale)          | deflection         |
//! | `GA` | Shear rigidity                           | (carried only)     |
//! | `j2` | Unit-scaling coefficient for deflection  | deflection         |
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::Material;
//!
//! let clt = Material::new("CLT 5s", [("EI", 1.2e12), ("j2", 1.0)]);
//! assert_eq!(clt.flexural_rigidity().unwrap(), 1.2e12);
//! assert_eq!(clt.property("GA"), None);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Property key for flexural rigidity
pub const FLEXURAL_RIGIDITY: &str = "EI";

/// Property key for shear rigidity
pub const SHEAR_RIGIDITY: &str = "GA";

/// Property key for the deflection unit-scaling coefficient
pub const SCALING_FACTOR: &str = "j2";

/// Named record of structural stiffness coefficients.
///
/// Immutable once built; share it between beams with an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name (e.g. "CLT 5s 200")
    pub name: String,
    /// Coefficient table keyed by property name
    properties: BTreeMap<String, f64>,
}

impl Material {
    /// Create a material from a name and any iterable of `(key, value)` pairs
    pub fn new<K, I>(name: impl Into<String>, properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            name: name.into(),
            properties: properties
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Look up a raw property value
    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }

    /// Look up a property that a formula cannot do without
    pub fn require(&self, key: &str) -> CalcResult<f64> {
        let value = self
            .property(key)
            .ok_or_else(|| CalcError::missing_property(&self.name, key))?;
        if !value.is_finite() {
            return Err(CalcError::invalid_argument(
                key,
                value.to_string(),
                format!("Property of material '{}' must be finite", self.name),
            ));
        }
        Ok(value)
    }

    /// All properties, ordered by key
    pub fn properties(&self) -> &BTreeMap<String, f64> {
        &self.properties
    }

    /// Flexural rigidity EI. Required for any deflection formula and must be non-zero.
    pub fn flexural_rigidity(&self) -> CalcResult<f64> {
        let ei = self.require(FLEXURAL_RIGIDITY)?;
        if ei == 0.0 {
            return Err(CalcError::invalid_argument(
                FLEXURAL_RIGIDITY,
                "0",
                format!("Flexural rigidity of '{}' must be non-zero", self.name),
            ));
        }
        Ok(ei)
    }

    /// Shear rigidity GA, if the material carries one
    pub fn shear_rigidity(&self) -> Option<f64> {
        self.property(SHEAR_RIGIDITY)
    }

    /// Deflection scaling coefficient j2 (1.0 when the material does not set it)
    pub fn scaling_factor(&self) -> CalcResult<f64> {
        match self.property(SCALING_FACTOR) {
            Some(_) => self.require(SCALING_FACTOR),
            None => Ok(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clt() -> Material {
        Material::new("CLT 5s", [("EI", 1.0e9), ("GA", 4.5e7), ("j2", 0.85)])
    }

    #[test]
    fn test_property_lookup() {
        let mat = clt();
        assert_eq!(mat.flexural_rigidity().unwrap(), 1.0e9);
        assert_eq!(mat.shear_rigidity(), Some(4.5e7));
        assert_eq!(mat.scaling_factor().unwrap(), 0.85);
        assert_eq!(mat.property("rho"), None);
        assert_eq!(mat.properties().len(), 3);
    }

    #[test]
    fn test_missing_flexural_rigidity() {
        let mat = Material::new("Bare", [("j2", 1.0)]);
        assert_eq!(
            mat.flexural_rigidity(),
            Err(CalcError::missing_property("Bare", "EI"))
        );
    }

    #[test]
    fn test_zero_or_nan_rigidity_rejected() {
        let zero = Material::new("Zero", [("EI", 0.0)]);
        assert!(matches!(
            zero.flexural_rigidity(),
            Err(CalcError::InvalidArgument { .. })
        ));

        let nan = Material::new("NaN", [("EI", f64::NAN)]);
        assert!(matches!(
            nan.flexural_rigidity(),
            Err(CalcError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_scaling_factor_defaults_to_one() {
        let mat = Material::new("No j2", [("EI", 1.0e9)]);
        assert_eq!(mat.scaling_factor().unwrap(), 1.0);
    }

    #[test]
    fn test_serialization() {
        let mat = clt();
        let json = serde_json::to_string(&mat).unwrap();
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }
}
