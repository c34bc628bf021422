/// Smoothing parameters for the language-model scorers.
///
/// Every field has a default, so a JSON document only needs to name what it
/// overrides:
///
/// ```json
/// { "field": "body", "dirichlet": { "mu": 1500 } }
/// ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LmError, Result};
use crate::stats::FIELD_BODY;

pub const DEFAULT_MU: f64 = 2000.0;
pub const DEFAULT_JM_LAMBDA: f64 = 0.1;
pub const DEFAULT_ABS_DELTA: f64 = 0.7;
pub const DEFAULT_ABS_LAMBDA: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirichletParams {
    pub mu: f64,
}

impl Default for DirichletParams {
    fn default() -> Self {
        DirichletParams { mu: DEFAULT_MU }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JelinekMercerParams {
    pub lambda: f64,
}

impl Default for JelinekMercerParams {
    fn default() -> Self {
        JelinekMercerParams {
            lambda: DEFAULT_JM_LAMBDA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsoluteDiscountParams {
    pub delta: f64,
    /// Reserved. Not used by the current formula.
    pub lambda: f64,
}

impl Default for AbsoluteDiscountParams {
    fn default() -> Self {
        AbsoluteDiscountParams {
            delta: DEFAULT_ABS_DELTA,
            lambda: DEFAULT_ABS_LAMBDA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LmConfig {
    /// Indexed field the statistics are read from.
    pub field: String,
    pub dirichlet: DirichletParams,
    pub jelinek_mercer: JelinekMercerParams,
    pub absolute_discount: AbsoluteDiscountParams,
}

impl Default for LmConfig {
    fn default() -> Self {
        LmConfig {
            field: FIELD_BODY.to_string(),
            dirichlet: DirichletParams::default(),
            jelinek_mercer: JelinekMercerParams::default(),
            absolute_discount: AbsoluteDiscountParams::default(),
        }
    }
}

impl LmConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject parameters outside the range each smoothing family is defined on.
    pub fn validate(&self) -> Result<()> {
        if self.field.is_empty() {
            return Err(LmError::Config("field must not be empty".to_string()));
        }
        check_finite("dirichlet.mu", self.dirichlet.mu)?;
        if self.dirichlet.mu < 0.0 {
            return Err(LmError::Config(format!(
                "dirichlet.mu must be >= 0, got {}",
                self.dirichlet.mu
            )));
        }
        check_unit_interval("jelinek_mercer.lambda", self.jelinek_mercer.lambda)?;
        check_unit_interval("absolute_discount.delta", self.absolute_discount.delta)?;
        check_unit_interval("absolute_discount.lambda", self.absolute_discount.lambda)?;
        Ok(())
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LmError::Config(format!("{} must be finite, got {}", name, value)))
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(LmError::Config(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}
