//! Scoring rules and risk bands
//!
//! A template's thresholds partition the score axis into four bands:
//! Low [0, low], Medium (low, medium], High (medium, high],
//! Critical (high, inf). `critical_risk` labels the floor of the
//! Critical band for display; the actual High/Critical boundary is
//! `high_risk`.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Risk band thresholds for a scored template (FRAT/GRAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    pub low_risk: u32,
    pub medium_risk: u32,
    pub high_risk: u32,
    pub critical_risk: u32,
}

impl ScoringRules {
    pub fn new(low_risk: u32, medium_risk: u32, high_risk: u32, critical_risk: u32) -> Self {
        Self {
            low_risk,
            medium_risk,
            high_risk,
            critical_risk,
        }
    }

    /// Thresholds must be strictly increasing
    pub fn validate(&self) -> FormResult<()> {
        if self.low_risk < self.medium_risk
            && self.medium_risk < self.high_risk
            && self.high_risk < self.critical_risk
        {
            Ok(())
        } else {
            Err(FormError::InvalidThresholds)
        }
    }
}

/// Risk band classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Display label ("Low Risk", "Critical Risk", ...)
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_increasing_thresholds() {
        assert!(ScoringRules::new(10, 20, 30, 40).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_equal_thresholds() {
        assert!(matches!(
            ScoringRules::new(10, 10, 30, 40).validate(),
            Err(FormError::InvalidThresholds)
        ));
    }

    #[test]
    fn test_validate_rejects_decreasing_thresholds() {
        assert!(ScoringRules::new(40, 30, 20, 10).validate().is_err());
        assert!(ScoringRules::new(10, 20, 40, 30).validate().is_err());
    }

    #[test]
    fn test_serialized_key_names() {
        let json = serde_json::to_value(ScoringRules::new(10, 20, 30, 40)).unwrap();
        assert_eq!(json["lowRisk"], 10);
        assert_eq!(json["criticalRisk"], 40);
    }
}
