//! Decision outcome as shown to users and scripts.

use serde::Serialize;

use crate::error::Result;
use crate::policy::{Policy, PolicyType};

/// Outcome of one upgrade check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    pub policy: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub current: String,
    pub new: String,
    pub update: bool,
}

impl DecisionReport {
    /// Runs `policy` over the pair and records the outcome.
    pub fn evaluate(policy: &Policy, current: &str, new: &str) -> Result<Self> {
        let update = policy.should_update(current, new)?;
        Ok(DecisionReport {
            policy: policy.name().to_string(),
            policy_type: policy.policy_type(),
            current: current.to_string(),
            new: new.to_string(),
            update,
        })
    }

    /// JSON rendering for machine consumers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Granularity;

    #[test]
    fn test_evaluate_records_outcome() {
        let report =
            DecisionReport::evaluate(&Policy::semver(Granularity::Patch), "1.2.3", "1.2.4").unwrap();
        assert!(report.update);
        assert_eq!(report.policy, "patch");
        assert_eq!(report.policy_type, PolicyType::Semver);
    }

    #[test]
    fn test_evaluate_propagates_parse_error() {
        let err = DecisionReport::evaluate(&Policy::semver(Granularity::All), "abc", "1.0.0")
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_json_shape() {
        let report = DecisionReport::evaluate(&Policy::Force, "1.0.0", "0.1.0").unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["policy"], "force");
        assert_eq!(value["type"], "force");
        assert_eq!(value["current"], "1.0.0");
        assert_eq!(value["new"], "0.1.0");
        assert_eq!(value["update"], true);
    }
}
