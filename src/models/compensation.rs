use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::distribution::DATA_SOURCE;
use crate::error::Result;

/// Torre reports hourly rates; annualized at 40h/week over 50 weeks.
pub const HOURS_PER_YEAR: f64 = 2000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCompensationResponse {
    pub skill: String,
    pub average_compensation: f64,
    pub median_compensation: f64,
    pub min_compensation: f64,
    pub max_compensation: f64,
    pub currency: String,
    pub periodicity: String,
    pub data_points: u64,
    pub source: String,
}

impl SkillCompensationResponse {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            average_compensation: 0.0,
            median_compensation: 0.0,
            min_compensation: 0.0,
            max_compensation: 0.0,
            currency: "USD".to_string(),
            periodicity: "yearly".to_string(),
            data_points: 0,
            source: DATA_SOURCE.to_string(),
        }
    }

    /// Maps an `_analyze` response body onto yearly figures.
    pub fn from_analysis(skill: &str, body: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(body)?;
        let mut response = Self::new(skill);

        let compensation = &root["result"]["compensation"];
        if compensation.is_object() {
            let yearly = |key: &str| {
                compensation
                    .get(key)
                    .and_then(Value::as_f64)
                    .map(|hourly| hourly * HOURS_PER_YEAR)
            };

            if let Some(mean) = yearly("mean") {
                response.average_compensation = mean;
            }
            if let Some(suggested) = yearly("suggested") {
                response.median_compensation = suggested;
            }
            if let Some(min) = yearly("min") {
                response.min_compensation = min;
            }
            if let Some(max) = yearly("max") {
                response.max_compensation = max;
            }
            if let Some(total) = compensation.get("total").and_then(Value::as_u64) {
                response.data_points = total;
            }
        }

        // Root-level total wins over the compensation block's own count.
        if let Some(total) = root.get("total").and_then(Value::as_u64) {
            response.data_points = total;
        }

        Ok(response)
    }
}

pub fn compensation_analysis_payload(skill: &str) -> Value {
    serde_json::json!({
        "query": {
            "skill": {
                "term": skill,
                "experience": "unknown",
                "proficiency": "no-experience-interested"
            }
        },
        "analysis": {
            "compensation": {
                "mean": true,
                "suggested": true,
                "min": true,
                "max": true,
                "deciles": false,
                "quartiles": false,
                "histogram": false
            },
            "weighted": true
        }
    })
}
