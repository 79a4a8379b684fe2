use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{error::StoreError, services::cities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionType {
    TempAbove,
    TempBelow,
    Rain,
    WindAbove,
}

impl ConditionType {
    /// Accepts the canonical names and the legacy Spanish ones
    /// (`temp_mayor`, `temp_menor`, `lluvia`, `viento`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "temp_above" | "temp_mayor" => Some(Self::TempAbove),
            "temp_below" | "temp_menor" => Some(Self::TempBelow),
            "rain" | "lluvia" => Some(Self::Rain),
            "wind_above" | "viento" => Some(Self::WindAbove),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TempAbove => "temp_above",
            Self::TempBelow => "temp_below",
            Self::Rain => "rain",
            Self::WindAbove => "wind_above",
        }
    }

    pub fn needs_threshold(self) -> bool {
        !matches!(self, Self::Rain)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDefinition {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: String,
    pub city: String,

    // kept as stored so unknown kinds survive a round trip
    pub condition_type: String,

    #[serde(default)]
    pub threshold: Option<f64>,

    pub active: bool,
    pub created_at: i64,
}

impl AlertDefinition {
    pub fn condition(&self) -> Option<ConditionType> {
        ConditionType::parse(&self.condition_type)
    }
}

/// Payload for creating an alert; checked before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub city: String,
    pub condition_type: String,

    #[serde(default)]
    pub threshold: Option<f64>,
}

impl NewAlert {
    pub fn validate(&self) -> Result<ConditionType, StoreError> {
        if !cities::is_supported(&self.city) {
            return Err(StoreError::Invalid(format!("unsupported city: {}", self.city)));
        }

        let Some(kind) = ConditionType::parse(&self.condition_type) else {
            return Err(StoreError::Invalid(format!(
                "unknown condition type: {}",
                self.condition_type
            )));
        };

        if kind.needs_threshold() {
            match self.threshold {
                Some(t) if t.is_finite() => {}
                _ => {
                    return Err(StoreError::Invalid(format!(
                        "{} requires a numeric threshold",
                        kind.as_str()
                    )));
                }
            }
        }

        Ok(kind)
    }
}
