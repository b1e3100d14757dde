use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;
use crate::domain::weight::WeightUnit;

/// Owner of trips and bags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Preferred display unit. `None` when the stored value is not a
    /// recognized unit; readers then use the configured default.
    pub weight_option: Option<WeightUnit>,
    pub created_at: NaiveDateTime,
}

impl User {
    /// The user's preferred unit, or `default` when none is recognized.
    pub fn preferred_unit(&self, default: WeightUnit) -> WeightUnit {
        self.weight_option.unwrap_or(default)
    }
}
