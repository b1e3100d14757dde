use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ItemId};
use crate::domain::weight::{Weighed, WeightUnit};

/// A single piece of gear.
///
/// `weight` is per unit; the packed weight is `weight × qty` in
/// `weight_option`, or in the owner's preferred unit when that is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub weight: Option<f64>,
    pub weight_option: Option<WeightUnit>,
    pub qty: i32,
    pub worn: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Weighed for Item {
    fn weight(&self) -> Option<f64> {
        self.weight
    }

    fn unit(&self) -> Option<WeightUnit> {
        self.weight_option
    }

    fn qty(&self) -> Option<i32> {
        Some(self.qty)
    }

    fn worn(&self) -> bool {
        self.worn
    }
}
