use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BagId, CategoryColor, CategoryId};

/// Gear category inside a bag, e.g. "Shelter" or "Cook system".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub bag_id: BagId,
    pub name: String,
    pub color: Option<CategoryColor>,
    /// Ascending and unique within the bag.
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
