use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BagGoal, BagId, TripId};

/// A packed bag belonging to a trip.
///
/// The `goal` is the target base weight in the owning user's preferred unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bag {
    pub id: BagId,
    pub trip_id: TripId,
    pub name: String,
    pub goal: BagGoal,
    /// Shared bags are listed in the community feed.
    pub public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
