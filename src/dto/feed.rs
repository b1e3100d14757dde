use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::weight::{WeightSummary, WeightUnit};

/// A shared bag as listed in the community feed, in its owner's unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntryDto {
    pub bag_id: i32,
    pub name: String,
    pub owner: String,
    pub unit: WeightUnit,
    #[serde(flatten)]
    pub weights: WeightSummary,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDto {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub entries: Vec<FeedEntryDto>,
}
