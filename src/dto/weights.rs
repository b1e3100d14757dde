use serde::Serialize;

use crate::domain::weight::{WeightSummary, WeightUnit};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReportDto {
    pub name: Option<String>,
    #[serde(flatten)]
    pub weights: WeightSummary,
}

/// Recomputed totals for a client-supplied set of categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightReportDto {
    pub unit: WeightUnit,
    pub categories: Vec<CategoryReportDto>,
    pub totals: WeightSummary,
}
