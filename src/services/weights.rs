use crate::domain::weight::{WeightAggregator, WeightSummary};
use crate::dto::weights::{CategoryReportDto, WeightReportDto};
use crate::forms::weights::CalculateWeightsPayload;

/// Recomputes totals for client-supplied categories.
///
/// Used for optimistic updates before a change reaches the server; shares the
/// aggregator with every read path so both sides agree on the numbers.
pub fn calculate_weights(payload: CalculateWeightsPayload) -> WeightReportDto {
    let aggregator = WeightAggregator::new(payload.unit, payload.fallback_unit);

    let totals: Vec<_> = payload
        .categories
        .iter()
        .map(|category| aggregator.category(&category.items))
        .collect();

    let categories = payload
        .categories
        .into_iter()
        .zip(&totals)
        .map(|(category, totals)| CategoryReportDto {
            name: category.name,
            weights: WeightSummary::from(*totals),
        })
        .collect();

    WeightReportDto {
        unit: aggregator.target(),
        categories,
        totals: WeightAggregator::grand_total(totals).into(),
    }
}
