pub mod bags;
pub mod errors;
pub mod feed;
pub mod weights;

pub use errors::{ServiceError, ServiceResult};

use std::collections::BTreeMap;

use crate::domain::item::Item;
use crate::domain::types::CategoryId;
use crate::domain::user::User;
use crate::domain::weight::{WeightAggregator, WeightTotals, WeightUnit};

/// Aggregator for reading a bag owned by `owner`.
///
/// Items without their own unit are in the owner's preferred unit; results are
/// in `requested` when given, else in that same preferred unit.
pub(crate) fn owner_aggregator(
    owner: &User,
    requested: Option<WeightUnit>,
    default_unit: WeightUnit,
) -> WeightAggregator {
    let preferred = owner.preferred_unit(default_unit);
    WeightAggregator::new(requested.unwrap_or(preferred), preferred)
}

/// Per-category totals of a bag's items.
pub(crate) fn category_totals(
    aggregator: &WeightAggregator,
    items: &[Item],
) -> BTreeMap<CategoryId, WeightTotals> {
    let mut grouped: BTreeMap<CategoryId, Vec<&Item>> = BTreeMap::new();
    for item in items {
        grouped.entry(item.category_id).or_default().push(item);
    }
    grouped
        .into_iter()
        .map(|(category_id, items)| (category_id, aggregator.category(items)))
        .collect()
}
