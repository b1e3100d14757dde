use crate::domain::weight::{WeightAggregator, WeightUnit};
use crate::dto::feed::{FeedDto, FeedEntryDto};
use crate::forms::weights::FeedQueryPayload;
use crate::repository::{BagListQuery, BagReader, DEFAULT_ITEMS_PER_PAGE, ItemReader};

use super::{ServiceError, ServiceResult, category_totals, owner_aggregator};

/// Core business logic for the community feed.
///
/// Lists shared bags, most recently updated first, each weighed in its
/// owner's preferred unit.
pub fn show_feed<R>(
    query: FeedQueryPayload,
    default_unit: WeightUnit,
    repo: &R,
) -> ServiceResult<FeedDto>
where
    R: BagReader + ItemReader,
{
    let list_query = BagListQuery::default()
        .public(true)
        .paginate(query.page, DEFAULT_ITEMS_PER_PAGE);

    let (total, bags) = match repo.list_bags(list_query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list public bags: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut entries = Vec::with_capacity(bags.len());
    for (bag, owner) in bags {
        let items = match repo.list_items_by_bag(bag.id) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to list items of bag {}: {e}", bag.id);
                return Err(ServiceError::Internal);
            }
        };

        let aggregator = owner_aggregator(&owner, None, default_unit);
        let totals =
            WeightAggregator::grand_total(category_totals(&aggregator, &items).into_values());

        entries.push(FeedEntryDto {
            bag_id: bag.id.get(),
            name: bag.name,
            owner: owner.name,
            unit: aggregator.target(),
            weights: totals.into(),
            updated_at: bag.updated_at,
        });
    }

    Ok(FeedDto {
        page: query.page,
        per_page: DEFAULT_ITEMS_PER_PAGE,
        total,
        entries,
    })
}
