use crate::domain::bag::Bag;
use crate::domain::types::BagId;
use crate::domain::user::User;
use crate::domain::weight::{WeightAggregator, WeightSummary, WeightUnit, format_weight};
use crate::dto::bags::{BagCategoriesDto, BagSummaryDto, CategoryWeightsDto};
use crate::forms::weights::WeightQueryPayload;
use crate::repository::{BagReader, CategoryReader, ItemReader};

use super::{ServiceError, ServiceResult, category_totals, owner_aggregator};

fn parse_bag_id(bag_id: i32) -> ServiceResult<BagId> {
    BagId::new(bag_id).map_err(|_| ServiceError::NotFound)
}

fn load_owner<R>(bag_id: BagId, repo: &R) -> ServiceResult<User>
where
    R: BagReader,
{
    match repo.get_bag_owner(bag_id) {
        Ok(Some(owner)) => Ok(owner),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get bag owner: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the bag category listing.
///
/// Every category of the bag is reported, including empty ones, in display
/// order. Weights are in the requested unit, falling back to the owner's
/// preferred unit, and `default_unit` when the owner's stored preference is
/// not recognized.
pub fn show_bag_categories<R>(
    bag_id: i32,
    query: WeightQueryPayload,
    default_unit: WeightUnit,
    repo: &R,
) -> ServiceResult<BagCategoriesDto>
where
    R: BagReader + CategoryReader + ItemReader,
{
    let bag_id = parse_bag_id(bag_id)?;
    let owner = load_owner(bag_id, repo)?;
    let aggregator = owner_aggregator(&owner, query.unit, default_unit);

    let categories = match repo.list_categories(bag_id) {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let items = match repo.list_items_by_bag(bag_id) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list items: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let totals = category_totals(&aggregator, &items);
    let categories = categories
        .into_iter()
        .map(|category| {
            let weights = totals.get(&category.id).copied().unwrap_or_default();
            CategoryWeightsDto::new(category, weights)
        })
        .collect();

    Ok(BagCategoriesDto {
        bag_id: bag_id.get(),
        unit: aggregator.target(),
        categories,
        totals: WeightAggregator::grand_total(totals.into_values()).into(),
    })
}

/// Core business logic for the bag summary: totals and progress towards the
/// owner's base weight goal.
pub fn show_bag_summary<R>(
    bag_id: i32,
    query: WeightQueryPayload,
    default_unit: WeightUnit,
    repo: &R,
) -> ServiceResult<BagSummaryDto>
where
    R: BagReader + ItemReader,
{
    let bag_id = parse_bag_id(bag_id)?;

    let bag: Bag = match repo.get_bag_by_id(bag_id) {
        Ok(Some(bag)) => bag,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get bag: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let owner = load_owner(bag_id, repo)?;
    let aggregator = owner_aggregator(&owner, query.unit, default_unit);

    let items = match repo.list_items_by_bag(bag_id) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list items: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let totals = WeightAggregator::grand_total(category_totals(&aggregator, &items).into_values());

    // The goal is stored in the owner's unit, which is the aggregator's fallback.
    let goal = bag
        .goal
        .is_set()
        .then(|| aggregator.to_target(bag.goal.get(), aggregator.fallback()));

    Ok(BagSummaryDto {
        id: bag.id.get(),
        name: bag.name,
        unit: aggregator.target(),
        weights: WeightSummary::from(totals),
        goal: goal.map(format_weight),
        remaining: goal.map(|goal| format_weight(goal - totals.base)),
        over_goal: goal.is_some_and(|goal| totals.base > goal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bag::Bag;
    use crate::domain::category::Category;
    use crate::domain::item::Item;
    use crate::domain::types::{BagGoal, CategoryColor, CategoryId, ItemId, TripId, UserId};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn epoch() -> chrono::NaiveDateTime {
        DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    fn sample_user(unit: Option<WeightUnit>) -> User {
        User {
            id: UserId::new(1).unwrap(),
            email: "hiker@example.com".into(),
            name: "Hiker".to_string(),
            weight_option: unit,
            created_at: epoch(),
        }
    }

    fn sample_trip() -> (TripId, UserId) {
        (TripId::new(1).unwrap(), UserId::new(1).unwrap())
    }

    fn sample_bag(goal: f64) -> Bag {
        Bag {
            id: BagId::new(1).unwrap(),
            trip_id: TripId::new(1).unwrap(),
            name: "Main pack".to_string(),
            goal: BagGoal::new(goal).unwrap(),
            public: false,
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn sample_category(id: i32, name: &str, sort_order: i32) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            bag_id: BagId::new(1).unwrap(),
            name: name.to_string(),
            color: Some(CategoryColor::new("#336699").unwrap()),
            sort_order,
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn sample_item(
        id: i32,
        category_id: i32,
        weight: f64,
        unit: Option<WeightUnit>,
        qty: i32,
        worn: bool,
    ) -> Item {
        Item {
            id: ItemId::new(id).unwrap(),
            category_id: CategoryId::new(category_id).unwrap(),
            name: format!("item {id}"),
            description: None,
            weight: Some(weight),
            weight_option: unit,
            qty,
            worn,
            sort_order: id,
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn sample_repo(owner_unit: Option<WeightUnit>, goal: f64) -> TestRepository {
        TestRepository::new(
            vec![sample_user(owner_unit)],
            vec![sample_trip()],
            vec![sample_bag(goal)],
        )
        .with_categories(vec![
            sample_category(2, "Clothing", 2),
            sample_category(1, "Shelter", 1),
            sample_category(3, "Empty", 3),
        ])
        .with_items(vec![
            sample_item(1, 1, 1000.0, Some(WeightUnit::Grams), 1, false),
            sample_item(2, 2, 2.0, Some(WeightUnit::Pounds), 1, true),
            sample_item(3, 2, 0.25, None, 2, false),
        ])
    }

    #[test]
    fn lists_categories_in_owner_unit() {
        let repo = sample_repo(Some(WeightUnit::Kilograms), 0.0);

        let dto = show_bag_categories(
            1,
            WeightQueryPayload::default(),
            WeightUnit::Grams,
            &repo,
        )
        .unwrap();

        assert_eq!(dto.unit, WeightUnit::Kilograms);
        let names: Vec<_> = dto.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Shelter", "Clothing", "Empty"]);

        assert_eq!(dto.categories[0].weights.base_weight, "1.00");
        assert_eq!(dto.categories[1].weights.base_weight, "0.50");
        assert_eq!(dto.categories[1].weights.worn_weight, "0.91");
        assert_eq!(dto.categories[1].weights.total_weight, "1.41");
        assert_eq!(dto.categories[2].weights.total_weight, "0.00");

        assert_eq!(dto.totals.base_weight, "1.50");
        assert_eq!(dto.totals.worn_weight, "0.91");
        assert_eq!(dto.totals.total_weight, "2.41");
    }

    #[test]
    fn requested_unit_overrides_display_but_not_fallback() {
        let repo = sample_repo(Some(WeightUnit::Kilograms), 0.0);
        let query = WeightQueryPayload {
            unit: Some(WeightUnit::Grams),
        };

        let dto = show_bag_categories(1, query, WeightUnit::Ounces, &repo).unwrap();

        assert_eq!(dto.unit, WeightUnit::Grams);
        // 0.25 kg x 2 with no unit of its own.
        assert_eq!(dto.categories[1].weights.base_weight, "500.00");
    }

    #[test]
    fn unrecognized_owner_unit_uses_configured_default() {
        let repo = sample_repo(None, 0.0);

        let dto = show_bag_categories(
            1,
            WeightQueryPayload::default(),
            WeightUnit::Grams,
            &repo,
        )
        .unwrap();

        assert_eq!(dto.unit, WeightUnit::Grams);
        assert_eq!(dto.categories[1].weights.base_weight, "0.50");
    }

    #[test]
    fn missing_bag_is_not_found() {
        let repo = sample_repo(Some(WeightUnit::Grams), 0.0);

        let err =
            show_bag_categories(42, WeightQueryPayload::default(), WeightUnit::Grams, &repo)
                .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);

        let err = show_bag_summary(0, WeightQueryPayload::default(), WeightUnit::Grams, &repo)
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn summary_compares_base_weight_to_goal() {
        let repo = sample_repo(Some(WeightUnit::Kilograms), 1.2);

        let dto = show_bag_summary(1, WeightQueryPayload::default(), WeightUnit::Grams, &repo)
            .unwrap();

        assert_eq!(dto.name, "Main pack");
        assert_eq!(dto.weights.base_weight, "1.50");
        assert_eq!(dto.goal.as_deref(), Some("1.20"));
        assert_eq!(dto.remaining.as_deref(), Some("-0.30"));
        assert!(dto.over_goal);
    }

    #[test]
    fn summary_converts_goal_into_requested_unit() {
        let repo = sample_repo(Some(WeightUnit::Kilograms), 2.0);
        let query = WeightQueryPayload {
            unit: Some(WeightUnit::Grams),
        };

        let dto = show_bag_summary(1, query, WeightUnit::Grams, &repo).unwrap();

        assert_eq!(dto.goal.as_deref(), Some("2000.00"));
        assert_eq!(dto.remaining.as_deref(), Some("500.00"));
        assert!(!dto.over_goal);
    }

    #[test]
    fn summary_without_goal() {
        let repo = sample_repo(Some(WeightUnit::Kilograms), 0.0);

        let dto = show_bag_summary(1, WeightQueryPayload::default(), WeightUnit::Grams, &repo)
            .unwrap();

        assert_eq!(dto.goal, None);
        assert_eq!(dto.remaining, None);
        assert!(!dto.over_goal);
    }
}
