use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::TypeConstraintError;
use crate::domain::weight::{WeightEntry, WeightUnit};

/// A JSON number, or a string that may or may not hold one.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    fn parse(self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => value,
            Self::Text(text) => text.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Malformed weights count as zero.
fn lenient_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LenientNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| value.parse().unwrap_or(0.0)))
}

/// Malformed quantities count as missing, i.e. one.
fn lenient_qty<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LenientNumber>::deserialize(deserializer)?;
    Ok(value.and_then(LenientNumber::parse).map(|qty| qty.trunc() as i32))
}

/// Query string accepted by bag read endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct WeightQueryForm {
    #[validate(length(max = 16))]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightQueryPayload {
    /// Requested display unit; `None` when absent or unrecognized.
    pub unit: Option<WeightUnit>,
}

#[derive(Debug, Error)]
pub enum WeightQueryFormError {
    #[error("Weight query validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for WeightQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<WeightQueryForm> for WeightQueryPayload {
    type Error = WeightQueryFormError;

    fn try_from(value: WeightQueryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            unit: value.unit.as_deref().and_then(|unit| unit.parse().ok()),
        })
    }
}

/// Highest feed page a client may request.
pub const MAX_FEED_PAGE: usize = 10_000;

/// Query string accepted by the community feed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FeedQueryForm {
    #[validate(range(min = 1, max = MAX_FEED_PAGE))]
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQueryPayload {
    pub page: usize,
}

#[derive(Debug, Error)]
pub enum FeedQueryFormError {
    #[error("Feed query validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for FeedQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<FeedQueryForm> for FeedQueryPayload {
    type Error = FeedQueryFormError;

    fn try_from(value: FeedQueryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            page: value.page.unwrap_or(1),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntryForm {
    #[serde(default, deserialize_with = "lenient_weight")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_option: Option<String>,
    #[serde(default, deserialize_with = "lenient_qty")]
    pub qty: Option<i32>,
    #[serde(default)]
    pub worn: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryEntriesForm {
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<WeightEntryForm>,
}

/// Body of the stateless recomputation endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalculateWeightsForm {
    #[validate(length(min = 1, max = 16))]
    pub unit: String,
    pub fallback_unit: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub categories: Vec<CategoryEntriesForm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntries {
    pub name: Option<String>,
    pub items: Vec<WeightEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculateWeightsPayload {
    pub unit: WeightUnit,
    pub fallback_unit: WeightUnit,
    pub categories: Vec<CategoryEntries>,
}

#[derive(Debug, Error)]
pub enum CalculateWeightsFormError {
    #[error("Weights form validation failed: {0}")]
    Validation(String),
    #[error("Weights form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CalculateWeightsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CalculateWeightsFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl From<WeightEntryForm> for WeightEntry {
    fn from(value: WeightEntryForm) -> Self {
        Self {
            weight: value.weight,
            unit: value
                .weight_option
                .as_deref()
                .and_then(|unit| unit.parse().ok()),
            qty: value.qty,
            worn: value.worn.unwrap_or(false),
        }
    }
}

impl TryFrom<CalculateWeightsForm> for CalculateWeightsPayload {
    type Error = CalculateWeightsFormError;

    fn try_from(value: CalculateWeightsForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let unit: WeightUnit = value.unit.parse()?;
        let fallback_unit = WeightUnit::parse_or(value.fallback_unit.as_deref(), unit);

        Ok(Self {
            unit,
            fallback_unit,
            categories: value
                .categories
                .into_iter()
                .map(|category| CategoryEntries {
                    name: category.name,
                    items: category.items.into_iter().map(WeightEntry::from).collect(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(body: serde_json::Value) -> CalculateWeightsPayload {
        let form: CalculateWeightsForm = serde_json::from_value(body).unwrap();
        form.try_into().unwrap()
    }

    #[test]
    fn unknown_query_unit_is_ignored() {
        let form = WeightQueryForm {
            unit: Some("stone".to_string()),
        };
        let payload: WeightQueryPayload = form.try_into().unwrap();
        assert_eq!(payload.unit, None);
    }

    #[test]
    fn known_query_unit_is_used() {
        let form = WeightQueryForm {
            unit: Some("oz".to_string()),
        };
        let payload: WeightQueryPayload = form.try_into().unwrap();
        assert_eq!(payload.unit, Some(WeightUnit::Ounces));
    }

    #[test]
    fn feed_page_defaults_to_first_and_rejects_zero() {
        let payload: FeedQueryPayload = FeedQueryForm::default().try_into().unwrap();
        assert_eq!(payload.page, 1);

        let form = FeedQueryForm { page: Some(0) };
        assert!(FeedQueryPayload::try_from(form).is_err());
    }

    #[test]
    fn feed_page_has_an_upper_bound() {
        let form = FeedQueryForm {
            page: Some(usize::MAX),
        };
        assert!(FeedQueryPayload::try_from(form).is_err());

        let form = FeedQueryForm {
            page: Some(MAX_FEED_PAGE),
        };
        let payload: FeedQueryPayload = form.try_into().unwrap();
        assert_eq!(payload.page, MAX_FEED_PAGE);
    }

    #[test]
    fn calculate_form_caps_category_count() {
        let categories: Vec<_> = (0..501)
            .map(|i| serde_json::json!({ "name": format!("c{i}") }))
            .collect();
        let form: CalculateWeightsForm = serde_json::from_value(
            serde_json::json!({ "unit": "g", "categories": categories }),
        )
        .unwrap();

        let err = CalculateWeightsPayload::try_from(form).unwrap_err();
        assert!(matches!(err, CalculateWeightsFormError::Validation(_)));
    }

    #[test]
    fn calculate_form_requires_known_target_unit() {
        let form: CalculateWeightsForm =
            serde_json::from_value(serde_json::json!({ "unit": "stone" })).unwrap();
        let err = CalculateWeightsPayload::try_from(form).unwrap_err();
        assert!(matches!(err, CalculateWeightsFormError::TypeConstraint(_)));
    }

    #[test]
    fn calculate_form_defaults_fallback_to_target() {
        let payload = parse_body(serde_json::json!({ "unit": "kg", "fallbackUnit": "parsec" }));
        assert_eq!(payload.fallback_unit, WeightUnit::Kilograms);
        assert!(payload.categories.is_empty());
    }

    #[test]
    fn calculate_form_normalizes_items() {
        let payload = parse_body(serde_json::json!({
            "unit": "g",
            "fallbackUnit": "oz",
            "categories": [{
                "name": "Sleep",
                "items": [
                    { "weight": "850.5", "weightOption": "g", "qty": "2", "worn": false },
                    { "weight": "heavy", "weightOption": "stone" },
                    { "weight": null, "qty": "many", "worn": true },
                    { "weight": 3, "qty": 1.9 }
                ]
            }]
        }));

        let items = &payload.categories[0].items;
        assert_eq!(payload.categories[0].name.as_deref(), Some("Sleep"));
        assert_eq!(
            items[0],
            WeightEntry {
                weight: Some(850.5),
                unit: Some(WeightUnit::Grams),
                qty: Some(2),
                worn: false,
            }
        );
        assert_eq!(items[1].weight, Some(0.0));
        assert_eq!(items[1].unit, None);
        assert_eq!(items[2].weight, None);
        assert_eq!(items[2].qty, None);
        assert!(items[2].worn);
        assert_eq!(items[3].qty, Some(1));
    }
}
