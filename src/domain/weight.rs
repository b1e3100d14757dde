//! Weight unit conversion and aggregation.
//!
//! Every place that reports packed weight goes through [`WeightAggregator`]:
//! the category listing read path, the bag summary, the community feed and the
//! stateless recomputation endpoint used for optimistic client updates. The
//! aggregator is total. Missing or non-finite weights count as zero, missing
//! quantities count as one and unknown units resolve to the caller's fallback.

use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Unit a weight is stored or displayed in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
    #[serde(rename = "oz")]
    Ounces,
}

impl WeightUnit {
    /// All supported units, in conversion table order.
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Grams,
        WeightUnit::Kilograms,
        WeightUnit::Pounds,
        WeightUnit::Ounces,
    ];

    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
            Self::Ounces => "oz",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Grams => 0,
            Self::Kilograms => 1,
            Self::Pounds => 2,
            Self::Ounces => 3,
        }
    }

    /// Lenient parsing for upstream data: anything unrecognized, including a
    /// missing value, resolves to `fallback`.
    pub fn parse_or(value: Option<&str>, fallback: WeightUnit) -> WeightUnit {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or(fallback)
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| TypeConstraintError::UnknownWeightUnit(value.to_string()))
    }
}

impl TryFrom<&str> for WeightUnit {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeightUnit> for String {
    fn from(value: WeightUnit) -> Self {
        value.as_str().to_string()
    }
}

const GRAMS_PER_KILOGRAM: f64 = 1000.0;
const GRAMS_PER_POUND: f64 = 453.592_37;
const GRAMS_PER_OUNCE: f64 = 28.349_523_125;

/// Multiplicative factors between every pair of units.
///
/// `factor(from, to)` is the number of `to` units in one `from` unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionTable {
    factors: [[f64; 4]; 4],
}

/// The international avoirdupois table: `1 lb = 0.45359237 kg = 16 oz`.
pub const STANDARD_CONVERSIONS: ConversionTable = ConversionTable::from_grams([
    1.0,
    GRAMS_PER_KILOGRAM,
    GRAMS_PER_POUND,
    GRAMS_PER_OUNCE,
]);

impl ConversionTable {
    /// Builds a table from explicit factors, indexed `[from][to]` in
    /// [`WeightUnit::ALL`] order.
    pub const fn new(factors: [[f64; 4]; 4]) -> Self {
        Self { factors }
    }

    /// Builds a consistent table from the mass of one of each unit in grams,
    /// in [`WeightUnit::ALL`] order.
    pub const fn from_grams(grams: [f64; 4]) -> Self {
        let mut factors = [[1.0; 4]; 4];
        let mut from = 0;
        while from < 4 {
            let mut to = 0;
            while to < 4 {
                if from != to {
                    factors[from][to] = grams[from] / grams[to];
                }
                to += 1;
            }
            from += 1;
        }
        Self { factors }
    }

    pub fn factor(&self, from: WeightUnit, to: WeightUnit) -> f64 {
        self.factors[from.index()][to.index()]
    }

    /// Converts `weight` from one unit to another. Same-unit conversions
    /// return `weight` untouched.
    pub fn convert(&self, weight: f64, from: WeightUnit, to: WeightUnit) -> f64 {
        if from == to {
            return weight;
        }
        weight * self.factor(from, to)
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        STANDARD_CONVERSIONS
    }
}

/// Anything the aggregator can sum.
pub trait Weighed {
    /// Weight of a single unit of the item, in [`Weighed::unit`].
    fn weight(&self) -> Option<f64>;
    /// Unit the weight is expressed in, `None` when the item specifies none.
    fn unit(&self) -> Option<WeightUnit>;
    fn qty(&self) -> Option<i32>;
    fn worn(&self) -> bool;
}

impl<T: Weighed + ?Sized> Weighed for &T {
    fn weight(&self) -> Option<f64> {
        (**self).weight()
    }

    fn unit(&self) -> Option<WeightUnit> {
        (**self).unit()
    }

    fn qty(&self) -> Option<i32> {
        (**self).qty()
    }

    fn worn(&self) -> bool {
        (**self).worn()
    }
}

/// Plain weight record, as received from clients recomputing totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightEntry {
    pub weight: Option<f64>,
    pub unit: Option<WeightUnit>,
    pub qty: Option<i32>,
    pub worn: bool,
}

impl Weighed for WeightEntry {
    fn weight(&self) -> Option<f64> {
        self.weight
    }

    fn unit(&self) -> Option<WeightUnit> {
        self.unit
    }

    fn qty(&self) -> Option<i32> {
        self.qty
    }

    fn worn(&self) -> bool {
        self.worn
    }
}

/// Full-precision base and worn sums in the aggregator's target unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeightTotals {
    pub base: f64,
    pub worn: f64,
}

impl WeightTotals {
    pub fn total(&self) -> f64 {
        self.base + self.worn
    }
}

impl Add for WeightTotals {
    type Output = WeightTotals;

    fn add(self, rhs: Self) -> Self::Output {
        WeightTotals {
            base: self.base + rhs.base,
            worn: self.worn + rhs.worn,
        }
    }
}

impl AddAssign for WeightTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for WeightTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(WeightTotals::default(), Add::add)
    }
}

/// Totals formatted for output. The unit is reported separately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSummary {
    pub base_weight: String,
    pub worn_weight: String,
    pub total_weight: String,
}

impl From<WeightTotals> for WeightSummary {
    fn from(totals: WeightTotals) -> Self {
        Self {
            base_weight: format_weight(totals.base),
            worn_weight: format_weight(totals.worn),
            total_weight: format_weight(totals.total()),
        }
    }
}

/// Renders a weight with exactly two decimals, never in scientific notation.
pub fn format_weight(value: f64) -> String {
    let value = finite_or_zero(value);
    let formatted = format!("{value:.2}");
    // Small negative values round to "-0.00".
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Converts items into a single target unit and sums them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightAggregator {
    table: ConversionTable,
    target: WeightUnit,
    fallback: WeightUnit,
}

impl WeightAggregator {
    /// Aggregator over [`STANDARD_CONVERSIONS`].
    ///
    /// `fallback` is assumed for items that do not carry their own unit.
    pub fn new(target: WeightUnit, fallback: WeightUnit) -> Self {
        Self::with_table(STANDARD_CONVERSIONS, target, fallback)
    }

    pub fn with_table(table: ConversionTable, target: WeightUnit, fallback: WeightUnit) -> Self {
        Self {
            table,
            target,
            fallback,
        }
    }

    pub fn target(&self) -> WeightUnit {
        self.target
    }

    pub fn fallback(&self) -> WeightUnit {
        self.fallback
    }

    /// Converts a scalar weight into the target unit.
    pub fn to_target(&self, weight: f64, from: WeightUnit) -> f64 {
        finite_or_zero(self.table.convert(finite_or_zero(weight), from, self.target))
    }

    /// `weight × qty` of one item in the target unit.
    pub fn item_weight<W: Weighed>(&self, item: &W) -> f64 {
        let weight = item.weight().unwrap_or(0.0);
        let unit = item.unit().unwrap_or(self.fallback);
        let qty = item.qty().unwrap_or(1);
        finite_or_zero(self.to_target(weight, unit) * f64::from(qty))
    }

    /// Sums one category's items into base and worn weight.
    pub fn category<I>(&self, items: I) -> WeightTotals
    where
        I: IntoIterator,
        I::Item: Weighed,
    {
        items
            .into_iter()
            .fold(WeightTotals::default(), |mut totals, item| {
                let weight = self.item_weight(&item);
                if item.worn() {
                    totals.worn += weight;
                } else {
                    totals.base += weight;
                }
                totals
            })
    }

    /// Sums per-category totals into the grand total.
    pub fn grand_total<I>(categories: I) -> WeightTotals
    where
        I: IntoIterator<Item = WeightTotals>,
    {
        categories.into_iter().sum()
    }
}
