use log::debug;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Category allow-list
// ---------------------------------------------------------------------------

/// Aggregate category that is kept only when explicitly requested.
pub const ALL_ITEMS: &str = "All-items";

/// Product groups treated as food-related. Matched exactly, case-sensitive.
pub const FOOD_CATEGORIES: [&str; 31] = [
    "Food",
    "Food purchased from stores",
    "Meat",
    "Fresh or frozen meat (excluding poultry)",
    "Fresh or frozen beef",
    "Fresh or frozen pork",
    "Fresh or frozen poultry",
    "Fresh or frozen chicken",
    "Processed meat",
    "Fish, seafood and other marine products",
    "Fish",
    "Dairy products and eggs",
    "Dairy products",
    "Fresh milk",
    "Butter",
    "Cheese",
    "Eggs",
    "Bakery and cereal products (excluding baby food)",
    "Bakery products",
    "Cereal products (excluding baby food)",
    "Fruit, fruit preparations and nuts",
    "Fresh fruit",
    "Preserved fruit and fruit preparations",
    "Vegetables and vegetable preparations",
    "Fresh vegetables",
    "Preserved vegetables and vegetable preparations",
    "Sugar and confectionery",
    "Edible fats and oils",
    "Coffee and tea",
    "Non-alcoholic beverages",
    "Food purchased from restaurants",
];

pub fn is_food_category(label: &str) -> bool {
    FOOD_CATEGORIES.contains(&label)
}

// ---------------------------------------------------------------------------
// Options and outcome
// ---------------------------------------------------------------------------

/// Default lower bound on the reference year.
pub const DEFAULT_MIN_YEAR: i32 = 1970;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Rows dated before this calendar year are dropped.
    pub min_year: i32,
    /// Also keep `All-items` rows alongside the food categories.
    pub include_aggregate: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            min_year: DEFAULT_MIN_YEAR,
            include_aggregate: false,
        }
    }
}

impl FilterOptions {
    pub fn with_aggregate(include_aggregate: bool) -> Self {
        FilterOptions {
            include_aggregate,
            ..Self::default()
        }
    }
}

/// Result of [`apply`]: the kept rows plus the row count after each stage.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub input_rows: usize,
    pub after_temporal: usize,
    /// Rows matching the food allow-list (aggregate rows not counted).
    pub after_categorical: usize,
    pub dataset: Dataset,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Run the temporal and categorical stages over `dataset`.
///
/// Kept rows stay in input order. With `include_aggregate` the `All-items`
/// rows are picked from the same in-memory pass, so the union needs no
/// second read and never reorders or duplicates a row.
pub fn apply(dataset: &Dataset, options: &FilterOptions) -> FilterOutcome {
    let dated: Vec<&Observation> = dataset
        .iter()
        .filter(|obs| obs.ref_date.year() >= options.min_year)
        .collect();

    let after_categorical = dated
        .iter()
        .filter(|obs| is_food_category(&obs.category))
        .count();

    let rows: Vec<Observation> = dated
        .iter()
        .filter(|obs| keep_category(&obs.category, options.include_aggregate))
        .map(|obs| (*obs).clone())
        .collect();

    debug!(
        "filter: {} input, {} from {}, {} food, {} kept",
        dataset.len(),
        dated.len(),
        options.min_year,
        after_categorical,
        rows.len()
    );

    FilterOutcome {
        input_rows: dataset.len(),
        after_temporal: dated.len(),
        after_categorical,
        dataset: Dataset::from_rows(rows),
    }
}

fn keep_category(label: &str, include_aggregate: bool) -> bool {
    is_food_category(label) || (include_aggregate && label == ALL_ITEMS)
}
