//! Drink view models and the ingredient-line transform.

use serde::Serialize;

use crate::upstream::{ApiDrink, INGREDIENT_SLOTS};

/// Name shown on the placeholder drink.
pub const FALLBACK_NAME: &str = "No cocktail available";

/// A renderable drink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drink {
    pub name: String,
    pub thumbnail: String,
    pub instructions: String,
}

impl Drink {
    /// Build the display form of an upstream record, blanking null fields.
    pub fn from_api(record: &ApiDrink) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            thumbnail: record.thumbnail.clone().unwrap_or_default(),
            instructions: record.instructions.clone().unwrap_or_default(),
        }
    }

    /// Placeholder substituted when the upstream fetch fails or returns
    /// no usable record. Constructed fresh per failed request.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            thumbnail: String::new(),
            instructions: "Sorry, we couldn't fetch a cocktail for you right now. \
                           Please try again in a moment."
                .to_string(),
        }
    }
}

/// A list-page entry: just enough to link to the full drink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
}

impl DrinkSummary {
    pub fn from_api(record: &ApiDrink) -> Self {
        Self {
            id: record.id.clone().unwrap_or_default(),
            name: record.name.clone().unwrap_or_default(),
            thumbnail: record.thumbnail.clone().unwrap_or_default(),
        }
    }
}

/// Flatten the sparse ingredient/measure slots into display lines.
///
/// For each slot 1..15, a line exists iff the slot's ingredient is
/// non-blank; its text is the trimmed measure and the ingredient joined
/// by a space, trimmed again so a missing measure leaves just the
/// ingredient name. Slot order is preserved.
pub fn ingredient_lines(record: &ApiDrink) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = record
                .ingredient(slot)
                .map(str::trim)
                .filter(|name| !name.is_empty())?;
            let measure = record.measure(slot).map(str::trim).unwrap_or("");
            Some(format!("{} {}", measure, ingredient).trim().to_string())
        })
        .collect()
}
