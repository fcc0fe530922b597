/// JSON payloads of the TheMealDB v1 API
///
/// Every meal endpoint answers `{"meals": [...]}` or `{"meals": null}`;
/// ingredient data arrives as 20 numbered `strIngredientN`/`strMeasureN`
/// pairs which are folded into fixed typed slots here, at the boundary.

use serde::Deserialize;

use crate::state::data::{IngredientSlot, Recipe, RecipeSummary, INGREDIENT_SLOTS};

/// Envelope of search.php, lookup.php and filter.php
#[derive(Deserialize, Debug)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// `null` and missing lists both mean "nothing found"
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Envelope of categories.php. A body without the list is a decode error.
#[derive(Deserialize, Debug)]
pub struct CategoriesEnvelope {
    pub categories: Vec<CategoryPayload>,
}

#[derive(Deserialize, Debug)]
pub struct CategoryPayload {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// Full meal record as sent by search.php and lookup.php
#[derive(Deserialize, Debug)]
pub struct MealPayload {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub columns: IngredientColumns,
}

/// The 20 numbered `strIngredientN`/`strMeasureN` columns of a meal
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct IngredientColumns {
    #[serde(rename = "strIngredient1")]
    ingredient1: Option<String>,
    #[serde(rename = "strMeasure1")]
    measure1: Option<String>,
    #[serde(rename = "strIngredient2")]
    ingredient2: Option<String>,
    #[serde(rename = "strMeasure2")]
    measure2: Option<String>,
    #[serde(rename = "strIngredient3")]
    ingredient3: Option<String>,
    #[serde(rename = "strMeasure3")]
    measure3: Option<String>,
    #[serde(rename = "strIngredient4")]
    ingredient4: Option<String>,
    #[serde(rename = "strMeasure4")]
    measure4: Option<String>,
    #[serde(rename = "strIngredient5")]
    ingredient5: Option<String>,
    #[serde(rename = "strMeasure5")]
    measure5: Option<String>,
    #[serde(rename = "strIngredient6")]
    ingredient6: Option<String>,
    #[serde(rename = "strMeasure6")]
    measure6: Option<String>,
    #[serde(rename = "strIngredient7")]
    ingredient7: Option<String>,
    #[serde(rename = "strMeasure7")]
    measure7: Option<String>,
    #[serde(rename = "strIngredient8")]
    ingredient8: Option<String>,
    #[serde(rename = "strMeasure8")]
    measure8: Option<String>,
    #[serde(rename = "strIngredient9")]
    ingredient9: Option<String>,
    #[serde(rename = "strMeasure9")]
    measure9: Option<String>,
    #[serde(rename = "strIngredient10")]
    ingredient10: Option<String>,
    #[serde(rename = "strMeasure10")]
    measure10: Option<String>,
    #[serde(rename = "strIngredient11")]
    ingredient11: Option<String>,
    #[serde(rename = "strMeasure11")]
    measure11: Option<String>,
    #[serde(rename = "strIngredient12")]
    ingredient12: Option<String>,
    #[serde(rename = "strMeasure12")]
    measure12: Option<String>,
    #[serde(rename = "strIngredient13")]
    ingredient13: Option<String>,
    #[serde(rename = "strMeasure13")]
    measure13: Option<String>,
    #[serde(rename = "strIngredient14")]
    ingredient14: Option<String>,
    #[serde(rename = "strMeasure14")]
    measure14: Option<String>,
    #[serde(rename = "strIngredient15")]
    ingredient15: Option<String>,
    #[serde(rename = "strMeasure15")]
    measure15: Option<String>,
    #[serde(rename = "strIngredient16")]
    ingredient16: Option<String>,
    #[serde(rename = "strMeasure16")]
    measure16: Option<String>,
    #[serde(rename = "strIngredient17")]
    ingredient17: Option<String>,
    #[serde(rename = "strMeasure17")]
    measure17: Option<String>,
    #[serde(rename = "strIngredient18")]
    ingredient18: Option<String>,
    #[serde(rename = "strMeasure18")]
    measure18: Option<String>,
    #[serde(rename = "strIngredient19")]
    ingredient19: Option<String>,
    #[serde(rename = "strMeasure19")]
    measure19: Option<String>,
    #[serde(rename = "strIngredient20")]
    ingredient20: Option<String>,
    #[serde(rename = "strMeasure20")]
    measure20: Option<String>,
}

impl IngredientColumns {
    /// Fold the columns into slots 1..=20, in order
    fn into_slots(self) -> [IngredientSlot; INGREDIENT_SLOTS] {
        let columns: [(Option<String>, Option<String>); INGREDIENT_SLOTS] = [
            (self.ingredient1, self.measure1),
            (self.ingredient2, self.measure2),
            (self.ingredient3, self.measure3),
            (self.ingredient4, self.measure4),
            (self.ingredient5, self.measure5),
            (self.ingredient6, self.measure6),
            (self.ingredient7, self.measure7),
            (self.ingredient8, self.measure8),
            (self.ingredient9, self.measure9),
            (self.ingredient10, self.measure10),
            (self.ingredient11, self.measure11),
            (self.ingredient12, self.measure12),
            (self.ingredient13, self.measure13),
            (self.ingredient14, self.measure14),
            (self.ingredient15, self.measure15),
            (self.ingredient16, self.measure16),
            (self.ingredient17, self.measure17),
            (self.ingredient18, self.measure18),
            (self.ingredient19, self.measure19),
            (self.ingredient20, self.measure20),
        ];

        let mut slots: [IngredientSlot; INGREDIENT_SLOTS] = Default::default();
        for (slot, (ingredient, measure)) in slots.iter_mut().zip(columns) {
            slot.ingredient = ingredient;
            slot.measure = measure;
        }
        slots
    }
}

impl From<MealPayload> for Recipe {
    fn from(payload: MealPayload) -> Self {
        let slots = payload.columns.into_slots();

        Recipe {
            id: payload.id,
            name: payload.name,
            category: payload.category.unwrap_or_default(),
            area: payload.area.unwrap_or_default(),
            instructions: payload.instructions.unwrap_or_default(),
            thumbnail: payload.thumbnail.unwrap_or_default(),
            tags: payload.tags.filter(|tags| !tags.trim().is_empty()),
            youtube: payload.youtube.filter(|link| !link.trim().is_empty()),
            slots,
        }
    }
}

/// Reduced meal record as sent by filter.php
#[derive(Deserialize, Debug)]
pub struct SummaryPayload {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

impl From<SummaryPayload> for RecipeSummary {
    fn from(payload: SummaryPayload) -> Self {
        RecipeSummary {
            id: payload.id,
            name: payload.name,
            thumbnail: payload.thumbnail.unwrap_or_default(),
            category: None,
            area: None,
        }
    }
}
