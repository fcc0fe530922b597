/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the directory layer and the UI layer. They are value snapshots:
/// a newer fetch replaces them, nothing mutates them in place.

/// Number of ingredient/measure slots a recipe carries
pub const INGREDIENT_SLOTS: usize = 20;

/// One numbered ingredient slot of a recipe (1-based on the wire)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// A resolved ingredient line for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Measure as sent by the directory, possibly empty
    pub measure: String,
}

/// Full record for one dish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Stable identifier assigned by the remote directory
    pub id: String,
    pub name: String,
    pub category: String,
    /// Region of origin (e.g. "Italian")
    pub area: String,
    /// Free-text instructions, steps separated by line breaks
    pub instructions: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Comma-separated tags, if any
    pub tags: Option<String>,
    /// Video tutorial link, if any
    pub youtube: Option<String>,
    /// Slots 1..=20, stored at index 0..20
    pub slots: [IngredientSlot; INGREDIENT_SLOTS],
}

impl Recipe {
    /// Project this recipe onto the list/gallery summary
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
            category: non_empty(&self.category),
            area: non_empty(&self.area),
        }
    }

    /// Ingredients in ascending slot order, skipping blank names
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let name = slot.ingredient.as_deref()?;
                if name.trim().is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name: name.to_string(),
                    measure: slot.measure.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Instruction steps, one per non-blank line
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }

    /// Tags split on commas, trimmed, blanks dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Reduced projection used by the list and gallery views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
}

/// Field the search results are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Category,
    Area,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Category, SortField::Area];

    /// Lower-cased sort value of a summary; missing fields sort as ""
    pub fn key(self, summary: &RecipeSummary) -> String {
        let value = match self {
            SortField::Name => Some(summary.name.as_str()),
            SortField::Category => summary.category.as_deref(),
            SortField::Area => summary.area.as_deref(),
        };
        value.unwrap_or_default().to_lowercase()
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortField::Name => "Name",
            SortField::Category => "Category",
            SortField::Area => "Area",
        };
        f.write_str(label)
    }
}

/// Direction of the search result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow shown next to the active sort field
    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::recipe;
    use super::*;
    use pretty_assertions::assert_eq;

    fn slot(ingredient: Option<&str>, measure: Option<&str>) -> IngredientSlot {
        IngredientSlot {
            ingredient: ingredient.map(str::to_string),
            measure: measure.map(str::to_string),
        }
    }

    #[test]
    fn test_ingredients_skip_blank_slots() {
        let mut meal = recipe("52771", "Spicy Arrabiata Penne");
        meal.slots[0] = slot(Some("penne rigate"), Some("1 pound"));
        meal.slots[1] = slot(Some("   "), Some("1/4 cup"));
        meal.slots[2] = slot(None, None);
        meal.slots[4] = slot(Some("olive oil"), None);
        meal.slots[19] = slot(Some("basil"), Some("6 leaves"));

        let ingredients = meal.ingredients();

        assert_eq!(
            ingredients,
            vec![
                Ingredient { name: "penne rigate".into(), measure: "1 pound".into() },
                Ingredient { name: "olive oil".into(), measure: String::new() },
                Ingredient { name: "basil".into(), measure: "6 leaves".into() },
            ]
        );
    }

    #[test]
    fn test_empty_recipe_has_no_ingredients() {
        assert!(recipe("1", "Plain").ingredients().is_empty());
    }

    #[test]
    fn test_steps_drop_blank_lines() {
        let meal = recipe("1", "Pasta");
        assert_eq!(meal.steps(), vec!["Boil water.", "Cook pasta."]);
    }

    #[test]
    fn test_tag_list() {
        let mut meal = recipe("1", "Pasta");
        assert_eq!(meal.tag_list(), vec!["Pasta", "Curry"]);

        meal.tags = None;
        assert!(meal.tag_list().is_empty());
    }

    #[test]
    fn test_summary_projection() {
        let mut meal = recipe("7", "Kedgeree");
        meal.area = String::new();

        let summary = meal.summary();

        assert_eq!(summary.id, "7");
        assert_eq!(summary.name, "Kedgeree");
        assert_eq!(summary.category.as_deref(), Some("Vegetarian"));
        assert_eq!(summary.area, None);
    }

    #[test]
    fn test_sort_key_is_case_insensitive_and_defaults_to_empty() {
        let summary = super::fixtures::summary("1", "Beef Wellington", None, Some("British"));

        assert_eq!(SortField::Name.key(&summary), "beef wellington");
        assert_eq!(SortField::Category.key(&summary), "");
        assert_eq!(SortField::Area.key(&summary), "british");
    }

    #[test]
    fn test_sort_order_flip() {
        assert_eq!(SortOrder::Ascending.flipped(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.flipped(), SortOrder::Ascending);
    }
}
