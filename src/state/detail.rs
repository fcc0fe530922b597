use thiserror::Error;

use super::data::Recipe;

/// Why the detail screen has nothing to show.
///
/// Both render the same error block with a link home. A remote failure
/// arrives from the query layer as "no record" and lands in `NotFound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    #[error("No meal ID provided")]
    MissingId,

    #[error("Meal not found")]
    NotFound,
}

/// Detail screen state with circular sibling navigation
#[derive(Debug, Default)]
pub struct DetailState {
    pub id: String,
    pub recipe: Option<Recipe>,
    pub loading: bool,
    pub error: Option<DetailError>,
    /// Every known meal id, in directory order
    ids: Vec<String>,
    index: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `id`. Returns the id to resolve, or `None` when blank.
    ///
    /// The caller also refreshes the sibling id list; the two fetches are
    /// independent and may complete in either order.
    pub fn open(&mut self, id: &str) -> Option<String> {
        self.id = id.trim().to_string();
        self.recipe = None;
        if self.id.is_empty() {
            self.loading = false;
            self.error = Some(DetailError::MissingId);
            return None;
        }
        self.loading = true;
        self.error = None;
        if let Some(index) = self.ids.iter().position(|known| *known == self.id) {
            self.index = index;
        }
        Some(self.id.clone())
    }

    pub fn recipe_loaded(&mut self, recipe: Option<Recipe>) {
        self.loading = false;
        match recipe {
            Some(recipe) => {
                self.error = None;
                self.recipe = Some(recipe);
            }
            None => self.error = Some(DetailError::NotFound),
        }
    }

    /// Sibling id list arrived; locate the current id in it
    pub fn ids_loaded(&mut self, ids: Vec<String>) {
        if let Some(index) = ids.iter().position(|known| *known == self.id) {
            self.index = index;
        } else if self.index >= ids.len() {
            self.index = 0;
        }
        self.ids = ids;
    }

    /// Id before the current one, wrapping to the last
    pub fn previous(&mut self) -> Option<String> {
        if self.ids.is_empty() {
            return None;
        }
        self.index = if self.index == 0 {
            self.ids.len() - 1
        } else {
            (self.index - 1).min(self.ids.len() - 1)
        };
        Some(self.ids[self.index].clone())
    }

    /// Id after the current one, wrapping to the first
    pub fn next(&mut self) -> Option<String> {
        if self.ids.is_empty() {
            return None;
        }
        self.index = if self.index + 1 >= self.ids.len() { 0 } else { self.index + 1 };
        Some(self.ids[self.index].clone())
    }

    /// "3 of 25" style position label
    pub fn position(&self) -> String {
        format!("{} of {}", self.index + 1, self.ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::recipe;
    use pretty_assertions::assert_eq;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut state = DetailState::new();
        state.open("a");
        state.ids_loaded(ids(&["a", "b", "c"]));

        assert_eq!(state.previous(), Some("c".to_string()));
        assert_eq!(state.position(), "3 of 3");
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let mut state = DetailState::new();
        state.open("c");
        state.ids_loaded(ids(&["a", "b", "c"]));

        assert_eq!(state.next(), Some("a".to_string()));
        assert_eq!(state.position(), "1 of 3");
    }

    #[test]
    fn test_ids_before_open_still_locate_position() {
        let mut state = DetailState::new();
        state.ids_loaded(ids(&["a", "b", "c"]));

        state.open("b");

        assert_eq!(state.position(), "2 of 3");
        assert_eq!(state.next(), Some("c".to_string()));
    }

    #[test]
    fn test_navigation_without_ids_does_nothing() {
        let mut state = DetailState::new();
        state.open("a");

        assert_eq!(state.previous(), None);
        assert_eq!(state.next(), None);
    }

    #[test]
    fn test_unknown_id_keeps_index() {
        let mut state = DetailState::new();
        state.open("zzz");
        state.ids_loaded(ids(&["a", "b"]));

        assert_eq!(state.position(), "1 of 2");
        assert_eq!(state.next(), Some("b".to_string()));
    }

    #[test]
    fn test_not_found() {
        let mut state = DetailState::new();
        assert_eq!(state.open("999"), Some("999".to_string()));
        assert!(state.loading);

        state.recipe_loaded(None);

        assert!(!state.loading);
        assert_eq!(state.error, Some(DetailError::NotFound));
        assert_eq!(state.error.as_ref().map(ToString::to_string), Some("Meal not found".to_string()));
    }

    #[test]
    fn test_blank_id_is_an_error_without_fetch() {
        let mut state = DetailState::new();

        assert_eq!(state.open("  "), None);
        assert_eq!(state.error, Some(DetailError::MissingId));
        assert!(!state.loading);
    }

    #[test]
    fn test_loaded_recipe_clears_error() {
        let mut state = DetailState::new();
        state.open("1");
        state.recipe_loaded(None);
        state.open("1");
        state.recipe_loaded(Some(recipe("1", "Kedgeree")));

        assert_eq!(state.error, None);
        assert_eq!(state.recipe.map(|r| r.name), Some("Kedgeree".to_string()));
    }
}
