use std::fmt;
use std::sync::Arc;

use super::data::RecipeSummary;
use crate::cache::CachedDirectory;

/// Which categories the gallery shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Category(name) => f.write_str(name),
        }
    }
}

/// Categories to fetch, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    pub categories: Vec<String>,
}

/// Category gallery screen state
#[derive(Debug, Default)]
pub struct GalleryState {
    pub categories: Vec<String>,
    pub filter: CategoryFilter,
    pub loading: bool,
    pub meals: Vec<RecipeSummary>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category list arrived; start loading meals for the current filter
    pub fn categories_loaded(&mut self, categories: Vec<String>) -> Option<GalleryRequest> {
        self.categories = categories;
        self.request()
    }

    /// Filter changed; refetch the whole selection
    pub fn select(&mut self, filter: CategoryFilter) -> Option<GalleryRequest> {
        self.filter = filter;
        self.request()
    }

    pub fn meals_loaded(&mut self, meals: Vec<RecipeSummary>) {
        self.loading = false;
        self.meals = meals;
    }

    /// Filter buttons: "All" followed by every category
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Category))
            .collect()
    }

    pub fn show_empty(&self) -> bool {
        !self.loading && self.meals.is_empty()
    }

    /// Meals are only fetched once the category list is known
    fn request(&mut self) -> Option<GalleryRequest> {
        if self.categories.is_empty() {
            return None;
        }
        let categories = match &self.filter {
            CategoryFilter::All => self.categories.clone(),
            CategoryFilter::Category(name) => vec![name.clone()],
        };
        self.loading = true;
        Some(GalleryRequest { categories })
    }
}

/// Fetch every requested category in order and stamp each summary with
/// the category it was fetched under (the directory leaves it blank).
pub async fn load_meals(directory: Arc<CachedDirectory>, request: GalleryRequest) -> Vec<RecipeSummary> {
    let mut meals = Vec::new();
    for category in request.categories {
        let summaries = directory.list_by_category(&category).await;
        meals.extend(summaries.into_iter().map(|summary| RecipeSummary {
            category: Some(category.clone()),
            ..summary
        }));
    }
    meals
}
