use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use super::{CacheKey, CacheValue, Clock, ResponseCache};
use crate::api::RecipeDirectory;
use crate::state::data::{Recipe, RecipeSummary};

/// Categories shown when the directory cannot be reached
pub const FALLBACK_CATEGORIES: [&str; 9] = [
    "Beef",
    "Chicken",
    "Dessert",
    "Lamb",
    "Miscellaneous",
    "Pasta",
    "Pork",
    "Seafood",
    "Vegetarian",
];

/// Stand-in search results shown when the directory cannot be reached
pub fn fallback_search_results() -> Vec<RecipeSummary> {
    vec![
        RecipeSummary {
            id: "1".to_string(),
            name: "Chicken Curry".to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/wyxwsp1486979827.jpg".to_string(),
            category: Some("Chicken".to_string()),
            area: Some("Indian".to_string()),
        },
        RecipeSummary {
            id: "2".to_string(),
            name: "Beef Stroganoff".to_string(),
            thumbnail: "https://www.themealdb.com/images/media/meals/svprys1511176755.jpg".to_string(),
            category: Some("Beef".to_string()),
            area: Some("Russian".to_string()),
        },
    ]
}

/// Fail-soft, time-boxed cache in front of a [`RecipeDirectory`].
///
/// None of the read operations return an error: a failed remote call is
/// logged and replaced by the operation's fallback, which is never cached.
/// Concurrent misses on one key are not coalesced; each caller fetches.
pub struct CachedDirectory {
    directory: Arc<dyn RecipeDirectory>,
    cache: ResponseCache,
}

impl CachedDirectory {
    pub fn new(directory: Arc<dyn RecipeDirectory>, clock: Arc<dyn Clock>, freshness: Duration) -> Self {
        Self {
            directory,
            cache: ResponseCache::new(clock, freshness),
        }
    }

    /// Meals whose name matches `query`; an empty query lists every meal
    pub async fn search(&self, query: &str) -> Vec<RecipeSummary> {
        let key = CacheKey::search(query);
        if let Some(CacheValue::Summaries(summaries)) = self.cached(&key) {
            return summaries;
        }

        match self.directory.search(query.trim()).await {
            Ok(recipes) => {
                let summaries: Vec<RecipeSummary> = recipes.iter().map(Recipe::summary).collect();
                info!("🔍 {key}: {} meals", summaries.len());
                self.cache.put(key, CacheValue::Summaries(summaries.clone()));
                summaries
            }
            Err(e) => {
                warn!("⚠️  Search error for {key}: {e}");
                fallback_search_results()
            }
        }
    }

    /// Full record for `id`; `None` when unknown or unreachable
    pub async fn get_by_id(&self, id: &str) -> Option<Recipe> {
        let key = CacheKey::lookup(id);
        if let Some(CacheValue::Recipe(recipe)) = self.cached(&key) {
            return recipe;
        }

        match self.directory.lookup(id.trim()).await {
            Ok(recipe) => {
                if recipe.is_none() {
                    info!("{key}: not found");
                }
                self.cache.put(key, CacheValue::Recipe(recipe.clone()));
                recipe
            }
            Err(e) => {
                warn!("⚠️  Get meal error for {key}: {e}");
                None
            }
        }
    }

    /// Summaries in `category`, without category or area filled in
    pub async fn list_by_category(&self, category: &str) -> Vec<RecipeSummary> {
        let key = CacheKey::category(category);
        if let Some(CacheValue::Summaries(summaries)) = self.cached(&key) {
            return summaries;
        }

        match self.directory.filter_by_category(category.trim()).await {
            Ok(summaries) => {
                info!("📂 {key}: {} meals", summaries.len());
                self.cache.put(key, CacheValue::Summaries(summaries.clone()));
                summaries
            }
            Err(e) => {
                warn!("⚠️  Category error for {key}: {e}");
                Vec::new()
            }
        }
    }

    /// Every category name known to the directory
    pub async fn list_categories(&self) -> Vec<String> {
        let key = CacheKey::Categories;
        if let Some(CacheValue::Categories(categories)) = self.cached(&key) {
            return categories;
        }

        match self.directory.categories().await {
            Ok(categories) => {
                info!("📂 {key}: {} categories", categories.len());
                self.cache.put(key, CacheValue::Categories(categories.clone()));
                categories
            }
            Err(e) => {
                warn!("⚠️  Categories error: {e}");
                FALLBACK_CATEGORIES.iter().map(|name| name.to_string()).collect()
            }
        }
    }

    fn cached(&self, key: &CacheKey) -> Option<CacheValue> {
        let hit = self.cache.get(key);
        if hit.is_some() {
            debug!("cache hit {key}");
        }
        hit
    }
}

impl std::fmt::Debug for CachedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedDirectory")
            .field("cache", &self.cache)
            .finish()
    }
}
