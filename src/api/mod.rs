/// Remote recipe directory module
///
/// This module handles:
/// - The `RecipeDirectory` seam every read goes through (mod.rs)
/// - The TheMealDB HTTP client (http.rs)
/// - JSON payload shapes and their conversion to our data model (wire.rs)
/// - Transport/decoding errors (error.rs)

pub mod error;
pub mod http;
pub mod wire;

use async_trait::async_trait;

use crate::state::data::{Recipe, RecipeSummary};

pub use error::DirectoryError;
pub use http::HttpDirectory;

/// Read-only access to a remote recipe directory.
///
/// Implementations report every failure; absorbing them into fallback
/// values is the job of [`crate::cache::CachedDirectory`].
#[async_trait]
pub trait RecipeDirectory: Send + Sync + 'static {
    /// Full-text search by meal name. An empty query lists every meal.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, DirectoryError>;

    /// Look up one meal. `Ok(None)` means the directory has no such id.
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, DirectoryError>;

    /// Summaries of every meal in a category (the directory omits category and area here).
    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>, DirectoryError>;

    /// Names of every known category.
    async fn categories(&self) -> Result<Vec<String>, DirectoryError>;
}
