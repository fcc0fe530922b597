use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{CategoriesEnvelope, MealPayload, MealsEnvelope, SummaryPayload};
use super::{DirectoryError, RecipeDirectory};
use crate::state::data::{Recipe, RecipeSummary};

/// TheMealDB client over HTTP
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
}

impl HttpDirectory {
    /// Create a client rooted at `base_url` (e.g. `https://www.themealdb.com/api/json/v1/1`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base_url}/{endpoint}` and decode the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {url} {query:?}");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RecipeDirectory for HttpDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, DirectoryError> {
        let envelope: MealsEnvelope<MealPayload> = self.get("search.php", &[("s", query)]).await?;
        Ok(envelope.into_vec().into_iter().map(Recipe::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, DirectoryError> {
        let envelope: MealsEnvelope<MealPayload> = self.get("lookup.php", &[("i", id)]).await?;
        Ok(envelope.into_vec().into_iter().next().map(Recipe::from))
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>, DirectoryError> {
        let envelope: MealsEnvelope<SummaryPayload> = self.get("filter.php", &[("c", category)]).await?;
        Ok(envelope.into_vec().into_iter().map(RecipeSummary::from).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, DirectoryError> {
        let envelope: CategoriesEnvelope = self.get("categories.php", &[]).await?;
        Ok(envelope.categories.into_iter().map(|category| category.name).collect())
    }
}
