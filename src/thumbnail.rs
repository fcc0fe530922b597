/// Meal picture loading for cards and the detail screen
///
/// TheMealDB serves a reduced rendition of every meal image at
/// `<thumbnail>/preview`; that is what we fetch, then hand the raw bytes
/// to iced which decodes them off the UI thread.
use std::collections::{HashMap, HashSet};

use iced::widget::image;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::state::data::RecipeSummary;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("Meal has no picture")]
    Missing,

    #[error("Failed to download picture: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Picture server answered {0}")]
    Status(u16),
}

/// URL of the reduced preview rendition of a full-size meal image
pub fn preview_url(thumbnail: &str) -> Option<String> {
    let thumbnail = thumbnail.trim().trim_end_matches('/');
    if thumbnail.is_empty() {
        return None;
    }
    Some(format!("{thumbnail}/preview"))
}

/// Download the preview picture for a meal
pub async fn fetch_preview(client: Client, thumbnail: String) -> Result<Vec<u8>, ThumbnailError> {
    let url = preview_url(&thumbnail).ok_or(ThumbnailError::Missing)?;

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ThumbnailError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    debug!("📸 Loaded preview {url} ({}KB)", bytes.len() / 1024);
    Ok(bytes.to_vec())
}

/// Turn a download result into an image handle; failures only lose the picture
pub fn into_handle(result: Result<Vec<u8>, ThumbnailError>) -> Option<image::Handle> {
    match result {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(e) => {
            warn!("⚠️  {e}");
            None
        }
    }
}

/// Card pictures for list and gallery, keyed by meal id.
///
/// Each id is requested at most once per session, including ids whose
/// download failed.
#[derive(Debug, Default)]
pub struct CardPictures {
    handles: HashMap<String, image::Handle>,
    requested: HashSet<String>,
}

impl CardPictures {
    /// Claim every meal not requested yet; returns `(id, thumbnail)` pairs to fetch
    pub fn claim<'a>(&mut self, meals: impl IntoIterator<Item = &'a RecipeSummary>) -> Vec<(String, String)> {
        meals
            .into_iter()
            .filter(|meal| !meal.thumbnail.trim().is_empty())
            .filter(|meal| self.requested.insert(meal.id.clone()))
            .map(|meal| (meal.id.clone(), meal.thumbnail.clone()))
            .collect()
    }

    pub fn loaded(&mut self, id: String, handle: Option<image::Handle>) {
        if let Some(handle) = handle {
            self.handles.insert(id, handle);
        }
    }

    pub fn get(&self, id: &str) -> Option<&image::Handle> {
        self.handles.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::summary;
    use pretty_assertions::assert_eq;

    fn pictured(id: &str) -> RecipeSummary {
        RecipeSummary {
            thumbnail: format!("https://example.test/{id}.jpg"),
            ..summary(id, "Pie", None, None)
        }
    }

    #[test]
    fn test_each_card_picture_is_claimed_once() {
        let mut pictures = CardPictures::default();
        let first = vec![pictured("1"), pictured("2")];

        assert_eq!(
            pictures.claim(&first),
            vec![
                ("1".to_string(), "https://example.test/1.jpg".to_string()),
                ("2".to_string(), "https://example.test/2.jpg".to_string()),
            ]
        );

        let second = vec![pictured("2"), pictured("3")];
        assert_eq!(pictures.claim(&second), vec![("3".to_string(), "https://example.test/3.jpg".to_string())]);
    }

    #[test]
    fn test_meals_without_thumbnail_are_skipped() {
        let mut pictures = CardPictures::default();
        let meals = vec![summary("1", "Pie", None, None)];

        assert!(pictures.claim(&meals).is_empty());
    }

    #[test]
    fn test_failed_download_leaves_no_handle() {
        let mut pictures = CardPictures::default();
        pictures.loaded("1".to_string(), None);
        pictures.loaded("2".to_string(), Some(image::Handle::from_bytes(vec![0u8; 4])));

        assert!(pictures.get("1").is_none());
        assert!(pictures.get("2").is_some());
    }

    #[test]
    fn test_preview_url() {
        assert_eq!(
            preview_url("https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg"),
            Some("https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg/preview".to_string())
        );
        assert_eq!(preview_url("  "), None);
    }

    #[tokio::test]
    async fn test_missing_thumbnail() {
        let result = fetch_preview(Client::new(), String::new()).await;
        assert!(matches!(result, Err(ThumbnailError::Missing)));
        assert!(into_handle(result).is_none());
    }
}
