/// State management module
///
/// This module handles all screen state, independent of rendering:
/// - Shared data structures (data.rs)
/// - Cancellable debounce timer for the search box (debounce.rs)
/// - Search/list screen: query, sorting, results (search.rs)
/// - Category gallery: filter and aggregated meals (gallery.rs)
/// - Detail screen: recipe, errors, prev/next navigation (detail.rs)

pub mod data;
pub mod debounce;
pub mod detail;
pub mod gallery;
pub mod search;
