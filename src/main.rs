use iced::widget::{button, column, container, image, row, text};
use iced::{Element, Length, Task, Theme};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cache;
mod config;
mod state;
mod thumbnail;
mod ui;

use api::HttpDirectory;
use cache::{CachedDirectory, SystemClock};
use config::Config;
use state::data::{Recipe, RecipeSummary, SortField, SortOrder};
use state::debounce::{self, Ticket};
use state::detail::DetailState;
use state::gallery::{self, CategoryFilter, GalleryRequest, GalleryState};
use state::search::{QueryChange, SearchState};
use thumbnail::CardPictures;

/// Navigable screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Project references
    Home,
    /// Search by name
    List,
    /// Browse by category
    Gallery,
    /// One meal, by id
    Detail(String),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a screen (nav bar, card, back link)
    Navigate(Route),
    /// Search box text changed
    QueryChanged(String),
    /// Debounce timer for a search fired
    SearchDebounced(Ticket),
    /// Search response arrived
    SearchLoaded(Vec<RecipeSummary>),
    SortFieldSelected(SortField),
    SortOrderSelected(SortOrder),
    /// Gallery category list arrived
    CategoriesLoaded(Vec<String>),
    FilterSelected(CategoryFilter),
    /// Gallery meals for the current filter arrived
    GalleryLoaded(Vec<RecipeSummary>),
    /// Detail record arrived (`None` = not found or unreachable)
    RecipeLoaded(Option<Recipe>),
    /// Ordered id list for prev/next arrived
    SiblingsLoaded(Vec<String>),
    /// Detail picture for the given meal id finished loading
    PictureLoaded(String, Option<image::Handle>),
    /// List/gallery card picture for the given meal id finished loading
    CardPictureLoaded(String, Option<image::Handle>),
    Previous,
    Next,
    /// Put a link on the clipboard
    CopyLink(String),
}

/// Background work requested by a state change
#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Debounce(Ticket),
    Search(String),
    Categories,
    Gallery(GalleryRequest),
    Recipe(String),
    Siblings,
    Picture { id: String, url: String },
    CardPicture { id: String, url: String },
    CopyLink(String),
}

/// Main application state
struct MealDirectory {
    config: Config,
    /// Cached, fail-soft access to TheMealDB, shared by every screen
    directory: Arc<CachedDirectory>,
    /// Plain client for picture downloads
    http: reqwest::Client,
    route: Route,
    search: SearchState,
    gallery: GalleryState,
    detail: DetailState,
    picture: Option<image::Handle>,
    cards: CardPictures,
}

impl MealDirectory {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::default();
        let remote = Arc::new(HttpDirectory::new(config.base_url.clone()));
        let directory = Arc::new(CachedDirectory::new(
            remote,
            Arc::new(SystemClock),
            config.freshness,
        ));

        info!("🍲 Meal Directory initialized against {}", config.base_url);

        (Self::with_directory(config, directory), Task::none())
    }

    fn with_directory(config: Config, directory: Arc<CachedDirectory>) -> Self {
        MealDirectory {
            config,
            directory,
            http: reqwest::Client::new(),
            route: Route::Home,
            search: SearchState::new(),
            gallery: GalleryState::new(),
            detail: DetailState::new(),
            picture: None,
            cards: CardPictures::default(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .apply(message)
            .into_iter()
            .map(|effect| self.perform(effect))
            .collect();
        Task::batch(tasks)
    }

    /// Apply a message to the screen state and list the work it starts
    fn apply(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::QueryChanged(query) => match self.search.set_query(query) {
                QueryChange::Cleared => Vec::new(),
                QueryChange::Scheduled(ticket) => vec![Effect::Debounce(ticket)],
            },
            Message::SearchDebounced(ticket) => self
                .search
                .debounce_elapsed(ticket)
                .map(Effect::Search)
                .into_iter()
                .collect(),
            Message::SearchLoaded(results) => {
                let effects = self.card_pictures(&results);
                self.search.results_loaded(results);
                effects
            }
            Message::SortFieldSelected(field) => {
                self.search.toggle_sort(field);
                Vec::new()
            }
            Message::SortOrderSelected(order) => {
                self.search.set_order(order);
                Vec::new()
            }
            Message::CategoriesLoaded(categories) => self
                .gallery
                .categories_loaded(categories)
                .map(Effect::Gallery)
                .into_iter()
                .collect(),
            Message::FilterSelected(filter) => self
                .gallery
                .select(filter)
                .map(Effect::Gallery)
                .into_iter()
                .collect(),
            Message::GalleryLoaded(meals) => {
                let effects = self.card_pictures(&meals);
                self.gallery.meals_loaded(meals);
                effects
            }
            Message::RecipeLoaded(recipe) => {
                let picture = recipe
                    .as_ref()
                    .filter(|_| self.config.load_thumbnails)
                    .map(|recipe| Effect::Picture {
                        id: recipe.id.clone(),
                        url: recipe.thumbnail.clone(),
                    });
                self.detail.recipe_loaded(recipe);
                picture.into_iter().collect()
            }
            Message::SiblingsLoaded(ids) => {
                self.detail.ids_loaded(ids);
                Vec::new()
            }
            Message::PictureLoaded(id, handle) => {
                // A late picture of a recipe we navigated away from
                if id == self.detail.id {
                    self.picture = handle;
                }
                Vec::new()
            }
            Message::CardPictureLoaded(id, handle) => {
                self.cards.loaded(id, handle);
                Vec::new()
            }
            Message::Previous => match self.detail.previous() {
                Some(id) => self.navigate(Route::Detail(id)),
                None => Vec::new(),
            },
            Message::Next => match self.detail.next() {
                Some(id) => self.navigate(Route::Detail(id)),
                None => Vec::new(),
            },
            Message::CopyLink(link) => vec![Effect::CopyLink(link)],
        }
    }

    /// Switch screens; entering a screen starts it from fresh state
    fn navigate(&mut self, route: Route) -> Vec<Effect> {
        self.route = route.clone();
        match route {
            Route::Home => Vec::new(),
            Route::List => {
                self.search = SearchState::new();
                Vec::new()
            }
            Route::Gallery => {
                self.gallery = GalleryState::new();
                vec![Effect::Categories]
            }
            Route::Detail(id) => self.open_detail(&id),
        }
    }

    /// Resolve the record and the sibling id list independently
    fn open_detail(&mut self, id: &str) -> Vec<Effect> {
        self.picture = None;
        match self.detail.open(id) {
            Some(id) => vec![Effect::Recipe(id), Effect::Siblings],
            None => vec![Effect::Siblings],
        }
    }

    fn card_pictures(&mut self, meals: &[RecipeSummary]) -> Vec<Effect> {
        if !self.config.load_thumbnails {
            return Vec::new();
        }
        self.cards
            .claim(meals)
            .into_iter()
            .map(|(id, url)| Effect::CardPicture { id, url })
            .collect()
    }

    /// Start the background task for one effect
    fn perform(&self, effect: Effect) -> Task<Message> {
        let directory = self.directory.clone();
        match effect {
            Effect::Debounce(ticket) => Task::perform(
                debounce::wait(ticket, self.config.debounce),
                Message::SearchDebounced,
            ),
            Effect::Search(query) => Task::perform(
                async move { directory.search(&query).await },
                Message::SearchLoaded,
            ),
            Effect::Categories => Task::perform(
                async move { directory.list_categories().await },
                Message::CategoriesLoaded,
            ),
            Effect::Gallery(request) => Task::perform(
                gallery::load_meals(directory, request),
                Message::GalleryLoaded,
            ),
            Effect::Recipe(id) => Task::perform(
                async move { directory.get_by_id(&id).await },
                Message::RecipeLoaded,
            ),
            Effect::Siblings => Task::perform(
                async move {
                    directory
                        .search("")
                        .await
                        .into_iter()
                        .map(|summary| summary.id)
                        .collect::<Vec<_>>()
                },
                Message::SiblingsLoaded,
            ),
            Effect::Picture { id, url } => Task::perform(
                thumbnail::fetch_preview(self.http.clone(), url),
                move |result| Message::PictureLoaded(id.clone(), thumbnail::into_handle(result)),
            ),
            Effect::CardPicture { id, url } => Task::perform(
                thumbnail::fetch_preview(self.http.clone(), url),
                move |result| Message::CardPictureLoaded(id.clone(), thumbnail::into_handle(result)),
            ),
            Effect::CopyLink(link) => {
                info!("📋 Copied {link}");
                iced::clipboard::write(link)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let nav = row![
            text("The Meal DB Food Directory").size(24),
            iced::widget::horizontal_space(),
            nav_button("Home", Route::Home, &self.route),
            nav_button("Search", Route::List, &self.route),
            nav_button("Gallery", Route::Gallery, &self.route),
        ]
        .spacing(12)
        .padding(16)
        .align_y(iced::Alignment::Center);

        let screen = match &self.route {
            Route::Home => ui::home::view(),
            Route::List => ui::list::view(&self.search, &self.cards),
            Route::Gallery => ui::gallery::view(&self.gallery, &self.cards),
            Route::Detail(_) => ui::detail::view(&self.detail, self.picture.as_ref()),
        };

        container(column![nav, screen])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn nav_button<'a>(label: &'a str, route: Route, current: &Route) -> Element<'a, Message> {
    let active = route == *current;
    button(label)
        .style(if active { button::primary } else { button::secondary })
        .on_press(Message::Navigate(route))
        .into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_directory=info")),
        )
        .init();

    iced::application(
        "Meal Directory",
        MealDirectory::update,
        MealDirectory::view,
    )
    .theme(MealDirectory::theme)
    .centered()
    .run_with(MealDirectory::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scripted::ScriptedDirectory;
    use crate::cache::clock::manual::ManualClock;
    use crate::state::data::fixtures::{recipe, summary};
    use crate::state::detail::DetailError;
    use pretty_assertions::assert_eq;

    fn app() -> MealDirectory {
        let config = Config::default();
        let directory = Arc::new(CachedDirectory::new(
            Arc::new(ScriptedDirectory::default()),
            Arc::new(ManualClock::new()),
            config.freshness,
        ));
        MealDirectory::with_directory(config, directory)
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    fn handle() -> image::Handle {
        image::Handle::from_bytes(vec![0u8; 4])
    }

    #[test]
    fn test_opening_detail_fetches_record_and_siblings() {
        let mut app = app();

        let effects = app.apply(Message::Navigate(Route::Detail("52771".to_string())));

        assert_eq!(effects, vec![Effect::Recipe("52771".to_string()), Effect::Siblings]);
        assert_eq!(app.route, Route::Detail("52771".to_string()));
        assert!(app.detail.loading);
    }

    #[test]
    fn test_blank_detail_id_only_fetches_siblings() {
        let mut app = app();

        let effects = app.apply(Message::Navigate(Route::Detail("  ".to_string())));

        assert_eq!(effects, vec![Effect::Siblings]);
        assert_eq!(app.detail.error, Some(DetailError::MissingId));
    }

    #[test]
    fn test_previous_from_first_reopens_last() {
        let mut app = app();
        app.apply(Message::Navigate(Route::Detail("a".to_string())));
        app.apply(Message::SiblingsLoaded(ids(&["a", "b", "c"])));
        app.apply(Message::RecipeLoaded(Some(recipe("a", "Apam balik"))));
        app.apply(Message::PictureLoaded("a".to_string(), Some(handle())));
        assert!(app.picture.is_some());

        let effects = app.apply(Message::Previous);

        assert_eq!(effects, vec![Effect::Recipe("c".to_string()), Effect::Siblings]);
        assert_eq!(app.route, Route::Detail("c".to_string()));
        assert_eq!(app.detail.id, "c");
        assert_eq!(app.detail.position(), "3 of 3");
        assert!(app.picture.is_none());
    }

    #[test]
    fn test_next_without_siblings_does_nothing() {
        let mut app = app();
        app.apply(Message::Navigate(Route::Detail("a".to_string())));

        assert!(app.apply(Message::Next).is_empty());
        assert_eq!(app.route, Route::Detail("a".to_string()));
    }

    #[test]
    fn test_loaded_recipe_requests_its_picture() {
        let mut app = app();
        app.apply(Message::Navigate(Route::Detail("a".to_string())));

        let effects = app.apply(Message::RecipeLoaded(Some(recipe("a", "Apam balik"))));

        assert_eq!(
            effects,
            vec![Effect::Picture {
                id: "a".to_string(),
                url: "https://example.test/a.jpg".to_string(),
            }]
        );
        assert!(app.apply(Message::RecipeLoaded(None)).is_empty());
    }

    #[test]
    fn test_late_picture_of_previous_recipe_is_ignored() {
        let mut app = app();
        app.apply(Message::Navigate(Route::Detail("a".to_string())));
        app.apply(Message::Navigate(Route::Detail("b".to_string())));

        app.apply(Message::PictureLoaded("a".to_string(), Some(handle())));
        assert!(app.picture.is_none());

        app.apply(Message::PictureLoaded("b".to_string(), Some(handle())));
        assert!(app.picture.is_some());
    }

    #[test]
    fn test_blank_query_starts_nothing() {
        let mut app = app();
        app.apply(Message::Navigate(Route::List));

        assert!(app.apply(Message::QueryChanged("  ".to_string())).is_empty());
    }

    #[test]
    fn test_query_is_sent_after_debounce() {
        let mut app = app();
        app.apply(Message::Navigate(Route::List));

        let effects = app.apply(Message::QueryChanged("Arrabiata".to_string()));
        let [Effect::Debounce(ticket)] = effects.as_slice() else {
            panic!("expected a debounce, got {effects:?}");
        };

        assert_eq!(
            app.apply(Message::SearchDebounced(*ticket)),
            vec![Effect::Search("Arrabiata".to_string())]
        );
        assert!(app.apply(Message::SearchDebounced(*ticket)).is_empty());
    }

    #[test]
    fn test_gallery_loads_categories_then_meals() {
        let mut app = app();

        assert_eq!(app.apply(Message::Navigate(Route::Gallery)), vec![Effect::Categories]);

        let effects = app.apply(Message::CategoriesLoaded(ids(&["Beef", "Pasta"])));
        assert_eq!(
            effects,
            vec![Effect::Gallery(GalleryRequest {
                categories: ids(&["Beef", "Pasta"]),
            })]
        );

        let effects = app.apply(Message::FilterSelected(CategoryFilter::Category("Pasta".to_string())));
        assert_eq!(
            effects,
            vec![Effect::Gallery(GalleryRequest {
                categories: ids(&["Pasta"]),
            })]
        );
    }

    #[test]
    fn test_card_pictures_are_requested_once() {
        let mut app = app();
        let meals = vec![RecipeSummary {
            thumbnail: "https://example.test/5.jpg".to_string(),
            ..summary("5", "Beef Pie", Some("Beef"), None)
        }];

        let effects = app.apply(Message::SearchLoaded(meals.clone()));
        assert_eq!(
            effects,
            vec![Effect::CardPicture {
                id: "5".to_string(),
                url: "https://example.test/5.jpg".to_string(),
            }]
        );

        assert!(app.apply(Message::GalleryLoaded(meals)).is_empty());

        app.apply(Message::CardPictureLoaded("5".to_string(), Some(handle())));
        assert!(app.cards.get("5").is_some());
    }

    #[test]
    fn test_copy_link() {
        let mut app = app();
        let link = "https://www.youtube.com/watch?v=1IszT_guI08".to_string();

        assert_eq!(app.apply(Message::CopyLink(link.clone())), vec![Effect::CopyLink(link)]);
    }
}
