/// Screen rendering
///
/// One module per screen. Each exposes a `view` function that only reads
/// state and emits `Message`s; all state changes happen in `update`.

pub mod detail;
pub mod gallery;
pub mod home;
pub mod list;

use iced::widget::{button, image, text, Column};
use iced::{Element, Length};

use crate::{Message, Route};
use crate::state::data::RecipeSummary;
use crate::thumbnail::CardPictures;

/// Clickable card leading to a meal's detail screen
pub fn meal_card(meal: &RecipeSummary, pictures: &CardPictures) -> Element<'static, Message> {
    let mut info: Column<'static, Message> = Column::new().spacing(4);
    if let Some(handle) = pictures.get(&meal.id) {
        info = info.push(image(handle.clone()).width(Length::Fill));
    }
    info = info.push(text(meal.name.clone()).size(18));
    if let Some(category) = &meal.category {
        info = info.push(text(format!("Category: {category}")).size(14));
    }
    if let Some(area) = &meal.area {
        info = info.push(text(format!("Area: {area}")).size(14));
    }

    button(info)
        .on_press(Message::Navigate(Route::Detail(meal.id.clone())))
        .style(button::secondary)
        .padding(12)
        .width(240.0)
        .into()
}
