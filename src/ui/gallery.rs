/// Category gallery screen
use iced::widget::{button, column, scrollable, text};
use iced::Element;
use iced_aw::Wrap;

use super::meal_card;
use crate::state::gallery::GalleryState;
use crate::thumbnail::CardPictures;
use crate::Message;

pub fn view<'a>(state: &'a GalleryState, pictures: &CardPictures) -> Element<'a, Message> {
    let filters: Vec<Element<'static, Message>> = state
        .filters()
        .into_iter()
        .map(|filter| {
            let style = if filter == state.filter { button::primary } else { button::secondary };
            button(text(filter.to_string()))
                .style(style)
                .on_press(Message::FilterSelected(filter))
                .into()
        })
        .collect();

    let mut content = column![
        text("Meal Gallery").size(32),
        Wrap::with_elements(filters).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(16)
    .padding(20);

    if state.loading {
        content = content.push(text("Loading gallery..."));
    }

    let cards: Vec<Element<'static, Message>> = state
        .meals
        .iter()
        .map(|meal| meal_card(meal, pictures))
        .collect();
    content = content.push(Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0));

    if state.show_empty() {
        content = content.push(text("No meals found"));
    }

    scrollable(content).into()
}
