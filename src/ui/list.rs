/// Search/list screen
use iced::widget::{button, column, radio, row, scrollable, text, text_input, Row};
use iced::{Alignment, Element};
use iced_aw::Wrap;

use super::meal_card;
use crate::state::data::{SortField, SortOrder};
use crate::state::search::SearchState;
use crate::thumbnail::CardPictures;
use crate::Message;

/// Sort button label, with an arrow on the active field
fn sort_label(state: &SearchState, field: SortField) -> String {
    if state.sort_field == field {
        format!("{field} {}", state.sort_order.indicator())
    } else {
        field.to_string()
    }
}

pub fn view<'a>(state: &'a SearchState, pictures: &CardPictures) -> Element<'a, Message> {
    let search_box = text_input("Search for meals...", &state.query)
        .on_input(Message::QueryChanged)
        .padding(10)
        .size(18);

    let sort_buttons = SortField::ALL.iter().fold(
        Row::new().push(text("Sort by:")).spacing(8).align_y(Alignment::Center),
        |row, &field| {
            row.push(
                button(text(sort_label(state, field)))
                    .on_press(Message::SortFieldSelected(field))
                    .style(if state.sort_field == field { button::primary } else { button::secondary }),
            )
        },
    );

    let order = row![
        text("Order:"),
        radio("Ascending", SortOrder::Ascending, Some(state.sort_order), Message::SortOrderSelected),
        radio("Descending", SortOrder::Descending, Some(state.sort_order), Message::SortOrderSelected),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![
        text("Search Meals").size(32),
        search_box,
        row![sort_buttons, order].spacing(40),
    ]
    .spacing(16)
    .padding(20);

    if state.loading {
        content = content.push(text("Loading..."));
    }

    let cards: Vec<Element<'static, Message>> = state
        .sorted()
        .iter()
        .map(|meal| meal_card(meal, pictures))
        .collect();
    content = content.push(Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0));

    if let Some(message) = state.empty_message() {
        content = content.push(text(message));
    }

    scrollable(content).into()
}
