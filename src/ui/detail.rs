/// Detail screen: picture, chips, ingredients, steps, sibling navigation
use iced::widget::{button, column, container, image, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::data::Recipe;
use crate::state::detail::DetailState;
use crate::{Message, Route};

fn back_link() -> Element<'static, Message> {
    button("← Back to List")
        .on_press(Message::Navigate(Route::Home))
        .style(button::text)
        .into()
}

fn chip(label: &str) -> Element<'static, Message> {
    container(text(label.to_string()).size(14))
        .padding([4, 10])
        .style(container::rounded_box)
        .into()
}

fn chips(recipe: &Recipe) -> Row<'static, Message> {
    let mut chips = Row::new().spacing(8);
    for label in [recipe.category.as_str(), recipe.area.as_str()] {
        if !label.is_empty() {
            chips = chips.push(chip(label));
        }
    }
    for tag in recipe.tag_list() {
        chips = chips.push(chip(tag));
    }
    chips
}

fn ingredients(recipe: &Recipe) -> Column<'static, Message> {
    recipe.ingredients().into_iter().fold(Column::new().spacing(4), |list, item| {
        list.push(row![text(item.measure).width(160.0), text(item.name)].spacing(12))
    })
}

fn steps(recipe: &Recipe) -> Column<'static, Message> {
    recipe
        .steps()
        .into_iter()
        .fold(Column::new().spacing(10), |list, step| list.push(text(step.to_string())))
}

pub fn view<'a>(state: &'a DetailState, picture: Option<&'a image::Handle>) -> Element<'a, Message> {
    if state.loading {
        return container(text("Loading meal details..."))
            .padding(20)
            .into();
    }

    let Some(recipe) = state.recipe.as_ref().filter(|_| state.error.is_none()) else {
        let message = state
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        return column![text(message), back_link()]
            .spacing(12)
            .padding(20)
            .into();
    };

    let header = row![
        back_link(),
        iced::widget::horizontal_space(),
        button("← Previous").on_press(Message::Previous),
        text(state.position()),
        button("Next →").on_press(Message::Next),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut picture_column = Column::new().spacing(12).width(Length::Fixed(360.0));
    if let Some(handle) = picture {
        picture_column = picture_column.push(image(handle.clone()).width(Length::Fixed(360.0)));
    }
    picture_column = picture_column.push(chips(recipe));

    let mut info = column![
        text(recipe.name.clone()).size(32),
        text("Ingredients").size(22),
        ingredients(recipe),
        text("Instructions").size(22),
        steps(recipe),
    ]
    .spacing(14)
    .width(Length::Fill);

    if let Some(link) = &recipe.youtube {
        info = info
            .push(text("Video Tutorial").size(22))
            .push(
                row![
                    text(link.clone()),
                    button("Copy link")
                        .on_press(Message::CopyLink(link.clone()))
                        .style(button::secondary),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
    }

    scrollable(
        column![header, row![picture_column, info].spacing(24)]
            .spacing(20)
            .padding(20),
    )
    .into()
}
