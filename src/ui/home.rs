/// Project references page
use iced::widget::{column, row, scrollable, text, Column};
use iced::Element;
use reqwest::Url;

use crate::Message;

struct Reference {
    name: &'static str,
    url: &'static str,
    category: &'static str,
}

const REFERENCES: &[Reference] = &[
    Reference { name: "The Meal DB API", url: "https://www.themealdb.com/api.php", category: "API" },
    Reference { name: "iced Documentation", url: "https://docs.rs/iced/0.13", category: "Framework" },
    Reference { name: "iced_aw Widgets", url: "https://docs.rs/iced_aw", category: "Library" },
    Reference { name: "Tokio Tutorial", url: "https://tokio.rs/tokio/tutorial", category: "Library" },
    Reference { name: "reqwest Documentation", url: "https://docs.rs/reqwest", category: "Library" },
    Reference { name: "Serde Guide", url: "https://serde.rs/", category: "Library" },
    Reference { name: "tracing Documentation", url: "https://docs.rs/tracing", category: "Library" },
    Reference { name: "The Rust Programming Language", url: "https://doc.rust-lang.org/book/", category: "Language" },
    Reference { name: "Async Book", url: "https://rust-lang.github.io/async-book/", category: "Reference" },
];

/// Host name of a reference link, for the compact label
fn host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

pub fn view() -> Element<'static, Message> {
    let cards = REFERENCES.iter().map(|reference| -> Element<'static, Message> {
        row![
            text(reference.name).size(18).width(280.0),
            text(reference.category).size(14).width(120.0),
            text(host(reference.url)).size(14),
        ]
        .spacing(12)
        .into()
    });

    scrollable(
        column![
            text("Project References").size(32),
            text("This project was developed with reference to the following resources.").size(16),
            Column::with_children(cards).spacing(10),
        ]
        .spacing(20)
        .padding(20),
    )
    .into()
}
