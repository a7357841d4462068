/// Catalog view: search bar, category tabs and the recipe card grid

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::catalog::{self, Tab};
use crate::state::data::Recipe;
use crate::Message;

pub fn view<'a>(
    recipes: &'a [Recipe],
    search_query: &'a str,
    search_active: bool,
    tab: Tab,
    status: &'a str,
) -> Element<'a, Message> {
    let top_bar: Element<Message> = if search_active {
        row![
            text_input("Search recipes...", search_query)
                .on_input(Message::SearchChanged)
                .padding(8),
            button("Clear").on_press(Message::ClearSearch).padding(8),
            button("Done").on_press(Message::SearchToggled).padding(8),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    } else {
        row![
            text("Mix It!").size(28),
            horizontal_space(),
            button("Search").on_press(Message::SearchToggled).padding(8),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    let mut content = column![top_bar].spacing(16).padding(16);

    // The tab row is replaced by the search bar while searching
    if !search_active {
        let mut tabs = Row::new().spacing(8);
        for candidate in Tab::ALL {
            let label = text(candidate.label());
            let tab_button = if candidate == tab {
                button(label)
            } else {
                button(label).style(button::secondary)
            };
            tabs = tabs.push(tab_button.on_press(Message::TabSelected(candidate)).padding(8));
        }
        content = content.push(tabs);

        if tab == Tab::Home {
            content = content.push(
                column![
                    text("Welcome to Mix It!").size(22),
                    text("Discover and mix great cocktails with this app."),
                ]
                .spacing(8),
            );
        }
    }

    let visible = catalog::visible(recipes, search_query, tab);

    let body: Element<Message> = if visible.is_empty() {
        container(text(if search_active {
            "No recipes found"
        } else {
            "No recipes to show"
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    } else {
        // Two cards per row
        let mut grid = Column::new().spacing(12);
        for pair in visible.chunks(2) {
            let mut cards = Row::new().spacing(12);
            for recipe in pair {
                cards = cards.push(card(recipe));
            }
            grid = grid.push(cards);
        }
        scrollable(grid).height(Length::Fill).into()
    };

    content = content.push(body);
    content = content.push(text(status).size(14));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card(recipe: &Recipe) -> Element<Message> {
    let badge = if recipe.alcoholic {
        "Alcoholic"
    } else {
        "Non-alcoholic"
    };

    button(
        column![
            // Image loading is out of scope; a glass stands in for the photo
            container(text("🍸").size(40))
                .width(Length::Fill)
                .height(80)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            text(&recipe.name).size(18),
            text(format!("{} · {}", recipe.category, badge)).size(13),
        ]
        .spacing(4)
        .padding(8),
    )
    .style(button::secondary)
    .width(Length::FillPortion(1))
    .on_press(Message::RecipeSelected(recipe.id))
    .into()
}
