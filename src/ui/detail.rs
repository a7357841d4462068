/// Detail view: recipe, preparation timer and the notes editor

use iced::widget::{button, column, container, progress_bar, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::detail::DetailSession;
use crate::state::timer::{format_mmss, TimerEngine};
use crate::Message;

pub fn view(session: &DetailSession) -> Element<Message> {
    let Some(recipe) = &session.recipe else {
        // The selected id could not be resolved; show a way back instead of crashing
        return container(
            column![
                text("Recipe not found").size(24),
                button("Back to catalog").on_press(Message::BackPressed).padding(8),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    };

    let mut content = column![
        row![
            button("Back").on_press(Message::BackPressed).padding(8),
            text(&recipe.name).size(28),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        // Placeholder image band; real image loading is a presentation concern
        container(text("🍸").size(64))
            .width(Length::Fill)
            .height(160)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        text("Ingredients:").size(20),
        text(recipe.ingredients.join("\n")),
        text("Instructions:").size(20),
        text(&recipe.instructions),
    ]
    .spacing(12)
    .padding(16);

    if recipe.has_timer() {
        content = content.push(timer_section(&session.timer));
    }

    content = content.push(text("Your notes:").size(20));
    content = content.push(
        text_input("Write a note for this recipe...", &session.notes_draft)
            .on_input(Message::NotesChanged)
            .padding(8),
    );
    content = content.push(
        row![
            button("Save notes").on_press(Message::SaveNotes).padding(8),
            button("Share ingredients").on_press(Message::ShareRequested).padding(8),
        ]
        .spacing(8),
    );

    if let Some(status) = &session.status {
        content = content.push(text(status).size(14));
    }

    scrollable(content).height(Length::Fill).into()
}

fn timer_section(timer: &TimerEngine) -> Element<'static, Message> {
    column![
        text(format!("Preparation time: {}", format_mmss(timer.target()))).size(16),
        text(format!("Last recorded: {}", format_mmss(timer.last_recorded()))).size(14),
        text(format_mmss(timer.remaining())).size(40),
        progress_bar(0.0..=1.0, timer.progress()).height(8),
        row![
            button("Start").on_press(Message::TimerStart).padding(8),
            button("Pause").on_press(Message::TimerPause).padding(8),
            button("Resume").on_press(Message::TimerResume).padding(8),
            button("Stop").on_press(Message::TimerStop).padding(8),
        ]
        .spacing(8),
    ]
    .spacing(8)
    .into()
}
