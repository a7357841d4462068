use std::time::Duration;

use iced::{Element, Subscription, Task, Theme};

// Declare the modules
mod state;
mod ui;

use state::catalog::Tab;
use state::data::Recipe;
use state::detail::DetailSession;
use state::notes;
use state::store::{self, RecipeStore};

/// Main application state
struct MixIt {
    /// The recipe store (writable JSON copy with bundled fallback)
    store: RecipeStore,
    /// The loaded collection backing the catalog view
    recipes: Vec<Recipe>,
    /// Current search text
    search_query: String,
    /// Whether the search bar replaces the tab row
    search_active: bool,
    /// Selected category tab
    tab: Tab,
    /// Which screen is showing
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

enum Screen {
    Catalog,
    /// The detail session is dropped on back navigation, which also
    /// shuts off the tick subscription for its timer
    Detail(DetailSession),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search text changed
    SearchChanged(String),
    /// Search bar opened or closed
    SearchToggled,
    /// Clear the search text
    ClearSearch,
    /// A category tab was selected
    TabSelected(Tab),
    /// A recipe card was clicked; carries only the id, the detail
    /// session re-resolves the full record from the store
    RecipeSelected(i64),
    /// Leave the detail view
    BackPressed,
    TimerStart,
    TimerPause,
    TimerResume,
    TimerStop,
    /// One second elapsed while a timer was running
    TimerTick,
    /// Notes draft edited
    NotesChanged(String),
    /// Persist the notes draft
    SaveNotes,
    /// Background notes persist completed
    NotesSaved(Result<(), String>),
    /// Copy the ingredient list to the clipboard
    ShareRequested,
}

impl MixIt {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let store = RecipeStore::new();

        // A failed load means even the bundled dataset was unreadable;
        // show an empty catalog rather than crash.
        let (recipes, status) = match store.load() {
            Ok(recipes) => {
                println!("🍹 Mix It! initialized with {} recipes", recipes.len());
                let status = format!("Ready. {} recipes loaded.", recipes.len());
                (recipes, status)
            }
            Err(e) => {
                eprintln!("⚠️  {}", e);
                (Vec::new(), "No recipe data available.".to_string())
            }
        };

        (
            MixIt {
                store,
                recipes,
                search_query: String::new(),
                search_active: false,
                tab: Tab::Home,
                screen: Screen::Catalog,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            Message::SearchToggled => {
                self.search_active = !self.search_active;
                Task::none()
            }
            Message::ClearSearch => {
                self.search_query.clear();
                Task::none()
            }
            Message::TabSelected(tab) => {
                self.tab = tab;
                Task::none()
            }
            Message::RecipeSelected(id) => {
                match DetailSession::open(&self.store, id) {
                    Ok(session) => self.screen = Screen::Detail(session),
                    Err(e) => self.status = format!("Could not open recipe: {}", e),
                }
                Task::none()
            }
            Message::BackPressed => {
                self.screen = Screen::Catalog;
                Task::none()
            }
            Message::TimerStart => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.timer.start();
                }
                Task::none()
            }
            Message::TimerPause => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.timer.pause();
                }
                Task::none()
            }
            Message::TimerResume => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.timer.resume();
                }
                Task::none()
            }
            Message::TimerStop => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.timer.stop();
                }
                Task::none()
            }
            Message::TimerTick => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.timer.tick();
                }
                Task::none()
            }
            Message::NotesChanged(draft) => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.notes_draft = draft;
                }
                Task::none()
            }
            Message::SaveNotes => {
                let Screen::Detail(session) = &mut self.screen else {
                    return Task::none();
                };
                let Some(id) = session.recipe.as_ref().map(|r| r.id) else {
                    return Task::none();
                };

                // The in-memory update is applied up front; a failed write
                // only costs durability, never the current session's view.
                session.apply_saved_notes();
                self.recipes = notes::update_notes(&self.recipes, id, &session.notes_draft);

                Task::perform(
                    store::persist_notes(self.store.clone(), id, session.notes_draft.clone()),
                    Message::NotesSaved,
                )
            }
            Message::NotesSaved(result) => {
                if let Screen::Detail(session) = &mut self.screen {
                    session.status = Some(match result {
                        Ok(()) => "Notes saved.".to_string(),
                        Err(e) => {
                            eprintln!("⚠️  Notes were not persisted: {}", e);
                            format!("Notes kept for this session but not saved: {}", e)
                        }
                    });
                }
                Task::none()
            }
            Message::ShareRequested => {
                if let Screen::Detail(session) = &mut self.screen {
                    if let Some(message) = session.share_message() {
                        session.status = Some("Ingredients copied to clipboard.".to_string());
                        return iced::clipboard::write(message);
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Catalog => ui::catalog::view(
                &self.recipes,
                &self.search_query,
                self.search_active,
                self.tab,
                &self.status,
            ),
            Screen::Detail(session) => ui::detail::view(session),
        }
    }

    /// Tick once per second, but only while a detail timer is running.
    /// Pausing, stopping or leaving the detail screen drops the
    /// subscription, so no further tick message is delivered.
    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Detail(session) if session.timer.is_running() => {
                iced::time::every(Duration::from_secs(1)).map(|_| Message::TimerTick)
            }
            _ => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Mix It!", MixIt::update, MixIt::view)
        .subscription(MixIt::subscription)
        .theme(MixIt::theme)
        .centered()
        .run_with(MixIt::new)
}
