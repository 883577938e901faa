mod message;
mod screens;
mod state;
mod widgets;

pub use message::{ApplicationKind, Message, Route};
pub use state::AppState;

use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::core::db::WorkspaceDb;
use screens::{LoginScreen, ScreenData};

/// Launch the desktop app.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Kokua Grants")
        .theme(App::theme)
        .run()
}

struct App {
    state: AppState,
    screen: ScreenData,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::default(),
            screen: ScreenData::Login(LoginScreen::default()),
        };
        let open = Task::perform(
            async {
                let path = WorkspaceDb::default_path().map_err(|e| e.to_string())?;
                let workspace = WorkspaceDb::new(&path).await.map_err(|e| e.to_string())?;
                Ok(Arc::new(workspace))
            },
            Message::WorkspaceOpened,
        );
        (app, open)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen.update(message, &mut self.state)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
