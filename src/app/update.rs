//! Event loop: spawn the people fetch, draw, and route key presses.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, Receiver, error::TryRecvError};
use tracing::{debug, warn};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode, ModalState};
use crate::people::{FetchError, PeopleSource, Person};
use crate::search::apply_search;
use crate::ui;

/// What the loop should do after a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type FetchResult = Result<Vec<Person>, FetchError>;

/// Run `source.fetch()` on the runtime; the result arrives on the returned receiver.
pub fn spawn_fetch<S>(handle: &Handle, source: S) -> Receiver<FetchResult>
where
    S: PeopleSource + Send + Sync + 'static,
{
    let (tx, rx) = oneshot::channel();
    handle.spawn(async move {
        let result = source.fetch().await;
        if tx.send(result).is_err() {
            debug!("fetch finished after the view closed");
        }
    });
    rx
}

/// Deliver a finished fetch to the state. Returns `true` once the receiver is done.
pub fn poll_fetch(app: &mut AppState, rx: &mut Receiver<FetchResult>) -> bool {
    match rx.try_recv() {
        Ok(result) => {
            app.on_people_loaded(result);
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Closed) => {
            warn!("fetch task ended without a result");
            app.on_people_loaded(Err(FetchError::Transport(
                "fetch task ended without a result".to_string(),
            )));
            true
        }
    }
}

pub fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    handle: &Handle,
    source: S,
    mut app: AppState,
) -> Result<()>
where
    B: Backend,
    S: PeopleSource + Send + Sync + 'static,
{
    let mut pending = Some(spawn_fetch(handle, source));

    loop {
        if let Some(rx) = pending.as_mut() {
            if poll_fetch(&mut app, rx) {
                pending = None;
            }
        }

        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut app, key) == Flow::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Apply one key press to the state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    match app.input_mode {
        InputMode::Normal => {
            let Some(action) = app.keymap.resolve(&key) else {
                return Flow::Continue;
            };
            apply_action(app, action)
        }
        InputMode::Search => {
            match key.code {
                KeyCode::Esc => {
                    app.search_query.clear();
                    apply_search(app);
                    app.input_mode = InputMode::Normal;
                }
                KeyCode::Enter => {
                    app.select_highlighted();
                    app.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    app.search_query.pop();
                    apply_search(app);
                }
                KeyCode::Up => app.move_up(),
                KeyCode::Down => app.move_down(),
                KeyCode::Char(c) => {
                    app.search_query.push(c);
                    apply_search(app);
                }
                _ => {}
            }
            Flow::Continue
        }
        InputMode::Modal => {
            if let Some(ModalState::Help { scroll }) = app.modal.as_mut() {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        app.modal = None;
                        app.input_mode = InputMode::Normal;
                    }
                    _ => {}
                }
            } else {
                app.input_mode = InputMode::Normal;
            }
            Flow::Continue
        }
    }
}

fn apply_action(app: &mut AppState, action: KeyAction) -> Flow {
    match action {
        KeyAction::Quit => return Flow::Quit,
        KeyAction::OpenHelp => {
            app.modal = Some(ModalState::Help { scroll: 0 });
            app.input_mode = InputMode::Modal;
        }
        KeyAction::StartSearch => app.input_mode = InputMode::Search,
        KeyAction::ClearSearch => {
            if !app.search_query.is_empty() {
                app.search_query.clear();
                apply_search(app);
            }
        }
        KeyAction::SelectHighlighted => app.select_highlighted(),
        KeyAction::ClearSelection => app.clear_selection(),
        KeyAction::MoveUp => app.move_up(),
        KeyAction::MoveDown => app.move_down(),
        KeyAction::PageUp => app.page_up(),
        KeyAction::PageDown => app.page_down(),
        KeyAction::Ignore => {}
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Keymap, PickerConfig, Theme};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::with_parts(&PickerConfig::default(), Theme::mocha(), Keymap::default());
        let people = ["Leanne Graham", "Ervin Howell", "Clementine Bauch"]
            .iter()
            .enumerate()
            .map(|(i, n)| Person {
                id: i as u64 + 1,
                name: n.to_string(),
                ..Default::default()
            })
            .collect();
        app.on_people_loaded(Ok(people));
        app
    }

    #[test]
    fn typing_filters_and_enter_selects() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Search);
        for c in "how".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.people.len(), 1);
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.selected_person().map(|p| p.name.as_str()), Some("Ervin Howell"));
    }

    #[test]
    fn esc_in_search_restores_list() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('z')));
        assert!(app.people.is_empty());
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.people.len(), 3);
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.people.len(), 3);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn quit_only_from_normal_mode() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Flow::Continue);
        assert_eq!(app.search_query, "q");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn help_modal_opens_scrolls_and_closes() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.input_mode, InputMode::Modal);
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.modal, Some(ModalState::Help { scroll: 1 }));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.modal, None);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn navigation_select_and_clear() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selected_id, Some(1));
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.selected_id, None);
    }

    struct Fixed(Vec<Person>);

    impl PeopleSource for Fixed {
        async fn fetch(&self) -> Result<Vec<Person>, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn spawned_fetch_reaches_state() {
        let mut app = AppState::with_parts(&PickerConfig::default(), Theme::mocha(), Keymap::default());
        let mut rx = spawn_fetch(
            &Handle::current(),
            Fixed(vec![Person { id: 9, name: "Kurtis Weissnat".into(), ..Default::default() }]),
        );
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while !poll_fetch(&mut app, &mut rx) {
            assert!(std::time::Instant::now() < deadline, "fetch never completed");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(!app.is_loading());
        assert_eq!(app.people.len(), 1);
    }
}
