use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::nav::Route;
use crate::ui::app::{App, Focus};
use crate::ui::home::HomeMenu;
use crate::ui::search::SearchIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::F(1) {
        app.toggle_help();
        return;
    }

    if app.focus() == Focus::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.close_help();
        }
        return;
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::Profile { .. } => handle_profile_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.home_mut().move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.home_mut().move_selection(1),
        KeyCode::Enter => {
            let route = app.home().route();
            app.navigate(route);
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(route) = index.checked_sub(1).and_then(HomeMenu::route_for) {
                app.navigate(route);
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.back();
        return;
    }

    let Some(profile) = app.profile_mut() else {
        return;
    };

    if is_ctrl_char(key, 'u') {
        profile.edit(SearchIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            profile.submit();
        }
        // Tab stands in for tapping the card.
        KeyCode::Tab => {
            profile.toggle();
        }
        KeyCode::Backspace => profile.edit(SearchIntent::DeleteChar),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            profile.edit(SearchIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::country::{FetchDispatcher, FetchRequest};
    use crossterm::event::KeyEventState;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingFetcher {
        requests: RefCell<Vec<FetchRequest>>,
    }

    impl FetchDispatcher for RecordingFetcher {
        fn dispatch(&self, request: FetchRequest) {
            self.requests.borrow_mut().push(request);
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> (App, Rc<RecordingFetcher>) {
        let fetcher = Rc::new(RecordingFetcher::default());
        let app = App::new(&Config::default(), fetcher.clone(), Route::Home);
        (app, fetcher)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn enter_on_home_opens_profile() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.route(), Route::Profile { .. }));
    }

    #[test]
    fn digit_on_home_opens_sample() {
        let (mut app, fetcher) = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(fetcher.requests.borrow()[0].code.as_str(), "BR");
    }

    #[test]
    fn typing_and_enter_submits() {
        let (mut app, fetcher) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "fr");
        handle_key(&mut app, press(KeyCode::Enter));
        let requests = fetcher.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].code.as_str(), "FR");
    }

    #[test]
    fn q_is_text_on_profile() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "qa");
        assert!(!app.should_quit());
        assert_eq!(app.profile().unwrap().search().input, "qa");
    }

    #[test]
    fn backspace_and_clear() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "brx");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.profile().unwrap().search().input, "br");
        handle_key(&mut app, ctrl('u'));
        assert!(app.profile().unwrap().search().input.is_empty());
    }

    #[test]
    fn esc_goes_back_then_quits() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Home);
        assert!(!app.should_quit());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn tab_without_country_does_nothing() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Tab));
        assert!(!app.is_animating());
    }

    #[test]
    fn ctrl_q_quits_anywhere() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn help_swallows_keys() {
        let (mut app, _) = make_app();
        handle_key(&mut app, press(KeyCode::F(1)));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route(), &Route::Home);
        assert_eq!(app.focus(), Focus::Screen);
    }
}
