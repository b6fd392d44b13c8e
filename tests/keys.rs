use std::sync::mpsc::{self, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use puppy_bowl::app::App;
use puppy_bowl::model::{Player, PlayerDraft};
use puppy_bowl::state::{apply_delta, Delta, Focus, ProviderCommand, Screen};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn pup(id: i64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: "Lab".to_string(),
        status: "active".to_string(),
        image_url: "x.png".to_string(),
    }
}

fn app_with_roster(players: Vec<Player>) -> (App, Receiver<ProviderCommand>) {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(tx);
    apply_delta(&mut app.state, Delta::SetPlayers(players));
    (app, rx)
}

fn sent(rx: &Receiver<ProviderCommand>) -> Vec<ProviderCommand> {
    rx.try_iter().collect()
}

#[test]
fn bootstrap_fetches_roster_once() {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(tx);
    app.bootstrap();
    assert_eq!(sent(&rx), vec![ProviderCommand::FetchPlayers]);
}

#[test]
fn details_key_requests_selected_player() {
    let (mut app, rx) = app_with_roster(vec![pup(1, "Rex"), pup(2, "Anise")]);
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Enter));
    assert_eq!(sent(&rx), vec![ProviderCommand::FetchPlayer { id: 2 }]);
}

#[test]
fn remove_key_drops_card_before_sending_remove() {
    let (mut app, rx) = app_with_roster(vec![pup(1, "Rex"), pup(2, "Anise")]);
    app.on_key(key(KeyCode::Char('x')));

    assert!(app.state.list_view().card(1).is_none());
    assert_eq!(sent(&rx), vec![ProviderCommand::RemovePlayer { id: 1 }]);
}

#[test]
fn keys_on_empty_roster_send_nothing() {
    let (mut app, rx) = app_with_roster(Vec::new());
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('x')));
    assert!(sent(&rx).is_empty());
    assert_eq!(app.state.logs.len(), 2);
}

#[test]
fn closing_detail_returns_to_list_and_refetches() {
    let (mut app, rx) = app_with_roster(vec![pup(1, "Rex")]);
    apply_delta(&mut app.state, Delta::ShowPlayer(pup(1, "Rex")));
    app.on_key(key(KeyCode::Esc));

    assert_eq!(app.state.screen, Screen::List);
    assert_eq!(sent(&rx), vec![ProviderCommand::FetchPlayers]);
}

#[test]
fn form_enter_submits_raw_draft_and_keeps_text() {
    let (mut app, rx) = app_with_roster(Vec::new());
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.state.focus, Focus::Form);

    for c in "Fido".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Tab));
    for c in "bench".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Tab));
    for c in "y.png".chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
    app.on_key(key(KeyCode::Enter));

    let expected = PlayerDraft {
        name: "Fido".to_string(),
        breed: String::new(),
        status: "bench".to_string(),
        image_url: "y.png".to_string(),
    };
    assert_eq!(sent(&rx), vec![ProviderCommand::CreatePlayer(expected.clone())]);
    assert_eq!(app.state.form.draft(), expected);
}

#[test]
fn q_types_into_form_but_quits_from_roster() {
    let (mut app, _rx) = app_with_roster(Vec::new());
    app.on_key(key(KeyCode::Char('n')));
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.state.form.draft().name, "q");

    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_form() {
    let (mut app, _rx) = app_with_roster(Vec::new());
    app.on_key(key(KeyCode::Tab));
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}
