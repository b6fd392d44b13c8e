use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;

use crate::state::{AppState, Focus, ProviderCommand, Screen};

/// Key handling for the roster screen. Every key either edits local state or
/// hands a command to the provider thread.
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    cmd_tx: Sender<ProviderCommand>,
}

impl App {
    pub fn new(cmd_tx: Sender<ProviderCommand>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    pub fn bootstrap(&mut self) {
        self.send(ProviderCommand::FetchPlayers, "Roster fetch");
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.state.focus {
            Focus::Form => self.on_form_key(key),
            Focus::Roster => match self.state.screen {
                Screen::List => self.on_list_key(key),
                Screen::Detail(_) => self.on_detail_key(key),
            },
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('d') | KeyCode::Enter => self.open_details(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('r') => self.send(ProviderCommand::FetchPlayers, "Roster fetch"),
            KeyCode::Char('t') => self.send(ProviderCommand::FetchTeams, "Teams fetch"),
            KeyCode::Char('n') | KeyCode::Tab => self.state.focus = Focus::Form,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Char('c') | KeyCode::Esc => {
                self.state.close_detail();
                self.send(ProviderCommand::FetchPlayers, "Roster fetch");
            }
            KeyCode::Char('n') | KeyCode::Tab => self.state.focus = Focus::Form,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.focus = Focus::Roster,
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Enter => {
                let draft = self.state.form.draft();
                self.send(ProviderCommand::CreatePlayer(draft), "New player submit");
            }
            KeyCode::Char(c) => self.state.form.push_char(c),
            _ => {}
        }
    }

    fn open_details(&mut self) {
        let Some(id) = self.state.selected_player_id() else {
            self.state.push_log("[INFO] No player selected");
            return;
        };
        self.send(ProviderCommand::FetchPlayer { id }, "Player details request");
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.state.selected_player_id() else {
            self.state.push_log("[INFO] No player selected");
            return;
        };
        self.state.remove_local(id);
        self.send(ProviderCommand::RemovePlayer { id }, "Remove request");
    }

    fn send(&mut self, cmd: ProviderCommand, what: &str) {
        if self.cmd_tx.send(cmd).is_err() {
            warn!("{what} failed: provider gone");
            self.state.push_log(format!("[WARN] {what} failed"));
        }
    }
}
