use std::collections::VecDeque;

use crate::form::FormState;
use crate::model::{Player, PlayerDraft, PlayerId, Team};
use crate::view::{self, DetailView, FormView, ListView};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Roster,
    Form,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub focus: Focus,
    /// Last fetched roster. `None` when the last list fetch failed.
    pub players: Option<Vec<Player>>,
    /// Fetched on request and kept for later use; not drawn.
    pub teams: Vec<Team>,
    pub selected: usize,
    pub form: FormState,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::List,
            focus: Focus::Roster,
            players: Some(Vec::new()),
            teams: Vec::new(),
            selected: 0,
            form: FormState::new(),
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn list_view(&self) -> ListView {
        view::build_list_view(self.players.as_deref())
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        match &self.screen {
            Screen::Detail(player) => Some(view::build_detail_view(player)),
            Screen::List => None,
        }
    }

    pub fn form_view(&self) -> FormView {
        view::build_form_view(&self.form, self.focus == Focus::Form)
    }

    pub fn player_count(&self) -> usize {
        self.players.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.players.as_ref()?.get(self.selected)
    }

    pub fn selected_player_id(&self) -> Option<PlayerId> {
        self.selected_player().map(|p| p.id)
    }

    pub fn select_next(&mut self) {
        let len = self.player_count();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.player_count();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Drops a card right away, before the server has confirmed the delete.
    pub fn remove_local(&mut self, id: PlayerId) -> bool {
        let Some(players) = self.players.as_mut() else {
            return false;
        };
        let before = players.len();
        players.retain(|p| p.id != id);
        let removed = players.len() != before;
        self.clamp_selection();
        removed
    }

    pub fn close_detail(&mut self) {
        self.screen = Screen::List;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    SetPlayers(Vec<Player>),
    PlayersUnavailable,
    ShowPlayer(Player),
    SetTeams(Vec<Team>),
    Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    FetchPlayers,
    FetchPlayer { id: PlayerId },
    RemovePlayer { id: PlayerId },
    CreatePlayer(PlayerDraft),
    FetchTeams,
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetPlayers(players) => {
            // Full replacement; whichever response lands last wins.
            state.players = Some(players);
            state.screen = Screen::List;
            state.clamp_selection();
        }
        Delta::PlayersUnavailable => {
            state.players = None;
            state.screen = Screen::List;
            state.selected = 0;
        }
        Delta::ShowPlayer(player) => {
            state.screen = Screen::Detail(player);
        }
        Delta::SetTeams(teams) => {
            state.push_log(format!("[INFO] Loaded {} teams", teams.len()));
            state.teams = teams;
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
