//! Pure transformations from roster data into the view models the terminal draws.
//!
//! Nothing in here touches the terminal, so every view can be built and
//! inspected in tests. The adapter in `main.rs` only lays these out.

use crate::form::{FormField, FormState};
use crate::model::{Player, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Details,
    Remove,
    Close,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub player_id: Option<PlayerId>,
}

impl Control {
    fn for_player(kind: ControlKind, id: PlayerId) -> Self {
        Self {
            kind,
            player_id: Some(id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            ControlKind::Details => "See Details",
            ControlKind::Remove => "Remove from roster",
            ControlKind::Close => "Close",
            ControlKind::Submit => "Submit",
        }
    }

    /// `data-id="N"` for controls bound to a player, empty otherwise.
    pub fn tag(&self) -> String {
        self.player_id
            .map(|id| format!("data-id=\"{id}\""))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub controls: [Control; 2],
}

impl PlayerCard {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            breed: player.breed.clone(),
            status: player.status.clone(),
            image_url: player.image_url.clone(),
            controls: [
                Control::for_player(ControlKind::Details, player.id),
                Control::for_player(ControlKind::Remove, player.id),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub cards: Vec<PlayerCard>,
    /// Set when the last list fetch failed and there is nothing to show.
    pub unavailable: bool,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: PlayerId) -> Option<&PlayerCard> {
        self.cards.iter().find(|card| card.id == id)
    }
}

pub fn build_list_view(players: Option<&[Player]>) -> ListView {
    match players {
        Some(players) => ListView {
            cards: players.iter().map(PlayerCard::from_player).collect(),
            unavailable: false,
        },
        None => ListView {
            cards: Vec::new(),
            unavailable: true,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub close: Control,
}

pub fn build_detail_view(player: &Player) -> DetailView {
    DetailView {
        id: player.id,
        name: player.name.clone(),
        breed: player.breed.clone(),
        status: player.status.clone(),
        image_url: player.image_url.clone(),
        close: Control::for_player(ControlKind::Close, player.id),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit: Control,
    pub active: bool,
}

pub fn build_form_view(form: &FormState, active: bool) -> FormView {
    let fields = FormField::ALL
        .iter()
        .map(|field| FieldView {
            label: field.label(),
            value: form.value(*field).to_string(),
            focused: active && form.focused() == *field,
        })
        .collect();
    FormView {
        fields,
        submit: Control {
            kind: ControlKind::Submit,
            player_id: None,
        },
        active,
    }
}
