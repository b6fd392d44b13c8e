use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type TeamId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

/// A player as submitted for creation. The server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

impl PlayerDraft {
    pub fn matches(&self, player: &Player) -> bool {
        self.name == player.name
            && self.breed == player.breed
            && self.status == player.status
            && self.image_url == player.image_url
    }

    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            breed: self.breed,
            status: self.status,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}
