use log::{debug, info};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http_client::http_client;
use crate::model::{Player, PlayerDraft, PlayerId, Team};

/// The remote roster service. Each call is exactly one request/response round trip.
pub trait RosterApi: Send {
    fn list_players(&self) -> Result<Vec<Player>, ApiError>;
    fn get_player(&self, id: PlayerId) -> Result<Player, ApiError>;
    /// Returns the raw response body; the envelope is not interpreted beyond success/failure.
    fn create_player(&self, draft: &PlayerDraft) -> Result<Value, ApiError>;
    fn delete_player(&self, id: PlayerId) -> Result<Value, ApiError>;
    fn list_teams(&self) -> Result<Vec<Team>, ApiError>;
}

pub struct HttpRosterApi {
    client: Client,
    config: ClientConfig,
}

impl HttpRosterApi {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = http_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl RosterApi for HttpRosterApi {
    fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = self.config.players_url();
        debug!("GET {url}");
        let body = read_body(self.client.get(&url).send()?)?;
        let players = parse_players_json(&body)?;
        info!("fetched {} players", players.len());
        Ok(players)
    }

    fn get_player(&self, id: PlayerId) -> Result<Player, ApiError> {
        let url = self.config.player_url(id);
        debug!("GET {url}");
        let body = read_body(self.client.get(&url).send()?)?;
        parse_player_json(&body)
    }

    fn create_player(&self, draft: &PlayerDraft) -> Result<Value, ApiError> {
        let url = self.config.players_url();
        debug!("POST {url}");
        let resp = self.client.post(&url).json(draft).send()?;
        let value = parse_raw_json(&read_body(resp)?)?;
        info!("created player {:?}", draft.name);
        Ok(value)
    }

    fn delete_player(&self, id: PlayerId) -> Result<Value, ApiError> {
        let url = self.config.player_url(id);
        debug!("DELETE {url}");
        let value = parse_raw_json(&read_body(self.client.delete(&url).send()?)?)?;
        info!("deleted player #{id}");
        Ok(value)
    }

    fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let url = self.config.teams_url();
        debug!("GET {url}");
        let body = read_body(self.client.get(&url).send()?)?;
        parse_teams_json(&body)
    }
}

// The service reports most failures inside a JSON envelope, so a non-2xx
// status is only fatal here when the body cannot be read as JSON.
fn read_body(resp: Response) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() && serde_json::from_str::<Value>(body.trim()).is_err() {
        return Err(ApiError::Status { status, body });
    }
    Ok(body)
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<Value>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct PlayersData {
    players: Option<Vec<Player>>,
}

#[derive(Debug, Deserialize)]
struct PlayerData {
    player: Option<Player>,
}

#[derive(Debug, Deserialize)]
struct TeamsData {
    teams: Option<Vec<Team>>,
}

pub fn parse_players_json(raw: &str) -> Result<Vec<Player>, ApiError> {
    parse_envelope::<PlayersData>(raw)?
        .players
        .ok_or(ApiError::Envelope("data.players"))
}

pub fn parse_player_json(raw: &str) -> Result<Player, ApiError> {
    parse_envelope::<PlayerData>(raw)?
        .player
        .ok_or(ApiError::Envelope("data.player"))
}

pub fn parse_teams_json(raw: &str) -> Result<Vec<Team>, ApiError> {
    parse_envelope::<TeamsData>(raw)?
        .teams
        .ok_or(ApiError::Envelope("data.teams"))
}

/// Parses a loosely-consumed response. Only an explicit `success: false` is an error.
pub fn parse_raw_json(raw: &str) -> Result<Value, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Envelope("body"));
    }
    let value: Value = serde_json::from_str(trimmed)?;
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Remote {
            message: error_message(value.get("error")),
        });
    }
    Ok(value)
}

fn parse_envelope<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ApiError::Envelope("data"));
    }
    let envelope: Envelope<T> = serde_json::from_str(trimmed)?;
    if envelope.success == Some(false) {
        return Err(ApiError::Remote {
            message: error_message(envelope.error.as_ref()),
        });
    }
    envelope.data.ok_or(ApiError::Envelope("data"))
}

fn error_message(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(msg)) => msg.clone(),
        Some(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| map.get("name").and_then(Value::as_str))
            .unwrap_or("unknown error")
            .to_string(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "unknown error".to_string(),
    }
}
