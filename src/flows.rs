use log::{debug, warn};

use crate::api::RosterApi;
use crate::model::PlayerId;
use crate::state::{Delta, ProviderCommand};

/// Runs one command against the roster service and reports the outcome as deltas.
///
/// API failures never leave this function: each one becomes a `[WARN]`
/// console line (and a log record) naming the operation. Mutations always
/// finish with a full list re-fetch.
pub fn handle_command(api: &dyn RosterApi, cmd: ProviderCommand) -> Vec<Delta> {
    debug!("provider command: {cmd:?}");
    let mut out = Vec::new();
    match cmd {
        ProviderCommand::FetchPlayers => refresh_players(api, &mut out),
        ProviderCommand::FetchPlayer { id } => show_player(api, id, &mut out),
        ProviderCommand::RemovePlayer { id } => {
            match api.delete_player(id) {
                Ok(_) => out.push(Delta::Log(format!("[INFO] Removed player #{id}"))),
                Err(err) => out.push(warn_delta(format!(
                    "Trouble removing player #{id} from the roster: {err}"
                ))),
            }
            refresh_players(api, &mut out);
        }
        ProviderCommand::CreatePlayer(draft) => {
            let who = display_name(&draft.name);
            match api.create_player(&draft) {
                Ok(_) => out.push(Delta::Log(format!("[INFO] Added {who}"))),
                Err(err) => out.push(warn_delta(format!(
                    "Something went wrong adding {who}: {err}"
                ))),
            }
            refresh_players(api, &mut out);
        }
        ProviderCommand::FetchTeams => match api.list_teams() {
            Ok(teams) => out.push(Delta::SetTeams(teams)),
            Err(err) => out.push(warn_delta(format!("Trouble fetching teams: {err}"))),
        },
    }
    out
}

fn refresh_players(api: &dyn RosterApi, out: &mut Vec<Delta>) {
    match api.list_players() {
        Ok(players) => out.push(Delta::SetPlayers(players)),
        Err(err) => {
            out.push(warn_delta(format!("Trouble fetching players: {err}")));
            out.push(Delta::PlayersUnavailable);
        }
    }
}

fn show_player(api: &dyn RosterApi, id: PlayerId, out: &mut Vec<Delta>) {
    match api.get_player(id) {
        Ok(player) => out.push(Delta::ShowPlayer(player)),
        Err(err) => out.push(warn_delta(format!("Trouble fetching player #{id}: {err}"))),
    }
}

fn warn_delta(msg: String) -> Delta {
    warn!("{msg}");
    Delta::Log(format!("[WARN] {msg}"))
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        "unnamed player".to_string()
    } else {
        format!("\"{name}\"")
    }
}
