use std::fs;
use std::path::PathBuf;

use puppy_bowl::api::{parse_player_json, parse_players_json, parse_raw_json, parse_teams_json};
use puppy_bowl::error::ApiError;
use puppy_bowl::model::{PlayerDraft, PlayerId, TeamId};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_players_fixture_in_order() {
    let raw = read_fixture("players.json");
    let players = parse_players_json(&raw).expect("fixture should parse");
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id, 1);
    assert_eq!(players[0].name, "Rex");
    assert_eq!(players[0].image_url, "x.png");
    assert_eq!(players[1].breed, "Corgi");
}

#[test]
fn parses_single_player_fixture() {
    let raw = read_fixture("player.json");
    let player = parse_player_json(&raw).expect("fixture should parse");
    assert_eq!(player.id, 2);
    assert_eq!(player.status, "bench");
}

#[test]
fn parses_teams_with_and_without_players() {
    let raw = read_fixture("teams.json");
    let teams = parse_teams_json(&raw).expect("fixture should parse");
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].players.len(), 1);
    assert!(teams[1].players.is_empty());
}

#[test]
fn team_ids_and_member_ids_are_separate() {
    let teams = parse_teams_json(&read_fixture("teams.json")).expect("fixture should parse");
    let team_id: TeamId = teams[0].id;
    let member_id: PlayerId = teams[0].players[0].id;
    assert_eq!(team_id, 3);
    assert_eq!(member_id, 2);
}

#[test]
fn create_response_is_kept_raw() {
    let raw = read_fixture("create_response.json");
    let value = parse_raw_json(&raw).expect("fixture should parse");
    assert_eq!(value["data"]["newPlayer"]["name"], "Fido");
}

#[test]
fn list_without_players_field_is_malformed() {
    let err = parse_players_json(r#"{"success":true,"data":{"player":{}}}"#).unwrap_err();
    assert!(matches!(err, ApiError::Envelope("data.players")));
}

#[test]
fn list_without_data_is_malformed() {
    let err = parse_players_json(r#"{"players":[]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Envelope("data")));
}

#[test]
fn empty_and_null_bodies_are_malformed() {
    assert!(matches!(parse_players_json("").unwrap_err(), ApiError::Envelope(_)));
    assert!(matches!(parse_player_json("null").unwrap_err(), ApiError::Envelope(_)));
    assert!(matches!(parse_raw_json("  ").unwrap_err(), ApiError::Envelope(_)));
}

#[test]
fn non_json_body_is_a_decode_error() {
    let err = parse_players_json("<html>Application error</html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn remote_failure_carries_server_message() {
    let raw = read_fixture("error_response.json");
    match parse_player_json(&raw).unwrap_err() {
        ApiError::Remote { message } => assert_eq!(message, "No player found with id 404"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        parse_raw_json(&raw).unwrap_err(),
        ApiError::Remote { .. }
    ));
}

#[test]
fn malformed_record_fails_the_whole_list() {
    let raw = r#"{"data":{"players":[{"id":1,"name":"Rex"}]}}"#;
    assert!(matches!(parse_players_json(raw).unwrap_err(), ApiError::Decode(_)));
}

#[test]
fn draft_serializes_to_wire_shape() {
    let draft = PlayerDraft {
        name: "Fido".to_string(),
        breed: String::new(),
        status: "bench".to_string(),
        image_url: "y.png".to_string(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name":"Fido","breed":"","status":"bench","imageUrl":"y.png"})
    );
}
