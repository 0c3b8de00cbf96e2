//! Wire types for the remote status API and the snapshot model derived from
//! them.
//!
//! The endpoint is a fixed third-party contract consumed as-is. Every field is
//! treated as optional: a body that fails to decode, lacks `online`, or
//! reports `online: false` all collapse into [`ServerStatus::Offline`]. A
//! snapshot is produced fresh on every poll and replaced wholesale; nothing is
//! ever merged into a previous one.

use serde::Deserialize;

use crate::motd::Motd;

/// Address players paste into their client. Also the key the status API is
/// queried under.
pub const SERVER_ADDRESS: &str = "play.frostvale.net:25565";

/// Status endpoint for [`SERVER_ADDRESS`].
pub const STATUS_ENDPOINT: &str = "https://api.mcstatus.io/v2/status/java/play.frostvale.net:25565";

/// External head-image host. Avatar URLs are `{host}/{key}/{size}`.
pub const AVATAR_HOST: &str = "https://mc-heads.net/avatar";

const AVATAR_SIZE_PX: u32 = 40;

// ---------------------------------------------------------------------------
// Raw response shapes. Private: the only way in is `decode_status`.
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    online: Option<bool>,
    #[serde(default)]
    players: Option<PlayersSection>,
    #[serde(default)]
    version: Option<VersionSection>,
    #[serde(default)]
    motd: Option<MotdSection>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayersSection {
    #[serde(default)]
    online: Option<u32>,
    #[serde(default)]
    max: Option<u32>,
    #[serde(default)]
    list: Option<Vec<PlayerEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_clean: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VersionSection {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_clean: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MotdSection {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    clean: Option<String>,
}

// ---------------------------------------------------------------------------
// Snapshot model.
// ---------------------------------------------------------------------------

/// Authoritative server state for one poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    Online(ServerStatusSnapshot),
    Offline,
}

/// Immutable point-in-time record of an online server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStatusSnapshot {
    pub player_count: u32,
    pub max_players: u32,
    pub version_label: Option<String>,
    pub players: Vec<PlayerSummary>,
    pub motd: Option<Motd>,
}

/// One entry of the visible player list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    /// Name shown next to / under the avatar.
    pub display_name: String,
    /// Stable identifier the avatar image is keyed by (uuid when the server
    /// exposes one, display name otherwise).
    pub avatar_key: String,
}

impl PlayerSummary {
    pub fn avatar_url(&self) -> String {
        format!("{AVATAR_HOST}/{}/{AVATAR_SIZE_PX}", self.avatar_key)
    }
}

/// Decodes a status API body. Total: every malformed or offline shape yields
/// [`ServerStatus::Offline`].
pub fn decode_status(body: &str) -> ServerStatus {
    let raw: StatusResponse = match serde_json::from_str(body) {
        Ok(raw) => raw,
        Err(_) => return ServerStatus::Offline,
    };

    if raw.online != Some(true) {
        return ServerStatus::Offline;
    }

    let players_section = raw.players.unwrap_or_default();
    let players = players_section
        .list
        .unwrap_or_default()
        .into_iter()
        .filter_map(summarize_player)
        .collect();

    let version_label = raw.version.and_then(|v| {
        pick_nonempty(v.name_clean).or_else(|| pick_nonempty(v.name))
    });

    let motd = raw.motd.and_then(|m| {
        let html = pick_nonempty(m.html);
        let clean = pick_nonempty(m.clean);
        if html.is_none() && clean.is_none() {
            None
        } else {
            Some(Motd { html, clean })
        }
    });

    ServerStatus::Online(ServerStatusSnapshot {
        player_count: players_section.online.unwrap_or(0),
        max_players: players_section.max.unwrap_or(0),
        version_label,
        players,
        motd,
    })
}

fn summarize_player(entry: PlayerEntry) -> Option<PlayerSummary> {
    let name = pick_nonempty(entry.name);
    let name_clean = pick_nonempty(entry.name_clean);
    let uuid = pick_nonempty(entry.uuid);

    let display_name = name_clean.or_else(|| name.clone())?;
    let avatar_key = uuid.or(name).unwrap_or_else(|| display_name.clone());
    Some(PlayerSummary {
        display_name,
        avatar_key,
    })
}

fn pick_nonempty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_snapshot(status: ServerStatus) -> ServerStatusSnapshot {
        match status {
            ServerStatus::Online(s) => s,
            ServerStatus::Offline => panic!("expected online status"),
        }
    }

    #[test]
    fn full_online_body_decodes() {
        let body = r#"{
            "online": true,
            "players": {
                "online": 3,
                "max": 60,
                "list": [
                    {"name": "Ann", "uuid": "aaaa-1111"},
                    {"name": "Bo", "name_clean": "Bo"},
                    {"name": "Cy"}
                ]
            },
            "version": {"name": "§aPaper 1.20.1", "name_clean": "1.20.1"},
            "motd": {"html": "<span>Welcome</span>", "clean": "Welcome"}
        }"#;

        let snap = online_snapshot(decode_status(body));
        assert_eq!(snap.player_count, 3);
        assert_eq!(snap.max_players, 60);
        assert_eq!(snap.version_label.as_deref(), Some("1.20.1"));
        assert_eq!(snap.players.len(), 3);
        // uuid wins over name as the avatar key.
        assert_eq!(snap.players[0].avatar_key, "aaaa-1111");
        assert_eq!(snap.players[1].avatar_key, "Bo");
        assert!(snap.motd.is_some());
    }

    #[test]
    fn offline_flag_yields_offline() {
        assert_eq!(decode_status(r#"{"online": false}"#), ServerStatus::Offline);
    }

    #[test]
    fn missing_online_field_yields_offline() {
        assert_eq!(decode_status(r#"{"players": {"online": 9}}"#), ServerStatus::Offline);
    }

    #[test]
    fn malformed_body_yields_offline() {
        assert_eq!(decode_status("<!DOCTYPE html><html>"), ServerStatus::Offline);
        assert_eq!(decode_status(""), ServerStatus::Offline);
    }

    #[test]
    fn absent_sections_degrade_to_defaults() {
        let snap = online_snapshot(decode_status(r#"{"online": true}"#));
        assert_eq!(snap.player_count, 0);
        assert_eq!(snap.max_players, 0);
        assert!(snap.version_label.is_none());
        assert!(snap.players.is_empty());
        assert!(snap.motd.is_none());
    }

    #[test]
    fn version_falls_back_to_raw_name() {
        let snap = online_snapshot(decode_status(
            r#"{"online": true, "version": {"name": "Paper 1.20.1", "name_clean": ""}}"#,
        ));
        assert_eq!(snap.version_label.as_deref(), Some("Paper 1.20.1"));
    }

    #[test]
    fn nameless_player_entries_are_skipped() {
        let snap = online_snapshot(decode_status(
            r#"{"online": true, "players": {"online": 2, "list": [{"uuid": "x"}, {"name": "Dee"}]}}"#,
        ));
        assert_eq!(snap.players.len(), 1);
        assert_eq!(snap.players[0].display_name, "Dee");
    }

    #[test]
    fn avatar_url_is_keyed_and_sized() {
        let p = PlayerSummary {
            display_name: "Ann".into(),
            avatar_key: "aaaa-1111".into(),
        };
        assert_eq!(p.avatar_url(), "https://mc-heads.net/avatar/aaaa-1111/40");
    }

    #[test]
    fn empty_motd_strings_count_as_absent() {
        let snap = online_snapshot(decode_status(
            r#"{"online": true, "motd": {"html": "", "clean": "  "}}"#,
        ));
        assert!(snap.motd.is_none());
    }
}
