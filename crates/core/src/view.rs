//! Snapshot → renderable view-state mapping.
//!
//! `StatusView` carries exactly what the components display, pre-derived so
//! the render layer never inspects a snapshot itself. The mapping is
//! deterministic and idempotent: deriving the same snapshot twice yields the
//! same view, and rendering it twice leaves the page identical.

use crate::status::{ServerStatus, ServerStatusSnapshot};

/// Shown in the player list when the list is empty or hidden by the server.
pub const NO_PLAYERS_PLACEHOLDER: &str = "No players visible or list hidden.";

const ONLINE_COLOR: &str = "#4cd137";
const OFFLINE_COLOR: &str = "#e84118";

/// Everything the status widgets render for one poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub online: bool,
    pub dot_class: &'static str,
    pub status_text: &'static str,
    pub status_color: &'static str,
    pub player_count_text: String,
    /// Mini-status line in the hero section.
    pub hero_text: String,
    pub version_text: Option<String>,
    /// Pre-sanitized markup for the MOTD block, `None` when hidden.
    pub motd_markup: Option<String>,
    pub players: Vec<PlayerView>,
}

/// One avatar image in the player list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub src: String,
    pub label: String,
}

impl StatusView {
    pub fn from_status(status: &ServerStatus) -> Self {
        match status {
            ServerStatus::Online(snapshot) => Self::from_snapshot(snapshot),
            ServerStatus::Offline => Self::offline(),
        }
    }

    fn from_snapshot(snapshot: &ServerStatusSnapshot) -> Self {
        let players = snapshot
            .players
            .iter()
            .map(|p| PlayerView {
                src: p.avatar_url(),
                label: p.display_name.clone(),
            })
            .collect();

        Self {
            online: true,
            dot_class: "pulse-dot online",
            status_text: "Online",
            status_color: ONLINE_COLOR,
            player_count_text: snapshot.player_count.to_string(),
            hero_text: format!("{} Players Online", snapshot.player_count),
            version_text: snapshot.version_label.as_ref().map(|v| format!("Version: {v}")),
            motd_markup: snapshot.motd.as_ref().and_then(|m| m.render()),
            players,
        }
    }

    /// The placeholder every failure path converges on: network rejection,
    /// malformed body, or the server reporting itself offline.
    pub fn offline() -> Self {
        Self {
            online: false,
            dot_class: "pulse-dot offline",
            status_text: "Offline",
            status_color: OFFLINE_COLOR,
            player_count_text: "0".to_string(),
            hero_text: "Server Offline".to_string(),
            version_text: None,
            motd_markup: None,
            players: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::decode_status;

    #[test]
    fn online_body_with_three_players() {
        let status = decode_status(
            r#"{
                "online": true,
                "players": {"online": 3, "list": [{"name": "Ann"}, {"name": "Bo"}, {"name": "Cy"}]},
                "version": {"name_clean": "1.20.1"}
            }"#,
        );
        let view = StatusView::from_status(&status);

        assert!(view.online);
        assert_eq!(view.player_count_text, "3");
        assert_eq!(view.version_text.as_deref(), Some("Version: 1.20.1"));
        assert_eq!(view.players.len(), 3);
        assert_eq!(view.players[0].src, "https://mc-heads.net/avatar/Ann/40");
        assert_eq!(view.players[2].label, "Cy");
        assert_eq!(view.hero_text, "3 Players Online");
    }

    #[test]
    fn avatar_count_matches_listed_players() {
        for n in [0usize, 1, 5, 12] {
            let list: Vec<String> = (0..n).map(|i| format!("{{\"name\": \"p{i}\"}}")).collect();
            let body = format!(
                "{{\"online\": true, \"players\": {{\"online\": {n}, \"list\": [{}]}}}}",
                list.join(",")
            );
            let view = StatusView::from_status(&decode_status(&body));
            assert_eq!(view.players.len(), n);
        }
    }

    #[test]
    fn empty_player_list_means_placeholder() {
        let view = StatusView::from_status(&decode_status(r#"{"online": true}"#));
        // The renderer swaps in NO_PLAYERS_PLACEHOLDER whenever this is empty.
        assert!(view.players.is_empty());
        assert!(view.online);
    }

    #[test]
    fn offline_view_resets_everything() {
        let view = StatusView::offline();
        assert_eq!(view.player_count_text, "0");
        assert_eq!(view.hero_text, "Server Offline");
        assert_eq!(view.dot_class, "pulse-dot offline");
        assert!(view.version_text.is_none());
        assert!(view.motd_markup.is_none());
        assert!(view.players.is_empty());
    }

    #[test]
    fn derivation_is_idempotent() {
        let status = decode_status(
            r#"{"online": true, "players": {"online": 1, "list": [{"name": "Ann"}]}, "motd": {"clean": "hi\nthere"}}"#,
        );
        assert_eq!(StatusView::from_status(&status), StatusView::from_status(&status));
    }

    #[test]
    fn motd_markup_reaches_the_view_sanitized() {
        let status = decode_status(
            r#"{"online": true, "motd": {"html": "<span style=\"color: gold\">Hi</span><script>x</script>"}}"#,
        );
        let view = StatusView::from_status(&status);
        assert_eq!(view.motd_markup.as_deref(), Some("<span style=\"color: gold\">Hi</span>"));
    }
}
