//! Zones and game configuration.
//!
//! - `Zone`: Where a card can be (library, hand, battlefield, ...)
//! - `GameConfig`: Startup options for a game (players, life, seed)

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// A game zone.
///
/// Per-player zones (library, hand, graveyard) are keyed by the card's owner
/// in the `ZoneManager`; the battlefield, exile, stack and command zone are shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Library,
    Hand,
    Battlefield,
    Graveyard,
    Exile,
    Stack,
    Command,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Library,
        Zone::Hand,
        Zone::Battlefield,
        Zone::Graveyard,
        Zone::Exile,
        Zone::Stack,
        Zone::Command,
    ];

    /// Is this zone owned per player?
    #[must_use]
    pub const fn is_per_player(self) -> bool {
        matches!(self, Zone::Library | Zone::Hand | Zone::Graveyard)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Library => "library",
            Zone::Hand => "hand",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
            Zone::Exile => "exile",
            Zone::Stack => "stack",
            Zone::Command => "command",
        };
        f.write_str(name)
    }
}

/// Complete game configuration.
///
/// ```
/// use ccg_rules::core::GameConfig;
///
/// let config = GameConfig::new(4).with_starting_life(40).with_seed(7);
/// assert_eq!(config.player_count, 4);
/// assert!(config.auto_pass_priority);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Life total each player starts with.
    pub starting_life: i32,

    /// Seed for the game RNG.
    pub seed: u64,

    /// Pass priority for every player automatically when the stack is run.
    pub auto_pass_priority: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            starting_life: 20,
            seed: 0,
            auto_pass_priority: true,
        }
    }
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.player_count == 0 || self.player_count > 255 {
            return Err(EngineError::InvalidConfig(format!(
                "player_count must be 1-255, got {}",
                self.player_count
            )));
        }
        if self.starting_life <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "starting_life must be positive, got {}",
                self.starting_life
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_auto_pass(mut self, auto_pass: bool) -> Self {
        self.auto_pass_priority = auto_pass;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_properties() {
        assert!(Zone::Graveyard.is_per_player());
        assert!(!Zone::Exile.is_per_player());
        assert_eq!(Zone::Exile.to_string(), "exile");
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(3)
            .with_starting_life(30)
            .with_seed(99)
            .with_auto_pass(false);

        assert_eq!(config.player_count, 3);
        assert_eq!(config.starting_life, 30);
        assert_eq!(config.seed, 99);
        assert!(!config.auto_pass_priority);
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = GameConfig::from_json(r#"{"player_count": 4}"#).unwrap();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.starting_life, 20);
        assert!(config.auto_pass_priority);
    }

    #[test]
    fn test_config_from_json_invalid() {
        let err = GameConfig::from_json(r#"{"player_count": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_game_config_zero_players() {
        GameConfig::new(0);
    }
}
