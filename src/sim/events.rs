//! Events produced by one `advance` call, in the order they happened

use serde::{Deserialize, Serialize};

use super::state::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Apple or gold apple landed in the basket
    Caught {
        kind: ItemKind,
        points: u32,
        x: f32,
        y: f32,
    },
    /// Bomb caught
    Hit { x: f32, y: f32 },
    /// Heart caught
    Healed { lives: u8, x: f32, y: f32 },
    /// Fruit hit the ground
    Missed { kind: ItemKind, x: f32 },
    LevelUp { level: u32 },
    /// Score passed the previous best; the new best should be saved
    NewHighScore { value: u64 },
    /// Last life lost
    GameOver { score: u64, high_score: u64 },
}

impl GameEvent {
    /// Whether the high score store should be written after this event
    pub fn requests_save(&self) -> bool {
        matches!(
            self,
            GameEvent::NewHighScore { .. } | GameEvent::GameOver { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let event = GameEvent::Caught {
            kind: ItemKind::Bonus,
            points: 5,
            x: 10.0,
            y: 20.0,
        };
        let json = serde_json::to_value(event).expect("serializable");
        assert_eq!(json["type"], "caught");
        assert_eq!(json["kind"], "bonus");
        assert_eq!(json["points"], 5);
    }

    #[test]
    fn test_save_requests() {
        assert!(GameEvent::NewHighScore { value: 3 }.requests_save());
        assert!(
            GameEvent::GameOver {
                score: 1,
                high_score: 3
            }
            .requests_save()
        );
        assert!(!GameEvent::LevelUp { level: 2 }.requests_save());
    }
}
