use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::error::GameError;

/// Who decides the moves for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Human,
    RandomAgent,
    OptimalAgent,
}

impl AgentKind {
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Human => "human",
            AgentKind::RandomAgent => "random",
            AgentKind::OptimalAgent => "optimal",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for AgentKind {
    type Err = GameError;

    // Numbers follow the setup menu: 1 human, 2 weak computer, 3 strong computer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "human" => Ok(AgentKind::Human),
            "2" | "random" | "weak" => Ok(AgentKind::RandomAgent),
            "3" | "optimal" | "strong" | "minimax" => Ok(AgentKind::OptimalAgent),
            other => Err(GameError::Parse(format!("unknown agent '{other}': use human, random or optimal"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub name: String,
    pub kind: AgentKind,
}

impl Player {
    pub fn new(side: Side, kind: AgentKind) -> Self {
        Self { side, name: side.marker().to_string(), kind }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_menu_numbers() {
        assert_eq!("Human".parse::<AgentKind>().unwrap(), AgentKind::Human);
        assert_eq!("2".parse::<AgentKind>().unwrap(), AgentKind::RandomAgent);
        assert_eq!(" strong ".parse::<AgentKind>().unwrap(), AgentKind::OptimalAgent);
        assert!(matches!("4".parse::<AgentKind>(), Err(GameError::Parse(_))));
    }

    #[test]
    fn player_defaults_to_side_marker() {
        let p = Player::new(Side::O, AgentKind::RandomAgent);
        assert_eq!(p.name, "O");
        assert_eq!(p.with_name("Bot").name, "Bot");
    }
}
