use serde::{Deserialize, Serialize};
use std::fmt;

pub const API_VERSION: &str = "1";

/// Position of a board cell, zero-indexed.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }
}

impl From<(u8, u8)> for Square {
    fn from(val: (u8, u8)) -> Self {
        Square::new(val.0, val.1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A placement of `value` into the empty cell at `square`.
///
/// This is both the wire format towards the host and the unit the search
/// tree branches over. Taboo entries use the same type.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub square: Square,
    pub value: u8,
}

impl Move {
    pub fn new(square: Square, value: u8) -> Move {
        Move { square, value }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.square, self.value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GameData {
    pub id: String,
    /// Time budget per turn in milliseconds.
    #[serde(default)]
    pub timeout: u64,
}

/// Raw board as sent by the host.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardData {
    pub region_height: usize,
    pub region_width: usize,
    /// Row-major cell values, 0 for empty.
    pub cells: Vec<u8>,
}

/// Everything the host knows about the current turn.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TurnRequest {
    pub game: GameData,
    pub board: BoardData,
    /// Placements forbidden by the host regardless of the uniqueness rules.
    #[serde(default)]
    pub taboo: Vec<Move>,
    /// Moves played so far, oldest first.
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub scores: [i32; 2],
    /// Index of the player to move (0 or 1).
    #[serde(default)]
    pub you: u8,
    /// Per-player square restrictions; `None` means the whole board.
    #[serde(default)]
    pub allowed: [Option<Vec<Square>>; 2],
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl IndexResponse {
    pub fn new(apiversion: &'static str, author: &'static str, version: &'static str) -> IndexResponse {
        IndexResponse {
            apiversion,
            author,
            version,
        }
    }
}

/// The proposed placement for one turn. A turn without a legal placement is
/// answered with JSON `null` instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResponse {
    pub square: Square,
    pub value: u8,
}

impl From<Move> for MoveResponse {
    fn from(mv: Move) -> MoveResponse {
        MoveResponse {
            square: mv.square,
            value: mv.value,
        }
    }
}

impl From<MoveResponse> for Move {
    fn from(response: MoveResponse) -> Move {
        Move::new(response.square, response.value)
    }
}
