use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by containers and items (e.g., `"container1"`, `7`)
///
/// Ids are unique across the whole board, so a single lookup resolves either
/// a container or an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Self::Num(i64::from(value))
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Per-item flags carried alongside the id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    /// `1` marks a placeholder slot, `0` a normal item
    #[serde(rename = "isSpace")]
    pub is_space: u8,
}

/// A single entry in a container's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    #[serde(default)]
    pub data: ItemData,
}

impl Item {
    /// Creates a normal, draggable item
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            data: ItemData { is_space: 0 },
        }
    }

    /// Creates a placeholder item that holds a slot but cannot be picked up
    pub fn placeholder(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            data: ItemData { is_space: 1 },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.is_space == 1
    }

    /// Placeholders can be displaced by other items but never become the drag subject
    pub fn is_draggable(&self) -> bool {
        !self.is_placeholder()
    }
}
