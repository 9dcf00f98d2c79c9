//! Running-configuration format.
//!
//! A running configuration is a JSON array of node blocks:
//!
//! ```json
//! [
//!   { "node": "interface",
//!     "commands": {
//!       "ip address": ["10.0.0.1", "255.255.255.0"],
//!       "vlan": [{ "tagging": ["802.1q"] }]
//!     } }
//! ]
//! ```
//!
//! Command order inside `commands` is significant and preserved. An argument
//! list whose first element is an object denotes a sub-node: the key is the
//! sub-node name and the object is its own command map.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Number;

use crate::error::Result;

/// Ordered mapping from command name to its arguments.
pub type CommandMap = IndexMap<String, Vec<ConfArg>>;

/// One top-level node and the commands replayed inside it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeBlock {
    pub node: String,
    #[serde(default)]
    pub commands: CommandMap,
}

/// A single element of a command's argument list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfArg {
    /// Nested command map (only meaningful as the first element).
    Node(CommandMap),
    Text(String),
    /// Kept as written so replay reproduces `1.0` or a full `u64` exactly.
    Number(Number),
    Flag(bool),
    /// `null`: an absent argument, skipped on replay.
    Null,
}

impl ConfArg {
    /// The nested command map, if this argument denotes a sub-node.
    pub fn as_node(&self) -> Option<&CommandMap> {
        match self {
            Self::Node(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ConfArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                write!(f, "{{{}}}", keys.join(", "))
            },
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

/// Parse a running configuration from JSON text.
pub fn parse_running_config(text: &str) -> Result<Vec<NodeBlock>> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a running configuration file.
pub fn load_running_config(path: &Path) -> Result<Vec<NodeBlock>> {
    let text = std::fs::read_to_string(path)?;
    let blocks = parse_running_config(&text)?;
    log::info!(
        "Loaded {} node block(s) from {}",
        blocks.len(),
        path.display()
    );
    Ok(blocks)
}
