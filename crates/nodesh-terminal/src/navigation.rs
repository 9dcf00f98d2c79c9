//! Where the session currently is in the node tree.

/// Name of the root node.
pub const ROOT_NODE: &str = "root";

/// Name of the configure node.
pub const CONFIGURE_NODE: &str = "configure";

/// Depth of the root node.
pub const ROOT_DEPTH: usize = 0;

/// Depth of the configure node. Anything deeper is a module node.
pub const CONFIGURE_DEPTH: usize = 1;

/// Which command set a depth selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Root,
    Configure,
    Module,
}

/// Stack of entered nodes; the last one is the current node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    path: Vec<String>,
}

impl NavigationState {
    /// A state positioned at the root node.
    pub fn new() -> Self {
        Self {
            path: vec![ROOT_NODE.to_string()],
        }
    }

    pub fn current_node(&self) -> &str {
        // `path` always holds at least the root.
        self.path.last().map_or(ROOT_NODE, String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    pub fn tier(&self) -> Tier {
        match self.depth() {
            ROOT_DEPTH => Tier::Root,
            CONFIGURE_DEPTH => Tier::Configure,
            _ => Tier::Module,
        }
    }

    /// Enter `node`: depth grows by one and `node` becomes current.
    pub(crate) fn enter(&mut self, node: &str) {
        self.path.push(node.to_string());
        log::debug!("entered node '{node}' (depth {})", self.depth());
    }

    /// Return to the parent node. Returns `false` at the root.
    pub(crate) fn leave(&mut self) -> bool {
        if self.path.len() <= 1 {
            return false;
        }
        let left = self.path.pop();
        log::debug!(
            "left node '{}' (depth {})",
            left.unwrap_or_default(),
            self.depth()
        );
        true
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
