//! Command-tree engine for nodesh.
//!
//! The shell is a tree of nodes. Each node owns an ordered command set of
//! literal-prefix commands ([`CommandPattern`]) and nested modules
//! ([`ModuleCommand`]). A [`Shell`] session tracks the current node, moves
//! between nodes, and dispatches every other line to the first command whose
//! words prefix it. Running configurations replay through the same path.

mod builtins;
mod catalog;
mod command;
mod completion;
mod navigation;
mod prompt;
mod replay;
mod shell;
mod sink;

/// Register `configure terminal` and the `exit` commands into a catalog.
pub use builtins::register_builtins;
/// Root and configure command sets plus module lookup.
pub use catalog::NodeCatalog;
/// Command tree entries and the handler contract.
pub use command::{
    CommandEntry, CommandOutput, CommandPattern, Handler, HandlerResult, ModuleCommand,
};
/// Prefix queries over the current node's candidate words.
pub use completion::Completer;
/// Current node and depth.
pub use navigation::{
    CONFIGURE_DEPTH, CONFIGURE_NODE, NavigationState, ROOT_DEPTH, ROOT_NODE, Tier,
};
/// Prompt text for the current node.
pub use prompt::prompt;
/// Expansion of a running configuration into input lines.
pub use replay::replay_lines;
/// A session over a node tree.
pub use shell::{DEFAULT_USAGE_MESSAGE, FAIL_MESSAGE, Shell, ShellOutcome};
/// Output channels.
pub use sink::{CompletionSink, MessageSink, StdoutSink};
