//! Command tree building blocks: leaf patterns, module branches, handlers.

use std::fmt;

use nodesh_types::error::CommandError;

/// What a handler produced.
///
/// Navigation variants are requests: the dispatcher applies them to the
/// session's navigation state after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Silent success.
    None,
    /// Text to show the user.
    Text(String),
    /// The handler completed but reports failure. Shown as `Fail`.
    Failure,
    /// End the session cleanly (exit code 0).
    Terminate,
    /// Enter the configure node.
    EnterConfigure,
    /// Leave the current node, returning to its parent.
    LeaveNode,
}

/// Result type every handler returns.
pub type HandlerResult = std::result::Result<CommandOutput, CommandError>;

/// Something that executes a matched command.
///
/// `args` is `None` when nothing follows the command's literal prefix,
/// otherwise the non-blank trailing tokens in input order.
pub trait Handler {
    fn execute(&self, args: Option<&[String]>) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(Option<&[String]>) -> HandlerResult,
{
    fn execute(&self, args: Option<&[String]>) -> HandlerResult {
        self(args)
    }
}

/// A literal multi-word prefix bound to a handler.
pub struct CommandPattern {
    words: Vec<String>,
    enabled: bool,
    handler: Box<dyn Handler>,
    usage: Option<String>,
}

impl CommandPattern {
    /// Create an enabled pattern from space-separated literal words.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` contains no words.
    pub fn new<F>(pattern: &str, handler: F) -> Self
    where
        F: Fn(Option<&[String]>) -> HandlerResult + 'static,
    {
        Self::with_handler(pattern, handler)
    }

    /// Like [`CommandPattern::new`], for any [`Handler`] implementation.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` contains no words.
    pub fn with_handler(pattern: &str, handler: impl Handler + 'static) -> Self {
        let words: Vec<String> = pattern.split_whitespace().map(str::to_string).collect();
        assert!(!words.is_empty(), "command pattern must not be empty");
        Self {
            words,
            enabled: true,
            handler: Box::new(handler),
            usage: None,
        }
    }

    /// Attach usage text shown when the handler reports a usage error.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = Some(usage.to_string());
        self
    }

    /// Mark the pattern as permanently unmatchable.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The literal prefix as typed (`"ip address"`).
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// Arguments following the prefix if `tokens` starts with this pattern.
    ///
    /// Blank tokens (from repeated spaces) are dropped. Returns `None` when
    /// the pattern is disabled, longer than the input, or differs in any word.
    pub fn match_tokens(&self, tokens: &[&str]) -> Option<Vec<String>> {
        if !self.enabled || self.words.len() > tokens.len() {
            return None;
        }
        let (prefix, rest) = tokens.split_at(self.words.len());
        if prefix.iter().zip(&self.words).any(|(t, w)| t != w) {
            return None;
        }
        Some(
            rest.iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Run the handler: no arguments maps to `None`.
    pub fn invoke(&self, args: &[String]) -> HandlerResult {
        if args.is_empty() {
            self.handler.execute(None)
        } else {
            self.handler.execute(Some(args))
        }
    }
}

impl fmt::Debug for CommandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandPattern")
            .field("words", &self.words)
            .field("enabled", &self.enabled)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// A named node wrapping its own command set.
#[derive(Debug)]
pub struct ModuleCommand {
    node_name: String,
    command_set: Vec<CommandEntry>,
}

impl ModuleCommand {
    pub fn new(node_name: &str) -> Self {
        Self {
            node_name: node_name.to_string(),
            command_set: Vec::new(),
        }
    }

    /// Append an entry (builder style).
    pub fn with(mut self, entry: impl Into<CommandEntry>) -> Self {
        self.command_set.push(entry.into());
        self
    }

    /// Insert an entry ahead of everything already registered.
    pub fn push_front(&mut self, entry: impl Into<CommandEntry>) {
        self.command_set.insert(0, entry.into());
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn command_set(&self) -> &[CommandEntry] {
        &self.command_set
    }

    pub(crate) fn command_set_mut(&mut self) -> &mut Vec<CommandEntry> {
        &mut self.command_set
    }
}

/// One entry of a command set: an executable leaf or a nested branch.
#[derive(Debug)]
pub enum CommandEntry {
    Leaf(CommandPattern),
    Branch(ModuleCommand),
}

impl CommandEntry {
    /// The word offered to the completer for this entry.
    pub fn completion_word(&self) -> String {
        match self {
            Self::Leaf(cmd) => cmd.text(),
            Self::Branch(module) => module.node_name.clone(),
        }
    }
}

impl From<CommandPattern> for CommandEntry {
    fn from(cmd: CommandPattern) -> Self {
        Self::Leaf(cmd)
    }
}

impl From<ModuleCommand> for CommandEntry {
    fn from(module: ModuleCommand) -> Self {
        Self::Branch(module)
    }
}

/// Find a module named `name` anywhere below `set`, depth first.
pub fn find_module<'a>(set: &'a [CommandEntry], name: &str) -> Option<&'a ModuleCommand> {
    set.iter().find_map(|entry| match entry {
        CommandEntry::Branch(module) if module.node_name == name => Some(module),
        CommandEntry::Branch(module) => find_module(&module.command_set, name),
        CommandEntry::Leaf(_) => None,
    })
}
