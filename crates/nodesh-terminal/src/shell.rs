//! Session state and line dispatch.
//!
//! A [`Shell`] owns the node tree and the navigation state of one session.
//! Every line goes through [`Shell::submit`]: a line naming a module moves
//! into that node, anything else is prefix-matched against the active
//! command set and handed to the matching handler.

use nodesh_types::error::{CommandError, Result, ShellError};

use crate::catalog::NodeCatalog;
use crate::command::{CommandEntry, CommandOutput, CommandPattern};
use crate::navigation::{CONFIGURE_NODE, NavigationState, Tier};
use crate::sink::MessageSink;

/// Shown when a handler reports a usage error but declared no usage text.
pub const DEFAULT_USAGE_MESSAGE: &str = "The usage is wrong.";

/// Shown for unclassified errors and failure returns.
pub const FAIL_MESSAGE: &str = "Fail";

/// What the session loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Wait for the next line.
    Continue,
    /// A handler asked to end the session. Exit with code 0.
    Terminate,
}

/// One interactive session over a node tree.
pub struct Shell {
    catalog: NodeCatalog,
    nav: NavigationState,
    debug: bool,
}

impl Shell {
    /// Start a session at the root of `catalog`.
    pub fn new(catalog: NodeCatalog) -> Self {
        Self {
            catalog,
            nav: NavigationState::new(),
            debug: false,
        }
    }

    /// Also print underlying error details for usage and unclassified failures.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    /// The command set of the current node.
    ///
    /// Fails only if the navigation state names a module missing from the
    /// tree, which means the bookkeeping is broken.
    pub fn resolve_active_set(&self) -> Result<&[CommandEntry]> {
        match self.nav.tier() {
            Tier::Root => Ok(self.catalog.root_set()),
            Tier::Configure => Ok(self.catalog.configure_set()),
            Tier::Module => {
                let node = self.nav.current_node();
                match self.catalog.get_module_instance(node) {
                    Some(module) => Ok(module.command_set()),
                    None => {
                        log::error!("navigation state points at unknown node '{node}'");
                        Err(ShellError::NodeResolution(node.to_string()))
                    },
                }
            },
        }
    }

    /// Process one line of input.
    pub fn submit(&mut self, line: &str, out: &mut dyn MessageSink) -> Result<ShellOutcome> {
        if self.nav.current_node() != line && self.catalog.get_module_instance(line).is_some() {
            self.nav.enter(line);
            return Ok(ShellOutcome::Continue);
        }

        let tokens: Vec<&str> = line.split(' ').collect();
        let set = self.resolve_active_set()?;
        let Some(output) = self.check_command_set(&tokens, set, out) else {
            log::debug!("no command matched '{line}' at '{}'", self.nav.current_node());
            out.print_message(&format!("This command(\"{line}\") is not supported."));
            return Ok(ShellOutcome::Continue);
        };

        Ok(self.apply(output, out))
    }

    /// Walk `set` in order and run the first matching pattern.
    ///
    /// A branch entry hands the whole search to its children and its answer
    /// is final: entries after the branch are not examined. Returns `None`
    /// if nothing matched. Handler errors are reported here and come back as
    /// [`CommandOutput::None`].
    fn check_command_set(
        &self,
        tokens: &[&str],
        set: &[CommandEntry],
        out: &mut dyn MessageSink,
    ) -> Option<CommandOutput> {
        for entry in set {
            match entry {
                CommandEntry::Branch(module) => {
                    return self.check_command_set(tokens, module.command_set(), out);
                },
                CommandEntry::Leaf(cmd) => {
                    if let Some(args) = cmd.match_tokens(tokens) {
                        return Some(self.invoke(cmd, &args, out));
                    }
                },
            }
        }
        None
    }

    fn invoke(
        &self,
        cmd: &CommandPattern,
        args: &[String],
        out: &mut dyn MessageSink,
    ) -> CommandOutput {
        log::debug!("dispatching '{}' with {} arg(s)", cmd.text(), args.len());
        match cmd.invoke(args) {
            Ok(output) => output,
            Err(err) => {
                log::warn!("'{}' failed: {err}", cmd.text());
                self.report(cmd, &err, out);
                CommandOutput::None
            },
        }
    }

    fn report(&self, cmd: &CommandPattern, err: &CommandError, out: &mut dyn MessageSink) {
        match err {
            CommandError::Usage(detail) => {
                out.print_message(cmd.usage().unwrap_or(DEFAULT_USAGE_MESSAGE));
                if self.debug {
                    out.print_message(detail);
                }
            },
            CommandError::Validation(detail) => out.print_message(detail),
            CommandError::Unclassified(detail) => {
                out.print_message(FAIL_MESSAGE);
                if self.debug {
                    out.print_message(detail);
                }
            },
        }
    }

    /// Turn a handler's output into messages and navigation moves.
    fn apply(&mut self, output: CommandOutput, out: &mut dyn MessageSink) -> ShellOutcome {
        match output {
            CommandOutput::None => {},
            CommandOutput::Text(text) => out.print_message(&text),
            CommandOutput::Failure => out.print_message(FAIL_MESSAGE),
            CommandOutput::Terminate => return ShellOutcome::Terminate,
            CommandOutput::EnterConfigure => self.nav.enter(CONFIGURE_NODE),
            CommandOutput::LeaveNode => {
                if !self.nav.leave() {
                    log::debug!("leave requested at the root node; ignored");
                }
            },
        }
        ShellOutcome::Continue
    }

    #[cfg(test)]
    pub(crate) fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.nav
    }
}
