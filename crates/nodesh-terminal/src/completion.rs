//! Candidate words for the current node.

use nodesh_types::error::Result;

use crate::shell::Shell;
use crate::sink::CompletionSink;

impl Shell {
    /// Words visible at the current node: module names for branches, the
    /// literal text for commands, in set order.
    pub fn completion_words(&self) -> Result<Vec<String>> {
        Ok(self
            .resolve_active_set()?
            .iter()
            .map(|entry| entry.completion_word())
            .collect())
    }

    /// Hand the current node's words to `sink`.
    pub fn refresh_completions(&self, sink: &mut dyn CompletionSink) -> Result<()> {
        sink.init_command_set(self.completion_words()?);
        Ok(())
    }
}

/// Holds the latest candidate list and answers prefix queries.
#[derive(Debug, Default, Clone)]
pub struct Completer {
    words: Vec<String>,
}

impl Completer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates starting with `partial`, in registration order.
    pub fn complete(&self, partial: &str) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.starts_with(partial))
            .map(String::as_str)
            .collect()
    }
}

impl CompletionSink for Completer {
    fn init_command_set(&mut self, words: Vec<String>) {
        self.words = words;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use crate::catalog::NodeCatalog;
    use crate::command::{CommandOutput, CommandPattern, HandlerResult, ModuleCommand};

    fn noop(_: Option<&[String]>) -> HandlerResult {
        Ok(CommandOutput::None)
    }

    fn shell() -> Shell {
        let mut cat = NodeCatalog::new();
        cat.add_root(CommandPattern::new("show version", noop));
        cat.add_root(CommandPattern::new("show clock", noop));
        cat.add_configure(CommandPattern::new("hostname", noop));
        cat.add_configure(ModuleCommand::new("interface").with(CommandPattern::new("ip address", noop)));
        register_builtins(&mut cat);
        Shell::new(cat)
    }

    #[test]
    fn root_words() {
        let sh = shell();
        let mut words: Vec<String> = Vec::new();
        sh.refresh_completions(&mut words).unwrap();
        assert_eq!(
            words,
            vec!["configure terminal", "exit", "show version", "show clock"]
        );
    }

    #[test]
    fn words_follow_navigation() {
        let mut sh = shell();
        let mut out: Vec<String> = Vec::new();
        sh.submit("configure terminal", &mut out).unwrap();
        assert_eq!(sh.completion_words().unwrap(), vec!["exit", "hostname", "interface"]);
        sh.submit("interface", &mut out).unwrap();
        assert_eq!(sh.completion_words().unwrap(), vec!["exit", "ip address"]);
    }

    #[test]
    fn completer_filters_by_prefix() {
        let sh = shell();
        let mut completer = Completer::new();
        sh.refresh_completions(&mut completer).unwrap();
        assert_eq!(completer.complete("show"), vec!["show version", "show clock"]);
        assert_eq!(completer.complete("show c"), vec!["show clock"]);
        assert_eq!(completer.complete("").len(), 4);
        assert!(completer.complete("reload").is_empty());
    }
}
