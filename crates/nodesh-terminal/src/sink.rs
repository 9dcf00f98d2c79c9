//! Output channels the engine writes to.

/// Receives every user-facing diagnostic.
pub trait MessageSink {
    fn print_message(&mut self, text: &str);
}

/// Collects messages in memory (used by tests and batch callers).
impl MessageSink for Vec<String> {
    fn print_message(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Writes each message on its own line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn print_message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Receives the candidate words visible at the current node.
pub trait CompletionSink {
    fn init_command_set(&mut self, words: Vec<String>);
}

impl CompletionSink for Vec<String> {
    fn init_command_set(&mut self, words: Vec<String>) {
        *self = words;
    }
}
