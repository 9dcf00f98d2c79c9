//! Replaying a running configuration as typed input.
//!
//! Each node block becomes the same lines a user would type: enter the
//! configure node, enter the block's node, issue its commands, `exit`.
//! Nothing here bypasses [`Shell::submit`], so replayed lines get the same
//! navigation and error reporting as interactive ones.

use nodesh_types::error::Result;
use nodesh_types::running_config::{CommandMap, ConfArg, NodeBlock};

use crate::shell::{Shell, ShellOutcome};
use crate::sink::MessageSink;

/// Line that enters the configure node before replay.
pub const ENTER_CONFIGURE_LINE: &str = "configure terminal";

/// Line that leaves a node.
pub const EXIT_LINE: &str = "exit";

impl Shell {
    /// Replay `conf` through [`Shell::submit`].
    ///
    /// Stops early and returns [`ShellOutcome::Terminate`] if a replayed
    /// command ends the session.
    pub fn load_configuration(
        &mut self,
        conf: &[NodeBlock],
        out: &mut dyn MessageSink,
    ) -> Result<ShellOutcome> {
        let lines = replay_lines(conf);
        log::info!(
            "replaying {} node block(s) as {} line(s)",
            conf.len(),
            lines.len()
        );
        for line in &lines {
            log::debug!("replay: {line}");
            if self.submit(line, out)? == ShellOutcome::Terminate {
                log::info!("replay stopped: session terminated by '{line}'");
                return Ok(ShellOutcome::Terminate);
            }
        }
        Ok(ShellOutcome::Continue)
    }
}

/// Lines a running configuration expands to, in submission order.
pub fn replay_lines(conf: &[NodeBlock]) -> Vec<String> {
    let mut lines = vec![ENTER_CONFIGURE_LINE.to_string()];
    for block in conf {
        lines.push(block.node.clone());
        expand_commands(&block.commands, &mut lines);
        lines.push(EXIT_LINE.to_string());
    }
    lines.push(EXIT_LINE.to_string());
    lines
}

/// A first argument that is itself a map makes `name` a sub-node.
fn expand_commands(commands: &CommandMap, lines: &mut Vec<String>) {
    for (name, args) in commands {
        match args.first().and_then(ConfArg::as_node) {
            Some(nested) => {
                lines.push(name.clone());
                expand_commands(nested, lines);
                lines.push(EXIT_LINE.to_string());
            },
            None => lines.push(command_line(name, args)),
        }
    }
}

/// `"<name> <arg> <arg>..."`, or just the name when there are no arguments.
/// `null` arguments are left out.
fn command_line(name: &str, args: &[ConfArg]) -> String {
    let mut line = name.to_string();
    for arg in args.iter().filter(|a| !a.is_null()) {
        line.push(' ');
        line.push_str(&arg.to_string());
    }
    line
}
