//! Navigation commands every node tree needs.

use nodesh_types::error::CommandError;

use crate::catalog::NodeCatalog;
use crate::command::{CommandOutput, CommandPattern, HandlerResult};

/// Register `configure terminal` and the `exit` commands into a catalog.
///
/// Call after every module has been added: each module, at any nesting level,
/// gets its own `exit`. Builtins go first in each set so that no branch entry
/// can hide them.
pub fn register_builtins(cat: &mut NodeCatalog) {
    let root = cat.root_set_mut();
    root.insert(0, configure_terminal_cmd().into());
    root.insert(1, root_exit_cmd().into());
    cat.configure_set_mut().insert(0, node_exit_cmd().into());
    cat.for_each_module_mut(&mut |module| module.push_front(node_exit_cmd()));
}

/// `configure terminal`: enter the configure node from the root.
fn configure_terminal_cmd() -> CommandPattern {
    CommandPattern::new("configure terminal", |args: Option<&[String]>| -> HandlerResult {
        match args {
            None => Ok(CommandOutput::EnterConfigure),
            Some(_) => Err(CommandError::Usage(
                "configure terminal takes no arguments".into(),
            )),
        }
    })
    .with_usage("configure terminal")
}

/// `exit` at the root ends the session.
fn root_exit_cmd() -> CommandPattern {
    CommandPattern::new("exit", |_: Option<&[String]>| Ok(CommandOutput::Terminate))
}

/// `exit` anywhere else returns to the parent node.
fn node_exit_cmd() -> CommandPattern {
    CommandPattern::new("exit", |_: Option<&[String]>| Ok(CommandOutput::LeaveNode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandEntry, ModuleCommand};

    fn noop(_: Option<&[String]>) -> HandlerResult {
        Ok(CommandOutput::None)
    }

    fn words(set: &[CommandEntry]) -> Vec<String> {
        set.iter().map(CommandEntry::completion_word).collect()
    }

    #[test]
    fn builtins_lead_each_set() {
        let mut cat = NodeCatalog::new();
        cat.add_root(CommandPattern::new("show version", noop));
        cat.add_configure(CommandPattern::new("hostname", noop));
        cat.add_configure(
            ModuleCommand::new("router")
                .with(CommandPattern::new("router-id", noop))
                .with(ModuleCommand::new("network").with(CommandPattern::new("area", noop))),
        );
        register_builtins(&mut cat);

        assert_eq!(
            words(cat.root_set()),
            vec!["configure terminal", "exit", "show version"]
        );
        assert_eq!(words(cat.configure_set()), vec!["exit", "hostname", "router"]);
        let router = cat.get_module_instance("router").unwrap();
        assert_eq!(words(router.command_set()), vec!["exit", "router-id", "network"]);
        let network = cat.get_module_instance("network").unwrap();
        assert_eq!(words(network.command_set()), vec!["exit", "area"]);
    }

    #[test]
    fn exit_outputs() {
        assert_eq!(root_exit_cmd().invoke(&[]), Ok(CommandOutput::Terminate));
        assert_eq!(node_exit_cmd().invoke(&[]), Ok(CommandOutput::LeaveNode));
    }

    #[test]
    fn configure_terminal_rejects_arguments() {
        let cmd = configure_terminal_cmd();
        assert_eq!(cmd.invoke(&[]), Ok(CommandOutput::EnterConfigure));
        assert!(cmd.invoke(&["now".to_string()]).is_err());
    }
}
