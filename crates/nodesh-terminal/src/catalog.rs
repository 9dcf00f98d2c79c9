//! The node tree a session navigates.

use crate::command::{CommandEntry, ModuleCommand, find_module};

/// Root and configure command sets. Module nodes hang off either set as
/// [`CommandEntry::Branch`] entries, at any nesting level.
#[derive(Debug, Default)]
pub struct NodeCatalog {
    root: Vec<CommandEntry>,
    configure: Vec<CommandEntry>,
}

impl NodeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the root node.
    pub fn add_root(&mut self, entry: impl Into<CommandEntry>) {
        self.root.push(entry.into());
    }

    /// Append an entry to the configure node.
    pub fn add_configure(&mut self, entry: impl Into<CommandEntry>) {
        self.configure.push(entry.into());
    }

    pub fn root_set(&self) -> &[CommandEntry] {
        &self.root
    }

    pub fn configure_set(&self) -> &[CommandEntry] {
        &self.configure
    }

    /// The module named `name`, searched in the root tree then the configure tree.
    pub fn get_module_instance(&self, name: &str) -> Option<&ModuleCommand> {
        find_module(&self.root, name).or_else(|| find_module(&self.configure, name))
    }

    pub(crate) fn root_set_mut(&mut self) -> &mut Vec<CommandEntry> {
        &mut self.root
    }

    pub(crate) fn configure_set_mut(&mut self) -> &mut Vec<CommandEntry> {
        &mut self.configure
    }

    /// Visit every module in the tree, parents before children.
    pub(crate) fn for_each_module_mut(&mut self, f: &mut dyn FnMut(&mut ModuleCommand)) {
        fn walk(set: &mut [CommandEntry], f: &mut dyn FnMut(&mut ModuleCommand)) {
            for entry in set {
                if let CommandEntry::Branch(module) = entry {
                    f(module);
                    walk(module.command_set_mut(), f);
                }
            }
        }
        walk(&mut self.root, f);
        walk(&mut self.configure, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandOutput, CommandPattern, HandlerResult};

    fn noop(_: Option<&[String]>) -> HandlerResult {
        Ok(CommandOutput::None)
    }

    fn sample() -> NodeCatalog {
        let mut cat = NodeCatalog::new();
        cat.add_root(CommandPattern::new("show version", noop));
        cat.add_configure(CommandPattern::new("hostname", noop));
        cat.add_configure(
            ModuleCommand::new("router").with(ModuleCommand::new("network")),
        );
        cat
    }

    #[test]
    fn sets_keep_registration_order() {
        let cat = sample();
        assert_eq!(cat.root_set().len(), 1);
        assert_eq!(cat.configure_set()[0].completion_word(), "hostname");
        assert_eq!(cat.configure_set()[1].completion_word(), "router");
    }

    #[test]
    fn module_lookup_finds_nested_nodes() {
        let cat = sample();
        assert!(cat.get_module_instance("router").is_some());
        assert!(cat.get_module_instance("network").is_some());
        assert!(cat.get_module_instance("hostname").is_none());
    }

    #[test]
    fn visits_every_module() {
        let mut cat = sample();
        let mut seen = Vec::new();
        cat.for_each_module_mut(&mut |m| seen.push(m.node_name().to_string()));
        assert_eq!(seen, vec!["router", "network"]);
    }
}
