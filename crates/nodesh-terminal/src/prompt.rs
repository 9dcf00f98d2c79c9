//! Prompt text for the current node.

use crate::navigation::{NavigationState, Tier};

/// `host>` at the root, `host(config)#` in configure, `host(config-<node>)#`
/// in a module.
pub fn prompt(hostname: &str, nav: &NavigationState) -> String {
    match nav.tier() {
        Tier::Root => format!("{hostname}> "),
        Tier::Configure => format!("{hostname}(config)# "),
        Tier::Module => format!("{hostname}(config-{})# ", nav.current_node()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::CONFIGURE_NODE;

    #[test]
    fn prompt_per_tier() {
        let mut nav = NavigationState::new();
        assert_eq!(prompt("edge", &nav), "edge> ");
        nav.enter(CONFIGURE_NODE);
        assert_eq!(prompt("edge", &nav), "edge(config)# ");
        nav.enter("interface");
        assert_eq!(prompt("edge", &nav), "edge(config-interface)# ");
    }
}
