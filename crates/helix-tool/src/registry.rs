//! Command factory registration.
//!
//! Models the host's plugin registration point without process-wide state:
//! the host holds a registry instance, plugins register a name plus a
//! factory, and the host constructs a fresh command per invocation.

use std::collections::HashMap;

use crate::command::HelixTool;

/// Factory producing a fresh command instance.
pub type ToolCreator = fn() -> HelixTool;

/// Name-to-factory table for tool commands.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    creators: HashMap<&'static str, ToolCreator>,
}

impl ToolRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a command name. Re-registering a name
    /// replaces the previous factory.
    pub fn register(&mut self, name: &'static str, creator: ToolCreator) {
        self.creators.insert(name, creator);
        log::debug!("registered tool command {name}");
    }

    /// Remove a command. Returns whether it was registered.
    pub fn deregister(&mut self, name: &str) -> bool {
        self.creators.remove(name).is_some()
    }

    /// Construct a fresh command instance by name.
    pub fn create(&self, name: &str) -> Option<HelixTool> {
        self.creators.get(name).map(|creator| creator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandState, COMMAND_NAME};

    #[test]
    fn test_register_and_create() {
        let mut registry = ToolRegistry::new();
        registry.register(COMMAND_NAME, HelixTool::creator);

        let tool = registry.create(COMMAND_NAME).expect("command registered");
        assert_eq!(tool.state(), CommandState::Fresh);
        assert!(registry.create("unknownCmd").is_none());
    }

    #[test]
    fn test_each_create_is_a_fresh_instance() {
        let mut registry = ToolRegistry::new();
        registry.register(COMMAND_NAME, HelixTool::creator);

        let mut scene = helix_scene::Scene::new();
        let mut first = registry.create(COMMAND_NAME).unwrap();
        first.execute(&mut scene).unwrap();

        let second = registry.create(COMMAND_NAME).unwrap();
        assert_eq!(second.state(), CommandState::Fresh);
    }

    #[test]
    fn test_deregister() {
        let mut registry = ToolRegistry::new();
        registry.register(COMMAND_NAME, HelixTool::creator);
        assert!(registry.deregister(COMMAND_NAME));
        assert!(!registry.deregister(COMMAND_NAME));
        assert!(registry.create(COMMAND_NAME).is_none());
    }
}
