use crate::error::{PcpError, PcpResult};
use crate::extensions::PcpPlugin;
use crate::render::Renderer;

use super::PcpEngine;

impl<R: Renderer> PcpEngine<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn PcpPlugin>) -> PcpResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(PcpError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(PcpError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let plugins = &mut self.core.runtime.plugins;
        match plugins.iter().position(|entry| entry.id() == plugin_id) {
            Some(position) => {
                plugins.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
