use tracing::debug;

use crate::error::{SchedulerError, SchedulerResult};
use crate::extensions::SchedulerPlugin;
use crate::render::Renderer;

use super::SchedulerEngine;

impl<R: Renderer> SchedulerEngine<R> {
    /// Registers an observer plugin under its unique, non-empty id.
    ///
    /// Plugins see every engine event in registration order; registration
    /// itself emits nothing.
    pub fn register_plugin(&mut self, plugin: Box<dyn SchedulerPlugin>) -> SchedulerResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(SchedulerError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(SchedulerError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }

        debug!(plugin_id, "plugin registered");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when one was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.core.runtime.plugins.len();
        self.core
            .runtime
            .plugins
            .retain(|entry| entry.id() != plugin_id);
        let removed = self.core.runtime.plugins.len() < before;
        if removed {
            debug!(plugin_id, "plugin unregistered");
        }
        removed
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
