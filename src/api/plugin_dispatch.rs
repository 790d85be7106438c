use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PluginEvent, SchedulerEngine};

impl<R: Renderer> SchedulerEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.core.model.viewport,
            display_date: self.core.model.display_date,
            zoom_level: self.core.model.zoom.level(),
            status_filter: self.core.model.status_filter,
            visible_len: self.core.model.layout.len(),
            drag_phase: self.core.model.drag.phase(),
            is_updating: self.core.runtime.is_updating,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }
}
