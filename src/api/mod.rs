mod behavior;
mod data_controller;
mod drag_coordinator;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod feedback;
mod invalidation;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod scheduler_behavior;
mod scheduler_model;
mod scheduler_runtime;
mod zoom_coordinator;

pub use crate::extensions::{PluginContext, PluginEvent, SchedulerPlugin};

pub use behavior::{FeedbackBehavior, GestureInputBehavior, SnapBehavior};
pub use drag_coordinator::{DragPreview, PointerInput, RescheduleOutcome, RescheduleRequest};
pub use engine::SchedulerEngine;
pub use engine_config::SchedulerEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use feedback::{Toast, ZoomBadge};
pub use invalidation::{InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics};
pub use render_style::GridStyle;
pub use scheduler_model::{SchedulerModel, SchedulerModelBootstrap};
