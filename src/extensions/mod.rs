//! Optional feature modules live here.
//!
//! Keep extensions bounded and avoid coupling them into core paths.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, SchedulerPlugin};
