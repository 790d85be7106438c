use crate::core::TimeAxis;
use crate::error::{SchedulerError, SchedulerResult};
use crate::interaction::{DragTracker, PinchZoom};
use crate::render::Renderer;

use super::{
    GridStyle, SchedulerEngine, SchedulerEngineConfig, behavior,
    engine_core::EngineCore,
    scheduler_behavior::SchedulerBehaviorState,
    scheduler_model::{SchedulerModel, SchedulerModelBootstrap},
    scheduler_runtime::SchedulerRuntimeState,
};

impl<R: Renderer> SchedulerEngine<R> {
    /// Creates a fully initialized engine for one display date.
    pub fn new(renderer: R, config: SchedulerEngineConfig) -> SchedulerResult<Self> {
        if !config.viewport.is_valid() {
            return Err(SchedulerError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        behavior::validate_long_press(config.long_press)?;
        config.snap.validate()?;
        config.feedback.validate()?;
        config.cascade.validate()?;

        let axis = TimeAxis::new(config.window, config.base_minute_height)?;

        let mut drag = DragTracker::default();
        drag.set_tuning(config.long_press);

        let mut zoom = PinchZoom::default();
        zoom.set_config(config.zoom)?;

        let model = SchedulerModel::new(SchedulerModelBootstrap {
            viewport: config.viewport,
            display_date: config.display_date,
            axis,
            status_filter: config.status_filter,
            drag,
            zoom,
        });

        Ok(Self {
            renderer,
            core: EngineCore {
                model,
                behavior: SchedulerBehaviorState {
                    snap: config.snap,
                    feedback: config.feedback,
                    gesture_input: config.gesture_input,
                    cascade: config.cascade,
                },
                style: GridStyle::default(),
                runtime: SchedulerRuntimeState::with_full_invalidation(),
            },
        })
    }
}
