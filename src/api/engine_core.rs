use super::{
    GridStyle, scheduler_behavior::SchedulerBehaviorState, scheduler_model::SchedulerModel,
    scheduler_runtime::SchedulerRuntimeState,
};

/// Internal engine core state used by the public facade (`SchedulerEngine`).
pub(super) struct EngineCore {
    pub(super) model: SchedulerModel,
    pub(super) behavior: SchedulerBehaviorState,
    pub(super) style: GridStyle,
    pub(super) runtime: SchedulerRuntimeState,
}
