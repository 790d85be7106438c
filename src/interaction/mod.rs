pub mod drag;
pub mod zoom;

pub use drag::{
    DragMove, DragPhase, DragPress, DragRelease, DragSession, DragTracker, LongPressTuning,
};
pub use zoom::{PinchGesture, PinchZoom, PinchZoomConfig};
