//! The per-frame models the controller is made of.
//!
//! Each model only holds its tuning. The state it advances is owned by
//! [`ControllerState`](crate::ControllerState) and passed in explicitly, so the models can also be
//! used on their own.
mod orientation;
mod speed;
mod vertical;

pub use orientation::{OrientationModel, OrientationOutput};
pub use speed::SpeedModel;
pub use vertical::{JumpRequest, VerticalMotionModel, VerticalOutcome, VERTICAL_SNAP_EPSILON};
