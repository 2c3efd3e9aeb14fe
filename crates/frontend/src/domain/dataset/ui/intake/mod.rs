//! Dataset intake UI: drop zone, file picker, staged list, upload and
//! clear controls.

mod view;

pub use view::IntakePanel;
