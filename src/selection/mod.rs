pub mod controller;
pub mod labels;
pub mod line;
pub mod overlay;
pub mod state;

pub use controller::MapController;
pub use line::connecting_line;
pub use overlay::{LogRenderer, MarkerLabel, OverlayId, OverlayRenderer};
pub use state::{Body, SelectionState};
