pub mod double_tap;
pub mod mode;
pub mod overlay;
pub mod pinch;
pub mod pointer;
pub mod store;
#[cfg(test)]
pub mod testing;
pub mod transform;
pub mod visibility;

pub use double_tap::DoubleTap;
pub use overlay::{Overlay, OverlayEvent, OverlayView};
pub use store::LocalStore;
pub use transform::LayerSurface;
