pub mod app;
pub mod clock_face;
pub mod control_panel;
pub mod surface;
