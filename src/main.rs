//! Clock overlay
//!
//! A clock and weather readout on top of a user-chosen background. Both
//! layers can be dragged and pinch-zoomed; the toggle button picks which one
//! takes gestures. Build for the browser with `trunk build`.

mod components;
mod config;
mod model;
mod state;
mod util;
mod weather;

use components::app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info");
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
