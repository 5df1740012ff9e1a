use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, TouchEvent, Url};
use yew::prelude::*;

use super::{
    clock_face::ClockFace,
    control_panel::{ControlPanel, ModeLabel},
    surface::StyleSurface,
};
use crate::config::OverlayConfig;
use crate::model::{ContactId, Layer, Point};
use crate::state::{DoubleTap, LocalStore, Overlay, OverlayEvent, OverlayView};

type WebOverlay = Overlay<LocalStore, StyleSurface>;

const BACKGROUND_STYLE: &str = "position:absolute; inset:0; touch-action:none; transform-origin:center; transform:translate(var(--x, 0px), var(--y, 0px)) scale(var(--scale, 1));";
const CLOCK_STYLE: &str = "position:absolute; left:50%; top:50%; touch-action:none; user-select:none; transform:translate(-50%, -50%) translate(var(--x, 0px), var(--y, 0px)) scale(var(--scale, 1));";

// Shared by every event callback; the overlay is built once the layer
// elements are mounted.
#[derive(Clone)]
struct OverlayHandle {
    overlay: Rc<RefCell<Option<WebOverlay>>>,
    view: UseStateHandle<OverlayView>,
    hide_timer: Rc<RefCell<Option<(f64, Timeout)>>>,
}

impl OverlayHandle {
    fn dispatch(&self, event: OverlayEvent) {
        let now = js_sys::Date::now();
        let view = {
            let mut slot = self.overlay.borrow_mut();
            let Some(overlay) = slot.as_mut() else {
                return;
            };
            overlay.dispatch(event, now)
        };
        self.arm_hide(view.hide_at, now);
        self.view.set(view);
    }

    // One browser timeout per deadline; replacing it cancels the old one.
    fn arm_hide(&self, deadline: Option<f64>, now: f64) {
        let mut slot = self.hide_timer.borrow_mut();
        let armed = slot.as_ref().map(|(at, _)| *at);
        match plan_hide(armed, deadline, now) {
            HidePlan::Keep => {}
            HidePlan::Cancel => *slot = None,
            HidePlan::Schedule { at, delay_ms } => {
                let handle = self.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    // A fired timeout no longer counts as armed, so an early
                    // tick re-arms the same deadline.
                    let fired = handle.hide_timer.borrow_mut().take();
                    handle.dispatch(OverlayEvent::Tick);
                    drop(fired);
                });
                *slot = Some((at, timeout));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum HidePlan {
    Keep,
    Cancel,
    Schedule { at: f64, delay_ms: u32 },
}

fn plan_hide(armed: Option<f64>, deadline: Option<f64>, now: f64) -> HidePlan {
    match deadline {
        None => HidePlan::Cancel,
        Some(at) if armed == Some(at) => HidePlan::Keep,
        Some(at) => HidePlan::Schedule {
            at,
            delay_ms: (at - now).max(0.0).ceil() as u32,
        },
    }
}

struct LayerCallbacks {
    down: Callback<PointerEvent>,
    moved: Callback<PointerEvent>,
    up: Callback<PointerEvent>,
}

fn contact(e: &PointerEvent) -> (ContactId, Point) {
    (
        ContactId(e.pointer_id()),
        Point::new(e.client_x() as f64, e.client_y() as f64),
    )
}

fn layer_callbacks(handle: &OverlayHandle, layer: Layer) -> LayerCallbacks {
    let down = {
        let handle = handle.clone();
        Callback::from(move |e: PointerEvent| {
            let (id, at) = contact(&e);
            handle.dispatch(OverlayEvent::ContactStart { layer, id, at });
        })
    };
    let moved = {
        let handle = handle.clone();
        Callback::from(move |e: PointerEvent| {
            let (id, at) = contact(&e);
            handle.dispatch(OverlayEvent::ContactMove { layer, id, at });
        })
    };
    let up = {
        let handle = handle.clone();
        Callback::from(move |e: PointerEvent| {
            handle.dispatch(OverlayEvent::ContactEnd {
                layer,
                id: ContactId(e.pointer_id()),
            });
        })
    };
    LayerCallbacks { down, moved, up }
}

fn toggle_fullscreen() {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(root) = document.document_element() {
        if let Err(err) = root.request_fullscreen() {
            warn!(?err, "fullscreen request failed");
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = OverlayConfig::default();
    let clock_ref = use_node_ref();
    let bg_ref = use_node_ref();
    let view = use_state_eq(OverlayView::default);
    let bg_url = use_state_eq(|| None::<String>);
    let overlay = use_mut_ref(|| None::<WebOverlay>);
    let hide_timer = use_mut_ref(|| None::<(f64, Timeout)>);
    let handle = OverlayHandle {
        overlay,
        view: view.clone(),
        hide_timer,
    };

    // Build the overlay once both layers exist, then start the auto-hide.
    {
        let handle = handle.clone();
        let clock_ref = clock_ref.clone();
        let bg_ref = bg_ref.clone();
        use_effect_with((), move |_| {
            *handle.overlay.borrow_mut() = Some(Overlay::new(
                &config,
                LocalStore,
                StyleSurface::new(clock_ref),
                StyleSurface::new(bg_ref),
            ));
            info!("overlay ready");
            handle.dispatch(OverlayEvent::Activity);
            || ()
        });
    }

    // Page-wide listeners: any press shows the controls, double tap toggles
    // fullscreen.
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|win| win.document());
            let double_tap = Rc::new(RefCell::new(DoubleTap::new(config.double_tap_ms)));
            let activity_cb = {
                let handle = handle.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    handle.dispatch(OverlayEvent::Activity);
                }) as Box<dyn FnMut(_)>)
            };
            let touch_start_cb = {
                let double_tap = double_tap.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    double_tap.borrow_mut().touch_start(e.touches().length());
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let double_tap = double_tap.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    if double_tap.borrow_mut().touch_end(js_sys::Date::now()) {
                        toggle_fullscreen();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(doc) = &document {
                for kind in ["pointerdown", "touchstart"] {
                    doc.add_event_listener_with_callback(kind, activity_cb.as_ref().unchecked_ref())
                        .ok();
                }
                doc.add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
                doc.add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            }
            // Cleanup
            move || {
                if let Some(doc) = &document {
                    for kind in ["pointerdown", "touchstart"] {
                        let _ = doc.remove_event_listener_with_callback(
                            kind,
                            activity_cb.as_ref().unchecked_ref(),
                        );
                    }
                    let _ = doc.remove_event_listener_with_callback(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                    );
                    let _ = doc.remove_event_listener_with_callback(
                        "touchend",
                        touch_end_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_toggle_mode = {
        let handle = handle.clone();
        Callback::from(move |_| handle.dispatch(OverlayEvent::ToggleMode))
    };
    let on_pick_background = {
        let bg_url = bg_url.clone();
        Callback::from(move |file: File| match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(prev) = &*bg_url {
                    let _ = Url::revoke_object_url(prev);
                }
                info!(name = %file.name(), "background image selected");
                bg_url.set(Some(url));
            }
            Err(err) => warn!(?err, "could not open background image"),
        })
    };

    let clock = layer_callbacks(&handle, Layer::Clock);
    let background = layer_callbacks(&handle, Layer::Background);
    let bg_image_style = match &*bg_url {
        Some(url) => format!(
            "position:absolute; inset:0; background-image:url('{}'); background-size:cover; background-position:center;",
            url
        ),
        None => "position:absolute; inset:0; background:#111;".to_string(),
    };

    html! {<div id="root" style="position:fixed; inset:0; overflow:hidden; background:#000; color:#fff; font-family:sans-serif;">
        <div ref={bg_ref} id="bgLayer" style={BACKGROUND_STYLE}
            onpointerdown={background.down} onpointermove={background.moved}
            onpointerup={background.up.clone()} onpointercancel={background.up.clone()}>
            <div style={bg_image_style}></div>
        </div>
        <div ref={clock_ref} id="clockContainer" style={CLOCK_STYLE}
            onpointerdown={clock.down} onpointermove={clock.moved}
            onpointerup={clock.up.clone()} onpointercancel={clock.up.clone()}>
            <ClockFace
                tick_ms={config.clock_tick_ms}
                weather_tick_ms={config.weather_tick_ms}
                weather_refresh_minutes={config.weather_refresh_minutes}
            />
        </div>
        <ModeLabel visible={view.controls_visible} mode={view.mode} />
        <ControlPanel
            visible={view.controls_visible}
            mode={view.mode}
            on_toggle_mode={on_toggle_mode}
            on_pick_background={on_pick_background}
        />
    </div>}
}
