use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::util::{WallClock, format_clock, format_date, format_temperature};
use crate::weather::{self, Coordinates};

/// Latest temperature for the device's location. Located once on mount,
/// refreshed whenever the wall clock hits a multiple of `every_minutes`.
#[hook]
fn use_temperature(tick_ms: u32, every_minutes: u32) -> Option<f64> {
    let temperature = use_state_eq(|| None::<f64>);
    let coords = use_mut_ref(|| None::<Coordinates>);
    {
        let temperature = temperature.clone();
        use_effect_with((tick_ms, every_minutes), move |&(tick_ms, every_minutes)| {
            let refresh: Rc<dyn Fn()> = {
                let coords = coords.clone();
                Rc::new(move || {
                    let Some(at) = *coords.borrow() else {
                        return;
                    };
                    let temperature = temperature.clone();
                    spawn_local(async move {
                        match weather::fetch_current(at).await {
                            Ok(current) => {
                                info!(
                                    celsius = current.temperature_2m,
                                    code = ?current.weather_code,
                                    "weather updated"
                                );
                                temperature.set(Some(current.temperature_2m));
                            }
                            Err(err) => error!(%err, "weather refresh failed"),
                        }
                    });
                })
            };
            locate(coords, refresh.clone());
            let interval = Interval::new(tick_ms, move || {
                if WallClock::now().is_refresh_tick(every_minutes) {
                    refresh();
                }
            });
            move || drop(interval)
        });
    }
    *temperature
}

fn locate(coords: Rc<RefCell<Option<Coordinates>>>, then: Rc<dyn Fn()>) {
    spawn_local(async move {
        match weather::current_position().await {
            Ok(at) => {
                info!(latitude = at.latitude, longitude = at.longitude, "location acquired");
                *coords.borrow_mut() = Some(at);
                then();
            }
            Err(err) => error!(%err, "could not get location"),
        }
    });
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClockFaceProps {
    pub tick_ms: u32,
    pub weather_tick_ms: u32,
    pub weather_refresh_minutes: u32,
}

#[function_component(ClockFace)]
pub fn clock_face(props: &ClockFaceProps) -> Html {
    let now = use_state_eq(WallClock::now);
    {
        let now = now.clone();
        use_effect_with(props.tick_ms, move |&tick_ms| {
            let interval = Interval::new(tick_ms, move || now.set(WallClock::now()));
            move || drop(interval)
        });
    }
    let temperature = use_temperature(props.weather_tick_ms, props.weather_refresh_minutes);

    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:4px; text-shadow:0 2px 8px rgba(0,0,0,0.6);">
        <div id="clock" style="font-size:96px; font-weight:600; line-height:1;">{ format_clock(&now) }</div>
        <div style="display:flex; gap:12px; font-size:24px;">
            <span id="date">{ format_date(&now) }</span>
            <span id="temperature">{ temperature.map(format_temperature).unwrap_or_default() }</span>
        </div>
    </div>}
}
