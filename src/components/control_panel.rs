use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::model::Mode;

fn fade_style(visible: bool) -> &'static str {
    if visible {
        "opacity:1; pointer-events:auto; transition:opacity 0.3s;"
    } else {
        "opacity:0; pointer-events:none; transition:opacity 0.3s;"
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ControlPanelProps {
    pub visible: bool,
    pub mode: Mode,
    pub on_toggle_mode: Callback<()>,
    pub on_pick_background: Callback<File>,
}

#[function_component]
pub fn ControlPanel(props: &ControlPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle_mode.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pick_cb = {
        let cb = props.on_pick_background.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                cb.emit(file);
            }
        })
    };
    html! {<div class="control-panel" style={format!("position:absolute; bottom:16px; right:16px; z-index:10; background:rgba(22,27,34,0.8); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:8px; align-items:center; {}", fade_style(props.visible))}>
        <button id="toggleMode" onclick={toggle_cb}>{ props.mode.toggle_label() }</button>
        <input id="bgInput" type="file" accept="image/*" onchange={pick_cb} />
    </div>}
}

#[derive(Properties, PartialEq, Clone)]
pub struct ModeLabelProps {
    pub visible: bool,
    pub mode: Mode,
}

#[function_component]
pub fn ModeLabel(props: &ModeLabelProps) -> Html {
    html! {<div id="modeLabel" style={format!("position:absolute; top:16px; left:16px; z-index:10; padding:4px 10px; border-radius:6px; background:rgba(0,0,0,0.5); font-size:14px; {}", fade_style(props.visible))}>
        { props.mode.label() }
    </div>}
}
