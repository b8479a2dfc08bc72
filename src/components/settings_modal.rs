use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub show_crosshair: bool,
    pub on_toggle_crosshair: Callback<()>,
    pub show_footprint: bool,
    pub on_toggle_footprint: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_crosshair_cb = {
        let cb = props.on_toggle_crosshair.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_footprint_cb = {
        let cb = props.on_toggle_footprint.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_crosshair} onclick={toggle_crosshair_cb} />
                    <span>{"Show Crosshair"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_footprint} onclick={toggle_footprint_cb} />
                    <span>{"Show Touch Circle"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Released trails stay on screen until the next touch after a short pause with no finger down."}</div>
        </div>
    </div>}
}
