use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use crate::model::{JsRandom, TouchId, TouchInput, TouchPhase};
use crate::state::{Settings, TouchSurface};
use crate::util::clog;
use super::{
    controls_panel::ControlsPanel, settings_modal::SettingsModal, stats_panel::StatsPanel,
};

const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

#[derive(Properties, PartialEq, Clone)]
pub struct TouchViewProps {
    pub settings: Settings,
    pub on_settings_change: Callback<Settings>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FingerStats {
    pub total: usize,
    pub active: usize,
    pub cancelled: usize,
}

impl FingerStats {
    fn of(surface: &TouchSurface) -> Self {
        Self {
            total: surface.len(),
            active: surface.active_count(),
            cancelled: surface.cancelled_count(),
        }
    }
}

#[function_component(TouchView)]
pub fn touch_view(props: &TouchViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let surface = use_mut_ref(|| TouchSurface::<JsRandom>::default());
    let settings_flag = use_mut_ref(|| props.settings.clone());
    let stats = use_state(FingerStats::default);
    // last published stats, read from event closures that outlive this render
    let stats_seen = use_mut_ref(FingerStats::default);
    let open_settings = use_state(|| false);

    // Effect: pick up new settings and redraw
    {
        let surface = surface.clone();
        let settings_flag = settings_flag.clone();
        use_effect_with(props.settings.clone(), move |s| {
            surface.borrow_mut().request_redraw();
            *settings_flag.borrow_mut() = s.clone();
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        let settings_flag = settings_flag.clone();
        let stats = stats.clone();
        let stats_seen = stats_seen.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let surface = surface.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    surface.borrow_mut().request_redraw();
                }
            };
            compute_and_apply_canvas_size();

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let surface = surface.clone();
                let settings_flag = settings_flag.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let mut ctx = match canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    {
                        Some(c) => c,
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let style = settings_flag.borrow().trail_style();
                    surface.borrow().render_with(&mut ctx, w, h, style);
                })
            };

            // RAF loop; renders only when the surface asked for it
            let raf_id = Rc::new(RefCell::new(None));
            // the frame callback re-arms itself through this cell; cleared on unmount
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let window_loop = window.clone();
                let surface = surface.clone();
                let draw = draw.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let dirty = surface.borrow_mut().take_redraw_request();
                    if dirty {
                        draw();
                    }
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Touch: one handler for all four phases, one input per changed touch
            let touch_cb = {
                let canvas_tc = canvas.clone();
                let surface_tc = surface.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let phase = match TouchPhase::from_dom_event(&e.type_()) {
                        Some(p) => p,
                        None => return,
                    };
                    let rect = canvas_tc.get_bounding_client_rect();
                    let time = e.time_stamp();
                    let changed = e.changed_touches();
                    let now = {
                        let mut sf = surface_tc.borrow_mut();
                        for i in 0..changed.length() {
                            if let Some(t) = changed.item(i) {
                                let x = t.client_x() as f64 - rect.left();
                                let y = t.client_y() as f64 - rect.top();
                                let input =
                                    TouchInput::new(phase, TouchId(t.identifier()), x, y, time);
                                sf.handle_touch_event(&input);
                            }
                        }
                        FingerStats::of(&sf)
                    };
                    let mut seen = stats_seen.borrow_mut();
                    if *seen != now {
                        *seen = now;
                        stats.set(now);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            for name in TOUCH_EVENTS {
                if canvas
                    .add_event_listener_with_callback(name, touch_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    clog(&format!("failed to listen for {}", name));
                }
            }

            // Cleanup
            let window_clone = window.clone();
            move || {
                for name in TOUCH_EVENTS {
                    let _ = canvas
                        .remove_event_listener_with_callback(name, touch_cb.as_ref().unchecked_ref());
                }
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                drop(closure_cell.borrow_mut().take());
                let _keep_alive = (&touch_cb, &resize_cb);
            }
        });
    }

    let clear_cb: Callback<()> = {
        let surface = surface.clone();
        let stats = stats.clone();
        let stats_seen = stats_seen.clone();
        Callback::from(move |()| {
            surface.borrow_mut().clear();
            *stats_seen.borrow_mut() = FingerStats::default();
            stats.set(FingerStats::default());
        })
    };
    let open_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let toggle_setting = |flip: fn(&mut Settings)| -> Callback<()> {
        let settings = props.settings.clone();
        let cb = props.on_settings_change.clone();
        Callback::from(move |()| {
            let mut s = settings.clone();
            flip(&mut s);
            cb.emit(s);
        })
    };
    let toggle_crosshair_cb = toggle_setting(|s| s.show_crosshair = !s.show_crosshair);
    let toggle_footprint_cb = toggle_setting(|s| s.show_footprint = !s.show_footprint);

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        <canvas ref={canvas_ref.clone()} id="touch-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <StatsPanel total={stats.total} active={stats.active} cancelled={stats.cancelled} />
        <ControlsPanel on_clear={clear_cb} on_open_settings={open_settings_cb} />
        <SettingsModal show={*open_settings} on_close={close_settings_cb}
            show_crosshair={props.settings.show_crosshair} on_toggle_crosshair={toggle_crosshair_cb}
            show_footprint={props.settings.show_footprint} on_toggle_footprint={toggle_footprint_cb}
        />
    </div>}
}
