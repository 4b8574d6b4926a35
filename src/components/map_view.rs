//! Interactive world map: a declarative shell around an imperatively
//! managed SVG surface. The surface is built once on mount; afterwards the
//! owning component drives markers exclusively through the [`MapHandle`]
//! emitted via `on_ready`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent, WheelEvent};
use yew::prelude::*;

use super::legend::LegendPanel;
use super::map_controls::MapControls;
use super::map_surface::{MapHandle, MapSurface};
use crate::model::Launchpad;
use crate::state::{Projection, Viewport};
use crate::util::clog;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const PROJECTION_SCALE: f64 = 80.0;
const PROJECTION_CENTER: (f64, f64) = (0.0, 20.0);

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    /// Latest launchpad sequence; re-supplying a changed sequence redraws.
    pub launchpads: Vec<Launchpad>,
    /// Fired exactly once per mount, when the surface is ready.
    pub on_ready: Callback<MapHandle>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let surface = use_mut_ref(|| None::<MapSurface>);
    let viewport = use_mut_ref(Viewport::default);

    // Reactive redraw when the launchpad sequence changes. Before readiness
    // this is a silent no-op; the owner re-issues once ready.
    {
        let surface = surface.clone();
        use_effect_with(props.launchpads.clone(), move |pads: &Vec<Launchpad>| {
            MapHandle::new(surface).draw_markers(pads);
            || ()
        });
    }

    // Mount: build the surface, attach gesture listeners, emit readiness.
    {
        let container_ref = container_ref.clone();
        let surface_setup = surface.clone();
        let viewport = viewport.clone();
        let on_ready = props.on_ready.clone();
        let initial_pads = props.launchpads.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let document = window.document().expect("document");
            let container: Element = container_ref.cast::<Element>().expect("map container");

            let projection = Projection::new(
                PROJECTION_SCALE,
                PROJECTION_CENTER,
                (WIDTH / 2.0, HEIGHT / 2.0),
            );
            let built = MapSurface::mount(&document, &container, WIDTH, HEIGHT, projection)
                .expect("map surface");
            let svg = built.svg().clone();
            *surface_setup.borrow_mut() = Some(built);

            // Wheel: zoom anchored at the cursor.
            let wheel_cb = {
                let viewport = viewport.clone();
                let surface = surface_setup.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    let mut vp = viewport.borrow_mut();
                    let factor = (-e.delta_y() * 0.001).exp();
                    vp.zoom_about(e.offset_x() as f64, e.offset_y() as f64, factor);
                    let attr = vp.transform_attr();
                    drop(vp);
                    if let Some(s) = &*surface.borrow() {
                        s.apply_transform(&attr);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            svg.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .expect("wheel listener");

            // Drag: pan.
            let mousedown_cb = {
                let viewport = viewport.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.button() == 0 {
                        e.prevent_default();
                        viewport
                            .borrow_mut()
                            .begin_pan(e.client_x() as f64, e.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            svg.add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .expect("mousedown listener");

            let mousemove_cb = {
                let viewport = viewport.clone();
                let surface = surface_setup.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let mut vp = viewport.borrow_mut();
                    if !vp.panning {
                        return;
                    }
                    vp.pan_to(e.client_x() as f64, e.client_y() as f64);
                    let attr = vp.transform_attr();
                    drop(vp);
                    if let Some(s) = &*surface.borrow() {
                        s.apply_transform(&attr);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            svg.add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .expect("mousemove listener");

            // Mouse up anywhere ends the drag, even off the svg.
            let mouseup_cb = {
                let viewport = viewport.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    viewport.borrow_mut().end_pan();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .expect("mouseup listener");

            // Readiness: hand the capability bundle to the owner, exactly
            // once per mount. Data already on the props draws immediately.
            let handle = MapHandle::new(surface_setup.clone());
            if !initial_pads.is_empty() {
                handle.draw_markers(&initial_pads);
            }
            clog("map: surface ready");
            on_ready.emit(handle);

            let window_cleanup = window.clone();
            move || {
                let _ = svg.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = svg.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = svg.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                if let Some(s) = surface_setup.borrow_mut().take() {
                    s.unmount();
                }
                let _keep_alive = (&wheel_cb, &mousedown_cb, &mousemove_cb, &mouseup_cb);
            }
        });
    }

    // On-screen controls drive the same viewport as the gestures.
    let zoom_step = |factor: f64| {
        let viewport = viewport.clone();
        let surface = surface.clone();
        Callback::from(move |_| {
            let mut vp = viewport.borrow_mut();
            vp.zoom_about(WIDTH / 2.0, HEIGHT / 2.0, factor);
            let attr = vp.transform_attr();
            drop(vp);
            if let Some(s) = &*surface.borrow() {
                s.apply_transform(&attr);
            }
        })
    };
    let reset_view = {
        let viewport = viewport.clone();
        let surface = surface.clone();
        Callback::from(move |_| {
            let mut vp = viewport.borrow_mut();
            vp.reset();
            let attr = vp.transform_attr();
            drop(vp);
            if let Some(s) = &*surface.borrow() {
                s.apply_transform(&attr);
            }
        })
    };

    html! {
        <div style={format!("position:relative; width:{WIDTH}px; height:{HEIGHT}px;")}>
            <div ref={container_ref}
                style="width:100%; height:100%; background:#0e1116; border:1px solid #30363d; border-radius:8px; overflow:hidden;">
            </div>
            <MapControls
                on_zoom_in={zoom_step(1.25)}
                on_zoom_out={zoom_step(0.8)}
                on_reset={reset_view} />
            <LegendPanel />
        </div>
    }
}
