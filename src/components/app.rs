//! Top-level composition: fetches launch data, renders the list and map
//! side by side and bridges hover events into the map's capability handle.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::launch_list::LaunchList;
use super::map_surface::MapHandle;
use super::map_view::MapView;
use crate::api::SpaceX;
use crate::model::{Launch, Launchpad};
use crate::state::DrawGate;
use crate::util::clog;

#[function_component(App)]
pub fn app() -> Html {
    let launches = use_state(Vec::<Launch>::new);
    let launchpads = use_state(Vec::<Launchpad>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // Latest handle, readable from event closures regardless of render age.
    let map_handle = use_mut_ref(|| None::<MapHandle>);
    // Surface readiness and data arrival come in no fixed order; the gate
    // fires the first draw once both are in.
    let gate = use_mut_ref(DrawGate::default);

    // Fetch both collections once on mount.
    {
        let launches = launches.clone();
        let launchpads = launchpads.clone();
        let loading = loading.clone();
        let error = error.clone();
        let map_handle = map_handle.clone();
        let gate = gate.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = SpaceX::default();
                let started = js_sys::Date::now();
                let launches_res = api.launches().await;
                let launchpads_res = api.launchpads().await;
                match (launches_res, launchpads_res) {
                    (Ok(fetched_launches), Ok(fetched_pads)) => {
                        clog(&format!(
                            "api: {} launches, {} launchpads in {:.0} ms",
                            fetched_launches.len(),
                            fetched_pads.len(),
                            js_sys::Date::now() - started
                        ));
                        launches.set(fetched_launches);
                        launchpads.set(fetched_pads.clone());
                        if let Some(ready) = gate.borrow_mut().data_arrived(fetched_pads) {
                            if let Some(handle) = &*map_handle.borrow() {
                                handle.draw_markers(&ready);
                            }
                        }
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        error.set(Some(format!("Failed to load SpaceX data: {err}")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_map_ready = {
        let map_handle = map_handle.clone();
        let gate = gate.clone();
        Callback::from(move |handle: MapHandle| {
            *map_handle.borrow_mut() = Some(handle.clone());
            if let Some(ready) = gate.borrow_mut().surface_ready() {
                handle.draw_markers(&ready);
            }
        })
    };

    let on_hover_enter = {
        let map_handle = map_handle.clone();
        Callback::from(move |pad_id: String| {
            if let Some(handle) = &*map_handle.borrow() {
                handle.highlight(&pad_id);
            }
        })
    };
    let on_hover_end = {
        let map_handle = map_handle.clone();
        Callback::from(move |_| {
            if let Some(handle) = &*map_handle.borrow() {
                handle.reset_highlight();
            }
        })
    };

    if *loading {
        return html! {
            <main style="display:flex; align-items:center; justify-content:center; height:100vh;">
                <p>{"Loading SpaceX launches..."}</p>
            </main>
        };
    }

    if let Some(msg) = &*error {
        let reload = Callback::from(|_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
        return html! {
            <main style="display:flex; flex-direction:column; align-items:center; justify-content:center; height:100vh; gap:12px;">
                <h3 style="color:#f85149; margin:0;">{"Error"}</h3>
                <p style="margin:0;">{ msg }</p>
                <button onclick={reload}>{"Retry"}</button>
            </main>
        };
    }

    html! {
        <main style="padding:16px;">
            <header style="margin-bottom:16px;">
                <h1 style="margin:0;">{"SpaceX Launch Tracker"}</h1>
                <p style="margin:4px 0 0 0; opacity:0.7;">{"Hover a launch to find its pad on the map"}</p>
            </header>
            <div style="display:flex; gap:16px; align-items:flex-start;">
                <LaunchList
                    launches={(*launches).clone()}
                    on_hover_enter={on_hover_enter}
                    on_hover_end={on_hover_end} />
                <MapView
                    launchpads={(*launchpads).clone()}
                    on_ready={on_map_ready} />
            </div>
            <footer style="margin-top:16px; font-size:12px; opacity:0.6;">
                <p>{"Data provided by the SpaceX API"}</p>
            </footer>
        </main>
    }
}
