//! Launch list collaborator. Knows nothing about the map; it only emits
//! hover events, which the owner translates into capability calls.

use yew::prelude::*;

use crate::model::Launch;

#[derive(Properties, PartialEq, Clone)]
pub struct LaunchListProps {
    pub launches: Vec<Launch>,
    /// Fired with the launchpad id when the pointer enters a row.
    pub on_hover_enter: Callback<String>,
    /// Fired when the pointer leaves a row.
    pub on_hover_end: Callback<()>,
}

#[function_component(LaunchList)]
pub fn launch_list(props: &LaunchListProps) -> Html {
    html! {
        <aside style="width:280px; max-height:600px; overflow-y:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px;">
            <h3 style="margin:0 0 8px 0;">{"Launches"}</h3>
            <ul style="list-style:none; margin:0; padding:0;">
                { for props.launches.iter().map(|launch| {
                    let enter = {
                        let cb = props.on_hover_enter.clone();
                        let pad_id = launch.launchpad.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(pad_id.clone()))
                    };
                    let leave = {
                        let cb = props.on_hover_end.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(()))
                    };
                    html! {
                        <li key={launch.id.clone()}
                            onmouseenter={enter}
                            onmouseleave={leave}
                            style="padding:4px 6px; border-radius:4px; cursor:default;">
                            { &launch.name }
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}
