use yew::prelude::*;

use crate::state::markers::{DEFAULT_MARKER, HIGHLIGHT_MARKER};

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:50%;", props.color)}></span> <span>{ props.label }</span> </div> }
}

#[function_component(LegendPanel)]
pub fn legend_panel() -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={DEFAULT_MARKER.fill} label="Launch site" />
        <LegendRow color={HIGHLIGHT_MARKER.fill} label="Hovered launch" />
        <LegendRow color="#22313f" label="Land" />
    </div>}
}
