use crate::util::format_age;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub item_count: usize,
    pub refresh_count: u64,
    pub age_secs: u64,
    pub refreshing: bool,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let cell_style = "display:flex; align-items:baseline; gap:6px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let age = if props.item_count == 0 {
        "-".to_string()
    } else {
        format_age(props.age_secs)
    };
    html! {
        <div style="position:sticky; top:0; display:flex; justify-content:space-between; gap:16px; padding:10px 16px; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d; font-size:13px;">
            <div style={cell_style}>
                <span style={value_style}>{ props.item_count }</span>
                <span style="opacity:0.7;">{"entries"}</span>
            </div>
            <div style={cell_style}>
                <span style={value_style}>{ props.refresh_count }</span>
                <span style="opacity:0.7;">{"refreshes"}</span>
            </div>
            <div style={cell_style}>
                <span style="opacity:0.7;">{ if props.refreshing { "updating".to_string() } else { age } }</span>
            </div>
        </div>
    }
}
