use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RefreshIndicatorProps {
    pub active: bool,
}

/// Strip hidden above the page content; the pull translation reveals it. Its
/// height matches the pull threshold so a held refresh shows it exactly.
#[function_component(RefreshIndicator)]
pub fn refresh_indicator(props: &RefreshIndicatorProps) -> Html {
    let label = if props.active {
        "Refreshing..."
    } else {
        "Pull down to refresh"
    };
    html! {
        <div style="height:50px; margin-top:-50px; display:flex; align-items:center; justify-content:center; font-size:13px; opacity:0.7;">
            { label }
        </div>
    }
}
