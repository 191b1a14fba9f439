use yew::prelude::*;

use crate::model::FeedItem;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedListProps {
    pub items: Vec<FeedItem>,
}

#[function_component(FeedList)]
pub fn feed_list(props: &FeedListProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <div style="padding:48px 16px; text-align:center; opacity:0.6; font-size:14px;">
                {"Nothing here yet. Pull down to load the feed."}
            </div>
        };
    }
    html! {
        <ul style="list-style:none; margin:0; padding:0;">
            { for props.items.iter().map(|item| html! {
                <li key={item.id} style="padding:14px 16px; border-bottom:1px solid #30363d; font-size:14px; line-height:1.4;">
                    { &item.headline }
                </li>
            }) }
        </ul>
    }
}
