use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    feed_list::FeedList, pull_to_refresh::PullToRefresh, refresh_indicator::RefreshIndicator,
    status_panel::StatusPanel,
};
use crate::model::{FeedAction, FeedItem, FeedState};
use crate::util::clog;

const FEED_STORE_KEY: &str = "lf_feed_items";

/// Simulated server round trip for the stub refresh service, in ms. A real
/// deployment replaces the stub with a socket push and completion event; the
/// widget contract is the same either way.
const STUB_REFRESH_DELAY_MS: i32 = 600;

const HEADLINE_POOL: &[&str] = &[
    "Overnight build finished green across all targets",
    "Two new mirrors joined the relay pool",
    "Queue depth back under fifty after the morning spike",
    "Storage node 7 rotated its certificates",
    "Edge cache hit rate touched 98% for the first time",
    "Deploy window moved up to 14:00 UTC",
    "Replica lag cleared in the eu-west region",
    "Background compaction reclaimed 12 GiB",
    "New dashboard shipped for the ingest pipeline",
    "Rate limiter defaults loosened for trusted peers",
];

fn fresh_items(next_id: u64) -> Vec<FeedItem> {
    let count = 1 + (js_sys::Math::random() * 3.0).floor() as u64;
    let now_ms = js_sys::Date::now();
    (0..count)
        .map(|i| {
            let pick = (js_sys::Math::random() * HEADLINE_POOL.len() as f64).floor() as usize;
            FeedItem {
                id: next_id + i,
                headline: HEADLINE_POOL[pick].to_string(),
                received_ms: now_ms,
            }
        })
        .collect()
}

#[function_component(App)]
pub fn app() -> Html {
    let feed = use_reducer(FeedState::default);

    // Load the persisted feed snapshot on mount.
    {
        let feed = feed.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(FEED_STORE_KEY) {
                        if let Ok(items) = serde_json::from_str::<Vec<FeedItem>>(&raw) {
                            feed.dispatch(FeedAction::RestoreItems { items });
                        }
                    }
                }
            }
            || ()
        });
    }

    // Persist item changes.
    {
        let feed = feed.clone();
        use_effect_with(feed.items.clone(), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&feed.items) {
                        let _ = store.set_item(FEED_STORE_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    // Ticker for feed age.
    {
        let feed = feed.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let feed2 = feed.clone();
            let tick = Closure::wrap(Box::new(move || {
                feed2.dispatch(FeedAction::TickSecond);
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            move || {
                let _ = window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    // Stub refresh service: answer each outbound request after a short delay.
    {
        let feed = feed.clone();
        let refreshing = feed.refreshing;
        use_effect_with(refreshing, move |_| {
            if refreshing {
                clog("refresh requested; awaiting new entries");
                let window = web_sys::window().expect("no global `window` exists");
                let feed2 = feed.clone();
                let done = Closure::once_into_js(move || {
                    let items = fresh_items(feed2.next_id);
                    feed2.dispatch(FeedAction::CompleteRefresh { items });
                });
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    done.unchecked_ref(),
                    STUB_REFRESH_DELAY_MS,
                );
            }
            || ()
        });
    }

    // Log completed round trips.
    {
        let count = feed.refresh_count;
        let total = feed.items.len();
        use_effect_with(count, move |_| {
            if count > 0 {
                clog(&format!("refresh #{count} complete, {total} entries"));
            }
            || ()
        });
    }

    let on_refresh = {
        let feed = feed.clone();
        Callback::from(move |_| feed.dispatch(FeedAction::BeginRefresh))
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
            <PullToRefresh on_refresh={on_refresh} refreshed={feed.refresh_count}>
                <RefreshIndicator active={feed.refreshing} />
                <StatusPanel
                    item_count={feed.items.len()}
                    refresh_count={feed.refresh_count}
                    age_secs={feed.age_secs}
                    refreshing={feed.refreshing}
                />
                <FeedList items={feed.items.clone()} />
            </PullToRefresh>
        </div>
    }
}
