use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::state::PullState;

#[derive(Properties, PartialEq, Clone)]
pub struct PullToRefreshProps {
    /// Emitted exactly once per triggered pull; the host owns the actual
    /// refresh round trip.
    pub on_refresh: Callback<()>,
    /// Completed-refresh counter. Every change clears the loading state, so
    /// repeated or spurious deliveries are harmless.
    pub refreshed: u64,
    pub children: Children,
}

/// Touch container around arbitrary page content. Dragging down from the top
/// of the page translates the content, and releasing past the threshold emits
/// `on_refresh`; the content then holds its offset until `refreshed` changes.
/// Both wrapper elements must exist at mount; the component cannot run
/// without them.
#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let container_ref = use_node_ref();
    let child_ref = use_node_ref();
    let pull = use_mut_ref(|| PullState::default());

    // Reapply the child transform from current gesture state. The transform is
    // the widget's only visual side effect.
    let apply_transform: Rc<dyn Fn()> = {
        let child_ref = child_ref.clone();
        let pull = pull.clone();
        Rc::new(move || {
            let child: HtmlElement = child_ref
                .cast::<HtmlElement>()
                .expect("child_ref not attached to an element");
            let offset = pull.borrow().offset();
            child
                .style()
                .set_property("transform", &format!("translate3d(0px, {offset}px, 0px)"))
                .ok();
        })
    };

    // Inbound completion signal: each epoch change re-clears loading. The
    // mount run doubles as the initial idle transform.
    {
        let pull = pull.clone();
        let apply = apply_transform.clone();
        use_effect_with(props.refreshed, move |_| {
            pull.borrow_mut().refreshed();
            (apply)();
            || ()
        });
    }

    // Mount effect: raw touch listeners on the container.
    {
        let container_ref = container_ref.clone();
        let pull_setup = pull.clone();
        let on_refresh = props.on_refresh.clone();
        let apply_setup = apply_transform.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let container: HtmlElement = container_ref
                .cast::<HtmlElement>()
                .expect("container_ref not attached to an element");

            (apply_setup)();

            let touch_start_cb = {
                let pull = pull_setup.clone();
                let apply = apply_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    // Only a sequence starting with the page at its top can
                    // become a pull.
                    let at_top = document
                        .body()
                        .map(|body| body.scroll_top() == 0)
                        .unwrap_or(false);
                    if let Some(touch) = e.target_touches().item(0) {
                        pull.borrow_mut().touch_start(touch.page_y() as f64, at_top);
                        (apply)();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let pull = pull_setup.clone();
                let apply = apply_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(touch) = e.target_touches().item(0) {
                        pull.borrow_mut().touch_move(touch.page_y() as f64);
                        (apply)();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let pull = pull_setup.clone();
                let apply = apply_setup.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    if pull.borrow_mut().touch_end() {
                        on_refresh.emit(());
                    }
                    (apply)();
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            // An interrupted gesture would otherwise keep a stale anchor.
            container
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            move || {
                let _ = container.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                // Keep closures alive until the listeners are gone.
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    html! {
        <div ref={container_ref} id="pull" style="min-height:100vh; overflow-x:hidden;">
            <div ref={child_ref} id="pull-child" style="will-change:transform;">
                { for props.children.iter() }
            </div>
        </div>
    }
}
