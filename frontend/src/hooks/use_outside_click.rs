use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

/// Calls `on_outside` whenever a mouse button goes down outside `node_ref`.
///
/// The document listener exists only while `enabled` is true. It is held as a
/// `gloo` [`EventListener`] owned by the effect cleanup, so it is removed when
/// `enabled` turns false and when the component unmounts.
///
/// `on_outside` is read through a ref updated every render, so a fresh
/// callback doesn't re-attach the listener.
#[hook]
pub fn use_outside_click(node_ref: NodeRef, enabled: bool, on_outside: Callback<()>) {
    let latest = use_mut_ref(|| on_outside.clone());
    *latest.borrow_mut() = on_outside;

    use_effect_with(enabled, move |enabled| {
        let listener = if *enabled {
            web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    EventListener::new(&document, "mousedown", move |event| {
                        let Some(container) = node_ref.cast::<Element>() else {
                            return;
                        };
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        if !container.contains(target.as_ref()) {
                            // Clone first: emitting may re-render and write `latest`
                            let callback = latest.borrow().clone();
                            callback.emit(());
                        }
                    })
                })
        } else {
            None
        };

        move || drop(listener)
    });
}
