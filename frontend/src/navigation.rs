use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::ANCHOR_SCROLL_DELAY_MS;

/// Element id named by a URL fragment, if any.
pub fn fragment_target(hash: &str) -> Option<String> {
    let raw = hash.trim_start_matches('#').trim();
    if raw.is_empty() {
        return None;
    }
    Some(
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

pub fn scroll_into_view(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scroll to the top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                let has_fragment = window
                    .location()
                    .hash()
                    .ok()
                    .and_then(|hash| fragment_target(&hash))
                    .is_some();
                if !has_fragment {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );
}

/// Scrolls to the element named by the URL fragment. Runs again whenever the
/// fragment changes or `content_len` changes, so sections rendered after a
/// fetch can still be reached.
#[hook]
pub fn use_fragment_scroll(content_len: usize) {
    let hash = use_location()
        .map(|location| location.hash().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        move |(hash, _)| {
            let pending = fragment_target(hash).map(|id| {
                Timeout::new(ANCHOR_SCROLL_DELAY_MS, move || {
                    if !scroll_into_view(&id) {
                        debug!("No element with id {} to scroll to yet", id);
                    }
                })
            });
            // dropping a Timeout cancels it
            move || drop(pending)
        },
        (hash, content_len),
    );
}
