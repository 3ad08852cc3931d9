//! Scroll reveals: elements start hidden and fade in the first time enough of
//! them is on screen. The state machine lives in [`RevealController`] and is
//! independent of the browser; [`IntersectionWatcher`] plugs the browser's
//! `IntersectionObserver` into it and [`Reveal`] wraps both for pages.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::DEFAULT_REVEAL_THRESHOLD;

// Browsers report ratios like 0.9995 for fully visible elements. Only
// thresholds this close to 1.0 get the slack.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    delay: Duration,
}

impl RevealOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_REVEAL_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// True when the visible fraction of an element counts as "in view".
pub fn threshold_crossed(ratio: f64, threshold: f64) -> bool {
    if ratio <= 0.0 {
        return false;
    }
    ratio >= threshold || (threshold >= 1.0 - RATIO_TOLERANCE && ratio + RATIO_TOLERANCE >= threshold)
}

/// Delay for the `index`-th sibling in a staggered group.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

pub fn transition_delay_style(delay: Duration) -> String {
    format!("transition-delay: {}ms;", delay.as_millis())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WatchError {
    #[error("viewport observation is not available")]
    Unavailable,
    #[error("could not observe element: {0}")]
    Observe(String),
}

pub type OnVisible = Rc<dyn Fn()>;

/// Something that can tell when a node scrolls into view.
///
/// `on_visible` is called every time the watcher sees the node with at least
/// `threshold` of its area visible, until the node is unwatched.
pub trait ViewportWatcher {
    type Node;

    fn watch(&self, node: &Self::Node, threshold: f64, on_visible: OnVisible) -> Result<(), WatchError>;

    fn unwatch(&self, node: &Self::Node);
}

/// One mounted reveal target. Moves from `Pending` to `Revealed` at most once
/// and holds a watch only while pending. Dropping it releases the watch.
pub struct RevealController<W: ViewportWatcher> {
    watcher: Rc<W>,
    node: W::Node,
    state: Rc<Cell<RevealState>>,
    watching: Rc<Cell<bool>>,
}

impl<W> RevealController<W>
where
    W: ViewportWatcher + 'static,
    W::Node: Clone + 'static,
{
    pub fn mount(watcher: Rc<W>, node: W::Node, options: RevealOptions, on_reveal: impl Fn() + 'static) -> Self {
        let state = Rc::new(Cell::new(RevealState::Pending));
        let watching = Rc::new(Cell::new(false));
        let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);

        let on_visible: OnVisible = {
            let state = state.clone();
            let watching = watching.clone();
            let watcher: Weak<W> = Rc::downgrade(&watcher);
            let node = node.clone();
            let on_reveal = on_reveal.clone();
            Rc::new(move || {
                if state.get() == RevealState::Revealed {
                    return;
                }
                state.set(RevealState::Revealed);
                if watching.replace(false) {
                    if let Some(watcher) = watcher.upgrade() {
                        watcher.unwatch(&node);
                    }
                }
                on_reveal();
            })
        };

        match watcher.watch(&node, options.threshold(), on_visible) {
            // a watcher may report visibility synchronously while registering
            Ok(()) if state.get() == RevealState::Revealed => watcher.unwatch(&node),
            Ok(()) => watching.set(true),
            Err(err) => {
                warn!("Showing element without scroll reveal: {}", err);
                state.set(RevealState::Revealed);
                on_reveal();
            }
        }

        Self {
            watcher,
            node,
            state,
            watching,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    #[cfg(test)]
    pub fn is_watching(&self) -> bool {
        self.watching.get()
    }
}

impl<W: ViewportWatcher> Drop for RevealController<W> {
    fn drop(&mut self) {
        if self.watching.replace(false) {
            self.watcher.unwatch(&self.node);
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Observation {
    node: Element,
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// [`ViewportWatcher`] backed by one `IntersectionObserver` per node.
#[derive(Default)]
pub struct IntersectionWatcher {
    observations: RefCell<Vec<Observation>>,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false)
    }
}

impl ViewportWatcher for IntersectionWatcher {
    type Node = Element;

    fn watch(&self, node: &Element, threshold: f64, on_visible: OnVisible) -> Result<(), WatchError> {
        if !Self::is_supported() {
            return Err(WatchError::Unavailable);
        }

        let callback = ObserverCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting() && threshold_crossed(entry.intersection_ratio(), threshold));
            if visible {
                on_visible();
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| WatchError::Observe(format!("{:?}", err)))?;
        observer.observe(node);

        self.observations.borrow_mut().push(Observation {
            node: node.clone(),
            observer,
            _callback: callback,
        });
        Ok(())
    }

    fn unwatch(&self, node: &Element) {
        let removed: Vec<Observation> = {
            let mut observations = self.observations.borrow_mut();
            let (removed, kept): (Vec<Observation>, Vec<Observation>) = observations
                .drain(..)
                .partition(|observation| &observation.node == node);
            *observations = kept;
            removed
        };

        for observation in removed {
            observation.observer.unobserve(&observation.node);
            observation.observer.disconnect();
            debug!("Stopped observing element");
            // unwatch is usually called from inside this observer's callback,
            // so the closure must outlive the current call
            Timeout::new(0, move || drop(observation)).forget();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(DEFAULT_REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub delay: Duration,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

impl RevealProps {
    pub fn options(&self) -> RevealOptions {
        RevealOptions::new(self.threshold).with_delay(self.delay)
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    let options = props.options();

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |options| {
                let controller = if *revealed {
                    None
                } else {
                    node.cast::<Element>().map(|element| {
                        let revealed = revealed.clone();
                        RevealController::mount(
                            Rc::new(IntersectionWatcher::new()),
                            element,
                            *options,
                            move || revealed.set(true),
                        )
                    })
                };
                // nothing left to release once revealed
                let controller = controller.filter(|controller| controller.state() == RevealState::Pending);
                move || drop(controller)
            },
            options,
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal-base", props.class.clone(), (*revealed).then(|| "is-visible"))}
            style={transition_delay_style(options.delay())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeWatcher {
        available: bool,
        fire_on_watch: bool,
        watches: RefCell<Vec<(u32, f64, OnVisible)>>,
        registrations: Cell<usize>,
    }

    impl FakeWatcher {
        fn new() -> Rc<Self> {
            Rc::new(Self::inner_default())
        }

        fn unavailable() -> Rc<Self> {
            Rc::new(Self {
                available: false,
                ..Self::inner_default()
            })
        }

        fn eager() -> Rc<Self> {
            Rc::new(Self {
                fire_on_watch: true,
                ..Self::inner_default()
            })
        }

        fn inner_default() -> Self {
            Self {
                available: true,
                fire_on_watch: false,
                watches: RefCell::new(Vec::new()),
                registrations: Cell::new(0),
            }
        }

        fn active(&self) -> usize {
            self.watches.borrow().len()
        }

        fn scroll(&self, node: u32, ratio: f64) {
            let due: Vec<OnVisible> = self
                .watches
                .borrow()
                .iter()
                .filter(|(watched, threshold, _)| *watched == node && threshold_crossed(ratio, *threshold))
                .map(|(_, _, on_visible)| on_visible.clone())
                .collect();
            for on_visible in due {
                on_visible();
            }
        }
    }

    impl ViewportWatcher for FakeWatcher {
        type Node = u32;

        fn watch(&self, node: &u32, threshold: f64, on_visible: OnVisible) -> Result<(), WatchError> {
            if !self.available {
                return Err(WatchError::Unavailable);
            }
            self.registrations.set(self.registrations.get() + 1);
            self.watches.borrow_mut().push((*node, threshold, on_visible.clone()));
            if self.fire_on_watch {
                on_visible();
            }
            Ok(())
        }

        fn unwatch(&self, node: &u32) {
            self.watches.borrow_mut().retain(|(watched, _, _)| watched != node);
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn reveals_once_and_releases_the_watch() {
        let watcher = FakeWatcher::new();
        let (reveals, on_reveal) = counter();
        let controller = RevealController::mount(watcher.clone(), 7, RevealOptions::default(), on_reveal);

        assert_eq!(controller.state(), RevealState::Pending);
        assert!(controller.is_watching());
        assert_eq!(watcher.active(), 1);

        watcher.scroll(7, 0.5);
        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(reveals.get(), 1);
        assert_eq!(watcher.active(), 0);
        assert!(!controller.is_watching());

        watcher.scroll(7, 1.0);
        assert_eq!(reveals.get(), 1);
        assert_eq!(watcher.registrations.get(), 1);
    }

    #[test]
    fn stays_pending_below_threshold() {
        let watcher = FakeWatcher::new();
        let (reveals, on_reveal) = counter();
        let controller = RevealController::mount(watcher.clone(), 1, RevealOptions::new(0.5), on_reveal);

        watcher.scroll(1, 0.2);
        assert_eq!(controller.state(), RevealState::Pending);
        assert_eq!(reveals.get(), 0);

        watcher.scroll(1, 0.5);
        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn unmounting_before_any_scroll_leaves_no_watches() {
        let watcher = FakeWatcher::new();
        let controllers: Vec<_> = (0..25)
            .map(|node| RevealController::mount(watcher.clone(), node, RevealOptions::default(), || {}))
            .collect();
        assert_eq!(watcher.active(), 25);

        drop(controllers);
        assert_eq!(watcher.active(), 0);
    }

    #[test]
    fn siblings_reveal_independently() {
        let watcher = FakeWatcher::new();
        let first = RevealController::mount(watcher.clone(), 1, RevealOptions::default(), || {});
        let second = RevealController::mount(watcher.clone(), 2, RevealOptions::default(), || {});

        watcher.scroll(2, 0.3);
        assert_eq!(first.state(), RevealState::Pending);
        assert_eq!(second.state(), RevealState::Revealed);
        assert_eq!(watcher.active(), 1);
    }

    #[test]
    fn falls_back_to_visible_without_an_observer() {
        let watcher = FakeWatcher::unavailable();
        let (reveals, on_reveal) = counter();
        let controller = RevealController::mount(watcher.clone(), 3, RevealOptions::default(), on_reveal);

        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(reveals.get(), 1);
        assert!(!controller.is_watching());
        drop(controller);
        assert_eq!(watcher.active(), 0);
    }

    #[test]
    fn synchronous_visibility_during_watch_does_not_leak() {
        let watcher = FakeWatcher::eager();
        let (reveals, on_reveal) = counter();
        let controller = RevealController::mount(watcher.clone(), 4, RevealOptions::default(), on_reveal);

        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(reveals.get(), 1);
        assert_eq!(watcher.active(), 0);
        assert!(!controller.is_watching());
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(RevealOptions::new(1.7).threshold(), 1.0);
        assert_eq!(RevealOptions::new(-0.2).threshold(), 0.0);
        assert_eq!(RevealOptions::new(f64::NAN).threshold(), DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(RevealOptions::default().threshold(), 0.1);
    }

    #[test]
    fn threshold_crossing() {
        assert!(threshold_crossed(0.1, 0.1));
        assert!(threshold_crossed(0.9995, 1.0));
        assert!(!threshold_crossed(0.05, 0.1));
        assert!(!threshold_crossed(0.0995, 0.1));
        assert!(!threshold_crossed(0.4995, 0.5));
        assert!(!threshold_crossed(0.0, 0.0));
    }

    #[test]
    fn stagger_delays() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger(0, step), Duration::ZERO);
        assert_eq!(stagger(3, step), Duration::from_millis(300));
        assert_eq!(transition_delay_style(stagger(2, step)), "transition-delay: 200ms;");
        assert_eq!(RevealOptions::default().with_delay(step).delay(), step);
    }

    #[test]
    fn props_carry_delay_into_options() {
        let props = RevealProps {
            children: Children::default(),
            class: Classes::default(),
            threshold: 0.3,
            delay: Duration::from_millis(200),
            id: None,
        };

        let options = props.options();
        assert_eq!(options.threshold(), 0.3);
        assert_eq!(options.delay(), Duration::from_millis(200));
        assert_eq!(transition_delay_style(options.delay()), "transition-delay: 200ms;");
    }
}
