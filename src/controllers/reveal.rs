//! Scroll-triggered reveal of content blocks.
//!
//! Targets start hidden and are flagged as revealed the first time the host
//! reports them visible at or above the configured threshold. The flag never
//! resets. Every reveal is published once on a [`RevealEvents`] stream so the
//! page can re-render the block with its revealed class.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{RevealConfig, REVEAL_KEY_ATTR};
use crate::error::{Result, SiteError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RevealKey(String);

impl RevealKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RevealKey {
    fn from(key: &str) -> Self {
        RevealKey(key.to_string())
    }
}

impl From<String> for RevealKey {
    fn from(key: String) -> Self {
        RevealKey(key)
    }
}

impl std::borrow::Borrow<str> for RevealKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Emitted once per target, the first time it becomes visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revealed(pub RevealKey);

pub type RevealEvents = UnboundedReceiver<Revealed>;

/// One intersection report for one target.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSample {
    pub key: RevealKey,
    pub intersecting: bool,
    /// Visible fraction of the target's area, 0.0 to 1.0.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

/// Revealed flags for every registered target.
pub struct RevealTracker {
    threshold: f64,
    targets: HashMap<RevealKey, bool>,
    events: Option<UnboundedSender<Revealed>>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> (Self, RevealEvents) {
        let (tx, rx) = unbounded();
        let tracker = Self {
            threshold,
            targets: HashMap::new(),
            events: Some(tx),
        };
        (tracker, rx)
    }

    pub fn shared(threshold: f64) -> (Rc<RefCell<Self>>, RevealEvents) {
        let (tracker, events) = Self::new(threshold);
        (Rc::new(RefCell::new(tracker)), events)
    }

    /// Returns false if the key was already registered.
    pub fn register(&mut self, key: RevealKey) -> bool {
        if self.targets.contains_key(&key) {
            return false;
        }
        self.targets.insert(key, false);
        true
    }

    /// Applies one sample. Returns true only when this sample revealed the target.
    pub fn evaluate(&mut self, sample: &IntersectionSample) -> bool {
        if !sample.is_visible(self.threshold) {
            return false;
        }
        let Some(revealed) = self.targets.get_mut(&sample.key) else {
            return false;
        };
        if *revealed {
            return false;
        }
        *revealed = true;

        if let Some(events) = &self.events {
            // Receiver gone means the page no longer listens; the flag still holds.
            let _ = events.unbounded_send(Revealed(sample.key.clone()));
        }
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.targets.get(key).copied().unwrap_or(false)
    }

    /// Ends the event stream.
    pub fn close(&mut self) {
        self.events = None;
    }
}

/// The host's visibility machinery.
pub trait Observe {
    type Target;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
    fn disconnect(&self);
}

/// Runs samples through the tracker and stops observing every target they
/// reveal. Returns how many targets were revealed.
pub fn apply_samples<O, I>(tracker: &RefCell<RevealTracker>, observer: &O, samples: I) -> usize
where
    O: Observe,
    I: IntoIterator<Item = (IntersectionSample, O::Target)>,
{
    let mut revealed = 0;
    for (sample, target) in samples {
        if tracker.borrow_mut().evaluate(&sample) {
            debug!("Revealed {}", sample.key);
            observer.unobserve(&target);
            revealed += 1;
        }
    }
    revealed
}

/// Owns the observer for one page mount and releases it exactly once,
/// on [`dispose`](RevealController::dispose) or on drop.
pub struct RevealController<O: Observe> {
    tracker: Rc<RefCell<RevealTracker>>,
    observer: Option<O>,
}

impl<O: Observe> RevealController<O> {
    pub fn new(tracker: Rc<RefCell<RevealTracker>>, observer: O) -> Self {
        Self {
            tracker,
            observer: Some(observer),
        }
    }

    /// Starts observing every target not seen before. Returns how many were added.
    pub fn register<I>(&mut self, targets: I) -> usize
    where
        I: IntoIterator<Item = (RevealKey, O::Target)>,
    {
        let Some(observer) = &self.observer else {
            return 0;
        };
        let mut tracker = self.tracker.borrow_mut();
        let mut added = 0;
        for (key, target) in targets {
            if tracker.register(key) {
                observer.observe(&target);
                added += 1;
            }
        }
        added
    }

    /// Samples arriving after disposal are dropped.
    #[cfg(test)]
    pub fn deliver<I>(&mut self, samples: I) -> usize
    where
        I: IntoIterator<Item = (IntersectionSample, O::Target)>,
    {
        match &self.observer {
            Some(observer) => apply_samples(&self.tracker, observer, samples),
            None => 0,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.tracker.borrow().is_revealed(key)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.observer.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.tracker.borrow_mut().close();
    }
}

impl<O: Observe> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// `IntersectionObserver` plus the JS callback it calls into.
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    pub fn new(tracker: Rc<RefCell<RevealTracker>>, threshold: f64) -> Result<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let samples = entries.iter().filter_map(|entry| {
                let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                let target = entry.target();
                let key = target.get_attribute(REVEAL_KEY_ATTR)?;
                let sample = IntersectionSample {
                    key: RevealKey::from(key),
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                Some((sample, target))
            });
            apply_samples(&tracker, &observer, samples);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Observe for IntersectionObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }

    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

impl Observe for DomObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        Observe::observe(&self.observer, target);
    }

    fn unobserve(&self, target: &Element) {
        Observe::unobserve(&self.observer, target);
    }

    fn disconnect(&self) {
        Observe::disconnect(&self.observer);
    }
}

impl RevealController<DomObserver> {
    /// Acquires the page's observer.
    pub fn mount(config: &RevealConfig) -> Result<(Self, RevealEvents)> {
        let (tracker, events) = RevealTracker::shared(config.threshold);
        let observer = DomObserver::new(tracker.clone(), config.threshold)?;
        Ok((Self::new(tracker, observer), events))
    }

    /// Registers every element matching `selector`.
    pub fn register_matching(&mut self, document: &Document, selector: &str) -> Result<usize> {
        let nodes = document.query_selector_all(selector)?;
        let mut targets = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let key = reveal_key(element.get_attribute(REVEAL_KEY_ATTR), &element.id(), index);
            // The observer callback reads the key back off the element.
            element
                .set_attribute(REVEAL_KEY_ATTR, key.as_str())
                .map_err(SiteError::from)?;
            targets.push((key, element));
        }

        let added = self.register(targets);
        info!("Observing {} reveal targets", added);
        Ok(added)
    }
}

/// Key for the `index`-th matched element: its `data-reveal` value, else its
/// id, else a positional key.
pub fn reveal_key(data_attr: Option<String>, id: &str, index: u32) -> RevealKey {
    if let Some(key) = data_attr.filter(|k| !k.is_empty()) {
        return RevealKey::from(key);
    }
    if !id.is_empty() {
        return RevealKey::from(id);
    }
    RevealKey::from(format!("reveal-{}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::StreamExt;

    #[derive(Default)]
    struct Calls {
        observed: Vec<String>,
        unobserved: Vec<String>,
        disconnects: usize,
    }

    #[derive(Clone, Default)]
    struct FakeObserver {
        calls: Rc<RefCell<Calls>>,
    }

    impl Observe for FakeObserver {
        type Target = &'static str;

        fn observe(&self, target: &&'static str) {
            self.calls.borrow_mut().observed.push(target.to_string());
        }

        fn unobserve(&self, target: &&'static str) {
            self.calls.borrow_mut().unobserved.push(target.to_string());
        }

        fn disconnect(&self) {
            self.calls.borrow_mut().disconnects += 1;
        }
    }

    fn controller(threshold: f64) -> (RevealController<FakeObserver>, RevealEvents, Rc<RefCell<Calls>>) {
        let (tracker, events) = RevealTracker::shared(threshold);
        let observer = FakeObserver::default();
        let calls = observer.calls.clone();
        (RevealController::new(tracker, observer), events, calls)
    }

    fn target(key: &'static str) -> (RevealKey, &'static str) {
        (RevealKey::from(key), key)
    }

    fn sample(key: &'static str, intersecting: bool, ratio: f64) -> (IntersectionSample, &'static str) {
        (
            IntersectionSample {
                key: RevealKey::from(key),
                intersecting,
                ratio,
            },
            key,
        )
    }

    fn drain(events: RevealEvents) -> Vec<String> {
        block_on(events.map(|Revealed(key)| key.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn registered_targets_start_hidden() {
        let (mut reveal, _events, calls) = controller(0.1);
        assert_eq!(reveal.register([target("a"), target("b")]), 2);
        assert!(!reveal.is_revealed("a"));
        assert!(!reveal.is_revealed("b"));
        assert_eq!(calls.borrow().observed, vec!["a", "b"]);
    }

    #[test]
    fn reveal_waits_for_threshold() {
        let (mut reveal, _events, _calls) = controller(0.1);
        reveal.register([target("a")]);

        reveal.deliver([sample("a", true, 0.05)]);
        assert!(!reveal.is_revealed("a"));

        reveal.deliver([sample("a", true, 0.1)]);
        assert!(reveal.is_revealed("a"));
    }

    #[test]
    fn ratio_without_intersection_does_not_count() {
        let (mut reveal, _events, _calls) = controller(0.1);
        reveal.register([target("a")]);
        reveal.deliver([sample("a", false, 0.5)]);
        assert!(!reveal.is_revealed("a"));
    }

    #[test]
    fn revealed_flag_never_resets_and_fires_once() {
        let (mut reveal, events, calls) = controller(0.1);
        reveal.register([target("a")]);

        reveal.deliver([sample("a", true, 0.6)]);
        reveal.deliver([sample("a", false, 0.0)]);
        assert!(reveal.is_revealed("a"));
        reveal.deliver([sample("a", true, 1.0)]);
        assert!(reveal.is_revealed("a"));

        assert_eq!(calls.borrow().unobserved, vec!["a"]);
        reveal.dispose();
        assert_eq!(drain(events), vec!["a"]);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let (mut reveal, events, calls) = controller(0.1);
        assert_eq!(reveal.register([target("a"), target("a")]), 1);
        assert_eq!(reveal.register([target("a")]), 0);
        assert_eq!(calls.borrow().observed, vec!["a"]);

        reveal.deliver([sample("a", true, 1.0), sample("a", true, 1.0)]);
        drop(reveal);
        assert_eq!(drain(events), vec!["a"]);
    }

    #[test]
    fn samples_for_unknown_targets_are_ignored() {
        let (mut reveal, _events, calls) = controller(0.1);
        reveal.deliver([sample("ghost", true, 1.0)]);
        assert!(!reveal.is_revealed("ghost"));
        assert!(calls.borrow().unobserved.is_empty());
    }

    #[test]
    fn on_screen_target_reveals_before_off_screen_one() {
        let (mut reveal, events, _calls) = controller(0.1);
        reveal.register([target("a"), target("b")]);

        reveal.deliver([sample("a", true, 1.0), sample("b", false, 0.0)]);
        assert!(reveal.is_revealed("a"));
        assert!(!reveal.is_revealed("b"));

        // Scroll: a leaves, b enters.
        reveal.deliver([sample("a", false, 0.0), sample("b", true, 0.4)]);
        assert!(reveal.is_revealed("a"));
        assert!(reveal.is_revealed("b"));

        reveal.dispose();
        assert_eq!(drain(events), vec!["a", "b"]);
    }

    #[test]
    fn dispose_before_register_releases_observer() {
        let (mut reveal, events, calls) = controller(0.1);
        reveal.dispose();
        assert!(!reveal.is_active());
        assert_eq!(calls.borrow().disconnects, 1);
        assert!(drain(events).is_empty());
    }

    #[test]
    fn dispose_is_idempotent_and_drop_does_not_release_twice() {
        let (mut reveal, _events, calls) = controller(0.1);
        reveal.register([target("a")]);
        reveal.dispose();
        reveal.dispose();
        drop(reveal);
        assert_eq!(calls.borrow().disconnects, 1);
    }

    #[test]
    fn drop_releases_observer() {
        let (reveal, _events, calls) = controller(0.1);
        drop(reveal);
        assert_eq!(calls.borrow().disconnects, 1);
    }

    #[test]
    fn register_after_dispose_observes_nothing() {
        let (mut reveal, _events, calls) = controller(0.1);
        reveal.dispose();
        assert_eq!(reveal.register([target("a")]), 0);
        assert!(calls.borrow().observed.is_empty());
    }

    #[test]
    fn tracker_keeps_flag_when_nobody_listens() {
        let (mut tracker, events) = RevealTracker::new(0.1);
        drop(events);
        assert!(tracker.register(RevealKey::from("a")));
        assert!(!tracker.register(RevealKey::from("a")));
        assert!(tracker.evaluate(&sample("a", true, 1.0).0));
        assert!(tracker.is_revealed("a"));
    }

    #[test]
    fn observer_callback_path_unobserves_only_new_reveals() {
        let (tracker, events) = RevealTracker::shared(0.1);
        let observer = FakeObserver::default();
        tracker.borrow_mut().register(RevealKey::from("a"));
        tracker.borrow_mut().register(RevealKey::from("b"));

        let first = apply_samples(
            &tracker,
            &observer,
            [sample("a", true, 0.3), sample("b", true, 0.05)],
        );
        assert_eq!(first, 1);

        let second = apply_samples(
            &tracker,
            &observer,
            [sample("a", true, 1.0), sample("b", true, 0.2), sample("ghost", true, 1.0)],
        );
        assert_eq!(second, 1);

        assert_eq!(observer.calls.borrow().unobserved, vec!["a", "b"]);
        tracker.borrow_mut().close();
        assert_eq!(drain(events), vec!["a", "b"]);
    }

    #[test]
    fn samples_after_dispose_are_dropped() {
        let (mut reveal, _events, calls) = controller(0.1);
        reveal.register([target("a")]);
        reveal.dispose();
        assert_eq!(reveal.deliver([sample("a", true, 1.0)]), 0);
        assert!(!reveal.is_revealed("a"));
        assert!(calls.borrow().unobserved.is_empty());
    }

    #[test]
    fn reveal_key_prefers_data_attribute() {
        let key = reveal_key(Some("karma".to_string()), "karma-section", 3);
        assert_eq!(key.as_str(), "karma");
    }

    #[test]
    fn reveal_key_falls_back_to_id_for_missing_or_empty_attribute() {
        assert_eq!(reveal_key(None, "principles", 0).as_str(), "principles");
        assert_eq!(reveal_key(Some(String::new()), "principles", 0).as_str(), "principles");
    }

    #[test]
    fn reveal_key_falls_back_to_position() {
        assert_eq!(reveal_key(None, "", 4).as_str(), "reveal-4");
        assert_eq!(reveal_key(Some(String::new()), "", 0).as_str(), "reveal-0");
    }
}
