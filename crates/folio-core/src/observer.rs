//! Viewport intersection observation.
//!
//! [`IntersectionObserver`] is the capability the reveal controller needs from
//! its host: "tell me once when this region is at least `threshold` visible".
//! [`Viewport`] is a host-agnostic implementation that the UI layer feeds with
//! the currently visible rectangle on every scroll or resize.

use crate::geometry::Rect;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Fraction of a region that must be visible to count as entered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Deref, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("Threshold must be within 0.0..=1.0, got {0}")]
    OutOfRange(f64),
}

impl Threshold {
    pub const ZERO: Self = Self(0.0);

    pub fn new(fraction: f64) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(ThresholdError::OutOfRange(fraction))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    pub fn is_met(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.1)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Something with a position on the page. `None` while it has no layout yet.
pub trait Region {
    fn bounds(&self) -> Option<Rect>;
}

impl Region for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Region for Cell<Option<Rect>> {
    fn bounds(&self) -> Option<Rect> {
        self.get()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObserveError {
    #[error("Viewport intersection is not supported by this host")]
    Unsupported,
}

pub type EnterCallback = Box<dyn FnMut()>;

pub trait IntersectionObserver {
    /// Registers a one-shot enter notification for `region`.
    ///
    /// Delivery stops once the callback has fired or the returned
    /// [`Subscription`] is disconnected or dropped.
    fn observe(
        &self,
        region: Rc<dyn Region>,
        threshold: Threshold,
        on_enter: EnterCallback,
    ) -> Result<Subscription, ObserveError>;
}

/// Guard for a live observation. Dropping it disconnects.
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

/// The observer-side view of a [`Subscription`].
#[derive(Debug, Clone)]
pub struct SubscriptionHandle {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn handle(&self) -> SubscriptionHandle {
        SubscriptionHandle {
            active: self.active.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn disconnect(&self) {
        if self.active.replace(false) {
            log::debug!("Observation disconnected");
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl SubscriptionHandle {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        self.active.set(false);
    }
}

/// Host without an intersection primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl IntersectionObserver for Unsupported {
    fn observe(
        &self,
        _region: Rc<dyn Region>,
        _threshold: Threshold,
        _on_enter: EnterCallback,
    ) -> Result<Subscription, ObserveError> {
        Err(ObserveError::Unsupported)
    }
}

struct Observation {
    region: Rc<dyn Region>,
    threshold: Threshold,
    handle: SubscriptionHandle,
    on_enter: EnterCallback,
}

impl Observation {
    fn is_due(&self, visible: &Rect) -> bool {
        self.region
            .bounds()
            .is_some_and(|b| self.threshold.is_met(b.visible_ratio(visible)))
    }
}

/// Registry of one-shot observations driven by the host's visible rectangle.
#[derive(Default)]
pub struct Viewport {
    observations: RefCell<Vec<Observation>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of observations still waiting to fire.
    pub fn pending(&self) -> usize {
        self.observations
            .borrow()
            .iter()
            .filter(|o| o.handle.is_active())
            .count()
    }

    /// Re-evaluates every live observation against `visible` and fires the
    /// ones that qualify. Returns how many fired.
    pub fn update(&self, visible: Rect) -> usize {
        // Callbacks run with the registry unborrowed so they may observe or
        // disconnect freely.
        let due: Vec<Observation> = {
            let mut observations = self.observations.borrow_mut();
            observations.retain(|o| o.handle.is_active());
            let (due, pending) = observations
                .drain(..)
                .partition(|o: &Observation| o.is_due(&visible));
            *observations = pending;
            due
        };

        let mut fired = 0;
        for mut observation in due {
            if !observation.handle.is_active() {
                continue;
            }
            observation.handle.cancel();
            (observation.on_enter)();
            fired += 1;
        }
        fired
    }
}

impl IntersectionObserver for Viewport {
    fn observe(
        &self,
        region: Rc<dyn Region>,
        threshold: Threshold,
        on_enter: EnterCallback,
    ) -> Result<Subscription, ObserveError> {
        let subscription = Subscription::new();
        self.observations.borrow_mut().push(Observation {
            region,
            threshold,
            handle: subscription.handle(),
            on_enter,
        });
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_at(offset: f64) -> Rect {
        Rect::new(0.0, offset, 1000.0, 800.0)
    }

    fn counter() -> (Rc<Cell<u32>>, EnterCallback) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(1.5), Err(ThresholdError::OutOfRange(1.5)));
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_deserialization() {
        let t: Threshold = serde_json::from_str("0.2").unwrap();
        assert_eq!(t.get(), 0.2);
        assert!(serde_json::from_str::<Threshold>("2.0").is_err());
    }

    #[test]
    fn test_zero_threshold_needs_overlap() {
        assert!(!Threshold::ZERO.is_met(0.0));
        assert!(Threshold::ZERO.is_met(0.01));
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let viewport = Viewport::new();
        let region: Rc<dyn Region> = Rc::new(Rect::new(0.0, 1000.0, 1000.0, 1000.0));
        let (count, cb) = counter();
        let _sub = viewport
            .observe(region, Threshold::new(0.2).unwrap(), cb)
            .unwrap();

        // 10% visible: below threshold
        assert_eq!(viewport.update(viewport_at(300.0)), 0);
        assert_eq!(count.get(), 0);

        // 30% visible
        assert_eq!(viewport.update(viewport_at(500.0)), 1);
        assert_eq!(count.get(), 1);

        assert_eq!(viewport.update(viewport_at(1000.0)), 0);
        assert_eq!(count.get(), 1);
        assert_eq!(viewport.pending(), 0);
    }

    #[test]
    fn test_dropped_subscription_never_fires() {
        let viewport = Viewport::new();
        let region: Rc<dyn Region> = Rc::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let (count, cb) = counter();
        let sub = viewport.observe(region, Threshold::default(), cb).unwrap();
        drop(sub);

        assert_eq!(viewport.update(viewport_at(0.0)), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_region_without_layout_is_skipped() {
        let viewport = Viewport::new();
        let cell = Rc::new(Cell::new(None));
        let region: Rc<dyn Region> = cell.clone();
        let (count, cb) = counter();
        let _sub = viewport.observe(region, Threshold::default(), cb).unwrap();

        viewport.update(viewport_at(0.0));
        assert_eq!(count.get(), 0);
        assert_eq!(viewport.pending(), 1);

        cell.set(Some(Rect::new(0.0, 100.0, 500.0, 200.0)));
        viewport.update(viewport_at(0.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_callback_may_observe_again() {
        let viewport = Rc::new(Viewport::new());
        let inner_sub: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let (count, inner_cb) = counter();
        let mut inner_cb = Some(inner_cb);

        let v = viewport.clone();
        let slot = inner_sub.clone();
        let _outer = viewport
            .observe(
                Rc::new(Rect::new(0.0, 0.0, 10.0, 10.0)),
                Threshold::default(),
                Box::new(move || {
                    if let Some(cb) = inner_cb.take() {
                        let region: Rc<dyn Region> = Rc::new(Rect::new(0.0, 0.0, 10.0, 10.0));
                        *slot.borrow_mut() = v.observe(region, Threshold::default(), cb).ok();
                    }
                }),
            )
            .unwrap();

        assert_eq!(viewport.update(viewport_at(0.0)), 1);
        assert_eq!(viewport.pending(), 1);
        assert_eq!(viewport.update(viewport_at(0.0)), 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsupported_host() {
        let (_, cb) = counter();
        let region: Rc<dyn Region> = Rc::new(Rect::default());
        let err = Unsupported
            .observe(region, Threshold::default(), cb)
            .unwrap_err();
        assert_eq!(err, ObserveError::Unsupported);
    }
}
