//! One-shot "section entered the viewport" flag.

use crate::observer::{IntersectionObserver, ObserveError, Region, Subscription, Threshold};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

enum Link {
    Idle,
    Observing(Subscription),
    Closed,
}

struct Inner {
    label: String,
    state: RevealState,
    link: Link,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

/// Flips `Hidden -> Visible` the first time its region is seen at or above
/// the threshold, then stops observing for good.
pub struct RevealController {
    region: Rc<dyn Region>,
    threshold: Threshold,
    inner: Rc<RefCell<Inner>>,
}

impl RevealController {
    pub fn builder() -> RevealBuilder {
        RevealBuilder::default()
    }

    pub fn state(&self) -> RevealState {
        self.inner.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state() == RevealState::Visible
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.inner.borrow().link, Link::Observing(_))
    }

    /// Starts observing. With no primitive, or one that reports it is
    /// unsupported, the section is revealed immediately.
    ///
    /// Does nothing if already attached, revealed or detached.
    pub fn attach(&self, observer: Option<&dyn IntersectionObserver>) {
        {
            let inner = self.inner.borrow();
            if !matches!(inner.link, Link::Idle) || inner.state == RevealState::Visible {
                return;
            }
        }

        let Some(observer) = observer else {
            log::warn!(
                "No viewport observer for '{}', revealing immediately",
                self.inner.borrow().label
            );
            Self::reveal(&self.inner);
            return;
        };

        let weak = Rc::downgrade(&self.inner);
        let result = observer.observe(
            self.region.clone(),
            self.threshold,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::reveal(&inner);
                }
            }),
        );

        match result {
            Ok(subscription) => {
                let mut inner = self.inner.borrow_mut();
                // The observer may have fired synchronously inside observe().
                if inner.state == RevealState::Hidden && matches!(inner.link, Link::Idle) {
                    log::debug!("Observing '{}' at {}", inner.label, self.threshold);
                    inner.link = Link::Observing(subscription);
                }
            }
            Err(ObserveError::Unsupported) => {
                log::warn!(
                    "Viewport observation unsupported for '{}', revealing immediately",
                    self.inner.borrow().label
                );
                Self::reveal(&self.inner);
            }
        }
    }

    /// Reveals without observing, for regions shown on mount. Same one-shot
    /// rules as a viewport enter.
    pub fn reveal_now(&self) {
        Self::reveal(&self.inner);
    }

    /// Stops observing without touching the flag. Safe to call repeatedly.
    pub fn detach(&self) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            std::mem::replace(&mut inner.link, Link::Closed)
        };
        if let Link::Observing(subscription) = previous {
            subscription.disconnect();
        }
    }

    fn reveal(inner: &Rc<RefCell<Inner>>) {
        let (previous, listener) = {
            let mut inner = inner.borrow_mut();
            if inner.state == RevealState::Visible || matches!(inner.link, Link::Closed) {
                return;
            }
            inner.state = RevealState::Visible;
            log::debug!("Revealed '{}'", inner.label);
            (
                std::mem::replace(&mut inner.link, Link::Closed),
                inner.on_reveal.take(),
            )
        };
        drop(previous);
        if let Some(listener) = listener {
            listener();
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for RevealController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("RevealController")
            .field("label", &inner.label)
            .field("threshold", &self.threshold)
            .field("state", &inner.state)
            .finish()
    }
}

#[derive(Default)]
pub struct RevealBuilder {
    threshold: Threshold,
    label: Option<String>,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

impl RevealBuilder {
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Runs once, right after the flag turns visible.
    pub fn on_reveal(mut self, listener: impl FnOnce() + 'static) -> Self {
        self.on_reveal = Some(Box::new(listener));
        self
    }

    pub fn build(self, region: Rc<dyn Region>) -> RevealController {
        RevealController {
            region,
            threshold: self.threshold,
            inner: Rc::new(RefCell::new(Inner {
                label: self.label.unwrap_or_else(|| "section".to_string()),
                state: RevealState::Hidden,
                link: Link::Idle,
                on_reveal: self.on_reveal,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::observer::{EnterCallback, Unsupported, Viewport};
    use std::cell::Cell;

    /// Primitive that hands out callbacks and lets the test fire them at will,
    /// ignoring whether the subscription is still active.
    #[derive(Default)]
    struct ManualObserver {
        callbacks: RefCell<Vec<EnterCallback>>,
        fire_on_observe: bool,
    }

    impl ManualObserver {
        fn fire_all(&self) {
            for cb in self.callbacks.borrow_mut().iter_mut() {
                cb();
            }
        }
    }

    impl IntersectionObserver for ManualObserver {
        fn observe(
            &self,
            _region: Rc<dyn Region>,
            _threshold: Threshold,
            mut on_enter: EnterCallback,
        ) -> Result<Subscription, ObserveError> {
            if self.fire_on_observe {
                on_enter();
            }
            self.callbacks.borrow_mut().push(on_enter);
            Ok(Subscription::new())
        }
    }

    fn region() -> Rc<dyn Region> {
        Rc::new(Rect::new(0.0, 1000.0, 1000.0, 600.0))
    }

    fn counted(builder: RevealBuilder) -> (Rc<Cell<u32>>, RevealBuilder) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, builder.on_reveal(move || c.set(c.get() + 1)))
    }

    #[test]
    fn test_starts_hidden() {
        let controller = RevealController::builder().build(region());
        assert_eq!(controller.state(), RevealState::Hidden);
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_reveals_when_viewport_reaches_threshold() {
        let viewport = Viewport::new();
        let (count, builder) = counted(
            RevealController::builder()
                .label("skills")
                .threshold(Threshold::new(0.2).unwrap()),
        );
        let controller = builder.build(region());
        controller.attach(Some(&viewport));
        assert!(controller.is_observing());

        viewport.update(Rect::new(0.0, 0.0, 1000.0, 1050.0));
        assert!(!controller.is_visible());

        viewport.update(Rect::new(0.0, 300.0, 1000.0, 1000.0));
        assert!(controller.is_visible());
        assert!(!controller.is_observing());
        assert_eq!(count.get(), 1);

        // scrolling away never hides it again
        viewport.update(Rect::new(0.0, 0.0, 1000.0, 100.0));
        assert!(controller.is_visible());
    }

    #[test]
    fn test_double_enter_mutates_once() {
        let observer = ManualObserver::default();
        let (count, builder) = counted(RevealController::builder());
        let controller = builder.build(region());
        controller.attach(Some(&observer));

        observer.fire_all();
        observer.fire_all();

        assert!(controller.is_visible());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let viewport = Viewport::new();
        let controller = RevealController::builder().build(region());
        controller.attach(Some(&viewport));
        controller.attach(Some(&viewport));
        assert_eq!(viewport.pending(), 1);
    }

    #[test]
    fn test_detach_after_reveal_has_no_effect() {
        let observer = ManualObserver::default();
        let controller = RevealController::builder().build(region());
        controller.attach(Some(&observer));
        observer.fire_all();

        controller.detach();
        controller.detach();
        assert!(controller.is_visible());
    }

    #[test]
    fn test_no_mutation_after_detach() {
        let observer = ManualObserver::default();
        let (count, builder) = counted(RevealController::builder());
        let controller = builder.build(region());
        controller.attach(Some(&observer));
        controller.detach();

        observer.fire_all();
        assert!(!controller.is_visible());
        assert_eq!(count.get(), 0);

        controller.attach(Some(&observer));
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_fail_open_without_observer() {
        let (count, builder) = counted(RevealController::builder());
        let controller = builder.build(region());
        controller.attach(None);
        assert!(controller.is_visible());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_fail_open_when_unsupported() {
        let controller = RevealController::builder().build(region());
        controller.attach(Some(&Unsupported));
        assert!(controller.is_visible());
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_synchronous_fire_during_observe() {
        let observer = ManualObserver {
            fire_on_observe: true,
            ..Default::default()
        };
        let controller = RevealController::builder().build(region());
        controller.attach(Some(&observer));
        assert!(controller.is_visible());
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_drop_disconnects() {
        let viewport = Viewport::new();
        let controller = RevealController::builder().build(region());
        controller.attach(Some(&viewport));
        assert_eq!(viewport.pending(), 1);

        drop(controller);
        assert_eq!(viewport.pending(), 0);
        assert_eq!(viewport.update(Rect::new(0.0, 1000.0, 1000.0, 600.0)), 0);
    }
}
