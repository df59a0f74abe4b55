use crate::section::SectionId;
use std::time::Duration;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

/// Delay of the mobile "Hire Me" button, after the links.
pub const MOBILE_CTA_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        target: SectionId::Home,
    },
    NavLink {
        label: "Skills",
        target: SectionId::Skills,
    },
    NavLink {
        label: "Services",
        target: SectionId::Services,
    },
    NavLink {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavLink {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub const HIRE_ME: NavLink = NavLink {
    label: "Hire Me",
    target: SectionId::Contact,
};

/// Stagger for the `index`-th link of the open mobile menu.
pub fn mobile_link_delay(index: usize) -> Duration {
    Duration::from_millis(50 * index as u64)
}

/// `offset > threshold`, re-evaluated on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` when the flag changed.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A link was picked: close the menu and report where to go.
    pub fn follow(&mut self, link: &NavLink) -> SectionId {
        self.close();
        link.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_without_hysteresis() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.update(50.0));
        assert!(!tracker.is_scrolled());

        assert!(tracker.update(150.0));
        assert!(tracker.is_scrolled());

        assert!(tracker.update(50.0));
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_scroll_boundary_is_exclusive() {
        let mut tracker = ScrollTracker::default();
        tracker.update(100.0);
        assert!(!tracker.is_scrolled());
        tracker.update(100.5);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn test_link_click_closes_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        let target = menu.follow(&NAV_LINKS[2]);
        assert_eq!(target, SectionId::Services);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_and_backdrop_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_mobile_link_delays() {
        let delays: Vec<u128> = (0..NAV_LINKS.len())
            .map(|i| mobile_link_delay(i).as_millis())
            .collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200]);
        assert!(MOBILE_CTA_DELAY > mobile_link_delay(NAV_LINKS.len() - 1));
    }
}
