use crate::hover::HoverTracker;
use crate::observer::{IntersectionObserver, Region, Threshold};
use crate::reveal::RevealController;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::rc::Rc;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Page anchors, in page order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[strum(to_string = "home", serialize = "#home")]
    Home,
    #[strum(to_string = "skills", serialize = "#skills")]
    Skills,
    #[strum(to_string = "services", serialize = "#services")]
    Services,
    #[strum(to_string = "projects", serialize = "#projects")]
    Projects,
    #[strum(to_string = "contact", serialize = "#contact")]
    Contact,
}

/// Per-item entrance delay: `base + index * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn from_millis(base: u64, step: u64) -> Self {
        Self {
            base: Duration::from_millis(base),
            step: Duration::from_millis(step),
        }
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }
}

impl SectionId {
    pub fn anchor(&self) -> &'static str {
        self.into()
    }

    /// The hero is shown on mount rather than on scroll.
    pub fn is_observed(&self) -> bool {
        !matches!(self, Self::Home)
    }

    pub fn default_threshold(&self) -> Threshold {
        match self {
            Self::Home => Threshold::ZERO,
            Self::Skills => Threshold::new(0.2).unwrap_or_default(),
            Self::Services | Self::Projects | Self::Contact => Threshold::default(),
        }
    }

    pub fn stagger(&self) -> Option<Stagger> {
        match self {
            Self::Skills => Some(Stagger::from_millis(300, 50)),
            Self::Services => Some(Stagger::from_millis(300, 100)),
            Self::Projects => Some(Stagger::from_millis(300, 150)),
            Self::Home | Self::Contact => None,
        }
    }
}

/// A mounted page region: its reveal flag and hovered card.
#[derive(Debug)]
pub struct Section {
    id: SectionId,
    reveal: RevealController,
    pub hover: HoverTracker,
}

impl Section {
    /// Builds the section's controller and starts observing it. The hero is
    /// revealed straight away.
    pub fn mount(
        id: SectionId,
        region: Rc<dyn Region>,
        threshold: Threshold,
        observer: Option<&dyn IntersectionObserver>,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self {
        let reveal = RevealController::builder()
            .label(id.anchor())
            .threshold(threshold)
            .on_reveal(on_reveal)
            .build(region);

        if id.is_observed() {
            reveal.attach(observer);
        } else {
            reveal.reveal_now();
        }

        Self {
            id,
            reveal,
            hover: HoverTracker::default(),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    pub fn unmount(&self) {
        self.reveal.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::observer::Viewport;
    use std::cell::Cell;
    use strum::IntoEnumIterator;

    #[test]
    fn test_section_id_parsing() {
        let cases = vec![
            ("\"skills\"", SectionId::Skills),
            ("\"Skills\"", SectionId::Skills),
            ("\"#projects\"", SectionId::Projects),
            ("\"CONTACT\"", SectionId::Contact),
        ];

        for (json, expected) in cases {
            let deserialized: SectionId = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!("footer".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_anchors_in_page_order() {
        let anchors: Vec<&str> = SectionId::iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["home", "skills", "services", "projects", "contact"]
        );
        assert_eq!(SectionId::Services.to_string(), "services");
    }

    #[test]
    fn test_default_thresholds() {
        assert_eq!(SectionId::Skills.default_threshold().get(), 0.2);
        assert_eq!(SectionId::Contact.default_threshold().get(), 0.1);
    }

    #[test]
    fn test_stagger_delays() {
        let ms = |id: SectionId, i| id.stagger().unwrap().delay(i).as_millis();
        assert_eq!(ms(SectionId::Skills, 0), 300);
        assert_eq!(ms(SectionId::Skills, 11), 850);
        assert_eq!(ms(SectionId::Services, 5), 800);
        assert_eq!(ms(SectionId::Projects, 3), 750);
        assert!(SectionId::Contact.stagger().is_none());
    }

    #[test]
    fn test_hero_is_visible_on_mount() {
        let viewport = Viewport::new();
        let revealed = Rc::new(Cell::new(false));
        let r = revealed.clone();
        let hero = Section::mount(
            SectionId::Home,
            Rc::new(Rect::default()),
            SectionId::Home.default_threshold(),
            Some(&viewport),
            move || r.set(true),
        );
        assert!(hero.is_visible());
        assert!(revealed.get());
        assert_eq!(viewport.pending(), 0);
    }

    #[test]
    fn test_section_reveals_on_scroll() {
        let viewport = Viewport::new();
        let skills = Section::mount(
            SectionId::Skills,
            Rc::new(Rect::new(0.0, 900.0, 1200.0, 800.0)),
            SectionId::Skills.default_threshold(),
            Some(&viewport),
            || {},
        );
        assert!(!skills.is_visible());

        viewport.update(Rect::new(0.0, 0.0, 1200.0, 900.0));
        assert!(!skills.is_visible());

        viewport.update(Rect::new(0.0, 400.0, 1200.0, 900.0));
        assert!(skills.is_visible());
    }

    #[test]
    fn test_unmount_before_reveal() {
        let viewport = Viewport::new();
        let contact = Section::mount(
            SectionId::Contact,
            Rc::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            SectionId::Contact.default_threshold(),
            Some(&viewport),
            || {},
        );
        contact.unmount();
        viewport.update(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!contact.is_visible());
    }
}
