//! Host-independent state for the folio page: the one-shot scroll reveal,
//! navigation and menu flags, hero tilt, card hover, the contact form and the
//! static page content.

pub mod contact;
pub mod content;
pub mod geometry;
pub mod hero;
pub mod hover;
pub mod macros;
pub mod nav;
pub mod observer;
pub mod reveal;
pub mod section;

pub use geometry::{Point, Rect};
pub use observer::{IntersectionObserver, Region, Subscription, Threshold, Viewport};
pub use reveal::{RevealController, RevealState};
pub use section::{Section, SectionId};
