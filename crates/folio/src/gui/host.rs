//! GTK side of viewport observation: widget bounds as regions, and scoped
//! signal subscriptions.

use folio_core::{Rect, Region};
use gtk::prelude::*;
use gtk4 as gtk;

/// A widget's allocation in the coordinates of the scrolled page.
pub struct WidgetRegion {
    widget: gtk::Widget,
    page: gtk::Widget,
}

impl WidgetRegion {
    pub fn new(widget: &impl IsA<gtk::Widget>, page: &impl IsA<gtk::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
            page: page.clone().upcast(),
        }
    }
}

impl Region for WidgetRegion {
    fn bounds(&self) -> Option<Rect> {
        bounds_in(&self.widget, &self.page)
    }
}

/// Bounds of `widget` relative to `target`; `None` until it has a real size.
pub fn bounds_in(widget: &impl IsA<gtk::Widget>, target: &impl IsA<gtk::Widget>) -> Option<Rect> {
    widget
        .compute_bounds(target)
        .filter(|b| b.width() > 0.0 && b.height() > 0.0)
        .map(|b| {
            Rect::new(
                b.x() as f64,
                b.y() as f64,
                b.width() as f64,
                b.height() as f64,
            )
        })
}

/// Signal handlers on an adjustment, disconnected when dropped.
pub struct ScrollSubscription {
    adjustment: gtk::Adjustment,
    handlers: Vec<glib::SignalHandlerId>,
}

impl ScrollSubscription {
    /// Calls `on_change` whenever the scroll offset or the page geometry
    /// changes.
    pub fn new(adjustment: &gtk::Adjustment, on_change: impl Fn() + Clone + 'static) -> Self {
        let on_value = on_change.clone();
        let handlers = vec![
            adjustment.connect_value_changed(move |_| on_value()),
            adjustment.connect_changed(move |_| on_change()),
        ];
        Self {
            adjustment: adjustment.clone(),
            handlers,
        }
    }

    pub fn adjustment(&self) -> &gtk::Adjustment {
        &self.adjustment
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for id in self.handlers.drain(..) {
            self.adjustment.disconnect(id);
        }
        log::debug!("Scroll subscription released");
    }
}
