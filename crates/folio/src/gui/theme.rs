use crate::config::Accent;
use crate::gui::sections;
use folio_core::SectionId;
use folio_core::nav::{MOBILE_CTA_DELAY, NAV_LINKS, mobile_link_delay};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Entrance transition of revealed content.
const REVEAL_MS: u64 = 700;
/// Step between consecutive header items (badge, title, subtitle, ...).
const HEADER_STEP_MS: u64 = 100;
pub const HEADER_ITEMS: usize = 8;

pub struct ThemeColors {
    pub accent: Srgba<f64>,
    pub glow: Srgba<f64>,
    pub card: Srgba<f64>,
    pub text: Srgba<f64>,
    pub muted: Srgba<f64>,
}

impl ThemeColors {
    pub fn new(accent: &Accent, context: &gtk::StyleContext) -> Self {
        let (r, g, b) = accent.components();
        Self {
            accent: Srgba::new(r, g, b, 1.0),
            glow: Srgba::new(r, g, b, 0.2),
            card: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.09, 0.09, 0.11, 0.9),
                Some(0.9),
            ),
            text: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            muted: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.6, 0.6, 0.65, 1.0),
                Some(0.6),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

/// Application stylesheet, re-generated when the accent changes.
pub struct Theme {
    provider: gtk::CssProvider,
}

impl Theme {
    pub fn install(accent: &Accent) -> Self {
        let provider = gtk::CssProvider::new();
        provider.load_from_data(&stylesheet(accent));

        if let Some(display) = gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        Self { provider }
    }

    pub fn apply(&self, accent: &Accent) {
        self.provider.load_from_data(&stylesheet(accent));
    }
}

pub fn stylesheet(accent: &Accent) -> String {
    let mut css = format!(
        "
@define-color folio_accent {accent};
@define-color folio_dark #0a0a0c;

.folio-window, .page {{
    background-color: @folio_dark;
    color: white;
}}

.section {{
    padding: 96px 48px;
}}

.reveal-item {{
    opacity: 0;
    transform: translateY(24px);
    transition: opacity {REVEAL_MS}ms ease-out, transform {REVEAL_MS}ms ease-out;
}}

.revealed .reveal-item {{
    opacity: 1;
    transform: none;
}}

.accent {{
    color: @folio_accent;
}}

.eyebrow {{
    color: @folio_accent;
    font-weight: 600;
    letter-spacing: 3px;
}}

.heading {{
    font-size: 40px;
    font-weight: 800;
}}

.muted {{
    color: alpha(white, 0.6);
}}

.card {{
    background-color: alpha(white, 0.04);
    border: 1px solid alpha(white, 0.08);
    border-radius: 12px;
    padding: 24px;
    transition: border-color 300ms, box-shadow 300ms, opacity {REVEAL_MS}ms ease-out, transform {REVEAL_MS}ms ease-out;
}}

.card.hovered {{
    border-color: alpha(@folio_accent, 0.5);
    box-shadow: 0 0 24px alpha(@folio_accent, 0.3);
}}

.project-details {{
    opacity: 0;
    transition: opacity 300ms;
}}

.card.hovered .project-details {{
    opacity: 1;
}}

.cta {{
    background: @folio_accent;
    color: white;
    font-weight: 600;
    border-radius: 8px;
    padding: 12px 28px;
}}

.nav-bar {{
    background-color: transparent;
    padding: 16px 48px;
    transition: background-color 500ms;
}}

.nav-bar.nav-scrolled {{
    background-color: alpha(@folio_dark, 0.9);
    border-bottom: 1px solid alpha(white, 0.05);
}}

.mobile-menu {{
    background-color: alpha(@folio_dark, 0.95);
    opacity: 0;
    transition: opacity 500ms;
}}

.mobile-menu.menu-open {{
    opacity: 1;
}}

.menu-link {{
    font-size: 24px;
    font-weight: 600;
    opacity: 0;
    transform: translateY(16px);
    transition: opacity 500ms, transform 500ms;
}}

.menu-open .menu-link {{
    opacity: 1;
    transform: none;
}}

.hero {{
    min-height: 720px;
}}

.accent-line {{
    background-color: @folio_accent;
    min-height: 4px;
}}

.heading-small {{
    font-weight: 700;
}}

.project-cover {{
    background-color: alpha(@folio_accent, 0.08);
    border-radius: 8px;
}}

.chip {{
    background-color: alpha(white, 0.06);
    border-radius: 999px;
    padding: 2px 10px;
    font-size: 12px;
}}

.footer {{
    padding: 48px;
    border-top: 1px solid alpha(white, 0.05);
}}

.form-ack {{
    color: #4ade80;
}}

.form-error {{
    color: @folio_accent;
}}
"
    );

    for i in 0..HEADER_ITEMS {
        let _ = writeln!(
            css,
            ".header-item-{i} {{ transition-delay: {}ms; }}",
            i as u64 * HEADER_STEP_MS
        );
    }

    for id in SectionId::iter() {
        let Some(stagger) = id.stagger() else {
            continue;
        };
        for i in 0..sections::item_count(id) {
            let _ = writeln!(
                css,
                ".{}-item-{i} {{ transition-delay: {}ms; }}",
                id.anchor(),
                stagger.delay(i).as_millis()
            );
        }
    }

    for i in 0..NAV_LINKS.len() {
        let _ = writeln!(
            css,
            ".menu-link-{i} {{ transition-delay: {}ms; }}",
            mobile_link_delay(i).as_millis()
        );
    }
    let _ = writeln!(
        css,
        ".menu-cta {{ transition-delay: {}ms; }}",
        MOBILE_CTA_DELAY.as_millis()
    );

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_accent() {
        let css = stylesheet(&Accent::CRIMSON);
        assert!(css.contains("@define-color folio_accent #dc143c;"));
    }

    #[test]
    fn test_stylesheet_stagger_rules() {
        let css = stylesheet(&Accent::default());
        let delay = |class: &str, ms: u64| {
            css.contains(&format!(".{class} {{ transition-delay: {ms}ms; }}"))
        };
        assert!(delay("skills-item-0", 300));
        assert!(delay("skills-item-11", 850));
        assert!(delay("services-item-5", 800));
        assert!(delay("projects-item-3", 750));
        assert!(!css.contains(".projects-item-4 "));
        assert!(delay("menu-link-4", 200));
        assert!(delay("menu-cta", 250));
    }
}
