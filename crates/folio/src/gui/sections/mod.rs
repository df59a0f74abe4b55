//! Widget trees for the page sections. Builders only create widgets and wire
//! signals to [`AppMsg`]s; all state lives in the app model.

use crate::config::Accent;
use crate::gui::app::{AppModel, AppMsg};
use folio_core::SectionId;
use folio_core::content::{self, Icon, Profile};
use folio_core::hero::HeroPointer;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod services;
pub mod skills;

pub use contact::FormWidgets;
pub use nav::NavWidgets;

pub type Sender = ComponentSender<AppModel>;

/// Number of staggered items in a section's grid.
pub fn item_count(id: SectionId) -> usize {
    match id {
        SectionId::Skills => content::SKILLS.len(),
        SectionId::Services => content::SERVICES.len(),
        SectionId::Projects => content::PROJECTS.len(),
        SectionId::Home | SectionId::Contact => 0,
    }
}

pub struct PageWidgets {
    pub roots: Vec<(SectionId, gtk::Box)>,
    pub service_cards: Vec<gtk::Box>,
    pub project_cards: Vec<gtk::Box>,
    pub hero_area: gtk::DrawingArea,
    pub form: FormWidgets,
}

impl PageWidgets {
    pub fn root(&self, id: SectionId) -> Option<&gtk::Box> {
        self.roots.iter().find(|(s, _)| *s == id).map(|(_, w)| w)
    }

    /// Cards that react to hover, if the section has any.
    pub fn cards(&self, id: SectionId) -> &[gtk::Box] {
        match id {
            SectionId::Services => &self.service_cards,
            SectionId::Projects => &self.project_cards,
            _ => &[],
        }
    }
}

/// Builds every section into `page`, in page order, followed by the footer.
pub fn build(
    page: &gtk::Box,
    profile: &Profile,
    hero_state: Rc<RefCell<HeroPointer>>,
    accent: Rc<Cell<Accent>>,
    sender: &Sender,
) -> PageWidgets {
    let (home, hero_area) = hero::build(profile, hero_state, accent, sender);
    let skills = skills::build();
    let (services, service_cards) = services::build(sender);
    let (projects, project_cards) = projects::build(sender);
    let (contact, form) = contact::build(profile, sender);

    let roots = vec![
        (SectionId::Home, home),
        (SectionId::Skills, skills),
        (SectionId::Services, services),
        (SectionId::Projects, projects),
        (SectionId::Contact, contact),
    ];
    for (_, root) in &roots {
        page.append(root);
    }
    page.append(&footer::build(profile, sender));

    PageWidgets {
        roots,
        service_cards,
        project_cards,
        hero_area,
        form,
    }
}

pub fn section_root(id: SectionId) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 32);
    root.set_widget_name(id.anchor());
    root.add_css_class("section");
    root
}

pub fn label(text: &str, classes: &[&str]) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.set_wrap(true);
    for class in classes {
        label.add_css_class(class);
    }
    label
}

pub fn reveal_item(widget: &impl IsA<gtk::Widget>, delay_class: &str) {
    widget.add_css_class("reveal-item");
    widget.add_css_class(delay_class);
}

pub fn header_item(widget: &impl IsA<gtk::Widget>, index: usize) {
    reveal_item(widget, &format!("header-item-{index}"));
}

pub fn grid_item(widget: &impl IsA<gtk::Widget>, id: SectionId, index: usize) {
    reveal_item(widget, &format!("{}-item-{index}", id.anchor()));
}

/// Eyebrow, two-tone title and subtitle: header items 0, 1 and 2.
pub fn section_header(eyebrow: &str, title: &str, highlight: &str, subtitle: &str) -> gtk::Box {
    let header = gtk::Box::new(gtk::Orientation::Vertical, 12);
    header.set_halign(gtk::Align::Center);

    let eyebrow = label(&eyebrow.to_uppercase(), &["eyebrow"]);
    header_item(&eyebrow, 0);

    let heading = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    heading.set_halign(gtk::Align::Center);
    heading.append(&label(title, &["heading"]));
    heading.append(&label(highlight, &["heading", "accent"]));
    header_item(&heading, 1);

    let subtitle = label(subtitle, &["muted"]);
    subtitle.set_max_width_chars(64);
    subtitle.set_justify(gtk::Justification::Center);
    header_item(&subtitle, 2);

    header.append(&eyebrow);
    header.append(&heading);
    header.append(&subtitle);
    header
}

pub fn icon_name(icon: Icon) -> &'static str {
    match icon {
        Icon::ShoppingBag | Icon::ShoppingCart => "system-software-install-symbolic",
        Icon::Code => "utilities-terminal-symbolic",
        Icon::Layers => "view-grid-symbolic",
        Icon::Globe => "web-browser-symbolic",
        Icon::Cpu => "computer-symbolic",
        Icon::Sparkles => "starred-symbolic",
        Icon::Workflow => "emblem-synchronizing-symbolic",
        Icon::Zap => "weather-storm-symbolic",
        Icon::Bot => "applications-science-symbolic",
        Icon::Search => "system-search-symbolic",
        Icon::Settings => "emblem-system-symbolic",
        Icon::Mail => "mail-unread-symbolic",
        Icon::Phone => "call-start-symbolic",
        Icon::MapPin => "mark-location-symbolic",
        Icon::Facebook | Icon::Github | Icon::Linkedin | Icon::Twitter => "emblem-shared-symbolic",
    }
}

pub fn icon(icon: Icon, pixel_size: i32) -> gtk::Image {
    let image = gtk::Image::from_icon_name(icon_name(icon));
    image.set_pixel_size(pixel_size);
    image.set_tooltip_text(Some(icon.name()));
    image.add_css_class("accent");
    image
}

/// Button for a link: in-page anchors jump within the page, anything else is
/// handed to the desktop's URI handler.
pub fn link(text: &str, url: &str, sender: &Sender) -> gtk::Widget {
    if let Some(anchor) = url.strip_prefix('#') {
        let button = gtk::Button::with_label(text);
        button.add_css_class("flat");
        match anchor.parse::<SectionId>() {
            Ok(target) => {
                let sender = sender.clone();
                button.connect_clicked(move |_| sender.input(AppMsg::NavClicked(target)));
            }
            Err(_) => button.set_sensitive(false),
        }
        button.upcast()
    } else {
        let button = gtk::LinkButton::with_label(url, text);
        button.add_css_class("flat");
        button.upcast()
    }
}

pub fn nav_button(text: &str, target: SectionId, classes: &[&str], sender: &Sender) -> gtk::Button {
    let button = gtk::Button::with_label(text);
    for class in classes {
        button.add_css_class(class);
    }
    let sender = sender.clone();
    button.connect_clicked(move |_| sender.input(AppMsg::NavClicked(target)));
    button
}

/// Hover enter/leave on a card, reported with the card's index.
pub fn track_hover(card: &gtk::Box, section: SectionId, index: usize, sender: &Sender) {
    let motion = gtk::EventControllerMotion::new();
    let s = sender.clone();
    motion.connect_enter(move |_, _, _| s.input(AppMsg::HoverEnter(section, index)));
    let s = sender.clone();
    motion.connect_leave(move |_| s.input(AppMsg::HoverLeave(section, index)));
    card.add_controller(motion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_counts() {
        assert_eq!(item_count(SectionId::Skills), 12);
        assert_eq!(item_count(SectionId::Services), 6);
        assert_eq!(item_count(SectionId::Projects), 4);
        assert_eq!(item_count(SectionId::Contact), 0);
    }
}
