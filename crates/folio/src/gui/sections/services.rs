use super::{
    Sender, grid_item, icon, label, nav_button, section_header, section_root, track_hover,
};
use folio_core::SectionId;
use folio_core::content::{SERVICES, Service};
use gtk::prelude::*;
use gtk4 as gtk;

const PITCH: &str = "Have a project in mind? Let's discuss how I can help.";
const CONSULT: &str = "Get a Free Consultation";

pub fn build(sender: &Sender) -> (gtk::Box, Vec<gtk::Box>) {
    let root = section_root(SectionId::Services);

    root.append(&section_header(
        "What I Offer",
        "My",
        "Services",
        "From e-commerce stores to intelligent automation, I provide end-to-end solutions \
         that help businesses grow and succeed online.",
    ));

    let grid = gtk::FlowBox::new();
    grid.set_selection_mode(gtk::SelectionMode::None);
    grid.set_homogeneous(true);
    grid.set_max_children_per_line(3);
    grid.set_row_spacing(24);
    grid.set_column_spacing(24);

    let cards: Vec<gtk::Box> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let card = service_card(service);
            grid_item(&card, SectionId::Services, i);
            track_hover(&card, SectionId::Services, i, sender);
            grid.insert(&card, -1);
            card
        })
        .collect();
    root.append(&grid);

    let cta = gtk::Box::new(gtk::Orientation::Vertical, 12);
    cta.set_halign(gtk::Align::Center);
    let pitch = label(PITCH, &["muted"]);
    let consult = nav_button(CONSULT, SectionId::Contact, &["cta"], sender);
    cta.append(&pitch);
    cta.append(&consult);
    root.append(&cta);

    (root, cards)
}

fn service_card(service: &Service) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 12);
    card.add_css_class("card");

    let badge = icon(service.icon, 40);
    badge.set_halign(gtk::Align::Start);
    card.append(&badge);

    let title = label(service.title, &["title-3"]);
    title.set_xalign(0.0);
    card.append(&title);

    let description = label(service.description, &["muted"]);
    description.set_xalign(0.0);
    card.append(&description);

    let features = gtk::Box::new(gtk::Orientation::Vertical, 6);
    for feature in service.highlights() {
        let row = label(&format!("✓ {feature}"), &["muted"]);
        row.set_xalign(0.0);
        features.append(&row);
    }
    card.append(&features);

    card
}
