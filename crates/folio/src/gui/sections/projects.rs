use super::{Sender, grid_item, icon, label, link, section_header, section_root, track_hover};
use folio_core::SectionId;
use folio_core::content::{PORTFOLIO_URL, PROJECTS, Project};
use gtk::prelude::*;
use gtk4 as gtk;

pub fn build(sender: &Sender) -> (gtk::Box, Vec<gtk::Box>) {
    let root = section_root(SectionId::Projects);

    root.append(&section_header(
        "My Work",
        "Featured",
        "Projects",
        "A selection of my recent work showcasing expertise in e-commerce, automation, \
         and custom development.",
    ));

    let grid = gtk::FlowBox::new();
    grid.set_selection_mode(gtk::SelectionMode::None);
    grid.set_homogeneous(true);
    grid.set_max_children_per_line(2);
    grid.set_row_spacing(32);
    grid.set_column_spacing(32);

    let cards: Vec<gtk::Box> = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let card = project_card(project, sender);
            grid_item(&card, SectionId::Projects, i);
            track_hover(&card, SectionId::Projects, i, sender);
            grid.insert(&card, -1);
            card
        })
        .collect();
    root.append(&grid);

    let view_all = gtk::LinkButton::with_label(PORTFOLIO_URL, "View All Projects →");
    view_all.set_halign(gtk::Align::Center);
    view_all.add_css_class("card");
    root.append(&view_all);

    (root, cards)
}

fn project_card(project: &Project, sender: &Sender) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 12);
    card.add_css_class("card");

    let cover = gtk::Box::new(gtk::Orientation::Vertical, 0);
    cover.set_size_request(-1, 180);
    cover.add_css_class("project-cover");
    let glyph = icon(project.icon, 64);
    glyph.set_vexpand(true);
    cover.append(&glyph);

    // Links only show while the card is hovered.
    let details = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    details.add_css_class("project-details");
    details.set_halign(gtk::Align::Center);
    if let Some(url) = project.live_url {
        details.append(&link("Live Demo", url, sender));
    }
    if let Some(url) = project.source_url {
        details.append(&link("Source", url, sender));
    }
    cover.append(&details);
    card.append(&cover);

    let category = label(project.category, &["eyebrow"]);
    category.set_xalign(0.0);
    card.append(&category);

    let title = label(project.title, &["title-3"]);
    title.set_xalign(0.0);
    card.append(&title);

    let description = label(project.description, &["muted"]);
    description.set_xalign(0.0);
    card.append(&description);

    let chips = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    for tech in project.technologies {
        chips.append(&label(tech, &["chip", "muted"]));
    }
    card.append(&chips);

    card
}
