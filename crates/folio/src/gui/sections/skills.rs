use super::{grid_item, header_item, icon, label, section_header, section_root};
use folio_core::SectionId;
use folio_core::content::{SKILLS, STATS, Skill};
use gtk::prelude::*;
use gtk4 as gtk;

pub fn build() -> gtk::Box {
    let root = section_root(SectionId::Skills);

    root.append(&section_header(
        "My Expertise",
        "Skills &",
        "Technologies",
        "A comprehensive toolkit of modern technologies and platforms I use to build \
         exceptional digital experiences.",
    ));

    let grid = gtk::FlowBox::new();
    grid.set_selection_mode(gtk::SelectionMode::None);
    grid.set_homogeneous(true);
    grid.set_min_children_per_line(2);
    grid.set_max_children_per_line(6);
    grid.set_row_spacing(16);
    grid.set_column_spacing(16);
    for (i, skill) in SKILLS.iter().enumerate() {
        let card = skill_card(skill);
        grid_item(&card, SectionId::Skills, i);
        grid.insert(&card, -1);
    }
    root.append(&grid);

    let stats = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    stats.set_homogeneous(true);
    for stat in STATS {
        let cell = gtk::Box::new(gtk::Orientation::Vertical, 4);
        cell.append(&label(stat.value, &["heading", "accent"]));
        cell.append(&label(stat.label, &["muted"]));
        stats.append(&cell);
    }
    header_item(&stats, 7);
    root.append(&stats);

    root
}

fn skill_card(skill: &Skill) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 8);
    card.add_css_class("card");
    card.append(&icon(skill.icon, 32));
    card.append(&label(skill.name, &["heading-small"]));
    card.append(&label(skill.category, &["muted"]));
    card
}
