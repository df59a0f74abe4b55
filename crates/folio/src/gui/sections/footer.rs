use super::{Sender, icon, label, nav_button};
use crate::gui::app::AppMsg;
use folio_core::content::{Profile, SOCIAL_LINKS};
use folio_core::nav::NAV_LINKS;
use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;

pub fn build(profile: &Profile, sender: &Sender) -> gtk::Box {
    let footer = gtk::Box::new(gtk::Orientation::Vertical, 24);
    footer.add_css_class("footer");

    let top = gtk::Box::new(gtk::Orientation::Horizontal, 32);

    let brand = gtk::Box::new(gtk::Orientation::Vertical, 8);
    brand.set_hexpand(true);
    let name = label(&profile.name, &["title-3", "accent"]);
    name.set_xalign(0.0);
    brand.append(&name);
    let role = label(&profile.role, &["muted"]);
    role.set_xalign(0.0);
    brand.append(&role);
    top.append(&brand);

    let links = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    for link in NAV_LINKS {
        links.append(&nav_button(link.label, link.target, &["flat"], sender));
    }
    top.append(&links);

    let socials = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    for social in SOCIAL_LINKS {
        let button = gtk::LinkButton::new(social.url);
        button.set_child(Some(&icon(social.icon, 18)));
        button.set_tooltip_text(Some(social.label));
        socials.append(&button);
    }
    top.append(&socials);
    footer.append(&top);

    footer.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    let bottom = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    let year = glib::DateTime::now_local()
        .map(|now| now.year())
        .unwrap_or(2025);
    let (name, author) = (&profile.name, &profile.author);
    let notice = format!("© {year} {name}. Made with ♥ by {author}");
    let copyright = label(&notice, &["muted"]);
    copyright.set_hexpand(true);
    copyright.set_xalign(0.0);
    bottom.append(&copyright);

    let top_button = gtk::Button::from_icon_name("go-up-symbolic");
    top_button.set_tooltip_text(Some("Back to top"));
    top_button.add_css_class("cta");
    let s = sender.clone();
    top_button.connect_clicked(move |_| s.input(AppMsg::BackToTop));
    bottom.append(&top_button);
    footer.append(&bottom);

    footer
}
