use super::{Sender, label, nav_button};
use crate::gui::app::AppMsg;
use folio_core::SectionId;
use folio_core::nav::{HIRE_ME, NAV_LINKS};
use gtk::prelude::*;
use gtk4 as gtk;

const LOGO_CLASSES: [&str; 3] = ["flat", "title-3", "accent"];

/// Fixed bar over the page plus the full-screen mobile menu.
pub struct NavWidgets {
    pub bar: gtk::Box,
    pub desktop_links: gtk::Box,
    pub hire: gtk::Button,
    pub hamburger: gtk::Button,
    pub menu: gtk::Box,
}

impl NavWidgets {
    pub fn build(brand: &str, sender: &Sender) -> Self {
        let bar = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        bar.add_css_class("nav-bar");
        bar.set_valign(gtk::Align::Start);

        let logo = nav_button(brand, SectionId::Home, &LOGO_CLASSES, sender);
        logo.set_hexpand(true);
        logo.set_halign(gtk::Align::Start);
        bar.append(&logo);

        let desktop_links = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        for link in NAV_LINKS {
            desktop_links.append(&nav_button(link.label, link.target, &["flat"], sender));
        }
        bar.append(&desktop_links);

        let hire = nav_button(HIRE_ME.label, HIRE_ME.target, &["cta"], sender);
        bar.append(&hire);

        let hamburger = gtk::Button::from_icon_name("open-menu-symbolic");
        hamburger.add_css_class("flat");
        hamburger.set_tooltip_text(Some("Toggle menu"));
        let s = sender.clone();
        hamburger.connect_clicked(move |_| s.input(AppMsg::ToggleMenu));
        bar.append(&hamburger);

        let menu = gtk::Box::new(gtk::Orientation::Vertical, 24);
        menu.add_css_class("mobile-menu");
        menu.set_valign(gtk::Align::Fill);
        menu.set_halign(gtk::Align::Fill);

        let column = gtk::Box::new(gtk::Orientation::Vertical, 24);
        column.set_valign(gtk::Align::Center);
        column.set_halign(gtk::Align::Center);
        column.set_vexpand(true);
        for (i, link) in NAV_LINKS.iter().enumerate() {
            let button = gtk::Button::new();
            button.set_child(Some(&label(link.label, &[])));
            button.add_css_class("flat");
            button.add_css_class("menu-link");
            button.add_css_class(&format!("menu-link-{i}"));
            let (s, link) = (sender.clone(), *link);
            button.connect_clicked(move |_| s.input(AppMsg::MenuLink(link)));
            column.append(&button);
        }
        let cta = gtk::Button::with_label(HIRE_ME.label);
        cta.add_css_class("cta");
        cta.add_css_class("menu-link");
        cta.add_css_class("menu-cta");
        let s = sender.clone();
        cta.connect_clicked(move |_| s.input(AppMsg::MenuLink(HIRE_ME)));
        column.append(&cta);
        menu.append(&column);

        // Clicks that no link claims land on the backdrop.
        let backdrop = gtk::GestureClick::new();
        let s = sender.clone();
        backdrop.connect_released(move |_, _, _, _| s.input(AppMsg::CloseMenu));
        menu.add_controller(backdrop);

        let widgets = Self {
            bar,
            desktop_links,
            hire,
            hamburger,
            menu,
        };
        widgets.sync(false, false, false);
        widgets
    }

    /// Applies the scroll flag, menu state and layout mode to the widgets.
    /// The menu stays mapped while compact so it can fade both ways; when
    /// closed it is transparent and lets input through.
    pub fn sync(&self, scrolled: bool, open: bool, compact: bool) {
        set_class(&self.bar, "nav-scrolled", scrolled);

        self.desktop_links.set_visible(!compact);
        self.hire.set_visible(!compact);
        self.hamburger.set_visible(compact);
        self.hamburger.set_icon_name(if open {
            "window-close-symbolic"
        } else {
            "open-menu-symbolic"
        });

        let shown = open && compact;
        self.menu.set_visible(compact);
        self.menu.set_can_target(shown);
        set_class(&self.menu, "menu-open", shown);
    }
}

pub fn set_class(widget: &impl IsA<gtk::Widget>, class: &str, on: bool) {
    if on {
        widget.add_css_class(class);
    } else {
        widget.remove_css_class(class);
    }
}
