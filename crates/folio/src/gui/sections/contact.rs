use super::{Sender, header_item, icon, label, link, section_header, section_root};
use crate::gui::app::AppMsg;
use folio_core::SectionId;
use folio_core::contact::Field;
use folio_core::content::{Icon, Profile, SOCIAL_LINKS};
use gtk::prelude::*;
use gtk4 as gtk;
use strum::IntoEnumIterator;

pub struct FormWidgets {
    pub entries: Vec<(Field, gtk::Entry)>,
    pub message: gtk::TextView,
    pub status: gtk::Label,
}

impl FormWidgets {
    /// Empties every input. Change signals feed the cleared values back.
    pub fn clear(&self) {
        for (_, entry) in &self.entries {
            entry.set_text("");
        }
        self.message.buffer().set_text("");
    }

    pub fn show_ack(&self, text: &str) {
        self.status.remove_css_class("form-error");
        self.status.add_css_class("form-ack");
        self.status.set_text(text);
        self.status.set_visible(true);
    }

    pub fn show_error(&self, text: &str, field: Field) {
        self.status.remove_css_class("form-ack");
        self.status.add_css_class("form-error");
        self.status.set_text(text);
        self.status.set_visible(true);
        self.focus(field);
    }

    pub fn hide_error(&self) {
        if self.status.has_css_class("form-error") {
            self.status.set_visible(false);
        }
    }

    pub fn focus(&self, field: Field) {
        if field.is_multiline() {
            self.message.grab_focus();
        } else if let Some((_, entry)) = self.entries.iter().find(|(f, _)| *f == field) {
            entry.grab_focus();
        }
    }
}

pub fn build(profile: &Profile, sender: &Sender) -> (gtk::Box, FormWidgets) {
    let root = section_root(SectionId::Contact);

    root.append(&section_header(
        "Get In Touch",
        "Let's Work",
        "Together",
        "Have a project in mind or want to discuss potential opportunities? \
         I'd love to hear from you.",
    ));

    let columns = gtk::Box::new(gtk::Orientation::Horizontal, 48);
    columns.set_homogeneous(true);

    let info = info_column(profile, sender);
    header_item(&info, 3);

    let (form, widgets) = form_column(sender);
    header_item(&form, 4);

    columns.append(&info);
    columns.append(&form);
    root.append(&columns);

    (root, widgets)
}

fn info_column(profile: &Profile, sender: &Sender) -> gtk::Box {
    let column = gtk::Box::new(gtk::Orientation::Vertical, 16);

    let title = label("Contact Information", &["title-3"]);
    title.set_xalign(0.0);
    column.append(&title);

    let email = profile.email.to_string();
    let mailto = profile.email.mailto().to_string();
    let tel = profile.tel().to_string();
    let rows = [
        (Icon::Mail, "Email", email, Some(mailto)),
        (Icon::Phone, "Phone", profile.phone.clone(), Some(tel)),
        (Icon::MapPin, "Location", profile.location.clone(), None),
    ];
    for (glyph, caption, value, href) in rows {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        row.add_css_class("card");
        row.append(&icon(glyph, 24));

        let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
        let caption = label(caption, &["muted"]);
        caption.set_xalign(0.0);
        text.append(&caption);
        match href {
            Some(href) => text.append(&link(&value, &href, sender)),
            None => {
                let value = label(&value, &[]);
                value.set_xalign(0.0);
                text.append(&value);
            }
        }
        row.append(&text);
        column.append(&row);
    }

    let follow = label("Follow Me", &["muted"]);
    follow.set_xalign(0.0);
    column.append(&follow);

    let socials = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    for social in SOCIAL_LINKS {
        let button = gtk::LinkButton::new(social.url);
        button.set_child(Some(&icon(social.icon, 20)));
        button.set_tooltip_text(Some(social.label));
        socials.append(&button);
    }
    column.append(&socials);

    column
}

fn form_column(sender: &Sender) -> (gtk::Box, FormWidgets) {
    let column = gtk::Box::new(gtk::Orientation::Vertical, 12);
    column.add_css_class("card");

    let mut entries = Vec::new();
    let message = gtk::TextView::new();

    for field in Field::iter() {
        let caption = label(field.label(), &[]);
        caption.set_xalign(0.0);
        column.append(&caption);

        if field.is_multiline() {
            message.set_wrap_mode(gtk::WrapMode::WordChar);
            message.set_size_request(-1, 140);
            message.set_tooltip_text(Some(field.placeholder()));
            let s = sender.clone();
            message.buffer().connect_changed(move |buffer| {
                let text = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);
                s.input(AppMsg::FieldChanged(field, text.to_string()));
            });
            column.append(&message);
        } else {
            let entry = gtk::Entry::new();
            entry.set_placeholder_text(Some(field.placeholder()));
            if field == Field::Email {
                entry.set_input_purpose(gtk::InputPurpose::Email);
            }
            let s = sender.clone();
            entry.connect_changed(move |entry| {
                s.input(AppMsg::FieldChanged(field, entry.text().to_string()));
            });
            let s = sender.clone();
            entry.connect_activate(move |_| s.input(AppMsg::Submit));
            column.append(&entry);
            entries.push((field, entry));
        }
    }

    let submit = gtk::Button::with_label("Send Message");
    submit.add_css_class("cta");
    let s = sender.clone();
    submit.connect_clicked(move |_| s.input(AppMsg::Submit));
    column.append(&submit);

    let status = gtk::Label::new(None);
    status.set_wrap(true);
    status.set_visible(false);
    column.append(&status);

    (
        column,
        FormWidgets {
            entries,
            message,
            status,
        },
    )
}
