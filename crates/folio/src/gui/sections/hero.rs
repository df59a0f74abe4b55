use super::{Sender, header_item, label, link, nav_button, section_root};
use crate::config::Accent;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use folio_core::SectionId;
use folio_core::content::Profile;
use folio_core::hero::{HeroPointer, Tilt};
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

const CARD_WIDTH: i32 = 420;
const CARD_HEIGHT: i32 = 480;
const CORNER_RADIUS: f64 = 24.0;

pub fn build(
    profile: &Profile,
    state: Rc<RefCell<HeroPointer>>,
    accent: Rc<Cell<Accent>>,
    sender: &Sender,
) -> (gtk::Box, gtk::DrawingArea) {
    let root = section_root(SectionId::Home);
    root.add_css_class("hero");

    let columns = gtk::Box::new(gtk::Orientation::Horizontal, 48);
    columns.set_valign(gtk::Align::Center);
    columns.set_vexpand(true);

    let text = gtk::Box::new(gtk::Orientation::Vertical, 20);
    text.set_hexpand(true);
    text.set_valign(gtk::Align::Center);

    let greeting = label("● Hello, I'm available for work", &["muted", "card"]);
    greeting.set_halign(gtk::Align::Start);

    let heading = gtk::Box::new(gtk::Orientation::Vertical, 4);
    let hello = label("Hello!", &["muted"]);
    hello.set_halign(gtk::Align::Start);
    let name_row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    name_row.append(&label("I'M", &["heading"]));
    name_row.append(&label(&profile.name, &["heading", "accent"]));
    heading.append(&hello);
    heading.append(&name_row);

    let rule = gtk::Separator::new(gtk::Orientation::Horizontal);
    rule.add_css_class("accent-line");
    rule.set_halign(gtk::Align::Start);
    rule.set_size_request(80, 4);

    let role = label(&profile.role, &["title-2"]);
    role.set_halign(gtk::Align::Start);

    let summary = label(&profile.summary, &["muted"]);
    summary.set_xalign(0.0);
    summary.set_max_width_chars(60);

    let actions = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    let work = nav_button("View My Work ↓", SectionId::Projects, &["cta"], sender);
    let touch = nav_button("Get In Touch", SectionId::Contact, &["card"], sender);
    actions.append(&work);
    actions.append(&touch);

    let quick_contact = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    quick_contact.append(&link(&profile.email, &profile.email.mailto(), sender));
    quick_contact.append(&link(&profile.phone, &profile.tel(), sender));

    let items: [&gtk::Widget; 7] = [
        greeting.upcast_ref(),
        heading.upcast_ref(),
        rule.upcast_ref(),
        role.upcast_ref(),
        summary.upcast_ref(),
        actions.upcast_ref(),
        quick_contact.upcast_ref(),
    ];
    for (i, item) in items.into_iter().enumerate() {
        header_item(item, i);
        text.append(item);
    }

    let area = gtk::DrawingArea::new();
    area.set_content_width(CARD_WIDTH);
    area.set_content_height(CARD_HEIGHT);
    area.set_valign(gtk::Align::Center);
    header_item(&area, 3);

    let initials: String = profile
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    let badge = format!("{} Years Exp.", profile.experience);
    area.set_draw_func(move |area, cr, width, height| {
        let colors = ThemeColors::new(&accent.get(), &area.style_context());
        let tilt = state.borrow().tilt();
        let (w, h) = (width as f64, height as f64);
        if let Err(e) = draw(cr, w, h, tilt, &colors, &initials, &badge) {
            log::error!("Drawing error: {}", e);
        }
    });

    columns.append(&text);
    columns.append(&area);

    let scroll_hint = nav_button("Scroll ↓", SectionId::Skills, &["flat", "muted"], sender);
    scroll_hint.set_halign(gtk::Align::Center);

    root.append(&columns);
    root.append(&scroll_hint);

    (root, area)
}

/// Hero card leaning towards the pointer. Rotation is approximated with
/// foreshortening and shear, there is no real perspective in cairo.
pub fn draw(
    cr: &Context,
    width: f64,
    height: f64,
    tilt: Tilt,
    colors: &ThemeColors,
    initials: &str,
    badge: &str,
) -> Result<(), cairo::Error> {
    let (rx, ry) = (tilt.rotate_x.to_radians(), tilt.rotate_y.to_radians());
    let (card_w, card_h) = (width * 0.8, height * 0.8);

    cr.save()?;
    cr.translate(width / 2.0, height / 2.0);
    cr.transform(cairo::Matrix::new(
        ry.cos(),
        rx.sin() * 0.25,
        ry.sin() * 0.25,
        rx.cos(),
        0.0,
        0.0,
    ));

    draw_glow(cr, card_w, card_h, colors)?;
    draw_card(cr, card_w, card_h, colors)?;
    draw_rings(cr, card_w, card_h, colors)?;
    draw_initials(cr, initials, card_h, colors)?;
    draw_badge(cr, badge, card_w, card_h, colors)?;

    cr.restore()
}

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn set_color(cr: &Context, color: palette::Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_glow(cr: &Context, w: f64, h: f64, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (gw, gh) = (w * 1.1, h * 1.1);
    set_color(cr, colors.glow);
    rounded_rect(cr, -gw / 2.0, -gh / 2.0, gw, gh, CORNER_RADIUS * 1.5);
    cr.fill()
}

fn draw_card(cr: &Context, w: f64, h: f64, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_color(cr, colors.card);
    rounded_rect(cr, -w / 2.0, -h / 2.0, w, h, CORNER_RADIUS);
    cr.fill_preserve()?;
    set_color(cr, colors.accent);
    cr.set_line_width(2.0);
    cr.stroke()
}

fn draw_rings(cr: &Context, w: f64, h: f64, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let mut ring = colors.accent;
    ring.alpha = 0.3;
    set_color(cr, ring);
    cr.set_line_width(2.0);
    cr.arc(w / 2.0, -h / 2.0, 48.0, 0.0, 2.0 * PI);
    cr.stroke()?;

    ring.alpha = 0.2;
    set_color(cr, ring);
    cr.set_line_width(1.0);
    cr.arc(-w / 2.0, h / 2.0, 32.0, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_initials(
    cr: &Context,
    initials: &str,
    h: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.text);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(h * 0.3);
    if let Ok(ext) = cr.text_extents(initials) {
        cr.move_to(-ext.width() / 2.0 - ext.x_bearing(), ext.height() / 2.0);
        cr.show_text(initials)?;
    }
    Ok(())
}

fn draw_badge(
    cr: &Context,
    text: &str,
    w: f64,
    h: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(16.0);
    let ext = cr.text_extents(text)?;
    let (bw, bh) = (ext.width() + 32.0, 40.0);
    let (bx, by) = (w / 2.0 - bw - 24.0, h / 2.0 - bh / 2.0);

    set_color(cr, colors.card);
    rounded_rect(cr, bx, by, bw, bh, 8.0);
    cr.fill_preserve()?;
    set_color(cr, colors.muted);
    cr.set_line_width(1.0);
    cr.stroke()?;

    set_color(cr, colors.accent);
    let baseline = by + (bh + ext.height()) / 2.0;
    cr.move_to(bx + 16.0 - ext.x_bearing(), baseline);
    cr.show_text(text)?;
    Ok(())
}
