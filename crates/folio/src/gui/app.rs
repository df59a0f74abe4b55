use crate::cli::LaunchOptions;
use crate::config::{self, Accent, Config};
use crate::events::AppEvent;
use crate::gui::host::{ScrollSubscription, WidgetRegion, bounds_in};
use crate::gui::sections::{self, NavWidgets, PageWidgets};
use crate::gui::theme::Theme;
use folio_core::contact::{ContactForm, Field, FormError};
use folio_core::hero::HeroPointer;
use folio_core::hover::HoverTracker;
use folio_core::nav::{MobileMenu, NavLink, ScrollTracker};
use folio_core::{IntersectionObserver, Point, Rect, Region, Section, SectionId, Viewport};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

/// Below this window width the nav collapses into the mobile menu.
const COMPACT_WIDTH: i32 = 768;

pub struct AppModel {
    config: Config,
    config_path: PathBuf,
    viewport: Option<Viewport>,
    sections: Vec<Section>,
    page: PageWidgets,
    nav: NavWidgets,
    scroll: ScrollTracker,
    menu: MobileMenu,
    compact: bool,
    hero: Rc<RefCell<HeroPointer>>,
    accent: Rc<Cell<Accent>>,
    form: ContactForm,
    theme: Theme,
    pending_jump: Option<SectionId>,
    root: gtk::ApplicationWindow,
    scroller: gtk::ScrolledWindow,
    page_box: gtk::Box,
    _scroll_sub: ScrollSubscription,
}

#[derive(Debug)]
pub enum AppMsg {
    Scrolled,
    Resized(i32),
    NavClicked(SectionId),
    MenuLink(NavLink),
    ToggleMenu,
    CloseMenu,
    BackToTop,
    PointerMoved(Point),
    PointerLeft,
    HoverEnter(SectionId, usize),
    HoverLeave(SectionId, usize),
    FieldChanged(Field, String),
    Submit,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, LaunchOptions, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Iffy.Dev"),
            set_default_size: (1280, 900),
            add_css_class: "folio-window",

            add_controller = gtk::EventControllerMotion {
                connect_motion[sender] => move |_, x, y| {
                    sender.input(AppMsg::PointerMoved(Point::new(x, y)));
                },
                connect_leave[sender] => move |_| {
                    sender.input(AppMsg::PointerLeft);
                }
            },

            connect_default_width_notify[sender] => move |window| {
                sender.input(AppMsg::Resized(window.default_width()));
            },

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "scroller"]
                gtk::ScrolledWindow {
                    set_hscrollbar_policy: gtk::PolicyType::Never,
                    set_vexpand: true,

                    #[name = "page"]
                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        add_css_class: "page",
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, options, rx) = init;

        let theme = Theme::install(&config.accent);
        let widgets = view_output!();

        let hero = Rc::new(RefCell::new(HeroPointer::default()));
        let accent = Rc::new(Cell::new(config.accent));
        let page = sections::build(
            &widgets.page,
            &config.profile,
            hero.clone(),
            accent.clone(),
            &sender,
        );

        let nav = NavWidgets::build(&config.profile.name, &sender);
        widgets.overlay.add_overlay(&nav.menu);
        widgets.overlay.add_overlay(&nav.bar);

        let viewport = options.observe.then(Viewport::new);
        let observer = viewport.as_ref().map(|v| v as &dyn IntersectionObserver);
        let sections = page
            .roots
            .iter()
            .map(|(id, section_root)| {
                let region: Rc<dyn Region> =
                    Rc::new(WidgetRegion::new(section_root, &widgets.page));
                let section_root = section_root.clone();
                Section::mount(*id, region, config.threshold(*id), observer, move || {
                    section_root.add_css_class("revealed");
                })
            })
            .collect();

        let scroll_sub = {
            let sender = sender.clone();
            ScrollSubscription::new(&widgets.scroller.vadjustment(), move || {
                sender.input(AppMsg::Scrolled)
            })
        };

        let model = AppModel {
            config_path: options.config_path,
            viewport,
            sections,
            page,
            nav,
            scroll: ScrollTracker::new(config.scroll_threshold),
            menu: MobileMenu::default(),
            compact: root.default_width() < COMPACT_WIDTH,
            hero,
            accent,
            form: ContactForm::default(),
            theme,
            pending_jump: options.section,
            root: root.clone(),
            scroller: widgets.scroller.clone(),
            page_box: widgets.page.clone(),
            _scroll_sub: scroll_sub,
            config,
        };
        model.sync_nav();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Scrolled => self.on_scroll(),
            AppMsg::Resized(width) => {
                let compact = width < COMPACT_WIDTH;
                if compact != self.compact {
                    self.compact = compact;
                    if !compact {
                        self.menu.close();
                    }
                    self.sync_nav();
                }
            }
            AppMsg::NavClicked(target) => {
                self.menu.close();
                self.sync_nav();
                self.jump(target);
            }
            AppMsg::MenuLink(link) => {
                let target = self.menu.follow(&link);
                self.sync_nav();
                self.jump(target);
            }
            AppMsg::ToggleMenu => {
                self.menu.toggle();
                self.sync_nav();
            }
            AppMsg::CloseMenu => {
                if self.menu.is_open() {
                    self.menu.close();
                    self.sync_nav();
                }
            }
            AppMsg::BackToTop => self.jump(SectionId::Home),
            AppMsg::PointerMoved(pointer) => {
                let Some(bounds) = bounds_in(&self.page.hero_area, &self.root) else {
                    return;
                };
                if self.hero.borrow_mut().track(pointer, bounds) {
                    self.page.hero_area.queue_draw();
                }
            }
            AppMsg::PointerLeft => {
                if self.hero.borrow_mut().reset() {
                    self.page.hero_area.queue_draw();
                }
            }
            AppMsg::HoverEnter(id, index) => self.hover(id, |h| h.enter(index)),
            AppMsg::HoverLeave(id, index) => self.hover(id, |h| h.leave(index)),
            AppMsg::FieldChanged(field, value) => {
                if !value.is_empty() {
                    self.page.form.hide_error();
                }
                self.form.set(field, value);
            }
            AppMsg::Submit => match self.form.submit() {
                Ok(ack) => {
                    self.page.form.clear();
                    self.page.form.show_ack(ack);
                }
                Err(e @ FormError::Missing(field)) => {
                    log::debug!("Contact form rejected: {}", e);
                    self.page.form.show_error(&e.to_string(), field);
                }
            },
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => self.apply_config(new_config),
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        for section in &self.sections {
            section.unmount();
        }
        let revealed = self.sections.iter().filter(|s| s.is_visible()).count();
        log::debug!(
            "Unmounted {} sections, {} revealed",
            self.sections.len(),
            revealed
        );
    }
}

impl AppModel {
    fn sync_nav(&self) {
        self.nav
            .sync(self.scroll.is_scrolled(), self.menu.is_open(), self.compact);
    }

    fn on_scroll(&mut self) {
        let adjustment = self.scroller.vadjustment();
        let offset = adjustment.value();

        if self.scroll.update(offset) {
            self.sync_nav();
        }

        if let Some(viewport) = &self.viewport {
            let visible = Rect::new(
                0.0,
                offset,
                self.page_box.width() as f64,
                adjustment.page_size(),
            );
            let fired = viewport.update(visible);
            if fired > 0 {
                log::debug!(
                    "{} section(s) entered at offset {:.0}, {} still observed",
                    fired,
                    offset,
                    viewport.pending()
                );
            }
        }

        if let Some(target) = self.pending_jump
            && self.scroll_to(target)
        {
            self.pending_jump = None;
        }
    }

    /// Scrolls to `target`, or remembers it until the page is laid out.
    fn jump(&mut self, target: SectionId) {
        if self.scroll_to(target) {
            self.pending_jump = None;
        } else {
            self.pending_jump = Some(target);
        }
    }

    fn scroll_to(&self, target: SectionId) -> bool {
        let y = match target {
            SectionId::Home => 0.0,
            _ => match self
                .page
                .root(target)
                .and_then(|w| bounds_in(w, &self.page_box))
            {
                Some(bounds) => bounds.y,
                None => return false,
            },
        };
        self.scroller.vadjustment().set_value(y);
        log::debug!("Scrolled to #{}", target.anchor());
        true
    }

    fn hover(&mut self, id: SectionId, change: impl FnOnce(&mut HoverTracker) -> bool) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id() == id) else {
            return;
        };
        if !change(&mut section.hover) {
            return;
        }
        for (i, card) in self.page.cards(id).iter().enumerate() {
            sections::nav::set_class(card, "hovered", section.hover.is_hovered(i));
        }
    }

    fn apply_config(&mut self, new_config: Config) {
        if new_config.accent != self.config.accent {
            self.theme.apply(&new_config.accent);
            self.accent.set(new_config.accent);
            self.page.hero_area.queue_draw();
        }

        self.scroll.set_threshold(new_config.scroll_threshold);
        if self.scroll.update(self.scroller.vadjustment().value()) {
            self.sync_nav();
        }

        if new_config.profile != self.config.profile
            || new_config.thresholds != self.config.thresholds
            || new_config.intersection != self.config.intersection
        {
            log::warn!("Profile and observer settings take effect on restart");
        }

        self.config = new_config;
        log::info!("Configuration reloaded");
    }
}
