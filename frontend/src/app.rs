//! Behaviour layer entry: integrity check and event wiring.
//!
//! [`App::init`] checks for the header landmark and at least one
//! navigation link, highlights the current page, then binds every
//! handler. Nothing is bound when the check fails. A second `init` is a
//! no-op.

use std::cell::Cell;
use std::rc::Rc;

use rand::RngCore;

use crate::config::{Config, CREATE_PAGE};
use crate::dom::{Element, EventKind, Handler, Hook, Surface, UiEvent};
use crate::services::{a11y, menu, nav, toggles, ExportProgressSimulator};
use crate::timer::Scheduler;
use crate::types::{AppError, AppResult, ExportPhase, NavKey};

/// Site behaviour bound to one document surface.
pub struct App<S: Surface, T: Scheduler> {
    root: S,
    config: Config,
    export: ExportProgressSimulator<T>,
    initialized: Cell<bool>,
}

impl<S: Surface, T: Scheduler> App<S, T> {
    pub fn new(root: S, scheduler: T, rng: Box<dyn RngCore>, config: Config) -> Self {
        let export = ExportProgressSimulator::with_period(scheduler, rng, config.tick_period_ms);
        Self {
            root,
            config,
            export,
            initialized: Cell::new(false),
        }
    }

    pub fn root(&self) -> &S {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Check the page and bind every handler.
    pub fn init(&self) -> AppResult<()> {
        if self.initialized.get() {
            return Ok(());
        }

        if let Err(e) = self.check_integrity() {
            if self.config.verbose {
                log::warn!("{} (need <header> and [data-pf=\"nav-link\"])", e);
            }
            return Err(e);
        }

        nav::resolve(&self.root, Some(nav::current_page_key(&self.root).as_str()));

        self.bind_navigation();
        self.bind_hero_cta();
        self.bind_mobile_menu();
        self.bind_tiles();
        self.bind_sliders();
        self.bind_style_pills();
        self.bind_tab_trap();
        self.bind_export();
        self.bind_cards();

        self.initialized.set(true);
        if self.config.verbose {
            log::info!("PanelForge App Initialized");
            log::info!("Current page: {}", self.root.location_path());
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Public API
    // -------------------------------------------------------------------------

    pub fn highlight_active_nav(&self, key: Option<&str>) -> Option<NavKey> {
        nav::resolve(&self.root, key)
    }

    pub fn toggle_mobile_menu(&self) -> Option<bool> {
        menu::toggle(&self.root)
    }

    pub fn activate_card(&self, card_id: &str) -> bool {
        toggles::activate_card(&self.root, card_id)
    }

    pub fn show_export_modal(&self) -> bool {
        self.export.start(&self.root)
    }

    pub fn hide_export_modal(&self) -> bool {
        self.export.stop(&self.root)
    }

    pub fn export_percent(&self) -> u8 {
        self.export.percent()
    }

    pub fn export_phase(&self) -> ExportPhase {
        self.export.phase()
    }

    /// Watch lazy images. Independent of `init`.
    pub fn watch_lazy_images(&self) -> usize {
        a11y::watch_lazy_images(&self.root)
    }

    // -------------------------------------------------------------------------
    // Wiring
    // -------------------------------------------------------------------------

    fn check_integrity(&self) -> AppResult<()> {
        if self.root.query(Hook::Header).is_none() {
            return Err(AppError::MissingLandmark("header"));
        }
        if self.root.query(Hook::NavLink).is_none() {
            return Err(AppError::MissingLandmark("navigation links"));
        }
        Ok(())
    }

    fn on(&self, target: &S::Element, kind: EventKind, handler: impl Fn(&UiEvent) + 'static) {
        self.root.listen(target, kind, Rc::new(handler) as Handler);
    }

    /// Click plus Enter/Space keydown (default prevented) running `action`.
    fn on_activate(&self, target: &S::Element, action: impl Fn() + 'static) {
        let action = Rc::new(action);
        let on_click = action.clone();
        self.on(target, EventKind::Click, move |_| on_click());
        self.on(target, EventKind::KeyDown, move |ev| {
            if ev.is_activation_key() {
                ev.prevent_default();
                action();
            }
        });
    }

    fn bind_navigation(&self) {
        for link in self.root.query_all(Hook::NavLink) {
            let root = self.root.clone();
            let key = link.clone();
            self.on(&link, EventKind::Click, move |_| {
                nav::resolve(&root, Some(nav::link_key(&key).as_str()));
            });
        }
    }

    fn bind_hero_cta(&self) {
        let Some(cta) = self.root.query(Hook::HeroCta) else {
            return;
        };
        let root = self.root.clone();
        self.on(&cta, EventKind::Click, move |ev| {
            ev.prevent_default();
            root.navigate(CREATE_PAGE);
        });
    }

    fn bind_mobile_menu(&self) {
        if let (Some(button), Some(_)) = (self.root.query(Hook::MobileToggle), self.root.query(Hook::MobileMenu)) {
            let root = self.root.clone();
            self.on(&button, EventKind::Click, move |ev| {
                ev.prevent_default();
                menu::toggle(&root);
            });
        }

        let root = self.root.clone();
        self.root.listen_document(
            EventKind::KeyDown,
            Rc::new(move |ev: &UiEvent| {
                if ev.key() == Some("Escape") {
                    menu::close(&root);
                }
            }),
        );
    }

    fn bind_tiles(&self) {
        for hook in [Hook::UploadTile, Hook::ComicTile, Hook::Interactive] {
            for tile in self.root.query_all(hook) {
                let el = tile.clone();
                self.on_activate(&tile, move || {
                    toggles::toggle_glow(&el);
                });
            }
        }

        for card in self.root.query_all(Hook::CharacterCard) {
            let el = card.clone();
            self.on_activate(&card, move || {
                toggles::toggle_pressed(&el);
            });
        }
    }

    fn bind_sliders(&self) {
        for slider in self.root.query_all(Hook::RangeSlider) {
            let id = slider.id();
            if !id.contains("-slider") {
                continue;
            }
            let Some(label) = self.root.by_id(&toggles::slider_label_id(&id)) else {
                continue;
            };
            let source = slider.clone();
            self.on(&slider, EventKind::Input, move |_| toggles::echo_slider(&source, &label));
        }
    }

    fn bind_style_pills(&self) {
        let pills = Rc::new(self.root.query_all(Hook::StylePill));
        for pill in pills.iter() {
            let group = pills.clone();
            let chosen = pill.clone();
            self.on_activate(pill, move || toggles::select_pill(&group, &chosen));
        }
    }

    fn bind_tab_trap(&self) {
        let root = self.root.clone();
        self.root.listen_document(
            EventKind::KeyDown,
            Rc::new(move |ev: &UiEvent| {
                a11y::trap_tab(&root, ev);
            }),
        );
    }

    fn bind_export(&self) {
        for button in self.root.query_all(Hook::ExportStart) {
            let root = self.root.clone();
            let export = self.export.clone();
            self.on(&button, EventKind::Click, move |ev| {
                ev.prevent_default();
                export.start(&root);
            });
        }

        for button in self.root.query_all(Hook::ExportClose) {
            let root = self.root.clone();
            let export = self.export.clone();
            self.on(&button, EventKind::Click, move |ev| {
                ev.prevent_default();
                export.stop(&root);
            });
        }
    }

    fn bind_cards(&self) {
        for card in self.root.query_all(Hook::Card) {
            let root = self.root.clone();
            let el = card.clone();
            self.on_activate(&card, move || {
                if let Some(id) = el.non_empty_attr("data-card-id") {
                    toggles::activate_card(&root, &id);
                }
            });
        }

        for proxy in self.root.query_all(Hook::CardSelect) {
            let root = self.root.clone();
            let el = proxy.clone();
            self.on(&proxy, EventKind::Click, move |_| {
                if let Some(id) = toggles::card_select_target(&el) {
                    toggles::activate_card(&root, &id);
                }
            });
        }
    }
}
