//! Section navigator: lazy fragment loading, visibility, and hash sync.
//!
//! DESIGN
//! ======
//! One `Navigator` lives for the whole page. It owns the current section id,
//! a map from section id to the element loaded for it, and the click
//! listeners it attached to sidebar links. All DOM and address-bar access
//! goes through [`Shell`], all network access through [`FragmentSource`].
//!
//! Layout depends on viewport class, re-read on every decision:
//! - desktop: one section active at a time, loaded on demand and cached;
//!   the address fragment follows the selection.
//! - mobile: every visible section stacked in registry order, unless the
//!   current section is hidden, in which case it is shown alone.
//!
//! Every navigation takes a generation number. A navigation whose fetch
//! resolves after a newer one started does not change what is selected. Its
//! fragment is cached only if the newer navigation has not already loaded
//! the same section, and a superseded mobile layout issues no further loads.
//! A replaced element hands its active flag to its replacement.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;

use crate::config::SiteConfig;
use crate::net::fragments::{ERROR_PANEL_HTML, FragmentSource};
use crate::state::registry::{HashRoute, is_sub_path_of};
use crate::state::shell::Shell;
use crate::util::viewport::ViewportClass;

/// Result of a single [`Navigator::load_section`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Fetch failed; the error panel replaced the container content.
    Failed,
    /// Fetched markup had no element with the section's id.
    Missing,
    /// Id is not in the registry.
    Unknown,
    /// Fetch resolved after a newer navigation had already loaded the
    /// section; the newer element was kept.
    Superseded,
}

pub struct Navigator<S: Shell, F: FragmentSource> {
    config: SiteConfig,
    shell: S,
    source: F,
    current: RefCell<String>,
    loaded: RefCell<HashMap<String, S::Node>>,
    bindings: RefCell<HashMap<String, S::Binding>>,
    generation: Cell<u64>,
}

impl<S: Shell, F: FragmentSource> Navigator<S, F> {
    pub fn new(config: SiteConfig, shell: S, source: F) -> Self {
        let current = RefCell::new(config.default_section.clone());
        Self {
            config,
            shell,
            source,
            current,
            loaded: RefCell::new(HashMap::new()),
            bindings: RefCell::new(HashMap::new()),
            generation: Cell::new(0),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn current_section(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.borrow().contains_key(id)
    }

    /// Loaded section ids in registry order.
    pub fn loaded_ids(&self) -> Vec<String> {
        let loaded = self.loaded.borrow();
        self.config
            .sections
            .iter()
            .filter(|s| loaded.contains_key(&s.id))
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.shell.viewport_width(), self.config.mobile_max_width)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_class().is_mobile()
    }

    /// Fetch the fragment for `id` and append it to the content container,
    /// replacing any element previously loaded for the same id.
    pub async fn load_section(&self, id: &str) -> LoadOutcome {
        self.load_section_for(id, None).await
    }

    async fn load_section_for(&self, id: &str, ticket: Option<u64>) -> LoadOutcome {
        let Some(entry) = self.config.section(id) else {
            log::warn!("load requested for unknown section {id}");
            return LoadOutcome::Unknown;
        };

        let html = match self.source.fetch(&entry.source).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("error loading section {id} from {}: {e}", entry.source);
                // The panel replaces the container, taking every loaded element with it.
                self.loaded.borrow_mut().clear();
                self.shell.show_error_panel(ERROR_PANEL_HTML);
                return LoadOutcome::Failed;
            }
        };

        if ticket.is_some_and(|t| self.is_stale(t)) && self.is_loaded(id) {
            log::debug!("dropping superseded fragment for {id}");
            return LoadOutcome::Superseded;
        }

        let stale = self.loaded.borrow_mut().remove(id);
        let was_active = stale.as_ref().is_some_and(|node| self.shell.is_node_active(node));
        if let Some(stale) = stale {
            self.shell.remove_node(&stale);
        }

        let Some(node) = self.shell.append_fragment(id, &html) else {
            log::warn!("fragment {} has no element with id {id}", entry.source);
            return LoadOutcome::Missing;
        };
        if entry.scripts {
            self.shell.run_embedded_scripts(&node);
        } else {
            self.shell.strip_embedded_scripts(&node);
        }
        if was_active {
            self.shell.set_node_active(&node, true);
        }
        self.loaded.borrow_mut().insert(id.to_owned(), node);
        log::debug!("loaded section {id}");
        LoadOutcome::Loaded
    }

    /// Load every visible section, plus the hidden ones named in
    /// `include_hidden`, one after another in registry order.
    pub async fn load_all_sections(&self, include_hidden: &[&str]) {
        self.load_sections_for(include_hidden, None).await;
    }

    /// [`Self::load_all_sections`], stopping before the next fetch once
    /// `ticket` is superseded.
    async fn load_sections_for(&self, include_hidden: &[&str], ticket: Option<u64>) {
        let wanted = self
            .config
            .sections
            .iter()
            .filter(|s| !s.hidden || include_hidden.contains(&s.id.as_str()));
        for entry in wanted {
            if ticket.is_some_and(|t| self.is_stale(t)) {
                return;
            }
            self.load_section_for(&entry.id, ticket).await;
        }
    }

    /// Make `id` the only active section and sidebar link.
    ///
    /// The hash becomes `#id` unless `preserve_hash` is set or the hash
    /// already points below `id` (`id/<locale>/<slug>`).
    pub fn select_section(&self, id: &str, preserve_hash: bool) {
        *self.current.borrow_mut() = id.to_owned();

        for (section_id, node) in self.loaded.borrow().iter() {
            self.shell.set_node_active(node, section_id == id);
        }
        self.shell.set_active_link(id);

        if !preserve_hash && !is_sub_path_of(&self.shell.location_hash(), id) {
            self.shell.replace_hash(id);
        }

        self.update_header(id);
    }

    /// Resolve the initial section from the hash and lay the page out.
    pub async fn init(&self) {
        let ticket = self.begin_navigation();
        let id = HashRoute::resolve(&self.shell.location_hash(), &self.config.sections)
            .map_or_else(|| self.config.default_section.clone(), |route| route.section_id);
        log::info!("initial section {id} ({:?})", self.viewport_class());
        *self.current.borrow_mut() = id.clone();
        self.update_header(&id);

        if self.is_mobile() {
            self.apply_mobile_layout(ticket).await;
            return;
        }

        self.load_section_for(&id, Some(ticket)).await;
        if self.is_stale(ticket) {
            return;
        }
        self.select_section(&id, false);
    }

    /// Sidebar click on the link targeting `id`.
    ///
    /// On mobile the click scrolls to the section. Entering or leaving a
    /// hidden section re-runs the mobile layout first, since a hidden
    /// section is shown alone.
    pub async fn navigate(&self, id: &str) {
        let Some(entry) = self.config.section(id) else {
            log::warn!("ignoring navigation to unknown section {id}");
            return;
        };

        if self.is_mobile() {
            let leaving_hidden = self
                .config
                .section(&self.current_section())
                .is_some_and(|s| s.hidden);
            *self.current.borrow_mut() = id.to_owned();
            if leaving_hidden || entry.hidden {
                let ticket = self.begin_navigation();
                self.update_header(id);
                self.apply_mobile_layout(ticket).await;
                if self.is_stale(ticket) {
                    return;
                }
            }
            if let Some(node) = self.loaded.borrow().get(id) {
                self.shell.scroll_into_view(node);
            }
            return;
        }

        let ticket = self.begin_navigation();
        if !self.is_loaded(id) {
            self.load_section_for(id, Some(ticket)).await;
        }
        if self.is_stale(ticket) {
            log::debug!("navigation to {id} superseded before its fragment arrived");
            return;
        }
        self.select_section(id, false);
    }

    fn update_header(&self, id: &str) {
        match self.config.section(id).and_then(|s| s.header_title.as_deref()) {
            Some(title) => self.shell.set_header(title, true),
            None => self.shell.set_header(&self.config.site_name, false),
        }
    }

    async fn apply_mobile_layout(&self, ticket: u64) {
        let id = self.current_section();
        let current_hidden = self.config.section(&id).is_some_and(|s| s.hidden);

        if current_hidden {
            if !self.is_loaded(&id) {
                self.load_section_for(&id, Some(ticket)).await;
            }
            if self.is_stale(ticket) {
                return;
            }
            for (section_id, node) in self.loaded.borrow().iter() {
                self.shell.set_node_active(node, *section_id == id);
            }
            return;
        }

        self.load_sections_for(&[], Some(ticket)).await;
        if self.is_stale(ticket) {
            return;
        }
        for (section_id, node) in self.loaded.borrow().iter() {
            let hidden = self.config.section(section_id).is_some_and(|s| s.hidden);
            self.shell.set_node_active(node, !hidden);
        }
    }

    fn begin_navigation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.generation.get() != ticket
    }
}

impl<S: Shell + 'static, F: FragmentSource + 'static> Navigator<S, F> {
    /// Bind the sidebar, then lay out the initial section.
    pub async fn start(self: &Rc<Self>) {
        self.bind_sidebar();
        self.init().await;
    }

    /// Re-derive the layout for the current viewport class. Runs once per
    /// debounced burst of resize events.
    pub async fn relayout(self: &Rc<Self>) {
        let ticket = self.begin_navigation();
        if self.is_mobile() {
            self.apply_mobile_layout(ticket).await;
            return;
        }

        if let Some(route) = HashRoute::resolve(&self.shell.location_hash(), &self.config.sections) {
            *self.current.borrow_mut() = route.section_id;
        }
        let id = self.current_section();
        if !self.is_loaded(&id) {
            self.load_section_for(&id, Some(ticket)).await;
        }
        if self.is_stale(ticket) {
            return;
        }
        self.select_section(&id, true);
        self.bind_sidebar();
    }

    /// Attach a click listener to every sidebar link, first detaching any
    /// listener this navigator attached earlier.
    pub fn bind_sidebar(self: &Rc<Self>) {
        for target in self.shell.link_targets() {
            let previous = self.bindings.borrow_mut().remove(&target);
            if let Some(previous) = previous {
                self.shell.unbind_link_click(previous);
            }

            let nav = Rc::downgrade(self);
            let link_target = target.clone();
            let handler = Box::new(move || {
                let Some(nav) = nav.upgrade() else {
                    return;
                };
                let task_nav = Rc::clone(&nav);
                let id = link_target.clone();
                nav.shell.spawn(async move { task_nav.navigate(&id).await }.boxed_local());
            });

            if let Some(binding) = self.shell.bind_link_click(&target, handler) {
                self.bindings.borrow_mut().insert(target, binding);
            }
        }
    }
}
