//! [`Shell`] over the live page via `web-sys`.
//!
//! Expects the static shell markup: `#content-container`, sidebar links
//! `#sidebar .sidebar-link[data-target]`, and a `.header` with `.name` and
//! `.contact-links`. Missing optional pieces are skipped; DOM call failures
//! are ignored in place.

use futures::future::LocalBoxFuture;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, NodeList, Window};

use crate::state::shell::Shell;

pub const CONTENT_CONTAINER_ID: &str = "content-container";
const SIDEBAR_LINK_SELECTOR: &str = "#sidebar .sidebar-link";
const TARGET_ATTRIBUTE: &str = "data-target";
const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";

/// A sidebar click listener, kept so it can be detached later.
pub struct LinkBinding {
    link: Element,
    listener: Closure<dyn Fn()>,
}

pub struct PageShell {
    window: Window,
    document: Document,
    container: Element,
}

impl PageShell {
    /// Attach to the current page. `None` when there is no window, document,
    /// or content container.
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let container = document.get_element_by_id(CONTENT_CONTAINER_ID)?;
        Some(Self { window, document, container })
    }

    fn sidebar_links(&self) -> Vec<Element> {
        self.document
            .query_selector_all(SIDEBAR_LINK_SELECTOR)
            .map(elements)
            .unwrap_or_default()
    }

    fn link_for(&self, target: &str) -> Option<Element> {
        self.sidebar_links()
            .into_iter()
            .find(|link| link.get_attribute(TARGET_ATTRIBUTE).as_deref() == Some(target))
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Shell for PageShell {
    type Node = Element;
    type Binding = LinkBinding;

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .or_else(|| {
                self.document
                    .document_element()
                    .map(|el| f64::from(el.client_width()))
            })
            .unwrap_or_default()
    }

    fn location_hash(&self) -> String {
        self.window
            .location()
            .hash()
            .map(|hash| hash.trim_start_matches('#').to_owned())
            .unwrap_or_default()
    }

    fn replace_hash(&self, hash: &str) {
        let url = format!("#{hash}");
        if let Ok(history) = self.window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()));
        }
    }

    fn append_fragment(&self, section_id: &str, html: &str) -> Option<Element> {
        if let Err(e) = self.container.insert_adjacent_html("beforeend", html) {
            log::warn!("inserting fragment {section_id} failed: {e:?}");
            return None;
        }
        self.document.get_element_by_id(section_id)
    }

    fn remove_node(&self, node: &Element) {
        node.remove();
    }

    fn set_node_active(&self, node: &Element, active: bool) {
        let _ = node.class_list().toggle_with_force(ACTIVE_CLASS, active);
    }

    fn is_node_active(&self, node: &Element) -> bool {
        node.class_list().contains(ACTIVE_CLASS)
    }

    fn run_embedded_scripts(&self, node: &Element) {
        let Ok(scripts) = node.query_selector_all("script") else {
            return;
        };
        let Some(head) = self.document.head() else {
            return;
        };
        // Scripts inserted as markup never execute; fresh elements do.
        for script in elements(scripts) {
            let Ok(fresh) = self.document.create_element("script") else {
                continue;
            };
            fresh.set_text_content(script.text_content().as_deref());
            if head.append_child(&fresh).is_ok() {
                let _ = head.remove_child(&fresh);
            }
        }
    }

    fn strip_embedded_scripts(&self, node: &Element) {
        if let Ok(scripts) = node.query_selector_all("script") {
            for script in elements(scripts) {
                script.remove();
            }
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        node.scroll_into_view();
    }

    fn show_error_panel(&self, markup: &str) {
        self.container.set_inner_html(markup);
    }

    fn set_active_link(&self, target: &str) {
        for link in self.sidebar_links() {
            let on = link.get_attribute(TARGET_ATTRIBUTE).as_deref() == Some(target);
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, on);
        }
    }

    fn set_header(&self, title: &str, contacts_hidden: bool) {
        if let Ok(Some(name)) = self.document.query_selector(".header .name") {
            name.set_text_content(Some(title));
        }
        if let Ok(Some(contacts)) = self.document.query_selector(".header .contact-links") {
            let _ = contacts.class_list().toggle_with_force(HIDDEN_CLASS, contacts_hidden);
        }
    }

    fn link_targets(&self) -> Vec<String> {
        self.sidebar_links()
            .iter()
            .filter_map(|link| link.get_attribute(TARGET_ATTRIBUTE))
            .collect()
    }

    fn bind_link_click(&self, target: &str, handler: Box<dyn Fn()>) -> Option<LinkBinding> {
        let link = self.link_for(target)?;
        let listener = Closure::wrap(handler);
        link.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(LinkBinding { link, listener })
    }

    fn unbind_link_click(&self, binding: LinkBinding) {
        let _ = binding
            .link
            .remove_event_listener_with_callback("click", binding.listener.as_ref().unchecked_ref());
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
