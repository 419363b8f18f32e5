//! The page shell as seen by the navigator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell markup (header, sidebar, content container, theme toggle) ships
//! as static HTML. This trait is everything the navigator reads or writes on
//! it, so navigation logic runs unchanged against the browser DOM and against
//! in-memory test doubles.

use futures::future::LocalBoxFuture;

pub trait Shell {
    /// Handle to a section's root element inside the content container.
    type Node;
    /// A click listener attached to one sidebar link.
    type Binding;

    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> f64;

    /// Address fragment without the leading `#`.
    fn location_hash(&self) -> String;

    /// Replace the address fragment with `#hash` without adding history.
    fn replace_hash(&self, hash: &str);

    /// Append `html` to the end of the content container and return the
    /// element carrying `section_id`, if the markup produced one.
    fn append_fragment(&self, section_id: &str, html: &str) -> Option<Self::Node>;

    fn remove_node(&self, node: &Self::Node);

    fn set_node_active(&self, node: &Self::Node, active: bool);

    fn is_node_active(&self, node: &Self::Node) -> bool;

    /// Run the node's `<script>` elements by recreating them as fresh scripts.
    fn run_embedded_scripts(&self, node: &Self::Node);

    /// Remove every `<script>` element under the node.
    fn strip_embedded_scripts(&self, node: &Self::Node);

    fn scroll_into_view(&self, node: &Self::Node);

    /// Replace the whole content container with `markup`.
    fn show_error_panel(&self, markup: &str);

    /// Make the sidebar link targeting `target` the only active one.
    fn set_active_link(&self, target: &str);

    fn set_header(&self, title: &str, contacts_hidden: bool);

    /// `data-target` of every sidebar link, in document order.
    fn link_targets(&self) -> Vec<String>;

    /// Attach `handler` as a click listener on the link targeting `target`.
    /// Listeners accumulate until unbound.
    fn bind_link_click(&self, target: &str, handler: Box<dyn Fn()>) -> Option<Self::Binding>;

    fn unbind_link_click(&self, binding: Self::Binding);

    /// Run `task` on the page's event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
