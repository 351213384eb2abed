pub mod context;
pub mod store;

pub use context::*;
pub use store::*;

/// Contract between the host page runtime and a dockpane extension.
///
/// The host invokes `on_init` exactly once per page lifecycle after the page
/// is ready; the returned result is the completion signal the host awaits
/// before delivering any further events. The remaining callbacks mirror the
/// page events a host can forward and default to no-ops.
///
/// # Example
/// ```ignore
/// use dockpane_plugin::{Context, Extension};
///
/// struct Badge {
///     shown: bool,
/// }
///
/// impl Extension for Badge {
///     fn on_init(&mut self, ctx: &Context) -> Result<(), String> {
///         ctx.info("badge ready");
///         self.shown = true;
///         Ok(())
///     }
/// }
/// ```
pub trait Extension: Send {
    /// Called once per page lifecycle, after the host has prepared the page.
    fn on_init(&mut self, ctx: &Context) -> Result<(), String>;

    /// Called when the page's full load event has fired.
    fn on_page_load(&mut self, _ctx: &Context) {}

    /// Called when the viewport width changes.
    fn on_resize(&mut self, _ctx: &Context, _viewport_width: f64) {}

    /// Called when the host tears the page down.
    fn on_teardown(&mut self, _ctx: &Context) {}
}
