pub mod logging;
pub mod store;

pub use logging::*;
pub use store::*;

use std::sync::{Arc, Mutex, MutexGuard};

use dockpane_core::{LAZY_LOAD_DELAY, OverlayCustomizer};
use dockpane_plugin::{Context, Extension, LogSink, SessionStore};

/// Reference host for the overlay customizer. Owns the extension behind a
/// mutex, forwards page events to it, and runs the deferred frame load on
/// the ambient tokio runtime.
pub struct OverlayHost {
    extension: Arc<Mutex<OverlayCustomizer>>,
    context: Context,
}

impl OverlayHost {
    /// Wrap a customizer with host-provided logging and session persistence.
    pub fn new<L, S>(customizer: OverlayCustomizer, log: L, store: S) -> Self
    where
        L: LogSink + 'static,
        S: SessionStore + 'static,
    {
        Self {
            extension: Arc::new(Mutex::new(customizer)),
            context: Context::new(log, store),
        }
    }

    /// Run the extension's init hook. Resolves once the synchronous setup
    /// has completed.
    pub async fn initialize(&self) -> Result<(), String> {
        self.lock()?.on_init(&self.context)
    }

    /// The page's full load event. Arms the one-shot deferred frame load and
    /// schedules its completion after [`LAZY_LOAD_DELAY`]; once scheduled it
    /// cannot be cancelled.
    pub fn page_loaded(&self) -> Result<(), String> {
        let scheduled = self.lock()?.page_loaded();
        if scheduled {
            let extension = Arc::clone(&self.extension);
            tokio::spawn(async move {
                tokio::time::sleep(LAZY_LOAD_DELAY).await;
                if let Ok(mut ext) = extension.lock() {
                    if let Some(controller) = ext.controller_mut() {
                        controller.complete_lazy_load();
                    }
                }
            });
        }
        Ok(())
    }

    /// Viewport width change.
    pub fn viewport_resized(&self, viewport_width: f64) -> Result<(), String> {
        self.lock()?.on_resize(&self.context, viewport_width);
        Ok(())
    }

    /// The minimize control was activated, by click or keyboard. Ignored
    /// when the control is hidden or detached.
    pub fn minimize_activated(&self) -> Result<(), String> {
        let mut ext = self.lock()?;
        if let Some(controller) = ext.controller_mut() {
            if controller.elements().minimize.interactable() {
                controller.minimize(&self.context, true);
            }
        }
        Ok(())
    }

    /// The restore control was activated, by click or keyboard. Ignored when
    /// the control is hidden or detached.
    pub fn restore_activated(&self) -> Result<(), String> {
        let mut ext = self.lock()?;
        if let Some(controller) = ext.controller_mut() {
            if controller.elements().restore.interactable() {
                controller.restore(&self.context, true);
            }
        }
        Ok(())
    }

    /// The embedded frame reported a load error.
    pub fn frame_errored(&self) -> Result<(), String> {
        let mut ext = self.lock()?;
        if let Some(controller) = ext.controller_mut() {
            controller.fail_frame(&self.context);
        }
        Ok(())
    }

    /// Page teardown.
    pub fn teardown(&self) -> Result<(), String> {
        self.lock()?.on_teardown(&self.context);
        Ok(())
    }

    /// Run a closure against the hosted customizer. Embedders use this to
    /// render the element model; tests use it to observe state.
    pub fn with_customizer<R>(&self, f: impl FnOnce(&OverlayCustomizer) -> R) -> Result<R, String> {
        let ext = self.lock()?;
        Ok(f(&ext))
    }

    /// The context handed to the extension.
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn lock(&self) -> Result<MutexGuard<'_, OverlayCustomizer>, String> {
        self.extension.lock().map_err(|e| e.to_string())
    }
}
