use std::time::Duration;

use dockpane_plugin::Context;

use crate::OverlayConfig;
use crate::overlay::elements::OverlayElements;
use crate::overlay::geometry::{COLLAPSED_HEIGHT, Geometry, ViewportTier};

/// Session-store key recording the last requested visibility state.
pub const MINIMIZED_KEY: &str = "iframeMinimized";

/// Delay between the page's load event and the frame source assignment.
pub const LAZY_LOAD_DELAY: Duration = Duration::from_secs(1);

/// Failure text shown in the container when the frame cannot load.
pub const FRAME_LOAD_ERROR: &str = "Failed to load the iframe.";

/// The two visibility states of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Expanded,
    Minimized,
}

/// Read the persisted visibility flag. Absent or unrecognized values
/// normalize to expanded.
pub fn stored_minimized(ctx: &Context) -> bool {
    ctx.session_get(MINIMIZED_KEY).as_deref() == Some("true")
}

/// Owns the overlay elements and drives the visibility state machine.
pub struct OverlayController {
    config: OverlayConfig,
    elements: OverlayElements,
    state: Visibility,
    viewport_width: Option<f64>,
    load_requested: bool,
}

impl OverlayController {
    /// Build the element tree and apply the persisted visibility state.
    /// Startup never writes the flag back; the frame stays hidden either way
    /// until the deferred load reveals it.
    pub fn initialize(config: OverlayConfig, ctx: &Context) -> Self {
        let mut controller = Self {
            config,
            elements: OverlayElements::build(),
            state: Visibility::Expanded,
            viewport_width: None,
            load_requested: false,
        };
        if stored_minimized(ctx) {
            controller.minimize(ctx, false);
        }
        controller
    }

    /// Collapse the container. Idempotent.
    pub fn minimize(&mut self, ctx: &Context, persist: bool) {
        self.state = Visibility::Minimized;
        self.elements.container.geometry.height = COLLAPSED_HEIGHT;
        self.elements.frame.visible = false;
        self.elements.minimize.visible = false;
        self.elements.restore.visible = true;
        if persist {
            ctx.session_set(MINIMIZED_KEY, "true");
        }
    }

    /// Expand the container back to the current tier's full height.
    /// Idempotent.
    pub fn restore(&mut self, ctx: &Context, persist: bool) {
        self.state = Visibility::Expanded;
        self.elements.container.geometry.height = self.expanded_height();
        self.elements.frame.visible = true;
        self.elements.minimize.visible = true;
        self.elements.restore.visible = false;
        if persist {
            ctx.session_set(MINIMIZED_KEY, "false");
        }
    }

    /// Viewport width change. Recomputes the full container geometry; the
    /// visibility state is unchanged.
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = Some(viewport_width);
        let tier = ViewportTier::for_width(viewport_width);
        self.elements.container.geometry =
            Geometry::for_tier(tier, self.state == Visibility::Minimized);
    }

    /// Arm the one-shot deferred load. Returns true exactly once; the host
    /// schedules the delayed completion when armed.
    pub fn request_lazy_load(&mut self) -> bool {
        if self.load_requested {
            return false;
        }
        self.load_requested = true;
        true
    }

    /// Deferred half of the lazy load: point the frame at the configured URL
    /// and turn its display on. Runs `LAZY_LOAD_DELAY` after the load event;
    /// once scheduled it cannot be cancelled, and it does not consult the
    /// current visibility state.
    pub fn complete_lazy_load(&mut self) {
        self.elements.frame.src = Some(self.config.iframe_url.clone());
        self.elements.frame.visible = true;
    }

    /// Frame load failure: report it and replace the container contents with
    /// the static failure text. Terminal for this page lifecycle; there is no
    /// retry path short of a full page reload.
    pub fn fail_frame(&mut self, ctx: &Context) {
        ctx.error(FRAME_LOAD_ERROR);
        self.elements.fail(FRAME_LOAD_ERROR);
    }

    pub fn visibility(&self) -> Visibility {
        self.state
    }

    pub fn is_minimized(&self) -> bool {
        self.state == Visibility::Minimized
    }

    pub fn elements(&self) -> &OverlayElements {
        &self.elements
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    fn expanded_height(&self) -> f64 {
        match self.viewport_width {
            Some(width) => Geometry::expanded_height(ViewportTier::for_width(width)),
            None => Geometry::initial().height,
        }
    }
}
