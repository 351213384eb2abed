use dockpane_plugin::{Context, Extension};

use crate::{Error, OverlayConfig, OverlayController};

/// The overlay extension. Holds no elements until the host runs the init
/// hook; everything afterwards lives in the [`OverlayController`].
pub struct OverlayCustomizer {
    config: OverlayConfig,
    controller: Option<OverlayController>,
}

impl OverlayCustomizer {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            controller: None,
        }
    }

    /// Customizer over the configuration bundled at compile time.
    pub fn bundled() -> Result<Self, Error> {
        Ok(Self::new(OverlayConfig::bundled()?))
    }

    /// Arm the deferred frame load. True when the host should schedule the
    /// delayed completion.
    pub fn page_loaded(&mut self) -> bool {
        self.controller
            .as_mut()
            .map(|controller| controller.request_lazy_load())
            .unwrap_or(false)
    }

    pub fn controller(&self) -> Option<&OverlayController> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut OverlayController> {
        self.controller.as_mut()
    }
}

impl Extension for OverlayCustomizer {
    fn on_init(&mut self, ctx: &Context) -> Result<(), String> {
        ctx.info("Initializing overlay customizer");
        self.controller = Some(OverlayController::initialize(self.config.clone(), ctx));
        ctx.info("Overlay customizer has been initialized");
        Ok(())
    }

    fn on_page_load(&mut self, _ctx: &Context) {
        self.page_loaded();
    }

    fn on_resize(&mut self, _ctx: &Context, viewport_width: f64) {
        if let Some(controller) = self.controller.as_mut() {
            controller.resize(viewport_width);
        }
    }

    fn on_teardown(&mut self, ctx: &Context) {
        ctx.info("Tearing down overlay customizer");
        self.controller = None;
    }
}
