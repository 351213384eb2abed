use crate::overlay::geometry::Geometry;

/// Stacking order of the container on the host page.
pub const CONTAINER_Z_INDEX: u32 = 1000;
/// Stacking order of the control buttons, above the container.
pub const CONTROL_Z_INDEX: u32 = 1001;
/// Control buttons are fixed-size circles.
pub const CONTROL_SIZE: f64 = 30.0;
/// Container corner radius in pixels.
pub const CONTAINER_CORNER_RADIUS: f64 = 8.0;
/// Container background color.
pub const CONTAINER_BACKGROUND: &str = "white";
/// Drop shadow applied to the container.
pub const CONTAINER_SHADOW: &str = "0 4px 8px rgba(0, 0, 0, 0.2)";
/// Easing applied to container geometry changes.
pub const CONTAINER_TRANSITION: &str = "all 0.3s ease";
/// Background color of both control buttons.
pub const CONTROL_BACKGROUND: &str = "#333";

/// What the container currently renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerContent {
    /// The embedded frame plus the minimize control.
    Frame,
    /// Static failure text shown after a frame load error.
    ErrorMessage(String),
}

/// The fixed-position region anchored to the page's bottom-right corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub geometry: Geometry,
    pub content: ContainerContent,
}

/// The embedded content frame. The source stays unset until the deferred
/// load fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub src: Option<String>,
    pub visible: bool,
    pub attached: bool,
    pub title: &'static str,
}

/// A round overlay control button.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub label: &'static str,
    pub title: &'static str,
    pub aria_label: &'static str,
    pub visible: bool,
    pub attached: bool,
}

impl Control {
    /// Whether the control can currently receive activation events.
    pub fn interactable(&self) -> bool {
        self.attached && self.visible
    }
}

/// Every element the overlay owns, built once at initialization. The
/// minimize control lives inside the container; the restore control lives on
/// the page root so it stays reachable while the container is collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayElements {
    pub container: Container,
    pub frame: Frame,
    pub minimize: Control,
    pub restore: Control,
}

impl OverlayElements {
    /// Build the element tree in its fixed order: container, frame (hidden,
    /// source unset), minimize control, restore control (hidden).
    pub fn build() -> Self {
        let container = Container {
            geometry: Geometry::initial(),
            content: ContainerContent::Frame,
        };
        let frame = Frame {
            src: None,
            visible: false,
            attached: true,
            title: "Dockpane Overlay",
        };
        let minimize = Control {
            label: "−",
            title: "Minimize",
            aria_label: "Minimize iframe",
            visible: true,
            attached: true,
        };
        let restore = Control {
            label: "🡅",
            title: "Restore",
            aria_label: "Restore iframe",
            visible: false,
            attached: true,
        };
        Self {
            container,
            frame,
            minimize,
            restore,
        }
    }

    /// Replace the container contents with static failure text and detach
    /// the frame and both controls.
    pub fn fail(&mut self, message: &str) {
        self.container.content = ContainerContent::ErrorMessage(message.to_string());
        self.frame.attached = false;
        self.minimize.attached = false;
        self.restore.attached = false;
    }
}
