/// Direction of a region's last fade; the region is visible after `In`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fade {
    In,
    #[default]
    Out,
}

impl Fade {
    pub fn is_visible(self) -> bool {
        matches!(self, Fade::In)
    }
}

/// Overlay plus pause-menu panel. Both start hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauseMenu {
    pub overlay: Fade,
    pub panel: Fade,
}

impl PauseMenu {
    /// Menu button.
    pub fn open(&mut self) {
        self.overlay = Fade::In;
        self.panel = Fade::In;
    }

    /// Resume button.
    pub fn resume(&mut self) {
        self.overlay = Fade::Out;
        self.panel = Fade::Out;
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_visible() || self.panel.is_visible()
    }
}

/// Inline style for a fading region. Visibility flips immediately on fade-in
/// and only after the opacity transition on fade-out, so hidden regions stop
/// taking clicks once they are gone.
pub fn fade_style(fade: Fade, duration_ms: u32) -> String {
    match fade {
        Fade::In => format!(
            "opacity:1; visibility:visible; pointer-events:auto; transition:opacity {}ms, visibility 0s linear 0s;",
            duration_ms
        ),
        Fade::Out => format!(
            "opacity:0; visibility:hidden; pointer-events:none; transition:opacity {}ms, visibility 0s linear {}ms;",
            duration_ms, duration_ms
        ),
    }
}
