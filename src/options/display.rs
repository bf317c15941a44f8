use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Window and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Background the frame is cleared to before the points are drawn.
    #[schemars(skip)]
    pub clear_color: [f64; 4],
    /// Present in lockstep with the display refresh.
    #[schemars(title = "VSync")]
    pub vsync: bool,
    /// Window title (native viewer only).
    #[schemars(skip)]
    pub title: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.1, 1.0],
            vsync: true,
            title: "phyllo".into(),
        }
    }
}

impl DisplayOptions {
    /// The clear color as a wgpu color.
    #[must_use]
    pub fn clear(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }

    /// Present mode matching the `vsync` toggle.
    #[must_use]
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
