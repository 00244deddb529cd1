//! Static poster theme catalog.
//!
//! Themes are baked into the binary: a small fixed set of color/gradient
//! tokens consumed only by the poster renderer. They are never created or
//! edited at runtime, only looked up by id.

use serde::Serialize;

/// Color tokens for one theme. All values are CSS hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Fill for the materials panel.
    pub primary: &'static str,
    /// Border color for the image slot.
    pub secondary: &'static str,
    /// Body text color.
    pub text: &'static str,
    /// Section heading color.
    pub accent: &'static str,
    /// Page background.
    pub background: &'static str,
    /// Header gradient start.
    pub gradient_from: &'static str,
    /// Header gradient end.
    pub gradient_to: &'static str,
}

/// A poster theme: stable id, human-readable name, color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub display_name: &'static str,
    pub colors: ThemeColors,
}

/// The full theme catalog. The first entry is the default.
pub const THEMES: [Theme; 4] = [
    Theme {
        id: "solar-orange",
        display_name: "Solar Blast",
        colors: ThemeColors {
            primary: "#ea580c",
            secondary: "#facc15",
            text: "#111827",
            accent: "#ea580c",
            background: "#ffffff",
            gradient_from: "#ea580c",
            gradient_to: "#eab308",
        },
    },
    Theme {
        id: "eco-green",
        display_name: "Eco Green",
        colors: ThemeColors {
            primary: "#15803d",
            secondary: "#34d399",
            text: "#111827",
            accent: "#15803d",
            background: "#f0fdf4",
            gradient_from: "#15803d",
            gradient_to: "#10b981",
        },
    },
    Theme {
        id: "ocean-blue",
        display_name: "Ocean Energy",
        colors: ThemeColors {
            primary: "#1d4ed8",
            secondary: "#22d3ee",
            text: "#111827",
            accent: "#1d4ed8",
            background: "#eff6ff",
            gradient_from: "#1d4ed8",
            gradient_to: "#06b6d4",
        },
    },
    Theme {
        id: "modern-dark",
        display_name: "Modern Dark",
        colors: ThemeColors {
            primary: "#1f2937",
            secondary: "#8b5cf6",
            text: "#f3f4f6",
            accent: "#a78bfa",
            background: "#111827",
            gradient_from: "#1f2937",
            gradient_to: "#374151",
        },
    },
];

/// Look up a theme by its stable id.
pub fn theme_by_id(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// The catalog default, used when a record has no theme or an unknown id.
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}
