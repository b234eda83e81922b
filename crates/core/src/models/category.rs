use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Spending category of an expense. The set is closed.
///
/// The entry form preselects `Food`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    #[default]
    Food,
    Transport,
    Wellness,
    Leisure,
    Utilities,
    Other,
}

impl Category {
    /// All categories in the order the entry form offers them.
    pub const ALL: [Category; 7] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Wellness,
        Category::Leisure,
        Category::Utilities,
        Category::Other,
    ];

    /// Display label, identical to the serialized variant name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Wellness => "Wellness",
            Category::Leisure => "Leisure",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// Styling tokens for this category.
    pub fn style(&self) -> &'static CategoryStyle {
        match self {
            Category::Housing => &HOUSING_STYLE,
            Category::Food => &FOOD_STYLE,
            Category::Transport => &TRANSPORT_STYLE,
            Category::Wellness => &WELLNESS_STYLE,
            Category::Leisure => &LEISURE_STYLE,
            Category::Utilities => &UTILITIES_STYLE,
            Category::Other => &OTHER_STYLE,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ── Styles ──────────────────────────────────────────────────────────

/// Rendering tokens for a category: tile background, label text, and dot accent.
///
/// Tokens are utility-class names; [`hex_for_token`] maps the background token
/// to a concrete color for chart primitives that need one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub bg: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
}

const HOUSING_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-blue-50",
    text: "text-blue-700",
    dot: "bg-blue-400",
};
const FOOD_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-emerald-50",
    text: "text-emerald-700",
    dot: "bg-emerald-400",
};
const TRANSPORT_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-amber-50",
    text: "text-amber-700",
    dot: "bg-amber-400",
};
const WELLNESS_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-rose-50",
    text: "text-rose-700",
    dot: "bg-rose-400",
};
const LEISURE_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-indigo-50",
    text: "text-indigo-700",
    dot: "bg-indigo-400",
};
const UTILITIES_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-slate-100",
    text: "text-slate-700",
    dot: "bg-slate-400",
};
const OTHER_STYLE: CategoryStyle = CategoryStyle {
    bg: "bg-gray-100",
    text: "text-gray-700",
    dot: "bg-gray-400",
};

/// Style used for names that do not resolve to a known category.
pub const FALLBACK_STYLE: &CategoryStyle = &OTHER_STYLE;

/// Neutral color for background tokens missing from the color table.
pub const NEUTRAL_HEX: &str = "#94a3b8";

/// Look up the style for a category given by name, falling back to `Other`.
pub fn style_for_name(name: &str) -> &'static CategoryStyle {
    name.parse::<Category>()
        .map(|c| c.style())
        .unwrap_or(FALLBACK_STYLE)
}

/// Map a background token to a hex color. Unknown tokens get [`NEUTRAL_HEX`].
pub fn hex_for_token(bg_token: &str) -> &'static str {
    match bg_token {
        "bg-blue-50" => "#60a5fa",
        "bg-emerald-50" => "#34d399",
        "bg-amber-50" => "#fbbf24",
        "bg-rose-50" => "#f87171",
        "bg-indigo-50" => "#818cf8",
        "bg-slate-100" => "#94a3b8",
        "bg-gray-100" => "#d1d5db",
        _ => NEUTRAL_HEX,
    }
}
