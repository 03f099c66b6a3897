//! The application color palette.
//!
//! Ten named color roles with fixed values, in a muted "Monet" scheme. The table
//! is a `const` so every export sees exactly the same values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// A named color role in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Main brand color (app bar, bottom navigation)
    Primary,
    /// Secondary brand color
    Secondary,
    /// Highlights and selected items
    Accent,
    /// Screen background
    Background,
    /// Primary text
    TextPrimary,
    /// Secondary text, hints
    TextSecondary,
    /// Button fill
    Button,
    /// Text drawn on buttons
    ButtonText,
    /// Card fill
    Card,
    /// Card shadow tint
    CardShadow,
}

impl ColorRole {
    /// Key used in exported documents and template placeholders.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::Button => "button",
            Self::ButtonText => "button_text",
            Self::Card => "card",
            Self::CardShadow => "card_shadow",
        }
    }

    /// Human-readable description for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Primary => "Primary (taupe)",
            Self::Secondary => "Secondary (pale pink)",
            Self::Accent => "Accent (light gray)",
            Self::Background => "Background (off-white)",
            Self::TextPrimary => "Primary text (dark gray)",
            Self::TextSecondary => "Secondary text (light gray)",
            Self::Button => "Button (sage green)",
            Self::ButtonText => "Button text (white)",
            Self::Card => "Card (white)",
            Self::CardShadow => "Card shadow (pale pink)",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fixed mapping of color roles to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    entries: [(ColorRole, RgbColor); 10],
}

/// The application palette.
pub const MONET_PALETTE: ColorPalette = ColorPalette {
    entries: [
        (ColorRole::Primary, RgbColor::new(0x8C, 0x73, 0x6F)),
        (ColorRole::Secondary, RgbColor::new(0xD4, 0xB8, 0xB4)),
        (ColorRole::Accent, RgbColor::new(0xAD, 0xAA, 0xA5)),
        (ColorRole::Background, RgbColor::new(0xF4, 0xEB, 0xE4)),
        (ColorRole::TextPrimary, RgbColor::new(0x53, 0x56, 0x5C)),
        (ColorRole::TextSecondary, RgbColor::new(0x99, 0x9E, 0xA2)),
        (ColorRole::Button, RgbColor::new(0xAA, 0xB8, 0xAB)),
        (ColorRole::ButtonText, RgbColor::new(0xFF, 0xFF, 0xFF)),
        (ColorRole::Card, RgbColor::new(0xFF, 0xFF, 0xFF)),
        (ColorRole::CardShadow, RgbColor::new(0xE2, 0xC6, 0xC4)),
    ],
};

impl ColorPalette {
    /// Looks up the color for a role.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> RgbColor {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, color)| *color)
            // Palettes are only built as consts listing every role.
            .unwrap_or_default()
    }

    /// Iterates roles and colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, RgbColor)> + '_ {
        self.entries.iter().copied()
    }
}
