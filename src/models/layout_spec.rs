//! Layout metrics for the generated UI components.
//!
//! Each component category carries an ordered list of named metrics. A metric is
//! either a dimension (`56dp`) or a reference to a palette role, resolved to the
//! role's hex value when exported.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ColorPalette, ColorRole};

/// A UI component category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Top app bar with toolbar
    AppBar,
    /// Bottom navigation view
    BottomNavigation,
    /// Card views
    Cards,
    /// Material buttons
    Buttons,
    /// Text input fields
    TextFields,
}

impl Component {
    /// Key used in exported documents and template placeholders.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AppBar => "app_bar",
            Self::BottomNavigation => "bottom_navigation",
            Self::Cards => "cards",
            Self::Buttons => "buttons",
            Self::TextFields => "text_fields",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A size in density-independent pixels, e.g. `56dp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Magnitude in dp
    pub value: u16,
}

impl Dimension {
    /// A dimension in dp.
    #[must_use]
    pub const fn dp(value: u16) -> Self {
        Self { value }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.value)
    }
}

/// Value of a single layout metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    /// A size
    Dimension(Dimension),
    /// A palette color
    Color(ColorRole),
}

impl MetricValue {
    /// Resolves the value to its exported string form.
    ///
    /// Color references resolve through `palette`; dimensions render as `<n>dp`.
    #[must_use]
    pub fn resolve(&self, palette: &ColorPalette) -> String {
        match self {
            Self::Dimension(d) => d.to_string(),
            Self::Color(role) => palette.get(*role).to_hex(),
        }
    }
}

/// A named metric of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// Metric key, e.g. `corner_radius`
    pub name: &'static str,
    /// Metric value
    pub value: MetricValue,
}

const fn dp(name: &'static str, value: u16) -> Metric {
    Metric {
        name,
        value: MetricValue::Dimension(Dimension::dp(value)),
    }
}

const fn color(name: &'static str, role: ColorRole) -> Metric {
    Metric {
        name,
        value: MetricValue::Color(role),
    }
}

/// Metrics of a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// The component
    pub component: Component,
    /// Metrics in declaration order
    pub metrics: &'static [Metric],
}

/// A fixed mapping of components to their metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    components: &'static [ComponentSpec],
}

/// Layout metrics for the modern UI scaffold.
pub const MODERN_LAYOUT: LayoutSpec = LayoutSpec {
    components: &[
        ComponentSpec {
            component: Component::AppBar,
            metrics: &[
                dp("height", 56),
                color("color", ColorRole::Primary),
                color("text_color", ColorRole::TextPrimary),
                dp("elevation", 4),
            ],
        },
        ComponentSpec {
            component: Component::BottomNavigation,
            metrics: &[
                dp("height", 56),
                color("color", ColorRole::Primary),
                color("selected_item_color", ColorRole::Accent),
                color("unselected_item_color", ColorRole::TextSecondary),
            ],
        },
        ComponentSpec {
            component: Component::Cards,
            metrics: &[
                dp("corner_radius", 8),
                dp("elevation", 2),
                dp("padding", 16),
                dp("margin", 8),
            ],
        },
        ComponentSpec {
            component: Component::Buttons,
            metrics: &[
                dp("height", 48),
                dp("corner_radius", 24),
                dp("padding", 16),
                dp("elevation", 4),
            ],
        },
        ComponentSpec {
            component: Component::TextFields,
            metrics: &[
                dp("height", 56),
                dp("corner_radius", 4),
                dp("padding", 16),
                color("hint_color", ColorRole::TextSecondary),
                color("text_color", ColorRole::TextPrimary),
            ],
        },
    ],
};

impl LayoutSpec {
    /// Iterates components in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentSpec> + '_ {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MONET_PALETTE;

    fn metric(component: Component, name: &str) -> Metric {
        let spec = MODERN_LAYOUT
            .iter()
            .find(|c| c.component == component)
            .unwrap();
        *spec.metrics.iter().find(|m| m.name == name).unwrap()
    }

    #[test]
    fn test_layout_covers_every_component() {
        let components: Vec<Component> = MODERN_LAYOUT.iter().map(|c| c.component).collect();
        assert_eq!(
            components,
            vec![
                Component::AppBar,
                Component::BottomNavigation,
                Component::Cards,
                Component::Buttons,
                Component::TextFields
            ]
        );
        let total: usize = MODERN_LAYOUT.iter().map(|c| c.metrics.len()).sum();
        assert_eq!(total, 21);
    }

    #[test]
    fn test_metric_names_unique_per_component() {
        for spec in MODERN_LAYOUT.iter() {
            let mut names: Vec<&str> = spec.metrics.iter().map(|m| m.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), spec.metrics.len(), "{}", spec.component);
        }
    }

    #[test]
    fn test_resolve_color_reference() {
        let color = metric(Component::AppBar, "color");
        assert_eq!(color.value.resolve(&MONET_PALETTE), "#8C736F");

        let hint = metric(Component::TextFields, "hint_color");
        assert_eq!(hint.value.resolve(&MONET_PALETTE), "#999EA2");
    }

    #[test]
    fn test_resolve_dimension() {
        let radius = metric(Component::Buttons, "corner_radius");
        assert_eq!(radius.value.resolve(&MONET_PALETTE), "24dp");
        assert_eq!(Dimension::dp(0).to_string(), "0dp");
    }

    #[test]
    fn test_component_keys_are_snake_case() {
        assert_eq!(Component::BottomNavigation.key(), "bottom_navigation");
        assert_eq!(
            serde_json::to_string(&Component::TextFields).unwrap(),
            "\"text_fields\""
        );
    }
}
