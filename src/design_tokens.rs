// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

Visual tokens shared by every rendered toast. Values are emitted as CSS so the
host page can keep its own stylesheet and only override what it needs.

## Organization

- **Palette**: Semantic accent colors, one per severity
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Border**: Border width scale
- **Radius**: Border radii
- **Class**: CSS class names attached to rendered elements

## Examples

```
use notification_center::design_tokens::{palette, sizing};

assert_eq!(palette::SUCCESS_500, "#43b367");
assert!(sizing::TOAST_WIDTH > 0.0);
```
"##]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    // Grayscale
    pub const GRAY_900: &str = "#1a1a1a";
    pub const GRAY_100: &str = "#d9d9d9";

    // Semantic colors
    pub const ERROR_500: &str = "#e53935";
    pub const WARNING_500: &str = "#f1a620";
    pub const SUCCESS_500: &str = "#43b367";
    pub const INFO_500: &str = "#6496ff";
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Accent stripe on the leading edge of a toast.
    pub const WIDTH_ACCENT: f32 = 4.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// CSS Classes
// ============================================================================

pub mod class {
    /// Class of the container that holds every toast.
    pub const CONTAINER: &str = "toast-container";
    /// Base class of a single toast element.
    pub const TOAST: &str = "toast";
    /// Class of the close button inside a dismissible toast.
    pub const DISMISS: &str = "toast-dismiss";
}

/// Inline style for a toast carrying the given accent color.
#[must_use]
pub fn toast_style(accent: &str) -> String {
    format!(
        "width: {}px; padding: {}px; background: {}; color: {}; border: {}px solid {}; border-left-width: {}px; border-radius: {}px",
        sizing::TOAST_WIDTH,
        spacing::SM,
        palette::GRAY_900,
        palette::GRAY_100,
        border::WIDTH_MD,
        accent,
        border::WIDTH_ACCENT,
        radius::MD,
    )
}

/// Inline style for the container stacking the toasts.
#[must_use]
pub fn container_style() -> String {
    format!(
        "display: flex; flex-direction: column; gap: {}px; padding: {}px",
        spacing::XS,
        spacing::MD,
    )
}

/// Inline style for the close button of a toast.
#[must_use]
pub fn dismiss_style() -> String {
    format!(
        "padding: 0 {}px; background: transparent; color: {}; border: {}px solid {}; border-radius: {}px",
        spacing::XS,
        palette::GRAY_100,
        border::WIDTH_SM,
        palette::GRAY_100,
        radius::SM,
    )
}
