// SPDX-License-Identifier: MPL-2.0
//! Effect catalog.
//!
//! Static table mapping each named effect to the numeric domain of its range
//! control and to the filter function applied to the preview. The range
//! control works directly in the physical filter domain: the value read from
//! the control is the value written into the filter, with no rescaling.
//!
//! | Effect | min | max | step | default | filter |
//! |--------|-----|-----|------|---------|--------|
//! | Chrome | 0 | 1 | 0.1 | 1 | `grayscale(v)` |
//! | Sepia | 0 | 1 | 0.1 | 1 | `sepia(v)` |
//! | Marvin | 0 | 100 | 1 | 100 | `invert(v%)` |
//! | Phobos | 0 | 3 | 0.1 | 3 | `blur(vpx)` |
//! | Heat | 1 | 3 | 0.1 | 3 | `brightness(v)` |

// =============================================================================
// Effect
// =============================================================================

/// A named visual filter applicable to the preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// No filter; the range control does not exist.
    #[default]
    None,
    Chrome,
    Sepia,
    Marvin,
    Phobos,
    Heat,
}

impl Effect {
    /// Every effect, in the order the selector lists them.
    pub const ALL: [Effect; 6] = [
        Effect::None,
        Effect::Chrome,
        Effect::Sepia,
        Effect::Marvin,
        Effect::Phobos,
        Effect::Heat,
    ];

    /// Form value submitted for this effect.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::Chrome => "chrome",
            Effect::Sepia => "sepia",
            Effect::Marvin => "marvin",
            Effect::Phobos => "phobos",
            Effect::Heat => "heat",
        }
    }

    /// Parses a form value back into an effect.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|effect| effect.name() == name)
    }

    /// Returns the i18n key of the effect's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Effect::None => "effect-none",
            Effect::Chrome => "effect-chrome",
            Effect::Sepia => "effect-sepia",
            Effect::Marvin => "effect-marvin",
            Effect::Phobos => "effect-phobos",
            Effect::Heat => "effect-heat",
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Effect::None)
    }
}

// =============================================================================
// EffectDomain
// =============================================================================

/// Numeric domain of the range control for one effect.
///
/// Invariant: `min <= default <= max` and `step > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl EffectDomain {
    const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Clamps `value` to the domain and snaps it to the step grid anchored at `min`.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        snap_to_grid(value, self.min, self.max, self.step)
    }
}

/// Clamps and snaps a value to a `step` grid starting at `min`.
///
/// The result is rounded to six decimals so that repeated tenths
/// (`0.1 * 3`) compare equal to their literal form.
#[must_use]
pub fn snap_to_grid(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
    if step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - min) / step).round();
    let snapped = (min + steps * step).min(max);
    (snapped * 1_000_000.0).round() / 1_000_000.0
}

// =============================================================================
// Filter functions
// =============================================================================

/// Filter function applied to the preview for an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFunction {
    Grayscale,
    Sepia,
    Invert,
    Blur,
    Brightness,
}

impl FilterFunction {
    fn css_name(self) -> &'static str {
        match self {
            FilterFunction::Grayscale => "grayscale",
            FilterFunction::Sepia => "sepia",
            FilterFunction::Invert => "invert",
            FilterFunction::Blur => "blur",
            FilterFunction::Brightness => "brightness",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            FilterFunction::Invert => "%",
            FilterFunction::Blur => "px",
            FilterFunction::Grayscale | FilterFunction::Sepia | FilterFunction::Brightness => "",
        }
    }
}

struct CatalogEntry {
    effect: Effect,
    domain: EffectDomain,
    function: FilterFunction,
}

const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        effect: Effect::Chrome,
        domain: EffectDomain::new(0.0, 1.0, 0.1, 1.0),
        function: FilterFunction::Grayscale,
    },
    CatalogEntry {
        effect: Effect::Sepia,
        domain: EffectDomain::new(0.0, 1.0, 0.1, 1.0),
        function: FilterFunction::Sepia,
    },
    CatalogEntry {
        effect: Effect::Marvin,
        domain: EffectDomain::new(0.0, 100.0, 1.0, 100.0),
        function: FilterFunction::Invert,
    },
    CatalogEntry {
        effect: Effect::Phobos,
        domain: EffectDomain::new(0.0, 3.0, 0.1, 3.0),
        function: FilterFunction::Blur,
    },
    CatalogEntry {
        effect: Effect::Heat,
        domain: EffectDomain::new(1.0, 3.0, 0.1, 3.0),
        function: FilterFunction::Brightness,
    },
];

fn entry(effect: Effect) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.effect == effect)
}

/// Range domain of `effect`, or `None` for [`Effect::None`].
#[must_use]
pub fn domain_for(effect: Effect) -> Option<EffectDomain> {
    entry(effect).map(|entry| entry.domain)
}

/// Filter function of `effect`, or `None` for [`Effect::None`].
#[must_use]
pub fn function_for(effect: Effect) -> Option<FilterFunction> {
    entry(effect).map(|entry| entry.function)
}

/// Filter value for `effect` at range position `value`.
///
/// Returns an empty string for [`Effect::None`].
#[must_use]
pub fn filter_for(effect: Effect, value: f64) -> String {
    match function_for(effect) {
        Some(function) => format!(
            "{}({}{})",
            function.css_name(),
            format_level(value),
            function.unit()
        ),
        None => String::new(),
    }
}

/// Formats a range value the way the range control displays it: integral
/// values without decimals, everything else with one decimal.
#[must_use]
pub fn format_level(value: f64) -> String {
    // `+ 0.0` normalizes a negative zero
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

// =============================================================================
// Tests
// =============================================================================
