// SPDX-License-Identifier: MPL-2.0
//! Filter identifiers and the live-preview filter selection.

use super::newtypes::Intensity;
use std::fmt;
use std::str::FromStr;

/// A color or blur filter that can be applied to an image.
///
/// [`FilterKind::None`] is the identity transform. Parsing an unknown
/// identifier also yields `None`, so stale identifiers degrade to a no-op
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    None,
    Sepia,
    Noir,
    Mono,
    Vivid,
    Blur,
    Contrast,
}

impl FilterKind {
    /// Every filter kind, in picker order.
    pub const ALL: [FilterKind; 7] = [
        FilterKind::None,
        FilterKind::Sepia,
        FilterKind::Noir,
        FilterKind::Mono,
        FilterKind::Vivid,
        FilterKind::Blur,
        FilterKind::Contrast,
    ];

    /// Stable lowercase identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Sepia => "sepia",
            FilterKind::Noir => "noir",
            FilterKind::Mono => "mono",
            FilterKind::Vivid => "vivid",
            FilterKind::Blur => "blur",
            FilterKind::Contrast => "contrast",
        }
    }

    /// Label shown in the filter picker.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            FilterKind::None => "Original",
            FilterKind::Sepia => "Sepia",
            FilterKind::Noir => "Noir",
            FilterKind::Mono => "Mono",
            FilterKind::Vivid => "Vivid",
            FilterKind::Blur => "Blur",
            FilterKind::Contrast => "Contrast",
        }
    }

    /// Returns `true` if the filter's output depends on an intensity value.
    #[must_use]
    pub fn uses_intensity(self) -> bool {
        matches!(
            self,
            FilterKind::Sepia | FilterKind::Blur | FilterKind::Contrast
        )
    }

    /// Parses an identifier, mapping anything unknown to [`FilterKind::None`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "sepia" => FilterKind::Sepia,
            "noir" => FilterKind::Noir,
            "mono" => FilterKind::Mono,
            "vivid" => FilterKind::Vivid,
            "blur" => FilterKind::Blur,
            "contrast" => FilterKind::Contrast,
            _ => FilterKind::None,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FilterKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}

/// The single active filter of the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterSelection {
    pub kind: FilterKind,
    pub intensity: Intensity,
}

impl FilterSelection {
    #[must_use]
    pub fn new(kind: FilterKind, intensity: Intensity) -> Self {
        Self { kind, intensity }
    }

    /// Returns the intensity only when a real filter is selected.
    #[must_use]
    pub fn effective_intensity(&self) -> Option<Intensity> {
        match self.kind {
            FilterKind::None => None,
            _ => Some(self.intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_id(kind.id()), kind);
        }
    }

    #[test]
    fn unknown_identifier_is_identity() {
        assert_eq!(FilterKind::from_id("chrome"), FilterKind::None);
        assert_eq!("".parse::<FilterKind>(), Ok(FilterKind::None));
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(FilterKind::from_id(" Sepia "), FilterKind::Sepia);
    }

    #[test]
    fn none_selection_has_no_effective_intensity() {
        let selection = FilterSelection::default();
        assert_eq!(selection.effective_intensity(), None);

        let blur = FilterSelection::new(FilterKind::Blur, Intensity::new(0.2));
        assert_eq!(blur.effective_intensity(), Some(Intensity::new(0.2)));
    }

    #[test]
    fn display_name_of_none_is_original() {
        assert_eq!(FilterKind::None.display_name(), "Original");
    }
}
