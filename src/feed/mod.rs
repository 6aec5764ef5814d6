// SPDX-License-Identifier: MPL-2.0
//! Social feed models: the home tab bar, featured carousel and categories.
//!
//! These are UI-independent state holders; rendering is up to the host.

pub mod carousel;
pub mod categories;

pub use carousel::{Carousel, CarouselItem};
pub use categories::CategoryBar;

use serde::{Deserialize, Serialize};

const FEATURED_IMAGE: &str = "https://platform.polygon.com/wp-content/uploads/sites/2/chorus/uploads/chorus_asset/file/25543078/TDW_14349_R.jpg?quality=90&strip=all&crop=0%2C0%2C100%2C100&w=2400";

/// Bottom tab bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeTab {
    #[default]
    Home,
    Create,
    Inbox,
    Me,
}

impl HomeTab {
    pub const ALL: [HomeTab; 4] = [HomeTab::Home, HomeTab::Create, HomeTab::Inbox, HomeTab::Me];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HomeTab::Home => "Home",
            HomeTab::Create => "Create",
            HomeTab::Inbox => "Inbox",
            HomeTab::Me => "Me",
        }
    }

    /// Position in the tab bar, left to right.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Featured items shown before the backend provides any.
#[must_use]
pub fn featured_items() -> Vec<CarouselItem> {
    vec![
        CarouselItem::new("Halo", "Halo is a game I played on Xbox", FEATURED_IMAGE),
        CarouselItem::new("Star Trek", "I actually love Lower Decks", FEATURED_IMAGE),
        CarouselItem::new("SpongeBob", "Sophia loved this not me", FEATURED_IMAGE),
        CarouselItem::new("Survivor", "The show or the song by DC?", FEATURED_IMAGE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_indices_follow_bar_order() {
        for (i, tab) in HomeTab::ALL.into_iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(HomeTab::from_index(i), Some(tab));
        }
        assert_eq!(HomeTab::from_index(4), None);
        assert_eq!(HomeTab::Me.label(), "Me");
    }

    #[test]
    fn featured_items_decode_from_backend_shape() {
        let json = r#"[{"title": "Halo", "subTitle": "s", "imageName": "u"}]"#;
        let items: Vec<CarouselItem> = serde_json::from_str(json).expect("valid items");
        assert_eq!(items[0], CarouselItem::new("Halo", "s", "u"));
        assert_eq!(featured_items().len(), 4);
    }
}
