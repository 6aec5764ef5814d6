// SPDX-License-Identifier: MPL-2.0
//! Auto-advancing carousel model.
//!
//! The model is clock-agnostic: callers pass the current [`Instant`] to every
//! method, so a UI timer and tests drive it the same way.

use crate::config::{CAROUSEL_ADVANCE_SECS, CAROUSEL_RESUME_SECS};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// One featured card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub title: String,
    #[serde(alias = "subTitle")]
    pub subtitle: String,
    #[serde(alias = "imageName")]
    pub image_url: String,
}

impl CarouselItem {
    #[must_use]
    pub fn new(title: &str, subtitle: &str, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interaction {
    Idle,
    Dragging,
    /// Drag ended; auto-advance resumes at the given instant.
    Resuming(Instant),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    index: usize,
    interaction: Interaction,
    advance_every: Duration,
    resume_after: Duration,
}

impl Carousel {
    #[must_use]
    pub fn new(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            index: 0,
            interaction: Interaction::Idle,
            advance_every: Duration::from_secs(CAROUSEL_ADVANCE_SECS),
            resume_after: Duration::from_secs(CAROUSEL_RESUME_SECS),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&CarouselItem> {
        self.items.get(self.index)
    }

    /// Period of the auto-advance timer.
    #[must_use]
    pub fn advance_interval(&self) -> Duration {
        self.advance_every
    }

    /// Whether the user currently holds auto-advance off.
    #[must_use]
    pub fn is_interacting(&self, now: Instant) -> bool {
        match self.interaction {
            Interaction::Idle => false,
            Interaction::Dragging => true,
            Interaction::Resuming(at) => now < at,
        }
    }

    /// Handles one timer tick. Returns `true` if the index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_interacting(now) || self.items.is_empty() {
            return false;
        }
        self.interaction = Interaction::Idle;
        self.index = (self.index + 1) % self.items.len();
        true
    }

    pub fn drag_started(&mut self) {
        self.interaction = Interaction::Dragging;
    }

    /// Ends a drag; auto-advance resumes after the resume delay.
    pub fn drag_ended(&mut self, now: Instant) {
        self.interaction = Interaction::Resuming(now + self.resume_after);
    }

    /// Jumps to `index` (user swipe). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize) -> Carousel {
        Carousel::new(
            (0..count)
                .map(|i| CarouselItem::new(&format!("Item {i}"), "", ""))
                .collect(),
        )
    }

    #[test]
    fn tick_wraps_around() {
        let now = Instant::now();
        let mut carousel = carousel(3);
        assert!(carousel.tick(now));
        assert!(carousel.tick(now));
        assert_eq!(carousel.index(), 2);
        assert!(carousel.tick(now));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let mut carousel = carousel(0);
        assert!(!carousel.tick(Instant::now()));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
    }

    #[test]
    fn drag_pauses_until_resume_delay() {
        let start = Instant::now();
        let mut carousel = carousel(4);

        carousel.drag_started();
        assert!(!carousel.tick(start + Duration::from_secs(3)));

        let released = start + Duration::from_secs(5);
        carousel.drag_ended(released);
        assert!(!carousel.tick(released + Duration::from_secs(1)));
        assert!(carousel.tick(released + Duration::from_secs(2)));
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.is_interacting(released + Duration::from_secs(2)));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut carousel = carousel(2);
        carousel.select(1);
        assert_eq!(carousel.index(), 1);
        carousel.select(5);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn advance_interval_is_three_seconds() {
        assert_eq!(carousel(1).advance_interval(), Duration::from_secs(3));
    }
}
