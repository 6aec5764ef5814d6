// SPDX-License-Identifier: MPL-2.0
//! Top navigation categories with pull-to-refresh.

use serde::{Deserialize, Serialize};

const INITIAL_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBar {
    titles: Vec<String>,
    selected: usize,
}

impl Default for CategoryBar {
    fn default() -> Self {
        Self {
            titles: (1..=INITIAL_CATEGORY_COUNT)
                .map(|n| format!("Title{n}"))
                .collect(),
            selected: 0,
        }
    }
}

impl CategoryBar {
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.titles.get(self.selected).map(String::as_str)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.selected = index;
        }
    }

    /// Pull-to-refresh: appends the next numbered category.
    pub fn refresh(&mut self) -> &str {
        let next = format!("Title{}", self.titles.len() + 1);
        self.titles.push(next);
        self.titles.last().map_or("", String::as_str)
    }
}
