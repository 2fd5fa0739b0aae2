//! Home screen: a plain menu of navigation targets with no state of its own
//! beyond the highlighted entry.

use crate::nav::Route;

pub struct HomeEntry {
    pub label: &'static str,
    pub country_code: Option<&'static str>,
}

pub const HOME_ENTRIES: [HomeEntry; 2] = [
    HomeEntry {
        label: "Search for a country",
        country_code: None,
    },
    HomeEntry {
        label: "Open Brazil (BR)",
        country_code: Some("BR"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeMenu {
    selected: usize,
}

impl HomeMenu {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = HOME_ENTRIES.len();
        self.selected = if direction.is_negative() {
            (self.selected + len - 1) % len
        } else {
            (self.selected + 1) % len
        };
    }

    /// Route for the highlighted entry.
    pub fn route(&self) -> Route {
        Self::route_for(self.selected).unwrap_or(Route::Home)
    }

    /// Route for a 0-based entry index.
    pub fn route_for(index: usize) -> Option<Route> {
        HOME_ENTRIES.get(index).map(|entry| Route::Profile {
            country_code: entry.country_code.map(str::to_string),
        })
    }
}
