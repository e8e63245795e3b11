use std::fmt;

use weather_core::LocationQuery;

/// A shortcut offered by the interactive widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularCity {
    pub name: &'static str,
    pub country: &'static str,
}

pub const POPULAR_CITIES: [PopularCity; 6] = [
    PopularCity { name: "New York", country: "US" },
    PopularCity { name: "Los Angeles", country: "US" },
    PopularCity { name: "Tokyo", country: "Japan" },
    PopularCity { name: "Paris", country: "France" },
    PopularCity { name: "London", country: "UK" },
    PopularCity { name: "Sydney", country: "Australia" },
];

impl PopularCity {
    /// Cities are looked up by name only, same as a typed search.
    pub fn query(&self) -> Option<LocationQuery> {
        LocationQuery::parse(self.name)
    }
}

impl fmt::Display for PopularCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}
