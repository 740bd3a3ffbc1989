//! Section Routing
//!
//! Maps the URL fragment to exactly one dashboard section. Unknown
//! fragments log a warning and fall back to the dashboard summary instead
//! of leaving a blank view.

use leptos::logging;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Categories,
    Appointments,
    Tasks,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Categories,
        Section::Appointments,
        Section::Tasks,
        Section::Profile,
    ];

    /// An empty fragment is the initial page load and maps to the default
    /// section; anything else must match a known slug.
    pub fn from_hash(hash: &str) -> Option<Section> {
        match hash.trim_start_matches('#') {
            "" | "dashboard" => Some(Section::Dashboard),
            "categories" => Some(Section::Categories),
            "appointments" => Some(Section::Appointments),
            "tasks" => Some(Section::Tasks),
            "profile" => Some(Section::Profile),
            _ => None,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Section::Dashboard => "#dashboard",
            Section::Categories => "#categories",
            Section::Appointments => "#appointments",
            Section::Tasks => "#tasks",
            Section::Profile => "#profile",
        }
    }

    /// Translated section title shown in the shell header.
    pub fn title_key(&self) -> &'static str {
        match self {
            Section::Dashboard => "nav.dashboard",
            Section::Categories => "nav.categories",
            Section::Appointments => "nav.appointments",
            Section::Tasks => "nav.tasks",
            Section::Profile => "nav.profile",
        }
    }
}

/// Read the current section from `window.location`, falling back to the
/// dashboard for unknown fragments.
pub fn current_section() -> Section {
    let hash = window().location().hash().unwrap_or_default();
    match Section::from_hash(&hash) {
        Some(section) => section,
        None => {
            logging::warn!("unknown section {hash:?}, showing dashboard");
            Section::Dashboard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hashes_map_to_sections() {
        assert_eq!(Section::from_hash("#categories"), Some(Section::Categories));
        assert_eq!(Section::from_hash("appointments"), Some(Section::Appointments));
        assert_eq!(Section::from_hash("#tasks"), Some(Section::Tasks));
        assert_eq!(Section::from_hash("#profile"), Some(Section::Profile));
    }

    #[test]
    fn empty_hash_is_the_default_section() {
        assert_eq!(Section::from_hash(""), Some(Section::Dashboard));
        assert_eq!(Section::from_hash("#"), Some(Section::Dashboard));
        assert_eq!(Section::from_hash("#dashboard"), Some(Section::Dashboard));
    }

    #[test]
    fn unknown_hashes_are_rejected() {
        assert_eq!(Section::from_hash("#settings"), None);
        assert_eq!(Section::from_hash("#Categories"), None);
    }

    #[test]
    fn every_section_round_trips_through_its_hash() {
        for section in Section::ALL {
            assert_eq!(Section::from_hash(section.hash()), Some(section));
        }
    }
}
