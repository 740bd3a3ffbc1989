//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::router::Section;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible section - read
    pub section: ReadSignal<Section>,
    /// Currently visible section - write (hashchange listener only)
    set_section: WriteSignal<Section>,
    /// Trigger to reload the active section's data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active section's data - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        section: (ReadSignal<Section>, WriteSignal<Section>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            section: section.0,
            set_section: section.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Force the active section to reload its data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Sync the section signal after a hash change
    pub fn set_section(&self, section: Section) {
        self.set_section.set(section);
    }

    /// Handle a nav-link click. The anchor's default behavior updates the
    /// hash and fires hashchange; when the target already is the active
    /// section no event fires, so force a reload instead.
    pub fn link_clicked(&self, target: Section) {
        if self.section.get_untracked() == target {
            self.reload();
        }
    }
}
