//! Clickable regions recorded during rendering.
//!
//! Each frame registers the screen rectangle of every interactive element
//! together with the action a click on it performs. Mouse-down events are
//! resolved against the most recent frame's registry.

use crate::app::Action;
use ratatui::layout::{Position as ScreenPosition, Rect};

/// Registry of clickable regions for one rendered frame.
#[derive(Debug, Default)]
pub struct HitMap {
    areas: Vec<(Rect, Action)>,
}

impl HitMap {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Registers a clickable region.
    pub fn register(&mut self, area: Rect, action: Action) {
        self.areas.push((area, action));
    }

    /// Returns the action for the region containing the given screen
    /// cell, if any. Earlier registrations win on overlap.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Action> {
        self.areas
            .iter()
            .find(|(area, _)| area.contains(ScreenPosition::new(x, y)))
            .map(|(_, action)| *action)
    }
}
