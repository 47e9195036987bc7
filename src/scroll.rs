// SPDX-License-Identifier: MPL-2.0
//! Mapping of section identifiers to page offsets.

/// Resolves a section identifier and asks for the page to scroll to it.
pub trait ScrollResolver {
    /// Requests a smooth scroll to `id`. Returns `false`, and requests
    /// nothing, when no such section exists.
    fn scroll_to(&mut self, id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
struct Section {
    id: &'static str,
    height: f32,
}

/// Vertical stack of page sections with known heights.
///
/// Scroll requests are queued here; the front end drains them with
/// [`PageSections::take_pending`] and animates the actual scroll.
#[derive(Debug, Clone, Default)]
pub struct PageSections {
    sections: Vec<Section>,
    pending: Option<f32>,
    viewport_height: f32,
}

impl PageSections {
    pub fn new(sections: impl IntoIterator<Item = (&'static str, f32)>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|(id, height)| Section {
                    id,
                    height: height.max(0.0),
                })
                .collect(),
            pending: None,
            viewport_height: 0.0,
        }
    }

    /// Offset of a section's top edge from the top of the page.
    #[must_use]
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        let mut top = 0.0;
        for section in &self.sections {
            if section.id == id {
                return Some(top);
            }
            top += section.height;
        }
        None
    }

    #[must_use]
    pub fn height_of(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.height)
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.sections.iter().map(|section| section.height).sum()
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest offset the page can scroll to.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    /// Top edge of a section relative to the viewport, for a page scrolled
    /// by `scroll_y`.
    #[must_use]
    pub fn viewport_top(&self, id: &str, scroll_y: f32) -> Option<f32> {
        self.offset_of(id).map(|top| top - scroll_y)
    }

    /// Drains the last requested scroll offset.
    pub fn take_pending(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|section| section.id)
    }
}

impl ScrollResolver for PageSections {
    fn scroll_to(&mut self, id: &str) -> bool {
        let Some(top) = self.offset_of(id) else {
            tracing::debug!(id, "scroll target not found");
            return false;
        };
        let offset = top.min(self.max_scroll());
        tracing::debug!(id, offset, "scroll requested");
        self.pending = Some(offset);
        true
    }
}
