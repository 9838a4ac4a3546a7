//! Registry of available layouts
//!
//! The registry is the list a front end shows to the user: every layout in a
//! fixed order, each flagged as enabled or not for the current document.

use crate::layout::LayoutMethod;
use crate::types::PageOrientation;

/// One registry row evaluated against a document orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    pub method: LayoutMethod,
    pub id: &'static str,
    pub display_name: &'static str,
    pub enabled: bool,
    pub orientation_sensitive: bool,
}

/// Ordered list of layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRegistry {
    methods: Vec<LayoutMethod>,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl LayoutRegistry {
    /// Original first, then the folding and cutting layouts
    pub fn standard() -> Self {
        Self {
            methods: LayoutMethod::ALL.to_vec(),
        }
    }

    pub fn methods(&self) -> &[LayoutMethod] {
        &self.methods
    }

    /// Look up a layout by id
    pub fn get(&self, id: &str) -> Option<LayoutMethod> {
        self.methods.iter().copied().find(|m| m.id() == id)
    }

    /// Every layout with its enablement for `orientation`
    pub fn entries(&self, orientation: PageOrientation) -> Vec<LayoutInfo> {
        self.methods
            .iter()
            .map(|&method| LayoutInfo {
                method,
                id: method.id(),
                display_name: method.display_name(),
                enabled: method.is_enabled(orientation),
                orientation_sensitive: method.is_orientation_sensitive(),
            })
            .collect()
    }

    /// Only the layouts usable for `orientation`
    pub fn available_for(&self, orientation: PageOrientation) -> Vec<LayoutMethod> {
        self.methods
            .iter()
            .copied()
            .filter(|m| m.is_enabled(orientation))
            .collect()
    }
}
