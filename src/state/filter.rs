use crate::models::Category;

/// Search bar input state
///
/// Collected on every keystroke and selection but not applied to the
/// featured grid yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub category: Category,
}

impl FilterState {
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}
