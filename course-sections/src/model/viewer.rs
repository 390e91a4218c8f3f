use serde::{Deserialize, Serialize};

/// The person looking at the course page.
///
/// Both flags come from the host application's capability evaluation and are
/// passed explicitly to every resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// May see hidden and not-yet-started sections (course staff).
    #[serde(default)]
    pub can_view_hidden: bool,
    /// The page is in editing mode.
    #[serde(default)]
    pub is_editing: bool,
}

impl Viewer {
    /// An enrolled learner without special capabilities.
    #[must_use]
    pub fn learner() -> Self {
        Self::default()
    }

    /// A viewer allowed to see hidden sections.
    #[must_use]
    pub fn staff() -> Self {
        Self {
            can_view_hidden: true,
            is_editing: false,
        }
    }

    #[must_use]
    pub fn editing(mut self) -> Self {
        self.is_editing = true;
        self
    }
}
