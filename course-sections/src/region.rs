//! The collapsible "future weeks" region of the course page.
//!
//! Staff viewers see sections that have not started yet grouped under a
//! region that opens at the first future section. It closes at the first
//! listed section that reaches the release horizon, or at the end of the list,
//! and never reopens afterwards.

/// Where the iteration stands with respect to the future region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionState {
    /// No region has been opened yet.
    #[default]
    Closed,
    /// Sections are being placed inside the region.
    Open,
    /// The region was opened and closed; it won't open again.
    ClosedFinal,
}

/// State machine driving the open/close markers of the future region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FutureRegion {
    state: RegionState,
}

impl FutureRegion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RegionState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == RegionState::Open
    }

    #[must_use]
    pub fn is_final(&self) -> bool {
        self.state == RegionState::ClosedFinal
    }

    /// Called before a section. Opens the region if this is the first future
    /// section and the viewer may see hidden sections.
    ///
    /// Returns `true` if an open marker must be emitted.
    pub fn enter(&mut self, is_future: bool, can_view_hidden: bool) -> bool {
        if self.state == RegionState::Closed && is_future && can_view_hidden {
            self.state = RegionState::Open;
            return true;
        }
        false
    }

    /// Whether a section placed at the current position is shown in full,
    /// regardless of its own start date.
    #[must_use]
    pub fn reveals(&self, can_view_hidden: bool) -> bool {
        match self.state {
            RegionState::Open => can_view_hidden,
            RegionState::ClosedFinal => true,
            RegionState::Closed => false,
        }
    }

    /// Called after a listed section. Closes an open region once a section
    /// within the release horizon has been reached.
    ///
    /// Returns `true` if a close marker must be emitted.
    pub fn leave(&mut self, reached_horizon: bool) -> bool {
        if self.is_open() && reached_horizon {
            self.state = RegionState::ClosedFinal;
            return true;
        }
        false
    }

    /// Called once after the last section. Closes the region if still open.
    ///
    /// Returns `true` if a close marker must be emitted.
    pub fn finish(&mut self) -> bool {
        self.leave(true)
    }
}
