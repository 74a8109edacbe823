//! Type definitions for the viewer state.

/// Enumeration of the viewer screens.
///
/// This enumeration holds information about what the viewer currently shows. Both screens draw the
/// same maze; they only differ in whether the solution path is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Bare maze screen.
    ///
    /// This variant shows the walls and the two endpoints only.
    Maze,
    /// Solved maze screen.
    ///
    /// This variant additionally highlights the cells marked by the search.
    Solution,
}

impl Screen {
    /// Returns the screen reached by pressing the toggle key.
    pub(crate) const fn toggled(self) -> Self {
        match self {
            Self::Maze => Self::Solution,
            Self::Solution => Self::Maze,
        }
    }

    /// Returns the string representation of the screen.
    ///
    /// This function provides the display name used in the viewer's status line.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Maze => "Maze",
            Self::Solution => "Solution",
        }
    }
}
