//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the checklist including requirement descriptions.
    Verbose,
    /// Show the checklist.
    #[default]
    Normal,
    /// Show the final verdict only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows requirement descriptions.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the per-requirement checklist.
    pub fn shows_checklist(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
