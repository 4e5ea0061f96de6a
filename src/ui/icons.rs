//! Status vocabulary for checklist output.

use super::theme::Theme;

/// Outcome kinds shown next to checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed and blocks the installation.
    Failed,
    /// Check failed but is tolerated.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn format_with_plain_theme() {
        let theme = Theme::plain();
        assert_eq!(StatusKind::Failed.format(&theme, "PHP"), "✗ PHP");
        assert_eq!(StatusKind::Warning.format(&theme, "LDAP"), "⚠ LDAP");
    }
}
