//! Theme model: the light/dark palette and its icon visibility.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two site palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light palette; the document root carries no marker class.
    #[default]
    Light,
    /// Dark palette; the document root carries the `dark` class.
    Dark,
}

impl Theme {
    /// The persisted string form (`"light"` / `"dark"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the two known strings is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve the theme at page load: an explicit stored choice wins,
    /// otherwise the system-level preference decides.
    #[must_use]
    pub fn initial(stored: Option<Self>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    /// The opposite palette.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the document root should carry the dark marker class.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Construct from the presence of the dark marker class on the root.
    #[must_use]
    pub fn from_root_class(dark_class_present: bool) -> Self {
        if dark_class_present { Self::Dark } else { Self::Light }
    }
}

/// Which theme icons are shown. Icons may appear in several places (desktop
/// and mobile controls); every instance follows this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconVisibility {
    /// Sun icon, shown in light mode.
    pub sun: bool,
    /// Moon icon, shown in dark mode.
    pub moon: bool,
}

impl IconVisibility {
    /// The icon set for a palette.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            sun: !theme.is_dark(),
            moon: theme.is_dark(),
        }
    }
}
