//! Display metadata for membership plan themes.
//!
//! The plan document stores a closed theme enumeration; the gradient and
//! icon a theme maps to live here, resolved once at render time.

use crate::models::PlanTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDisplay {
    /// Tailwind-style gradient classes for the plan card background.
    pub gradient: &'static str,
    /// Icon name from the shared icon set.
    pub icon: &'static str,
}

pub fn theme_display(theme: PlanTheme) -> ThemeDisplay {
    match theme {
        PlanTheme::Starter => ThemeDisplay {
            gradient: "from-primary to-secondary",
            icon: "Zap",
        },
        PlanTheme::Performance => ThemeDisplay {
            gradient: "from-orange-500 to-red-500",
            icon: "Flame",
        },
        PlanTheme::Elite => ThemeDisplay {
            gradient: "from-amber-400 to-yellow-600",
            icon: "Crown",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_display_metadata() {
        for theme in [PlanTheme::Starter, PlanTheme::Performance, PlanTheme::Elite] {
            let display = theme_display(theme);
            assert!(!display.gradient.is_empty());
            assert!(!display.icon.is_empty());
        }
    }
}
