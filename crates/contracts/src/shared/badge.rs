use serde::{Deserialize, Serialize};

/// Визуальный вариант бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Warning,
}

impl BadgeVariant {
    pub fn code(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Warning => "warning",
        }
    }

    /// CSS modifier class
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge--primary",
            BadgeVariant::Secondary => "badge--neutral",
            BadgeVariant::Outline => "badge--outline",
            BadgeVariant::Destructive => "badge--error",
            BadgeVariant::Warning => "badge--warning",
        }
    }
}

/// Status value rendered as a badge
pub trait HasBadge {
    fn badge_variant(&self) -> BadgeVariant;
    fn badge_label(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes_are_distinct() {
        let all = [
            BadgeVariant::Default,
            BadgeVariant::Secondary,
            BadgeVariant::Outline,
            BadgeVariant::Destructive,
            BadgeVariant::Warning,
        ];
        let mut classes: Vec<&str> = all.iter().map(|v| v.css_class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), all.len());
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
    }
}
