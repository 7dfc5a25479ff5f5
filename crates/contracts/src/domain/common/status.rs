use crate::shared::badge::{BadgeVariant, HasBadge};

/// Перечисление статусов с кодом, подписью и вариантом бейджа.
///
/// Codes are the lowercase kebab-case values stored on the rows
/// ("on-hold", "out-of-stock") and used as `<select>` option values.
pub trait StatusCode: Sized + Copy + PartialEq + 'static {
    fn code(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn badge(&self) -> BadgeVariant;

    /// Все значения в порядке отображения в фильтре
    fn all() -> &'static [Self];

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }
}

impl<T: StatusCode> HasBadge for T {
    fn badge_variant(&self) -> BadgeVariant {
        self.badge()
    }

    fn badge_label(&self) -> &'static str {
        self.code()
    }
}
