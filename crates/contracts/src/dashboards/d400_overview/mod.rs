//! Главная панель: KPI-карточки и обзор модулей по выбранной компании.

pub mod dto;
pub mod kpi;

pub use dto::{KpiCard, OverviewStat, OverviewTab, StatTone, ValueFormat};
pub use kpi::DashboardData;
