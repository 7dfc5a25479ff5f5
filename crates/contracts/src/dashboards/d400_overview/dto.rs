use serde::{Deserialize, Serialize};

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn usd() -> Self {
        ValueFormat::Money {
            currency: "USD".to_string(),
        }
    }
}

/// KPI card at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    /// Indicator identifier (e.g., "active_projects")
    pub id: String,
    pub title: String,
    /// `None` when there is nothing to compute from under the current scope
    pub value: Option<f64>,
    pub format: ValueFormat,
    /// Change in percent relative to `trend_label`'s period
    pub trend: f64,
    pub trend_label: String,
    /// Icon name for `icons::icon`
    pub icon: String,
    /// Sparkline series, oldest first
    pub chart_data: Vec<f64>,
}

impl KpiCard {
    pub fn is_trend_positive(&self) -> bool {
        self.trend >= 0.0
    }

    /// Bar heights in percent of the series maximum
    pub fn chart_heights(&self) -> Vec<f64> {
        let max = self.chart_data.iter().cloned().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return vec![0.0; self.chart_data.len()];
        }
        self.chart_data.iter().map(|v| v / max * 100.0).collect()
    }
}

/// Tabs of the module overview block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverviewTab {
    Projects,
    Inventory,
    Finances,
}

impl OverviewTab {
    pub fn code(&self) -> &'static str {
        match self {
            OverviewTab::Projects => "projects",
            OverviewTab::Inventory => "inventory",
            OverviewTab::Finances => "finances",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OverviewTab::Projects => "Projects",
            OverviewTab::Inventory => "Inventory",
            OverviewTab::Finances => "Finances",
        }
    }

    pub fn all() -> Vec<OverviewTab> {
        vec![OverviewTab::Projects, OverviewTab::Inventory, OverviewTab::Finances]
    }
}

/// Colour of the stat icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatTone {
    Primary,
    Destructive,
}

/// Small stat card above an overview table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStat {
    pub title: String,
    pub value: Option<f64>,
    pub format: ValueFormat,
    pub icon: String,
    pub tone: StatTone,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(trend: f64, chart_data: Vec<f64>) -> KpiCard {
        KpiCard {
            id: "x".into(),
            title: "X".into(),
            value: Some(1.0),
            format: ValueFormat::Integer,
            trend,
            trend_label: "vs last month".into(),
            icon: "clipboard".into(),
            chart_data,
        }
    }

    #[test]
    fn test_chart_heights_relative_to_max() {
        let heights = card(1.0, vec![5.0, 10.0, 2.5]).chart_heights();
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
        assert_eq!(card(1.0, vec![0.0, 0.0]).chart_heights(), vec![0.0, 0.0]);
        assert!(card(1.0, vec![]).chart_heights().is_empty());
    }

    #[test]
    fn test_trend_direction() {
        assert!(card(0.0, vec![]).is_trend_positive());
        assert!(!card(-4.0, vec![]).is_trend_positive());
    }

    #[test]
    fn test_value_format_serde_tag() {
        let json = serde_json::to_value(ValueFormat::usd()).unwrap();
        assert_eq!(json["kind"], "Money");
        assert_eq!(json["currency"], "USD");
    }
}
