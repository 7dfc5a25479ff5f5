use crate::shared::icons::icon;
use crate::shared::number_format::format_value;
use contracts::dashboards::d400_overview::{KpiCard, OverviewStat, StatTone};
use leptos::prelude::*;

/// KPI card: value, trend against the previous period and a bar sparkline
#[component]
pub fn KpiCardView(card: KpiCard) -> impl IntoView {
    let formatted = format_value(card.value, &card.format);
    let positive = card.is_trend_positive();
    let heights = card.chart_heights();

    let (arrow, change_class) = if positive {
        ("arrow-up", "stat-card__change stat-card__change--up")
    } else {
        ("arrow-down", "stat-card__change stat-card__change--down")
    };
    let change_text = format!("{}%", card.trend.abs());

    view! {
        <div class="stat-card stat-card--kpi" data-kpi=card.id.clone()>
            <div class="stat-card__row">
                <div class="stat-card__content">
                    <div class="stat-card__label">{card.title.clone()}</div>
                    <div class="stat-card__value">{formatted}</div>
                    <div class="stat-card__trend">
                        <span class=change_class>{icon(arrow)}{change_text}</span>
                        <span class="stat-card__subtitle">{card.trend_label.clone()}</span>
                    </div>
                </div>
                <div class="stat-card__icon">{icon(&card.icon)}</div>
            </div>
            {(!heights.is_empty()).then(|| view! {
                <div class="stat-card__sparkline">
                    {heights
                        .into_iter()
                        .map(|h| view! {
                            <div class="stat-card__bar" style=format!("height: {:.0}%;", h)></div>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// Small stat card above an overview table
#[component]
pub fn StatCard(stat: OverviewStat) -> impl IntoView {
    let status_class = match stat.tone {
        StatTone::Primary => "stat-card",
        StatTone::Destructive => "stat-card stat-card--error",
    };
    let formatted = format_value(stat.value, &stat.format);

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(&stat.icon)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{stat.title}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
