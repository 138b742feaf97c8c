//! Headline stat card for the dashboard summary row.

use leptos::prelude::*;

use crate::util::format::format_trend;

/// One headline number with an optional trend badge.
#[component]
pub fn StatsCard(
    /// Label above the value, e.g. "Total Documents".
    title: &'static str,
    /// Preformatted value to display.
    value: String,
    /// Percentage change versus the previous period, when known.
    #[prop(optional)]
    trend: Option<f64>,
) -> impl IntoView {
    let badge = trend.map(|rate| {
        let class = if rate >= 0.0 {
            "stats-card__trend stats-card__trend--up"
        } else {
            "stats-card__trend stats-card__trend--down"
        };
        view! { <span class=class>{format_trend(rate)}</span> }
    });

    view! {
        <div class="stats-card">
            <div class="stats-card__header">
                <h3 class="stats-card__title">{title}</h3>
                {badge}
            </div>
            <p class="stats-card__value">{value}</p>
        </div>
    }
}
