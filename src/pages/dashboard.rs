//! Dashboard page: aggregate statistics and recent activity.

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::components::stats_card::StatsCard;
use crate::net::types::{DashboardStats, Extraction, QualityBucket};
use crate::util::format::{format_confidence, format_date};

/// Landing page: headline numbers, quality distribution, and the most
/// recent extractions.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let stats = LocalResource::new(move || crate::net::api::fetch_dashboard_stats(session));

    view! {
        <div class="page dashboard-page">
            <h1>"Dashboard"</h1>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(data) => view! { <DashboardBody data=data/> }.into_any(),
                            Err(err) => view! {
                                <div class="form-error form-error--banner">
                                    {format!("Failed to load statistics: {err}")}
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardBody(data: DashboardStats) -> impl IntoView {
    let summary = data.summary;

    view! {
        <div class="dashboard-page__cards">
            <StatsCard title="Total Documents" value=summary.total_documents.to_string()/>
            <StatsCard
                title="Today's Volume"
                value=summary.todays_volume.to_string()
                trend=summary.volume_trend
            />
            <StatsCard title="Success Rate" value=format!("{:.1}%", summary.success_rate)/>
            <StatsCard title="Avg Confidence" value=format_confidence(summary.avg_confidence)/>
            <StatsCard title="Pending Reviews" value=summary.pending_reviews.to_string()/>
            <StatsCard title="Active Users" value=summary.active_users.to_string()/>
        </div>

        <div class="dashboard-page__panels">
            <section class="panel">
                <h2>"Quality Distribution"</h2>
                <QualityList buckets=data.charts.quality_distribution/>
            </section>

            <section class="panel">
                <h2>"Daily Volume"</h2>
                <ul class="trend-list">
                    {data
                        .charts
                        .daily_trend
                        .into_iter()
                        .map(|point| {
                            view! {
                                <li class="trend-list__row">
                                    <span class="trend-list__date">{point.date}</span>
                                    <span class="trend-list__count">{point.count}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>

        <section class="panel">
            <h2>"Recent Activity"</h2>
            <RecentActivity items=data.recent_activity/>
        </section>
    }
}

/// Grade buckets as labelled bars, widths relative to the busiest bucket.
#[component]
fn QualityList(buckets: Vec<QualityBucket>) -> impl IntoView {
    let max = buckets.iter().map(|b| b.value).max().unwrap_or(0).max(1);

    view! {
        <ul class="quality-list">
            {buckets
                .into_iter()
                .map(|bucket| {
                    let width = bucket.value * 100 / max;
                    view! {
                        <li class="quality-list__row">
                            <span class="quality-list__name">{format!("Grade {}", bucket.name)}</span>
                            <span class="quality-list__bar" style=format!("width: {width}%")></span>
                            <span class="quality-list__value">{bucket.value}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn RecentActivity(items: Vec<Extraction>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="panel__empty">"No extractions yet."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Document"</th>
                    <th>"Company"</th>
                    <th>"Date"</th>
                    <th>"Quality"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| {
                        let href = format!("/history/{}", item.request_id);
                        let company = item
                            .data
                            .company_name
                            .clone()
                            .unwrap_or_else(|| "Unknown".to_owned());
                        let date = item
                            .uploaded_at
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_default()
                            .to_owned();
                        let grade = item.quality_grade.clone().unwrap_or_else(|| "-".to_owned());
                        view! {
                            <tr>
                                <td>
                                    <a href=href>{item.document_type.clone()}</a>
                                </td>
                                <td>{company}</td>
                                <td>{date}</td>
                                <td>{grade}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
