//! History page: paginated table of past extractions.

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::net::types::Extraction;
use crate::util::format::format_date;

const PAGE_SIZE: u64 = 10;

/// Paginated extraction history. The resource refetches whenever the page
/// signal changes.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let page = RwSignal::new(0u64);

    let history = LocalResource::new(move || {
        crate::net::api::fetch_history(session, page.get() * PAGE_SIZE, PAGE_SIZE)
    });

    view! {
        <div class="page history-page">
            <h1>"Extraction History"</h1>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading history..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                let total_pages = data.total.div_ceil(PAGE_SIZE).max(1);
                                view! {
                                    <HistoryTable items=data.items/>
                                    <Pager page=page total_pages=total_pages/>
                                }
                                .into_any()
                            }
                            Err(err) => view! {
                                <div class="form-error form-error--banner">
                                    {format!("Failed to load history: {err}")}
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
fn HistoryTable(items: Vec<Extraction>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="panel__empty">"No extractions on this page."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Document"</th>
                    <th>"Company Name"</th>
                    <th>"Date"</th>
                    <th>"Quality"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(history_row).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn history_row(item: Extraction) -> impl IntoView {
    let href = format!("/history/{}", item.request_id);
    let id_number = item
        .data
        .identification_number
        .clone()
        .unwrap_or_else(|| "N/A".to_owned());
    let company = item
        .data
        .company_name
        .clone()
        .unwrap_or_else(|| "Unknown".to_owned());
    let trade_name = item.data.trade_name.clone().unwrap_or_default();
    let date = item
        .uploaded_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default()
        .to_owned();

    let score = item.data_quality_score.unwrap_or(0);
    let grade = item.quality_grade.clone().unwrap_or_else(|| "-".to_owned());
    let grade_class = match grade.as_str() {
        "A" => "badge badge--green",
        "B" => "badge badge--blue",
        _ => "badge badge--yellow",
    };
    let (status_class, status_label) = if score >= 80 {
        ("status status--ok", "Verified")
    } else {
        ("status status--review", "Needs Review")
    };

    view! {
        <tr>
            <td>
                <a href=href>{item.document_type.clone()}</a>
                <div class="data-table__sub">{format!("ID: {id_number}")}</div>
            </td>
            <td>
                {company}
                <div class="data-table__sub">{trade_name}</div>
            </td>
            <td>{date}</td>
            <td>
                <span class=grade_class>{format!("Grade {grade} ({score}%)")}</span>
            </td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
        </tr>
    }
}

#[component]
fn Pager(page: RwSignal<u64>, total_pages: u64) -> impl IntoView {
    let last = total_pages.saturating_sub(1);

    view! {
        <div class="pager">
            <button
                class="btn"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Previous"
            </button>
            <span class="pager__label">
                {move || format!("Page {} of {total_pages}", page.get() + 1)}
            </span>
            <button
                class="btn"
                disabled=move || page.get() >= last
                on:click=move |_| page.update(|p| *p = (*p + 1).min(last))
            >
                "Next"
            </button>
        </div>
    }
}
