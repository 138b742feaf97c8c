//! Extraction details page: every field the service pulled from one
//! document.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::auth::session::Session;
use crate::net::error::ApiError;
use crate::net::types::{Address, Extraction};
use crate::util::format::{format_confidence, format_datetime};

/// Single-extraction view, reached from history and dashboard rows.
#[component]
pub fn ExtractionDetailsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();

    let extraction = LocalResource::new(move || {
        let raw = params.read().get("id");
        async move {
            let id = raw
                .as_deref()
                .and_then(|s| Uuid::parse_str(s).ok())
                .ok_or_else(|| ApiError::Validation {
                    status: 404,
                    detail: "not a valid extraction id".to_owned(),
                })?;
            crate::net::api::fetch_extraction(session, id).await
        }
    });

    view! {
        <div class="page extraction-page">
            <a class="extraction-page__back" href="/history">
                "Back to history"
            </a>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading extraction..."</p> }>
                {move || {
                    extraction
                        .get()
                        .map(|result| match result {
                            Ok(data) => view! { <ExtractionBody data=data/> }.into_any(),
                            Err(err) => view! {
                                <div class="extraction-page__missing">
                                    <h2>"Extraction not found"</h2>
                                    <p>{err.to_string()}</p>
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
fn ExtractionBody(data: Extraction) -> impl IntoView {
    let company = data
        .data
        .company_name
        .clone()
        .unwrap_or_else(|| "Unknown Company".to_owned());
    let document_type = data.document_type.replace('_', " ");
    let processed = data
        .uploaded_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_default();
    let grade = data.quality_grade.clone().unwrap_or_else(|| "-".to_owned());
    let score = data.data_quality_score.unwrap_or(0);
    let grade_class = match grade.as_str() {
        "A" => "badge badge--green",
        "B" => "badge badge--blue",
        "C" => "badge badge--yellow",
        _ => "badge badge--red",
    };

    let fields = data.data.clone();
    let validation = validation_summary(data.validation_results.as_ref());

    view! {
        <header class="extraction-page__header">
            <div>
                <h1>{company}</h1>
                <span class="badge">{document_type}</span>
                <p class="extraction-page__processed">{format!("Processed on {processed}")}</p>
            </div>
            <div class="extraction-page__score">
                <span class=grade_class>{format!("Grade {grade} ({score}%)")}</span>
            </div>
        </header>

        <section class="panel">
            <h2>"Extracted Information"</h2>
            <div class="field-grid">
                <Field label="Trade Name" value=fields.trade_name/>
                <Field label="Identification Number" value=fields.identification_number/>
                <Field label="Issue Date" value=fields.issue_date/>
                <Field label="Approver Name" value=fields.approver_name/>
            </div>
            <AddressBlock address=fields.address/>
        </section>

        <section class="panel">
            <h2>"Confidence"</h2>
            <p class="extraction-page__confidence">{format_confidence(data.confidence)}</p>
            {data
                .confidence_reason
                .clone()
                .map(|reason| view! { <p class="extraction-page__reason">{reason}</p> })}
            {data
                .processing_time_ms
                .map(|ms| view! { <p class="extraction-page__timing">{format!("Processed in {ms} ms")}</p> })}
        </section>

        <section class="panel">
            <h2>"Validation"</h2>
            {match validation {
                Some(rows) => view! {
                    <ul class="validation-list">
                        {rows
                            .into_iter()
                            .map(|(field, ok)| {
                                let class = if ok { "status status--ok" } else { "status status--review" };
                                let label = if ok { "valid" } else { "check" };
                                view! {
                                    <li class="validation-list__row">
                                        <span>{field}</span>
                                        <span class=class>{label}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any(),
                None => view! { <p class="panel__empty">"No validation results."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn Field(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="field-grid__item">
            <span class="field-grid__label">{label}</span>
            <span class="field-grid__value">{value.unwrap_or_else(|| "N/A".to_owned())}</span>
        </div>
    }
}

#[component]
fn AddressBlock(address: Option<Address>) -> impl IntoView {
    address.map(|addr| {
        let line = addr.full_address.clone().unwrap_or_else(|| {
            [addr.address_line_1, addr.locality, addr.city, addr.state, addr.pincode]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ")
        });
        view! {
            <div class="field-grid__item field-grid__item--wide">
                <span class="field-grid__label">"Address"</span>
                <span class="field-grid__value">{line}</span>
            </div>
        }
    })
}

/// Flatten `{field: {"valid": bool, ...}}` into displayable rows.
fn validation_summary(value: Option<&serde_json::Value>) -> Option<Vec<(String, bool)>> {
    let map = value?.as_object()?;
    if map.is_empty() {
        return None;
    }
    Some(
        map.iter()
            .map(|(field, outcome)| {
                let ok = outcome
                    .get("valid")
                    .and_then(serde_json::Value::as_bool)
                    .unwrap_or(false);
                (field.clone(), ok)
            })
            .collect(),
    )
}
