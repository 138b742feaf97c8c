//! Upload page: submit documents for extraction.
//!
//! One file goes to `POST /extract`, several to `POST /extract/batch`.
//! The service answers only when extraction finishes, so an elapsed-time
//! progress bar stands in for real progress while the request is in
//! flight.

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::components::progress_bar::{ESTIMATED_MS_PER_FILE, ProgressBar};
use crate::net::types::Extraction;
use crate::util::format::{format_confidence, format_size_kb};

const MAX_FILES: usize = 10;

/// A file picked for upload. The browser handle only exists client-side;
/// the name and size are kept separately so the list renders everywhere.
#[derive(Clone)]
struct PickedFile {
    name: String,
    size_bytes: f64,
    #[cfg(feature = "hydrate")]
    handle: web_sys::File,
}

/// Document upload and extraction results.
#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let files: RwSignal<Vec<PickedFile>, LocalStorage> = RwSignal::new_local(Vec::new());
    let uploading = RwSignal::new(false);
    let elapsed_ms = RwSignal::new(0u32);
    let status = RwSignal::new(String::new());
    let estimated_ms = RwSignal::new(0u32);
    let results = RwSignal::new(Vec::<Extraction>::new());
    let failures = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(list) = input.files() {
                files.update(|picked| {
                    for index in 0..list.length() {
                        if picked.len() >= MAX_FILES {
                            break;
                        }
                        if let Some(file) = list.get(index) {
                            picked.push(PickedFile {
                                name: file.name(),
                                size_bytes: file.size(),
                                handle: file,
                            });
                        }
                    }
                });
            }
            // Allow re-picking the same file later.
            input.set_value("");
            results.set(Vec::new());
            failures.set(Vec::new());
            error.set(None);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let picked = files.get_untracked();
            if picked.is_empty() || uploading.get_untracked() {
                return;
            }

            error.set(None);
            results.set(Vec::new());
            failures.set(Vec::new());
            elapsed_ms.set(0);
            estimated_ms.set(u32::try_from(picked.len()).unwrap_or(1) * ESTIMATED_MS_PER_FILE);
            status.set(if picked.len() == 1 {
                "Processing 1 document...".to_owned()
            } else {
                format!("Processing {} documents...", picked.len())
            });
            // Set last: the progress panel reads the fields above when it
            // appears.
            uploading.set(true);

            // Drive the progress bar while the request is outstanding.
            leptos::task::spawn_local(async move {
                while uploading.get_untracked() {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                    elapsed_ms.update(|ms| *ms = ms.saturating_add(100));
                }
            });

            leptos::task::spawn_local(async move {
                let outcome = if picked.len() == 1 {
                    crate::net::api::extract_single(session, &picked[0].handle)
                        .await
                        .map(|extraction| (vec![extraction], Vec::new()))
                } else {
                    let handles: Vec<web_sys::File> =
                        picked.iter().map(|p| p.handle.clone()).collect();
                    crate::net::api::extract_batch(session, &handles)
                        .await
                        .map(|batch| (batch.results, batch_failures(&batch.errors)))
                };

                match outcome {
                    Ok((extractions, errors)) => {
                        results.set(extractions);
                        failures.set(errors);
                        files.set(Vec::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    let remove_file = move |index: usize| {
        files.update(|picked| {
            if index < picked.len() {
                picked.remove(index);
            }
        });
    };

    view! {
        <div class="page upload-page">
            <h1>"Upload Documents"</h1>

            <label class="upload-drop">
                <input
                    type="file"
                    multiple
                    accept=".pdf,.png,.jpg,.jpeg"
                    on:change=on_pick
                />
                <span class="upload-drop__hint">"Click to select files"</span>
                <span class="upload-drop__formats">
                    {format!("Supports PDF, PNG, JPG (max {MAX_FILES} files)")}
                </span>
            </label>

            <Show when=move || !files.get().is_empty()>
                <div class="panel upload-page__selection">
                    <div class="upload-page__selection-header">
                        <h2>{move || format!("Selected Files ({})", files.get().len())}</h2>
                        <button class="btn btn--link" on:click=move |_| files.set(Vec::new())>
                            "Clear All"
                        </button>
                    </div>
                    <ul class="file-list">
                        {move || {
                            files
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    view! {
                                        <li class="file-list__row">
                                            <span class="file-list__name">{file.name.clone()}</span>
                                            <span class="file-list__size">
                                                {format!("({})", format_size_kb(file.size_bytes))}
                                            </span>
                                            <button
                                                class="btn btn--link"
                                                on:click=move |_| remove_file(index)
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button
                        class="btn btn--primary"
                        disabled=move || uploading.get()
                        on:click=on_upload
                    >
                        {move || if uploading.get() { "Extracting..." } else { "Extract" }}
                    </button>
                </div>
            </Show>

            <Show when=move || uploading.get()>
                <ProgressBar
                    elapsed_ms=elapsed_ms.into()
                    estimated_ms=estimated_ms.get_untracked()
                    status=status.get_untracked()
                />
            </Show>

            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="form-error form-error--banner">{msg}</div> })
            }}

            <Show when=move || !failures.get().is_empty()>
                <div class="panel upload-page__failures">
                    <h2>"Failed Files"</h2>
                    <ul>
                        {move || {
                            failures
                                .get()
                                .into_iter()
                                .map(|line| view! { <li class="form-error">{line}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>

            <Show when=move || !results.get().is_empty()>
                <div class="panel upload-page__results">
                    <h2>"Results"</h2>
                    <ul class="result-list">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(result_card)
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

fn result_card(extraction: Extraction) -> impl IntoView {
    let href = format!("/history/{}", extraction.request_id);
    let company = extraction
        .data
        .company_name
        .clone()
        .unwrap_or_else(|| "Unknown".to_owned());
    let grade = extraction
        .quality_grade
        .clone()
        .unwrap_or_else(|| "-".to_owned());

    view! {
        <li class="result-list__row">
            <a href=href class="result-list__type">
                {extraction.document_type.clone()}
            </a>
            <span class="result-list__company">{company}</span>
            <span class="badge">{format!("Grade {grade}")}</span>
            <span class="result-list__confidence">
                {format_confidence(extraction.confidence)}
            </span>
        </li>
    }
}

/// Render the batch error objects as one line per failed file.
#[cfg(feature = "hydrate")]
fn batch_failures(errors: &[serde_json::Value]) -> Vec<String> {
    errors
        .iter()
        .map(|entry| {
            let filename = entry
                .get("filename")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown file");
            let reason = entry
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("extraction failed");
            format!("{filename}: {reason}")
        })
        .collect()
}
