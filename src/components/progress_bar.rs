//! Progress bar shown while an extraction request is in flight.
//!
//! The service does not stream progress, so the bar is driven by elapsed
//! time against a per-file estimate and parks just short of full until the
//! response lands.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// Estimated processing time per document, used to pace the bar.
pub const ESTIMATED_MS_PER_FILE: u32 = 3000;

/// Bar position for the given elapsed/estimated pair, capped below 100
/// so only a real response completes it.
pub fn progress_percent(elapsed_ms: u32, estimated_ms: u32) -> u32 {
    if estimated_ms == 0 {
        return 95;
    }
    (elapsed_ms.saturating_mul(100) / estimated_ms).min(95)
}

/// Human label for the time remaining.
pub fn remaining_label(elapsed_ms: u32, estimated_ms: u32) -> String {
    let remaining = estimated_ms.saturating_sub(elapsed_ms);
    let seconds = remaining.div_ceil(1000);
    match seconds {
        0 => "Almost done...".to_owned(),
        1 => "~1 second remaining".to_owned(),
        n => format!("~{n} seconds remaining"),
    }
}

/// Indeterminate-ish progress display for uploads.
#[component]
pub fn ProgressBar(
    /// Milliseconds since the request started.
    elapsed_ms: Signal<u32>,
    /// Estimated total duration in milliseconds.
    estimated_ms: u32,
    /// Status line, e.g. "Processing 3 documents...".
    status: String,
) -> impl IntoView {
    let percent = move || progress_percent(elapsed_ms.get(), estimated_ms);
    let remaining = move || remaining_label(elapsed_ms.get(), estimated_ms);

    view! {
        <div class="progress">
            <div class="progress__header">
                <span class="progress__status">{status}</span>
                <span class="progress__remaining">{remaining}</span>
            </div>
            <div class="progress__track">
                <div
                    class="progress__fill"
                    style=move || format!("width: {}%", percent())
                ></div>
            </div>
            <div class="progress__percent">{move || format!("{}%", percent())}</div>
        </div>
    }
}
