use super::*;

#[test]
fn percent_tracks_elapsed_time_and_caps_at_95() {
    assert_eq!(progress_percent(0, 3000), 0);
    assert_eq!(progress_percent(1500, 3000), 50);
    assert_eq!(progress_percent(3000, 3000), 95);
    assert_eq!(progress_percent(60_000, 3000), 95);
}

#[test]
fn zero_estimate_parks_near_done() {
    assert_eq!(progress_percent(500, 0), 95);
}

#[test]
fn remaining_label_counts_down_to_almost_done() {
    assert_eq!(remaining_label(0, 3000), "~3 seconds remaining");
    assert_eq!(remaining_label(2100, 3000), "~1 second remaining");
    assert_eq!(remaining_label(3000, 3000), "Almost done...");
    assert_eq!(remaining_label(9999, 3000), "Almost done...");
}
