use cyclecast_calendar::parse_date;
use cyclecast_cycle::{
    CycleEntry, CycleError, CycleProfile, EntryId, compute_window, predict_next,
};

fn entry(id: u64, start: &str) -> CycleEntry {
    CycleEntry::started(EntryId::new(id), parse_date(start).unwrap())
}

#[test]
fn reference_prediction() {
    let entries = [entry(1, "2024-01-01")];
    let next = predict_next(&entries, 28).unwrap().unwrap();
    assert_eq!(next.to_string(), "2024-01-29");
    assert_eq!(predict_next(&[], 28).unwrap(), None);
}

#[test]
fn newest_first_and_oldest_first_agree() {
    let mut entries = vec![
        entry(1, "2024-01-02"),
        entry(2, "2024-01-30"),
        entry(3, "2024-02-27"),
    ];
    let forward = predict_next(&entries, 28).unwrap();
    entries.reverse();
    let backward = predict_next(&entries, 28).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.unwrap().to_string(), "2024-03-26");
}

#[test]
fn prediction_uses_profile_length() {
    let profile = CycleProfile::from_setting(Some(31)).unwrap();
    let entries = [entry(1, "2024-12-15")];
    let next = predict_next(&entries, profile.cycle_length()).unwrap().unwrap();
    assert_eq!(next.to_string(), "2025-01-15");
}

#[test]
fn prediction_is_next_window_start() {
    let entries = [entry(1, "2024-01-01")];
    let next = predict_next(&entries, 28).unwrap().unwrap();
    let window = compute_window(next, 28).unwrap();
    assert_eq!(window.ovulation_day.to_string(), "2024-02-12");
}

#[test]
fn invalid_length_rejected() {
    let entries = [entry(1, "2024-01-01")];
    assert_eq!(
        predict_next(&entries, 0).unwrap_err(),
        CycleError::InvalidCycleLength { cycle_length: 0 }
    );
}

#[test]
fn reference_window_fields() {
    let w = compute_window(parse_date("2024-01-01").unwrap(), 28).unwrap();
    assert_eq!(w.period_end.to_string(), "2024-01-05");
    assert_eq!(w.ovulation_day.to_string(), "2024-01-15");
    assert_eq!(w.fertile_start.to_string(), "2024-01-10");
    assert_eq!(w.fertile_end.to_string(), "2024-01-19");
}
