use super::*;

#[test]
fn tidy_iso_drops_zone_and_fraction() {
    assert_eq!(tidy_iso("2024-03-01T08:15:00.000Z"), "2024-03-01 08:15:00");
    assert_eq!(tidy_iso("2024-03-01T08:15:00Z"), "2024-03-01 08:15:00");
}

#[test]
fn tidy_iso_leaves_other_text_alone() {
    assert_eq!(tidy_iso(" yesterday "), "yesterday");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_display_uses_tidy_form() {
    assert_eq!(display_timestamp("2024-03-01T08:15:00.000Z"), "2024-03-01 08:15:00");
}
