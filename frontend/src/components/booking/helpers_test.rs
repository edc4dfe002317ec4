use super::*;

// =============================================================
// Status labels
// =============================================================

#[test]
fn driver_status_labels() {
    assert_eq!(driver_status_label(&DriverStatus::Available), "Tersedia");
    assert_eq!(driver_status_label(&DriverStatus::Busy), "Sibuk");
}

#[test]
fn booking_status_labels() {
    assert_eq!(booking_status_label(&BookingStatus::Pending), "Menunggu");
    assert_eq!(booking_status_label(&BookingStatus::Completed), "Selesai");
    assert_eq!(booking_status_label(&BookingStatus::Cancelled), "Dibatalkan");
}

#[test]
fn unmapped_statuses_display_verbatim() {
    assert_eq!(
        driver_status_label(&DriverStatus::Other("offline".into())),
        "offline"
    );
    assert_eq!(
        booking_status_label(&BookingStatus::Other("on_the_way".into())),
        "on_the_way"
    );
}

// =============================================================
// Currency
// =============================================================

#[test]
fn fare_uses_dot_grouping() {
    assert_eq!(format_id_number(50000.0), "50.000");
    assert_eq!(format_id_number(1_234_567.0), "1.234.567");
    assert_eq!(format_fare(50000.0), "Rp 50.000");
}

#[test]
fn small_numbers_are_not_grouped() {
    assert_eq!(format_id_number(0.0), "0");
    assert_eq!(format_id_number(999.0), "999");
}

#[test]
fn fraction_uses_comma_and_drops_trailing_zeros() {
    assert_eq!(format_id_number(12500.5), "12.500,5");
    assert_eq!(format_id_number(8000.25), "8.000,25");
}

#[test]
fn fraction_rounds_to_three_digits() {
    assert_eq!(format_id_number(1.23456), "1,235");
    assert_eq!(format_id_number(2.9999), "3");
}

#[test]
fn negative_and_non_finite_values() {
    assert_eq!(format_id_number(-15000.0), "-15.000");
    assert_eq!(format_id_number(-0.0001), "0");
    assert_eq!(format_id_number(f64::NAN), "NaN");
    assert_eq!(format_id_number(f64::INFINITY), "∞");
}

#[test]
fn large_fares_keep_every_digit() {
    assert_eq!(format_id_number(1e19), "10.000.000.000.000.000.000");
    assert_eq!(format_id_number(1e21), "1.000.000.000.000.000.000.000");
    assert_eq!(format_id_number(-1e19), "-10.000.000.000.000.000.000");
}

#[test]
fn values_beyond_u128_are_still_grouped() {
    let formatted = format_id_number(1e40);
    assert!(formatted.starts_with("10.000.000.000.000.000."));
    assert_eq!(formatted.matches('.').count(), 13);
    assert!(!formatted.contains(','));
}

// =============================================================
// Rating and action texts
// =============================================================

#[test]
fn rating_prints_like_a_plain_number() {
    assert_eq!(format_rating(4.8), "⭐ 4.8");
    assert_eq!(format_rating(5.0), "⭐ 5");
}

#[test]
fn action_texts_differ_per_action() {
    assert_ne!(
        confirm_prompt(BookingAction::Cancel),
        confirm_prompt(BookingAction::Complete)
    );
    assert_eq!(action_button_label(BookingAction::Cancel), "Batalkan");
    assert_eq!(action_button_label(BookingAction::Complete), "Selesai");
    assert_eq!(
        action_failed(BookingAction::Cancel),
        "Terjadi kesalahan saat membatalkan booking."
    );
}
