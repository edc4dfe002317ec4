//! Display helpers for the booking page.
//!
//! All user-facing text is Indonesian. This module owns:
//!
//! - **Status labels**: mapping driver and booking status codes to their
//!   display labels. Unrecognised codes are shown verbatim.
//! - **Currency**: formatting fares with Indonesian digit grouping, the way
//!   `Number.toLocaleString('id-ID')` does (`50000` → `50.000`).
//! - **Fixed messages**: placeholders, modal titles and the fallback texts
//!   shown on transport failures.

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;

use common::model::booking::{BookingAction, BookingStatus};
use common::model::driver::DriverStatus;
use num_format::{Locale, ToFormattedString};

pub const NO_DRIVERS: &str = "Tidak ada driver yang tersedia saat ini.";
pub const NO_BOOKINGS: &str = "Tidak ada booking ditemukan untuk nomor telepon ini.";

pub const TITLE_BOOKED: &str = "Booking Berhasil!";
pub const TITLE_SUCCESS: &str = "Berhasil";
pub const TITLE_ERROR: &str = "Error";

pub const BOOKING_FAILED: &str = "Terjadi kesalahan saat memproses booking. Silakan coba lagi.";
pub const TRACKING_FAILED: &str = "Terjadi kesalahan saat memuat data booking.";

/// Display label of a driver status.
pub fn driver_status_label(status: &DriverStatus) -> &str {
    match status {
        DriverStatus::Available => "Tersedia",
        DriverStatus::Busy => "Sibuk",
        DriverStatus::Other(raw) => raw,
    }
}

/// Display label of a booking status.
pub fn booking_status_label(status: &BookingStatus) -> &str {
    match status {
        BookingStatus::Pending => "Menunggu",
        BookingStatus::Completed => "Selesai",
        BookingStatus::Cancelled => "Dibatalkan",
        BookingStatus::Other(raw) => raw,
    }
}

/// Text of the blocking confirmation prompt shown before an action.
pub fn confirm_prompt(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Cancel => "Apakah Anda yakin ingin membatalkan booking ini?",
        BookingAction::Complete => "Tandai booking ini sebagai selesai?",
    }
}

/// Label of the card button that triggers the action.
pub fn action_button_label(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Cancel => "Batalkan",
        BookingAction::Complete => "Selesai",
    }
}

pub fn action_succeeded(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Cancel => "Booking berhasil dibatalkan.",
        BookingAction::Complete => "Booking ditandai sebagai selesai.",
    }
}

pub fn action_failed(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Cancel => "Terjadi kesalahan saat membatalkan booking.",
        BookingAction::Complete => "Terjadi kesalahan saat menyelesaikan booking.",
    }
}

/// Formats a number with Indonesian grouping: `.` between thousands, `,`
/// before the fraction, at most three fraction digits (half away from zero),
/// trailing zeros dropped.
pub fn format_id_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut millis = ((magnitude - whole) * 1000.0).round() as u32;
    if millis == 1000 {
        whole += 1.0;
        millis = 0;
    }

    let integer = format_whole(whole);
    let fraction = format!("{:03}", millis);
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && (whole > 0.0 || millis > 0) { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{},{}", sign, integer, fraction)
    }
}

/// Groups a non-negative whole number. Values past `u128` are grouped from
/// their exact decimal expansion.
fn format_whole(whole: f64) -> String {
    if whole < u128::MAX as f64 {
        return (whole as u128).to_formatted_string(&Locale::id);
    }

    let digits = format!("{:.0}", whole);
    let separator = Locale::id.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Fare as shown on cards and in the booking modal: `Rp 50.000`.
pub fn format_fare(fare: f64) -> String {
    format!("Rp {}", format_id_number(fare))
}

/// Driver rating line, e.g. `⭐ 4.8`.
pub fn format_rating(rating: f64) -> String {
    format!("⭐ {}", rating)
}
