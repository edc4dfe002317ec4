use super::*;
use common::model::booking::BookingStatus;
use common::model::driver::DriverStatus;

fn driver(name: &str, status: DriverStatus) -> Driver {
    Driver {
        id: None,
        name: name.to_string(),
        rating: 4.9,
        phone: "081234567891".to_string(),
        status,
    }
}

fn booking(id: u64, status: BookingStatus) -> Booking {
    Booking {
        id,
        driver_name: "Yanto".to_string(),
        driver_phone: "082222".to_string(),
        pickup: "Pasar Pagi".to_string(),
        destination: "Stasiun Prujakan".to_string(),
        estimated_fare: 23000.0,
        status,
    }
}

// =============================================================
// Driver panel
// =============================================================

#[test]
fn one_card_per_driver() {
    let drivers = vec![
        driver("Bambang #1", DriverStatus::Available),
        driver("Ujang #2", DriverStatus::Busy),
        driver("Dede #3", DriverStatus::Available),
    ];

    let PanelContent::Cards(cards) = driver_panel(&DriversPanel::Loaded(drivers)) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name, "Bambang #1");
    assert_eq!(cards[0].rating, "⭐ 4.9");
    assert_eq!(cards[0].phone, "081234567891");
    assert_eq!(cards[0].status_label, "Tersedia");
    assert_eq!(cards[1].status_label, "Sibuk");
    assert_eq!(cards[1].status_code, "busy");
}

#[test]
fn empty_driver_list_renders_single_placeholder() {
    assert_eq!(
        driver_panel(&DriversPanel::Loaded(Vec::new())),
        PanelContent::Notice(NO_DRIVERS.to_string())
    );
}

#[test]
fn drivers_not_loaded_render_nothing() {
    assert_eq!(driver_panel(&DriversPanel::NotLoaded), PanelContent::Blank);
}

#[test]
fn unknown_driver_status_passes_through() {
    let card = DriverCard::from(&driver("Sinta #5", DriverStatus::Other("offline".into())));
    assert_eq!(card.status_label, "offline");
    assert_eq!(card.status_code, "offline");
}

// =============================================================
// Booking panel
// =============================================================

#[test]
fn pending_booking_has_cancel_and_complete() {
    let card = BookingCard::from(&booking(42, BookingStatus::Pending));
    assert_eq!(
        card.actions,
        vec![BookingAction::Cancel, BookingAction::Complete]
    );
    assert_eq!(card.title, "Booking #42");
    assert_eq!(card.fare, "Rp 23.000");
    assert_eq!(card.status_label, "Menunggu");
}

#[test]
fn terminal_bookings_have_no_actions() {
    for status in [BookingStatus::Completed, BookingStatus::Cancelled] {
        let card = BookingCard::from(&booking(1, status));
        assert!(card.actions.is_empty());
    }
}

#[test]
fn unknown_booking_status_has_no_actions() {
    let card = BookingCard::from(&booking(3, BookingStatus::Other("expired".into())));
    assert!(card.actions.is_empty());
    assert_eq!(card.status_label, "expired");
}

#[test]
fn booking_panel_states() {
    assert_eq!(booking_panel(&BookingsPanel::Idle), PanelContent::Blank);
    assert_eq!(
        booking_panel(&BookingsPanel::Loaded(Vec::new())),
        PanelContent::Notice(NO_BOOKINGS.to_string())
    );
    assert_eq!(
        booking_panel(&BookingsPanel::Failed("Nomor tidak valid".into())),
        PanelContent::Notice("Nomor tidak valid".to_string())
    );

    let bookings = vec![
        booking(1, BookingStatus::Pending),
        booking(2, BookingStatus::Completed),
    ];
    let PanelContent::Cards(cards) = booking_panel(&BookingsPanel::Loaded(bookings)) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].actions.len(), 2);
    assert!(cards[1].actions.is_empty());
}
