//! View-models for the driver and booking panels.
//!
//! `view.rs` renders these one-to-one; keeping the decisions here (which
//! label, which CSS class, whether action buttons exist) lets them be tested
//! without a DOM.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use common::model::booking::{Booking, BookingAction};
use common::model::driver::Driver;

use super::helpers::{
    booking_status_label, driver_status_label, format_fare, format_rating, NO_BOOKINGS, NO_DRIVERS,
};
use super::state::{BookingsPanel, DriversPanel};

/// What a results container shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelContent<C> {
    /// Nothing fetched yet.
    Blank,
    /// A single paragraph in place of the list (empty result or error).
    Notice(String),
    Cards(Vec<C>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriverCard {
    pub name: String,
    pub rating: String,
    pub phone: String,
    pub status_code: String,
    pub status_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingCard {
    pub id: u64,
    pub title: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub pickup: String,
    pub destination: String,
    pub fare: String,
    pub status_code: String,
    pub status_label: String,
    /// Buttons shown under the card; empty unless the booking is pending.
    pub actions: Vec<BookingAction>,
}

impl From<&Driver> for DriverCard {
    fn from(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            rating: format_rating(driver.rating),
            phone: driver.phone.clone(),
            status_code: driver.status.as_str().to_string(),
            status_label: driver_status_label(&driver.status).to_string(),
        }
    }
}

impl From<&Booking> for BookingCard {
    fn from(booking: &Booking) -> Self {
        let actions = if booking.status.is_pending() {
            vec![BookingAction::Cancel, BookingAction::Complete]
        } else {
            Vec::new()
        };

        Self {
            id: booking.id,
            title: format!("Booking #{}", booking.id),
            driver_name: booking.driver_name.clone(),
            driver_phone: booking.driver_phone.clone(),
            pickup: booking.pickup.clone(),
            destination: booking.destination.clone(),
            fare: format_fare(booking.estimated_fare),
            status_code: booking.status.as_str().to_string(),
            status_label: booking_status_label(&booking.status).to_string(),
            actions,
        }
    }
}

pub fn driver_panel(panel: &DriversPanel) -> PanelContent<DriverCard> {
    match panel {
        DriversPanel::NotLoaded => PanelContent::Blank,
        DriversPanel::Loaded(drivers) if drivers.is_empty() => {
            PanelContent::Notice(NO_DRIVERS.to_string())
        }
        DriversPanel::Loaded(drivers) => {
            PanelContent::Cards(drivers.iter().map(DriverCard::from).collect())
        }
    }
}

pub fn booking_panel(panel: &BookingsPanel) -> PanelContent<BookingCard> {
    match panel {
        BookingsPanel::Idle => PanelContent::Blank,
        BookingsPanel::Loaded(bookings) if bookings.is_empty() => {
            PanelContent::Notice(NO_BOOKINGS.to_string())
        }
        BookingsPanel::Loaded(bookings) => {
            PanelContent::Cards(bookings.iter().map(BookingCard::from).collect())
        }
        BookingsPanel::Failed(message) => PanelContent::Notice(message.clone()),
    }
}
