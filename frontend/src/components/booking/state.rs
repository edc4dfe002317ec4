//! State of the booking page.
//!
//! `PageState` is everything the view renders from. It is plain data so the
//! transition function in `update.rs` can be tested without a browser.
//! `BookingPage` is the Yew component wrapping it together with the API
//! client.

use common::model::booking::Booking;
use common::model::driver::Driver;
use common::requests::BookingRequest;

use crate::api::ApiClient;

/// Main state container for the `BookingPage` component.
pub struct BookingPage {
    pub state: PageState,
    pub api: ApiClient,
    /// Guard for the one-time driver load on first render.
    pub loaded: bool,
}

impl BookingPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: PageState::default(),
            api,
            loaded: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    /// Current values of the booking form inputs.
    pub booking_form: BookingRequest,
    /// Current value of the tracking form phone input.
    pub track_phone: String,
    pub drivers: DriversPanel,
    pub bookings: BookingsPanel,
    pub modal: ModalState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    CustomerName,
    CustomerPhone,
    Pickup,
    Destination,
}

impl PageState {
    pub fn set_booking_field(&mut self, field: BookingField, value: String) {
        let form = &mut self.booking_form;
        match field {
            BookingField::CustomerName => form.customer_name = value,
            BookingField::CustomerPhone => form.customer_phone = value,
            BookingField::Pickup => form.pickup = value,
            BookingField::Destination => form.destination = value,
        }
    }
}

/// Content of the drivers container. A failed load keeps whatever was there.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DriversPanel {
    #[default]
    NotLoaded,
    Loaded(Vec<Driver>),
}

/// Content of the tracking results container.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BookingsPanel {
    #[default]
    Idle,
    Loaded(Vec<Booking>),
    /// Message shown in place of the list.
    Failed(String),
}

/// Result/error overlay. `show` on a visible modal replaces its content.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible { title: String, body: ModalBody },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalBody {
    /// "Detail Booking" block for a freshly created booking.
    Booking(Booking),
    Message(String),
}

impl ModalState {
    pub fn show(&mut self, title: &str, body: ModalBody) {
        *self = ModalState::Visible {
            title: title.to_string(),
            body,
        };
    }

    pub fn hide(&mut self) {
        *self = ModalState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible { .. })
    }
}
