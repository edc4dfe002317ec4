use common::model::booking::{Booking, BookingAction};
use common::model::driver::Driver;
use common::requests::BookingRequest;

use crate::api::ApiError;

use super::state::BookingField;

/// Everything that can happen on the booking page: user input and API
/// completions.
pub enum Msg {
    LoadDrivers,
    DriversLoaded(Result<Vec<Driver>, ApiError>),

    EditBooking(BookingField, String),
    SubmitBooking,
    BookingSubmitted(Result<Booking, ApiError>),

    EditTrackPhone(String),
    SubmitTrack,
    BookingsLoaded(Result<Vec<Booking>, ApiError>),

    /// A Cancel/Complete button was clicked.
    RequestAction(BookingAction, u64),
    /// Answer of the confirmation prompt.
    ActionConfirmed {
        action: BookingAction,
        booking_id: u64,
        accepted: bool,
    },
    ActionFinished(BookingAction, Result<(), ApiError>),

    CloseModal,
}

/// Side effect requested by `update`, executed by the component.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchDrivers,
    PostBooking(BookingRequest),
    FetchBookings(String),
    Confirm(BookingAction, u64),
    PostAction(BookingAction, u64),
    LogError { context: &'static str, detail: String },
}
