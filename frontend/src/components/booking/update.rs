//! Update function for the booking page.
//!
//! Elm-style: `update` takes the current `PageState` and a `Msg`, mutates
//! the state, and returns which side effects to run next. It never touches
//! the DOM, the network, or the console; the component executes the returned
//! `Command`s and feeds their results back as new messages.
//!
//! Failure surfacing
//! - Driver list: logged only, prior content untouched.
//! - Booking submit and booking actions: modal with the server message on a
//!   structured failure, a fixed fallback (and a log entry) otherwise.
//! - Tracking lookup: the same, but inline in place of the results list.
//!
//! Responses are applied in arrival order. Overlapping requests of the same
//! kind race; whichever resolves last wins the render.

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;

use common::model::booking::BookingAction;

use crate::api::ApiError;

use super::helpers::{
    action_failed, action_succeeded, BOOKING_FAILED, TITLE_BOOKED, TITLE_ERROR, TITLE_SUCCESS,
    TRACKING_FAILED,
};
use super::messages::{Command, Msg};
use super::state::{BookingsPanel, DriversPanel, ModalBody, PageState};

/// Result of handling one message.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    /// Whether the view must re-render.
    pub rerender: bool,
    pub commands: Vec<Command>,
}

impl Outcome {
    fn render() -> Self {
        Self {
            rerender: true,
            commands: Vec::new(),
        }
    }

    fn run(commands: Vec<Command>) -> Self {
        Self {
            rerender: false,
            commands,
        }
    }

    fn with(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

pub fn update(state: &mut PageState, msg: Msg) -> Outcome {
    match msg {
        Msg::LoadDrivers => Outcome::run(vec![Command::FetchDrivers]),
        Msg::DriversLoaded(Ok(drivers)) => {
            state.drivers = DriversPanel::Loaded(drivers);
            Outcome::render()
        }
        Msg::DriversLoaded(Err(err)) => Outcome::run(vec![log_error("Error loading drivers:", &err)]),

        Msg::EditBooking(field, value) => {
            state.set_booking_field(field, value);
            Outcome::render()
        }
        Msg::SubmitBooking => Outcome::run(vec![Command::PostBooking(state.booking_form.clone())]),
        Msg::BookingSubmitted(Ok(booking)) => {
            state.modal.show(TITLE_BOOKED, ModalBody::Booking(booking));
            state.booking_form = Default::default();
            Outcome::render().with(Command::FetchDrivers)
        }
        Msg::BookingSubmitted(Err(err)) => show_failure(state, &err, BOOKING_FAILED),

        Msg::EditTrackPhone(phone) => {
            state.track_phone = phone;
            Outcome::render()
        }
        Msg::SubmitTrack => Outcome::run(vec![Command::FetchBookings(state.track_phone.clone())]),
        Msg::BookingsLoaded(Ok(bookings)) => {
            state.bookings = BookingsPanel::Loaded(bookings);
            Outcome::render()
        }
        Msg::BookingsLoaded(Err(err)) => {
            let message = err.server_message().unwrap_or(TRACKING_FAILED).to_string();
            state.bookings = BookingsPanel::Failed(message);
            if err.is_structured() {
                Outcome::render()
            } else {
                Outcome::render().with(log_error("Error loading bookings:", &err))
            }
        }

        Msg::RequestAction(action, booking_id) => {
            Outcome::run(vec![Command::Confirm(action, booking_id)])
        }
        Msg::ActionConfirmed {
            action,
            booking_id,
            accepted,
        } => {
            if accepted {
                Outcome::run(vec![Command::PostAction(action, booking_id)])
            } else {
                Outcome::default()
            }
        }
        Msg::ActionFinished(action, Ok(())) => finish_action(state, action),
        Msg::ActionFinished(action, Err(err)) => show_failure(state, &err, action_failed(action)),

        Msg::CloseModal => {
            state.modal.hide();
            Outcome::render()
        }
    }
}

/// Success path shared by cancel and complete. The tracking lookup is only
/// re-run when the phone field holds something at this moment.
fn finish_action(state: &mut PageState, action: BookingAction) -> Outcome {
    state.modal.show(
        TITLE_SUCCESS,
        ModalBody::Message(action_succeeded(action).to_string()),
    );

    let mut outcome = Outcome::render();
    if !state.track_phone.is_empty() {
        outcome = outcome.with(Command::FetchBookings(state.track_phone.clone()));
    }
    outcome.with(Command::FetchDrivers)
}

/// Error modal: the server's message for a structured failure, `fallback`
/// for everything else (which is also logged). A rejection that carries no
/// message also shows `fallback`.
fn show_failure(state: &mut PageState, err: &ApiError, fallback: &str) -> Outcome {
    let message = err.server_message().unwrap_or(fallback).to_string();
    state.modal.show(TITLE_ERROR, ModalBody::Message(message));

    let outcome = Outcome::render();
    if err.is_structured() {
        outcome
    } else {
        outcome.with(log_error("Error:", err))
    }
}

fn log_error(context: &'static str, err: &ApiError) -> Command {
    Command::LogError {
        context,
        detail: err.to_string(),
    }
}
