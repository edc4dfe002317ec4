//! Executes the side effects requested by `update`.
//!
//! This is the only place on the booking page that talks to the network,
//! opens the confirm prompt, or writes to the console. API calls run in
//! `spawn_local` and report back through the component's `Scope`.

use yew::html::Scope;
use yew::platform::spawn_local;

use crate::api::ApiClient;
use crate::dom;

use super::helpers::confirm_prompt;
use super::messages::{Command, Msg};
use super::state::BookingPage;

pub fn execute(api: &ApiClient, link: &Scope<BookingPage>, command: Command) {
    match command {
        Command::FetchDrivers => {
            let api = api.clone();
            let link = link.clone();
            spawn_local(async move {
                link.send_message(Msg::DriversLoaded(api.fetch_drivers().await));
            });
        }
        Command::PostBooking(request) => {
            let api = api.clone();
            let link = link.clone();
            spawn_local(async move {
                link.send_message(Msg::BookingSubmitted(api.create_booking(&request).await));
            });
        }
        Command::FetchBookings(phone) => {
            let api = api.clone();
            let link = link.clone();
            spawn_local(async move {
                link.send_message(Msg::BookingsLoaded(api.find_bookings(&phone).await));
            });
        }
        Command::Confirm(action, booking_id) => {
            let accepted = dom::confirm(confirm_prompt(action));
            link.send_message(Msg::ActionConfirmed {
                action,
                booking_id,
                accepted,
            });
        }
        Command::PostAction(action, booking_id) => {
            let api = api.clone();
            let link = link.clone();
            spawn_local(async move {
                let result = api.apply_action(action, booking_id).await;
                link.send_message(Msg::ActionFinished(action, result));
            });
        }
        Command::LogError { context, detail } => {
            gloo_console::error!(context, detail);
        }
    }
}
