//! View rendering for the booking page.
//!
//! Four regions, each fed from `PageState` only: the driver list, the
//! booking form, the tracking form with its results, and the modal. Card
//! contents come from the view-models in `cards.rs`.
//!
//! Element ids (`driversList`, `bookingForm`, `trackPhone`, `modal`, ...)
//! are stable so the page can be styled and tested from outside.

use common::model::booking::{Booking, BookingAction};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::layout::card_grid::CardGrid;
use crate::layout::yw_modal::YwModal;

use super::cards::{booking_panel, driver_panel, BookingCard, DriverCard, PanelContent};
use super::helpers::{action_button_label, booking_status_label, format_fare};
use super::messages::Msg;
use super::state::{BookingField, BookingPage, ModalBody, ModalState, PageState};

pub fn view(component: &BookingPage, ctx: &Context<BookingPage>) -> Html {
    let link = ctx.link();
    let state = &component.state;

    html! {
        <div class="container">
            <header class="page-header">
                <h1>{ "Ojek Cirebon" }</h1>
                <p>{ "Pesan ojek dalam kota dengan cepat dan mudah" }</p>
            </header>

            { build_drivers_section(state) }
            { build_booking_section(state, link) }
            { build_tracking_section(state, link) }
            { build_modal(state, link) }
        </div>
    }
}

fn build_drivers_section(state: &PageState) -> Html {
    let content = match driver_panel(&state.drivers) {
        PanelContent::Blank => html! {},
        PanelContent::Notice(text) => notice(text),
        PanelContent::Cards(cards) => cards.into_iter().map(driver_card).collect::<Html>(),
    };

    html! {
        <section class="card drivers-section">
            <h2>{ "Driver Tersedia" }</h2>
            <CardGrid id="driversList">
                { content }
            </CardGrid>
        </section>
    }
}

fn driver_card(card: DriverCard) -> Html {
    html! {
        <div class="driver-card">
            <h3>{ card.name }</h3>
            <div class="rating">{ card.rating }</div>
            <p>{ card.phone }</p>
            <span class={format!("status {}", card.status_code)}>{ card.status_label }</span>
        </div>
    }
}

fn build_booking_section(state: &PageState, link: &Scope<BookingPage>) -> Html {
    let form = &state.booking_form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitBooking
    });

    html! {
        <section class="card booking-section">
            <h2>{ "Pesan Ojek" }</h2>
            <form id="bookingForm" {onsubmit}>
                { form_input(link, "customerName", "Nama", "text", &form.customer_name, BookingField::CustomerName) }
                { form_input(link, "customerPhone", "No. Telepon", "tel", &form.customer_phone, BookingField::CustomerPhone) }
                { form_input(link, "pickup", "Lokasi Penjemputan", "text", &form.pickup, BookingField::Pickup) }
                { form_input(link, "destination", "Tujuan", "text", &form.destination, BookingField::Destination) }
                <button type="submit" class="btn btn-primary">{ "Pesan Sekarang" }</button>
            </form>
        </section>
    }
}

/// Controlled, required text input bound to one booking form field.
fn form_input(
    link: &Scope<BookingPage>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: &str,
    field: BookingField,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::EditBooking(field, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <div class="form-group">
            <label for={id}>{ label }</label>
            <input
                type={input_type}
                id={id}
                name={id}
                required={true}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}

fn build_tracking_section(state: &PageState, link: &Scope<BookingPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitTrack
    });
    let oninput = link.callback(|e: InputEvent| {
        Msg::EditTrackPhone(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    let results = match booking_panel(&state.bookings) {
        PanelContent::Blank => html! {},
        PanelContent::Notice(text) => notice(text),
        PanelContent::Cards(cards) => cards
            .into_iter()
            .map(|card| booking_card(card, link))
            .collect::<Html>(),
    };

    html! {
        <section class="card tracking-section">
            <h2>{ "Lacak Booking" }</h2>
            <form id="trackForm" {onsubmit}>
                <div class="form-group">
                    <label for="trackPhone">{ "No. Telepon" }</label>
                    <input
                        type="tel"
                        id="trackPhone"
                        name="trackPhone"
                        required={true}
                        value={state.track_phone.clone()}
                        {oninput}
                    />
                </div>
                <button type="submit" class="btn btn-secondary">{ "Cari Booking" }</button>
            </form>
            <CardGrid id="bookingResults" min_card_width={280}>
                { results }
            </CardGrid>
        </section>
    }
}

fn booking_card(card: BookingCard, link: &Scope<BookingPage>) -> Html {
    let booking_id = card.id;
    let buttons = card
        .actions
        .iter()
        .map(|&action| {
            let (class, style) = match action {
                BookingAction::Cancel => ("btn btn-secondary", "margin-right: 10px;"),
                BookingAction::Complete => ("btn btn-primary", ""),
            };
            html! {
                <button
                    type="button"
                    class={class}
                    style={style}
                    onclick={link.callback(move |_| Msg::RequestAction(action, booking_id))}
                >
                    { action_button_label(action) }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="booking-card">
            <h3>{ card.title }</h3>
            <div class="booking-info">
                { info_row("Driver:", card.driver_name) }
                { info_row("No. Driver:", card.driver_phone) }
                { info_row("Penjemputan:", card.pickup) }
                { info_row("Tujuan:", card.destination) }
                { info_row("Tarif:", card.fare) }
                <p>
                    <strong>{ "Status:" }</strong>{ " " }
                    <span class={format!("booking-status status {}", card.status_code)}>
                        { card.status_label }
                    </span>
                </p>
            </div>
            { buttons }
        </div>
    }
}

fn build_modal(state: &PageState, link: &Scope<BookingPage>) -> Html {
    let content = match &state.modal {
        ModalState::Hidden => html! {},
        ModalState::Visible { title, body } => html! {
            <>
                <h2>{ title.clone() }</h2>
                { modal_body(body) }
            </>
        },
    };

    html! {
        <YwModal visible={state.modal.is_visible()} on_close={link.callback(|()| Msg::CloseModal)}>
            { content }
        </YwModal>
    }
}

fn modal_body(body: &ModalBody) -> Html {
    match body {
        ModalBody::Booking(booking) => booking_details(booking),
        ModalBody::Message(message) => html! { <p>{ message.clone() }</p> },
    }
}

fn booking_details(booking: &Booking) -> Html {
    html! {
        <>
            <h3>{ "Detail Booking" }</h3>
            { info_row("ID Booking:", booking.id.to_string()) }
            { info_row("Driver:", booking.driver_name.clone()) }
            { info_row("No. Driver:", booking.driver_phone.clone()) }
            { info_row("Penjemputan:", booking.pickup.clone()) }
            { info_row("Tujuan:", booking.destination.clone()) }
            { info_row("Estimasi Tarif:", format_fare(booking.estimated_fare)) }
            { info_row("Status:", booking_status_label(&booking.status).to_string()) }
        </>
    }
}

fn info_row(label: &'static str, value: String) -> Html {
    html! {
        <p><strong>{ label }</strong>{ " " }{ value }</p>
    }
}

/// Single paragraph spanning the whole grid (placeholder or error).
fn notice(text: String) -> Html {
    html! {
        <p style="grid-column: 1 / -1;">{ text }</p>
    }
}
