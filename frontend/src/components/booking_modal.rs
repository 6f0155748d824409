use shared::{Booking, BookingForm, DisplayTz, FormField};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::booking_list::BookingList;
use super::forms::booking_form::BookingFormView;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub day: u32,
    pub form: BookingForm,
    pub bookings: Vec<Booking>,
    pub error: Option<String>,
    pub display_tz: DisplayTz,

    pub on_close: Callback<()>,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_dismiss_error: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <button class="close-btn" onclick={on_close_click}>
                    {"Fechar"}
                </button>
                <h2>{format!("Agendar Carro para o dia {}", props.day)}</h2>

                <BookingFormView
                    form={props.form.clone()}
                    error={props.error.clone()}
                    on_field_change={props.on_field_change.clone()}
                    on_submit={props.on_submit.clone()}
                    on_dismiss_error={props.on_dismiss_error.clone()}
                />

                <BookingList
                    bookings={props.bookings.clone()}
                    display_tz={props.display_tz}
                />
            </div>
        </div>
    }
}
