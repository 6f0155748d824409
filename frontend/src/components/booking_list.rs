use shared::{Booking, DisplayTz};
use yew::prelude::*;

use crate::services::date_utils::format_booking_time;

#[derive(Properties, PartialEq)]
pub struct BookingListProps {
    pub bookings: Vec<Booking>,
    pub display_tz: DisplayTz,
}

/// Read-only list of the selected day's bookings
#[function_component(BookingList)]
pub fn booking_list(props: &BookingListProps) -> Html {
    if props.bookings.is_empty() {
        return html! { <p>{"Não há agendamentos para este dia."}</p> };
    }

    html! {
        <div>
            <h3>{"Agendamentos:"}</h3>
            {for props.bookings.iter().enumerate().map(|(index, booking)| html! {
                <div key={index} class="booking">
                    <p><strong>{"Nome:"}</strong>{" "}{&booking.name}</p>
                    <p><strong>{"Carro:"}</strong>{" "}{&booking.vehicle}</p>
                    <p><strong>{"Placa:"}</strong>{" "}{&booking.plate}</p>
                    <p>
                        <strong>{"Horário de Início:"}</strong>{" "}
                        {format_booking_time(&booking.start, &props.display_tz)}
                    </p>
                    <p>
                        <strong>{"Horário de Término:"}</strong>{" "}
                        {format_booking_time(&booking.end, &props.display_tz)}
                    </p>
                </div>
            })}
        </div>
    }
}
