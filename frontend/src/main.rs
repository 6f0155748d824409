use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::booking_modal::BookingModal;
use components::calendar::Calendar;
use components::header::Header;
use hooks::use_booking_session::use_booking_session;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let display_tz = api_client.config().display_tz();

    let booking = use_booking_session(&api_client);
    let session = &booking.session;
    let actions = &booking.actions;

    html! {
        <div class="App">
            <Header calendar={*session.calendar()} />

            <Calendar
                calendar={*session.calendar()}
                booked_days={session.store().days()}
                on_select_day={actions.select_day.clone()}
            />

            {if let Some(day) = session.selected_day() {
                html! {
                    <BookingModal
                        {day}
                        form={session.form().clone()}
                        bookings={session.selected_bookings().to_vec()}
                        error={session.error().map(str::to_string)}
                        {display_tz}
                        on_close={actions.close.clone()}
                        on_field_change={actions.set_field.clone()}
                        on_submit={actions.submit.clone()}
                        on_dismiss_error={actions.dismiss_error.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    Logger::init();
    Logger::info_with_component("app", "Starting vehicle booking calendar");
    yew::Renderer::<App>::new().render();
}
