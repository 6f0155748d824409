use std::rc::Rc;

use chrono::Local;
use shared::{
    AppointmentPayload, BookingSession, CalendarMonth, FormField, PendingBooking, SubmitError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "booking";

pub enum SessionAction {
    Loaded(Vec<AppointmentPayload>),
    LoadFailed(String),
    SelectDay(u32),
    Close,
    SetField(FormField, String),
    Submitted(PendingBooking),
    SubmitFailed(SubmitError),
    DismissError,
}

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: BookingSession,
}

impl SessionState {
    pub fn new(calendar: CalendarMonth) -> Self {
        Self { session: BookingSession::new(calendar) }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();

        match action {
            SessionAction::Loaded(payloads) => session.load(&payloads, &Local),
            SessionAction::LoadFailed(reason) => session.load_failed(&reason),
            SessionAction::SelectDay(day) => {
                session.select_day(day);
            }
            SessionAction::Close => session.close(),
            SessionAction::SetField(field, value) => session.set_field(field, value),
            SessionAction::Submitted(pending) => session.submission_succeeded(pending),
            SessionAction::SubmitFailed(error) => session.submission_failed(error),
            SessionAction::DismissError => session.dismiss_error(),
        }

        Rc::new(Self { session })
    }
}

pub struct UseBookingSessionResult {
    pub session: BookingSession,
    pub actions: UseBookingSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBookingSessionActions {
    pub select_day: Callback<u32>,
    pub close: Callback<()>,
    pub set_field: Callback<(FormField, String)>,
    pub submit: Callback<()>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_booking_session(api_client: &ApiClient) -> UseBookingSessionResult {
    let state = use_reducer(|| SessionState::new(CalendarMonth::containing(today())));

    // Load all appointments once on mount
    use_effect_with((), {
        let state = state.clone();
        let api_client = api_client.clone();
        move |_| {
            spawn_local(async move {
                match api_client.list_appointments().await {
                    Ok(payloads) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Fetched {} appointments", payloads.len()),
                        );
                        state.dispatch(SessionAction::Loaded(payloads));
                    }
                    Err(e) => state.dispatch(SessionAction::LoadFailed(e.to_string())),
                }
            });
            || ()
        }
    });

    let select_day = {
        let state = state.clone();
        Callback::from(move |day: u32| state.dispatch(SessionAction::SelectDay(day)))
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SessionAction::Close))
    };

    let set_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            state.dispatch(SessionAction::SetField(field, value))
        })
    };

    let dismiss_error = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SessionAction::DismissError))
    };

    // Validation runs against the state of this render; inputs stay enabled
    // while the POST is in flight.
    let submit = {
        let state = state.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: ()| {
            let pending = match state.session.prepare_submission(&Local) {
                Ok(pending) => pending,
                Err(error) => {
                    Logger::warn_with_component(COMPONENT, &error.to_string());
                    report_failure(&state, error);
                    return;
                }
            };

            let state = state.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.create_appointment(&pending.booking.to_payload()).await {
                    Ok(()) => state.dispatch(SessionAction::Submitted(pending)),
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &e.to_string());
                        report_failure(&state, e.into());
                    }
                }
            });
        })
    };

    let actions = UseBookingSessionActions {
        select_day,
        close,
        set_field,
        submit,
        dismiss_error,
    };

    UseBookingSessionResult {
        session: state.session.clone(),
        actions,
    }
}

// Blocking alert, then keep the message next to the form until dismissed.
fn report_failure(state: &UseReducerHandle<SessionState>, error: SubmitError) {
    gloo::dialogs::alert(&error.to_string());
    state.dispatch(SessionAction::SubmitFailed(error));
}
