use shared::CalendarMonth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub calendar: CalendarMonth,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <div class="calendar-header">
            <h1>{props.calendar.header()}</h1>
        </div>
    }
}
