use shared::CalendarMonth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar: CalendarMonth,
    /// Days with at least one booking
    pub booked_days: Vec<u32>,
    pub on_select_day: Callback<u32>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = props.calendar.days().into_iter().map(|cell| {
        let mut class = classes!("day");
        if cell.is_past {
            class.push("past");
        }
        if props.booked_days.contains(&cell.day) {
            class.push("booked");
        }

        // Past days get no handler at all
        let onclick = (!cell.is_past).then(|| {
            let on_select_day = props.on_select_day.clone();
            let day = cell.day;
            Callback::from(move |_: MouseEvent| on_select_day.emit(day))
        });

        html! {
            <div key={cell.day} {class} {onclick} aria-disabled={cell.is_past.to_string()}>
                {cell.day}
            </div>
        }
    });

    html! {
        <div class="calendar">
            {for calendar_days}
        </div>
    }
}
