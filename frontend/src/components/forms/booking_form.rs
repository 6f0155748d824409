use shared::{BookingForm, FormField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingFormViewProps {
    pub form: BookingForm,
    pub error: Option<String>,

    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_dismiss_error: Callback<()>,
}

#[function_component(BookingFormView)]
pub fn booking_form_view(props: &BookingFormViewProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let fields = FormField::ALL.iter().map(|field| {
        let field = *field;
        let oninput = {
            let on_field_change = props.on_field_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_field_change.emit((field, input.value()));
            })
        };

        html! {
            <>
                <label for={field.id()}>{field.label()}</label>
                <input
                    type={field.input_type()}
                    id={field.id()}
                    name={field.id()}
                    value={props.form.get(field).to_string()}
                    {oninput}
                    required=true
                />
            </>
        }
    });

    html! {
        <>
            {if let Some(error) = props.error.as_ref() {
                let on_dismiss_error = props.on_dismiss_error.clone();
                html! {
                    <div class="form-message error" onclick={Callback::from(move |_: MouseEvent| on_dismiss_error.emit(()))}>
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="booking-form" {onsubmit}>
                {for fields}
                <button type="submit">{"Agendar"}</button>
            </form>
        </>
    }
}
