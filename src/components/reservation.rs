use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const TIME_SLOTS: &[&str] = &["18:00", "19:00", "20:00", "21:00"];
const DINING_PREFERENCES: &[&str] = &["Regular Dining", "Interactive Experience", "Chef's Table"];
const MAX_GUESTS: u32 = 8;

#[derive(Serialize, Clone, Debug)]
struct ReservationRequest {
    name: String,
    email: String,
    date: String,
    time: Option<String>,
    guests: Option<u32>,
    dining_preference: Option<String>,
    special_requests: String,
}

#[function_component(ReservationForm)]
pub fn reservation_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(|| None::<String>);
    let guests = use_state(|| None::<u32>);
    let preference = use_state(|| None::<String>);
    let special_requests = use_state(String::new);
    let confirmation = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let date = date.clone();
        let time = time.clone();
        let guests = guests.clone();
        let preference = preference.clone();
        let special_requests = special_requests.clone();
        let confirmation = confirmation.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = ReservationRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                date: (*date).clone(),
                time: (*time).clone(),
                guests: *guests,
                dining_preference: (*preference).clone(),
                special_requests: (*special_requests).clone(),
            };

            // No reservation backend is wired up; the request stays local.
            match serde_json::to_string(&request) {
                Ok(payload) => info!("Reservation request captured (not submitted): {}", payload),
                Err(e) => warn!("Failed to serialize reservation request: {}", e),
            }

            confirmation.set(Some(
                "Thank you! Your reservation request has been received.".to_string(),
            ));
        })
    };

    html! {
        <form class="reservation-form" onsubmit={onsubmit}>
            {
                if let Some(message) = (*confirmation).as_ref() {
                    html! {
                        <div class="confirmation-notice">{message}</div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-grid">
                <input
                    type="text"
                    placeholder="Name"
                    onchange={
                        let name = name.clone();
                        move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }
                    }
                />
                <input
                    type="email"
                    placeholder="Email"
                    onchange={
                        let email = email.clone();
                        move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }
                    }
                />
                <input
                    type="date"
                    onchange={
                        let date = date.clone();
                        move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            date.set(input.value());
                        }
                    }
                />
                <select
                    onchange={
                        let time = time.clone();
                        move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let value = select.value();
                            time.set(if value.is_empty() { None } else { Some(value) });
                        }
                    }
                >
                    <option value="" disabled=true selected={time.is_none()}>{"Select time"}</option>
                    { TIME_SLOTS.iter().map(|&slot| html! {
                        <option value={slot} selected={(*time).as_deref() == Some(slot)}>{slot}</option>
                    }).collect::<Html>() }
                </select>
            </div>
            <div class="form-row">
                <select
                    onchange={
                        let guests = guests.clone();
                        move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            guests.set(select.value().parse::<u32>().ok());
                        }
                    }
                >
                    <option value="" disabled=true selected={guests.is_none()}>{"Number of guests"}</option>
                    { (1..=MAX_GUESTS).map(|num| {
                        let label = if num == 1 {
                            "1 guest".to_string()
                        } else {
                            format!("{} guests", num)
                        };
                        html! {
                            <option value={num.to_string()} selected={*guests == Some(num)}>{label}</option>
                        }
                    }).collect::<Html>() }
                </select>
                <select
                    onchange={
                        let preference = preference.clone();
                        move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let value = select.value();
                            preference.set(if value.is_empty() { None } else { Some(value) });
                        }
                    }
                >
                    <option value="" disabled=true selected={preference.is_none()}>{"Dining preference"}</option>
                    { DINING_PREFERENCES.iter().map(|&choice| html! {
                        <option value={choice} selected={(*preference).as_deref() == Some(choice)}>{choice}</option>
                    }).collect::<Html>() }
                </select>
            </div>
            <textarea
                placeholder="Special requests or dietary requirements"
                onchange={
                    let special_requests = special_requests.clone();
                    move |e: Event| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        special_requests.set(textarea.value());
                    }
                }
            />
            <button type="submit" class="submit-button">{"Confirm Reservation"}</button>
            <style>
                {r#"
                    .reservation-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .reservation-form input,
                    .reservation-form select,
                    .reservation-form textarea {
                        width: 100%;
                        padding: 0.8rem 1rem;
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid rgba(6, 182, 212, 0.08);
                        border-radius: 10px;
                        color: #fff;
                        font-size: 0.95rem;
                        transition: all 0.3s ease;
                    }
                    .reservation-form input:focus,
                    .reservation-form select:focus,
                    .reservation-form textarea:focus {
                        outline: none;
                        border-color: rgba(6, 182, 212, 0.5);
                        box-shadow: 0 0 0 2px rgba(6, 182, 212, 0.2);
                    }
                    .reservation-form select option {
                        background: #111827;
                    }
                    .reservation-form textarea {
                        height: 6rem;
                        resize: none;
                    }
                    .submit-button {
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        border: none;
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        padding: 0.9rem;
                        border-radius: 10px;
                        transition: opacity 0.3s ease;
                    }
                    .submit-button:hover {
                        opacity: 0.9;
                    }
                    .confirmation-notice {
                        background: rgba(6, 182, 212, 0.1);
                        border: 1px solid rgba(6, 182, 212, 0.35);
                        border-radius: 10px;
                        padding: 0.9rem 1rem;
                        color: #67e8f9;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .form-grid {
                            grid-template-columns: 1fr;
                        }
                        .form-row {
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                    }
                "#}
            </style>
        </form>
    }
}
