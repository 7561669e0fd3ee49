use crate::dispatch::{BUTTON_RESET_DELAY, DISPATCH_UPDATE_DELAY, DispatchDetails, EmergencyRequest};
use crate::location::Coordinates;
use crate::timer;
use crate::views::shared::{NoticeTone, use_notices};
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let location = use_signal(Coordinates::default);
    let mut request = use_signal(EmergencyRequest::default);
    let notices = use_notices();

    let on_emergency = move |_: ()| {
        request.with_mut(|state| state.press());
        tracing::info!(location = %location(), "emergency requested from home screen");
        notices.push(
            "Emergency Request Initiated",
            "Help is on the way. Stay calm and wait for assistance.",
            NoticeTone::Destructive,
        );

        spawn(async move {
            timer::sleep(BUTTON_RESET_DELAY).await;
            request.with_mut(|state| state.release());
        });
        spawn_forever(async move {
            timer::sleep(DISPATCH_UPDATE_DELAY).await;
            let details = DispatchDetails::default();
            notices.push(
                "Update: Ambulance Dispatched",
                format!("Estimated arrival time: {}", details.eta_label()),
                NoticeTone::Info,
            );
        });
    };

    let state = request();

    rsx! {
        div { class: "main-container",
            div { class: "hero",
                h1 { class: "page-title",
                    span { class: "accent", "Smart" }
                    " Ambulance System"
                }
                h2 { class: "page-subtitle", "Emergency Medical Assistance" }
                p { class: "page-subtitle",
                    "Press the emergency button to request immediate medical assistance. "
                    "Our system will locate the nearest available ambulance and hospital."
                }
            }
            LocationCard { coordinates: location() }
            EmergencyButton { pressed: state.pressed, onpress: on_emergency }
            if state.requested {
                div { class: "status-panel",
                    h3 { "Emergency Status" }
                    p {
                        span { class: "pulse-dot" }
                        "Emergency request initiated. Help is on the way."
                    }
                }
            }
        }
    }
}

#[component]
fn LocationCard(coordinates: Coordinates) -> Element {
    rsx! {
        div { class: "card location-card",
            h3 { "Your Current Location" }
            div { class: "location-grid",
                span { class: "label", "Lat:" }
                span { class: "value", "{coordinates.latitude_label()}" }
                span { class: "label", "Lng:" }
                span { class: "value", "{coordinates.longitude_label()}" }
            }
            p { class: "text-muted", "📍 Location services active" }
        }
    }
}

#[component]
fn EmergencyButton(pressed: bool, onpress: EventHandler<()>) -> Element {
    let class = if pressed {
        "emergency-button pressed"
    } else {
        "emergency-button"
    };
    rsx! {
        div { class: "emergency-wrap",
            button {
                class: class,
                r#type: "button",
                onclick: move |_| onpress.call(()),
                "Emergency"
            }
            p { class: "text-muted",
                "Press the emergency button to request immediate medical assistance"
            }
        }
    }
}
