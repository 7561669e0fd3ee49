use crate::config::AppConfig;
use crate::dispatch::{COUNTDOWN_TICK, DispatchDetails, DispatchPhase, DispatchSequence};
use crate::timer;
use crate::views::shared::{CLOCK_FORMAT, format_local};
use dioxus::prelude::*;

#[component]
pub fn EmergencyView(on_cancel: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let mut sequence = use_signal(|| DispatchSequence::new(config.countdown_secs));

    // Dropped with the view, so leaving the page stops the countdown.
    use_future(move || async move {
        while matches!(sequence.peek().phase(), DispatchPhase::CountingDown { .. }) {
            timer::sleep(COUNTDOWN_TICK).await;
            sequence.with_mut(|state| {
                state.tick();
            });
        }
    });

    let current = sequence();

    rsx! {
        div { class: "main-container",
            div { class: "card",
                h1 { class: "page-title accent", "Emergency Assistance" }
                p { class: "page-subtitle", "Help is on the way. Please stay calm and follow instructions." }
                {match current.phase() {
                    DispatchPhase::CountingDown { remaining } => rsx! {
                        div { class: "countdown",
                            div { class: "countdown-number", "{remaining}" }
                            p { "Dispatching emergency services to your location in {remaining} seconds" }
                            button {
                                class: "btn btn-outline-danger",
                                r#type: "button",
                                onclick: move |_| on_cancel.call(()),
                                "Cancel Request"
                            }
                        }
                    },
                    DispatchPhase::Dispatched => rsx! {
                        DispatchedSummary { sequence: current, on_cancel }
                    },
                }}
            }
        }
    }
}

#[component]
fn DispatchedSummary(sequence: DispatchSequence, on_cancel: EventHandler<()>) -> Element {
    let details = DispatchDetails::default();
    let dispatched_at = sequence
        .dispatched_at()
        .and_then(|at| format_local(at, CLOCK_FORMAT))
        .unwrap_or_default();

    rsx! {
        div { class: "dispatched-banner",
            h3 { "Emergency Services Dispatched" }
            p { "Ambulance #{details.ambulance_id} is on the way" }
        }
        div { class: "detail-grid",
            DetailCard {
                icon: "📍",
                title: "Your Location",
                primary: details.address.to_string(),
                secondary: details.location.to_string(),
            }
            DetailCard {
                icon: "⏱",
                title: "Estimated Arrival",
                primary: details.eta_label(),
                secondary: format!("Dispatched at {dispatched_at}"),
            }
            DetailCard {
                icon: "🚑",
                title: "Ambulance Details",
                primary: format!("ID: {}", details.ambulance_id),
                secondary: format!("Type: {}", details.unit_type),
            }
            DetailCard {
                icon: "📞",
                title: "Emergency Contact",
                primary: details.contact_phone.to_string(),
                secondary: details.contact_hours.to_string(),
            }
        }
        div { style: "display: flex; justify-content: center;",
            button {
                class: "btn btn-outline-danger",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Cancel Emergency"
            }
        }
    }
}

#[component]
fn DetailCard(
    icon: &'static str,
    title: &'static str,
    primary: String,
    secondary: String,
) -> Element {
    rsx! {
        div { class: "card",
            h3 { "{icon} {title}" }
            p { "{primary}" }
            p { class: "text-muted", "{secondary}" }
        }
    }
}
