use crate::hospitals::{self, Hospital};
use crate::views::shared::{NoticeTone, use_notices};
use dioxus::prelude::*;

#[component]
pub fn HospitalsView(on_request_ambulance: EventHandler<()>) -> Element {
    let mut search_term = use_signal(String::new);
    let mut results = use_signal(|| hospitals::search(""));

    let run_search = move |ev: FormEvent| {
        ev.prevent_default();
        let term = search_term();
        let found = hospitals::search(&term);
        tracing::debug!(term = %term, matches = found.len(), "hospital search");
        results.set(found);
    };

    let listing = results();

    rsx! {
        div { class: "main-container",
            h1 { class: "page-title", "Find Hospitals" }
            p { class: "page-subtitle", "Locate nearby hospitals and emergency medical facilities" }
            form { class: "search-form", onsubmit: run_search,
                input {
                    r#type: "text",
                    placeholder: "Search hospitals by name or location",
                    value: "{search_term}",
                    oninput: move |ev| search_term.set(ev.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "🔍 Search" }
            }
            if listing.is_empty() {
                div { class: "card", style: "text-align: center;",
                    p { "No hospitals found matching your search." }
                }
            } else {
                for hospital in listing.iter() {
                    HospitalCard {
                        key: "{hospital.id}",
                        hospital: (*hospital).clone(),
                        on_request_ambulance,
                    }
                }
            }
        }
    }
}

#[component]
fn HospitalCard(hospital: Hospital, on_request_ambulance: EventHandler<()>) -> Element {
    let notices = use_notices();
    let filled = hospital.full_stars();
    let main_class = if hospital.emergency {
        "hospital-main emergency"
    } else {
        "hospital-main"
    };
    let address = hospital.address;

    rsx! {
        div { class: "card hospital-card",
            div { class: main_class,
                div { style: "display: flex; justify-content: space-between;",
                    div {
                        h2 { "{hospital.name}" }
                        p { class: "text-muted", "📍 {hospital.address}" }
                    }
                    div { style: "text-align: right;",
                        div { "{hospital.distance_km} km away" }
                        div { class: "stars",
                            for i in 0..5 {
                                span {
                                    class: format_args!("{}", if i < filled { "filled" } else { "empty" }),
                                    "★"
                                }
                            }
                            span { class: "text-muted", " {hospital.rating}" }
                        }
                    }
                }
                div { class: "location-grid", style: "margin-top: 1rem;",
                    span { "📞 {hospital.phone}" }
                    span { "🕑 {hospital.hours}" }
                }
            }
            div { class: "hospital-side",
                if hospital.emergency {
                    div { class: "accent", "Emergency Services Available" }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_request_ambulance.call(()),
                        "Request Ambulance"
                    }
                } else {
                    div { class: "text-muted", "No Emergency Services" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| notices.push("Directions", address, NoticeTone::Info),
                        "Get Directions"
                    }
                }
            }
        }
    }
}
