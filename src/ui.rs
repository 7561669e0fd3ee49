use crate::config;
use crate::theme::theme_definition;
use crate::views::shared::{NoticeTray, Notices};
use crate::views::{ChatBot, EmergencyView, HomeView, HospitalsView};
use dioxus::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppPage {
    Home,
    Emergency,
    Hospitals,
}

#[component]
pub fn App() -> Element {
    use_context_provider(config::current);
    use_context_provider(|| Notices(Signal::new(Vec::new())));
    let active_page = use_signal(|| AppPage::Home);

    rsx! {
        ThemeStyles {}
        div { class: "app-shell",
            AppHeader { active_page }
            PagePanel { active_page }
            AppFooter {}
        }
        NoticeTray {}
        ChatBot {}
    }
}

#[component]
fn ThemeStyles() -> Element {
    let definition = theme_definition();
    rsx! {
        style { dangerous_inner_html: "{definition.palette}" }
        style { dangerous_inner_html: "{definition.layout}" }
    }
}

#[component]
fn AppHeader(active_page: Signal<AppPage>) -> Element {
    let mut active_page = active_page;
    rsx! {
        header { class: "header",
            div { class: "header-content",
                span {
                    class: "brand",
                    onclick: move |_| active_page.set(AppPage::Home),
                    "🚑 Ambulance Vibe"
                }
                nav { class: "nav",
                    NavButton {
                        active_page,
                        page: AppPage::Hospitals,
                        class: "btn btn-ghost",
                        label: "Find Hospitals",
                    }
                    NavButton {
                        active_page,
                        page: AppPage::Emergency,
                        class: "btn btn-danger",
                        label: "Emergency",
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(
    active_page: Signal<AppPage>,
    page: AppPage,
    class: &'static str,
    label: &'static str,
) -> Element {
    let mut active_page = active_page;
    rsx! {
        button {
            class: class,
            r#type: "button",
            aria_current: (active_page() == page).then_some("page"),
            onclick: move |_| {
                tracing::debug!(?page, "navigating");
                active_page.set(page);
            },
            "{label}"
        }
    }
}

#[component]
fn PagePanel(active_page: Signal<AppPage>) -> Element {
    let mut active_page = active_page;
    match active_page() {
        AppPage::Home => rsx! { HomeView {} },
        AppPage::Emergency => rsx! {
            EmergencyView { on_cancel: move |_| active_page.set(AppPage::Home) }
        },
        AppPage::Hospitals => rsx! {
            HospitalsView { on_request_ambulance: move |_| active_page.set(AppPage::Emergency) }
        },
    }
}

#[component]
fn AppFooter() -> Element {
    let year = OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "footer",
            p { "© {year} Ambulance Vibe. All rights reserved." }
            p { "Made with ♥ for medical emergencies" }
        }
    }
}
