use crate::bot;
use crate::chat::{ChatLog, TranscriptRoute, WidgetState, can_send, route_transcript};
use crate::config::AppConfig;
use crate::speech::{self, SpeakMode, SpeakOutcome, SpeechError};
use crate::timer;
use crate::types::{ChatMessage, Language};
use crate::views::shared::{MESSAGE_TIME_FORMAT, NoticeTone, Notices, format_local, use_notices};
use dioxus::prelude::*;

const SCROLL_CHAT_SCRIPT: &str = r#"
const list = document.getElementById("chat-list");
if (list) { list.scrollTop = list.scrollHeight; }
return true;
"#;

fn report_speech_error(notices: Notices, err: &SpeechError) {
    tracing::warn!("speech failure: {}", err);
    let (title, description) = err.notice_text();
    notices.push(title, description, NoticeTone::Destructive);
}

#[component]
pub fn ChatBot() -> Element {
    let config = use_context::<AppConfig>();
    let notices = use_notices();
    let mut widget = use_signal(WidgetState::default);
    let mut language = use_signal(|| config.language);
    let log = use_signal(|| ChatLog::new(config.language));
    let mut input = use_signal(String::new);
    let typing = use_signal(|| false);
    let listening = use_signal(|| false);
    let speaking = use_signal(|| Option::<u64>::None);

    let typing_delay = config.typing_delay;
    let chat_open_delay = config.chat_open_delay;
    let auto_speak = config.auto_speak;
    let rate = config.speech_rate;
    let pitch = config.speech_pitch;

    use_future(move || async move {
        timer::sleep(chat_open_delay).await;
        if *widget.peek() == WidgetState::Closed {
            widget.set(WidgetState::Open);
        }
    });

    use_drop(|| {
        spawn_forever(async {
            if let Err(err) = speech::cancel_speech().await {
                tracing::debug!("could not cancel speech on teardown: {}", err);
            }
        });
    });

    use_effect(move || {
        let _ = log.read().len();
        let _ = typing();
        let _ = document::eval(SCROLL_CHAT_SCRIPT);
    });

    let mut start_speech = {
        let mut speaking = speaking;
        move |message_id: u64, text: String, mode: SpeakMode| {
            let lang = language();
            speaking.set(Some(message_id));
            spawn(async move {
                match speech::speak(&text, lang, rate, pitch, mode).await {
                    Ok(SpeakOutcome::Finished) | Ok(SpeakOutcome::Stopped) => {}
                    Err(err) => report_speech_error(notices, &err),
                }
                if *speaking.peek() == Some(message_id) {
                    speaking.set(None);
                }
            });
        }
    };

    let mut send_message = {
        let mut log = log;
        let mut typing = typing;
        move |text: String| {
            if !can_send(&text, typing()) {
                return;
            }
            let lang = language();
            let Some(query) = log.with_mut(|log| log.push_user(&text).map(|msg| msg.text.clone()))
            else {
                return;
            };
            input.set(String::new());
            typing.set(true);

            spawn(async move {
                timer::sleep(typing_delay).await;
                let reply = bot::respond(&query, lang);
                let reply_id = log.with_mut(|log| log.push_bot(reply).id);
                typing.set(false);
                if auto_speak {
                    start_speech(reply_id, reply.to_string(), SpeakMode::Interrupt);
                }
            });
        }
    };

    let toggle_listening = {
        let mut listening = listening;
        move |_| {
            if listening() {
                listening.set(false);
                spawn(async move {
                    if let Err(err) = speech::stop_listening().await {
                        tracing::warn!("failed to stop recognition: {}", err);
                    }
                });
                return;
            }
            listening.set(true);
            let lang = language();
            spawn(async move {
                let heard = speech::listen(lang).await;
                listening.set(false);
                match heard {
                    Ok(Some(transcript)) => match route_transcript(&transcript, typing()) {
                        TranscriptRoute::Send => send_message(transcript),
                        TranscriptRoute::Draft => input.set(transcript),
                        TranscriptRoute::Ignore => {}
                    },
                    Ok(None) | Err(SpeechError::NoResult) => {}
                    Err(err) => report_speech_error(notices, &err),
                }
            });
        }
    };

    let state = widget();
    if !state.is_visible() {
        return rsx! {
            button {
                class: "chat-launcher",
                r#type: "button",
                title: "Open AnswerGenie",
                onclick: move |_| widget.set(widget().toggle_open()),
                "🤖"
            }
        };
    }

    let minimized = state == WidgetState::Minimized;
    let messages = log.read().messages().to_vec();
    let current_speaking = speaking();
    let is_typing = typing();
    let is_listening = listening();
    let minimize_title = if minimized { "Maximize" } else { "Minimize" };
    let mic_class = if is_listening {
        "btn btn-round active"
    } else {
        "btn btn-round"
    };
    let mic_title = if is_listening {
        "Stop listening"
    } else {
        "Start voice input"
    };

    rsx! {
        div { class: format_args!("card chat-widget {}", if minimized { "minimized" } else { "" }),
            div { class: "chat-header",
                h3 { "🤖 AnswerGenie Assistant" }
                div { class: "chat-header-actions",
                    if !minimized {
                        select {
                            aria_label: "Language",
                            onchange: move |ev| language.set(Language::from_code_or_default(&ev.value())),
                            for lang in Language::ALL {
                                option {
                                    value: lang.code(),
                                    selected: lang == language(),
                                    "{lang.native_name()}"
                                }
                            }
                        }
                    }
                    button {
                        class: "icon-btn",
                        r#type: "button",
                        title: minimize_title,
                        onclick: move |_| widget.set(widget().toggle_minimize()),
                        if minimized { "▢" } else { "▁" }
                    }
                    button {
                        class: "icon-btn",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| widget.set(widget().toggle_open()),
                        "✕"
                    }
                }
            }
            if !minimized {
                div { id: "chat-list", class: "chat-list",
                    for msg in messages.iter() {
                        MessageRow {
                            key: "{msg.id}",
                            message: msg.clone(),
                            speaking: current_speaking == Some(msg.id),
                            on_speak: move |(id, text): (u64, String)| start_speech(id, text, SpeakMode::Toggle),
                        }
                    }
                    if is_typing {
                        div { class: "message-row bot",
                            div { class: "bubble bot typing-dots",
                                "🤖 "
                                span {}
                                span {}
                                span {}
                            }
                        }
                    }
                }
                form {
                    class: "composer",
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        send_message(input());
                    },
                    input {
                        r#type: "text",
                        placeholder: "Type your message...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                    }
                    button {
                        class: mic_class,
                        r#type: "button",
                        title: mic_title,
                        onclick: toggle_listening,
                        if is_listening { "🔇" } else { "🎤" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: !can_send(&input(), is_typing),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage, speaking: bool, on_speak: EventHandler<(u64, String)>) -> Element {
    let side = if message.is_bot() { "bot" } else { "user" };
    let timestamp = format_local(message.timestamp, MESSAGE_TIME_FORMAT);
    let id = message.id;
    let text = message.text.clone();
    let speak_title = if speaking {
        "Stop speaking"
    } else {
        "Speak this message"
    };

    rsx! {
        div { class: "message-row {side}",
            div {
                div { class: "bubble {side}",
                    if message.is_bot() { "🤖 " }
                    "{message.text}"
                    if !message.is_bot() { " 👤" }
                }
                div { class: "message-meta",
                    if let Some(ts) = timestamp {
                        span { "{ts}" }
                    }
                    if message.is_bot() {
                        button {
                            class: "icon-btn",
                            r#type: "button",
                            title: speak_title,
                            onclick: move |_| on_speak.call((id, text.clone())),
                            if speaking { "🔇" } else { "🔊" }
                        }
                    }
                }
            }
        }
    }
}
