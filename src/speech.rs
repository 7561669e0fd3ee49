//! Speech input/output through the browser's Web Speech APIs.
//!
//! This module provides:
//! - one-shot speech recognition in the selected language
//! - speech synthesis with per-language voice selection
//!
//! The browser side is plain JavaScript run through `document::eval`. Every
//! script resolves to a small JSON outcome that is parsed here with serde.

use crate::types::Language;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// How many times to poll `getVoices()` before speaking with the default voice.
pub const VOICE_LOAD_ATTEMPTS: u32 = 10;
pub const VOICE_RETRY_DELAY_MS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechApi {
    Recognition,
    Synthesis,
}

impl fmt::Display for SpeechApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechApi::Recognition => f.write_str("Speech Recognition"),
            SpeechApi::Synthesis => f.write_str("Speech Synthesis"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpeechError {
    #[error("{0} is not supported in this browser")]
    Unsupported(SpeechApi),

    #[error("Speech recognition error: {0}")]
    Recognition(String),

    #[error("No speech was recognised")]
    NoResult,

    #[error("There was an error while speaking the text: {0}")]
    Synthesis(String),

    #[error("Browser bridge error: {0}")]
    Bridge(String),
}

impl SpeechError {
    /// Title and description for the user-facing notice.
    pub fn notice_text(&self) -> (&'static str, String) {
        match self {
            SpeechError::Unsupported(SpeechApi::Recognition) => (
                "Speech Recognition not supported",
                "Your browser does not support voice input.".to_string(),
            ),
            SpeechError::Unsupported(SpeechApi::Synthesis) => (
                "Speech Synthesis not supported",
                "Your browser does not support text to speech functionality.".to_string(),
            ),
            SpeechError::Synthesis(_) => (
                "Speech Error",
                "There was an error while speaking the text.".to_string(),
            ),
            other => ("Speech Error", other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeakOutcome {
    Finished,
    /// Speech was already playing and has been cancelled instead.
    Stopped,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ScriptOutcome {
    Ok {
        #[serde(default)]
        transcript: Option<String>,
        #[serde(default)]
        voices: Vec<VoiceInfo>,
    },
    Stopped,
    Unsupported,
    Error {
        #[serde(default)]
        message: String,
    },
}

fn decode(value: Value) -> Result<ScriptOutcome, SpeechError> {
    serde_json::from_value(value).map_err(|e| SpeechError::Bridge(e.to_string()))
}

/// `Ok(None)` means recognition was aborted by the user.
pub fn parse_recognition_outcome(value: Value) -> Result<Option<String>, SpeechError> {
    match decode(value)? {
        ScriptOutcome::Ok {
            transcript: Some(text),
            ..
        } if !text.trim().is_empty() => Ok(Some(text)),
        ScriptOutcome::Ok { .. } => Err(SpeechError::NoResult),
        ScriptOutcome::Stopped => Ok(None),
        ScriptOutcome::Unsupported => Err(SpeechError::Unsupported(SpeechApi::Recognition)),
        ScriptOutcome::Error { message } => Err(SpeechError::Recognition(message)),
    }
}

/// Outcome of the voice-loading step: `None` when playback was toggled off.
pub fn parse_voice_outcome(value: Value) -> Result<Option<Vec<VoiceInfo>>, SpeechError> {
    match decode(value)? {
        ScriptOutcome::Ok { voices, .. } => Ok(Some(voices)),
        ScriptOutcome::Stopped => Ok(None),
        ScriptOutcome::Unsupported => Err(SpeechError::Unsupported(SpeechApi::Synthesis)),
        ScriptOutcome::Error { message } => Err(SpeechError::Synthesis(message)),
    }
}

pub fn parse_synthesis_outcome(value: Value) -> Result<SpeakOutcome, SpeechError> {
    match decode(value)? {
        ScriptOutcome::Ok { .. } => Ok(SpeakOutcome::Finished),
        ScriptOutcome::Stopped => Ok(SpeakOutcome::Stopped),
        ScriptOutcome::Unsupported => Err(SpeechError::Unsupported(SpeechApi::Synthesis)),
        ScriptOutcome::Error { message } => Err(SpeechError::Synthesis(message)),
    }
}

/// Picks the first voice matching the language's codes in order, else the first voice.
pub fn pick_voice(voices: &[VoiceInfo], language: Language) -> Option<&VoiceInfo> {
    language
        .voice_codes()
        .iter()
        .find_map(|code| {
            let code = code.to_lowercase();
            voices
                .iter()
                .find(|voice| voice.lang.to_lowercase().contains(&code))
        })
        .or_else(|| voices.first())
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn recognition_script(language: Language) -> String {
    format!(
        r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Recognition) {{
    return {{ status: "unsupported" }};
}}
if (window.__ambulanceRecognition) {{
    window.__ambulanceRecognition.abort();
}}
const recognition = new Recognition();
window.__ambulanceRecognition = recognition;
recognition.lang = {locale};
recognition.continuous = false;
recognition.interimResults = false;
return await new Promise((resolve) => {{
    let settled = false;
    const finish = (outcome) => {{
        if (settled) return;
        settled = true;
        if (window.__ambulanceRecognition === recognition) {{
            window.__ambulanceRecognition = null;
        }}
        resolve(outcome);
    }};
    recognition.onresult = (event) => finish({{
        status: "ok",
        transcript: event.results[0][0].transcript,
    }});
    recognition.onerror = (event) => {{
        if (event.error === "aborted") {{
            finish({{ status: "stopped" }});
        }} else if (event.error === "no-speech") {{
            finish({{ status: "ok", transcript: null }});
        }} else {{
            finish({{ status: "error", message: String(event.error) }});
        }}
    }};
    recognition.onend = () => finish({{ status: "ok", transcript: null }});
    try {{
        recognition.start();
    }} catch (e) {{
        finish({{ status: "error", message: String(e) }});
    }}
}});
"#,
        locale = js_string(language.recognition_locale()),
    )
}

pub const STOP_LISTENING_SCRIPT: &str = r#"
if (window.__ambulanceRecognition) {
    window.__ambulanceRecognition.abort();
}
return true;
"#;

pub const CANCEL_SPEECH_SCRIPT: &str = r#"
if (window.speechSynthesis && window.speechSynthesis.speaking) {
    window.speechSynthesis.cancel();
}
return true;
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeakMode {
    /// A second press on a playing message stops it.
    Toggle,
    /// Cuts off whatever is playing and speaks the new text.
    Interrupt,
}

/// Handles speech already playing according to `mode`, then waits for the voice list to load.
pub fn voices_script(mode: SpeakMode) -> String {
    let on_speaking = match mode {
        SpeakMode::Toggle => "synth.cancel();\n    return { status: \"stopped\" };",
        SpeakMode::Interrupt => "synth.cancel();",
    };
    format!(
        r#"
const synth = window.speechSynthesis;
if (!synth) {{
    return {{ status: "unsupported" }};
}}
if (synth.speaking) {{
    {on_speaking}
}}
let voices = synth.getVoices();
for (let attempt = 0; voices.length === 0 && attempt < {attempts}; attempt++) {{
    await new Promise((resolve) => setTimeout(resolve, {delay}));
    voices = synth.getVoices();
}}
return {{
    status: "ok",
    voices: voices.map((voice) => ({{ name: voice.name, lang: voice.lang }})),
}};
"#,
        attempts = VOICE_LOAD_ATTEMPTS,
        delay = VOICE_RETRY_DELAY_MS,
    )
}

pub fn speak_script(
    text: &str,
    language: Language,
    voice: Option<&VoiceInfo>,
    rate: f32,
    pitch: f32,
) -> String {
    let voice_name = voice
        .map(|voice| js_string(&voice.name))
        .unwrap_or_else(|| "null".to_string());
    format!(
        r#"
const synth = window.speechSynthesis;
if (!synth) {{
    return {{ status: "unsupported" }};
}}
const utterance = new SpeechSynthesisUtterance({text});
const voiceName = {voice_name};
if (voiceName !== null) {{
    const voice = synth.getVoices().find((candidate) => candidate.name === voiceName);
    if (voice) {{
        utterance.voice = voice;
    }}
}}
utterance.lang = {locale};
utterance.rate = {rate};
utterance.pitch = {pitch};
return await new Promise((resolve) => {{
    utterance.onend = () => resolve({{ status: "ok" }});
    utterance.onerror = (event) => resolve(
        event.error === "interrupted" || event.error === "canceled"
            ? {{ status: "stopped" }}
            : {{ status: "error", message: String(event.error) }}
    );
    synth.speak(utterance);
}});
"#,
        text = js_string(text),
        locale = js_string(language.recognition_locale()),
    )
}

#[cfg(feature = "ui")]
async fn run_script(script: &str) -> Result<Value, SpeechError> {
    dioxus::document::eval(script)
        .join::<Value>()
        .await
        .map_err(|err| SpeechError::Bridge(format!("{err:?}")))
}

/// Listens once and returns the transcript, or `None` if listening was stopped.
#[cfg(feature = "ui")]
pub async fn listen(language: Language) -> Result<Option<String>, SpeechError> {
    tracing::debug!(locale = language.recognition_locale(), "starting speech recognition");
    parse_recognition_outcome(run_script(&recognition_script(language)).await?)
}

#[cfg(feature = "ui")]
pub async fn stop_listening() -> Result<(), SpeechError> {
    run_script(STOP_LISTENING_SCRIPT).await.map(|_| ())
}

/// Speaks `text`. With [`SpeakMode::Toggle`] an utterance already playing is stopped instead.
#[cfg(feature = "ui")]
pub async fn speak(
    text: &str,
    language: Language,
    rate: f32,
    pitch: f32,
    mode: SpeakMode,
) -> Result<SpeakOutcome, SpeechError> {
    let Some(voices) = parse_voice_outcome(run_script(&voices_script(mode)).await?)? else {
        return Ok(SpeakOutcome::Stopped);
    };
    let voice = pick_voice(&voices, language);
    tracing::debug!(
        voice = voice.map(|v| v.name.as_str()).unwrap_or("<default>"),
        available = voices.len(),
        "speaking assistant message"
    );
    parse_synthesis_outcome(run_script(&speak_script(text, language, voice, rate, pitch)).await?)
}

#[cfg(feature = "ui")]
pub async fn cancel_speech() -> Result<(), SpeechError> {
    run_script(CANCEL_SPEECH_SCRIPT).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn voice(name: &str, lang: &str) -> VoiceInfo {
        VoiceInfo {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }

    #[test]
    fn test_pick_voice_prefers_language_codes() {
        let voices = vec![voice("Google Deutsch", "de-DE"), voice("Lekha", "hi-IN")];
        assert_eq!(
            pick_voice(&voices, Language::Hindi).map(|v| v.name.as_str()),
            Some("Lekha")
        );
    }

    #[test]
    fn test_pick_voice_is_case_insensitive() {
        let voices = vec![voice("Samantha", "EN-us")];
        assert_eq!(
            pick_voice(&voices, Language::English).map(|v| v.name.as_str()),
            Some("Samantha")
        );
    }

    #[test]
    fn test_pick_voice_falls_back_to_first() {
        let voices = vec![voice("Anna", "de-DE"), voice("Thomas", "fr-FR")];
        assert_eq!(
            pick_voice(&voices, Language::Gujarati).map(|v| v.name.as_str()),
            Some("Anna")
        );
        assert!(pick_voice(&[], Language::English).is_none());
    }

    #[test]
    fn test_recognition_outcomes() {
        assert_eq!(
            parse_recognition_outcome(json!({"status": "ok", "transcript": "chest pain"})),
            Ok(Some("chest pain".to_string()))
        );
        assert_eq!(
            parse_recognition_outcome(json!({"status": "ok", "transcript": null})),
            Err(SpeechError::NoResult)
        );
        assert_eq!(parse_recognition_outcome(json!({"status": "stopped"})), Ok(None));
        assert_eq!(
            parse_recognition_outcome(json!({"status": "unsupported"})),
            Err(SpeechError::Unsupported(SpeechApi::Recognition))
        );
        assert_eq!(
            parse_recognition_outcome(json!({"status": "error", "message": "network"})),
            Err(SpeechError::Recognition("network".to_string()))
        );
    }

    #[test]
    fn test_malformed_outcome_is_bridge_error() {
        assert!(matches!(
            parse_synthesis_outcome(json!(true)),
            Err(SpeechError::Bridge(_))
        ));
    }

    #[test]
    fn test_voice_outcomes() {
        let parsed = parse_voice_outcome(json!({
            "status": "ok",
            "voices": [{"name": "Lekha", "lang": "hi-IN"}]
        }));
        assert_eq!(parsed, Ok(Some(vec![voice("Lekha", "hi-IN")])));
        assert_eq!(parse_voice_outcome(json!({"status": "stopped"})), Ok(None));
        assert_eq!(
            parse_synthesis_outcome(json!({"status": "ok"})),
            Ok(SpeakOutcome::Finished)
        );
    }

    #[test]
    fn test_scripts_embed_escaped_values() {
        let script = speak_script("say \"hi\"", Language::Marathi, None, 1.0, 1.0);
        assert!(script.contains(r#"new SpeechSynthesisUtterance("say \"hi\"")"#));
        assert!(script.contains(r#"utterance.lang = "mr-IN";"#));
        assert!(script.contains("const voiceName = null;"));
        assert!(recognition_script(Language::Gujarati).contains(r#"recognition.lang = "gu-IN";"#));
    }

    #[test]
    fn test_silence_is_reported_as_no_result() {
        let script = recognition_script(Language::English);
        assert!(script.contains(r#"event.error === "no-speech""#));
        let silent_branch = script
            .split(r#"event.error === "no-speech""#)
            .nth(1)
            .and_then(|rest| rest.split("} else {").next())
            .unwrap();
        assert!(silent_branch.contains(r#"status: "ok", transcript: null"#));
        assert_eq!(
            parse_recognition_outcome(json!({"status": "ok", "transcript": null})),
            Err(SpeechError::NoResult)
        );
    }

    #[test]
    fn test_voices_script_modes() {
        let toggle = voices_script(SpeakMode::Toggle);
        assert!(toggle.contains(r#"return { status: "stopped" };"#));

        let interrupt = voices_script(SpeakMode::Interrupt);
        assert!(interrupt.contains("synth.cancel();"));
        assert!(!interrupt.contains(r#"status: "stopped""#));
        assert!(interrupt.contains("synth.getVoices()"));
    }

    #[test]
    fn test_unsupported_message() {
        assert_eq!(
            SpeechError::Unsupported(SpeechApi::Synthesis).to_string(),
            "Speech Synthesis is not supported in this browser"
        );
    }

    #[test]
    fn test_notice_text() {
        let (title, _) = SpeechError::Unsupported(SpeechApi::Recognition).notice_text();
        assert_eq!(title, "Speech Recognition not supported");
        let (title, body) = SpeechError::Synthesis("audio-busy".into()).notice_text();
        assert_eq!(title, "Speech Error");
        assert_eq!(body, "There was an error while speaking the text.");
    }
}
