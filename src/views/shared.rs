use crate::timer;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

pub const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub const CLOCK_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour repr:12 padding:zero]:[minute padding:zero]:[second padding:zero] [period case:upper]"
);

static NOTICE_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

/// Transient notices shown in the corner of the screen. Shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Notices(pub Signal<Vec<Notice>>);

impl Notices {
    pub fn push(&self, title: impl Into<String>, description: impl Into<String>, tone: NoticeTone) {
        let id = NOTICE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut list = self.0;
        list.with_mut(|notices| {
            notices.push(Notice {
                id,
                title: title.into(),
                description: description.into(),
                tone,
            })
        });
        // Owned by the root scope so the notice still expires after the page that raised it is gone.
        spawn_forever(async move {
            timer::sleep(NOTICE_LIFETIME).await;
            list.with_mut(|notices| notices.retain(|notice| notice.id != id));
        });
    }
}

pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

pub fn format_local(timestamp: OffsetDateTime, format: &[FormatItem<'_>]) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(format).ok()
}

#[component]
pub fn NoticeTray() -> Element {
    let notices = use_notices();
    let current = (notices.0)();
    rsx! {
        div { class: "notice-tray", role: "status",
            for notice in current.iter() {
                div {
                    key: "{notice.id}",
                    class: format_args!(
                        "notice {}",
                        match notice.tone { NoticeTone::Info => "", NoticeTone::Destructive => "destructive" }
                    ),
                    div { class: "notice-title", "{notice.title}" }
                    div { "{notice.description}" }
                }
            }
        }
    }
}
