use std::time::Duration;

/// Cosmetic UI delay that works on every Dioxus platform.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

// tokio timers are unavailable in the browser, so defer to `setTimeout`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        duration.as_millis()
    );
    if let Err(err) = dioxus::document::eval(&script).join::<bool>().await {
        tracing::warn!("timer eval failed: {:?}", err);
    }
}
