pub struct ThemeDefinition {
    pub palette: &'static str,
    pub layout: &'static str,
}

pub fn theme_definition() -> ThemeDefinition {
    ThemeDefinition {
        palette: AMBULANCE_PALETTE,
        layout: LAYOUT,
    }
}

const AMBULANCE_PALETTE: &str = r#"
:root {
    --color-ambulance-red: #e53935;
    --color-ambulance-dark-red: #b71c1c;
    --color-ambulance-blue: #1e40af;
    --color-ambulance-light-blue: #3b82f6;
    --color-ambulance-gray: #f1f5f9;
    --color-ambulance-dark-gray: #475569;
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f9fafb;
    --color-text-primary: #111827;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-success-bg: #f0fdf4;
    --color-success-border: #bbf7d0;
    --color-success-text: #15803d;
    --color-warning-bg: #fffbeb;
    --color-warning-border: #fde68a;
    --color-warning-text: #92400e;
    --color-star: #facc15;
}
"#;

const LAYOUT: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--color-bg-secondary); color: var(--color-text-primary); }
.app-shell { display: flex; flex-direction: column; min-height: 100vh; }
.header { background: var(--color-bg-primary); border-bottom: 1px solid var(--color-border); }
.header-content { max-width: 72rem; margin: 0 auto; padding: 0.75rem 1rem; display: flex; align-items: center; justify-content: space-between; }
.brand { color: var(--color-ambulance-red); font-weight: 700; font-size: 1.25rem; cursor: pointer; }
.nav { display: flex; gap: 1rem; }
.btn { border: 1px solid var(--color-border); background: var(--color-bg-primary); border-radius: 0.375rem; padding: 0.5rem 1rem; cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--color-ambulance-blue); border-color: var(--color-ambulance-blue); color: #fff; }
.btn-primary:hover { background: var(--color-ambulance-light-blue); }
.btn-danger { background: var(--color-ambulance-red); border-color: var(--color-ambulance-red); color: #fff; }
.btn-danger:hover { background: var(--color-ambulance-dark-red); }
.btn-outline-danger { color: var(--color-ambulance-red); border-color: var(--color-ambulance-red); background: transparent; }
.btn-ghost { border-color: transparent; background: transparent; color: var(--color-ambulance-blue); }
.btn-round { border-radius: 9999px; width: 2.25rem; height: 2.25rem; padding: 0; }
.btn-round.active { background: var(--color-ambulance-red); color: #fff; border-color: var(--color-ambulance-red); }
.main-container { flex: 1; max-width: 56rem; width: 100%; margin: 0 auto; padding: 2rem 1rem; }
.page-title { text-align: center; font-size: 2rem; margin-bottom: 0.5rem; }
.page-subtitle { text-align: center; color: var(--color-text-muted); margin-bottom: 1.5rem; }
.accent { color: var(--color-ambulance-red); }
.card { background: var(--color-bg-primary); border: 1px solid var(--color-border); border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 1rem; }
.location-card { max-width: 28rem; margin: 0 auto 2.5rem; text-align: center; }
.location-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; font-size: 0.875rem; }
.location-grid .label { text-align: right; font-weight: 600; }
.location-grid .value { text-align: left; }
.text-muted { color: var(--color-text-muted); font-size: 0.75rem; }
.emergency-wrap { display: flex; flex-direction: column; align-items: center; }
.emergency-button { width: 9rem; height: 9rem; border-radius: 9999px; border: none; color: #fff; text-transform: uppercase; font-weight: 700; font-size: 1.25rem; background: var(--color-ambulance-red); cursor: pointer; animation: pulse-emergency 1.5s infinite; }
.emergency-button.pressed { background: var(--color-ambulance-dark-red); animation: none; }
@keyframes pulse-emergency { 0%, 100% { box-shadow: 0 0 0 0 rgba(229,57,53,0.6); } 50% { box-shadow: 0 0 0 18px rgba(229,57,53,0); } }
.status-panel { max-width: 28rem; margin: 3rem auto 0; background: var(--color-warning-bg); border: 1px solid var(--color-warning-border); color: var(--color-warning-text); border-radius: 0.375rem; padding: 1rem; text-align: center; }
.pulse-dot { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #22c55e; margin-right: 0.5rem; }
.countdown { text-align: center; padding: 2rem; border: 1px solid #fecaca; border-radius: 0.375rem; background: #fef2f2; }
.countdown-number { font-size: 2rem; font-weight: 700; color: var(--color-ambulance-red); margin-bottom: 1rem; }
.dispatched-banner { background: var(--color-success-bg); border: 1px solid var(--color-success-border); color: var(--color-success-text); border-radius: 0.375rem; padding: 1rem; text-align: center; }
.detail-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; margin: 1.5rem 0; }
.search-form { display: flex; gap: 0.5rem; margin-bottom: 2rem; }
.search-form input, .composer input, .composer select { flex: 1; border: 1px solid var(--color-border); border-radius: 0.375rem; padding: 0.5rem; }
.hospital-card { display: flex; flex-wrap: wrap; padding: 0; margin-bottom: 1rem; overflow: hidden; }
.hospital-main { flex: 2; padding: 1rem; min-width: 16rem; }
.hospital-main.emergency { border-left: 4px solid var(--color-ambulance-red); }
.hospital-side { flex: 1; padding: 1rem; background: var(--color-bg-secondary); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; min-width: 12rem; }
.stars .filled { color: var(--color-star); }
.stars .empty { color: var(--color-border); }
.footer { background: var(--color-bg-primary); border-top: 1px solid var(--color-border); padding: 1.5rem; text-align: center; color: var(--color-ambulance-dark-gray); font-size: 0.875rem; }
.chat-launcher { position: fixed; bottom: 1rem; right: 1rem; width: 3.5rem; height: 3.5rem; border-radius: 9999px; border: none; background: var(--color-ambulance-blue); color: #fff; font-size: 1.5rem; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.2); }
.chat-widget { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; width: 24rem; max-width: calc(100vw - 2rem); border-top: 4px solid var(--color-ambulance-blue); padding: 0; }
.chat-widget.minimized { width: 16rem; }
.chat-header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem; border-bottom: 1px solid var(--color-border); }
.chat-header h3 { margin: 0; font-size: 0.875rem; }
.chat-header-actions { display: flex; gap: 0.25rem; align-items: center; }
.icon-btn { background: none; border: none; cursor: pointer; color: var(--color-text-muted); }
.chat-list { height: 20rem; overflow-y: auto; padding: 0.75rem; display: flex; flex-direction: column; gap: 1rem; }
.message-row { display: flex; }
.message-row.user { justify-content: flex-end; }
.message-row.bot { justify-content: flex-start; }
.bubble { border-radius: 0.5rem; padding: 0.5rem 0.75rem; max-width: 80%; font-size: 0.875rem; }
.bubble.bot { background: var(--color-ambulance-gray); color: #1f2937; }
.bubble.user { background: var(--color-ambulance-blue); color: #fff; }
.message-meta { display: flex; align-items: center; gap: 0.5rem; font-size: 0.7rem; color: var(--color-text-muted); margin-top: 0.25rem; }
.typing-dots span { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #9ca3af; margin-right: 0.25rem; animation: blink 1s infinite; }
.typing-dots span:nth-child(2) { animation-delay: 0.15s; }
.typing-dots span:nth-child(3) { animation-delay: 0.3s; }
@keyframes blink { 50% { opacity: 0.3; } }
.composer { display: flex; gap: 0.5rem; padding: 0 0.75rem 0.75rem; }
.notice-tray { position: fixed; top: 1rem; right: 1rem; z-index: 60; display: flex; flex-direction: column; gap: 0.5rem; max-width: 22rem; }
.notice { border-radius: 0.5rem; padding: 0.75rem 1rem; background: var(--color-bg-primary); border: 1px solid var(--color-border); box-shadow: 0 4px 12px rgba(0,0,0,0.12); }
.notice.destructive { background: var(--color-ambulance-red); color: #fff; border-color: var(--color-ambulance-dark-red); }
.notice-title { font-weight: 600; }
"#;
