pub mod bot;
pub mod chat;
pub mod config;
pub mod dispatch;
pub mod hospitals;
pub mod location;
pub mod speech;
pub mod types;

#[cfg(feature = "ui")]
pub mod theme;
#[cfg(feature = "ui")]
pub mod timer;
#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
