pub mod chatbot;
pub mod emergency;
pub mod home;
pub mod hospitals;
pub mod shared;

pub use chatbot::ChatBot;
pub use emergency::EmergencyView;
pub use home::HomeView;
pub use hospitals::HospitalsView;
