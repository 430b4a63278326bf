//! Integration tests driving the kiosk through its public API

mod console_session;
mod credentials;
