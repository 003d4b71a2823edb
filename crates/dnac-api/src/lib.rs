// dnac-api: Async Rust client for the Cisco DNA Center intent API (device inventory)

pub mod auth;
pub mod client;
pub mod devices;
pub mod error;
pub mod filter;
pub mod models;
pub mod session;
pub mod transport;
pub mod version;

pub use client::NetworkDeviceClient;
pub use error::Error;
pub use filter::RequestFilter;
pub use models::{IntentEnvelope, NetworkDevice};
pub use session::ControllerSession;
pub use version::ControllerVersion;
