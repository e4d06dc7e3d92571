//! Endpoint wrappers and payload models for the Cisco DNA Center REST API.
//!
//! Every wrapper is a plain function taking the [`DnacClient`](dnac_core::DnacClient)
//! as explicit context. It builds the call (path, query, headers, body) and
//! returns a [`RequestBuilder`](dnac_core::RequestBuilder) bound to the type the
//! endpoint answers with. Nothing is sent until the builder is awaited.
//!
//! ```rust,no_run
//! use dnac_api::network_device::{self, NetworkDeviceFilter};
//! use dnac_core::{Authentication, DnacClient};
//!
//! # async fn example() -> Result<(), dnac_core::ApiClientError> {
//! let client = DnacClient::builder()
//!     .with_host("sandboxdnac.cisco.com")
//!     .with_authentication(Authentication::Token("eyJ0eXAiOiJKV1Qi".into()))
//!     .build()?;
//!
//! let filter = NetworkDeviceFilter {
//!     family: vec!["Switches and Hubs".to_string()],
//!     ..Default::default()
//! };
//! let devices = network_device::get_network_devices(&client, &filter)?.await?;
//! for device in devices.response {
//!     println!("{:?} {:?}", device.hostname, device.management_ip_address);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Enveloped and raw answers
//!
//! Most endpoints wrap their payload in `{"response": ..., "version": ...}`
//! and their wrappers return [`Envelope<T>`](dnac_core::Envelope). Plug and
//! Play, template programmer, and a few intent endpoints answer with the bare
//! payload; their wrappers return `T` directly.

pub mod common;

pub mod discovery;
pub mod dna_intent;
pub mod file;
pub mod flow_analysis;
pub mod global_credential;
pub mod interface;
pub mod misc;
pub mod network_device;
pub mod onboarding;
pub mod template_programmer;

pub use self::common::{CountResult, Paging, SortOrder, TaskId, TaskIdResult};
