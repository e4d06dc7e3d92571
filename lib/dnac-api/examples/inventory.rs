#![allow(missing_docs, clippy::print_stdout)]
//! Lists the inventory of a controller with the interface count of each device.
//!
//! ```sh
//! DNAC_HOST=sandboxdnac.cisco.com DNAC_USERNAME=devnetuser DNAC_PASSWORD=Cisco123! \
//!     cargo run -p dnac-api --example inventory
//! ```
use anyhow::{Context, Result};
use dnac_api::{interface, misc, network_device};
use dnac_core::{Authentication, DnacClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let host = std::env::var("DNAC_HOST").context("DNAC_HOST is not set")?;
    let username = std::env::var("DNAC_USERNAME").context("DNAC_USERNAME is not set")?;
    let password = std::env::var("DNAC_PASSWORD").context("DNAC_PASSWORD is not set")?;

    let client = DnacClient::builder()
        .with_host(host)
        .with_danger_accept_invalid_certs(true)
        .build()?;

    let authorization = Authentication::basic_credentials(&username, &password)?;
    let token = misc::post_auth_token(&client, &authorization)?.await?;
    let client = client.with_authentication(Authentication::Token(token.token));
    info!("logged in");

    let devices = network_device::get_network_devices(&client, &Default::default())?.await?;
    for device in devices.response {
        let Some(id) = device.id.as_deref() else {
            continue;
        };
        let count = interface::get_interface_count_by_device(&client, id)?.await?;
        println!(
            "{:<24} {:<16} {:>4} interfaces",
            device.hostname.as_deref().unwrap_or("-"),
            device.management_ip_address.as_deref().unwrap_or("-"),
            count.response
        );
    }

    Ok(())
}
