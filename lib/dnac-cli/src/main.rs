#![allow(missing_docs, clippy::print_stdout)]
use anyhow::{Context, Result};
use dnac_api::network_device::NetworkDeviceFilter;
use dnac_api::template_programmer::TemplateFilter;
use dnac_api::{discovery, dna_intent, misc, network_device, template_programmer};
use dnac_core::{Authentication, DnacClient};
use serde::Serialize;
use tracing::{Level, debug, info};

mod args;
use self::args::{AppArgs, Command, USAGE};

#[tokio::main]
async fn main() -> Result<()> {
    let Some(args) = AppArgs::parse().context("parsing arguments")? else {
        print!("{USAGE}");
        return Ok(());
    };

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let client = DnacClient::builder()
        .with_host(args.host.as_str())
        .with_port(args.port)
        .with_danger_accept_invalid_certs(args.insecure)
        .build()
        .context("building client")?;
    debug!(base_uri = %client.base_uri(), "client ready");

    let authorization = Authentication::basic_credentials(&args.username, &args.password)?;
    let token = misc::post_auth_token(&client, &authorization)?
        .await
        .context("requesting a token")?;
    info!(username = %args.username, "authenticated");

    if let Command::Token = args.command {
        return print_json(&token);
    }
    let client = client.with_authentication(Authentication::Token(token.token));

    match args.command {
        Command::Token => Ok(()),
        Command::Devices { hostname, family } => {
            let filter = NetworkDeviceFilter {
                hostname,
                family,
                ..Default::default()
            };
            print_json(&network_device::get_network_devices(&client, &filter)?.await?)
        }
        Command::Device(id) => {
            print_json(&network_device::get_network_device_by_id(&client, &id)?.await?)
        }
        Command::DeviceCount => {
            print_json(&network_device::get_network_device_count(&client)?.await?)
        }
        Command::Discoveries => {
            let count = discovery::get_discovery_count(&client)?.await?.into_inner();
            if count == 0 {
                return print_json(&serde_json::json!([]));
            }
            print_json(&discovery::get_discovery_range(&client, 1, count)?.await?)
        }
        Command::Task(id) => print_json(&misc::get_task_by_id(&client, &id)?.await?),
        Command::Templates => print_json(
            &template_programmer::get_templates(&client, &TemplateFilter::default())?.await?,
        ),
        Command::SiteHealth => print_json(&dna_intent::get_site_health(&client, None)?.await?),
    }
}

fn print_json<T>(value: &T) -> Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(value).context("rendering output")?;
    println!("{json}");
    Ok(())
}
