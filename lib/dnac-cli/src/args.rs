use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::warn;

pub(crate) const USAGE: &str = "\
Query a Cisco DNA Center controller.

USAGE:
  dnac [OPTIONS] <COMMAND>

COMMANDS:
  token                                  Print a session token
  devices [--hostname H] [--family F]    List devices, filters may repeat
  device <ID>                            Show one device
  device-count                           Count devices
  discoveries                            List discoveries
  task <ID>                              Show one task
  templates                              List configuration templates
  site-health                            Show the health of every site

OPTIONS:
  --host <HOST>          Controller host      [env: DNAC_HOST, default: 127.0.0.1]
  --port <PORT>          Controller port      [env: DNAC_PORT, default: 443]
  --username <USERNAME>  API user             [env: DNAC_USERNAME]
  --password <PASSWORD>  API password         [env: DNAC_PASSWORD]
  --insecure             Accept self-signed controller certificates
  -v, --verbose          Log requests and responses
  -h, --help             Print this help
";

#[derive(Debug)]
pub(crate) enum Command {
    Token,
    Devices {
        hostname: Vec<String>,
        family: Vec<String>,
    },
    Device(String),
    DeviceCount,
    Discoveries,
    Task(String),
    Templates,
    SiteHealth,
}

#[derive(Debug)]
pub(crate) struct AppArgs {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) insecure: bool,
    pub(crate) verbose: bool,
    pub(crate) command: Command,
}

impl AppArgs {
    /// `None` when help was requested.
    pub(crate) fn parse() -> Result<Option<Self>> {
        let mut pargs = pico_args::Arguments::from_env();
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let host = option_or_env(&mut pargs, "--host", "DNAC_HOST")?
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = option_or_env(&mut pargs, "--port", "DNAC_PORT")?.unwrap_or(443);
        let username = option_or_env(&mut pargs, "--username", "DNAC_USERNAME")?
            .context("missing --username or DNAC_USERNAME")?;
        let password = option_or_env(&mut pargs, "--password", "DNAC_PASSWORD")?
            .context("missing --password or DNAC_PASSWORD")?;
        let insecure = pargs.contains("--insecure");
        let verbose = pargs.contains(["-v", "--verbose"]);

        let Some(name) = pargs.subcommand().context("parsing command")? else {
            bail!("missing command, see --help");
        };
        let command = match name.as_str() {
            "token" => Command::Token,
            "devices" => Command::Devices {
                hostname: pargs
                    .values_from_str("--hostname")
                    .context("parsing hostname filter")?,
                family: pargs
                    .values_from_str("--family")
                    .context("parsing family filter")?,
            },
            "device" => Command::Device(pargs.free_from_str().context("missing device id")?),
            "device-count" => Command::DeviceCount,
            "discoveries" => Command::Discoveries,
            "task" => Command::Task(pargs.free_from_str().context("missing task id")?),
            "templates" => Command::Templates,
            "site-health" => Command::SiteHealth,
            other => bail!("unknown command '{other}', see --help"),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "unused arguments left");
        }

        Ok(Some(Self {
            host,
            port,
            username,
            password,
            insecure,
            verbose,
            command,
        }))
    }
}

fn option_or_env<T>(
    pargs: &mut pico_args::Arguments,
    key: &'static str,
    variable: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(value) = pargs
        .opt_value_from_str(key)
        .with_context(|| format!("parsing {key}"))?
    {
        return Ok(Some(value));
    }
    match env::var(variable) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|error| anyhow::anyhow!("parsing {variable}: {error}")),
        Err(_) => Ok(None),
    }
}
