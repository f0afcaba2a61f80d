//! mgmtwire CLI
//!
//! Resolve codes, list the code tables and inspect captured JSON messages.

use std::fs::File;
use std::io;

use clap::{Parser, Subcommand, ValueEnum};
use mgmtwire::protocol::{
    AliveDevicesUpdate, AliveLinksUpdate, EndpointUpdate, JsonCodec, SwiftStatusUpdate,
    SystemStatusUpdate, TrafficUpdate,
};
use mgmtwire::registry::{self, parse_code_literal};
use mgmtwire::{CodeSpace, CodeSpaceKind, CommandCode, Config, StatusCode, WireError};
use tracing_subscriber::{fmt, EnvFilter};

/// mgmtwire CLI
#[derive(Parser, Debug)]
#[command(name = "mgmtwire")]
#[command(about = "Inspect device-management control channel codes and messages")]
#[command(version)]
struct Args {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Maximum message size in KB
    #[arg(short = 'm', long, default_value = "4096")]
    max_message_kb: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a numeric code to its canonical name
    Resolve {
        /// Code space to resolve against
        #[arg(value_enum)]
        space: Space,

        /// Decimal or 0x-prefixed hex value
        code: String,

        /// Exit with an error when the code is not registered
        #[arg(long)]
        strict: bool,
    },

    /// Look up the numeric code for a canonical name
    Name {
        #[arg(value_enum)]
        space: Space,

        name: String,
    },

    /// Print every registered code in a space
    List {
        #[arg(value_enum)]
        space: Space,
    },

    /// Decode a JSON message from a file (or stdin) and summarize it
    Inspect {
        /// Path to the message; reads stdin when omitted
        path: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Space {
    Command,
    Status,
}

impl From<Space> for CodeSpaceKind {
    fn from(space: Space) -> Self {
        match space {
            Space::Command => CodeSpaceKind::Command,
            Space::Status => CodeSpaceKind::Status,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mgmtwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match build_config(args.pretty, args.max_message_kb) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn build_config(pretty: bool, max_message_kb: usize) -> mgmtwire::Result<Config> {
    let config = Config::builder()
        .pretty_json(pretty)
        .max_message_kb(max_message_kb)?
        .build();
    config.validate()?;
    Ok(config)
}

fn run(command: Commands, config: &Config) -> mgmtwire::Result<()> {
    match command {
        Commands::Resolve { space, code, strict } => {
            let raw = parse_code_literal(&code)?;
            let resolved = registry::resolve(space.into(), raw);

            if resolved.is_unknown() && raw != 0 {
                tracing::debug!("{} is not a registered {} code", raw, CodeSpaceKind::from(space));
                if strict {
                    return Err(WireError::InvalidCode(code));
                }
            }
            println!("{:#}", resolved);
        }
        Commands::Name { space, name } => {
            let found: Option<registry::Code> = match CodeSpaceKind::from(space) {
                CodeSpaceKind::Command => CommandCode::from_name(&name).map(Into::into),
                CodeSpaceKind::Status => StatusCode::from_name(&name).map(Into::into),
            };
            let code = found.ok_or_else(|| WireError::InvalidCode(name))?;
            println!("{:#}", code);
        }
        Commands::List { space } => match CodeSpaceKind::from(space) {
            CodeSpaceKind::Command => print_table(CommandCode::all()),
            CodeSpaceKind::Status => print_table(StatusCode::all()),
        },
        Commands::Inspect { path } => {
            let codec = JsonCodec::new(config);
            let bytes = match path {
                Some(path) => codec.read_message(File::open(path)?)?,
                None => codec.read_message(io::stdin().lock())?,
            };
            inspect(&codec, &bytes)?;
        }
    }
    Ok(())
}

fn print_table<C: CodeSpace>(codes: &[C]) {
    for code in codes {
        println!("{:>6}  0x{:04X}  {}", code.as_i64(), code.as_i64(), code.name());
    }
}

fn inspect(codec: &JsonCodec, bytes: &[u8]) -> mgmtwire::Result<()> {
    let op_code = codec.peek_command(bytes)?;
    let status = codec.peek_status(bytes)?;

    println!("OpCode:     {:#}", op_code);
    println!("StatusCode: {:#}", status);

    let summary = match op_code {
        CommandCode::MonitorAliveUpdate => {
            // Devices and links share an op code; the path tells them apart
            let value: serde_json::Value = codec.decode(bytes)?;
            let is_links = value
                .get("Path")
                .and_then(|p| p.as_str())
                .map_or(false, |p| p.ends_with("/Links"));

            if is_links {
                let update: AliveLinksUpdate = codec.decode(bytes)?;
                let down = update.data.iter().filter(|l| !l.alive).count();
                format!("{} links, {} down", update.data.len(), down)
            } else {
                let update: AliveDevicesUpdate = codec.decode(bytes)?;
                let down = update.data.iter().filter(|d| !d.alive).count();
                format!("{} devices, {} down", update.data.len(), down)
            }
        }
        CommandCode::MonitorStatusUpdate => {
            let update: SystemStatusUpdate = codec.decode(bytes)?;
            format!("{} device status snapshots", update.data.len())
        }
        CommandCode::MonitorTrafficUpdate => {
            let update: TrafficUpdate = codec.decode(bytes)?;
            format!("{} traffic links", update.data.len())
        }
        CommandCode::MonitorSwiftStatusUpdate => {
            let update: SwiftStatusUpdate = codec.decode(bytes)?;
            let online = update.data.iter().filter(|d| d.online).count();
            format!("{} swift devices, {} online", update.data.len(), online)
        }
        CommandCode::MonitorEndpointUpdate => {
            let update: EndpointUpdate = codec.decode(bytes)?;
            match update.data {
                Some(ep) => format!("endpoint device {} interface {}", ep.device_id, ep.interface_id),
                None => format!("endpoint {}", update.action),
            }
        }
        _ => {
            let value: serde_json::Value = codec.decode(bytes)?;
            String::from_utf8_lossy(&codec.encode(&value)?).into_owned()
        }
    };

    println!("{}", summary);
    Ok(())
}
