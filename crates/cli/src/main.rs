use clap::Parser;
use dns_transport_domain::CliOverrides;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dns-transport")]
#[command(version)]
#[command(about = "Send a DNS query through a configured transport")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Tag of the transport to query; defaults to the first configured one
    #[arg(short = 't', long)]
    transport: Option<String>,

    /// Record type to ask for
    #[arg(long = "type", default_value = "A")]
    record_type: String,

    /// Domain to resolve
    domain: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            log_level: cli.log_level.clone(),
        },
    )?;

    bootstrap::init_logging(&config.logging);

    info!("Starting dns-transport v{}", env!("CARGO_PKG_VERSION"));

    let services = di::TransportServices::new(&config).await?;

    let transport = match cli.transport.as_deref() {
        Some(tag) => services.get(tag),
        None => services.transports.first(),
    };
    let Some(transport) = transport else {
        services.shutdown();
        anyhow::bail!("No matching transport configured");
    };

    let query = build_query(&cli.domain, &cli.record_type)?;
    let result = transport.exchange(&CancellationToken::new(), &query).await;

    services.shutdown();

    match result {
        Ok(response) => {
            println!(
                ";; id={} rcode={:?} answers={}",
                response.id(),
                response.response_code(),
                response.answers().len()
            );
            for record in response.answers() {
                println!("{}", record);
            }
            Ok(())
        }
        Err(e) => {
            error!(transport = %transport.name(), error = %e, "Exchange failed");
            Err(e.into())
        }
    }
}

fn build_query(domain: &str, record_type: &str) -> anyhow::Result<Message> {
    let name = Name::from_str(domain)
        .map_err(|e| anyhow::anyhow!("Invalid domain '{}': {}", domain, e))?;
    let record_type = RecordType::from_str(&record_type.to_uppercase())
        .map_err(|e| anyhow::anyhow!("Invalid record type '{}': {}", record_type, e))?;

    let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(name, record_type));
    Ok(message)
}
