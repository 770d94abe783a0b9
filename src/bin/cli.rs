//! fetchwire CLI Client
//!
//! Connects to a file transfer server and decodes its responses.

use clap::Parser;
use fetchwire::network::Client;
use fetchwire::{output, Config, Status};
use tracing_subscriber::{fmt, EnvFilter};

/// fetchwire CLI
#[derive(Parser, Debug)]
#[command(name = "fetchwire-cli")]
#[command(about = "Decode responses from a file transfer server")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7070")]
    server: String,

    /// Number of responses to read before exiting
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Directory where retrieved files are saved
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// Socket read timeout in milliseconds (0 disables the deadline)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// Maximum payload size in bytes a response may advertise
    #[arg(long, default_value = "16777216")]
    max_payload: u32,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fetchwire=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(args.server.as_str())
        .read_timeout_ms(args.read_timeout_ms)
        .max_payload_size(args.max_payload)
        .output_dir(args.output_dir.as_str())
        .build();

    let mut client = match Client::connect(config.clone()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    tracing::info!("fetchwire v{} connected to {}", fetchwire::VERSION, client.peer_addr());

    for _ in 0..args.count {
        let message = match client.fetch_response() {
            Ok(m) => m,
            Err(e) => {
                tracing::error!("Failed to read response: {}", e);
                std::process::exit(1);
            }
        };

        println!("{}", message.summary());

        // Persist only fully reassembled file payloads; rendering above never
        // touches disk.
        if message.status == Status::FilesRetrieved {
            match output::write_payload(&config.output_dir, &message.name_text(), &message.payload)
            {
                Ok(path) => println!("Data written to file {}", path.display()),
                Err(e) => {
                    tracing::error!("Failed to save {}: {}", message.name_text(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
