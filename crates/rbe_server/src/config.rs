use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rbe_server")]
#[command(about = "HTTP API for the RBE sandbox scenario model")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "RBE_BIND", default_value = "0.0.0.0:3001")]
    pub bind: SocketAddr,

    /// JSON file holding the visit count
    #[arg(long, env = "RBE_COUNTER_FILE", default_value = "visitor-count.json")]
    pub counter_file: PathBuf,

    /// Keep the visit count in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, env = "RBE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
