use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Command-line and environment configuration for the static host.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve the built AEROSPACE landing page", long_about = None)]
pub struct ServerConfig {
    /// Build output directory, relative to the working directory
    #[arg(long, env = "AERO_DIST", default_value = "dist/public")]
    pub dist: PathBuf,

    /// Interface to listen on
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
