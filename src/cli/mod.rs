// CLI module for shoplist
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// shoplist - in-memory shopping-list CRUD service
#[derive(Parser, Debug)]
#[command(name = "shoplist", version, about, long_about = None)]
pub struct Args {
    /// Config file to load instead of ~/.shoplist/config.toml
    #[arg(long, short = 'c', env = "SHOPLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line overrides, which take precedence over every other source
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
