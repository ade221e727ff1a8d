//! Upload server command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use panelgen::config::PanelgenConfig;

use crate::load_config;

/// Run `POST /generate`
#[derive(Debug, Clone, Args)]
pub struct ServeCommand {
    /// Bind address (default: `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (default: `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Config file replacing ./panelgen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ServeCommand {
    /// Execute the command, blocking until the server stops
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot start or the server fails
    pub fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;

        println!(
            "{} {} {}",
            style("Serving").green().bold(),
            style(format!("http://{}/generate", config.server.bind_address()))
                .cyan()
                .underlined(),
            style(format!("(output: {})", config.generator.output_dir.display())).dim()
        );

        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        runtime
            .block_on(panelgen::server::serve(config))
            .context("Upload server failed")
    }

    /// Configuration with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn resolve_config(&self) -> Result<PanelgenConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}
