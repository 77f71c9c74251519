//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use disclo_cninfo::CninfoClient;
use disclo_core::config::DiscloConfig;
use disclo_web::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long, env = "DISCLO_PORT")]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long, env = "DISCLO_HOST")]
    pub host: Option<String>,

    /// Accepted password; repeat or comma-separate to allow several (replaces config list)
    #[arg(long = "password", env = "DISCLO_PASSWORDS", value_delimiter = ',')]
    pub passwords: Vec<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to logs/disclo.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(mut config: DiscloConfig, args: &ServeArgs) -> DiscloConfig {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if !args.passwords.is_empty() {
        config.auth.passwords = args.passwords.clone();
    }
    config
}

pub async fn execute(args: ServeArgs, config: DiscloConfig) -> Result<()> {
    let config = apply_overrides(config, &args);

    let source = Arc::new(CninfoClient::new(&config.cninfo));
    let state = AppState::from_config(&config, source)?;
    tracing::info!(credentials = state.credentials.len(), "Access allowlist loaded");

    let host = &config.server.host;
    let port = config.server.port;

    println!();
    println!("  {} {}", "Disclo".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}      http://{}:{}", "Index".green(), host, port);
    println!("  {}        http://{}:{}/api", "API".green(), host, port);
    println!("  {}   {}", "Source".green(), config.cninfo.base_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    disclo_web::run_server(state, host, port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ServeArgs {
        ServeArgs {
            port: None,
            host: None,
            passwords: Vec::new(),
            log: false,
            log_file: None,
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = DiscloConfig::default();
        config.auth.passwords = vec!["friday_A66".into()];
        let merged = apply_overrides(config, &args());
        assert_eq!(merged.server.port, 8000);
        assert_eq!(merged.auth.passwords, vec!["friday_A66".to_string()]);
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = DiscloConfig::default();
        config.auth.passwords = vec!["old".into()];
        let args = ServeArgs {
            port: Some(9000),
            host: Some("127.0.0.1".into()),
            passwords: vec!["shares_B88".into(), "report_C99".into()],
            ..args()
        };
        let merged = apply_overrides(config, &args);
        assert_eq!(merged.server.port, 9000);
        assert_eq!(merged.server.host, "127.0.0.1");
        assert_eq!(merged.auth.passwords.len(), 2);
        assert_eq!(merged.credentials().unwrap().len(), 2);
    }
}
