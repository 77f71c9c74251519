//! Download link resolution command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use disclo_core::config::DiscloConfig;
use disclo_core::resolver;

#[derive(Args)]
pub struct ResolveArgs {
    /// Announcement link, detail-page URL or `announcementId=...` query
    pub url: String,
}

pub fn execute(args: ResolveArgs, config: &DiscloConfig) -> Result<()> {
    let hosts = config.resolver_hosts()?;
    let target = resolver::resolve(&args.url, &hosts)?;

    println!("{}", target.url);
    println!("{} {}", "rule:".dimmed(), target.rule.to_string().cyan());
    Ok(())
}
