//! Report listing command.

use anyhow::Result;
use clap::Args;
use disclo_cninfo::CninfoClient;
use disclo_core::announcement;
use disclo_core::config::DiscloConfig;

use crate::output;

#[derive(Args)]
pub struct ReportsArgs {
    /// Stock code (defaults to the configured default, 000001)
    pub stock_code: Option<String>,

    /// Only show titles containing this keyword (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ReportsArgs, config: &DiscloConfig) -> Result<()> {
    let client = CninfoClient::new(&config.cninfo);
    let stock_code = announcement::stock_code_or_default(
        args.stock_code.as_deref(),
        &config.reports.default_stock_code,
    );

    let reports = announcement::list_announcements(&client, stock_code, args.keyword.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        output::print_announcements_table(stock_code, &reports);
    }

    Ok(())
}
