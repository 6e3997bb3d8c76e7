mod cli;
mod convert;
mod format;
mod groups;
mod markdown;
mod search;

pub const USER_AGENT: &str = concat!("groupscout/", env!("CARGO_PKG_VERSION"));

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use cli::{Cli, Command, GroupsArgs};
use convert::ZhConverter;
use groups::GroupsClient;
use search::{engine, variants};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Global HTTP client timeout; individual requests may set a shorter one.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("groupscout=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Groups(args) => run_groups(args).await,
        Command::Variants { keyword } => {
            let converter = ZhConverter;
            let expanded = variants::expand_variants(&keyword, &converter);
            let use_variants = variants::should_use_variant_search(&keyword, &converter);
            let suggestions = variants::suggestions(&keyword, &converter);
            print!(
                "{}",
                format::format_variants(&keyword, &expanded, use_variants, &suggestions)
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_groups(args: GroupsArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let client = GroupsClient::from_env(http, args.base_url.as_deref())?;
    let converter = ZhConverter;
    let params = args.params();

    info!(keyword = ?params.group_name, "searching groups");
    let outcome = engine::search_with_variants(&client, &converter, &params).await;
    let code = if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.into_envelope())?);
    } else {
        let keyword = params.group_name.as_deref().unwrap_or("");
        let stats = engine::search_stats(keyword, outcome.groups().len(), &converter);
        print!(
            "{}",
            format::format_outcome(&outcome, params.group_name.as_deref(), &stats)
        );
    }

    Ok(code)
}
