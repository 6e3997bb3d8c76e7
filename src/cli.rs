use clap::{Args, Parser, Subcommand};

use crate::groups::types::GroupListParams;

#[derive(Parser, Debug)]
#[command(
    name = "groupscout",
    version,
    about = "Group search with Simplified/Traditional Chinese variant expansion"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search monitored groups, querying every script variant of --name
    Groups(GroupsArgs),
    /// Show the script variants and search suggestions for a keyword
    Variants {
        /// Keyword to expand
        keyword: String,
    },
}

#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Group name keyword
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub account_id: Option<String>,
    #[arg(long)]
    pub chat_id: Option<String>,
    #[arg(long)]
    pub group_link: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
    /// Comma-separated tag ids
    #[arg(long)]
    pub tag_ids: Option<String>,
    /// Print the merged response envelope as JSON
    #[arg(long)]
    pub json: bool,
    /// Console API root (overrides GROUPSCOUT_API_BASE)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl GroupsArgs {
    pub fn params(&self) -> GroupListParams {
        GroupListParams {
            account_id: self.account_id.clone(),
            group_name: self.name.clone(),
            chat_id: self.chat_id.clone(),
            group_link: self.group_link.clone(),
            remark: self.remark.clone(),
            tag_ids: self.tag_ids.clone(),
        }
    }
}
