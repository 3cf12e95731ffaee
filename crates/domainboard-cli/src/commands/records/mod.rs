//! Record subcommand implementations.

mod add;
mod delete;
mod list;
mod show;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct RecordsCommand {
    #[command(subcommand)]
    pub command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RecordsSubcommand {
    /// List records, optionally filtered and paged
    List(list::ListArgs),

    /// Add a record from "domain" or "domain:ip"
    Add(add::AddArgs),

    /// Change fields of a record
    Update(update::UpdateArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),

    /// Show a single record
    Show(show::ShowArgs),
}

pub async fn handle(cmd: RecordsCommand) -> Result<()> {
    match cmd.command {
        RecordsSubcommand::List(args) => list::run(args).await,
        RecordsSubcommand::Add(args) => add::run(args).await,
        RecordsSubcommand::Update(args) => update::run(args).await,
        RecordsSubcommand::Delete(args) => delete::run(args).await,
        RecordsSubcommand::Show(args) => show::run(args).await,
    }
}
