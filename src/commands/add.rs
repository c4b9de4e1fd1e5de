//! `taskdesk add`: create a task.

use super::tasks::open_fetch;
use crate::{libs::view::render, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What the task is about
    #[arg(required = true)]
    description: String,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut fetch = open_fetch()?;
    if let Some(task) = fetch.create(&args.description).await {
        msg_print!(render(&[task], false));
    }
    Ok(())
}
