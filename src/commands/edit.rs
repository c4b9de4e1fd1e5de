//! `taskdesk edit`: change a task's description.

use super::tasks::open_fetch;
use crate::{
    libs::{task::TaskPatch, view::render},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task identifier
    #[arg(required = true)]
    id: String,
    /// New description
    #[arg(required = true)]
    description: String,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let mut fetch = open_fetch()?;
    let Some(task) = fetch.get(&args.id).await else {
        return Ok(());
    };
    if task.description == args.description {
        msg_print!(render(&[task], false));
        return Ok(());
    }

    if let Some(task) = fetch.update(&task.id, &TaskPatch::description(&args.description)).await {
        msg_print!(render(&[task], false));
    }
    Ok(())
}
