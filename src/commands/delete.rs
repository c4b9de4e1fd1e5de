//! `taskdesk delete`: remove a task from the list view.

use super::tasks::open_view;
use crate::{libs::task::TaskFilter, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task identifier
    #[arg(required = true)]
    id: String,
    /// View the task is deleted from
    #[arg(short, long, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut view = open_view(args.filter)?;
    view.mount().await;
    view.delete(&args.id).await;

    msg_print!(view.render());
    Ok(())
}
