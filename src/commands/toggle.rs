//! `taskdesk toggle`: flip a task's completion from the list view.

use super::tasks::open_view;
use crate::{
    libs::{messages::Message, task::TaskFilter},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task identifier
    #[arg(required = true)]
    id: String,
    /// View the task is toggled from
    #[arg(short, long, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let mut view = open_view(args.filter)?;
    if !view.load().await {
        return Ok(());
    }

    let Some(current) = view.find(&args.id).map(|t| t.completed) else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };
    view.toggle(&args.id, current).await;

    msg_print!(view.render());
    Ok(())
}
