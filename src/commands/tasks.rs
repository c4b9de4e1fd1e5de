//! `taskdesk tasks`: the list view.

use crate::{
    api::HttpTaskApi,
    libs::{
        config::Config,
        fetch::Fetch,
        messages::Message,
        session::Session,
        task::TaskFilter,
        view::TaskListView,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Which tasks to show: all, completed or incomplete
    #[arg(short, long, default_value_t = TaskFilter::All)]
    pub filter: TaskFilter,
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let mut view = open_view(args.filter)?;
    view.mount().await;
    msg_print!(view.render());
    Ok(())
}

/// Session and HTTP api for the configured server.
pub fn client() -> Result<(Session, HttpTaskApi)> {
    let session = Session::read()?;
    let api = HttpTaskApi::new(&Config::read()?.api_url(), session.clone());
    Ok((session, api))
}

/// A list view over the configured server, not yet mounted.
///
/// An anonymous view never sends requests, so the missing login is reported
/// here instead.
pub fn open_view(filter: TaskFilter) -> Result<TaskListView<HttpTaskApi>> {
    let (session, api) = client()?;
    if !session.is_logged_in() {
        msg_warning!(Message::NotLoggedIn);
    }
    Ok(TaskListView::with_filter(session, api, filter))
}

/// A bare request runner, for the commands that stand in for other pages.
pub fn open_fetch() -> Result<Fetch<HttpTaskApi>> {
    let (_, api) = client()?;
    Ok(Fetch::new(api))
}
