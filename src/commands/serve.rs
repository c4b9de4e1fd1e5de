//! `taskdesk serve`: run the REST server.

use crate::{
    db::db::Db,
    libs::config::Config,
    server::{create_router, AppState, Server},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
    /// Database file, overrides the configured location
    #[arg(long)]
    db: Option<String>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut server_config = Config::read()?.server();
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }
    if args.db.is_some() {
        server_config.db_path = args.db;
    }

    let db = open_db(server_config.db_path.as_deref())?;
    tracing::info!(addr = %server_config.addr(), "starting task server");

    let router = create_router(AppState::new(db));
    Server::new(server_config).run(router).await
}

/// Opens the server database at `path`, or in the data directory.
pub fn open_db(path: Option<&str>) -> Result<Db> {
    match path {
        Some(path) => Db::open(path),
        None => Db::new(),
    }
}
