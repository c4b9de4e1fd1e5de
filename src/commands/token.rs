//! `taskdesk token`: issue or revoke bearer tokens on the server side.

use super::serve::open_db;
use crate::{
    db::tokens::Tokens,
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// User the new token identifies
    #[arg(required_unless_present = "revoke", conflicts_with = "revoke")]
    user: Option<String>,
    /// Revoke this token instead of issuing one
    #[arg(long, value_name = "TOKEN")]
    revoke: Option<String>,
    /// Database file, overrides the configured location
    #[arg(long)]
    db: Option<String>,
}

pub fn cmd(args: TokenArgs) -> Result<()> {
    let db_path = args.db.or(Config::read()?.server().db_path);
    let db = open_db(db_path.as_deref())?;
    let tokens = Tokens::new(&db.conn);

    if let Some(token) = args.revoke {
        match tokens.revoke(&token)? {
            0 => msg_info!(Message::TokenUnknown),
            _ => msg_success!(Message::TokenRevoked),
        }
        return Ok(());
    }

    if let Some(user) = args.user {
        let token = tokens.issue(&user)?;
        msg_print!(Message::TokenIssued(user, token));
    }
    Ok(())
}
