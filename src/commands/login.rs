use crate::{
    libs::{messages::Message, session::Session},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Bearer token issued by `taskdesk token`
    #[arg(required = true)]
    token: String,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let session = Session::new(Some(login_args.token));
    if !session.is_logged_in() {
        msg_bail_anyhow!(Message::EmptyToken);
    }
    session.save()?;

    msg_success!(Message::LoggedIn);
    Ok(())
}
