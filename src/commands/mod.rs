pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod login;
pub mod logout;
pub mod serve;
pub mod tasks;
pub mod toggle;
pub mod token;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the task server")]
    Serve(serve::ServeArgs),
    #[command(about = "Issue or revoke a bearer token", arg_required_else_help = true)]
    Token(token::TokenArgs),
    #[command(about = "Save a bearer token for the client", arg_required_else_help = true)]
    Login(login::LoginArgs),
    #[command(about = "Forget the saved bearer token")]
    Logout,
    #[command(about = "List your tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Create task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Change a task's description", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task done or not done", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Token(args) => token::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}
