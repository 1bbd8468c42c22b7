use clap::{Parser, Subcommand};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and keep the tokens for later commands
    Login {
        username: String,
        #[arg(long, env = "DECAL_PASSWORD", hide_env_values = true)]
        password: SecretString,
    },
    /// Log out and forget the stored tokens
    Logout,
    /// Show the logged in account
    Whoami,
    Customers,
    Orders,
    Services,
    /// Show the payments of one order
    Payments { order_id: u64 },
}
