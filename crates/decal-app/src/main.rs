#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Context as _;
use clap::Parser;
use decal_app::{
    cli::{Cli, Command},
    configuration::get_configuration,
    pages::{OrderFilter, ScreenSnapshot},
    DecalApp,
};
use decal_client_core::Client;
use std::{fmt::Debug, process::ExitCode};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    if let Err(e) = decal_app::tracing::init(&args) {
        eprintln!("Failed to start tracing: {e}");
    }

    let configuration = get_configuration().context("failed to read configuration")?;
    let app = DecalApp::from_configuration(&configuration)?;
    app.initialize().await;

    Ok(if run(&app, args.command).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Returns `false` if the command ended with an error
async fn run(app: &DecalApp<Client>, command: Command) -> bool {
    match command {
        Command::Login { username, password } => {
            let screen = app.login_screen();
            screen.submit(&username, password).await;
            print_snapshot(&screen.state.snapshot())
        }
        Command::Logout => {
            app.profile_screen().logout().await;
            println!("Logged out");
            true
        }
        Command::Whoami => {
            let screen = app.profile_screen();
            screen.load();
            print_snapshot(&screen.state.snapshot())
        }
        Command::Customers => {
            let screen = app.customer_list_screen();
            screen.load().await;
            print_snapshot(&screen.state.snapshot())
        }
        Command::Orders => {
            let screen = app.order_list_screen();
            screen.load(OrderFilter::All).await;
            print_snapshot(&screen.state.snapshot())
        }
        Command::Services => {
            let screen = app.service_list_screen();
            screen.load().await;
            print_snapshot(&screen.state.snapshot())
        }
        Command::Payments { order_id } => {
            let screen = app.payment_screen();
            screen.load(order_id.into()).await;
            print_snapshot(&screen.state.snapshot())
        }
    }
}

fn print_snapshot<T: Debug>(snapshot: &ScreenSnapshot<T>) -> bool {
    match (&snapshot.error, &snapshot.data) {
        (Some(error), _) => {
            eprintln!("{error}");
            false
        }
        (None, Some(data)) => {
            println!("{data:#?}");
            true
        }
        (None, None) => {
            println!("Nothing to show");
            true
        }
    }
}
