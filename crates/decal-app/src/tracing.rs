use anyhow::bail;
use decal_shared::telemetry;

const APP_NAME: &str = "decal_app";

pub fn init(cli: &super::cli::Cli) -> anyhow::Result<()> {
    fn init_to_file() -> anyhow::Result<()> {
        let (file, filename) = telemetry::create_trace_file(APP_NAME)?;
        let subscriber = telemetry::get_subscriber(APP_NAME.into(), "info", file);

        // Start logging to file
        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {filename:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out {
        // Log to file
        match init_to_file() {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    // Log to the terminal, stderr keeps stdout free for command output
    match tracing_subscriber::fmt().with_writer(std::io::stderr).try_init() {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
