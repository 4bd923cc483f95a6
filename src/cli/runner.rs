use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use openbook::api::process_roster;
use openbook::mail::SmtpMailer;
use openbook::typeset::LatexToolchain;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let mut config = args.into_config();
    if config.interactive() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        config.resolve_overrides(stdin.lock(), stdout.lock())?;
    }

    info!("Starting openbook...");
    info!("Roster: {:?}", config.input_file);
    if config.dry_run {
        info!("Test only: no emails will be sent");
    }

    let typesetter = LatexToolchain;
    let mailer = SmtpMailer::new(&config.smtp_server);
    let report = process_roster(&config, &typesetter, &mailer)?;

    info!("Batch complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    info!("Stopping openbook...");

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
