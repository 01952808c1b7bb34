use clap::{CommandFactory, Parser};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pritunl-okta-sync")]
#[command(about = "Remove Pritunl users that are no longer active in Okta")]
#[command(version)]
struct Cli {
    /// Okta domain (i.e. https://companyname.okta.com)
    #[arg(long = "sso_domain")]
    sso_domain: String,

    /// Pritunl domain name (i.e. https://vpn.company.com)
    #[arg(long = "pritunl_domain")]
    pritunl_domain: String,

    /// Okta api key
    #[arg(long = "okta_api_key")]
    okta_api_key: String,

    /// Pritunl API key
    #[arg(long = "pritunl_api_key")]
    pritunl_api_key: String,

    /// Pritunl API secret
    #[arg(long = "pritunl_api_secret")]
    pritunl_api_secret: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show help when no arguments are given
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays readable
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = pritunl_okta_sync::Config::new(
        &cli.sso_domain,
        &cli.pritunl_domain,
        &cli.okta_api_key,
        &cli.pritunl_api_key,
        &cli.pritunl_api_secret,
    )?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = pritunl_okta_sync::run(&config, &mut stdin.lock(), &mut stdout.lock()).await?;
    info!("Finished: {:?}", outcome);

    Ok(())
}
