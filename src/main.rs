use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use upgrade_policy::config;
use upgrade_policy::policy::{Policy, PolicyType};
use upgrade_policy::report::DecisionReport;
use upgrade_policy::ui;

#[derive(clap::Parser)]
#[command(
    name = "upgrade-policy",
    version,
    about = "Decide whether a new version should replace the running one"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Image name used to pick a per-image policy")]
    image: Option<String>,

    #[arg(
        short,
        long,
        help = "Policy shorthand overriding the configuration (e.g. patch, force, glob:1.*)"
    )]
    policy: Option<String>,

    #[arg(long, help = "Print the decision as JSON")]
    json: bool,

    #[arg(long, help = "Show the registered policy type names and exit")]
    list: bool,

    #[arg(help = "Currently running version", required_unless_present = "list")]
    current: Option<String>,

    #[arg(help = "Candidate version", required_unless_present = "list")]
    new: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.list {
        return list_policy_types();
    }

    let policy = match args.policy.as_deref() {
        Some(shorthand) => shorthand
            .parse::<Policy>()
            .with_context(|| format!("invalid --policy '{}'", shorthand))?,
        None => config::load_config(args.config.as_deref())
            .context("failed to load configuration")?
            .policy_for(args.image.as_deref())?,
    };
    debug!(policy = %policy, image = ?args.image, "resolved policy");

    // clap guarantees both operands when --list is absent
    let current = args.current.unwrap_or_default();
    let new = args.new.unwrap_or_default();

    let report = DecisionReport::evaluate(&policy, &current, &new)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        ui::display_decision(&report);
    }

    Ok(())
}

fn list_policy_types() -> Result<()> {
    let names = PolicyType::ALL
        .iter()
        .map(|t| t.encode())
        .collect::<upgrade_policy::Result<Vec<_>>>()?;
    ui::display_policy_types(&names);
    Ok(())
}
