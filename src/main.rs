use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::debug;

use ip_country_filter::config::DEFAULT_INPUT;
use ip_country_filter::{run_advanced, CountryCode, FilterMode, Locale, Messages, RunConfig, Summary};

/// Advanced country-based filtering for IP reputation data.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// ISO 3166-1 alpha-2 country code to filter by (e.g. ES for Spain)
    #[arg(long)]
    country: String,
    /// Which field(s) to match: ip_geo, ip_whois.country, or either
    #[arg(long, value_enum, default_value = "combined")]
    filter_mode: FilterMode,
    /// Path to the input JSON feed
    #[arg(long, env = "IPCF_INPUT", default_value = DEFAULT_INPUT)]
    input_file: PathBuf,
    /// Path to the output JSON file (generated under feeds/ when omitted)
    #[arg(long)]
    output_file: Option<PathBuf>,
    /// Language of the messages
    #[arg(long, value_enum, env = "IPCF_LANG", default_value = "en")]
    lang: Locale,
}

fn run(args: &Args) -> ip_country_filter::Result<Summary> {
    let country = CountryCode::parse(&args.country)?;
    let cfg = RunConfig::new(country)
        .with_mode(args.filter_mode)
        .with_input(&args.input_file)
        .with_output(args.output_file.clone());
    run_advanced(&cfg, &Local::now())
}

fn main() -> ExitCode {
    ip_country_filter::init_logging();

    // Parse CLI arguments.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // No language chosen yet.
            println!("{}", Messages::default().disclaimer());
            e.exit()
        }
    };
    let msgs = Messages::for_locale(args.lang);
    println!("{}", msgs.disclaimer());

    match run(&args) {
        Ok(summary) => {
            println!("{}", msgs.total(summary.total));
            println!("{}", msgs.matched(summary.matched));
            println!("{}", msgs.saved(&summary.output));
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("{}", msgs.error(&e));
            ExitCode::FAILURE
        }
    }
}
