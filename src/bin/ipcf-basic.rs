use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::debug;

use ip_country_filter::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use ip_country_filter::{run_basic, CountryCode, Locale, Messages, RunConfig, Summary};

/// Keep the records whose ip_whois.country is the given country.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// ISO 3166-1 alpha-2 country code
    #[arg(long, default_value = "ES")]
    country: String,
    /// Path to the input JSON feed
    #[arg(long, env = "IPCF_INPUT", default_value = DEFAULT_INPUT)]
    input_file: PathBuf,
    /// Path to the output JSON file
    #[arg(long)]
    output_file: Option<PathBuf>,
    /// Directory for generated output names
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Language of the messages
    #[arg(long, value_enum, env = "IPCF_LANG", default_value = "en")]
    lang: Locale,
}

fn run(args: &Args) -> ip_country_filter::Result<Summary> {
    let country = CountryCode::parse(&args.country)?;
    let cfg = RunConfig::new(country)
        .with_input(&args.input_file)
        .with_output(args.output_file.clone())
        .with_output_dir(&args.output_dir);
    run_basic(&cfg, &Local::now())
}

fn main() -> ExitCode {
    ip_country_filter::init_logging();

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
            let code = summary.country;
            println!("{}", msgs.total(summary.total));
            println!("{}", msgs.ignored(summary.ignored()));
            println!("{}", msgs.found(summary.matched, code.as_str(), code.name()));
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
