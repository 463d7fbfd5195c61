use clap::Parser;
use clap::error::ErrorKind;

mod commands;
mod context;
mod format;
mod output;
mod version;

/// tagcheck - does this tag already exist?
///
/// Asks the GitHub API whether a tag exists in $GITHUB_REPOSITORY and prints
/// the answer as the `exists` step output.
#[derive(Parser, Debug)]
#[command(name = "tagcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tag name to look up (e.g. v1.2.3)
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    tag: String,

    /// Base URL of the GitHub REST API (overrides GITHUB_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (default: wait for the answer)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, default_value = "auto")]
    color: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => e.exit(),
            ErrorKind::DisplayVersion => {
                version::print_version();
                std::process::exit(0);
            }
            _ => {
                format::error(format::ColorChoice::Auto, e.render().to_string().trim_end());
                std::process::exit(1);
            }
        },
    };

    let color = format::ColorChoice::from(cli.color.as_str());
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    context::init_logging(color, verbosity);

    let ctx = match context::AppContext::build(color, cli.api_url.as_deref(), cli.timeout) {
        Ok(ctx) => ctx,
        Err(e) => {
            format::error(color, &e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::check::handle_check(&ctx, &cli.tag) {
        format::error(ctx.color, &e.to_string());
        std::process::exit(1);
    }
}
