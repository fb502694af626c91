use clap::Parser;
use dirindex::cli;
use dirindex::config::Variant;

#[derive(Parser)]
#[command(name = "gen-fas")]
#[command(about = "Generate Font Awesome index pages for the current directory tree")]
#[command(long_about = cli::LONG_ABOUT)]
#[command(version = cli::version_string())]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();
    cli::run(Variant::FontAwesome)
}
