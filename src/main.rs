use clap::Command;
use lyricstats::configuration::{create_config, ConfigFolder};
use lyricstats::startup::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Command::new("lyricstats")
        .about("🎤 Word-frequency analysis of song lyrics via the Genius API 🎤")
        .subcommand(
            Command::new("run")
                .about("🚀 Fetch lyrics for the configured artists and analyze them"),
        )
        .subcommand(
            Command::new("config").about("🛠️ Create or update configuration file for lyricstats"),
        )
        .get_matches();

    let cfg_folder = ConfigFolder::new();

    match args.subcommand() {
        Some(("run", _)) => {
            println!("\x1b[1m\x1b[34mStarting lyric collection and analysis...\x1b[0m");
            run(cfg_folder).await
        }
        Some(("config", _)) => {
            println!("\x1b[1m\x1b[34mConfiguring lyricstats...\x1b[0m");
            create_config(cfg_folder)
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("\x1b[1m\x1b[31mInvalid command!\x1b[0m\n");
    println!("📖 Available Commands:");
    println!("  \x1b[1m\x1b[32mlyricstats run\x1b[0m    - 🚀 Fetch and analyze lyrics");
    println!("  \x1b[1m\x1b[32mlyricstats config\x1b[0m - 🛠️  Create or update configuration file");
    println!("\x1b[33mEdit ~/.lyricstats/config.yaml before the first run.\x1b[0m\n");
}
