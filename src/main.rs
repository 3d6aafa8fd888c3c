use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vc_env::config::{Config, LOG_ENV};
use vc_env::version::cache::ReleaseCache;
use vc_env::version::releases::{latest_remote_version, list_remote_versions};
use vc_env::version::source::ReleaseSource;
use vc_env::version::sources::GitHubReleaseSource;

#[derive(Parser)]
#[command(name = "vc-env")]
#[command(version, about = "Version manager for the vcluster CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available vcluster versions, newest first
    ListRemote {
        /// Include pre-release versions (alpha, beta, rc)
        #[arg(long)]
        prerelease: bool,
    },
    /// Print the newest available vcluster version
    Latest {
        /// Include pre-release versions (alpha, beta, rc)
        #[arg(long, conflicts_with = "direct")]
        prerelease: bool,
        /// Ask GitHub for the latest stable release directly, bypassing the cache
        #[arg(long)]
        direct: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let source = GitHubReleaseSource::default();
    let cache = ReleaseCache::from_config(&config);

    match command {
        Command::ListRemote { prerelease } => {
            for version in list_remote_versions(&source, &cache, prerelease).await {
                println!("{version}");
            }
        }
        Command::Latest { direct: true, .. } => {
            let version = source
                .latest_release()
                .await
                .context("failed to fetch latest version")?;
            println!("{version}");
        }
        Command::Latest { prerelease, .. } => {
            let version = latest_remote_version(&source, &cache, prerelease)
                .await
                .context("no versions found")?;
            println!("{version}");
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();
    let config = Config::from_env();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}
