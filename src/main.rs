use std::io;
use std::path::PathBuf;

use clap::Parser;

use vfsh::seed;
use vfsh::Shell;

#[derive(Parser)]
#[command(name = "vfsh", about = "In-memory virtual filesystem with an interactive shell")]
struct Cli {
    /// JSON seed file describing the initial tree (default: the built-in
    /// sample hierarchy)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the shell.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level)),
        )
        .init();

    let seed_nodes = match cli.seed {
        Some(path) => match seed::load(&path) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::error!("Failed to load seed {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => seed::sample(),
    };

    let tree = match seed::build(&seed_nodes) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("Failed to build seed tree: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = Shell::new(tree);

    tracing::info!("vfsh ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell.run(stdin.lock(), stdout.lock()) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
