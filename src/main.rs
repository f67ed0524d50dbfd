use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stampnorm",
    version,
    about = "Print broadcast benchmark timestamps as offsets from the Before sample"
)]
struct Cli {
    /// Result file: label, `Before: <n>`, one `<peer>: <n>` per peer, `After: <n>`.
    input_file: PathBuf,

    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(input = %cli.input_file.display(), "stampnorm debug log started");
    }

    let stdout = std::io::stdout();
    stampnorm::run(&cli.input_file, &mut stdout.lock())
}
