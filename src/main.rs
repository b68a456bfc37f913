use cooldown_chess::console::console_top::run_stdio_loop;
use cooldown_chess::match_state::match_config::MatchConfig;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    // Logs go to stderr so stdout stays a clean command transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = MatchConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            config.shuffle_seed = args.next().and_then(|s| s.parse::<u64>().ok());
        }
    }

    run_stdio_loop(config)
}
