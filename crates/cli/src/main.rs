use stockledger_cli::{DemoConfig, demo};

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(path = %config.path.display(), "starting inventory demo");

    let mut out = std::io::stdout().lock();
    demo::run(&config, &mut out)
}
