use clap::Parser;
use drawer::config;
use drawer::host::Host;
use drawer::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "drawer", version, about, long_about = None)]
struct Cli {
    /// Write the default config file (if missing), print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let frame_interval = config.settle.frame_interval();
    let mut host = Host::new(config);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, frame_interval);

    log::info!(
        "Drawer ready at {} ({} container)",
        host.layout().position,
        host.container()
    );
    host.render();

    while let Ok(event) = rx.recv_blocking() {
        if host.update(event) {
            host.render();
        }
    }

    Ok(())
}
