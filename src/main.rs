use clap::{Parser, Subcommand};
use drawer_core::{Detent, DrawerLayout, DrawerState, Point, Position, Size};
use std::io::Write;
use std::os::unix::net::UnixStream;

const SOCKET_PATH: &str = "/tmp/drawer.sock";

#[derive(Parser, Debug)]
#[command(name = "drawerctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Move an in-progress drag to a translation from its start point
    Drag {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Release the drag with a predicted final translation
    End {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Change the container size
    Resize { width: f64, height: f64 },
    /// Pin the drawer to another edge
    Position { position: Position },
    /// Ask the drawer to reload its configuration
    Reload,
    /// Compute traits locally without a running drawer
    Probe(ProbeArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ProbeArgs {
    #[arg(short, long, default_value = "bottom")]
    position: Position,

    /// Settled detent ratio
    #[arg(short, long, default_value_t = 0.05)]
    detent: f64,

    /// Live ratio to render (defaults to the settled detent)
    #[arg(short, long, allow_negative_numbers = true)]
    ratio: Option<f64>,

    #[arg(long, default_value_t = 390.0)]
    width: f64,

    #[arg(long, default_value_t = 844.0)]
    height: f64,

    /// Snap candidates, in tie-break order
    #[arg(long, value_delimiter = ',')]
    detents: Vec<f64>,

    /// Detents at which content is interactive
    #[arg(long, value_delimiter = ',')]
    interactive: Vec<f64>,

    /// Release a drag with this end translation after printing traits
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    release: Option<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Drag { x, y } => send_command(&format!("drag {} {}", x, y)),
        Commands::End { x, y } => send_command(&format!("end {} {}", x, y)),
        Commands::Resize { width, height } => {
            send_command(&format!("resize {} {}", width, height))
        }
        Commands::Position { position } => send_command(&format!("position {}", position)),
        Commands::Reload => send_command("reload"),
        Commands::Probe(args) => {
            for line in probe(&args) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn probe(args: &ProbeArgs) -> Vec<String> {
    let layout = DrawerLayout::new(
        args.position,
        args.detents.iter().copied().map(Detent::new),
        args.interactive.iter().copied().map(Detent::new),
    );
    let settled = DrawerState::new(Detent::new(args.detent));
    let mut state = args
        .ratio
        .map_or(settled, |ratio| settled.presented_at(ratio));
    let container = Size::new(args.width, args.height);

    let traits = layout.traits(&state, container);
    let mut lines = vec![traits.to_string()];

    if let Some([x, y]) = args.release.as_deref() {
        let settle = traits.on_drag_end(&mut state, Point::new(*x, *y));
        log::debug!("released from ratio {:.3}", settle.from);
        lines.push(format!("released -> detent {}", settle.detent));
        lines.push(layout.traits(&state, container).to_string());
    }

    lines
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to drawer at {}: {}. Is drawer running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}
