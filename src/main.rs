use anyhow::Result;
use clap::Parser;

use semverbump::{config, ui, IncrementKind};

#[derive(clap::Parser)]
#[command(
    name = "semverbump",
    version,
    about = "Compute the next semantic version tag"
)]
struct Args {
    #[arg(
        default_value = "",
        help = "Current version tag (e.g. v1.2.3, 1.2, v1); empty means no release yet"
    )]
    current: String,

    #[arg(short, long, help = "Increment kind: major, minor or patch")]
    kind: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print only the new version")]
    quiet: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    ui::set_color(config.output.color && !args.no_color);

    let kind = match args.kind.as_deref() {
        Some(kind) => match IncrementKind::parse(kind) {
            Ok(kind) => kind,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => config.bump.default_kind,
    };

    let next = match semverbump::bump_version(&args.current, kind) {
        Ok(next) => next,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.quiet {
        println!("{}", next);
    } else {
        ui::display_proposed_version(&args.current, &next);
        ui::display_success(&format!("{} bump -> {}", kind, next));
    }

    Ok(())
}
