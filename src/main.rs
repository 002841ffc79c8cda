use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use portable_patcher::commands::{apply, status};
use portable_patcher::patch::AppLayout;
use portable_patcher::utils::session::{Session, Tone};

#[derive(Parser)]
#[command(name = "portable-patcher")]
#[command(about = "Makes EchoAPI portable or reverts changes")]
#[command(version)]
struct Cli {
    /// Application root containing the `resources` folder
    /// (defaults to the directory of this executable)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Show the current patch state without changing anything
    #[arg(long)]
    status: bool,
}

fn default_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(default_root);
    let layout = AppLayout::new(&root);
    let mut session = Session::stdio();

    session.line(Tone::Bright, "\n=== EchoAPI Portable Patcher ===");
    session.line(Tone::Cyan, "Makes EchoAPI portable or reverts changes.\n");

    let result = if cli.status {
        status::run(&layout, &mut session).map(|_| ())
    } else {
        apply::run(&layout, &mut session).map(|_| ())
    };

    if let Err(e) = result {
        session.report_error(&e);
        process::exit(1);
    }
}
