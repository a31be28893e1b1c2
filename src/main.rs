use atlas::cli::commands::Cli;
use atlas::cli::handlers;
use atlas::io::workspace::open_workspace;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let workspace = match open_workspace(cli.data_dir.as_deref()) {
        Ok(ws) => ws,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI
            log::info!("starting TUI");
            if let Err(e) = atlas::tui::run(workspace) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            if let Err(e) = handlers::dispatch(command, &workspace) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
