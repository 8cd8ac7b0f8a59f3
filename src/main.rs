use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::output;

fn main() {
    let cli = Cli::parse();

    match jot::tui::run(cli.items) {
        Ok(list) => {
            if let Err(e) = output::print_exit_dump(&list, cli.json) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
