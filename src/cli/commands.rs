use clap::Parser;

#[derive(Parser)]
#[command(name = "jot", about = concat!("[·] jot v", env!("CARGO_PKG_VERSION"), " - a todo list that lives and dies with your terminal"), version)]
pub struct Cli {
    /// Items to put on the list before the UI starts
    pub items: Vec<String>,

    /// On quit, print the remaining visible items as JSON instead of bullets
    #[arg(long)]
    pub json: bool,
}
