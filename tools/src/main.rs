use std::error::Error;
use std::process;

use clap::Parser;
use log::{error, info};

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    Game(commands::game::Config),
    Shapes(commands::shapes::Config),
    Contacts(commands::contacts::Config),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let command = cli.command;
    info!("run {:?}", command);

    let result: Result<(), Box<dyn Error>> = match command {
        Commands::Game(cfg) => commands::game::command(cfg).map_err(Into::into),
        Commands::Shapes(cfg) => commands::shapes::command(cfg).map_err(Into::into),
        Commands::Contacts(cfg) => commands::contacts::command(cfg).map_err(Into::into),
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
