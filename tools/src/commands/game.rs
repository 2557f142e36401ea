use std::io;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use geometry::error::Result;
use geometry::game::Game;

#[derive(Debug, Parser)]
pub struct Config {
    /// Seed for the rectangle generator, random when omitted
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

pub fn command(cfg: Config) -> Result<()> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::new_random(&mut rng);
    let stdin = io::stdin();
    let attempts = game.play(stdin.lock(), io::stdout())?;
    info!("game finished in {} attempts", attempts);
    Ok(())
}
