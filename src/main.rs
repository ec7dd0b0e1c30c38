use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use torus_snake::game::{FoodPlacement, GameConfig};
use torus_snake::logging::init_file_logging;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a board whose edges wrap around")]
struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Number of food items on the board
    #[arg(long)]
    food: Option<usize>,

    /// Milliseconds between snake moves
    #[arg(long)]
    speed: Option<u64>,

    /// How new food chooses its cell
    #[arg(long, value_enum)]
    placement: Option<Placement>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Placement {
    /// Any cell, occupied or not
    Unchecked,
    /// Only free cells
    AvoidOccupied,
}

impl From<Placement> for FoodPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Unchecked => FoodPlacement::Unchecked,
            Placement::AvoidOccupied => FoodPlacement::AvoidOccupied,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(food) = self.food {
            config.food_max = food;
        }
        if let Some(speed) = self.speed {
            config.tick_ms = speed;
        }
        if let Some(placement) = self.placement {
            config.food_placement = placement.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::debug!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
