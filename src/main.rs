use clap::{Parser, ValueEnum};
use fleet_layout::{
    board_size, init_logging, print_board, standard_fleet, Board, BoardState, FleetPlacer,
    PlacerConfig, Sampling, DEFAULT_DIMENSION, DEFAULT_MAX_ATTEMPTS, MAX_DIMENSION,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Generate a random fleet layout and print the board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board dimension; the board side is twice this value.
    #[arg(long, default_value_t = DEFAULT_DIMENSION as u8,
          value_parser = clap::value_parser!(u8).range(1..=MAX_DIMENSION as i64))]
    dimension: u8,
    /// Explicit board side, overriding the one derived from --dimension.
    #[arg(long)]
    size: Option<usize>,
    /// Comma-separated ship lengths (default: the standard fleet for --dimension).
    #[arg(long, value_delimiter = ',')]
    ships: Option<Vec<usize>>,
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Rejected draws allowed per ship.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long, value_enum, default_value_t = SamplingArg::Uniform)]
    sampling: SamplingArg,
    /// Keep the ships that were placed when the fleet does not fit.
    #[arg(long)]
    partial: bool,
    /// Print the layout as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SamplingArg {
    Uniform,
    HorizontalFirst,
}

impl From<SamplingArg> for Sampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Uniform => Sampling::Uniform,
            SamplingArg::HorizontalFirst => Sampling::HorizontalFirst,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let dimension = cli.dimension as usize;
    let size = cli.size.unwrap_or_else(|| board_size(dimension));
    let ships = cli.ships.unwrap_or_else(|| standard_fleet(dimension));

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {} (layout will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = PlacerConfig {
        max_attempts: cli.max_attempts,
        sampling: cli.sampling.into(),
    };
    let mut placer = FleetPlacer::with_config(rng, config);
    log::debug!(
        "sampling {:?}, up to {} attempts per ship",
        placer.config().sampling,
        placer.config().max_attempts
    );
    let mut board = Board::new(size).map_err(|e| anyhow::anyhow!(e))?;

    log::info!("placing {} ships on a {}x{} board", ships.len(), size, size);
    let placements = if cli.partial {
        let (placed, stopped) = placer.place_until_stuck(&mut board, &ships);
        if let Some(e) = stopped {
            log::warn!("{}; keeping partial layout", e);
        }
        placed
    } else {
        placer
            .random_layout(&mut board, &ships)
            .map_err(|e| anyhow::anyhow!(e))?
    };

    if cli.json {
        let out = json!({
            "size": size,
            "placements": placements,
            "board": BoardState::from(&board),
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        print_board(&board);
        println!(
            "{} ships, {} occupied cells",
            placements.len(),
            board.occupied_count()
        );
    }
    Ok(())
}
