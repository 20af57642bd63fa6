//! Terminal visualizer for incremental A*/Dijkstra grid search.

mod colors;
mod messages;
mod model;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pathgrid::{
    Algorithm, DEFAULT_DIMENSION, DEFAULT_SPEED, GridSnapshot, HeuristicKind, MAX_DIMENSION,
    MAX_SPEED, MIN_DIMENSION, Relaxation, Session, SessionConfig,
};
use pathgrid_term::{App, AppConfig, CrosstermDriver};
use rand::SeedableRng;
use rand::rngs::StdRng;

use model::PathModel;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid side length.
    #[arg(long, default_value_t = DEFAULT_DIMENSION,
          value_parser = clap::value_parser!(i32).range(i64::from(MIN_DIMENSION)..=i64::from(MAX_DIMENSION)))]
    dimension: i32,

    /// Step rate, 0 (slowest) to 100 (no delay).
    #[arg(long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_SPEED)))]
    speed: u8,

    /// Allow diagonal moves.
    #[arg(long)]
    diagonals: bool,

    /// Use the Euclidean heuristic instead of Manhattan.
    #[arg(long)]
    euclidean: bool,

    /// Ignore the heuristic (Dijkstra).
    #[arg(long)]
    uniform_cost: bool,

    /// Publish every step instead of one batch at the end.
    #[arg(long)]
    show_steps: bool,

    /// Relax neighbours on the heuristic test instead of path cost.
    #[arg(long)]
    legacy_relaxation: bool,

    /// Grid file used by save (S) and load (L). Loaded at startup if present.
    #[arg(long, default_value = "pathgrid.json")]
    snapshot: PathBuf,

    /// Scatter walls over this fraction of the grid at startup.
    #[arg(long)]
    walls: Option<f64>,

    /// Seed for wall scattering.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_dimension(self.dimension)
            .with_speed(self.speed)
            .with_diagonals(self.diagonals)
            .with_show_steps(self.show_steps)
            .with_heuristic(if self.euclidean {
                HeuristicKind::Euclidean
            } else {
                HeuristicKind::Manhattan
            })
            .with_algorithm(if self.uniform_cost {
                Algorithm::UniformCost
            } else {
                Algorithm::Standard
            })
            .with_relaxation(if self.legacy_relaxation {
                Relaxation::Heuristic
            } else {
                Relaxation::Cost
            })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let (mut session, events) = Session::with_channel(args.session_config())?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.snapshot.exists() {
        let json = std::fs::read_to_string(&args.snapshot)?;
        let snapshot: GridSnapshot = serde_json::from_str(&json)?;
        session.import_snapshot(&snapshot)?;
        log::info!("loaded {}", args.snapshot.display());
    }
    if let Some(density) = args.walls {
        session.scatter_walls(&mut rng, density)?;
    }

    let model = PathModel::new(session, events, args.snapshot, rng);
    let driver = CrosstermDriver::new().with_mouse(true);
    let (width, height) = CrosstermDriver::size()?;
    let mut app = App::new(AppConfig {
        model,
        driver,
        width,
        height,
        tick: FRAME_INTERVAL,
    });
    app.run()?;
    Ok(())
}
