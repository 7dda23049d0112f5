use std::path::PathBuf;

use arena::{
    draw_history, load_board, parse_probability, parse_temptation, write_gif, write_png,
    Dimensions, Recorder,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spatial_dilemma::{run_tournament, visualize, Board, History};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays a spatial Prisoner's Dilemma and renders it as an animated GIF.
#[derive(Parser)]
struct Args {
    /// The payoff of a defector against a cooperator, usually greater than 1
    #[arg(value_parser = parse_temptation, allow_negative_numbers = true)]
    temptation: f64,

    /// How many rounds to play
    num_gens: usize,

    /// Text file with the initial board
    #[arg(short, long, required_unless_present = "random", conflicts_with = "random")]
    board: Option<PathBuf>,

    /// Start from a random board of this size instead, e.g. "50x80"
    #[arg(long)]
    random: Option<Dimensions>,

    /// Probability of a cell on a random board to defect
    #[arg(long, default_value_t = 0.1, value_parser = parse_probability)]
    defect_fraction: f64,

    /// RNG seed for random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Width and height of a cell in pixels
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    cell_size: u32,

    /// Delay between the frames of the GIF in milliseconds
    #[arg(long, default_value_t = 100)]
    frame_delay: u32,

    /// Where to write the animated GIF
    #[arg(long, default_value = "out.gif")]
    gif: PathBuf,

    /// Where to write an image of the last generation
    #[arg(long, default_value = "prisoners.png")]
    png: PathBuf,

    /// Don't draw any images
    #[arg(long, default_value_t = false)]
    no_images: bool,

    /// Record all generations as JSON into this file
    #[arg(short, long)]
    record_history: Option<PathBuf>,

    /// Print the last generation to the terminal
    #[arg(long, default_value_t = false)]
    show: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn initial_board(args: &Args) -> anyhow::Result<Board> {
    if let Some(path) = &args.board {
        return load_board(path);
    }
    let Some(Dimensions { rows, cols }) = args.random else {
        anyhow::bail!("Either a board file or the size of a random board is required");
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, rows, cols, defect_fraction = args.defect_fraction, "Generating a random board");
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Board::random(rows, cols, args.defect_fraction, &mut rng)?)
}

fn report(history: &History) {
    for (generation, board) in history.iter().enumerate() {
        let census = board.census();
        debug!(
            generation,
            cooperators = census.cooperators,
            defectors = census.defectors,
            cooperation_rate = census.cooperation_rate()
        );
    }
    if let Some(generation) = history.settled_at() {
        info!(generation, "The strategies did not change anymore");
    }

    let census = history.last().census();
    eprintln!(
        "Generation {}: {} cooperators, {} defectors ({:.1}% cooperation)",
        history.num_generations(),
        census.cooperators,
        census.defectors,
        census.cooperation_rate() * 100.0
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let initial = initial_board(&args)?;

    info!(
        rows = initial.rows(),
        cols = initial.cols(),
        temptation = args.temptation,
        num_gens = args.num_gens,
        "Playing the tournament"
    );
    let history = run_tournament(&initial, args.temptation, args.num_gens);
    report(&history);

    if let Some(path) = args.record_history.clone() {
        let recorder = Recorder::new(path)?;
        recorder.write_history(&history)?;
        info!(path = %recorder.path().display(), "History recorded");
    }

    if !args.no_images {
        info!("Tournament played, drawing images");
        let images = draw_history(&history, args.cell_size)?;
        write_png(&images[images.len() - 1], &args.png)?;

        info!("Images drawn, encoding the animated GIF");
        write_gif(images, &args.gif, args.frame_delay)?;
        info!(gif = %args.gif.display(), png = %args.png.display(), "Success! GIF produced");
    }

    if args.show {
        println!("{}", visualize(history.last()));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
