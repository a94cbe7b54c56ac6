#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minesweeper::{init_logging, Console, Field, DEFAULT_SIDE_LENGTH, MAX_SIDE_LENGTH};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io;

#[derive(Parser)]
#[command(author, version, about = "Play Minesweeper in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of rows and columns of the square field.
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH)]
    size: usize,
    /// Number of mines. Asked interactively when omitted.
    #[arg(long)]
    mines: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if cli.size == 0 || cli.size > MAX_SIDE_LENGTH {
        anyhow::bail!("--size must be between 1 and {}", MAX_SIDE_LENGTH);
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mines = match cli.mines {
        Some(m) => m,
        None => console.read_mine_count()?,
    };

    let mut field = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        Field::with_seed(cli.size, mines, s)
    } else {
        Field::new(cli.size, mines)
    };
    console.play(&mut field)?;
    Ok(())
}
