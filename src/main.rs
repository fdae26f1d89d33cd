use anyhow::Result;
use clap::Parser;
use seed_snake::game::GameConfig;
use seed_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "seed_snake")]
#[command(version, about = "Terminal Snake: eat seeds, grow, don't bite yourself")]
struct Cli {
    /// Fixed grid width in cells (fits the terminal when omitted)
    #[arg(long)]
    width: Option<u16>,

    /// Fixed grid height in cells (fits the terminal when omitted)
    #[arg(long)]
    height: Option<u16>,

    /// Game ticks per second
    #[arg(long, default_value = "15")]
    tick_hz: u32,

    /// Initial snake length (minimum 3)
    #[arg(long, default_value = "3")]
    length: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_hz: cli.tick_hz,
        initial_snake_length: cli.length.max(3),
        ..Default::default()
    };

    let mut mode = HumanMode::new(config)?;
    mode.run().await?;

    Ok(())
}
