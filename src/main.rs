use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use tabia_core::{Color, PieceKind};
use tabia_eval::evaluate;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [piece, color, x, y] = args.as_slice() else {
        bail!("usage: tabia <piece: p|n|b|r|q|k> <color: w|b> <x: 0-7> <y: 0-7>");
    };

    let kind: PieceKind = piece.parse()?;
    let color: Color = color.parse()?;
    let x: u8 = x
        .parse()
        .with_context(|| format!("invalid x coordinate: {x}"))?;
    let y: u8 = y
        .parse()
        .with_context(|| format!("invalid y coordinate: {y}"))?;
    debug!(%kind, %color, x, y, "evaluating");

    let score = evaluate(kind, color, x, y)?;
    info!("{kind} ({color}) at ({x}, {y}) scores {score}");
    println!("{score}");
    Ok(())
}
