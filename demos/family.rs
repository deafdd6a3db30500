//! Print the family of lines for an angle (degrees) and a rectangle.
//!
//! Run with: RUST_LOG=trace cargo run --example family --features tracing -- 30 6 10

use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut next = |default: &str| args.next().unwrap_or_else(|| default.to_string());
    let degrees: f64 = next("30")
        .parse()
        .map_err(|e| miette::miette!("bad angle: {}", e))?;
    let height: i32 = next("6")
        .parse()
        .map_err(|e| miette::miette!("bad height: {}", e))?;
    let width: i32 = next("10")
        .parse()
        .map_err(|e| miette::miette!("bad width: {}", e))?;

    let family = sweeplines::line_family(degrees.to_radians(), height, width)?;
    tracing::info!(degrees, height, width, corner = ?family.corner(), "family built");
    println!(
        "{} lines, shifted along {:?}, seed from {:?}",
        family.len(),
        family.axis(),
        family.corner()
    );
    for (offset, line) in family.iter_with_offsets() {
        let pixels: Vec<String> = line.iter().map(|p| p.to_string()).collect();
        println!("{:+4}: {}", offset, pixels.join(" "));
    }
    println!("{}", family.render_ascii());
    Ok(())
}
