use rayon::prelude::*;
use sweeplines::{LineFamily, line_family};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  audit [max_size]                 Check family invariants over many angles and sizes");
        eprintln!("  render <degrees> <height> <width> Print a family as a text grid");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "audit" => {
            let max_size = args.get(2).map(|s| parse_arg(s, "max_size")).unwrap_or(24);
            audit(max_size);
        }
        "render" => {
            if args.len() < 5 {
                eprintln!("Usage: cargo xtask render <degrees> <height> <width>");
                std::process::exit(1);
            }
            let degrees: f64 = parse_arg(&args[2], "degrees");
            let height = parse_arg(&args[3], "height");
            let width = parse_arg(&args[4], "width");
            render(degrees, height, width);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn parse_arg<T: std::str::FromStr>(value: &str, name: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {}: {}", name, value);
        std::process::exit(1);
    })
}

fn render(degrees: f64, height: i32, width: i32) {
    match line_family(degrees.to_radians(), height, width) {
        Ok(family) => {
            println!(
                "{} lines along {:?}, offsets {:?}, seed from {:?}",
                family.len(),
                family.axis(),
                family.offsets(),
                family.corner()
            );
            println!("{}", family.render_ascii());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// One angle/size combination that broke an invariant.
struct Violation {
    degrees: f64,
    height: i32,
    width: i32,
    reason: String,
}

fn audit(max_size: i32) {
    // Tenth-of-a-degree steps hit the rounding edge cases around 45° multiples.
    let angles: Vec<f64> = (0..3600).map(|i| i as f64 / 10.0).collect();
    let sizes: Vec<(i32, i32)> = (1..=max_size)
        .flat_map(|h| (1..=max_size).step_by(3).map(move |w| (h, w)))
        .collect();

    eprintln!("Auditing {} angles x {} sizes...", angles.len(), sizes.len());

    let violations: Vec<Violation> = angles
        .par_iter()
        .flat_map_iter(|&degrees| {
            sizes.iter().filter_map(move |&(height, width)| {
                check(degrees, height, width).err().map(|reason| Violation {
                    degrees,
                    height,
                    width,
                    reason,
                })
            })
        })
        .collect();

    let total = angles.len() * sizes.len();
    println!("{} families checked, {} violations", total, violations.len());
    for v in violations.iter().take(20) {
        println!("  {:6.1}° {}x{}: {}", v.degrees, v.height, v.width, v.reason);
    }
    if !violations.is_empty() {
        std::process::exit(1);
    }
}

fn check(degrees: f64, height: i32, width: i32) -> Result<(), String> {
    let family: LineFamily =
        line_family(degrees.to_radians(), height, width).map_err(|e| e.to_string())?;
    if family.iter().any(|line| line.is_empty()) {
        return Err("empty member".to_string());
    }
    let bounds = family.bounds();
    if !family.iter().flat_map(|line| line.iter()).all(|&p| bounds.contains(p)) {
        return Err("pixel out of bounds".to_string());
    }
    let coverage = family.coverage();
    if let Some(i) = coverage.iter().position(|&hits| hits != 1) {
        return Err(format!(
            "pixel ({}, {}) covered {} times",
            i / width as usize,
            i % width as usize,
            coverage[i]
        ));
    }
    Ok(())
}
