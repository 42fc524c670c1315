//! og-cli: headless layout, routing and PNG export.
//!
//! Usage:
//!   og-cli "c2: 3>1 4>2"
//!   og-cli "c2: 3>1 4>2" --feedback "3>3" --png canvas.png

use std::env;

use og_engine::{compute_layout, route_all, Placement};
use og_ir::{parse_algorithm, parse_feedback, GraphModel, GridCell, Mode, GRID_SIZE};
use tracing::info;

fn main() {
    opgrid::init_logging();

    let args: Vec<String> = env::args().collect();
    let notation = args.get(1).filter(|a| !a.starts_with("--")).unwrap_or_else(|| {
        eprintln!("Usage: og-cli \"<algorithm>\" [--feedback \"<feedback>\"] [--png output.png]");
        std::process::exit(1);
    });
    let flag = |name: &str| {
        args.iter()
            .position(|a| a == name)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };

    let algorithm = parse_algorithm(notation).unwrap_or_else(|e| {
        eprintln!("Bad algorithm: {e}");
        std::process::exit(1);
    });
    let feedback = parse_feedback(flag("--feedback").as_deref().unwrap_or("")).unwrap_or_else(|e| {
        eprintln!("Bad feedback: {e}");
        std::process::exit(1);
    });

    let mut model = GraphModel::from_instrument(&algorithm, &feedback, Mode::Algorithm);
    let placement = compute_layout(&model);
    info!(carriers = model.carrier_count(), "layout computed");

    println!("Algorithm: {}", algorithm);
    println!("Feedback:  {}", feedback);
    println!();
    print_grid(&placement);
    println!();

    for mode in [Mode::Algorithm, Mode::Feedback] {
        model.set_mode(mode);
        println!("{} routes:", mode.label());
        for routed in route_all(&model, &placement).iter() {
            let points: Vec<String> = routed
                .route
                .points()
                .iter()
                .map(|p| format!("({},{})", p.x, p.y))
                .collect();
            println!("  {} > {}  {}", routed.edge.source, routed.edge.target, points.join(" "));
        }
    }

    if let Some(path) = flag("--png") {
        model.set_mode(Mode::Algorithm);
        export(&model, &path);
    }
}

/// Top row first, carriers on the last line.
fn print_grid(placement: &Placement) {
    for row in (0..GRID_SIZE).rev() {
        let line: String = (0..GRID_SIZE)
            .map(|col| {
                GridCell::new(row, col)
                    .and_then(|cell| placement.occupant(cell))
                    .map_or_else(|| " .".to_string(), |n| format!(" {n}"))
            })
            .collect();
        println!("{line}");
    }
}

#[cfg(feature = "png")]
fn export(model: &GraphModel, path: &str) {
    use og_render::{redraw, Palette, Pixmap};

    let mut pixmap = Pixmap::new();
    redraw(&mut pixmap, model, None, &Palette::default());
    match pixmap.save_png(path) {
        Ok(()) => info!(path, "canvas written"),
        Err(e) => {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "png"))]
fn export(_model: &GraphModel, path: &str) {
    eprintln!("Cannot write {}: built without the `png` feature", path);
    std::process::exit(1);
}
