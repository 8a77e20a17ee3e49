//! Loam quickstart — a complete headless sandbox run.
//!
//! Demonstrates:
//!   1. Configuring a world and its aquarium
//!   2. Building a session with the built-in species and palettes
//!   3. Placing species with pointer events
//!   4. Selecting from the picker strip and switching palettes
//!   5. Ticking, reading metrics, and rendering frames
//!
//! Run with:
//!   cargo run --example headless

use loam::prelude::*;

const TICKS: u64 = 80;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Loam headless sandbox ===\n");

    // 1. Configure a small world; seed the floor so life starts moving.
    let world = WorldConfig {
        width: 120,
        height: 60,
        seed: 7,
        ..WorldConfig::default()
    };
    let config = SessionConfig {
        aquarium: Some(Aquarium::floor_band(&world)),
        world,
        magnification: 1,
        ..SessionConfig::default()
    };

    // 2. Build the session.
    let mut session = Session::new(config)?;
    let (rows, cols) = session.frame_extent();
    println!(
        "World: 120x60 {:?}, frame {}x{} pixels",
        session.world().boundary(),
        cols,
        rows,
    );
    let names: Vec<&str> = session.catalog().iter().map(Pattern::name).collect();
    println!("Species: {}", names.join(", "));
    println!("Starting population: {}\n", session.world().population());

    // 3. Drop the glider gun near the top-left corner.
    let outcome = session.pointer_down(30, 15);
    println!("Placed the gun: {outcome:?}");

    // 4. Run the sandbox, reporting every 20 ticks.
    for _ in 0..TICKS {
        let metrics = session.step();
        if metrics.generation.is_multiple_of(20) {
            println!(
                "  tick {:>3}: population={:>5} births={:>4} deaths={:>4} time={}us",
                metrics.generation,
                metrics.population,
                metrics.births,
                metrics.deaths,
                metrics.step_us,
            );
        }
    }

    // 5. Pick the pulsar from the strip and place it mid-grid.
    let strip_y = session.world().height() * session.magnification();
    let slot = session.catalog().index_of("pulsar").expect("built-in");
    let x = session.picker().spans()[slot].start + 1;
    session.pointer_down(x * session.magnification(), strip_y);
    println!("\nSelected species {}", session.species());
    session.pointer_down(90, 30);

    // 6. Switch the palette, settle a few ticks, compose a frame.
    session.key_down('2');
    for _ in 0..6 {
        session.step();
    }
    let frame = session.render();
    println!(
        "Frame: {}x{} pixels, {} bytes\n",
        frame.cols(),
        frame.rows(),
        frame.as_bytes().len(),
    );

    // 7. Sketch the trail, one character per 2x2 cell block.
    println!("Trail after {TICKS} ticks:");
    let trail = session.world().trail();
    for r in (0..session.world().height()).step_by(2) {
        let line: String = (0..session.world().width())
            .step_by(2)
            .map(|c| match trail.get(r, c) {
                Some(v) if v >= 0.95 => '#',
                Some(v) if v >= 0.30 => '+',
                Some(v) if v >= 0.05 => '.',
                _ => ' ',
            })
            .collect();
        println!("  {line}");
    }

    Ok(())
}
