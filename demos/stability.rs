use spherical_bessel::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lmax = 25;
    let orders = [3, 5, 8];

    // -- Selected orders, both directions against the reference --
    for x in [0.1_f64, 1.0, 10.0] {
        match compare(x, &orders, lmax) {
            Ok(table) => println!("{table}"),
            Err(e) => eprintln!("x = {x}: {e}"),
        }
    }

    // -- Relative error over all orders --
    println!("=== Relative error, l = 0..={lmax} ===");
    for x in [0.1_f64, 1.0, 10.0] {
        let table = match compare_sweep(x, lmax) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("x = {x}: {e}");
                continue;
            }
        };
        println!("x = {x}:");
        for direction in Direction::ALL {
            match table.worst_error(direction) {
                Some((l, err)) => println!("  {direction:<8} worst {err:.3e} at l = {l}"),
                None => println!("  {direction:<8} no reference available"),
            }
        }
    }

    // -- Near a zero of j_0 the order-0 anchor loses accuracy --
    println!("\n=== Normalization at x = pi ===");
    let x = core::f64::consts::PI;
    for normalization in [Normalization::Order0, Normalization::SumRule] {
        let config = MillerConfig {
            normalization,
            ..MillerConfig::default()
        };
        match compare_with(x, &[1, 2, 3], 8, &config, &AnalyticReference::default()) {
            Ok(table) => {
                let (l, err) = table.worst_error(Direction::Downward).unwrap_or((0, f64::NAN));
                println!("  {normalization:?}: worst downward error {err:.3e} at l = {l}");
            }
            Err(e) => println!("  {normalization:?}: {e}"),
        }
    }

    // -- x = 0 --
    println!("\n=== x = 0 ===");
    match evaluate_upward(0.0_f64, 4) {
        Ok(seq) => println!("  upward:   {:?}", seq.as_slice()),
        Err(e) => println!("  upward:   {e}"),
    }
    match evaluate_downward(0.0_f64, 4) {
        Ok(seq) => println!("  downward: {:?}", seq.as_slice()),
        Err(e) => println!("  downward: {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    if let Ok(seq) = evaluate_downward(1.0_f32, 5) {
        for (l, v) in seq.iter() {
            println!("  j_{l}(1) = {v:.6e} (f32)");
        }
    }
}
