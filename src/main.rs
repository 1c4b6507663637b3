// main.rs
//
// Computes a reference design and writes its SVG and DXF layouts to out/.

use std::path::Path;
use toothed_lpa::math::format_engineering;
use toothed_lpa::{DesignParameters, Seed, calculate};

fn main() {
    let params = DesignParameters::new(1.2, 30.0, 2.0, 4, Seed::Radius(0.1));

    let calc = match calculate(&params) {
        Ok(calc) => calc,
        Err(error) => {
            eprintln!("invalid design: {error}");
            std::process::exit(1);
        },
    };

    for result in &calc.results {
        println!(
            "r{} = {:.4} m ({:.3} in), f{} = {:.3} {} ({}Hz)",
            result.n,
            result.inner_radius_m,
            result.inner_radius_inches(),
            result.n,
            result.frequency_in(params.output_unit),
            params.output_unit,
            format_engineering(result.frequency_hz),
        );
    }
    println!("feed gap = {:.3} mm", calc.feed_gap_m * 1000.0);

    match toothed_lpa::io::write_layouts(Path::new("out"), &calc.results, &params) {
        Ok(paths) => {
            for path in paths {
                println!("wrote {}", path.display());
            }
        },
        Err(error) => {
            eprintln!("export failed: {error}");
            std::process::exit(1);
        },
    }
}
