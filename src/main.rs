use std::env;

use env_logger::Env;

const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let output_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let presenter = fractal_explorer::PpmFilePresenter::new();
    let mut controller =
        fractal_explorer::CliRenderController::new(presenter, fractal_explorer::ExplorerConfig::default());

    controller.generate()?;
    controller.write(&output_path)?;

    Ok(())
}
