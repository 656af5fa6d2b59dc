use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let presenter_factory = fractal_explorer::PixelsPresenterFactory::new();
    let command =
        fractal_explorer::RunGuiCommand::new(presenter_factory, fractal_explorer::ExplorerConfig::default());

    command.execute()
}
