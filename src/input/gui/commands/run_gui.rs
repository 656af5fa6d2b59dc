use std::error::Error;
use std::marker::PhantomData;

use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::{ExplorerConfig, ExplorerController};
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let fractal = self.config.mandelbrot.build_fractal()?;
        let controller = ExplorerController::new(fractal, &self.config)?;
        let size = controller.resolution().size();

        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Explorer")
                .with_inner_size(PhysicalSize::new(size, size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, controller.resolution())?;
        let app = GuiApp::new(window, &event_loop, presenter, controller);

        log::info!("Opened {}x{} explorer window", size, size);

        app.run(window, event_loop)?;

        Ok(())
    }
}
