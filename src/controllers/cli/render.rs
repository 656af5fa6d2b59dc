use std::error::Error;
use std::path::Path;

use crate::controllers::explorer::{ExplorerConfig, ExplorerController};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders the initial view once and hands the result to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let fractal = self.config.mandelbrot.build_fractal()?;
        let controller = ExplorerController::new(fractal, &self.config)?;

        self.buffer = Some(controller.render()?);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame. Does nothing before `generate` has run.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
            log::info!("Wrote {}", filepath.display());
        }

        Ok(())
    }
}
