use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    /// Replaces the displayed fractal with a freshly rendered frame.
    fn present_frame(&mut self, buffer: &PixelBuffer);

    /// Draws the current frame with the egui overlay on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Maps a physical window position to a display pixel, or `None` outside the display.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point>;
}
