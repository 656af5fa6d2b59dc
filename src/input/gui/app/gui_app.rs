use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::PhysicalPosition,
    error::EventLoopError,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::explorer::{ExplorerCommand, ExplorerController};
use crate::core::fractals::fractal_generator::FractalGenerator;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<P: GuiPresenterPort, F: FractalGenerator + Sync> {
    presenter: P,
    controller: ExplorerController<F>,
    colour_map_kind: MandelbrotColourMapKinds,
    cursor_position: Option<PhysicalPosition<f64>>,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort, F: FractalGenerator + Sync> GuiApp<P, F> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: ExplorerController<F>,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let colour_map_kind = controller.colour_map_kind();

        Self {
            presenter,
            controller,
            colour_map_kind,
            cursor_position: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Renders the current view without changing it.
    pub fn refresh(&mut self) {
        match self.controller.render() {
            Ok(buffer) => {
                self.presenter.present_frame(&buffer);
                self.last_error_message = None;
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    pub fn dispatch(&mut self, command: ExplorerCommand) {
        match self.controller.dispatch(command) {
            Ok(buffer) => {
                self.presenter.present_frame(&buffer);
                self.last_error_message = None;
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    fn report_error(&mut self, message: String) {
        log::error!("{}", message);
        self.last_error_message = Some(message);
    }

    fn click_at_cursor(&mut self) {
        let Some(position) = self.cursor_position else {
            return;
        };

        match self
            .presenter
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Some(point) => self.dispatch(ExplorerCommand::ClickAt(point)),
            None => log::debug!("Ignoring click outside the display at {:?}", position),
        }
    }

    /// Runs one egui frame and returns its output with the commands the controls issued.
    pub fn update_ui(&mut self, window: &Window) -> (egui::FullOutput, Vec<ExplorerCommand>) {
        let raw_input = self.egui_state.take_egui_input(window);
        let range = self.controller.range();
        let colour_map_kind = &mut self.colour_map_kind;
        let last_error_message = &self.last_error_message;
        let mut commands = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::bottom("explorer_controls").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        commands.push(ExplorerCommand::Reset);
                    }

                    ui.separator();
                    ui.label("Colour map:");

                    let previous = *colour_map_kind;
                    egui::ComboBox::from_id_source("mandelbrot_colour_map")
                        .selected_text(colour_map_kind.display_name())
                        .show_ui(ui, |ui| {
                            for &kind in MandelbrotColourMapKinds::ALL {
                                ui.selectable_value(colour_map_kind, kind, kind.display_name());
                            }
                        });

                    if *colour_map_kind != previous {
                        commands.push(ExplorerCommand::SelectColourMap(*colour_map_kind));
                    }
                });

                let origin = range.origin();
                let far_corner = range.far_corner();
                ui.label(format!(
                    "Real: [{:.6}, {:.6}]  Imag: [{:.6}, {:.6}]",
                    origin.real, far_corner.real, origin.imag, far_corner.imag
                ));

                if let Some(message) = last_error_message {
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                }
            });
        });

        (output, commands)
    }

    /// Drives the window until it is closed.
    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        self.refresh();

        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);

                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let (egui_output, commands) = self.update_ui(window);

                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            log::error!("Render error: {}", err);
                            elwt.exit();
                            return;
                        }

                        if !commands.is_empty() {
                            for command in commands {
                                self.dispatch(command);
                            }
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor_position = Some(*position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.cursor_position = None;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !response.consumed => {
                        self.click_at_cursor();
                        redraw_pending = true;
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = self.presenter.resize(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                            return;
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = self.presenter.resize(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                            return;
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }
}
