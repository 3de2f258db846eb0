mod clock;
mod graphics;
mod grid;
mod input_mapping;
mod rules;
mod simulation;

use winit::{
    event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use std::time::Instant;

use crate::graphics::BoardRenderer;
use crate::simulation::SimulationController;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 1000;
const CELL_SIZE: u32 = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Lifeboard")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut renderer = BoardRenderer::new(&window, WIDTH, HEIGHT)?;
    let mut sim =
        SimulationController::new(WIDTH, HEIGHT, CELL_SIZE, clock::DEFAULT_TICK_INTERVAL_MS)?;

    log::info!(
        "board is {}x{} cells, space runs/pauses, C clears",
        sim.current_grid().cols(),
        sim.current_grid().rows()
    );

    let mut cursor_pos: (f64, f64) = (0.0, 0.0);
    let mut last_update = Instant::now();
    let mut redraw_requested = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    renderer.resize(size.width, size.height);
                    redraw_requested = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_pos = (position.x, position.y);
                    sim.on_pointer_move(cursor_pos.0, cursor_pos.1);
                    redraw_requested = true;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    sim.on_pointer_down(cursor_pos.0, cursor_pos.1);
                    redraw_requested = true;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Space) => {
                                sim.toggle_running();
                                redraw_requested = true;
                            }
                            Some(VirtualKeyCode::C) => {
                                sim.clear();
                                redraw_requested = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // The event loop is the sole pump: delta time in, at most
                // one generation step out per frame.
                let now = Instant::now();
                let delta_ms = now.duration_since(last_update).as_secs_f64() * 1000.0;
                last_update = now;

                if sim.on_frame(delta_ms) {
                    redraw_requested = true;
                }

                if redraw_requested {
                    renderer.render(sim.current_grid(), sim.hover_cell(), sim.cell_size());

                    if let Err(err) = renderer.present() {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                    redraw_requested = false;
                }
            }
            _ => {}
        }
    });
}
