// File: crates/diskplot/src/viewer.rs
// Summary: Window display: blits each chart with winit + softbuffer and waits for the user to close it.

use std::num::NonZeroU32;

use diskplot_core::{ChartError, Display, Frame};
use log::debug;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

/// Owns the process-wide event loop; each `show` opens one window and blocks until it closes.
pub struct WindowViewer {
    event_loop: EventLoop<()>,
}

impl WindowViewer {
    pub fn new() -> Self {
        Self { event_loop: EventLoop::new() }
    }
}

fn display_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Display(e.to_string())
}

impl Display for WindowViewer {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<(), ChartError> {
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(frame.width, frame.height))
            .with_resizable(false)
            .build(&self.event_loop)
            .map_err(display_err)?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(display_err)?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(display_err)?;
        let xrgb = frame.to_xrgb();

        let mut failure = None;
        self.event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::RedrawRequested(id) if id == window.id() => {
                    if let Err(e) = present(&mut surface, &window, frame, &xrgb) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                                ..
                            },
                        ..
                    } => *cf = ControlFlow::Exit,
                    _ => {}
                },
                _ => {}
            }
        });
        debug!("Closed window '{}'", title);

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Copy the chart into the window buffer, top-left aligned; any extra area stays black.
fn present(
    surface: &mut softbuffer::Surface,
    window: &Window,
    frame: &Frame,
    xrgb: &[u32],
) -> Result<(), ChartError> {
    let size = window.inner_size();
    let (w, h) = match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(()),
    };
    surface.resize(w, h).map_err(display_err)?;
    let mut buffer = surface.buffer_mut().map_err(display_err)?;
    buffer.fill(0);

    let (bw, bh) = (w.get() as usize, h.get() as usize);
    let fw = frame.width as usize;
    let rows = bh.min(frame.height as usize);
    let cols = bw.min(fw);
    for y in 0..rows {
        buffer[y * bw..y * bw + cols].copy_from_slice(&xrgb[y * fw..y * fw + cols]);
    }
    buffer.present().map_err(display_err)
}
