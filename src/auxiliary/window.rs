use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::traits_and_structs::Error;

/// Opens a `width` x `height` window that cannot shrink below one pixel per
/// cell of a `columns` x `rows` grid.
///
/// Returns the window with its physical size and scale factor.
pub fn create_window(
    title: &str,
    width: u32,
    height: u32,
    columns: u32,
    rows: u32,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), Error> {
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
        .with_min_inner_size(PhysicalSize::new(columns, rows))
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();
    let size = window.inner_size();

    Ok((window, size.width, size.height, hidpi_factor))
}
