use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Size of the pixel buffer the banner is painted into.
pub const SCREEN_WIDTH: u32 = 512;
pub const SCREEN_HEIGHT: u32 = 128;

/// Create a window for the banner.
///
/// Automatically scales the window to cover about 2/3 of the monitor width
/// and centers it.
///
/// # Returns
///
/// Tuple of `(window, surface_width, surface_height, hidpi_factor)`.
/// `surface_width` and `surface_height` are in physical pixels.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), OsError> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    // Get dimensions
    let width = SCREEN_WIDTH as f64;
    let height = SCREEN_HEIGHT as f64;
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        }
        None => (width, height),
    };
    let scale = (monitor_width / width * 2.0 / 3.0).round().max(1.0);

    // Resize, center, and display the window
    let min_size: LogicalSize<f64> =
        PhysicalSize::new(width, height).to_logical(hidpi_factor);
    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        (monitor_width - width * scale) / 2.0,
        (monitor_height - height * scale) / 2.0,
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}
