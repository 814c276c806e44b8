// Interactive banner, after the canvas example of the library:
// cell size 8, font size 60, black cells on white with #DCDCDC grid lines,
// one generation per click.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::rc::Rc;

use log::{debug, error, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use banner_of_life::auxiliary::window::{create_window, SCREEN_HEIGHT, SCREEN_WIDTH};
use banner_of_life::{Banner, EdgePolicy, OptimizerConfig, SeedMode, Surface};

const DEFAULT_TEXT: &str = "R";
const GRID_COLOR: &str = "#DCDCDC";

/// The window's pixel buffer, shared with the banner through a weak handle.
struct Screen {
    pixels: Pixels,
}

impl Surface for Screen {
    fn size(&self) -> (u32, u32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        self.pixels.get_frame()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    println!("\nWelcome to the banner of life!\nType 'q' to quit.");
    println!("\nWhat should the banner say? (empty for {:?})", DEFAULT_TEXT);

    let mut line = String::new();
    if let Err(e) = io::stdin().read_line(&mut line) {
        println!("\nERROR: could not read the banner text: {}", e);
    }
    let text = match line.trim() {
        "q" | "quit" => return Ok(()),
        "" => DEFAULT_TEXT.to_string(),
        other => other.to_string(),
    };

    println!("\n\nControls for the banner:\nCLICK or SPACE: next generation\nR: render the text again\nO: toggle oscillator seeding\nT: toggle wrap-around edges\nG: toggle grid lines\nESC: close screen");
    run(text)
}

fn configure(banner: &mut Banner<Screen>) -> banner_of_life::Result<()> {
    banner.set_cell_size(8)?;
    banner.set_font_size(60)?;
    banner.set_background_color("White")?;
    banner.set_cell_color("Black")?;
    banner.set_grid_color(GRID_COLOR)
}

fn report(result: banner_of_life::Result<()>) {
    if let Err(e) = result {
        error!("{}", e);
    }
}

fn run(text: String) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) =
        create_window("Banner of Life", &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;
    let screen = Rc::new(RefCell::new(Screen { pixels }));

    let mut banner = Banner::new(&screen)?;
    configure(&mut banner)?;
    banner.render(&text)?;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            if screen
                .borrow_mut()
                .pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, for let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.mouse_pressed(0) || input.key_pressed(VirtualKeyCode::Space) {
                report(banner.tick());
                debug!("generation {}", banner.grid().generation());
            }
            if input.key_pressed(VirtualKeyCode::R) {
                println!("rendered {:?} again", text);
                report(banner.render(&text));
            }
            if input.key_pressed(VirtualKeyCode::O) {
                match banner.seed_mode() {
                    SeedMode::Literal => match OptimizerConfig::random() {
                        Ok(config) => {
                            println!("oscillator seeding");
                            banner.set_seed_mode(SeedMode::Oscillators(config));
                        }
                        Err(e) => warn!("no random seed available: {}", e),
                    },
                    SeedMode::Oscillators(_) => {
                        println!("literal seeding");
                        banner.set_seed_mode(SeedMode::Literal);
                    }
                }
                report(banner.render(&text));
            }
            if input.key_pressed(VirtualKeyCode::T) {
                let policy = match banner.edge_policy() {
                    EdgePolicy::Bounded => EdgePolicy::Toroidal,
                    EdgePolicy::Toroidal => EdgePolicy::Bounded,
                };
                println!("edges: {:?}", policy);
                banner.set_edge_policy(policy);
            }
            if input.key_pressed(VirtualKeyCode::G) {
                if banner.palette().grid_color().is_some() {
                    banner.clear_grid_color();
                } else {
                    report(banner.set_grid_color(GRID_COLOR));
                }
                report(banner.redraw());
            }
            // Adjust high DPI factor
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                screen
                    .borrow_mut()
                    .pixels
                    .resize_surface(size.width, size.height);
            }
            window.request_redraw();
        }
    });
}
