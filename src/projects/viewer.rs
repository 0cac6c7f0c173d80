use std::time::Instant;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use randomize::PCG32;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::config::LifeConfig;
use crate::auxiliary::randomizer::{seeded_rng, CoinSource};
use crate::auxiliary::window::create_window;
use crate::projects::life::{advance, compute_grid_colors, create_grid};
use crate::traits_and_structs::{CellAutomata, ColorGrid, Error, Grid};

pub fn run_life(config: LifeConfig) -> Result<(), Error> {
    config.validate()?;
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(
        "Conway's Game of Life",
        config.window_width,
        config.window_height,
        config.columns as u32,
        config.rows as u32,
        &event_loop,
    )?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);

    let mut life = Life::new_random(config.rows, config.columns, config.seed)?;
    let mut pixels = Pixels::new(config.columns as u32, config.rows as u32, surface_texture)?;
    let interval = config.interval;
    let mut paused = false;
    let mut last_update = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            life.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                info!("{}", if paused { "paused" } else { "unpaused" });
            }
            let step = input.key_pressed(VirtualKeyCode::Space);
            if step {
                // Space is frame-step, so ensure we're paused
                paused = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                info!("reset with random conditions");
                life.randomize();
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("grid cleared");
                life.clear();
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            if step || (!paused && last_update.elapsed() >= interval) {
                life.update();
                last_update = Instant::now();
            }
            *control_flow = if paused {
                ControlFlow::Wait
            } else {
                ControlFlow::WaitUntil(last_update + interval)
            };
            window.request_redraw();
        }
    });
}

/// A running Life board: the current generation, its colours and the
/// random source used for resets.
pub struct Life {
    grid: Grid,
    colors: ColorGrid,
    rng: PCG32,
    generation: u64,
}

impl Life {
    /// A board of random cells. `seed` picks the PCG32 stream; `None` seeds
    /// from the OS.
    pub fn new_random(
        rows: usize,
        columns: usize,
        seed: Option<(u64, u64)>,
    ) -> Result<Self, Error> {
        let (mut rng, seed) = seeded_rng(seed)?;
        let grid = create_grid(rows, columns, &mut rng)?;
        info!("{}x{} grid, seed {:?}", rows, columns, seed);
        Ok(Self::with_grid(grid, rng))
    }

    /// Starts from a given generation.
    pub fn with_grid(grid: Grid, rng: PCG32) -> Self {
        let colors = compute_grid_colors(&grid);
        Self {
            grid,
            colors,
            rng,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn colors(&self) -> &ColorGrid {
        &self.colors
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn replace(&mut self, grid: Grid) {
        self.colors = compute_grid_colors(&grid);
        self.grid = grid;
    }
}

impl CellAutomata for Life {
    fn draw(&self, screen: &mut [u8]) {
        self.colors.draw(screen);
    }

    fn update(&mut self) {
        let next = advance(&self.grid);
        self.replace(next);
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );
    }

    fn randomize(&mut self) {
        let rng = &mut self.rng;
        let grid = self.grid.map_states(|_| rng.flip());
        self.replace(grid);
        self.generation = 0;
    }

    fn clear(&mut self) {
        let grid = self.grid.map_states(|_| false);
        self.replace(grid);
        self.generation = 0;
    }

    fn describe() -> String {
        "Conway's Game of Life. A live cell with two or three live neighbours \
         survives, a dead cell with exactly three live neighbours is born, and \
         every other cell is dead in the next generation. Cells past the edge \
         of the grid are always dead. Live cells are drawn lighter the more \
         live neighbours they have."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Life {
        let grid = Grid::from_alive_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        Life::with_grid(grid, (1, 1).into())
    }

    #[test]
    fn update_advances_and_counts() {
        let mut life = blinker();
        life.update();
        assert_eq!(life.generation(), 1);
        assert_eq!(
            *life.grid(),
            Grid::from_alive_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap()
        );
        assert_eq!(*life.colors(), compute_grid_colors(life.grid()));
        life.update();
        assert_eq!(life.generation(), 2);
        assert_eq!(*life.grid(), *blinker().grid());
    }

    #[test]
    fn clear_kills_everything() {
        let mut life = blinker();
        life.update();
        life.clear();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.grid().population(), 0);
        assert_eq!((life.grid().rows(), life.grid().columns()), (5, 5));
    }

    #[test]
    fn randomize_keeps_shape() {
        let mut life = Life::new_random(30, 40, Some((5, 6))).unwrap();
        let before = life.grid().clone();
        life.update();
        life.randomize();
        assert_eq!(life.generation(), 0);
        assert_eq!((life.grid().rows(), life.grid().columns()), (30, 40));
        assert_ne!(*life.grid(), before);
        assert_eq!(*life.colors(), compute_grid_colors(life.grid()));
    }

    #[test]
    fn seeded_boards_match() {
        let a = Life::new_random(16, 16, Some((77, 3))).unwrap();
        let b = Life::new_random(16, 16, Some((77, 3))).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn new_random_rejects_empty() {
        assert!(matches!(
            Life::new_random(0, 10, Some((1, 1))),
            Err(Error::EmptyGrid { .. })
        ));
    }

    #[test]
    fn draw_paints_colors() {
        let life = blinker();
        let mut screen = vec![0u8; 4 * 25];
        life.draw(&mut screen);
        // (2, 2) is the middle of the blinker with two neighbours
        let i = 4 * (2 * 5 + 2);
        assert_eq!(&screen[i..i + 4], &life.colors().get(2, 2).unwrap().to_rgba());
        assert_eq!(&screen[0..4], &[0, 0, 0, 0xff]);
    }

    #[test]
    fn describe_mentions_the_rule() {
        assert!(Life::describe().contains("exactly three"));
    }
}
