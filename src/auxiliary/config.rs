use std::time::Duration;

use crate::traits_and_structs::Error;

pub const GRID_ROWS: usize = 100;
pub const GRID_COLUMNS: usize = 100;
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const ADVANCE_INTERVAL: Duration = Duration::from_millis(100);

/// Settings for one viewer run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub columns: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub interval: Duration,
    /// PCG32 seed; `None` draws one from the OS.
    pub seed: Option<(u64, u64)>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            interval: ADVANCE_INTERVAL,
            seed: None,
        }
    }
}

impl LifeConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: (u64, u64)) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_grid_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.interval.is_zero() {
            return Err(Error::InvalidInterval);
        }
        Ok(())
    }
}
