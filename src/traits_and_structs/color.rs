/// Channel multiplier applied by [`Color::darker`].
const DARKER_FACTOR: f64 = 0.7;

/// An RGBA8 colour, laid out the way `pixels` expects it in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// One darkening step: every colour channel scaled by 0.7 and truncated.
    /// Alpha is kept.
    #[must_use]
    pub fn darker(self) -> Self {
        let scale = |channel: u8| (f64::from(channel) * DARKER_FACTOR) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Display colours for one grid, same shape as the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    colors: Vec<Color>,
    rows: usize,
    columns: usize,
}

impl ColorGrid {
    pub(crate) fn new(colors: Vec<Color>, rows: usize, columns: usize) -> Self {
        debug_assert_eq!(colors.len(), rows * columns);
        Self {
            colors,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Color> {
        if row < self.rows && column < self.columns {
            Some(self.colors[column + row * self.columns])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.colors.chunks_exact(self.columns)
    }

    /// Paints one RGBA pixel per cell into `screen`, row-major.
    pub fn draw(&self, screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), 4 * self.colors.len());
        for (c, pix) in self.colors.iter().zip(screen.chunks_exact_mut(4)) {
            pix.copy_from_slice(&c.to_rgba());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_truncates_each_channel() {
        let shades: Vec<u8> = std::iter::successors(Some(Color::WHITE), |c| Some(c.darker()))
            .take(5)
            .map(|c| c.r)
            .collect();
        assert_eq!(shades, vec![255, 178, 124, 86, 60]);
        assert_eq!(Color::rgb(30, 100, 200).darker(), Color::rgb(21, 70, 140));
        assert_eq!(Color::BLACK.darker(), Color::BLACK);
        assert_eq!(Color::WHITE.darker().a, 0xff);
    }

    #[test]
    fn draw_writes_rgba_row_major() {
        let grid = ColorGrid::new(
            vec![Color::WHITE, Color::BLACK, Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)],
            2,
            2,
        );
        let mut screen = [0u8; 16];
        grid.draw(&mut screen);
        assert_eq!(
            screen,
            [255, 255, 255, 255, 0, 0, 0, 255, 1, 2, 3, 255, 4, 5, 6, 255]
        );
        assert_eq!(grid.get(1, 0), Some(Color::rgb(1, 2, 3)));
        assert_eq!(grid.get(2, 0), None);
    }
}
