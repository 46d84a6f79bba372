/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution
use crate::game::draw::Rgb;

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    dots: u8,
    // Last colour drawn into the cell wins, a cell shows a single colour
    color: Option<Rgb>,
}

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    cells: Vec<Vec<Cell>>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::default(); width]; height],
        }
    }

    /// Clear all dots
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                *cell = Cell::default();
            }
        }
    }

    /// Set a dot at pixel coordinates, ignoring anything off the canvas
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: i64, pixel_y: i64, color: Rgb) {
        if pixel_x < 0 || pixel_y < 0 {
            return;
        }
        let (pixel_x, pixel_y) = (pixel_x as usize, pixel_y as usize);
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 3) => 6,
            (1, 3) => 7,
            (0, row) => row,
            (_, row) => row + 3,
        };

        let cell = &mut self.cells[cell_y][cell_x];
        cell.dots |= 1 << dot_index;
        cell.color = Some(color);
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgb) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Bresenham line between two pixels, both ends included
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.cells[cell_y][cell_x].dots;
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Option<Rgb> {
        self.cells.get(cell_y)?.get(cell_x)?.color
    }

    /// Width in terminal cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in terminal cells
    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb(255, 255, 255);

    #[test]
    fn test_braille_canvas() {
        let mut canvas = BrailleCanvas::new(2, 2);

        // Set a single pixel
        canvas.set_pixel(0, 0, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1
        assert_eq!(canvas.color_at(0, 0), Some(WHITE));

        // Fill a whole cell
        canvas.clear();
        canvas.fill_rect(0, 0, 2, 4, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⠀');
        assert_eq!(canvas.color_at(1, 0), None);
    }

    #[test]
    fn test_bottom_row_dots() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(0, 3, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⡀'); // dot 7
        canvas.clear();
        canvas.set_pixel(1, 1, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⠐'); // dot 5
    }

    #[test]
    fn test_off_canvas_pixels_are_ignored() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(-1, 0, WHITE);
        canvas.set_pixel(2, 0, WHITE);
        canvas.set_pixel(0, 4, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⠀');
    }

    #[test]
    fn test_line_reaches_both_ends() {
        let red = Rgb(255, 0, 0);
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.draw_line((0, 0), (7, 7), red);

        // Diagonal through every cell on the way
        assert_eq!(canvas.color_at(0, 0), Some(red));
        assert_eq!(canvas.color_at(3, 1), Some(red));
        assert_eq!(canvas.color_at(3, 0), None);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 2);
    }
}
