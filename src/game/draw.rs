// Drawing seam between the game entities and whatever surface renders them

use super::geometry::{Point, Rect};

/// RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

/// Primitive drawing operations in arena coordinates
pub trait Canvas {
    /// Fill the whole surface with one colour
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn draw_line(&mut self, a: Point, b: Point, color: Rgb);

    /// Draw `text` centered on `center`
    fn draw_text(&mut self, text: &str, center: Point, color: Rgb);
}

/// Anything that knows how to put itself on a canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}
