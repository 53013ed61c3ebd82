use macroquad::prelude::*;

use crate::puzzle::{Puzzle, Shape, TileColor, GRID_SIZE};

/// Tile edge length in pixels. Kept integral so pixel-to-cell translation is
/// plain integer division.
pub const TILE_SIZE: i32 = 100;
pub const WINDOW_SIZE: i32 = TILE_SIZE * GRID_SIZE as i32;

const CONGRATS_TEXT: &str = "Congratulations!";
const CONGRATS_FONT_SIZE: u16 = 48;

fn fill_color(color: TileColor) -> Color {
    match color {
        TileColor::Red => Color::from_rgba(255, 0, 0, 255),
        TileColor::Green => Color::from_rgba(0, 255, 0, 255),
        TileColor::Blue => Color::from_rgba(0, 0, 255, 255),
        TileColor::Yellow => Color::from_rgba(255, 255, 0, 255),
    }
}

/// Clears the window and draws every occupied cell as its tile's shape in the
/// tile's palette color. The frame is presented by the caller.
pub fn draw_puzzle(puzzle: &Puzzle) {
    clear_background(BLACK);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let Some(tile) = puzzle.tile(row, col) else {
                continue;
            };
            let x = (col as i32 * TILE_SIZE) as f32;
            let y = (row as i32 * TILE_SIZE) as f32;
            let size = TILE_SIZE as f32;
            let half = size / 2.0;
            let color = fill_color(tile.color);

            match tile.shape {
                Shape::Square => draw_rectangle(x, y, size, size, color),
                Shape::Rectangle => draw_rectangle(x, y, size, half, color),
                Shape::Circle => draw_circle(x + half, y + half, half, color),
                // Rhombus on the four edge midpoints: a 4-gon with a vertex
                // at angle 0 pointing at the right edge's midpoint.
                Shape::Diamond => draw_poly(x + half, y + half, 4, half, 0.0, color),
            }
        }
    }
}

/// Overlays the win message, centered, on top of whatever has been drawn
/// this frame.
pub fn draw_congratulations() {
    let dims = measure_text(CONGRATS_TEXT, None, CONGRATS_FONT_SIZE, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    let y = (screen_height() - dims.height) / 2.0 + dims.offset_y;
    draw_text(CONGRATS_TEXT, x, y, CONGRATS_FONT_SIZE as f32, WHITE);
}
