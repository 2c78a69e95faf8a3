//! GameView: paints a `GameState` into a framebuffer.
//!
//! Pure layout, no I/O. Layout, left to right: the framed board, then a side
//! panel with NEXT, SCORE, HIGH and LEVEL.

use crate::core::pieces::shape_offsets;
use crate::core::{GameState, Tetromino};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Colour, GRID_HEIGHT, GRID_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const GHOST_CHAR: char = '░';
const BLOCK_CHAR: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// RGB value of a named cube colour
pub fn colour_rgb(colour: Colour) -> Rgb {
    match colour {
        Colour::Goldenrod => Rgb::new(218, 165, 32),
        Colour::Red => Rgb::new(255, 0, 0),
        Colour::MediumPurple => Rgb::new(147, 112, 219),
        Colour::Fuchsia => Rgb::new(255, 0, 255),
        Colour::SpringGreen => Rgb::new(0, 255, 127),
        Colour::Lime => Rgb::new(0, 255, 0),
        Colour::Yellow => Rgb::new(255, 255, 0),
        Colour::Aqua => Rgb::new(0, 255, 255),
        Colour::Crimson => Rgb::new(220, 20, 60),
    }
}

/// Board origin within the framebuffer (top-left of the frame)
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        draw_border(fb, origin, frame_w, frame_h);

        let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in state.board().rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(cube) => self.paint_cell(
                        fb,
                        origin,
                        (x as i8, y as i8),
                        BLOCK_CHAR,
                        block_style(cube.colour),
                    ),
                    None => self.paint_cell(fb, origin, (x as i8, y as i8), '·', dot),
                }
            }
        }

        // Ghost first so the falling piece covers it where they meet
        let ghost = state.ghost();
        for cell in ghost.cells() {
            self.paint_cell(fb, origin, cell, GHOST_CHAR, block_style(ghost.colour).dim());
        }
        let current = state.current();
        for cell in current.cells() {
            self.paint_cell(fb, origin, cell, BLOCK_CHAR, block_style(current.colour).bold());
        }

        self.draw_side_panel(fb, state, viewport, origin.x + frame_w + 2, origin.y);

        if state.game_over() {
            draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Paint one board cell; cells above or outside the board are skipped
    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        (x, y): (i8, i8),
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let px = origin.x + 1 + x as u16 * self.cell_w;
        let py = origin.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = top;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, state.next(), panel_x, y);
        y += 3;

        for (name, number) in [
            ("SCORE", state.score()),
            ("HIGH", state.highscore()),
            ("LEVEL", state.level()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }
    }

    /// Draw a piece in spawn orientation inside a 4x2 box
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Tetromino, x: u16, y: u16) {
        let style = block_style(piece.colour);
        for (dx, dy) in shape_offsets(piece.shape) {
            // Offsets span x -2..=1 and y -1..=0
            let col = (dx + 2) as u16;
            let row = (dy + 1) as u16;
            fb.fill_rect(x + col * self.cell_w, y + row, self.cell_w, 1, BLOCK_CHAR, style);
        }
    }
}

fn block_style(colour: Colour) -> CellStyle {
    CellStyle::new(colour_rgb(colour), PLAY_BG)
}

fn draw_border(fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16) {
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
    let (x, y) = (origin.x, origin.y);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, origin: Origin, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = origin.x + frame_w.saturating_sub(text_w) / 2;
    let y = origin.y + frame_h / 2;
    fb.put_str(x, y, text, CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::Action;

    const VIEW: Viewport = Viewport {
        width: 60,
        height: 24,
    };

    fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    /// Frame origin for `VIEW` with 2-wide cells: ((60 - 22) / 2, (24 - 22) / 2)
    fn board_px(x: u16, y: u16) -> (u16, u16) {
        (19 + 1 + x * 2, 1 + 1 + y)
    }

    #[test]
    fn test_cell_width_sets_frame_size() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(3).frame_size(), (32, 22));
        // Zero-width cells are clamped to one column
        assert_eq!(GameView::new(0).frame_size(), (12, 22));
    }

    #[test]
    fn test_panel_labels() {
        let fb = GameView::default().render(&GameState::new(), VIEW);
        for label in ["NEXT", "SCORE", "HIGH", "LEVEL"] {
            assert!(screen_contains(&fb, label), "missing {}", label);
        }
        assert!(!screen_contains(&fb, "GAME OVER"));
    }

    #[test]
    fn test_ghost_drawn_dimmed_on_floor() {
        let state = GameState::new();
        let fb = GameView::default().render(&state, VIEW);
        let (px, py) = board_px(3, 19);
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, GHOST_CHAR);
        assert!(cell.style.dim);
        assert_eq!(cell.style.fg, colour_rgb(Colour::Goldenrod));
    }

    #[test]
    fn test_settled_cube_uses_its_colour() {
        let mut board = Board::new();
        board.fill(0, 19, Colour::Aqua);
        let state = GameState::new().with_board(board);
        let fb = GameView::default().render(&state, VIEW);
        let (px, py) = board_px(0, 19);
        assert_eq!(fb.get(px, py).unwrap().ch, BLOCK_CHAR);
        assert_eq!(fb.get(px + 1, py).unwrap().style.fg, colour_rgb(Colour::Aqua));
    }

    #[test]
    fn test_piece_above_board_not_drawn() {
        // The spawned I sits entirely in row -2
        let fb = GameView::default().render(&GameState::new(), VIEW);
        let (px, py) = board_px(3, 0);
        assert_eq!(fb.get(px, py).unwrap().ch, '·');
    }

    #[test]
    fn test_game_over_overlay() {
        let mut board = Board::new();
        board.fill(0, 0, Colour::Red);
        let mut state = GameState::new().with_board(board);
        while !state.game_over() {
            state = state.apply(Action::Tick, 0.5);
        }
        let fb = GameView::default().render(&state, VIEW);
        assert!(screen_contains(&fb, "GAME OVER"));
    }

    #[test]
    fn test_narrow_viewport_does_not_panic() {
        let fb = GameView::default().render(&GameState::new(), Viewport::new(10, 5));
        assert_eq!((fb.width(), fb.height()), (10, 5));
    }
}
