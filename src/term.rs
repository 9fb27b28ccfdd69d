use crate::error::SolarError;
use crate::raster::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

// One braille glyph shows a 2x4 block of pixels, so the full 320x200
// surface needs 160x50 cells.
pub(crate) const CELL_COLS: u16 = (SCREEN_WIDTH / 2) as u16;
pub(crate) const CELL_ROWS: u16 = (SCREEN_HEIGHT / 4) as u16;

const TICK_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// The presentation surface: alternate screen in raw mode, the indexed
/// frame buffer mapped onto braille cells colored through the terminal's
/// own 256-color palette, diff-rendered against the previous frame.
pub(crate) struct Surface {
    out: Stdout,
    cols: u16,
    rows: u16,
    prev: Vec<Cell>,
    cur: Vec<Cell>,
}

impl Surface {
    /// The pixel-mode switch: alternate screen, raw mode, hidden cursor.
    pub(crate) fn enter() -> Result<Self, SolarError> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (w, h) = terminal::size()?;
        let cols = w.min(CELL_COLS);
        let rows = h.min(CELL_ROWS);
        let n = cols as usize * rows as usize;
        Ok(Self {
            out,
            cols,
            rows,
            prev: vec![Cell::blank(); n],
            cur: vec![Cell::blank(); n],
        })
    }

    /// Restore the terminal; runs on every exit path.
    pub(crate) fn leave(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Copy the full off-screen buffer to the visible surface, once per
    /// tick. Blocks past the actual terminal size are clipped.
    pub(crate) fn present(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                self.cur[cy as usize * self.cols as usize + cx as usize] =
                    cell_for_block(fb, cx, cy);
            }
        }

        queue!(self.out, BeginSynchronizedUpdate, SetBackgroundColor(Color::Black))?;
        let mut last_fg = None;
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                let i = cy as usize * self.cols as usize + cx as usize;
                let cell = self.cur[i];
                if cell == self.prev[i] {
                    continue;
                }
                self.prev[i] = cell;

                queue!(self.out, cursor::MoveTo(cx, cy))?;
                if last_fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(cell.fg))?;
                    last_fg = Some(cell.fg);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

/// Fixed per-tick frame pacing.
pub(crate) fn pace() {
    std::thread::sleep(TICK_DELAY);
}

// Braille dot positions within the 2x4 block.
fn braille_bit(dx: i32, dy: i32) -> u8 {
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0x00,
    }
}

/// One cell from a 2x4 pixel block: a dot per nonzero palette index, the
/// foreground taken from the block's dominant nonzero index through the
/// terminal's 256-color palette.
fn cell_for_block(fb: &FrameBuffer, cx: u16, cy: u16) -> Cell {
    let mut mask: u32 = 0;
    let mut inked = [0u8; 8];
    let mut n = 0;

    for dy in 0..4 {
        for dx in 0..2 {
            let v = fb.get(cx as i32 * 2 + dx, cy as i32 * 4 + dy);
            if v != 0 {
                mask |= braille_bit(dx, dy) as u32;
                inked[n] = v;
                n += 1;
            }
        }
    }

    if n == 0 {
        return Cell::blank();
    }

    Cell {
        ch: char::from_u32(0x2800 + mask).unwrap_or(' '),
        fg: Color::AnsiValue(dominant(&inked[..n])),
    }
}

// Most frequent value; first seen wins a tie.
fn dominant(vals: &[u8]) -> u8 {
    let mut best = vals[0];
    let mut best_n = 0;
    for &v in vals {
        let n = vals.iter().filter(|&&w| w == v).count();
        if n > best_n {
            best = v;
            best_n = n;
        }
    }
    best
}
