//! Terminal rendering for mazes.
//!
//! Provides a [`Renderer`] that prints a [`Grid`] in its textual encoding,
//! optionally overlaying a [`Path`] whose free cells are drawn as `*` in
//! colour via crossterm, and [`format_path`] for the coordinate listing.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use maze_core::{Cell, Grid, Position};
use maze_paths::Path;

/// Colour of path cells.
pub const PATH_COLOR: Color = Color::Red;

/// Character drawn on free cells the path passes through.
pub const PATH_MARK: char = '*';

/// Writes grids to any [`Write`] sink, one row per line.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    path_color: Color,
}

impl Renderer {
    /// Create a renderer with colour enabled.
    pub fn new() -> Self {
        Self {
            color: true,
            path_color: PATH_COLOR,
        }
    }

    /// Configure whether escape sequences are emitted.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Override the path colour.
    pub fn with_path_color(mut self, color: Color) -> Self {
        self.path_color = color;
        self
    }

    /// Print the grid tokens.
    pub fn draw_grid<W: Write>(&self, w: &mut W, grid: &Grid) -> io::Result<()> {
        self.draw(w, grid, &HashSet::new())
    }

    /// Print the grid with `path` highlighted. Start and End keep their
    /// tokens; every other cell on the path becomes [`PATH_MARK`].
    pub fn draw_path<W: Write>(&self, w: &mut W, grid: &Grid, path: &Path) -> io::Result<()> {
        let on_path: HashSet<Position> = path.iter().copied().collect();
        self.draw(w, grid, &on_path)
    }

    fn draw<W: Write>(&self, w: &mut W, grid: &Grid, on_path: &HashSet<Position>) -> io::Result<()> {
        for (r, row) in grid.iter_rows().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if c > 0 {
                    queue!(w, Print(' '))?;
                }
                let pos = Position::new(r as i32, c as i32);
                let marked = on_path.contains(&pos) && !matches!(cell, Cell::Start | Cell::End);
                if !marked {
                    queue!(w, Print(cell.token()))?;
                } else if self.color {
                    queue!(
                        w,
                        SetForegroundColor(self.path_color),
                        Print(PATH_MARK),
                        ResetColor
                    )?;
                } else {
                    queue!(w, Print(PATH_MARK))?;
                }
            }
            queue!(w, Print('\n'))?;
        }
        w.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// List path coordinates, tagging the Start entry with `s` and the End
/// entry with `e`: `[s(0, 0), (1, 0), e(1, 1)]`.
pub fn format_path(grid: &Grid, path: &Path) -> String {
    let items: Vec<String> = path
        .iter()
        .map(|&p| {
            let tag = match grid.at(p) {
                Some(Cell::Start) => "s",
                Some(Cell::End) => "e",
                _ => "",
            };
            format!("{tag}{p}")
        })
        .collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::{SearchMode, find_path};

    fn render(r: Renderer, grid: &Grid, path: Option<&Path>) -> String {
        let mut out = Vec::new();
        match path {
            Some(p) => r.draw_path(&mut out, grid, p).unwrap(),
            None => r.draw_grid(&mut out, grid).unwrap(),
        }
        String::from_utf8(out).unwrap()
    }

    fn solved() -> (Grid, Path) {
        let grid: Grid = "S 0 0\n1 1 0\nE 0 0".parse().unwrap();
        let path = find_path(&grid, SearchMode::Full).unwrap();
        (grid, path)
    }

    #[test]
    fn plain_grid() {
        let (grid, _) = solved();
        let out = render(Renderer::new().with_color(false), &grid, None);
        assert_eq!(out, "S 0 0\n1 1 0\nE 0 0\n");
    }

    #[test]
    fn path_overlay_without_color() {
        let (grid, path) = solved();
        let out = render(Renderer::new().with_color(false), &grid, Some(&path));
        assert_eq!(out, "S * *\n1 1 *\nE * *\n");
    }

    #[test]
    fn path_overlay_with_color() {
        let (grid, path) = solved();
        let out = render(Renderer::new(), &grid, Some(&path));
        assert!(out.contains('\u{1b}'));
        assert_eq!(out.matches(PATH_MARK).count(), 5);
        assert!(out.starts_with("S "));
    }

    #[test]
    fn grid_without_path_has_no_escapes() {
        let (grid, _) = solved();
        let out = render(Renderer::new(), &grid, None);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn coordinates_tag_endpoints() {
        let (grid, path) = solved();
        assert_eq!(
            format_path(&grid, &path),
            "[s(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), e(2, 0)]"
        );
    }
}
