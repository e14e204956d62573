//! Turns a grid and a solved path into something a person can look at.
//!
//! The route is coloured with a gradient running from blue at the start to
//! red at the end, over every grid position it crosses, walls included.

use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::{
    maze::{Grid, GridCell},
    solvers::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Colour of every grid position along `path`, in route order.
pub fn gradient(path: &Path) -> Vec<((usize, usize), Rgb)> {
    let offset = 255.0 / (2 * path.len().max(1)) as f64;
    path.grid_positions()
        .into_iter()
        .enumerate()
        .map(|(i, pos)| {
            let shift = (i as f64 * offset).min(255.0);
            let rgb = Rgb {
                r: shift as u8,
                g: 0,
                b: (255.0 - shift) as u8,
            };
            (pos, rgb)
        })
        .collect()
}

/// A grid with an optional coloured route painted over it.
pub struct Canvas<'a> {
    grid: &'a Grid,
    route: Vec<Option<Rgb>>,
}

impl<'a> Canvas<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Canvas {
            grid,
            route: vec![None; grid.height() * grid.width()],
        }
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        for ((x, y), rgb) in gradient(path) {
            if self.grid.in_bounds(x, y) {
                self.route[x * self.grid.width() + y] = Some(rgb);
            }
        }
        self
    }

    /// Route colour at a grid position, if the route crosses it.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        if !self.grid.in_bounds(x, y) {
            return None;
        }
        self.route[x * self.grid.width() + y]
    }
}

impl fmt::Display for Canvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.grid.height() {
            for y in 0..self.grid.width() {
                match self.color_at(x, y) {
                    Some(rgb) => write!(f, "{}", "██".with(rgb.into()))?,
                    None => write!(f, "{}", self.grid[(x, y)])?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Plain-text rendering without colours: `#` for walls, `.` for the route.
pub fn to_ascii(grid: &Grid, path: Option<&Path>) -> String {
    let canvas = match path {
        Some(path) => Canvas::new(grid).with_path(path),
        None => Canvas::new(grid),
    };
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for x in 0..grid.height() {
        for y in 0..grid.width() {
            out.push(match (canvas.color_at(x, y), grid[(x, y)]) {
                (Some(_), _) => '.',
                (None, GridCell::Passage) => ' ',
                (None, GridCell::Wall) => '#',
            });
        }
        out.push('\n');
    }
    out
}
