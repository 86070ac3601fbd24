use std::{fmt, rc::Rc};
use eyre::WrapErr;
use strum::IntoEnumIterator;

use super::container::ElementContainer;
use super::element::*;
use super::utility::*;

/// A 3x3 tile of a maze, one container per cell.
#[derive(Clone, Debug)]
pub struct Block {
    grid: [[ElementContainer; BLOCK_SIZE]; BLOCK_SIZE],
    pos: Pos,
}

impl Block {
    /// A block whose cells are all null.
    pub fn new(palette: &Palette) -> Self {
        Self::filled(&palette.null)
    }

    /// A block with every cell bound to `element`, each on its own side.
    pub fn filled(element: &Rc<Element>) -> Self {
        Self {
            grid: std::array::from_fn(|row| {
                std::array::from_fn(|col| ElementContainer::new(GRID[row][col], element))
            }),
            pos: Pos::default(),
        }
    }

    /// Installs the given containers as they are laid out, pointing each one
    /// at the side of the cell it lands in.
    pub fn from_grid(mut grid: [[ElementContainer; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, container) in line.iter_mut().enumerate() {
                container.set_direction(GRID[row][col]);
            }
        }
        Self { grid, pos: Pos::default() }
    }

    /// Walls all around a floor.
    pub fn walled(palette: &Palette) -> Self {
        let mut block = Self::new(palette);
        for direction in Direction::iter() {
            if direction.is_center() {
                block.set_container(palette.floor(direction));
            } else {
                block.set_container(palette.wall(direction));
            }
        }
        block
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&ElementContainer> {
        self.grid.get(row)?.get(col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ElementContainer; BLOCK_SIZE]> {
        self.grid.iter()
    }

    /// Puts `container` in the cell its own direction maps to, dropping
    /// whatever was there.
    pub fn set_container(&mut self, container: ElementContainer) {
        let (row, col) = side_to_index(container.direction());
        let cell = &mut self.grid[row][col];
        tracing::debug!(
            "cell ({row}, {col}): {} -> {}",
            cell.element().name(),
            container.element().name()
        );
        *cell = container;
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.pos = Pos(x, y);
    }

    pub fn render(&self) -> Vec<Vec<&str>> {
        self.rows()
            .map(|row| row.iter().map(|container| container.repr()).collect())
            .collect()
    }

    /// Rendered rows with cells separated by a single space.
    pub fn render_rows(&self) -> Vec<String> {
        self.render().iter().map(|row| row.join(" ")).collect()
    }

    /// Layout
    /// ```plain
    /// position 2 -1   (optional header)
    /// #               (end of header)
    /// # # #
    /// # . #
    /// # # #
    /// ```
    ///
    /// Marks: `#` wall, `.` floor, `-` null.
    pub fn parse(text: &str, palette: &Palette) -> eyre::Result<Self> {
        let mut block = Self::new(palette);

        // whether we're still reading the header
        let mut reading_header = true;
        let mut row = 0;

        let mut process = |line: &str| -> eyre::Result<()> {
            let parts = line.split_ascii_whitespace().collect::<Vec<_>>();

            if reading_header {
                if line.trim() == "#" {
                    reading_header = false;
                    return Ok(());
                }
                match parts.first() {
                    Some(&"position") => {
                        if parts.len() != 3 {
                            eyre::bail!("Expected `position <x> <y>`");
                        }
                        let x = parts[1].parse::<i32>().wrap_err("Invalid x position")?;
                        let y = parts[2].parse::<i32>().wrap_err("Invalid y position")?;
                        block.set_position(x, y);
                    }
                    _ => {}
                }
                return Ok(());
            }

            if parts.is_empty() {
                return Ok(());
            }
            if row >= BLOCK_SIZE {
                eyre::bail!("Too many rows, a block has {BLOCK_SIZE}");
            }
            if parts.len() != BLOCK_SIZE {
                eyre::bail!("Expected {BLOCK_SIZE} cells, found {}", parts.len());
            }

            for (col, part) in parts.iter().enumerate() {
                let mut chars = part.chars();
                let preset = match (chars.next(), chars.next()) {
                    (Some(mark), None) => Preset::from_mark(mark),
                    _ => None,
                };
                let Some(preset) = preset else {
                    eyre::bail!("Unknown mark {part}");
                };
                block.set_container(palette.container(preset, GRID[row][col]));
            }
            row += 1;

            Ok(())
        };

        for (lineno, line) in text.lines().enumerate() {
            process(line).wrap_err_with(|| format!("{} | {}", lineno + 1, line))?;
        }

        if reading_header {
            eyre::bail!("Missing `#` after the header");
        }
        if row != BLOCK_SIZE {
            eyre::bail!("Expected {BLOCK_SIZE} rows, found {row}");
        }

        tracing::debug!("parsed block at {:?}", block.position());
        Ok(block)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_rows().join("\n"))
    }
}
