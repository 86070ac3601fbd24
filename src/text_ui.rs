use std::{io::Write, path::Path};
use eyre::WrapErr;
use crossterm::{style::{self, Stylize}, QueueableCommand};
use color_space::{ToRgb, Hsv};
use strum::IntoEnumIterator;

use crate::engine::*;

/// Reads and parses a block layout file.
pub fn load_layout(path: &Path, palette: &Palette) -> eyre::Result<Block> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    Block::parse(&text, palette).wrap_err_with(|| format!("parsing {}", path.display()))
}

pub fn color_from_hsv(hsv: Hsv) -> style::Color {
    let rgb = hsv.to_rgb();
    style::Color::Rgb { r: rgb.r as u8, g: rgb.g as u8, b: rgb.b as u8 }
}

/// Writes one line of glyphs separated by single spaces, tinted unless `plain`.
pub fn print_cells<'a>(
    out: &mut impl Write,
    cells: impl IntoIterator<Item = (&'a str, Hsv)>,
    plain: bool,
) -> crossterm::Result<()> {
    for (i, (glyph, hsv)) in cells.into_iter().enumerate() {
        if i > 0 {
            out.queue(style::Print(' '))?;
        }
        if plain {
            out.queue(style::Print(glyph))?;
        } else {
            out.queue(style::PrintStyledContent(
                style::style(glyph).with(color_from_hsv(hsv))
            ))?;
        }
    }
    out.queue(style::Print('\n'))?;
    Ok(())
}

pub fn print_block(out: &mut impl Write, block: &Block, plain: bool) -> crossterm::Result<()> {
    for row in block.rows() {
        print_cells(out, row.iter().map(|c| (c.repr(), c.element().hsv())), plain)?;
    }
    Ok(())
}

pub fn flyweight_demo(palette: &Palette, out: &mut impl Write, plain: bool) -> crossterm::Result<()> {
    let wall = &palette.wall;

    writeln!(out, "Accessing NORTH representation of the wall element.")?;
    print_cells(out, [(wall.repr(Direction::North), wall.hsv())], plain)?;
    writeln!(out)?;

    writeln!(out, "Accessing all representations of the wall element.")?;
    let sides: Vec<Direction> = Direction::iter().collect();
    for row in sides.chunks(BLOCK_SIZE) {
        print_cells(out, row.iter().map(|d| (wall.repr(*d), wall.hsv())), plain)?;
    }
    writeln!(out)?;

    writeln!(out, "Accessing NORTH representation of the wall via a container.")?;
    let container = palette.wall(Direction::North);
    print_cells(out, [(container.repr(), container.element().hsv())], plain)?;
    writeln!(out)?;

    writeln!(out, "Creating a matrix from wall containers.")?;
    let block = Block::from_grid(std::array::from_fn(|row| {
        std::array::from_fn(|col| palette.wall(GRID[row][col]))
    }));
    print_block(out, &block, plain)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> crossterm::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unittest_plain_block_output() {
        let palette = Palette::standard();
        let block = Block::walled(&palette);
        let text = written(|out| print_block(out, &block, true));
        assert_eq!(text, "■ ■ ■\n■   ■\n■ ■ ■\n");
    }

    #[test]
    fn unittest_coloured_output_wraps_glyphs() {
        let palette = Palette::standard();
        let block = Block::walled(&palette);
        let text = written(|out| print_block(out, &block, false));
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.lines().count(), BLOCK_SIZE);
    }

    #[test]
    fn unittest_load_layout() -> eyre::Result<()> {
        let palette = Palette::standard();
        let block = load_layout(Path::new("layouts/room.txt"), &palette)?;
        assert_eq!(block.render_rows(), Block::walled(&palette).render_rows());
        Ok(())
    }

    #[test]
    fn unittest_load_layout_names_the_file() {
        let palette = Palette::standard();

        let missing = Path::new("layouts/does-not-exist.txt");
        let message = format!("{:#}", load_layout(missing, &palette).unwrap_err());
        assert!(message.contains("reading layouts/does-not-exist.txt"), "{message}");

        let dir = std::env::temp_dir().join(format!("flyweight-maze-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("broken.txt");
        std::fs::write(&broken, "#\n# # #\n# x #\n# # #\n").unwrap();
        let message = format!("{:#}", load_layout(&broken, &palette).unwrap_err());
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(message.contains(&format!("parsing {}", broken.display())), "{message}");
        assert!(message.contains("3 | # x #"), "{message}");
    }

    #[test]
    fn unittest_flyweight_demo_plain() {
        let palette = Palette::standard();
        let text = written(|out| flyweight_demo(&palette, out, true));
        let lines: Vec<&str> = text.lines().collect();

        assert!(!text.contains('\u{1b}'));
        assert_eq!(lines[0], "Accessing NORTH representation of the wall element.");
        assert_eq!(lines[1], "■");
        assert_eq!(&lines[4..7], &["■ ■ ■", "■   ■", "■ ■ ■"]);
        assert_eq!(lines[9], "■");
        assert_eq!(&lines[12..15], &["■ ■ ■", "■   ■", "■ ■ ■"]);
    }
}
