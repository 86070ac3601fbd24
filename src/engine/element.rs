use std::{collections::HashMap, rc::Rc};
use color_space::Hsv;
use strum::IntoEnumIterator;

use super::container::ElementContainer;
use super::utility::*;

pub const WALL_GLYPH: &str = "■";
pub const FLOOR_GLYPH: &str = " ";

/// Stateless element holding every representation of itself, one per side.
///
/// An element is built once and shared by handle between any number of
/// [`ElementContainer`]s, which carry the per-cell state.
#[derive(Clone, Debug)]
pub struct Element {
    name: String,
    hsv: Hsv,
    representations: HashMap<Direction, String>,
}

impl Element {
    pub fn new(name: &str, hsv: Hsv, representations: HashMap<Direction, String>) -> Self {
        Self {
            name: name.to_string(),
            hsv,
            representations,
        }
    }

    pub fn from_pairs<'a>(
        name: &str,
        hsv: Hsv,
        pairs: impl IntoIterator<Item = (Direction, &'a str)>,
    ) -> Self {
        let representations = pairs
            .into_iter()
            .map(|(direction, glyph)| (direction, glyph.to_string()))
            .collect();
        Self::new(name, hsv, representations)
    }

    /// Element drawn with the same glyph on every side.
    pub fn uniform(name: &str, hsv: Hsv, glyph: &str) -> Self {
        Self::from_pairs(name, hsv, Direction::iter().map(|direction| (direction, glyph)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn has_repr(&self, direction: Direction) -> bool {
        self.representations.contains_key(&direction)
    }

    /// Sides without a representation render as the empty string.
    pub fn repr(&self, direction: Direction) -> &str {
        match self.representations.get(&direction) {
            Some(glyph) => glyph.as_str(),
            None => {
                tracing::trace!("{} has no representation for {:?}", self.name, direction);
                ""
            }
        }
    }
}

/// The elements every maze is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    Null,
    Wall,
    Floor,
}

impl Preset {
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '-' => Some(Preset::Null),
            '#' => Some(Preset::Wall),
            '.' => Some(Preset::Floor),
            _ => None,
        }
    }

    pub fn mark(&self) -> char {
        match self {
            Preset::Null => '-',
            Preset::Wall => '#',
            Preset::Floor => '.',
        }
    }
}

/// Shared instances of the preset elements.
///
/// Build one palette where a maze is assembled and hand it to whatever needs
/// containers; every container made from it points at the same three elements.
#[derive(Clone, Debug)]
pub struct Palette {
    pub null: Rc<Element>,
    pub wall: Rc<Element>,
    pub floor: Rc<Element>,
}

impl Palette {
    pub fn standard() -> Self {
        // the null element leaves the center out and relies on the empty default
        let null = Element::from_pairs(
            "null",
            Hsv::new(0.0, 0.0, 0.0),
            Direction::iter()
                .filter(|direction| !direction.is_center())
                .map(|direction| (direction, "")),
        );

        let wall = Element::from_pairs(
            "wall",
            Hsv::new(30.0, 0.25, 0.8),
            Direction::iter().map(|direction| {
                let glyph = if direction.is_center() { FLOOR_GLYPH } else { WALL_GLYPH };
                (direction, glyph)
            }),
        );

        let floor = Element::uniform("floor", Hsv::new(0.0, 0.0, 0.5), FLOOR_GLYPH);

        Self {
            null: Rc::new(null),
            wall: Rc::new(wall),
            floor: Rc::new(floor),
        }
    }

    pub fn element(&self, preset: Preset) -> &Rc<Element> {
        match preset {
            Preset::Null => &self.null,
            Preset::Wall => &self.wall,
            Preset::Floor => &self.floor,
        }
    }

    pub fn container(&self, preset: Preset, direction: Direction) -> ElementContainer {
        ElementContainer::new(direction, self.element(preset))
    }

    pub fn null(&self, direction: Direction) -> ElementContainer {
        self.container(Preset::Null, direction)
    }

    pub fn wall(&self, direction: Direction) -> ElementContainer {
        self.container(Preset::Wall, direction)
    }

    pub fn floor(&self, direction: Direction) -> ElementContainer {
        self.container(Preset::Floor, direction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unittest_wall_representations() {
        let palette = Palette::standard();
        for direction in Direction::iter() {
            let expected = if direction == Direction::Center { " " } else { "■" };
            assert_eq!(palette.wall.repr(direction), expected, "{direction:?}");
        }
    }

    #[test]
    fn unittest_floor_representations() {
        let palette = Palette::standard();
        for direction in Direction::iter() {
            assert_eq!(palette.floor.repr(direction), " ", "{direction:?}");
        }
    }

    #[test]
    fn unittest_missing_representation_is_empty() {
        let palette = Palette::standard();
        assert!(!palette.null.has_repr(Direction::Center));
        assert_eq!(palette.null.repr(Direction::Center), "");

        let sparse = Element::from_pairs("door", Hsv::new(0.0, 0.0, 1.0), [(Direction::North, "+")]);
        assert_eq!(sparse.repr(Direction::North), "+");
        assert_eq!(sparse.repr(Direction::South), "");
        assert_eq!(sparse.name(), "door");
    }

    #[test]
    fn unittest_preset_marks() {
        for preset in [Preset::Null, Preset::Wall, Preset::Floor] {
            assert_eq!(Preset::from_mark(preset.mark()), Some(preset));
        }
        assert_eq!(Preset::from_mark('x'), None);
    }

    #[test]
    fn unittest_palette_containers_share_elements() {
        let palette = Palette::standard();
        let a = palette.wall(Direction::North);
        let b = palette.container(Preset::Wall, Direction::South);
        assert!(Rc::ptr_eq(a.element(), &palette.wall));
        assert!(a.shares_element(&b));
        assert!(!a.shares_element(&palette.floor(Direction::North)));
    }
}
