use std::rc::Rc;

use super::element::Element;
use super::utility::*;

/// Stateful proxy in front of a shared [`Element`].
///
/// The container only remembers which side it stands for; the glyphs stay in
/// the element it points at.
#[derive(Clone, Debug)]
pub struct ElementContainer {
    direction: Direction,
    element: Rc<Element>,
}

impl ElementContainer {
    pub fn new(direction: Direction, element: &Rc<Element>) -> Self {
        Self {
            direction,
            element: Rc::clone(element),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn element(&self) -> &Rc<Element> {
        &self.element
    }

    pub fn set_element(&mut self, element: &Rc<Element>) {
        self.element = Rc::clone(element);
    }

    pub fn repr(&self) -> &str {
        self.element.repr(self.direction)
    }

    pub fn shares_element(&self, other: &ElementContainer) -> bool {
        Rc::ptr_eq(&self.element, &other.element)
    }
}
