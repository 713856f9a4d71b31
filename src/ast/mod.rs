pub mod item;
pub mod pattern;
pub mod term;

use item::Item;

/// A parsed program: items in source order, sugar intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}
