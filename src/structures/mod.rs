use super::parser::{ParsingError, Section};

/// A submodule that provides the [GameItem] object.
mod item;
pub use item::GameItem;

/// A submodule that provides the [PlayerCharacter] object.
mod character;
pub use character::PlayerCharacter;

/// A submodule that provides the [Party] object, including the write path
/// back into section format.
mod party;
pub use party::Party;

/// A trait for objects that can be built from a single committed [Section]
/// with no outside context. Builders that need a lookup table built from a
/// previous load pass (characters, parties) take it as an extra argument
/// instead of implementing this.
pub trait FromSection: Sized {
    /// Build one object from the section's name and properties, called once
    /// per committed section in encounter order. The order in which the
    /// properties appeared must not affect the result.
    fn from_section(section: &Section) -> Result<Self, ParsingError>;
}
