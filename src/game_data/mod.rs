mod loader;
pub use loader::{load_characters, load_items, load_parties, resolve_names, GameDataError};

use std::rc::Rc;

use serde::Serialize;

use super::structures::{GameItem, Party, PlayerCharacter};

/// Everything loaded from one campaign in one pass: items first, then
/// characters (inventories resolved against those items), then parties
/// (rosters resolved against those characters). The name lookup tables built
/// along the way live only inside the pass; objects are only valid relative
/// to the other objects of the same pass.
#[derive(Serialize)]
pub struct GameData {
    items: Vec<Rc<GameItem>>,
    characters: Vec<Rc<PlayerCharacter>>,
    parties: Vec<Party>,
}

impl GameData {
    /// Assemble loaded campaign data. Callers are responsible for the load
    /// order: items before characters before parties.
    pub fn new(
        items: Vec<Rc<GameItem>>,
        characters: Vec<Rc<PlayerCharacter>>,
        parties: Vec<Party>,
    ) -> Self {
        GameData {
            items,
            characters,
            parties,
        }
    }

    /// Get the loaded items, in file order.
    pub fn get_items(&self) -> &[Rc<GameItem>] {
        &self.items
    }

    /// Get the loaded characters, in file order.
    pub fn get_characters(&self) -> &[Rc<PlayerCharacter>] {
        &self.characters
    }

    /// Get the loaded parties, ordered by party file name.
    pub fn get_parties(&self) -> &[Party] {
        &self.parties
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{parser::Section, structures::FromSection},
        *,
    };

    #[test]
    fn test_serialize() {
        let mut section = Section::new("Battle Axe".to_owned());
        section.insert("AttackBonus".to_owned(), "6".to_owned());
        let item = Rc::new(GameItem::from_section(&section).unwrap());
        let mut party = Party::new(Some("Vanguard".to_owned()));
        let character = Rc::new(
            PlayerCharacter::from_section(&Section::new("Alric".to_owned()), &Default::default())
                .unwrap(),
        );
        party.add_member(character.clone());
        let data = GameData::new(vec![item], vec![character], vec![party]);
        assert_eq!(data.get_items().len(), 1);
        assert_eq!(data.get_characters().len(), 1);
        assert_eq!(data.get_parties()[0].get_name(), Some("Vanguard"));
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"Battle Axe\""));
        assert!(json.contains("\"Vanguard\""));
    }
}
