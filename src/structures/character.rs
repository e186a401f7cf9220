use std::{collections::HashMap, rc::Rc};

use serde::Serialize;

use super::{
    super::{
        game_data::resolve_names,
        parser::{ParsingError, Section},
    },
    GameItem,
};

/// A playable character, one per `[Name]` section of a characters file.
/// Base stats default to 0 when absent or empty; the inventory is parsed from
/// the `Inventory` key as comma-separated item names. Immutable once built.
///
/// A character does not own its items: the inventory holds shared references
/// into the item set loaded alongside it, so the same item may appear in any
/// number of inventories (and more than once in the same one).
#[derive(Debug, Serialize)]
pub struct PlayerCharacter {
    name: String,
    strength: i32,
    dexterity: i32,
    fortitude: i32,
    inventory: Vec<Rc<GameItem>>,
}

impl PlayerCharacter {
    /// Build one character from a committed section, resolving the names
    /// listed under the `Inventory` key against the given item lookup.
    /// Empty name tokens and names absent from the lookup are dropped
    /// silently; a missing or empty `Inventory` key yields an empty
    /// inventory.
    pub fn from_section(
        section: &Section,
        items: &HashMap<String, Rc<GameItem>>,
    ) -> Result<Self, ParsingError> {
        let inventory = match section.get_string("Inventory") {
            Some(list) if !list.is_empty() => {
                resolve_names(list.split(',').filter(|token| !token.is_empty()), items)
            }
            _ => Vec::new(),
        };
        Ok(PlayerCharacter {
            name: section.get_name().to_owned(),
            strength: section.get_integer("Strength")?,
            dexterity: section.get_integer("Dexterity")?,
            fortitude: section.get_integer("Fortitude")?,
            inventory,
        })
    }

    /// Get the name of the character, derived from the section header.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Get the character's base Strength stat, without item bonuses.
    pub fn get_strength(&self) -> i32 {
        self.strength
    }

    /// Get the character's base Dexterity stat, without item bonuses.
    pub fn get_dexterity(&self) -> i32 {
        self.dexterity
    }

    /// Get the character's base Fortitude stat, without item bonuses.
    pub fn get_fortitude(&self) -> i32 {
        self.fortitude
    }

    /// Get the character's inventory as an owned copy; mutating the returned
    /// vector never affects the character.
    pub fn get_inventory(&self) -> Vec<Rc<GameItem>> {
        self.inventory.clone()
    }

    /// The character's total strength: base Strength plus the attack bonus of
    /// every carried item.
    pub fn compute_total_strength(&self) -> i32 {
        self.strength
            + self
                .inventory
                .iter()
                .map(|item| item.get_attack_bonus())
                .sum::<i32>()
    }

    /// The character's total dexterity: base Dexterity plus the agility bonus
    /// of every carried item.
    pub fn compute_total_dexterity(&self) -> i32 {
        self.dexterity
            + self
                .inventory
                .iter()
                .map(|item| item.get_agility_bonus())
                .sum::<i32>()
    }

    /// The character's total fortitude: base Fortitude plus the defense bonus
    /// of every carried item.
    pub fn compute_total_fortitude(&self) -> i32 {
        self.fortitude
            + self
                .inventory
                .iter()
                .map(|item| item.get_defense_bonus())
                .sum::<i32>()
    }
}

#[cfg(test)]
mod tests {
    use super::{super::FromSection, *};

    fn make_item(name: &str, attack: i32, agility: i32, defense: i32) -> Rc<GameItem> {
        let mut section = Section::new(name.to_owned());
        section.insert("AttackBonus".to_owned(), attack.to_string());
        section.insert("AgilityBonus".to_owned(), agility.to_string());
        section.insert("DefenseBonus".to_owned(), defense.to_string());
        Rc::new(GameItem::from_section(&section).unwrap())
    }

    fn make_lookup(items: &[Rc<GameItem>]) -> HashMap<String, Rc<GameItem>> {
        items
            .iter()
            .map(|item| (item.get_name().to_owned(), item.clone()))
            .collect()
    }

    fn adventurer_section(inventory: &str) -> Section {
        let mut section = Section::new("Alric".to_owned());
        section.insert("Strength".to_owned(), "18".to_owned());
        section.insert("Dexterity".to_owned(), "12".to_owned());
        section.insert("Fortitude".to_owned(), "30".to_owned());
        section.insert("Inventory".to_owned(), inventory.to_owned());
        section
    }

    #[test]
    fn test_totals_with_full_inventory() {
        let items = [
            make_item("Battle Axe", 6, -2, 0),
            make_item("Chainmail", 0, -3, 4),
            make_item("Health Potion", 0, 0, 0),
        ];
        let lookup = make_lookup(&items);
        let section = adventurer_section("Battle Axe,Chainmail,Health Potion");
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        assert_eq!(character.get_inventory().len(), 3);
        assert_eq!(character.compute_total_strength(), 24);
        assert_eq!(character.compute_total_dexterity(), 7);
        assert_eq!(character.compute_total_fortitude(), 34);
    }

    #[test]
    fn test_missing_inventory_key() {
        let mut section = Section::new("Alric".to_owned());
        section.insert("Strength".to_owned(), "18".to_owned());
        let lookup = HashMap::new();
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        assert!(character.get_inventory().is_empty());
        assert_eq!(character.compute_total_strength(), 18);
    }

    #[test]
    fn test_empty_inventory_value() {
        let lookup = make_lookup(&[make_item("Battle Axe", 6, 0, 0)]);
        let section = adventurer_section("");
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        assert!(character.get_inventory().is_empty());
    }

    #[test]
    fn test_unresolved_item_dropped() {
        let lookup = make_lookup(&[
            make_item("Battle Axe", 6, -2, 0),
            make_item("Chainmail", 0, -3, 4),
        ]);
        let section = adventurer_section("Battle Axe,Rusty Spoon,Chainmail");
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        let inventory = character.get_inventory();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].get_name(), "Battle Axe");
        assert_eq!(inventory[1].get_name(), "Chainmail");
    }

    #[test]
    fn test_duplicate_items_allowed() {
        let lookup = make_lookup(&[make_item("Battle Axe", 6, 0, 0)]);
        let section = adventurer_section("Battle Axe,Battle Axe");
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        assert_eq!(character.get_inventory().len(), 2);
        assert_eq!(character.compute_total_strength(), 30);
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let section = Section::new("Nobody".to_owned());
        let character = PlayerCharacter::from_section(&section, &HashMap::new()).unwrap();
        assert_eq!(character.get_strength(), 0);
        assert_eq!(character.get_dexterity(), 0);
        assert_eq!(character.get_fortitude(), 0);
    }

    #[test]
    fn test_malformed_stat_is_an_error() {
        let mut section = Section::new("Alric".to_owned());
        section.insert("Strength".to_owned(), "mighty".to_owned());
        assert!(PlayerCharacter::from_section(&section, &HashMap::new()).is_err());
    }

    #[test]
    fn test_inventory_copy_out_isolation() {
        let lookup = make_lookup(&[make_item("Battle Axe", 6, 0, 0)]);
        let section = adventurer_section("Battle Axe");
        let character = PlayerCharacter::from_section(&section, &lookup).unwrap();
        let mut copy = character.get_inventory();
        copy.clear();
        assert_eq!(character.get_inventory().len(), 1);
    }
}
