use serde::Serialize;

use super::{
    super::parser::{ParsingError, Section},
    FromSection,
};

/// A single item definition, one per `[Name]` section of an items file.
/// The section header is the item's unique name; every recognized numeric
/// property defaults to 0 when absent or empty. Immutable once built.
///
/// Items are owned by the loaded item set; characters reference them, they
/// never own them.
#[derive(Debug, Serialize)]
pub struct GameItem {
    name: String,
    value: i32,
    weight: i32,
    attack_bonus: i32,
    agility_bonus: i32,
    defense_bonus: i32,
}

impl GameItem {
    /// Get the name of the item, derived from the section header.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Get the value of the item in gold pieces.
    pub fn get_value(&self) -> i32 {
        self.value
    }

    /// Get the weight of the item in kilograms.
    pub fn get_weight(&self) -> i32 {
        self.weight
    }

    /// Get the attack bonus the item grants its carrier.
    pub fn get_attack_bonus(&self) -> i32 {
        self.attack_bonus
    }

    /// Get the agility bonus the item grants its carrier.
    pub fn get_agility_bonus(&self) -> i32 {
        self.agility_bonus
    }

    /// Get the defense bonus the item grants its carrier.
    pub fn get_defense_bonus(&self) -> i32 {
        self.defense_bonus
    }
}

impl FromSection for GameItem {
    fn from_section(section: &Section) -> Result<Self, ParsingError> {
        // keys are matched by exact case, anything unrecognized is ignored
        Ok(GameItem {
            name: section.get_name().to_owned(),
            value: section.get_integer("Value")?,
            weight: section.get_integer("Weight")?,
            attack_bonus: section.get_integer("AttackBonus")?,
            agility_bonus: section.get_integer("AgilityBonus")?,
            defense_bonus: section.get_integer("DefenseBonus")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_section() {
        let mut section = Section::new("Heavy Sword".to_owned());
        section.insert("Weight".to_owned(), "10".to_owned());
        section.insert("Value".to_owned(), "50".to_owned());
        section.insert("AttackBonus".to_owned(), "7".to_owned());
        section.insert("AgilityBonus".to_owned(), "-2".to_owned());
        section.insert("DefenseBonus".to_owned(), "1".to_owned());
        let item = GameItem::from_section(&section).unwrap();
        assert_eq!(item.get_name(), "Heavy Sword");
        assert_eq!(item.get_weight(), 10);
        assert_eq!(item.get_value(), 50);
        assert_eq!(item.get_attack_bonus(), 7);
        assert_eq!(item.get_agility_bonus(), -2);
        assert_eq!(item.get_defense_bonus(), 1);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let section = Section::new("Health Potion".to_owned());
        let item = GameItem::from_section(&section).unwrap();
        assert_eq!(item.get_value(), 0);
        assert_eq!(item.get_weight(), 0);
        assert_eq!(item.get_attack_bonus(), 0);
        assert_eq!(item.get_agility_bonus(), 0);
        assert_eq!(item.get_defense_bonus(), 0);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let mut section = Section::new("Cloak".to_owned());
        section.insert("Color".to_owned(), "grey".to_owned());
        section.insert("weight".to_owned(), "4".to_owned());
        let item = GameItem::from_section(&section).unwrap();
        // `weight` differs in case from `Weight` and must not be picked up
        assert_eq!(item.get_weight(), 0);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let mut section = Section::new("Cloak".to_owned());
        section.insert("Weight".to_owned(), "light".to_owned());
        assert!(GameItem::from_section(&section).is_err());
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let mut first = Section::new("Axe".to_owned());
        first.insert("Value".to_owned(), "20".to_owned());
        first.insert("AttackBonus".to_owned(), "6".to_owned());
        let mut second = Section::new("Axe".to_owned());
        second.insert("AttackBonus".to_owned(), "6".to_owned());
        second.insert("Value".to_owned(), "20".to_owned());
        let a = GameItem::from_section(&first).unwrap();
        let b = GameItem::from_section(&second).unwrap();
        assert_eq!(a.get_value(), b.get_value());
        assert_eq!(a.get_attack_bonus(), b.get_attack_bonus());
    }
}
