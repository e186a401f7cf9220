use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
    rc::Rc,
};

use serde::Serialize;

use super::{super::game_data::GameDataError, PlayerCharacter};

/// A named roster of characters. Unlike items and characters, a party stays
/// mutable after loading: members can be added and removed.
///
/// The roster is ordered and duplicate-free; membership is tracked by object
/// identity, so two distinct characters that happen to share a name can both
/// be members.
#[derive(Debug, Serialize)]
pub struct Party {
    /// The party name; None if the `[Party]` section never carried one.
    name: Option<String>,
    members: Vec<Rc<PlayerCharacter>>,
}

impl Party {
    /// Create a new empty party.
    pub fn new(name: Option<String>) -> Self {
        Party {
            name,
            members: Vec::new(),
        }
    }

    /// Get the name of the party, if it has one.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the roster as an owned copy; mutating the returned vector never
    /// affects the party.
    pub fn get_members(&self) -> Vec<Rc<PlayerCharacter>> {
        self.members.clone()
    }

    /// Get the number of members in the party.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the party has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a character to the end of the roster. Re-adding a character that
    /// is already a member is a no-op.
    pub fn add_member(&mut self, character: Rc<PlayerCharacter>) {
        if !self
            .members
            .iter()
            .any(|member| Rc::ptr_eq(member, &character))
        {
            self.members.push(character);
        }
    }

    /// Remove a character from the roster. Removing a character that is not a
    /// member is a no-op.
    pub fn remove_member(&mut self, character: &Rc<PlayerCharacter>) {
        self.members.retain(|member| !Rc::ptr_eq(member, character));
    }

    /// The combined attack rating of the party: the sum of every member's
    /// total strength.
    pub fn compute_combined_attack_rating(&self) -> i32 {
        self.members
            .iter()
            .map(|member| member.compute_total_strength())
            .sum()
    }

    /// Serialize the party back into section format as `<name>.ini` inside
    /// the given directory, creating the directory if it does not exist yet.
    /// The file holds a `[Party]` section with the name and a `[Members]`
    /// section with one `<index>=<member name>` line per member in roster
    /// order. A party without a name cannot be stored, as there is no file
    /// name to derive.
    pub fn store(&self, directory: &Path) -> Result<(), GameDataError> {
        let name = self
            .name
            .as_ref()
            .ok_or(GameDataError::InvalidData("cannot store a nameless party"))?;
        create_dir_all(directory)?;
        let file = File::create(directory.join(format!("{}.ini", name)))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "[Party]")?;
        writeln!(writer, "Name={}", name)?;
        writeln!(writer, "[Members]")?;
        for (index, member) in self.members.iter().enumerate() {
            writeln!(writer, "{}={}", index, member.get_name())?;
        }
        writer.flush()?;
        Ok(())
    }
}
