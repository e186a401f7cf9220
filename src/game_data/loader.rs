use std::{
    collections::HashMap,
    error,
    fs::{read_dir, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
    rc::Rc,
};

use derive_more::{Display, From};

use super::super::{
    parser::{ParsingError, ScanError, Section, SectionError, SectionReader},
    structures::{FromSection, GameItem, Party, PlayerCharacter},
};

/// The file extension recognized for party files, matched ASCII
/// case-insensitively.
const PARTY_EXTENSION: &str = ".ini";

/// An error that occurred while loading campaign data.
#[derive(Debug, Display, From)]
pub enum GameDataError {
    /// The target file or directory could not be opened or read.
    #[display("io error: {_0}")]
    IOError(io::Error),
    ParsingError(ParsingError),
    JsonError(serde_json::Error),
    /// The data is invalid in some way with description
    #[display("the data is invalid: {_0}")]
    InvalidData(&'static str),
}

impl error::Error for GameDataError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GameDataError::IOError(err) => Some(err),
            GameDataError::ParsingError(err) => Some(err),
            GameDataError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScanError> for GameDataError {
    fn from(value: ScanError) -> Self {
        GameDataError::ParsingError(value.into())
    }
}

impl From<SectionError> for GameDataError {
    fn from(value: SectionError) -> Self {
        GameDataError::ParsingError(value.into())
    }
}

/// Resolve an ordered sequence of name tokens against a name lookup table,
/// preserving the order of the tokens that resolve and silently dropping the
/// rest. Shared between character inventory resolution and party roster
/// resolution.
pub fn resolve_names<'a, T>(
    names: impl IntoIterator<Item = &'a str>,
    lookup: &HashMap<String, Rc<T>>,
) -> Vec<Rc<T>> {
    names
        .into_iter()
        .filter_map(|name| lookup.get(name).cloned())
        .collect()
}

/// Build the transient name lookup table used during one load pass.
/// The table is only valid against objects from that same pass.
fn build_lookup<T, F: Fn(&T) -> &str>(objects: &[Rc<T>], name: F) -> HashMap<String, Rc<T>> {
    objects
        .iter()
        .map(|object| (name(object).to_owned(), object.clone()))
        .collect()
}

/// The generic scan-and-build pass over one file: one built element per
/// committed section, in section encounter order. The file handle is released
/// before this returns, on every exit path.
fn load_sections<T, F>(path: &Path, mut build: F) -> Result<Vec<T>, GameDataError>
where
    F: FnMut(Section) -> Result<T, ParsingError>,
{
    let file = File::open(path)?;
    let mut result = Vec::new();
    for section in SectionReader::new(BufReader::new(file)) {
        result.push(build(section?)?);
    }
    Ok(result)
}

/// Read all item definitions from an items file, in section order.
pub fn load_items(path: &Path) -> Result<Vec<Rc<GameItem>>, GameDataError> {
    load_sections(path, |section| {
        GameItem::from_section(&section).map(Rc::new)
    })
}

/// Read all characters from a characters file, in section order, resolving
/// each inventory against the given item set.
pub fn load_characters(
    path: &Path,
    all_items: &[Rc<GameItem>],
) -> Result<Vec<Rc<PlayerCharacter>>, GameDataError> {
    let lookup = build_lookup(all_items, |item| item.get_name());
    load_sections(path, |section| {
        PlayerCharacter::from_section(&section, &lookup).map(Rc::new)
    })
}

/// Read every party file in a directory, resolving rosters against the given
/// character set. A party file is any regular file whose name ends in `.ini`
/// (ASCII case-insensitive); everything else in the directory is skipped.
///
/// Directory enumeration order is platform dependent, so the result is sorted
/// by file path to keep array positions stable. A directory with no matching
/// files yields an empty vector.
pub fn load_parties(
    directory: &Path,
    all_characters: &[Rc<PlayerCharacter>],
) -> Result<Vec<Party>, GameDataError> {
    let lookup = build_lookup(all_characters, |character| character.get_name());
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in read_dir(directory)? {
        let path = entry?.path();
        let matches = path.is_file()
            && path.file_name().map_or(false, |name| {
                name.to_string_lossy()
                    .to_ascii_lowercase()
                    .ends_with(PARTY_EXTENSION)
            });
        if matches {
            files.push(path);
        }
    }
    files.sort();
    let mut parties = Vec::new();
    for path in files {
        if let Some(party) = load_party(&path, &lookup)? {
            parties.push(party);
        }
    }
    Ok(parties)
}

/// Load at most one party from a single file.
///
/// Two section names carry meaning: `[Party]`, whose `Name` key names the
/// party, and `[Members]`, whose keys are decimal roster indices and whose
/// values are character names. Member entries are sorted by index before
/// resolution; names absent from the character set are skipped silently,
/// while a non-numeric index is a format error. A file in which the scanner
/// commits no sections yields no party at all.
fn load_party(
    path: &Path,
    characters: &HashMap<String, Rc<PlayerCharacter>>,
) -> Result<Option<Party>, GameDataError> {
    let file = File::open(path)?;
    let mut name = None;
    let mut entries: Vec<(usize, String)> = Vec::new();
    let mut sections_seen = false;
    for section in SectionReader::new(BufReader::new(file)) {
        let section = section?;
        sections_seen = true;
        match section.get_name() {
            "Party" => {
                if let Some(value) = section.get_string("Name") {
                    name = Some(value.to_owned());
                }
            }
            "Members" => {
                for (key, value) in &section {
                    let index = key
                        .parse::<usize>()
                        .map_err(|err| SectionError::InvalidInteger(key.clone(), err))?;
                    entries.push((index, value.clone()));
                }
            }
            _ => {}
        }
    }
    if !sections_seen {
        return Ok(None);
    }
    entries.sort_by_key(|(index, _)| *index);
    let mut party = Party::new(name);
    for member in resolve_names(entries.iter().map(|(_, name)| name.as_str()), characters) {
        party.add_member(member);
    }
    Ok(Some(party))
}
