use clap_derive::Parser;
use derive_more::Display;
use dialoguer::{Completion, Input};

use std::{
    error, fs,
    path::{Path, PathBuf},
};

/// The default name of the items file inside the campaign directory.
const ITEMS_FILE: &str = "items.ini";
/// The default name of the characters file inside the campaign directory.
const CHARACTERS_FILE: &str = "characters.ini";
/// The default name of the party file subdirectory inside the campaign
/// directory.
const PARTIES_DIR: &str = "parties";

/// A [Completion] struct for campaign directory names, that also acts as a
/// list of directories in the current working directory.
struct CampaignDirCompletion {
    directories: Vec<String>,
}

impl Default for CampaignDirCompletion {
    fn default() -> Self {
        let mut res = Vec::new();
        let path = Path::new(".");
        if path.is_dir() {
            for entry in fs::read_dir(path).expect("Directory not found") {
                let entry = entry.expect("Unable to read entry").path();
                if entry.is_dir() {
                    res.push(entry.to_string_lossy().into_owned());
                }
            }
        }
        CampaignDirCompletion { directories: res }
    }
}

impl Completion for CampaignDirCompletion {
    fn get(&self, input: &str) -> Option<String> {
        self.directories.iter().find(|x| x.contains(input)).cloned()
    }
}

#[derive(Debug, Display)]
enum InvalidPath {
    #[display("invalid path (does not exist)")]
    InvalidPath,
    #[display("not a directory")]
    NotADir,
}

impl error::Error for InvalidPath {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// A function to validate the directory path input.
fn validate_dir_path(input: &String) -> Result<(), InvalidPath> {
    if input.is_empty() {
        return Ok(());
    }
    let p = Path::new(input);
    if p.exists() {
        if p.is_dir() {
            return Ok(());
        } else {
            return Err(InvalidPath::NotADir);
        }
    } else {
        return Err(InvalidPath::InvalidPath);
    }
}

/// A function to parse the campaign directory argument.
fn parse_dir_arg(input: &str) -> Result<PathBuf, &'static str> {
    let p = PathBuf::from(input);
    if p.is_dir() {
        Ok(p)
    } else {
        Err("Invalid directory")
    }
}

/// The arguments to the program.
#[derive(Parser)]
pub struct Args {
    #[arg(value_parser = parse_dir_arg)]
    /// The campaign directory holding the data files.
    pub campaign: PathBuf,
    #[arg(long, default_value = ITEMS_FILE)]
    /// The name of the items file inside the campaign directory.
    pub items: String,
    #[arg(long, default_value = CHARACTERS_FILE)]
    /// The name of the characters file inside the campaign directory.
    pub characters: String,
    #[arg(long, default_value = PARTIES_DIR)]
    /// The name of the party file subdirectory inside the campaign directory.
    pub parties: String,
    #[arg(long, default_value = None)]
    /// A path to a file to dump the loaded game data to as json.
    pub dump: Option<PathBuf>,
}

impl Args {
    /// Create the object based on user input.
    pub fn get_from_user() -> Self {
        println!("Welcome to the campaign roster loader!\nTab autocompletes the query and enter confirms the selection.");
        let completion = CampaignDirCompletion::default();
        let campaign = PathBuf::from(
            Input::<String>::new()
                .with_prompt("Enter the campaign directory")
                .validate_with(validate_dir_path)
                .with_initial_text(completion.directories.get(0).unwrap_or(&"".to_string()))
                .completion_with(&completion)
                .interact_text()
                .unwrap(),
        );
        let dump = Input::<String>::new()
            .with_prompt("Enter the json dump path [empty for None]")
            .allow_empty(true)
            .interact_text()
            .map_or(None, |x| {
                if x.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(x))
                }
            });
        Args {
            campaign,
            items: ITEMS_FILE.to_string(),
            characters: CHARACTERS_FILE.to_string(),
            parties: PARTIES_DIR.to_string(),
            dump,
        }
    }
}
