use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use std::{
    env, fs,
    io::{stdin, IsTerminal},
    process::ExitCode,
};

/// A submodule that handles scanning data files into sections.
mod parser;

/// A submodule that provides the typed records built from sections: items,
/// characters and parties.
mod structures;
use structures::Party;

/// A submodule that provides the aggregate loaders gluing the parser to the
/// structures.
mod game_data;
use game_data::{load_characters, load_items, load_parties, GameData, GameDataError};

/// A submodule that handles program argument parsing.
mod args;
use args::Args;

/// Print one party roster with each member's item-adjusted stats.
fn print_party(party: &Party) {
    match party.get_name() {
        Some(name) => println!("{}:", name),
        None => println!("(unnamed party):"),
    }
    for member in party.get_members() {
        println!(
            "  {} (str {}, dex {}, fort {})",
            member.get_name(),
            member.compute_total_strength(),
            member.compute_total_dexterity(),
            member.compute_total_fortitude()
        );
    }
    println!(
        "  combined attack rating: {}",
        party.compute_combined_attack_rating()
    );
}

/// Load the whole campaign in dependency order and print the roster overview.
fn run(args: &Args) -> Result<(), GameDataError> {
    let spinner_style = ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] {spinner} {msg}")
        .unwrap();

    let spinner = ProgressBar::new_spinner().with_style(spinner_style.clone());
    spinner.set_message("Loading items");
    let items = load_items(&args.campaign.join(&args.items))?;
    spinner.finish_with_message(format!("{} items loaded", items.len()));

    let spinner = ProgressBar::new_spinner().with_style(spinner_style.clone());
    spinner.set_message("Loading characters");
    let characters = load_characters(&args.campaign.join(&args.characters), &items)?;
    spinner.finish_with_message(format!("{} characters loaded", characters.len()));

    let spinner = ProgressBar::new_spinner().with_style(spinner_style);
    spinner.set_message("Loading parties");
    let parties = load_parties(&args.campaign.join(&args.parties), &characters)?;
    spinner.finish_with_message(format!("{} parties loaded", parties.len()));

    for party in &parties {
        print_party(party);
    }

    if let Some(dump) = &args.dump {
        let data = GameData::new(items, characters, parties);
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(dump, json)?;
    }
    Ok(())
}

/// Main function. This is the entry point of the program.
///
/// # Process
///
/// 1. Reads the campaign directory from the arguments, or prompts for it when
///    run without arguments in a terminal.
/// 2. Loads the items file, then the characters file (resolving inventories),
///    then every party file in the parties subdirectory (resolving rosters).
/// 3. Prints each party's roster with item-adjusted stats and the combined
///    attack rating.
/// 4. Optionally dumps the loaded game data to a json file.
fn main() -> ExitCode {
    let args = if env::args().len() < 2 && stdin().is_terminal() {
        Args::get_from_user()
    } else {
        Args::parse()
    };
    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
