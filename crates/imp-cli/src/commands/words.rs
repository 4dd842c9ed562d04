use std::path::Path;

use colored::Colorize;

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    println!("  {} parejas de palabras\n", catalog.len().to_string().bold());
    for pair in catalog.iter() {
        println!("  {:<16} {}", pair.word, pair.clue.dimmed());
    }

    Ok(())
}
