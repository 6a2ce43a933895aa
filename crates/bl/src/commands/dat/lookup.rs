use std::{fs::File, path::PathBuf};

use bl_dat::ObjectNameCatalog;
use clap::Args;
use miette::{Context, IntoDiagnostic, Result};

#[derive(clap::ValueEnum, Debug, Copy, Clone)]
pub enum NameKind {
    Item,
    Colour,
    Metal,
    Subtitle,
}

#[derive(Args)]
pub struct LookupArgs {
    /// An input itemcolorstrings.dat file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Language to read names from
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Which name table to read
    #[arg(value_enum)]
    kind: NameKind,

    /// Entry index within the table
    index: usize,
}

impl LookupArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let catalog = ObjectNameCatalog::new(f)?;
        let translation = catalog.translation(&self.language)?;

        let name = match self.kind {
            NameKind::Item => translation.item(self.index)?,
            NameKind::Colour => translation.colour(self.index)?,
            NameKind::Metal => translation.metal(self.index)?,
            NameKind::Subtitle => translation.subtitle(self.index)?,
        };
        println!("{}", name);

        Ok(())
    }
}
