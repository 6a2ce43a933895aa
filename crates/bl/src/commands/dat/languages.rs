use std::{fs::File, path::PathBuf};

use bl_dat::ObjectNameCatalog;
use clap::Args;
use miette::{Context, IntoDiagnostic, Result};

#[derive(Args)]
pub struct LanguagesArgs {
    /// An input itemcolorstrings.dat file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl LanguagesArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let catalog = ObjectNameCatalog::new(f)?;

        let mut languages: Vec<&str> = catalog.languages().collect();
        languages.sort_unstable();
        for language in languages {
            println!("{}", language);
        }

        Ok(())
    }
}
