use std::{fs::File, path::PathBuf};

use bl_dat::{ObjectNameCatalog, StringTable};
use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

#[derive(Args)]
pub struct DumpArgs {
    /// An input itemcolorstrings.dat file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Language to read names from
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Emit the tables as a JSON object
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let catalog = ObjectNameCatalog::new(f)?;

        info!(
            items = catalog.item_count(),
            language = %self.language,
            "dumping translation"
        );
        let translation = catalog.translation(&self.language)?;

        if self.json {
            let rendered = serde_json::to_string_pretty(&translation).into_diagnostic()?;
            println!("{}", rendered);
            return Ok(());
        }

        let tables: [(&str, &StringTable); 4] = [
            ("subtitle", translation.subtitles()),
            ("colour", translation.colours()),
            ("metal", translation.metals()),
            ("item", translation.items()),
        ];
        for (kind, table) in tables {
            for (index, name) in table.iter().enumerate() {
                println!("{} {}: {}", kind, index, name);
            }
        }

        Ok(())
    }
}
