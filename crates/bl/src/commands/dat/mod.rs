pub mod dump;
pub mod languages;
pub mod lookup;

#[derive(clap::Subcommand)]
pub enum DatCommands {
    /// Dump every name table of one language
    Dump(dump::DumpArgs),
    /// List the languages in a catalog file
    Languages(languages::LanguagesArgs),
    /// Look up a single localized name
    Lookup(lookup::LookupArgs),
}

impl DatCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            DatCommands::Dump(dump) => dump.handle(),
            DatCommands::Languages(languages) => languages.handle(),
            DatCommands::Lookup(lookup) => lookup.handle(),
        }
    }
}
