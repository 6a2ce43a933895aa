pub mod dat;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle itemcolorstrings.dat files
    Dat {
        #[command(subcommand)]
        command: dat::DatCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Dat { command } => command.handle(),
        }
    }
}
