use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Resolve(args) => commands::resolve::handle(args, flags),
        Commands::Show(args) => commands::show::handle(args, flags),
        Commands::Stats(args) => commands::stats::handle(args, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
