use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable fields and aligned tables.
    #[default]
    Table,
    /// Pretty-printed JSON of the fetched resource.
    Json,
    /// Single-line JSON of the fetched resource.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub base_url: Option<String>,
}
