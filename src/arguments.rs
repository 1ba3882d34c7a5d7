use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum SupportedTypes {
    #[default]
    All,
    Cargo,
    PackageJson,
    Csproj,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum GitMode {
    #[default]
    None,
    Commit,
}

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "vu")]
pub struct Arguments {
    #[arg(long="types", short='t', value_enum, ignore_case = true, default_value_t = SupportedTypes::All)]
    pub supported_types: SupportedTypes,
    #[arg(long, short, value_enum, ignore_case = true, default_value_t = GitMode::None)]
    pub git_mode: GitMode,
    #[arg(long, short, default_value = "./")]
    pub path: String,
    /// Report what would change without writing anything back
    #[arg(long, short)]
    pub dry_run: bool,
    #[arg(long, short)]
    pub verbose: bool,
}
