use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::sync::OnceLock;

const LIBRARY_USAGE: &str = "\
Library usage:
    let note = parsenote::load_note(\"note.xml\")?;
    parsenote::print_formatted_note(&note)?;";

/// Build metadata captured by `build.rs`.
struct BuildInfo {
    version: &'static str,
    git_hash: &'static str,
    commit_date: &'static str,
    release: bool,
}

impl BuildInfo {
    const CURRENT: BuildInfo = BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        commit_date: env!("GIT_COMMIT_DATE"),
        release: matches!(env!("IS_RELEASE").as_bytes(), b"true"),
    };

    /// `0.0.2` for tagged releases and builds outside git,
    /// `0.0.2@abc1234 2024-01-15 14:30` otherwise.
    fn describe(&self) -> String {
        if self.release || self.git_hash.is_empty() {
            return self.version.to_string();
        }
        format!("{}@{} {}", self.version, self.git_hash, self.commit_date)
    }
}

pub fn get_version() -> &'static str {
    static DESCRIBED: OnceLock<String> = OnceLock::new();
    DESCRIBED.get_or_init(|| BuildInfo::CURRENT.describe())
}

/// Argument schema, used to render help. Dispatch itself goes through
/// [`super::commands::Invocation::classify`] because the exit codes for
/// help and for a wrong argument count differ from clap's defaults.
#[derive(Parser, Debug)]
#[command(
    name = "parsenote",
    bin_name = "parsenote",
    version = get_version(),
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "parsenote [-h|--help] <XML_FILE>",
    after_long_help = LIBRARY_USAGE
)]
#[command(about = "Tool to parse an xml note and print it in a readable format.", long_about = None)]
pub struct Cli {
    /// Path to an xml note file
    #[arg(value_name = "XML_FILE")]
    pub xml_file: Option<PathBuf>,

    /// Print this help and exit
    #[arg(short, long)]
    pub help: bool,

    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,
}

/// Full usage text shown for `-h`/`--help`.
pub fn help_text() -> String {
    Cli::command().render_long_help().to_string()
}
