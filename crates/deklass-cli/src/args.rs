use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use deklass::{BodyLayout, NewLineKind};

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "code.js";

/// CLI arguments for the deklass binary.
#[derive(Parser, Debug)]
#[command(
    name = "deklass",
    version,
    about = "Lower class declarations into constructor functions and prototype assignments"
)]
pub struct CliArgs {
    /// Source file to transform.
    #[arg(default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Write the output here instead of next to the input.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Print the output instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Emit every class declaration instead of only the first.
    #[arg(long)]
    pub all: bool,

    /// Line terminator for emitted code.
    #[arg(long = "newLine", alias = "new-line", value_enum, ignore_case = true)]
    pub new_line: Option<NewLine>,

    /// Place method bodies inline or on their own lines.
    #[arg(long = "bodyLayout", alias = "body-layout", value_enum, ignore_case = true)]
    pub body_layout: Option<Layout>,

    /// Path to a deklass.json configuration file.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Print the token stream as JSON and stop.
    #[arg(long = "listTokens", alias = "list-tokens")]
    pub list_tokens: bool,

    /// Print the parsed declarations as JSON and stop.
    #[arg(long = "showAst", alias = "show-ast")]
    pub show_ast: bool,

    /// Color diagnostics. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NewLine {
    Lf,
    Crlf,
}

impl From<NewLine> for NewLineKind {
    fn from(value: NewLine) -> Self {
        match value {
            NewLine::Lf => Self::LineFeed,
            NewLine::Crlf => Self::CarriageReturnLineFeed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Inline,
    Block,
}

impl From<Layout> for BodyLayout {
    fn from(value: Layout) -> Self {
        match value {
            Layout::Inline => Self::Inline,
            Layout::Block => Self::Block,
        }
    }
}
