use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "colordelta",
    version,
    about = "CIE76 color difference between comma-delimited sRGB strings"
)]
pub struct Cli {
    /// First color, formatted as "R,G,B"
    #[arg(value_name = "COLOR1")]
    pub color1: String,

    /// Second color, formatted as "R,G,B"
    #[arg(value_name = "COLOR2")]
    pub color2: String,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increases logging verbosity (repeatable)"
    )]
    pub verbose: u8,
}
