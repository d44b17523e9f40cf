use crate::cli::args::Cli;
use colordelta::{color_delta, Result};

pub fn run_cli(args: Cli) -> Result<()> {
    let delta = color_delta(&args.color1, &args.color2)?;
    log::debug!("'{}' vs '{}'", args.color1, args.color2);
    println!("{}", delta);
    Ok(())
}
