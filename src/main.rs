use clap::Parser;

use outbreak::runner::{run, BaseArgs};
use outbreak::OutbreakError;

fn main() -> Result<(), OutbreakError> {
    let args = BaseArgs::parse();
    run(&args)?;
    Ok(())
}
