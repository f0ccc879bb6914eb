use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::operations::{add, divide, multiply, subtract};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match cli.command {
        Commands::Add { a, b } => _add(a, b),
        Commands::Subtract { a, b } => _subtract(a, b),
        Commands::Multiply { a, b } => _multiply(a, b),
        Commands::Divide { a, b } => _divide(a, b),
    }
}

#[instrument]
fn _add(a: f64, b: f64) -> CliResult<()> {
    debug!("a: {:?}, b: {:?}", a, b);
    output::result(add(a, b));
    Ok(())
}

#[instrument]
fn _subtract(a: f64, b: f64) -> CliResult<()> {
    debug!("a: {:?}, b: {:?}", a, b);
    output::result(subtract(a, b));
    Ok(())
}

#[instrument]
fn _multiply(a: f64, b: f64) -> CliResult<()> {
    debug!("a: {:?}, b: {:?}", a, b);
    output::result(multiply(a, b));
    Ok(())
}

#[instrument]
fn _divide(a: f64, b: f64) -> CliResult<()> {
    debug!("a: {:?}, b: {:?}", a, b);
    let quotient = divide(a, b)?;
    output::result(quotient);
    Ok(())
}
