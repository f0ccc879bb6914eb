//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Basic command-line calculator: add, subtract, multiply, divide
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add {
        /// First operand
        a: f64,
        /// Second operand
        b: f64,
    },

    /// Subtract the second number from the first
    #[command(allow_negative_numbers = true)]
    Subtract {
        /// First operand
        a: f64,
        /// Second operand
        b: f64,
    },

    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply {
        /// First operand
        a: f64,
        /// Second operand
        b: f64,
    },

    /// Divide the first number by the second
    #[command(allow_negative_numbers = true)]
    Divide {
        /// Dividend
        a: f64,
        /// Divisor (must be non-zero)
        b: f64,
    },
}
