//! # cleanarch Name Command
//!
//! File: cli/src/commands/name.rs
//!
//! Implements `cleanarch name`: prints the names a scaffold derives from one
//! user-supplied name. Module directories use the dash form, classes the
//! capitalized form and fields or packages the decapitalized form.
//!
//! ```bash
//! cleanarch name restConsumer
//! # module: rest-consumer
//! # class:  RestConsumer
//! # field:  restConsumer
//! ```
//!
use clap::Parser;

use cleanarch::common::text::case::{capitalize, decapitalize, to_dash_name};
use cleanarch::core::error::Result;

/// Arguments for `cleanarch name`.
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// Name to convert, in camel case.
    name: String,
}

fn describe(name: &str) -> String {
    format!(
        "module: {}\nclass:  {}\nfield:  {}",
        to_dash_name(name),
        capitalize(name),
        decapitalize(name)
    )
}

/// Handles `cleanarch name`.
pub fn handle_name(args: NameArgs) -> Result<()> {
    println!("{}", describe(&args.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("restConsumer"),
            "module: rest-consumer\nclass:  RestConsumer\nfield:  restConsumer"
        );
    }
}
