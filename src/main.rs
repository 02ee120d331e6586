use std::env;

use color_eyre::{Section, eyre::eyre};
use libblog_consts::site_config;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Export,
    Check,
}

impl TryFrom<Option<&str>> for Command {
    type Error = color_eyre::Report;

    fn try_from(arg: Option<&str>) -> Result<Self, Self::Error> {
        match arg {
            None => Ok(Self::Export),
            Some("check") => Ok(Self::Check),
            Some(other) => Err(eyre!("Unknown subcommand {other:?}"))
                .with_note(|| "Usage: blog-consts [check]"),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let command = Command::try_from(env::args().nth(1).as_deref())?;

    let config = site_config();
    config
        .validate()
        .with_note(|| "While checking the declared site metadata")?;

    if command == Command::Check {
        println!("Site metadata is valid.");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&config)?;
    println!("{json}");

    Ok(())
}
