use clap::Parser;
use colored::*;
use labelmaker::commands::{self, CmdMessage, MessageLevel};
use labelmaker::config::LabelConfig;
use labelmaker::error::{LabelError, Result};
use labelmaker::sheet::{LABELS_24, LABELS_48};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = LabelConfig::load(&cli.config)?;

    // Modes in flag order; the first set flag wins. No flag at all is
    // a successful no-op.
    if cli.labels_24_box {
        let box_number = require(cli.box_number, "box")?;
        let first_item = require(cli.first_item, "first_item")?;
        announce(24, first_item, &format!("box {}", box_number));
        let result = commands::boxed::run(&config, &LABELS_24, box_number, first_item)?;
        print_messages(&result.messages);
    } else if cli.labels_24_building {
        let building = require(cli.building, "building")?;
        let first_item = require(cli.first_item, "first_item")?;
        announce(24, first_item, &format!("building {}", building));
        let result = commands::building::run(&config, &LABELS_24, &building, first_item)?;
        print_messages(&result.messages);
    } else if cli.labels_48_box {
        let box_number = require(cli.box_number, "box")?;
        let first_item = require(cli.first_item, "first_item")?;
        announce(48, first_item, &format!("box {}", box_number));
        let result = commands::boxed::run(&config, &LABELS_48, box_number, first_item)?;
        print_messages(&result.messages);
    } else if cli.labels_48_building {
        let building = require(cli.building, "building")?;
        let first_item = require(cli.first_item, "first_item")?;
        announce(48, first_item, &format!("building {}", building));
        let result = commands::building::run(&config, &LABELS_48, &building, first_item)?;
        print_messages(&result.messages);
    } else if cli.labels_48_room {
        let first_item = require(cli.first_item, "first_item")?;
        println!(
            "Generating labels for all rooms starting at {} (8 per room) ...",
            first_item
        );
        let result = commands::rooms::run(&config, first_item)?;
        print_messages(&result.messages);
    }

    Ok(())
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(LabelError::MissingParameter(name))
}

fn announce(count: u32, first_item: u32, group: &str) {
    println!(
        "Generating {} labels between {} and {} for {} ...",
        count,
        first_item,
        first_item.saturating_add(count - 1),
        group
    );
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
