use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use slitscan::commands::{CommandFactory, SlitscanCommandFactory};
use slitscan::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("Slitscan")
        .version("0.1")
        .about("Build a slit-scan composite image from a numbered frame sequence")
        .arg(
            Arg::new("across")
                .long("across")
                .help("Lay column strips out horizontally (default)")
                .action(ArgAction::SetTrue)
                .overrides_with("down"),
        )
        .arg(
            Arg::new("down")
                .long("down")
                .help("Lay row strips out vertically")
                .action(ArgAction::SetTrue)
                .overrides_with("across"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .help("Fractional strip position within each frame, in [0, 1]")
                .value_name("FRACTION")
                .default_value("0.5"),
        )
        .arg(
            Arg::new("thickness")
                .long("thickness")
                .help("Strip thickness in pixels")
                .value_name("PIXELS")
                .default_value("1"),
        )
        .arg(
            Arg::new("input")
                .help("Input filename pattern with one integer placeholder, e.g. frame%04d.png")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output image file")
                .required(true)
                .index(2),
        )
        .get_matches();

    let log_file = "slitscan.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("slitscan-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SlitscanCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
