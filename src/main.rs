use clap::Parser;
use pattern_census::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.get_command() else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Pattern Census - Date/Time Directive Popularity");
    println!("===============================================");
    println!();
    println!("Reads date/time formatting patterns harvested from source code and");
    println!("reports which directives are used most and which cover real usage.");
    println!();
    println!("USAGE:");
    println!("    pattern_census <COMMAND> <CSV> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Aggregate directive popularity (main command)");
    println!("    select      List the records covered by a greedy directive selection");
    println!("    mingling    List patterns interleaving date, time, and zone directives");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Popularity over the records covering 99% of usage:");
    println!("    pattern_census analyze patterns.csv");
    println!();
    println!("    # Every record, letters conflated, as JSON:");
    println!("    pattern_census analyze patterns.csv --no-selection --conflate --json");
    println!();
    println!("    # Records covering 90% of repositories:");
    println!("    pattern_census select patterns.csv --fraction 0.9 --weight-column repos");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pattern_census <COMMAND> --help");
}
