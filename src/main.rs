pub mod cli;
pub mod convert;
pub mod ir;
pub mod path_de;
pub mod profile;
pub mod registry;
pub mod walk;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
