use clap::Parser;

mod cli;
mod commands;
mod domain;
mod extrema;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match commands::handle_runtime_commands(&cli) {
        Ok(()) => Ok(()),
        Err(e) if cli.json => {
            services::output::print_err(error_code(&e), &format!("{:#}", e))?;
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if let Some(input) = e.downcast_ref::<services::input::InputError>() {
        input.code()
    } else if e.downcast_ref::<std::io::Error>().is_some() {
        "IO"
    } else {
        "ERROR"
    }
}
