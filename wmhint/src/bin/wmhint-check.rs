use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use wmhint::utils::file_handler::{get_default_path, load_config_file};
use wmhint::utils::log::setup_logging;

fn main() -> Result<()> {
    let matches = command!("wmhint-check")
        .about("Checks the configuration file")
        .help_template(wmhint::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs the effective configuration."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");
    // Up before loading so the loader's own messages show with `-v`.
    setup_logging(verbose.then_some("debug"));

    println!(
        "\x1b[0;94m::\x1b[0m wmhint version: {}",
        env!("CARGO_PKG_VERSION")
    );
    let path = match &config_file {
        Some(path) => path.clone(),
        None => get_default_path()?,
    };
    println!("\x1b[0;94m::\x1b[0m Loading configuration from {} . . .", path.display());

    match load_config_file(config_file.as_deref()) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                println!("{config:#?}");
            }
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
            std::process::exit(1);
        }
    }
    Ok(())
}
