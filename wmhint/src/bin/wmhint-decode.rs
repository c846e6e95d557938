use anyhow::Result;
use clap::{arg, command};
use std::io::{self, BufRead, Write};
use wmhint::utils::log::setup_logging;
use wmhint_core::codec::decode_with;

fn main() -> Result<()> {
    setup_logging(None);
    let matches = command!("wmhint-decode")
        .about("Decodes window-title directives and prints them as JSON")
        .help_template(wmhint::utils::get_help_template())
        .args(&[
            arg!(raw: -r --"no-whitespace-markers" "Do not read trailing spaces as directives."),
            arg!([TITLE] ... "Titles to decode. Reads one title per line from stdin otherwise."),
        ])
        .get_matches();

    let whitespace_markers = !matches.get_flag("raw");
    let titles: Vec<String> = match matches.get_many::<String>("TITLE") {
        Some(titles) => titles.cloned().collect(),
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };

    let mut stdout = io::stdout().lock();
    for title in &titles {
        let directive = decode_with(Some(title.as_str()), whitespace_markers);
        tracing::debug!("{:?} -> {:?}", title, directive);
        writeln!(stdout, "{}", serde_json::to_string(&directive)?)?;
    }
    Ok(())
}
