use anagram_solver::Result;
use anagram_solver::cli::parse_cli;
use anagram_solver::emitter::LineEmitter;
use anagram_solver::logging::init_logging;
use anagram_solver::session::{open_output, read_phrase, run_query};
use anagram_solver::wordbank::DictionarySource;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &anagram_solver::cli::Cli) -> Result<()> {
    let config = cli.search_config()?;

    let source = DictionarySource::resolve(cli.dictionary_path.as_deref());
    let wordbank = source.load()?;
    eprintln!("Loaded {} words from {source}.", wordbank.len());

    let phrase = match &cli.phrase {
        Some(phrase) => phrase.clone(),
        None => match read_phrase(&mut io::stdin().lock())? {
            Some(phrase) => phrase,
            None => return Ok(()),
        },
    };

    let target = cli
        .output_path
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    eprintln!("Saving anagrams to {target}...");

    let mut emitter = LineEmitter::new(open_output(cli.output_path.as_deref())?);
    let summary = run_query(&config, &wordbank, &phrase, &mut emitter)?;
    emitter.finish()?;

    if summary.truncated {
        eprintln!("Found {} anagrams (stopped at --max-results).", summary.emitted);
    } else {
        eprintln!("Found {} anagrams.", summary.emitted);
    }
    Ok(())
}
