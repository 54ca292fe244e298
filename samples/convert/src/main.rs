use std::{
    fs::{self, File},
    io::{self, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use objweld::{Conversion, Stats};

mod cli;
use cli::Cli;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("couldn't read path from prompt: {0}")]
    Prompt(#[source] io::Error),
    #[error("couldn't open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("couldn't convert {path:?}: {source}")]
    Convert {
        path: PathBuf,
        source: objweld::Error,
    },
    #[error("couldn't write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

fn resolve_paths(cli: &Cli) -> Result<(PathBuf, PathBuf), ConvertError> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mut ask = |label: &str| {
        cli::prompt_path(label, &mut stdin, &mut stdout).map_err(ConvertError::Prompt)
    };
    let input = match &cli.input {
        Some(p) => p.clone(),
        None => ask("Input File: ")?,
    };
    let output = match &cli.output {
        Some(p) => p.clone(),
        None => ask("Output File: ")?,
    };
    Ok((input, output))
}

#[tracing::instrument(skip_all, fields(input = ?input, output = ?output))]
fn run(input: PathBuf, output: PathBuf) -> Result<Stats, ConvertError> {
    let file = File::open(&input).map_err(|source| ConvertError::Open {
        path: input.clone(),
        source,
    })?;

    let mut conv = Conversion::<u32>::new();
    conv.feed_reader(BufReader::new(file))
        .map_err(|source| ConvertError::Convert {
            path: input.clone(),
            source,
        })?;
    let (mesh, stats) = conv.finish();

    // the whole text is rendered before anything is written, so a failed conversion never
    // leaves a truncated output file behind
    let text = mesh.emit_to_string();
    let written = if Cli::is_stdout(&output) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
    } else {
        fs::write(&output, text)
    };
    written.map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(stats)
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let result = resolve_paths(&cli).and_then(|(input, output)| run(input, output));
    match result {
        Ok(stats) => {
            tracing::info!(
                vertices = stats.welded,
                indices = stats.corners,
                faces = stats.faces,
                ignored = stats.ignored,
                "welded mesh"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            ExitCode::FAILURE
        }
    }
}
