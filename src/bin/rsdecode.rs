//! rsdecode binary - correct Reed-Solomon codewords from the command line
//!
//! Prints one line per input codeword, in input order:
//! `clean <codeword>`, `fixed <count> <codeword>` or `error <message>`.

use anyhow::{bail, Context, Result};
use log::debug;
use rsdecode::codeword::{format_codeword, parse_codeword_as, InputFormat, OutputFormat};
use rsdecode::reed_solomon::{decode_batch_with, BatchConfig, Correction, Decoder, DecoderConfig};
use std::fs;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = rsdecode::parse_args();

    let two_s = *matches
        .get_one::<usize>("ec-symbols")
        .context("--ec-symbols is required")?;
    let decoder = Decoder::with_config(DecoderConfig::from_args(&matches));
    let batch_config = BatchConfig::from_args(&matches);
    let input_format = InputFormat::from_args(&matches);
    let format = if matches.get_flag("decimal") {
        OutputFormat::Decimal
    } else {
        OutputFormat::Hex
    };

    let lines = collect_input_lines(&matches)?;
    if lines.is_empty() {
        bail!("No codewords given; pass them as arguments or with --file");
    }

    // Parse failures keep their slot so output lines stay aligned with input
    let mut outputs: Vec<Option<String>> = Vec::with_capacity(lines.len());
    let mut failed = false;
    let mut codewords = Vec::new();
    let mut slots = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        match parse_codeword_as(line, input_format) {
            Ok(codeword) => {
                slots.push(index);
                codewords.push(codeword);
                outputs.push(None);
            }
            Err(e) => {
                failed = true;
                outputs.push(Some(format!("error {e}")));
            }
        }
    }

    debug!(
        "Decoding {} codewords with two_s = {} on {} thread(s)",
        codewords.len(),
        two_s,
        batch_config.effective_threads()
    );
    let results = decode_batch_with(&decoder, &mut codewords, two_s, &batch_config);

    for ((slot, codeword), result) in slots.into_iter().zip(&codewords).zip(results) {
        outputs[slot] = Some(match result {
            Ok(Correction::Clean) => format!("clean {}", format_codeword(codeword, format)),
            Ok(correction) => format!(
                "fixed {} {}",
                correction.error_count(),
                format_codeword(codeword, format)
            ),
            Err(e) => {
                failed = true;
                format!("error {e}")
            }
        });
    }

    for line in outputs.into_iter().flatten() {
        println!("{line}");
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn collect_input_lines(matches: &clap::ArgMatches) -> Result<Vec<String>> {
    let mut lines: Vec<String> = matches
        .get_many::<String>("codewords")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if let Some(path) = matches.get_one::<String>("file") {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read codewords from {path}"))?;
        lines.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    Ok(lines)
}
