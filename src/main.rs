use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use csvconv::cli::{self, Args, CliUtils};
use csvconv::conversion::{convert_json_from_source, ConversionConfig, CsvData};
use csvconv::error::ConversionError;
use csvconv::parser::{directory, JsonSource};
use csvconv::writer;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ConversionConfig::with_mode(args.mode_selection());

    if args.verbose {
        eprintln!("Mode selection: {:?}", config.mode);
    }

    if let Err(error) = run(&args, &config) {
        // Conversion errors get the friendly treatment; anything else
        // surfaces through anyhow
        if let Some(conversion_error) = error.downcast_ref::<ConversionError>() {
            cli::handle_error(conversion_error);
            std::process::exit(1);
        }
        return Err(error);
    }

    Ok(())
}

fn run(args: &Args, config: &ConversionConfig) -> Result<()> {
    if args.stdin {
        return convert_source(&JsonSource::Stdin, args.output.clone(), args, config);
    }

    let Some(input) = &args.input else {
        return Err(anyhow!(
            "No input provided. Use --stdin or provide an input path"
        ));
    };

    // Inline JSON text is accepted directly, like a file's contents
    let trimmed = input.trim();
    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
    {
        let source = JsonSource::String(input.clone());
        return convert_source(&source, args.output.clone(), args, config);
    }

    let path = PathBuf::from(input);
    if path.is_file() {
        convert_file(&path, args, config)
    } else if path.is_dir() {
        convert_directory(&path, args, config)
    } else {
        Err(anyhow!("Input path does not exist: {}", input))
    }
}

/// Convert one source; `output` of `None` means stdout
fn convert_source(
    source: &JsonSource,
    output: Option<PathBuf>,
    args: &Args,
    config: &ConversionConfig,
) -> Result<()> {
    let csv_data = convert_json_from_source(source, config)?;

    match output {
        Some(output_path) => {
            writer::write_to_path(&csv_data.content, &output_path, args.force)?;
            CliUtils::show_success(
                &format!("Converted to: {}", output_path.display()),
                args.quiet,
            );
        }
        None => {
            print!("{}", csv_data.content);
        }
    }

    if args.stats {
        output_statistics(&csv_data, args.quiet);
    }

    Ok(())
}

/// Convert a single JSON file; without `-o` the output lands next to the
/// input, named after the effective mode
fn convert_file(input_path: &Path, args: &Args, config: &ConversionConfig) -> Result<()> {
    let source = JsonSource::File(input_path.to_path_buf());
    let csv_data = convert_json_from_source(&source, config)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| cli::default_output_path(input_path, csv_data.metadata.mode));

    writer::write_to_path(&csv_data.content, &output_path, args.force)?;
    CliUtils::show_success(
        &format!("Converted to: {}", output_path.display()),
        args.quiet,
    );

    if args.stats {
        output_statistics(&csv_data, args.quiet);
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, args: &Args, config: &ConversionConfig) -> Result<()> {
    let output_dir = args
        .output
        .clone()
        .ok_or_else(|| anyhow!("Output directory required for directory conversion"))?;

    let json_files = directory::find_json_files(input_dir, args.recursive)?;

    if json_files.is_empty() {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", input_dir.display()),
            args.quiet,
        );
        return Ok(());
    }

    if !args.quiet {
        println!("Found {} JSON files", json_files.len());
    }

    let progress = (!args.quiet && json_files.len() > 1)
        .then(|| CliUtils::create_progress_bar(json_files.len() as u64));

    let mut failures = 0usize;
    for json_file in &json_files {
        let output_file =
            cli::path_mapping::map_input_to_output(input_dir, json_file, &output_dir, "csv");

        let result = convert_json_from_source(&JsonSource::File(json_file.clone()), config)
            .and_then(|csv_data| writer::write_to_path(&csv_data.content, &output_file, args.force));

        if let Err(error) = result {
            failures += 1;
            CliUtils::show_error(&format!(
                "Error converting {}: {}",
                json_file.display(),
                error.user_message()
            ));
            if !args.continue_on_error {
                return Err(anyhow!("Aborting due to conversion error"));
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    CliUtils::show_success(
        &format!(
            "Converted {} of {} files",
            json_files.len() - failures,
            json_files.len()
        ),
        args.quiet,
    );

    Ok(())
}

fn output_statistics(csv_data: &CsvData, quiet: bool) {
    if quiet {
        return;
    }

    let meta = &csv_data.metadata;
    let mut columns = meta.column_preview.join(", ");
    if meta.column_count > meta.column_preview.len() {
        columns.push_str(", ...");
    }

    println!("\nConversion Statistics:");
    println!("Mode: {}", meta.mode.as_str());
    println!("Records: {}", meta.record_count);
    println!("Rows: {}", meta.row_count);
    println!("Columns: {} ({})", meta.column_count, columns);
    println!("Output size: {} bytes", csv_data.len());
    println!("Processing time: {}ms", meta.processing_time_ms);
}
