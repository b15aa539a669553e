use std::process;

use toolcenter_convert::prelude::*;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    match args.command {
        Command::Convert {
            source,
            output,
            skip_empty_arrays,
        } => {
            let config = ConvertConfig {
                include_empty_arrays: !skip_empty_arrays,
                ..ConvertConfig::default()
            };
            let use_case = ConvertCatalogUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                progress_reporter,
                config,
            );
            let response =
                use_case.execute(ConvertRequest::new(source.clone(), output.clone()))?;
            eprintln!(
                "\n✅ Converted {} tool(s) from {} -> {}",
                response.tool_count,
                source.display(),
                output.display()
            );
            eprintln!("Set last_updated to: {}", response.last_updated);
        }
        Command::Split { catalog, tools_dir } => {
            let use_case = SplitCatalogUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                progress_reporter,
            );
            let response = use_case.execute(SplitRequest::new(catalog, tools_dir.clone()))?;
            eprintln!(
                "\n✅ Wrote {} per-tool document(s) into {}",
                response.files_written.len(),
                tools_dir.display()
            );
        }
        Command::Assemble { tools_dir, output } => {
            let use_case = AssembleCatalogUseCase::new(
                FileSystemReader::new(),
                FileSystemWriter::new(),
                progress_reporter,
            );
            let response = use_case.execute(AssembleRequest::new(tools_dir, output.clone()))?;
            eprintln!(
                "\n✅ Assembled {} tool(s) into {}",
                response.tool_count,
                output.display()
            );
            eprintln!("Set last_updated to: {}", response.last_updated);
        }
    }

    Ok(())
}
