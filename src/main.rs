mod cli;

use cli::Args;
use noticegen::adapters::outbound::console::StderrProgressReporter;
use noticegen::adapters::outbound::dictionary::{
    CachingLicenseDictionary, ConfiguredLicenseDictionary, SpdxLicenseDictionary,
};
use noticegen::adapters::outbound::source::JsonManifestSource;
use noticegen::application::dto::NoticeRequest;
use noticegen::application::factories::{PresenterFactory, PresenterType};
use noticegen::application::use_cases::GenerateNoticeUseCase;
use noticegen::config::{discover_config, load_config_from_path, ConfigFile};
use noticegen::shared::error::ExitCode;
use noticegen::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    // CLI values win over config values; exclude patterns are merged
    let config = load_config(&args)?.unwrap_or_default();
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let exclude_patterns =
        merge_exclude_patterns(&args.exclude, config.exclude_packages.as_deref());

    // Create adapters (Dependency Injection)
    let source = JsonManifestSource::open(&args.input)?;
    let dictionary = CachingLicenseDictionary::new(ConfiguredLicenseDictionary::new(
        config.license_entries()?,
        SpdxLicenseDictionary::new(),
    ));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateNoticeUseCase::new(source, dictionary, progress_reporter);
    let response = use_case
        .execute(NoticeRequest::new(format, exclude_patterns))
        .await?;

    PresenterFactory::create(PresenterType::from_output(args.output))
        .present(&response.document)?;

    if let Some(summary_path) = args.summary {
        let summary = serde_json::to_string_pretty(&response.summary)?;
        PresenterFactory::create(PresenterType::File(summary_path)).present(&summary)?;
    }

    if args.deny_unknown && response.has_unknown_licenses() {
        eprintln!(
            "❌ {} license bucket(s) could not be resolved (--deny-unknown)",
            response.unknown_license_count
        );
        return Ok(ExitCode::UnknownLicensesDetected);
    }

    Ok(ExitCode::Success)
}

/// Explicit `--config`, or `noticegen.config.yml` next to the manifest
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let manifest_dir = args
                .input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            discover_config(manifest_dir)
        }
    }
}

/// Config patterns first, then CLI patterns not already present
fn merge_exclude_patterns(cli: &[String], config: Option<&[String]>) -> Vec<String> {
    let mut merged = config.unwrap_or_default().to_vec();
    for pattern in cli {
        if !merged.contains(pattern) {
            merged.push(pattern.clone());
        }
    }
    merged
}
