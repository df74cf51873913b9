use std::sync::Arc;

use clap::Parser;
use maconv_adapters::{
    configuration, telemetry, DirCredentialSink, DirCredentialSource, FileManifestStore,
};
use maconv_core::config::ConvertMode;
use maconv_core::use_cases::{ConvertUseCase, MergeManifestUseCase};
use tracing::error;

/// Migrate authenticator credential files (`*.maFile`) into the schema
/// the companion application consumes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip merging discovered accounts into the companion manifest
    #[arg(long = "no-manifest", default_value = "false")]
    no_manifest: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _guard = telemetry::init_subscriber("maconv_cli", "info");

    let settings = match configuration::get_configuration() {
        Ok(s) => s,
        Err(e) => {
            error!(?e, "failed to load configuration");
            return Err(anyhow::anyhow!("configuration loading failed"));
        }
    };

    let cli = Cli::parse();
    let convert = settings.convert;

    let source = Arc::new(DirCredentialSource::new(convert.input_dir.clone()));
    let sink = Arc::new(DirCredentialSink::new(convert.output_dir.clone()));

    let outcome = ConvertUseCase::new(source, sink, convert.mode)
        .execute()
        .await?;

    println!("Converted {} file(s).", outcome.converted);

    // An empty run has nothing to merge; don't require the companion
    // manifest to exist in that case.
    let merge_wanted = convert.mode == ConvertMode::Extended
        && convert.write_manifest
        && !cli.no_manifest
        && outcome.converted > 0;
    if merge_wanted {
        let store = Arc::new(FileManifestStore::new(
            convert.manifest_path.clone(),
            convert.output_dir.join("manifest.json"),
        ));
        let merged = MergeManifestUseCase::new(store)
            .execute(outcome.entries)
            .await?;

        println!(
            "Manifest updated: {} new account(s), {} total.",
            merged.appended, merged.total
        );
    }

    Ok(())
}
