#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::sync::Arc;

use args::Args;
use clap::Parser;
use tts::{TtsRequest, Voice};
use voxrelay_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    init_tracing();

    tracing::info!(
        config_path = %args.config.display(),
        backend = %config.synthesis.backend,
        "starting voxrelay"
    );

    // Build the conversion pipeline
    let system = tts::build_system(&config)?;

    let lines: Vec<String> = match args.text {
        Some(text) => vec![text],
        None => std::io::stdin().lines().collect::<Result<_, _>>()?,
    };

    let conversions = lines.into_iter().map(|text| {
        let system = Arc::clone(&system);
        let voice = Voice {
            category: args.category.clone(),
            female: args.female,
        };
        async move { system.convert(TtsRequest { text, voice }).await }
    });

    let mut missing = 0usize;
    for result in futures::future::join_all(conversions).await {
        match result? {
            Some(response) => println!("{}", response.file_path.display()),
            None => missing += 1,
        }
    }

    if missing > 0 {
        anyhow::bail!("{missing} conversion(s) produced no audio");
    }

    tracing::info!("voxrelay finished");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("voxrelay=info,tts=info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
