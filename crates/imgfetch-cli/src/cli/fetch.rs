//! The fetch run: resolve settings, gather URLs, run the batch, print outcomes.

use anyhow::Result;
use imgfetch_core::batch::run_batch;
use imgfetch_core::config::ImgfetchConfig;
use imgfetch_core::pipeline::FetchPipeline;
use imgfetch_core::storage;
use imgfetch_core::transport::CurlTransport;

use super::{input, report};

/// Per-URL failures are printed, never returned; only setup problems are errors.
pub(super) fn run_fetch(args: &[String], cfg: &ImgfetchConfig) -> Result<()> {
    let settings = cfg.fetch_settings();
    storage::ensure_output_dir(&settings.output_dir)?;

    println!("imgfetch: guarded image downloader");
    println!("Images are saved to {}\n", settings.output_dir.display());

    let urls = if args.is_empty() {
        let stdin = std::io::stdin();
        input::prompt_for_urls(&mut stdin.lock(), &mut std::io::stdout())?
    } else {
        input::urls_from_args(args)
    };
    tracing::info!(urls = urls.len(), jobs = cfg.jobs, "starting batch");

    let transport = CurlTransport::new().with_user_agent(cfg.user_agent.clone());
    let pipeline = FetchPipeline::new(transport, settings);

    println!("{}", report::separator());
    let summary = run_batch(&pipeline, &urls, cfg.jobs, |_, url, outcome| {
        for line in report::outcome_lines(url, outcome) {
            println!("{}", line);
        }
        println!("{}", report::separator());
    });

    for line in report::trailer_lines(&summary) {
        println!("{}", line);
    }
    Ok(())
}
