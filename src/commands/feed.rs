use anyhow::Result;
use docfeed::client::IndexClient;
use docfeed::config::Config;
use docfeed::feed::{Dispatcher, FeedSource};
use std::io;
use std::path::PathBuf;
use tracing::info;

pub async fn feed(config: Config, path: PathBuf, index: Option<String>) -> Result<()> {
    // Check file exists
    if !path.exists() {
        anyhow::bail!("Feed file not found: {}", path.display());
    }

    let source = FeedSource::open(&path)?;
    let index = index.unwrap_or_else(|| config.feed.default_index.clone());

    info!(
        "Feeding {} records from {} into index '{}'",
        source.len(),
        path.display(),
        index
    );

    let client = IndexClient::new(&config.server)?;
    let dispatcher = Dispatcher::new(&client, &index);

    let mut stdout = io::stdout().lock();
    let stats = dispatcher.run(&source, &mut stdout).await?;

    // Print summary
    println!("\nFeed Complete!");
    println!("==============");
    println!("Records sent:      {}", stats.records_sent);
    println!("Responses ok:      {}", stats.responses_ok);
    println!("Responses errored: {}", stats.responses_error);
    println!("Processing rate:   {:.1} records/sec", stats.records_per_second);
    println!("Elapsed time:      {:.1}s", stats.elapsed_seconds);

    Ok(())
}
