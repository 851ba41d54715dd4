use anyhow::Result;
use docfeed::client::IndexClient;
use docfeed::config::Config;
use tracing::info;

pub async fn create_index(config: Config, name: String, case_sensitive: bool) -> Result<()> {
    let client = IndexClient::new(&config.server)?;

    info!("Creating index '{}' on {}", name, client.base_url());
    let result = client.create_index(&name, case_sensitive).await?;

    if result.success {
        println!("Index '{}' created", name);
    } else {
        println!("Server did not confirm creation of index '{}'", name);
    }

    Ok(())
}

pub async fn list_indices(config: Config) -> Result<()> {
    let client = IndexClient::new(&config.server)?;

    let indices = client.indices().await?;
    if indices.is_empty() {
        println!("No indices");
    } else {
        for name in indices {
            println!("{}", name);
        }
    }

    Ok(())
}
