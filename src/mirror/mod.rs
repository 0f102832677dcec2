//! Copies repository and component metadata from a remote server into a
//! local SQLite database.

mod schema;
mod store;

pub use store::MirrorStore;

use crate::client::NexusClient;
use crate::error::Result;

/// Mirrors every repository and, per repository, every component page by
/// page. Asset mirroring ([`mirror_assets`]) is deliberately not part of
/// this path.
pub fn run(client: &NexusClient, store: &MirrorStore) -> Result<()> {
    let repos = client.repositories().list()?;
    tracing::info!("found {} repositories", repos.len());

    for repo in &repos {
        let repository_id = store.save_repository(&repo.name, &repo.format)?;
        tracing::info!(
            "saved repository {} ({}) as row {repository_id}",
            repo.name,
            repo.format
        );

        let mut token: Option<String> = None;
        let mut saved = 0usize;
        loop {
            let page = client.components().list(&repo.name, token.as_deref())?;
            for component in &page.items {
                let row = store.save_component(component, repository_id)?;
                tracing::debug!("saved component {} as row {row}", component.name);
                saved += 1;
            }
            match page.continuation_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        tracing::info!("mirrored {saved} components from {}", repo.name);
    }

    Ok(())
}

/// Mirrors the assets of one repository. Kept off the default run path;
/// callers that want asset rows invoke it per repository themselves.
pub fn mirror_assets(
    client: &NexusClient,
    store: &MirrorStore,
    repository: &str,
    repository_id: i64,
) -> Result<usize> {
    let mut token: Option<String> = None;
    let mut saved = 0usize;
    loop {
        let page = client.assets().list(repository, token.as_deref())?;
        for asset in &page.items {
            store.save_asset(asset, repository_id)?;
            saved += 1;
        }
        match page.continuation_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }
    Ok(saved)
}
