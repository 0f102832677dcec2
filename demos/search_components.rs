//! Component search: by repository, by name, by group, and a paginated
//! walk driven by the continuation token.

use quartermaster::api::SearchQuery;
use quartermaster::{ClientConfig, NexusClient};

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = NexusClient::new(&config)?;

    println!("{}", "=".repeat(60));
    println!("Component Search Examples");
    println!("{}", "=".repeat(60));

    println!("\n1. Searching for components in maven-central...");
    let query = SearchQuery {
        repository: Some("maven-central".to_string()),
        format: Some("maven2".to_string()),
        ..SearchQuery::default()
    };
    match client.search().components(&query) {
        Ok(page) => {
            println!("   Found {} components", page.items.len());
            for item in page.items.iter().take(3) {
                let group = item.group.as_deref().unwrap_or("");
                let version = item.version.as_deref().unwrap_or("?");
                println!("\n   Component: {group}.{}", item.name);
                println!("   Version: {version}");
                println!("   Repository: {}", item.repository);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n2. Searching for components by name...");
    let query = SearchQuery {
        name: Some("junit".to_string()),
        format: Some("maven2".to_string()),
        ..SearchQuery::default()
    };
    match client.search().components(&query) {
        Ok(page) => {
            println!("   Found {} components matching 'junit'", page.items.len());
            for item in page.items.iter().take(3) {
                let group = item.group.as_deref().unwrap_or("");
                let version = item.version.as_deref().unwrap_or("?");
                println!("   {group}.{}:{version}", item.name);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n3. Searching for specific group and artifact...");
    let query = SearchQuery {
        group: Some("org.junit.jupiter".to_string()),
        name: Some("junit-jupiter-api".to_string()),
        ..SearchQuery::default()
    };
    match client.search().components(&query) {
        Ok(page) => {
            println!("   Found {} versions", page.items.len());
            for item in page.items.iter().take(5) {
                println!("   - Version {}", item.version.as_deref().unwrap_or("?"));
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n4. Searching assets by SHA-1 checksum...");
    println!("   (You would need a real SHA-1 hash for this)");

    println!("\n5. Demonstrating pagination...");
    let mut query = SearchQuery {
        repository: Some("maven-central".to_string()),
        ..SearchQuery::default()
    };
    let mut total = 0usize;
    for page_no in 1..=3 {
        match client.search().components(&query) {
            Ok(page) => {
                println!("   Page {page_no}: {} components", page.items.len());
                total += page.items.len();
                match page.continuation_token {
                    Some(token) => query.continuation_token = Some(token),
                    None => break,
                }
            }
            Err(e) => {
                println!("   ✗ Error: {e}");
                break;
            }
        }
    }
    println!("   Total components retrieved: {total}");

    println!("\n{}", "=".repeat(60));
    Ok(())
}
