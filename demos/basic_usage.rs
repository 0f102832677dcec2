//! Walks the read-only surface of the API: status, repositories, blob
//! stores, users, roles, tasks. Each step reports its own failure and
//! the walk continues.

use quartermaster::{ClientConfig, NexusClient};

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = NexusClient::new(&config)?;

    println!("{}", "=".repeat(60));
    println!("Nexus Repository Manager - Client Demo");
    println!("{}", "=".repeat(60));

    println!("\n1. Checking server status...");
    match client.get_status() {
        Ok(status) => {
            println!("   ✓ Server is online");
            if let Some(version) = status.get("Server") {
                println!("   Version: {version}");
            }
        }
        Err(e) => {
            println!("   ✗ Error: {e}");
            return Ok(());
        }
    }

    println!("\n2. Checking if server is writable...");
    match client.is_writable() {
        Ok(true) => println!("   ✓ Server is writable"),
        Ok(false) => println!("   ✗ Server is read-only"),
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n3. Listing repositories...");
    match client.repositories().list() {
        Ok(repos) => {
            println!("   Found {} repositories:", repos.len());
            for repo in repos.iter().take(5) {
                let kind = repo.kind.as_deref().unwrap_or("unknown");
                println!("   - {} ({}) - {}", repo.name, repo.format, kind);
            }
            if repos.len() > 5 {
                println!("   ... and {} more", repos.len() - 5);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n4. Listing blob stores...");
    match client.blob_stores().list() {
        Ok(stores) => {
            println!("   Found {} blob stores:", stores.len());
            for store in &stores {
                let kind = store.kind.as_deref().unwrap_or("unknown");
                println!("   - {} ({})", store.name, kind);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n5. Listing users...");
    match client.security().list_users(None, None) {
        Ok(users) => {
            println!("   Found {} users:", users.len());
            for user in users.iter().take(5) {
                println!(
                    "   - {} ({} {})",
                    user.user_id, user.first_name, user.last_name
                );
            }
            if users.len() > 5 {
                println!("   ... and {} more", users.len() - 5);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n6. Listing roles...");
    match client.security().list_roles(None) {
        Ok(roles) => {
            println!("   Found {} roles:", roles.len());
            for role in roles.iter().take(5) {
                println!("   - {}: {}", role.id, role.name);
            }
            if roles.len() > 5 {
                println!("   ... and {} more", roles.len() - 5);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n7. Listing scheduled tasks...");
    match client.tasks().list() {
        Ok(page) => {
            println!("   Found {} tasks:", page.items.len());
            for task in page.items.iter().take(5) {
                println!("   - {} ({})", task.name, task.kind);
            }
            if page.items.len() > 5 {
                println!("   ... and {} more", page.items.len() - 5);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo completed!");
    println!("{}", "=".repeat(60));

    Ok(())
}
