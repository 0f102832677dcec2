//! Repository management: create hosted repositories of three formats,
//! inspect one, then clean up.

use std::collections::BTreeMap;

use quartermaster::api::{DockerHosted, MavenHosted, NpmHosted};
use quartermaster::{ClientConfig, Error, NexusClient};

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = NexusClient::new(&config)?;

    println!("{}", "=".repeat(60));
    println!("Repository Management Examples");
    println!("{}", "=".repeat(60));

    println!("\n1. Listing existing repositories...");
    match client.repositories().list() {
        Ok(repos) => {
            println!("   Found {} repositories", repos.len());
            let mut by_format: BTreeMap<String, usize> = BTreeMap::new();
            for repo in &repos {
                *by_format.entry(repo.format.clone()).or_default() += 1;
            }
            for (format, count) in &by_format {
                println!("   - {format}: {count}");
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    let repo_name = "maven-demo-repo";
    println!("\n2. Creating a Maven hosted repository...");
    match client
        .repositories()
        .create_maven_hosted(&MavenHosted::new(repo_name))
    {
        Ok(()) => println!("   ✓ Created repository '{repo_name}'"),
        Err(Error::BadRequest { .. }) => {
            println!("   ℹ Repository already exists or invalid configuration");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    let npm_repo_name = "npm-demo-repo";
    println!("\n3. Creating an NPM hosted repository...");
    match client
        .repositories()
        .create_npm_hosted(&NpmHosted::new(npm_repo_name))
    {
        Ok(()) => println!("   ✓ Created repository '{npm_repo_name}'"),
        Err(Error::BadRequest { .. }) => {
            println!("   ℹ Repository already exists or invalid configuration");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    let docker_repo_name = "docker-demo-repo";
    println!("\n4. Creating a Docker hosted repository...");
    let mut docker = DockerHosted::new(docker_repo_name);
    docker.docker.http_port = Some(8082);
    match client.repositories().create_docker_hosted(&docker) {
        Ok(()) => println!("   ✓ Created repository '{docker_repo_name}'"),
        Err(Error::BadRequest { .. }) => {
            println!("   ℹ Repository already exists or invalid configuration");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n5. Getting repository details...");
    match client.repositories().get(repo_name) {
        Ok(repo) => {
            println!("   Repository: {}", repo.name);
            println!("   Format: {}", repo.format);
            println!("   Type: {}", repo.kind.as_deref().unwrap_or("unknown"));
            println!("   URL: {}", repo.url.as_deref().unwrap_or("N/A"));
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n6. Cleaning up demo repositories...");
    for demo_repo in [repo_name, npm_repo_name, docker_repo_name] {
        match client.repositories().delete(demo_repo) {
            Ok(()) => println!("   ✓ Deleted repository '{demo_repo}'"),
            Err(Error::NotFound { .. }) => println!("   ℹ Repository '{demo_repo}' not found"),
            Err(e) => println!("   ✗ Error deleting '{demo_repo}': {e}"),
        }
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}
