//! Uploads a raw component, lists and searches for it, and shows the
//! typed Maven/npm upload calls.

use std::io::Write;

use quartermaster::api::{RawUpload, SearchQuery};
use quartermaster::{ClientConfig, Error, NexusClient};

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = NexusClient::new(&config)?;

    println!("{}", "=".repeat(60));
    println!("Component Upload & Management Examples");
    println!("{}", "=".repeat(60));

    let repo_name = "raw-demo";
    println!("\n1. Creating '{repo_name}' repository...");
    match client
        .repositories()
        .create_raw_hosted(&quartermaster::api::RawHosted::new(repo_name))
    {
        Ok(()) => println!("   ✓ Created repository '{repo_name}'"),
        Err(Error::BadRequest { .. }) => println!("   ℹ Repository already exists"),
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n2. Uploading a raw component...");
    let mut sample = tempfile::NamedTempFile::new()?;
    writeln!(sample, "Sample content for upload demo")?;
    let upload = RawUpload {
        repository: repo_name.to_string(),
        directory: "demo/folder".to_string(),
        filename: "sample.txt".to_string(),
        file: sample.path().to_path_buf(),
    };
    match client.components().upload_raw(&upload) {
        Ok(()) => println!("   ✓ Uploaded file to {repo_name}/demo/folder/sample.txt"),
        Err(Error::NotFound { .. }) => {
            println!("   ✗ Repository '{repo_name}' not found");
            println!("   Please create the repository first");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n3. Listing components in repository...");
    match client.components().list(repo_name, None) {
        Ok(page) => {
            println!("   Found {} components", page.items.len());
            for item in page.items.iter().take(5) {
                println!("\n   Component: {}", item.name);
                println!("   Group: {}", item.group.as_deref().unwrap_or("N/A"));
                println!("   Version: {}", item.version.as_deref().unwrap_or("N/A"));
                println!("   Assets: {}", item.assets.len());
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n4. Searching for uploaded component...");
    let query = SearchQuery {
        repository: Some(repo_name.to_string()),
        name: Some("sample.txt".to_string()),
        ..SearchQuery::default()
    };
    match client.search().components(&query) {
        Ok(page) => {
            if let Some(component) = page.items.first() {
                println!("   ✓ Found component");
                println!("   Component ID: {}", component.id);

                println!("\n5. Getting component details...");
                match client.components().get(&component.id) {
                    Ok(details) => {
                        println!("   Name: {}", details.name);
                        println!("   Format: {}", details.format.as_deref().unwrap_or("?"));
                        println!("   Repository: {}", details.repository);
                        println!("\n   Assets ({}):", details.assets.len());
                        for asset in &details.assets {
                            println!("   - {}", asset.path.as_deref().unwrap_or("?"));
                            println!(
                                "     Download: {}",
                                asset.download_url.as_deref().unwrap_or("?")
                            );
                            match asset.file_size {
                                Some(size) => println!("     Size: {size} bytes"),
                                None => println!("     Size: unknown"),
                            }
                        }
                    }
                    Err(e) => println!("   ✗ Error: {e}"),
                }
            } else {
                println!("   ℹ Component not found");
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n6. Maven upload example (requires actual JAR file)...");
    println!("   // let upload = MavenUpload::new(");
    println!("   //     \"maven-releases\", \"com.example\", \"my-artifact\",");
    println!("   //     \"1.0.0\", \"path/to/artifact.jar\");");
    println!("   // client.components().upload_maven(&upload)?;");

    println!("\n7. NPM upload example (requires .tgz package)...");
    println!("   // client.components().upload_npm(\"npm-hosted\", \"path/to/package-1.0.0.tgz\")?;");

    println!("\n{}", "=".repeat(60));
    Ok(())
}
