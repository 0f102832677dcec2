mod support;

use quartermaster::mirror::{self, MirrorStore};
use quartermaster::{ClientConfig, NexusClient};
use support::MockServer;

fn open_store(dir: &tempfile::TempDir) -> MirrorStore {
    let store = MirrorStore::new(dir.path().join("mirror.db")).unwrap();
    store.initialize().unwrap();
    store
}

#[test]
fn initialize_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    // CREATE TABLE IF NOT EXISTS must tolerate a second pass.
    store.initialize().unwrap();
}

#[test]
fn save_repository_returns_rowid() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let first = store.save_repository("maven-releases", "maven2").unwrap();
    let second = store.save_repository("npm-hosted", "npm").unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn saving_the_same_repository_twice_duplicates_rows() {
    // Append-only by design: no natural-key dedup.
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store.save_repository("maven-releases", "maven2").unwrap();
    store.save_repository("maven-releases", "maven2").unwrap();

    let conn = store.connection();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM repositories WHERE name = 'maven-releases'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn save_component_stores_group_column() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let repo_id = store.save_repository("maven-releases", "maven2").unwrap();

    let component: quartermaster::types::Component = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "repository": "maven-releases",
        "name": "junit",
        "format": "maven2",
        "group": "org.junit",
        "version": "5.11.0",
    }))
    .unwrap();
    store.save_component(&component, repo_id).unwrap();

    let conn = store.connection();
    let (group, version, fk): (String, String, i64) = conn
        .query_row(
            "SELECT \"group\", version, repository_id FROM components WHERE name = 'junit'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(group, "org.junit");
    assert_eq!(version, "5.11.0");
    assert_eq!(fk, repo_id);
}

#[test]
fn save_asset_stores_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let repo_id = store.save_repository("raw-demo", "raw").unwrap();

    let asset: quartermaster::types::Asset = serde_json::from_value(serde_json::json!({
        "id": "a1",
        "path": "demo/sample.txt",
        "fileSize": 42,
        "contentType": "text/plain",
        "downloadUrl": "http://localhost:8081/repository/raw-demo/demo/sample.txt",
    }))
    .unwrap();
    store.save_asset(&asset, repo_id).unwrap();

    let conn = store.connection();
    let (asset_id, size, content_type): (String, i64, String) = conn
        .query_row(
            "SELECT asset_id, file_size, content_type FROM assets WHERE repository_id = ?1",
            [repo_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(asset_id, "a1");
    assert_eq!(size, 42);
    assert_eq!(content_type, "text/plain");
}

#[test]
fn mirror_run_inserts_one_row_per_remote_entity() {
    let server = MockServer::start();
    server.route(
        "GET",
        "/service/rest/v1/repositories",
        200,
        r#"[{"name":"r1","format":"maven2"}]"#,
    );
    server.route(
        "GET",
        "/service/rest/v1/components",
        200,
        r#"{"items":[{"id":"c1","repository":"r1","name":"comp1"}],"continuationToken":null}"#,
    );

    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let client = NexusClient::new(&ClientConfig::new(&server.url)).unwrap();
    mirror::run(&client, &store).unwrap();

    let conn = store.connection();
    let (repo_count, repo_id): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(id) FROM repositories WHERE name = 'r1' AND format = 'maven2'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(repo_count, 1);

    let (component_count, fk): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(repository_id) FROM components WHERE name = 'comp1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(component_count, 1);
    assert_eq!(fk, repo_id);
}

#[test]
fn mirror_run_follows_continuation_tokens() {
    let server = MockServer::start();
    server.route(
        "GET",
        "/service/rest/v1/repositories",
        200,
        r#"[{"name":"r1","format":"maven2"}]"#,
    );
    server.route(
        "GET",
        "/service/rest/v1/components",
        200,
        r#"{"items":[{"id":"c1","repository":"r1","name":"comp1"}],"continuationToken":"page-2"}"#,
    );
    server.route(
        "GET",
        "/service/rest/v1/components",
        200,
        r#"{"items":[{"id":"c2","repository":"r1","name":"comp2"}],"continuationToken":null}"#,
    );

    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let client = NexusClient::new(&ClientConfig::new(&server.url)).unwrap();
    mirror::run(&client, &store).unwrap();

    let conn = store.connection();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM components", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);

    drop(conn);
    let reqs = server.wait_for(3);
    let component_queries: Vec<_> = reqs
        .iter()
        .filter(|r| r.path == "/service/rest/v1/components")
        .map(|r| r.query.clone().unwrap_or_default())
        .collect();
    assert_eq!(component_queries[0], "repository=r1");
    assert_eq!(component_queries[1], "repository=r1&continuationToken=page-2");
}

#[test]
fn rerunning_the_mirror_duplicates_rows() {
    let server = MockServer::start();
    server.route(
        "GET",
        "/service/rest/v1/repositories",
        200,
        r#"[{"name":"r1","format":"maven2"}]"#,
    );
    server.route(
        "GET",
        "/service/rest/v1/components",
        200,
        r#"{"items":[{"id":"c1","repository":"r1","name":"comp1"}],"continuationToken":null}"#,
    );

    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let client = NexusClient::new(&ClientConfig::new(&server.url)).unwrap();
    mirror::run(&client, &store).unwrap();
    mirror::run(&client, &store).unwrap();

    let conn = store.connection();
    let repos: i64 = conn
        .query_row("SELECT COUNT(*) FROM repositories", [], |row| row.get(0))
        .unwrap();
    let components: i64 = conn
        .query_row("SELECT COUNT(*) FROM components", [], |row| row.get(0))
        .unwrap();
    assert_eq!(repos, 2);
    assert_eq!(components, 2);
}

#[test]
fn mirror_assets_pages_and_inserts() {
    let server = MockServer::start();
    server.route(
        "GET",
        "/service/rest/v1/assets",
        200,
        r#"{"items":[{"id":"a1","path":"x/a"},{"id":"a2","path":"x/b"}],"continuationToken":null}"#,
    );

    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let repo_id = store.save_repository("r1", "raw").unwrap();
    let client = NexusClient::new(&ClientConfig::new(&server.url)).unwrap();
    let saved = mirror::mirror_assets(&client, &store, "r1", repo_id).unwrap();
    assert_eq!(saved, 2);

    let conn = store.connection();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM assets WHERE repository_id = ?1",
            [repo_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 2);
}
