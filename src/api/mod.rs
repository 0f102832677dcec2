mod assets;
mod blob_stores;
mod components;
mod repositories;
mod search;
mod security;
mod tasks;

pub use assets::AssetApi;
pub use blob_stores::{BlobStoreApi, FileBlobStore, FileBlobStoreConfig};
pub use components::{ComponentApi, MavenUpload, RawUpload};
pub use repositories::{DockerHosted, MavenHosted, NpmHosted, RawHosted, RepositoryApi};
pub use search::{SearchApi, SearchQuery};
pub use security::{NewUser, RoleConfig, SecurityApi, UserUpdate};
pub use tasks::TaskApi;
