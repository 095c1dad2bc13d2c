//! Couchbase Cloud
//!
//! A blocking client for the Couchbase Cloud public REST API (v2). Requests are
//! signed with the API key pair from the configuration.
//!
//! ## Usage
//! ```no_run
//! use couchbasecloud::{Client, Config, ListClustersOptions};
//!
//! fn main() -> Result<(), couchbasecloud::Error> {
//!     let client = Client::new(Config::new_authenticated("access_key", "secret_key"))?;
//!
//!     client.list_cluster_pages(Some(&ListClustersOptions::default()), |clusters, _last| {
//!         for cluster in clusters {
//!             println!("{} ({} nodes)", cluster.name, cluster.nodes);
//!         }
//!         true
//!     })
//! }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
pub(crate) mod util;

pub use client::Client;
pub use config::Config;
pub use endpoint::buckets::{Bucket, CreateBucketPayload, DeleteBucketPayload};
pub use endpoint::clusters::{Cluster, CreateClusterPayload, ListClustersOptions};
pub use endpoint::database_users::{
    BucketRole, CreateDatabaseUserPayload, DatabaseUser, DeleteDatabaseUserPayload,
};
pub use endpoint::projects::{CreateProjectPayload, ListProjectsOptions, Project};
pub use endpoint::users::{ListUsersOptions, User};
pub use error::{Error, ErrorKind, Result};
pub use util::{paginate, Cursor, Hrefs, Page, PageOptions, Pages};
