use crate::client::{require_id, Client};
use crate::error::Result;
use crate::util;
use crate::Cluster;
use reqwest::Method;
use serde::{Deserialize, Serialize};

const CLUSTERS: &str = "clusters";
const BUCKETS: &str = "buckets";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    /// In megabytes.
    pub memory_quota: u32,
    pub replicas: Option<u32>,
    pub conflict_resolution: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBucketPayload {
    pub name: String,
    /// In megabytes.
    pub memory_quota: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteBucketPayload {
    pub name: String,
}

impl Client {
    pub fn list_buckets(&self, cluster: &Cluster) -> Result<Vec<Bucket>> {
        require_id("cluster id", &cluster.id)?;
        let builder = self.request(Method::GET, &[CLUSTERS, cluster.id.as_str(), BUCKETS])?;
        self.send_json(builder)
    }

    pub fn create_bucket(&self, cluster: &Cluster, payload: &CreateBucketPayload) -> Result<()> {
        require_id("cluster id", &cluster.id)?;
        let builder = self.request(Method::POST, &[CLUSTERS, cluster.id.as_str(), BUCKETS])?;
        self.send(util::json_body(builder, payload)?)
    }

    /// The bucket is addressed by name in the request body, not in the path.
    pub fn delete_bucket(&self, cluster: &Cluster, payload: &DeleteBucketPayload) -> Result<()> {
        require_id("cluster id", &cluster.id)?;
        require_id("bucket name", &payload.name)?;
        let builder = self.request(Method::DELETE, &[CLUSTERS, cluster.id.as_str(), BUCKETS])?;
        self.send(util::json_body(builder, payload)?)
    }
}
