use crate::client::{require_id, Client};
use crate::endpoint::is_zero;
use crate::error::Result;
use crate::util::{self, Page, PageOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const CLUSTERS: &str = "clusters";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub cloud_id: String,
    pub name: String,
    pub nodes: u32,
    pub project_id: String,
    pub services: Vec<String>,
    pub tenant_id: String,
}

/// Query options for listing clusters. Zero numbers and `None` filters are left out of the query.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl PageOptions for ListClustersOptions {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterPayload {
    pub name: String,
    pub cloud_id: String,
    pub project_id: String,
}

impl Client {
    /// Fetches a single page of clusters.
    pub fn list_clusters(&self, options: Option<&ListClustersOptions>) -> Result<Page<Cluster>> {
        let mut builder = self.request(Method::GET, &[CLUSTERS])?;
        if let Some(opts) = options {
            builder = builder.query(opts);
        }
        self.send_json(builder)
    }

    /// Iterates over all clusters. For every page the callback gets the clusters of that
    /// page and whether it is the last one; returning false stops the iteration.
    pub fn list_cluster_pages<F>(
        &self,
        options: Option<&ListClustersOptions>,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(Vec<Cluster>, bool) -> bool,
    {
        util::paginate(options, |opts| self.list_clusters(Some(opts)), callback)
    }

    pub fn get_cluster(&self, id: &str) -> Result<Cluster> {
        require_id("cluster id", id)?;
        let builder = self.request(Method::GET, &[CLUSTERS, id])?;
        self.send_json(builder)
    }

    /// Requests a new cluster. Deployment continues asynchronously on the service side.
    pub fn create_cluster(&self, payload: &CreateClusterPayload) -> Result<()> {
        let builder = self.request(Method::POST, &[CLUSTERS])?;
        self.send(util::json_body(builder, payload)?)
    }

    pub fn delete_cluster(&self, cluster: &Cluster) -> Result<()> {
        require_id("cluster id", &cluster.id)?;
        let builder = self.request(Method::DELETE, &[CLUSTERS, cluster.id.as_str()])?;
        self.send(builder)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Config;

    fn query_for(opts: &ListClustersOptions) -> Option<String> {
        let client = Client::new(Config::new_authenticated("a", "s")).unwrap();
        let req = client
            .request(Method::GET, &[CLUSTERS])
            .unwrap()
            .query(opts)
            .build()
            .unwrap();
        req.url().query().map(|q| q.to_string())
    }

    #[test]
    fn test_list_options_query() {
        let tests = vec![
            (ListClustersOptions::default(), None),
            (
                ListClustersOptions {
                    page: 2,
                    per_page: 25,
                    ..ListClustersOptions::default()
                },
                Some("page=2&perPage=25"),
            ),
            (
                ListClustersOptions {
                    sort_by: Some("name".to_string()),
                    cloud_id: Some("cloud-1".to_string()),
                    project_id: Some("proj 1".to_string()),
                    ..ListClustersOptions::default()
                },
                Some("sortBy=name&cloudId=cloud-1&projectId=proj+1"),
            ),
        ];

        for (opts, expect) in tests {
            assert_eq!(query_for(&opts).as_deref(), expect);
        }
    }

    #[test]
    fn test_decode_cluster() {
        let raw = r#"{
            "id": "c-1",
            "cloudId": "cloud-1",
            "name": "prod",
            "nodes": 3,
            "projectId": "p-1",
            "services": ["data", "query"],
            "tenantId": "t-1"
        }"#;
        let cluster: Cluster = serde_json::from_str(raw).unwrap();
        assert_eq!(cluster.cloud_id, "cloud-1");
        assert_eq!(cluster.nodes, 3);
        assert_eq!(cluster.services, vec!["data", "query"]);
    }

    #[test]
    fn test_create_payload_field_names() {
        let payload = CreateClusterPayload {
            name: "prod".to_string(),
            cloud_id: "cloud-1".to_string(),
            project_id: "p-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "prod", "cloudId": "cloud-1", "projectId": "p-1"})
        );
    }

    #[test]
    fn test_delete_requires_id() {
        let client = Client::new(Config::new_authenticated("a", "s")).unwrap();
        assert!(client.delete_cluster(&Cluster::default()).is_err());
        assert!(client.get_cluster("").is_err());
    }
}
