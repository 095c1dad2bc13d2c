use crate::client::{require_id, Client};
use crate::error::Result;
use crate::util::{self, Page};
use crate::Cluster;
use reqwest::Method;
use serde::{Deserialize, Serialize};

const CLUSTERS: &str = "clusters";
const USERS: &str = "users";

/// A user of the databases inside a single cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatabaseUser {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "buckets", skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<BucketRole>,
}

/// The roles a database user holds on one bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketRole {
    #[serde(rename = "bucketName")]
    pub name: String,
    #[serde(rename = "bucketAccess", default)]
    pub roles: Vec<String>,
}

/// Unset fields are left out of the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseUserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<BucketRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_buckets_access: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteDatabaseUserPayload {
    pub username: String,
}

impl Client {
    pub fn list_database_users(&self, cluster: &Cluster) -> Result<Page<DatabaseUser>> {
        require_id("cluster id", &cluster.id)?;
        let builder = self.request(Method::GET, &[CLUSTERS, cluster.id.as_str(), USERS])?;
        self.send_json(builder)
    }

    pub fn create_database_user(
        &self,
        cluster: &Cluster,
        payload: &CreateDatabaseUserPayload,
    ) -> Result<()> {
        require_id("cluster id", &cluster.id)?;
        let builder = self.request(Method::POST, &[CLUSTERS, cluster.id.as_str(), USERS])?;
        self.send(util::json_body(builder, payload)?)
    }

    pub fn delete_database_user(
        &self,
        cluster: &Cluster,
        payload: &DeleteDatabaseUserPayload,
    ) -> Result<()> {
        require_id("cluster id", &cluster.id)?;
        require_id("username", &payload.username)?;
        let builder = self.request(
            Method::DELETE,
            &[CLUSTERS, cluster.id.as_str(), USERS, payload.username.as_str()],
        )?;
        self.send(builder)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload_omits_unset_fields() {
        let tests = vec![
            (CreateDatabaseUserPayload::default(), json!({})),
            (
                CreateDatabaseUserPayload {
                    username: Some("app".to_string()),
                    password: Some("Secret-123".to_string()),
                    all_buckets_access: Some("data_reader".to_string()),
                    ..CreateDatabaseUserPayload::default()
                },
                json!({
                    "username": "app",
                    "password": "Secret-123",
                    "allBucketsAccess": "data_reader"
                }),
            ),
            (
                CreateDatabaseUserPayload {
                    username: Some("app".to_string()),
                    buckets: vec![BucketRole {
                        name: "orders".to_string(),
                        roles: vec!["data_writer".to_string()],
                    }],
                    ..CreateDatabaseUserPayload::default()
                },
                json!({
                    "username": "app",
                    "buckets": [{"bucketName": "orders", "bucketAccess": ["data_writer"]}]
                }),
            ),
        ];

        for (payload, expect) in tests {
            assert_eq!(serde_json::to_value(&payload).unwrap(), expect);
        }
    }

    #[test]
    fn test_decode_database_user() {
        let raw = r#"{
            "userId": "u-1",
            "username": "app",
            "buckets": [{"bucketName": "orders", "bucketAccess": ["data_reader", "data_writer"]}]
        }"#;
        let user: DatabaseUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.user_id, "u-1");
        assert_eq!(user.password, "");
        assert_eq!(user.access.len(), 1);
        assert_eq!(user.access[0].roles, vec!["data_reader", "data_writer"]);
    }
}
