// Shared fixtures for unit tests

use std::sync::Mutex;
use swift_auth::model::auth::{AuthResponse, CatalogEntry, Endpoint};

/// Serializes tests that mutate the process environment
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A complete identity V2 response as returned by the server
pub const AUTH_RESPONSE_JSON: &str = r#"{
    "access": {
        "token": {
            "id": "ab48a9efdfedb23ty3494",
            "expires": "2026-10-19T13:15:00.000-05:00",
            "tenant": {"id": "123456", "name": "MossoCloudFS_123456"},
            "RAX-AUTH:authenticatedBy": ["APIKEY"]
        },
        "serviceCatalog": [
            {
                "name": "cloudFilesCDN",
                "type": "rax:object-cdn",
                "endpoints": [
                    {"region": "DFW", "tenantId": "MossoCloudFS_123456",
                     "publicURL": "https://cdn1.clouddrive.com/v1/MossoCloudFS_123456"}
                ]
            },
            {
                "name": "cloudFiles",
                "type": "object-store",
                "endpoints": [
                    {"region": "DFW", "tenantId": "MossoCloudFS_123456",
                     "publicURL": "https://storage101.dfw1.clouddrive.com/v1/MossoCloudFS_123456",
                     "internalURL": "https://snet-storage101.dfw1.clouddrive.com/v1/MossoCloudFS_123456"},
                    {"region": "ORD", "tenantId": "MossoCloudFS_123456",
                     "publicURL": "https://storage101.ord1.clouddrive.com/v1/MossoCloudFS_123456",
                     "internalURL": "https://snet-storage101.ord1.clouddrive.com/v1/MossoCloudFS_123456"}
                ]
            },
            {
                "name": "cloudServersOpenStack",
                "type": "compute",
                "endpoints": [
                    {"region": "ORD", "tenantId": "123456",
                     "publicURL": "https://ord.servers.api.rackspacecloud.com/v2/123456",
                     "versionInfo": "https://ord.servers.api.rackspacecloud.com/v2",
                     "versionId": "2"}
                ]
            }
        ],
        "user": {
            "id": "161418",
            "name": "demoauthor",
            "RAX-AUTH:defaultRegion": "ORD",
            "roles": [
                {"id": "3", "name": "identity:user-admin",
                 "description": "User Admin Role.", "tenantId": null}
            ]
        }
    }
}"#;

pub fn endpoint(region: &str, url: &str) -> Endpoint {
    Endpoint {
        region: region.to_string(),
        tenant_id: String::new(),
        public_url: url.to_string(),
        internal_url: format!("{url}-internal"),
    }
}

pub fn entry(service_type: &str, endpoints: Vec<Endpoint>) -> CatalogEntry {
    CatalogEntry {
        name: format!("{service_type}-service"),
        service_type: service_type.to_string(),
        endpoints,
    }
}

/// Catalog with an object-store in regions A and B and another type in A
pub fn sample_catalog() -> AuthResponse {
    AuthResponse {
        service_catalog: vec![
            entry("object-store", vec![endpoint("A", "uA"), endpoint("B", "uB")]),
            entry("other", vec![endpoint("A", "uX")]),
        ],
        ..Default::default()
    }
}
