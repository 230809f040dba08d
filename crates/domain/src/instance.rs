//! Instance provisioning request types.

use serde::{Deserialize, Serialize};

/// Request body for creating a managed database instance.
///
/// All fields are opaque strings interpreted by the provider; the client
/// performs no validation beyond serializing them. The `instance_type` field
/// is named `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSpec {
    /// Human-readable instance name.
    pub name: String,
    /// Database version, e.g. `"5"`.
    pub version: String,
    /// Cloud region, e.g. `"us-central1"`.
    pub region: String,
    /// Memory size, e.g. `"2GB"`.
    pub memory: String,
    /// Instance tier, e.g. `"professional-db"`.
    #[serde(rename = "type")]
    pub instance_type: String,
    /// Tenant the instance belongs to.
    pub tenant_id: String,
    /// Cloud provider, e.g. `"gcp"`.
    pub cloud_provider: String,
}
