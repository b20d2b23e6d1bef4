//! Ansible dynamic inventory type definitions
//!
//! The shapes here must match Ansible's dynamic inventory protocol
//! exactly: a `_meta.hostvars` map plus named groups carrying `hosts`
//! or `children` lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Per-host connection variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVars {
    /// Address Ansible connects to over SSH (external IP)
    pub ansible_host: String,
    /// Address used for intra-cluster communication (internal IP)
    pub ip: String,
    /// Address other nodes reach this host on (internal IP)
    pub access_ip: String,
    /// SSH username
    pub ansible_user: String,
    /// Path to the SSH private key
    pub ansible_ssh_private_key_file: String,
}

/// The `_meta` block carrying all host variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Host name -> connection variables
    pub hostvars: BTreeMap<String, HostVars>,
}

/// A group declared by its member hosts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    /// Member host names, in insertion order
    pub hosts: Vec<String>,
}

/// A group declared by its child groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildGroup {
    /// Child group names
    pub children: Vec<String>,
}

/// Complete dynamic inventory document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Host variables for every included host
    #[serde(rename = "_meta")]
    pub meta: Meta,
    /// Every included host, in provisioner order
    pub all: HostGroup,
    /// Hosts labeled `role = master`
    pub kube_control_plane: HostGroup,
    /// etcd members (same hosts as the control plane)
    pub etcd: HostGroup,
    /// Every other host
    pub kube_node: HostGroup,
    /// Cluster umbrella group
    pub k8s_cluster: ChildGroup,
}

impl Inventory {
    /// Create an empty inventory with the fixed cluster group wiring
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: Meta::default(),
            all: HostGroup::default(),
            kube_control_plane: HostGroup::default(),
            etcd: HostGroup::default(),
            kube_node: HostGroup::default(),
            k8s_cluster: ChildGroup {
                children: vec!["kube_control_plane".to_string(), "kube_node".to_string()],
            },
        }
    }

    /// Serialize as pretty-printed JSON (2-space indentation).
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, InventoryError> {
        serde_json::to_string_pretty(self).map_err(|e| InventoryError::Serialize(e.to_string()))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
