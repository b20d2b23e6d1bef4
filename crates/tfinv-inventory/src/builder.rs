//! Building the inventory from provisioner outputs

use serde::{Deserialize, Serialize};
use tfinv_state::StateOutputs;
use tracing::debug;

use crate::types::{HostVars, Inventory};

/// Label key carrying the cluster role
const ROLE_LABEL: &str = "role";

/// Role value that places a host in the control plane and etcd groups
const ROLE_MASTER: &str = "master";

/// Role assumed when a host carries no `role` label
const ROLE_DEFAULT: &str = "worker";

/// SSH connection settings applied to every host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshConfig {
    /// SSH username
    pub user: String,
    /// Path to the SSH private key
    pub private_key_file: String,
}

/// Build the inventory document from provisioner outputs.
///
/// Hosts are visited in `vm_names` order, which is preserved in
/// `all.hosts`. A host missing either IP (or carrying an empty one) is
/// silently excluded from every group and from hostvars; a partially
/// provisioned machine should not block the whole run. Hosts labeled
/// `role = master` join both the control plane and etcd groups, all
/// others land in `kube_node`.
#[must_use]
pub fn build_inventory(outputs: &StateOutputs, ssh: &SshConfig) -> Inventory {
    let mut inventory = Inventory::new();

    for name in &outputs.vm_names {
        let external_ip = outputs.external_ips.get(name).filter(|ip| !ip.is_empty());
        let internal_ip = outputs.internal_ips.get(name).filter(|ip| !ip.is_empty());

        let (Some(external_ip), Some(internal_ip)) = (external_ip, internal_ip) else {
            debug!(host = %name, "host has no usable IP pair, excluded");
            continue;
        };

        inventory.all.hosts.push(name.clone());

        // External IP for SSH, internal IP for cluster traffic
        inventory.meta.hostvars.insert(
            name.clone(),
            HostVars {
                ansible_host: external_ip.clone(),
                ip: internal_ip.clone(),
                access_ip: internal_ip.clone(),
                ansible_user: ssh.user.clone(),
                ansible_ssh_private_key_file: ssh.private_key_file.clone(),
            },
        );

        let role = outputs
            .labels
            .get(name)
            .and_then(|labels| labels.get(ROLE_LABEL))
            .map_or(ROLE_DEFAULT, String::as_str);

        if role == ROLE_MASTER {
            inventory.kube_control_plane.hosts.push(name.clone());
            // All masters join etcd; an odd master count gives quorum
            inventory.etcd.hosts.push(name.clone());
        } else {
            inventory.kube_node.hosts.push(name.clone());
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ssh() -> SshConfig {
        SshConfig {
            user: "fatihgumush".to_string(),
            private_key_file: "~/.ssh/gcp_javdes".to_string(),
        }
    }

    fn labels(pairs: &[(&str, &[(&str, &str)])]) -> HashMap<String, HashMap<String, String>> {
        pairs
            .iter()
            .map(|(name, kv)| {
                (
                    (*name).to_string(),
                    kv.iter()
                        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                        .collect(),
                )
            })
            .collect()
    }

    fn ip_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn full_outputs() -> StateOutputs {
        StateOutputs {
            vm_names: vec!["vm-a".to_string(), "vm-b".to_string()],
            external_ips: ip_map(&[("vm-a", "1.2.3.4"), ("vm-b", "1.2.3.5")]),
            internal_ips: ip_map(&[("vm-a", "10.0.0.1"), ("vm-b", "10.0.0.2")]),
            labels: labels(&[("vm-a", &[("role", "master")]), ("vm-b", &[])]),
        }
    }

    #[test]
    fn test_full_input_scenario() {
        let inventory = build_inventory(&full_outputs(), &ssh());

        assert_eq!(inventory.all.hosts, vec!["vm-a", "vm-b"]);
        assert_eq!(inventory.kube_control_plane.hosts, vec!["vm-a"]);
        assert_eq!(inventory.etcd.hosts, vec!["vm-a"]);
        assert_eq!(inventory.kube_node.hosts, vec!["vm-b"]);

        let vars = &inventory.meta.hostvars["vm-a"];
        assert_eq!(vars.ansible_host, "1.2.3.4");
        assert_eq!(vars.ip, "10.0.0.1");
        assert_eq!(vars.access_ip, "10.0.0.1");
        assert_eq!(vars.ansible_user, "fatihgumush");
        assert_eq!(vars.ansible_ssh_private_key_file, "~/.ssh/gcp_javdes");
    }

    #[test]
    fn test_all_hosts_preserves_input_order() {
        let mut outputs = full_outputs();
        outputs.vm_names = vec!["vm-b".to_string(), "vm-a".to_string()];

        let inventory = build_inventory(&outputs, &ssh());
        assert_eq!(inventory.all.hosts, vec!["vm-b", "vm-a"]);
    }

    #[test]
    fn test_host_missing_internal_ip_is_excluded() {
        let mut outputs = full_outputs();
        outputs.vm_names.push("vm-c".to_string());
        outputs
            .external_ips
            .insert("vm-c".to_string(), "1.2.3.6".to_string());
        // no internal IP for vm-c

        let inventory = build_inventory(&outputs, &ssh());

        assert_eq!(inventory.all.hosts, vec!["vm-a", "vm-b"]);
        assert!(!inventory.meta.hostvars.contains_key("vm-c"));
        assert!(!inventory.kube_node.hosts.contains(&"vm-c".to_string()));
    }

    #[test]
    fn test_empty_ip_counts_as_missing() {
        let mut outputs = full_outputs();
        outputs
            .external_ips
            .insert("vm-b".to_string(), String::new());

        let inventory = build_inventory(&outputs, &ssh());

        assert_eq!(inventory.all.hosts, vec!["vm-a"]);
        assert!(!inventory.meta.hostvars.contains_key("vm-b"));
    }

    #[test]
    fn test_missing_role_defaults_to_worker() {
        let mut outputs = full_outputs();
        outputs.labels.remove("vm-b");

        let inventory = build_inventory(&outputs, &ssh());

        assert_eq!(inventory.kube_node.hosts, vec!["vm-b"]);
        assert!(!inventory.kube_control_plane.hosts.contains(&"vm-b".to_string()));
    }

    #[test]
    fn test_role_partition_is_exclusive() {
        let inventory = build_inventory(&full_outputs(), &ssh());

        for host in &inventory.all.hosts {
            let in_control_plane = inventory.kube_control_plane.hosts.contains(host);
            let in_etcd = inventory.etcd.hosts.contains(host);
            let in_node = inventory.kube_node.hosts.contains(host);

            assert_eq!(in_control_plane, in_etcd);
            assert_ne!(in_control_plane, in_node);
        }
    }

    #[test]
    fn test_children_fixed_regardless_of_input() {
        let inventory = build_inventory(&StateOutputs::default(), &ssh());
        assert_eq!(
            inventory.k8s_cluster.children,
            vec!["kube_control_plane", "kube_node"]
        );
    }

    #[test]
    fn test_idempotent_rendering() {
        let outputs = full_outputs();
        let first = build_inventory(&outputs, &ssh()).to_json_pretty().unwrap();
        let second = build_inventory(&outputs, &ssh()).to_json_pretty().unwrap();

        assert_eq!(first, second);
    }
}
