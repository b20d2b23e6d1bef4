//! tfinv-inventory: Ansible dynamic inventory document
//!
//! Pure transformation from provisioner output variables to the grouped
//! host inventory consumed by Kubespray.

pub mod builder;
pub mod error;
pub mod types;

pub use builder::{SshConfig, build_inventory};
pub use error::InventoryError;
pub use types::{ChildGroup, HostGroup, HostVars, Inventory, Meta};
