use serde::{Deserialize, Serialize};

/// Deployment environments an application can target.
/// Not enforced on stored records; served as a static list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Qa,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Qa, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Qa => "qa",
            Environment::Prod => "prod",
        }
    }
}

/// Namespace descriptor shown for an application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub egressname: String,
    pub clusters: String,
    pub vaultsetup: bool,
    pub managedbyargo: bool,
}

impl Namespace {
    fn new(name: &str, egressname: &str, clusters: &str, vaultsetup: bool, managedbyargo: bool) -> Self {
        Self {
            name: name.to_string(),
            egressname: egressname.to_string(),
            clusters: clusters.to_string(),
            vaultsetup,
            managedbyargo,
        }
    }

    /// Fixed namespace list. Not backed by storage and identical for every app.
    pub fn placeholders() -> Vec<Namespace> {
        vec![
            Namespace::new("ns1", "eg1", "clusterA", true, false),
            Namespace::new("ns2", "eg2", "clusterB", false, true),
        ]
    }
}
