use indexmap::IndexMap;

/// The namespace a mapped table lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    pub name: String,

    /// Whether writes go through the commit log.
    pub durable_writes: bool,

    pub replication: Replication,
}

/// Replica placement for a keyspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replication {
    /// Places replicas without regard to topology.
    Simple { factor: u32 },

    /// Replica count per data center.
    NetworkTopology { data_centers: IndexMap<String, u32> },
}

impl Keyspace {
    /// A durable keyspace with simple placement and a single replica.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            durable_writes: true,
            replication: Replication::default(),
        }
    }

    pub fn with_replication(mut self, replication: Replication) -> Self {
        self.replication = replication;
        self
    }

    pub fn with_durable_writes(mut self, durable_writes: bool) -> Self {
        self.durable_writes = durable_writes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Replication {
    /// Total number of replicas across all data centers.
    pub fn total_replicas(&self) -> u64 {
        match self {
            Replication::Simple { factor } => u64::from(*factor),
            Replication::NetworkTopology { data_centers } => data_centers
                .values()
                .map(|factor| u64::from(*factor))
                .sum(),
        }
    }
}

impl Default for Replication {
    fn default() -> Self {
        Replication::Simple { factor: 1 }
    }
}
