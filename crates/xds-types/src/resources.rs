//! [`Resource`] implementations for the cached configuration kinds.

use xds_core::{Resource, TypeUrl, XdsResult};

use crate::{Cluster, ClusterLoadAssignment, Listener, VirtualHost};

impl Resource for VirtualHost {
    const TYPE_URL: &'static str = TypeUrl::VIRTUAL_HOST;

    fn name(&self) -> &str {
        &self.name
    }

    fn discriminators(&self) -> Option<&[String]> {
        Some(&self.domains)
    }
}

impl Resource for Listener {
    const TYPE_URL: &'static str = TypeUrl::LISTENER;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> XdsResult<()> {
        if self.name.is_empty() {
            return Err(self.invalid("resource name cannot be empty"));
        }
        match &self.address {
            None => Err(self.invalid("listener address is required")),
            Some(addr) if addr.port_value == 0 => {
                Err(self.invalid("listener port must be non-zero"))
            }
            Some(_) => Ok(()),
        }
    }
}

impl Resource for Cluster {
    const TYPE_URL: &'static str = TypeUrl::CLUSTER;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for ClusterLoadAssignment {
    const TYPE_URL: &'static str = TypeUrl::ENDPOINT;

    fn name(&self) -> &str {
        &self.cluster_name
    }
}
