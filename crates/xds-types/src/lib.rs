//! # xds-types
//!
//! Protobuf configuration messages stored by the xDS resource cache.
//!
//! This crate provides the subset of the Envoy v3 configuration API the
//! translation layer produces and the caches hold:
//!
//! - Route types (`VirtualHost`, `Route`)
//! - Cluster types (`Cluster`)
//! - Endpoint types (`ClusterLoadAssignment`, `LbEndpoint`)
//! - Listener types (`Listener`)
//!
//! The messages derive `prost::Message` directly so they encode to the same
//! wire format as the upstream definitions for the fields they carry. Each
//! kind implements [`xds_core::Resource`], which is where its name
//! extraction and validation rules live.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)] // Message fields mirror the upstream protos

pub use prost::Message;
pub use prost_types::Any;

pub mod envoy {
    //! Envoy xDS types.

    pub mod config {
        //! Envoy configuration types.

        pub mod core {
            //! Core configuration types.

            pub mod v3 {
                //! Core v3 API.

                /// A TCP socket address.
                #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
                pub struct SocketAddress {
                    /// IP address or hostname.
                    #[prost(string, tag = "1")]
                    pub address: String,
                    /// Port number.
                    #[prost(uint32, tag = "2")]
                    pub port_value: u32,
                }

                impl SocketAddress {
                    /// Create a socket address.
                    pub fn new(address: impl Into<String>, port_value: u32) -> Self {
                        Self {
                            address: address.into(),
                            port_value,
                        }
                    }
                }
            }
        }

        pub mod route {
            //! Route configuration.

            pub mod v3 {
                //! Route v3 API.

                /// A set of domains served by a common set of routes.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct VirtualHost {
                    /// Virtual host name. Unique within a route configuration.
                    #[prost(string, tag = "1")]
                    pub name: String,
                    /// Domains (host/authority headers) matched by this virtual host.
                    #[prost(string, repeated, tag = "2")]
                    pub domains: Vec<String>,
                    /// Routes, matched in order.
                    #[prost(message, repeated, tag = "3")]
                    pub routes: Vec<Route>,
                }

                impl VirtualHost {
                    /// Create a virtual host with no routes.
                    pub fn new<I, S>(name: impl Into<String>, domains: I) -> Self
                    where
                        I: IntoIterator<Item = S>,
                        S: Into<String>,
                    {
                        Self {
                            name: name.into(),
                            domains: domains.into_iter().map(Into::into).collect(),
                            routes: Vec::new(),
                        }
                    }

                    /// Append a route.
                    pub fn with_route(mut self, route: Route) -> Self {
                        self.routes.push(route);
                        self
                    }
                }

                /// A prefix route forwarding to a cluster.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Route {
                    /// Path prefix to match.
                    #[prost(string, tag = "1")]
                    pub prefix: String,
                    /// Destination cluster name.
                    #[prost(string, tag = "2")]
                    pub cluster: String,
                }

                impl Route {
                    /// Create a prefix route.
                    pub fn prefix(prefix: impl Into<String>, cluster: impl Into<String>) -> Self {
                        Self {
                            prefix: prefix.into(),
                            cluster: cluster.into(),
                        }
                    }
                }
            }
        }

        pub mod cluster {
            //! Cluster configuration.

            pub mod v3 {
                //! Cluster v3 API.

                /// Cluster configuration.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Cluster {
                    /// Cluster name.
                    #[prost(string, tag = "1")]
                    pub name: String,
                    /// Timeout for new upstream connections.
                    #[prost(message, optional, tag = "2")]
                    pub connect_timeout: Option<prost_types::Duration>,
                    /// Load balancing policy.
                    #[prost(enumeration = "LbPolicy", tag = "3")]
                    pub lb_policy: i32,
                }

                impl Cluster {
                    /// Create a round-robin cluster with no connect timeout.
                    pub fn new(name: impl Into<String>) -> Self {
                        Self {
                            name: name.into(),
                            connect_timeout: None,
                            lb_policy: LbPolicy::RoundRobin as i32,
                        }
                    }

                    /// Set the connect timeout.
                    pub fn with_connect_timeout(mut self, timeout: std::time::Duration) -> Self {
                        self.connect_timeout = prost_types::Duration::try_from(timeout).ok();
                        self
                    }

                    /// Set the load balancing policy.
                    pub fn with_lb_policy(mut self, policy: LbPolicy) -> Self {
                        self.set_lb_policy(policy);
                        self
                    }
                }

                /// Load balancing policy.
                #[derive(
                    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
                )]
                #[repr(i32)]
                pub enum LbPolicy {
                    RoundRobin = 0,
                    LeastRequest = 1,
                    Random = 3,
                }
            }
        }

        pub mod endpoint {
            //! Endpoint configuration.

            pub mod v3 {
                //! Endpoint v3 API.

                use super::super::core::v3::SocketAddress;

                /// Endpoints assigned to a cluster.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct ClusterLoadAssignment {
                    /// Cluster name.
                    #[prost(string, tag = "1")]
                    pub cluster_name: String,
                    /// Endpoints.
                    #[prost(message, repeated, tag = "2")]
                    pub endpoints: Vec<LbEndpoint>,
                }

                impl ClusterLoadAssignment {
                    /// Create an assignment for `cluster_name`.
                    pub fn new(
                        cluster_name: impl Into<String>,
                        endpoints: impl IntoIterator<Item = LbEndpoint>,
                    ) -> Self {
                        Self {
                            cluster_name: cluster_name.into(),
                            endpoints: endpoints.into_iter().collect(),
                        }
                    }
                }

                /// Load balancing endpoint.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct LbEndpoint {
                    /// Upstream address.
                    #[prost(message, optional, tag = "1")]
                    pub address: Option<SocketAddress>,
                    /// Load balancing weight.
                    #[prost(uint32, tag = "2")]
                    pub load_balancing_weight: u32,
                }

                impl LbEndpoint {
                    /// Create an endpoint with weight 1.
                    pub fn new(address: impl Into<String>, port_value: u32) -> Self {
                        Self {
                            address: Some(SocketAddress::new(address, port_value)),
                            load_balancing_weight: 1,
                        }
                    }
                }
            }
        }

        pub mod listener {
            //! Listener configuration.

            pub mod v3 {
                //! Listener v3 API.

                use super::super::core::v3::SocketAddress;

                /// Listener configuration.
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Listener {
                    /// Listener name.
                    #[prost(string, tag = "1")]
                    pub name: String,
                    /// Address to listen on.
                    #[prost(message, optional, tag = "2")]
                    pub address: Option<SocketAddress>,
                }

                impl Listener {
                    /// Create a listener bound to `address:port_value`.
                    pub fn new(
                        name: impl Into<String>,
                        address: impl Into<String>,
                        port_value: u32,
                    ) -> Self {
                        Self {
                            name: name.into(),
                            address: Some(SocketAddress::new(address, port_value)),
                        }
                    }
                }
            }
        }
    }
}

mod resources;

pub use envoy::config::cluster::v3::{Cluster, LbPolicy};
pub use envoy::config::core::v3::SocketAddress;
pub use envoy::config::endpoint::v3::{ClusterLoadAssignment, LbEndpoint};
pub use envoy::config::listener::v3::Listener;
pub use envoy::config::route::v3::{Route, VirtualHost};
