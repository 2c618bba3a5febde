//! Relay node definitions.
//!
//! Every object which can be fetched by a global ID implements the [`Node`] interface. Resolving a
//! node from an ID, and resolving the concrete GraphQL type of a node, are delegated to a
//! [`NodeResolver`], which is the seam where a backend plugs into the schema.

use crate::schema::Model;
use anyhow::Error;
use async_graphql::{Interface, ID};
use async_trait::async_trait;
use std::sync::Arc;

/// An object with an ID
#[derive(Clone, Debug, Interface)]
#[graphql(field(name = "id", type = "ID", desc = "The id of the object."))]
pub enum Node {
    Model(Model),
}

impl Node {
    /// The name of the GraphQL object type of this node.
    pub fn object_type(&self) -> &'static str {
        match self {
            Self::Model(_) => "Model",
        }
    }
}

/// Resolution of [`Node`] objects for the `node` query.
#[async_trait]
pub trait NodeResolver: Send + Sync {
    /// Fetch the object identified by the opaque global ID `id`.
    ///
    /// `Ok(None)` means no such object exists.
    async fn fetch(&self, id: &str) -> Result<Option<Node>, Error>;

    /// Determine the GraphQL object type of `value`.
    fn resolve_type(&self, value: &Node) -> Option<&'static str>;
}

/// A [`NodeResolver`] shared with a running schema.
pub type Resolver = Arc<dyn NodeResolver>;

/// A [`NodeResolver`] with no backing data.
///
/// Every ID resolves to nothing and no value has a resolvable type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unresolved;

#[async_trait]
impl NodeResolver for Unresolved {
    async fn fetch(&self, id: &str) -> Result<Option<Node>, Error> {
        tracing::debug!("no data source for node {id}");
        Ok(None)
    }

    fn resolve_type(&self, _value: &Node) -> Option<&'static str> {
        None
    }
}
