//! The schema describing the entities in the GraphQL API.

use crate::{
    node::{Node, NodeResolver, Resolver, Unresolved},
    relay::GlobalId,
};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Error, Object, Result, Schema, ID};
use std::sync::Arc;

/// A machine-learning model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Model {
    /// The ID of this model, unique among models.
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Model {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// The Relay global ID of this model.
    pub fn global_id(&self) -> GlobalId {
        GlobalId::new("Model", &self.id)
    }
}

/// Machine-learning model
#[Object]
impl Model {
    /// The ID of an object
    pub async fn id(&self) -> ID {
        self.global_id().into()
    }

    /// The name of the model
    pub async fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The description of the model
    pub async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Entrypoint for read-only GraphQL queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

#[Object]
impl Query {
    /// Fetches an object given its ID
    async fn node(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of an object")] id: ID,
    ) -> Result<Option<Node>> {
        let resolver = ctx.data::<Resolver>()?;
        // Failures null out this field only, leaving sibling fields intact.
        match resolve_node(resolver, &id).await {
            Ok(node) => Ok(node),
            Err(err) => {
                tracing::warn!("unable to resolve node {}: {}", id.as_str(), err.message);
                ctx.add_error(err.into_server_error(ctx.item.pos));
                Ok(None)
            }
        }
    }
}

async fn resolve_node(resolver: &Resolver, id: &str) -> Result<Option<Node>> {
    let Some(node) = resolver.fetch(id).await? else {
        return Ok(None);
    };
    match resolver.resolve_type(&node) {
        Some(name) if name == node.object_type() => Ok(Some(node)),
        resolved => Err(Error::new(format!(
            "abstract type Node must resolve to an object type at runtime for field Query.node, \
             received {resolved:?}"
        ))),
    }
}

/// Create the schema for the GraphQL API, with no data behind it.
pub fn generate() -> Schema<Query, EmptyMutation, EmptySubscription> {
    generate_with(Unresolved)
}

/// Create the schema for the GraphQL API, resolving nodes with `resolver`.
pub fn generate_with(
    resolver: impl NodeResolver + 'static,
) -> Schema<Query, EmptyMutation, EmptySubscription> {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data::<Resolver>(Arc::new(resolver))
        .finish()
}
