//! Method registry: name → handler, populated once at start-up.
//!
//! After start-up the registry is only read, so it is shared across
//! transport tasks behind an `Arc` without any locking.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::error::HandlerError;
use crate::schema::{self, SchemaValidationError};

/// A single JSON-RPC method implementation.
///
/// Receives params already normalised by the dispatcher (an object or an
/// array, never absent) and returns the `result` value.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn call(&self, params: Value) -> Result<Value, HandlerError>;
}

#[async_trait]
impl<F, Fut> MethodHandler for F
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
    async fn call(&self, params: Value) -> Result<Value, HandlerError> {
        (self)(params).await
    }
}

/// Public metadata for a method, advertised in the discovery manifest.
#[derive(Debug, Clone, Default)]
pub struct MethodSchema {
    pub description: String,
    pub params: Option<Value>,
}

impl MethodSchema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("method `{0}` is already registered")]
    DuplicateMethod(String),
    #[error("method name must not be empty")]
    EmptyName,
    #[error("invalid params schema for `{method}`: {source}")]
    InvalidSchema {
        method: String,
        #[source]
        source: SchemaValidationError,
    },
}

/// Registry record binding a method name to its handler.
pub struct MethodDescriptor {
    name: String,
    schema: MethodSchema,
    validator: Option<Validator>,
    handler: Arc<dyn MethodHandler>,
}

impl MethodDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &MethodSchema {
        &self.schema
    }

    pub fn handler(&self) -> &dyn MethodHandler {
        self.handler.as_ref()
    }

    /// Check params against the declared schema, if any.
    ///
    /// Returns the list of violations on failure.
    pub fn validate_params(&self, params: &Value) -> Result<(), Vec<String>> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };
        match schema::check(validator, params) {
            Ok(()) => Ok(()),
            Err(SchemaValidationError::ValidationFailed(errors)) => Err(errors),
            Err(other) => Err(vec![other.to_string()]),
        }
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, MethodDescriptor>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method. Fails if the name is empty, already taken, or the
    /// params schema does not compile.
    pub fn register<H>(
        &mut self,
        name: impl Into<String>,
        handler: H,
        schema: MethodSchema,
    ) -> Result<(), RegistryError>
    where
        H: MethodHandler + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.methods.contains_key(&name) {
            return Err(RegistryError::DuplicateMethod(name));
        }

        let validator = match &schema.params {
            Some(params_schema) => Some(schema::compile(params_schema).map_err(|source| {
                RegistryError::InvalidSchema {
                    method: name.clone(),
                    source,
                }
            })?),
            None => None,
        };

        tracing::debug!(method = %name, "registered method");
        self.methods.insert(
            name.clone(),
            MethodDescriptor {
                name,
                schema,
                validator,
                handler: Arc::new(handler),
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    /// Every descriptor, in no particular order.
    pub fn list(&self) -> impl Iterator<Item = &MethodDescriptor> + '_ {
        self.methods.values()
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
