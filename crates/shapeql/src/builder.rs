//! Configured entry points for building operations.

use shapeql_core::{Queryable, TypeRef};

use crate::operation::{OperationKind, assemble};
use crate::options::{OperationConfig, OperationOption, RawOption};
use crate::request::Request;
use crate::selection::write_selection_set;
use crate::variables::{Variables, write_variable_block};
use crate::{Config, Result};

/// Builds operation text under a fixed [`Config`].
#[derive(Clone, Debug, Default)]
pub struct OperationBuilder {
    config: Config,
}

impl OperationBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn query<T: Queryable + ?Sized>(
        &self,
        variables: &Variables,
        options: &[OperationOption],
    ) -> Result<String> {
        self.build::<T>(OperationKind::Query, variables, options)
    }

    pub fn mutation<T: Queryable + ?Sized>(
        &self,
        variables: &Variables,
        options: &[OperationOption],
    ) -> Result<String> {
        self.build::<T>(OperationKind::Mutation, variables, options)
    }

    pub fn subscription<T: Queryable + ?Sized>(
        &self,
        variables: &Variables,
        options: &[OperationOption],
    ) -> Result<String> {
        self.build::<T>(OperationKind::Subscription, variables, options)
    }

    pub fn build<T: Queryable + ?Sized>(
        &self,
        kind: OperationKind,
        variables: &Variables,
        options: &[OperationOption],
    ) -> Result<String> {
        self.build_for(kind, &T::type_ref(), variables, options)
    }

    /// Build from a shape descriptor rather than a Rust type.
    pub fn build_for(
        &self,
        kind: OperationKind,
        shape: &TypeRef,
        variables: &Variables,
        options: &[OperationOption],
    ) -> Result<String> {
        let config = OperationConfig::resolve(options);
        self.assemble_resolved(kind, shape, variables, &config)
    }

    /// Build with untyped options.
    ///
    /// Options are checked before anything is compiled; an unknown
    /// discriminant fails the whole build.
    pub fn build_raw<T: Queryable + ?Sized>(
        &self,
        kind: OperationKind,
        variables: &Variables,
        options: impl IntoIterator<Item = RawOption>,
    ) -> Result<String> {
        let config = OperationConfig::resolve_raw(options)?;
        self.assemble_resolved(kind, &T::type_ref(), variables, &config)
    }

    /// Build text plus the body a transport sends.
    pub fn request<'v, T: Queryable + ?Sized>(
        &self,
        kind: OperationKind,
        variables: &'v Variables,
        options: &[OperationOption],
    ) -> Result<Request<'v>> {
        let config = OperationConfig::resolve(options);
        let query = self.assemble_resolved(kind, &T::type_ref(), variables, &config)?;
        Ok(Request::new(query, variables, config.name))
    }

    fn assemble_resolved(
        &self,
        kind: OperationKind,
        shape: &TypeRef,
        variables: &Variables,
        config: &OperationConfig,
    ) -> Result<String> {
        tracing::debug!(
            %kind,
            name = %config.name,
            directives = config.directives.len(),
            variables = variables.len(),
            "building operation"
        );

        let selection = write_selection_set(shape)?;
        tracing::trace!(%selection, "compiled selection set");

        let mut variable_block = String::new();
        write_variable_block(&mut variable_block, variables, &self.config)?;
        if !variable_block.is_empty() {
            tracing::trace!(%variable_block, "compiled variable block");
        }

        Ok(assemble(kind, config, &variable_block, &selection))
    }
}

/// Build a query for `T` with the default config.
pub fn build_query<T: Queryable + ?Sized>(
    variables: &Variables,
    options: &[OperationOption],
) -> Result<String> {
    OperationBuilder::default().query::<T>(variables, options)
}

/// Build a mutation for `T` with the default config.
pub fn build_mutation<T: Queryable + ?Sized>(
    variables: &Variables,
    options: &[OperationOption],
) -> Result<String> {
    OperationBuilder::default().mutation::<T>(variables, options)
}

/// Build a subscription for `T` with the default config.
pub fn build_subscription<T: Queryable + ?Sized>(
    variables: &Variables,
    options: &[OperationOption],
) -> Result<String> {
    OperationBuilder::default().subscription::<T>(variables, options)
}
