//! Request body handed to a transport.

use serde::Serialize;

use crate::variables::Variables;

/// Standard GraphQL request body.
///
/// Serializes as `{"query": ..., "variables": {...}, "operationName": ...}`,
/// leaving out `variables` when there are none and `operationName` for
/// anonymous operations.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request<'a> {
    pub query: String,
    #[serde(skip_serializing_if = "no_variables")]
    pub variables: &'a Variables,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl<'a> Request<'a> {
    pub fn new(query: String, variables: &'a Variables, operation_name: String) -> Self {
        Self {
            query,
            variables,
            operation_name: Some(operation_name).filter(|name| !name.is_empty()),
        }
    }
}

fn no_variables(variables: &&Variables) -> bool {
    variables.is_empty()
}
