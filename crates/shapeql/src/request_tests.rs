use serde_json::json;
use shapeql_core::{Field, Queryable, Record, TypeRef};

use crate::{OperationBuilder, OperationKind, OperationOption, Request, Variables};

struct Viewer;

impl Queryable for Viewer {
    fn type_ref() -> TypeRef {
        Record::named("Viewer")
            .field(Field::of::<String>("login"))
            .into()
    }
}

#[test]
fn request_with_everything() {
    let vars = Variables::new()
        .with("first", &10i32)
        .unwrap()
        .with("after", &Option::<String>::None)
        .unwrap();

    let request = OperationBuilder::default()
        .request::<Viewer>(
            OperationKind::Query,
            &vars,
            &[OperationOption::name("Viewer")],
        )
        .unwrap();

    assert_eq!(request.operation_name.as_deref(), Some("Viewer"));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "query": "query Viewer($after:ID$first:Int!){login}",
            "variables": {"after": null, "first": 10},
            "operationName": "Viewer",
        })
    );
}

#[test]
fn anonymous_request_without_variables() {
    let vars = Variables::new();

    let request = OperationBuilder::default()
        .request::<Viewer>(OperationKind::Mutation, &vars, &[])
        .unwrap();

    let body = serde_json::to_string(&request).unwrap();

    insta::assert_snapshot!(body, @r#"{"query":"mutation{login}"}"#);
}

#[test]
fn new_drops_empty_name() {
    let vars = Variables::new();

    let request = Request::new("query {login}".to_string(), &vars, String::new());

    assert_eq!(request.operation_name, None);
}
