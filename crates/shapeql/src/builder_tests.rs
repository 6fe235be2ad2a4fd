#![allow(dead_code)]

use crate::{
    Config, Error, OperationBuilder, OperationKind, OperationOption, Queryable, RawOption,
    Record, TypeRef, Variables, build_mutation, build_query, build_subscription,
};

#[derive(Queryable)]
struct Person {
    name: String,
    age: Option<i32>,
}

#[test]
fn anonymous_query() {
    let out = build_query::<Person>(&Variables::new(), &[]).unwrap();

    insta::assert_snapshot!(out, @"query {name,age}");
}

#[test]
fn anonymous_mutation() {
    let out = build_mutation::<Person>(&Variables::new(), &[]).unwrap();

    insta::assert_snapshot!(out, @"mutation{name,age}");
}

#[test]
fn anonymous_subscription() {
    let out = build_subscription::<Person>(&Variables::new(), &[]).unwrap();

    insta::assert_snapshot!(out, @"subscription{name,age}");
}

#[test]
fn named_query_with_text_variable() {
    let vars = Variables::new().with("id", "abc").unwrap();

    let out = build_query::<Person>(&vars, &[OperationOption::name("GetThing")]).unwrap();

    insta::assert_snapshot!(out, @"query GetThing($id:ID!){name,age}");
}

#[test]
fn mutation_with_variables_and_directive() {
    let vars = Variables::new()
        .with("age", &42i32)
        .unwrap()
        .with("name", "Ada")
        .unwrap();
    let options = [
        OperationOption::name("UpdatePerson"),
        OperationOption::directive("@audit"),
    ];

    let out = build_mutation::<Person>(&vars, &options).unwrap();

    insta::assert_snapshot!(out, @"mutation UpdatePerson($age:Int!$name:ID!) @audit {name,age}");
}

#[test]
fn invalid_raw_option_fails_every_kind() {
    let builder = OperationBuilder::default();
    let vars = Variables::new();

    for kind in [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ] {
        let raws = [
            RawOption::new("operation_name", "Op"),
            RawOption::new("bogus", "x"),
        ];

        let err = builder.build_raw::<Person>(kind, &vars, raws).unwrap_err();

        assert_eq!(err, Error::InvalidOption("bogus".to_string()));
    }
}

#[test]
fn valid_raw_options_match_typed() {
    let builder = OperationBuilder::default();
    let vars = Variables::new();
    let raws = [
        RawOption::new("operation_name", "Op"),
        RawOption::new("operation_directive", "@live"),
    ];
    let typed = [OperationOption::name("Op"), OperationOption::directive("@live")];

    let raw_out = builder
        .build_raw::<Person>(OperationKind::Subscription, &vars, raws)
        .unwrap();
    let typed_out = builder
        .subscription::<Person>(&vars, &typed)
        .unwrap();

    assert_eq!(raw_out, typed_out);
    insta::assert_snapshot!(raw_out, @"subscription Op @live {name,age}");
}

#[test]
fn configured_text_scalar() {
    let builder = OperationBuilder::new(Config::new().text_scalar("String"));
    let vars = Variables::new().with("login", "octocat").unwrap();

    let out = builder
        .query::<Person>(&vars, &[OperationOption::name("User")])
        .unwrap();

    insta::assert_snapshot!(out, @"query User($login:String!){name,age}");
}

#[test]
fn scalar_root_fails() {
    let err = build_query::<i32>(&Variables::new(), &[]).unwrap_err();

    assert_eq!(err, Error::NonRecordRoot("Int".to_string()));
}

#[test]
fn list_root_is_unwrapped() {
    let out = build_query::<Vec<Person>>(&Variables::new(), &[]).unwrap();

    assert_eq!(out, "query {name,age}");
}

#[test]
fn unresolvable_variable_type_fails() {
    let mut vars = Variables::new();
    vars.insert_typed("filter", Record::new().into(), serde_json::json!({}));

    let err = build_query::<Person>(&vars, &[]).unwrap_err();

    assert!(matches!(err, Error::UnresolvableTypeName(_)));
}

#[test]
fn build_for_descriptor() {
    let shape = TypeRef::Record(
        Record::new().field(crate::Field::of::<bool>("ok")),
    );

    let out = OperationBuilder::default()
        .build_for(OperationKind::Mutation, &shape, &Variables::new(), &[])
        .unwrap();

    assert_eq!(out, "mutation{ok}");
}
