use std::sync::Arc;

use crate::{Field, Queryable, Record, ScalarCodec, TypeRef};

struct DateTime;

impl ScalarCodec for DateTime {
    const NAME: &'static str = "DateTime";
}

impl Queryable for DateTime {
    fn type_ref() -> TypeRef {
        Self::scalar_type_ref()
    }
}

#[test]
fn std_scalars() {
    assert_eq!(i32::type_ref(), TypeRef::scalar("Int"));
    assert_eq!(u64::type_ref(), TypeRef::scalar("Int"));
    assert_eq!(f64::type_ref(), TypeRef::scalar("Float"));
    assert_eq!(bool::type_ref(), TypeRef::scalar("Boolean"));
    assert_eq!(String::type_ref(), TypeRef::Text);
    assert_eq!(<&str>::type_ref(), TypeRef::Text);
}

#[test]
fn std_wrappers() {
    assert_eq!(
        Option::<i32>::type_ref(),
        TypeRef::optional(TypeRef::scalar("Int"))
    );
    assert_eq!(
        Vec::<Option<bool>>::type_ref(),
        TypeRef::list(TypeRef::optional(TypeRef::scalar("Boolean")))
    );
    assert_eq!(<[u8; 4]>::type_ref(), TypeRef::list(TypeRef::scalar("Int")));
}

#[test]
fn pointers_are_transparent() {
    assert_eq!(Box::<i32>::type_ref(), TypeRef::scalar("Int"));
    assert_eq!(Arc::<str>::type_ref(), TypeRef::Text);
    assert_eq!(
        <&Option<String>>::type_ref(),
        TypeRef::optional(TypeRef::Text)
    );
}

#[test]
fn unwrap_wrappers_reaches_innermost() {
    let ty = TypeRef::optional(TypeRef::list(TypeRef::optional(TypeRef::scalar("Int"))));

    assert_eq!(ty.unwrap_wrappers(), &TypeRef::scalar("Int"));
}

#[test]
fn scalar_codec_is_opaque() {
    let TypeRef::Record(record) = DateTime::type_ref() else {
        panic!("expected record");
    };

    assert!(record.is_opaque());
    assert_eq!(record.name(), Some("DateTime"));
    assert!(DateTime::type_ref().expandable_record().is_none());
}

#[test]
fn field_display_name_prefers_override() {
    let plain = Field::of::<String>("login");
    let renamed = Field::of::<String>("login").rename("user(login:$login)");

    assert_eq!(plain.display_name(), "login");
    assert_eq!(renamed.display_name(), "user(login:$login)");
    assert_eq!(renamed.name(), "login");
}

#[test]
fn field_inlined_only_for_expandable_embeds() {
    let inner = Record::new().field(Field::of::<i32>("a"));

    let embedded = Field::new("inner", inner.clone().into()).embedded();
    let renamed = Field::new("inner", inner.clone().into())
        .embedded()
        .rename("other");
    let through_option = Field::new("inner", TypeRef::optional(inner.into())).embedded();
    let scalar = Field::of::<i32>("count").embedded();
    let opaque = Field::of::<DateTime>("at").embedded();

    assert!(embedded.is_inlined());
    assert!(!renamed.is_inlined());
    assert!(through_option.is_inlined());
    assert!(!scalar.is_inlined());
    assert!(!opaque.is_inlined());
}

#[test]
fn display_describes_type() {
    let ty = TypeRef::list(TypeRef::optional(Record::new().into()));

    assert_eq!(ty.to_string(), "[<anonymous record>?]");
    assert_eq!(TypeRef::scalar("").to_string(), "<unnamed scalar>");
    assert_eq!(DateTime::type_ref().to_string(), "DateTime (opaque)");
    assert_eq!(TypeRef::Text.to_string(), "text");
}
