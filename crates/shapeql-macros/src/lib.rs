use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Fields, FieldsNamed, Generics, LitStr,
    parse_macro_input, parse_quote,
};

use shapeql_core::utils::{to_camel_case, unraw};

/// Derive `shapeql::Queryable` from a type declaration.
///
/// Usage:
///
/// ```ignore
/// #[derive(Queryable)]
/// struct Viewer {
///     login: String,
///     #[graphql(name = "avatarUrl(size:72)")]
///     avatar: String,
///     #[graphql(embed)]
///     timestamps: Timestamps,
/// }
/// ```
///
/// Named-field structs become records whose fields are selected under their
/// lowerCamelCase names. Tuple structs and fieldless enums become named
/// scalars. `#[graphql(scalar)]` on the type implements `ScalarCodec`, which
/// turns it into an opaque leaf. `#[graphql(name = "...")]` on the type sets
/// the name used in variable signatures.
#[proc_macro_derive(Queryable, attributes(graphql))]
pub fn derive_queryable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct ContainerAttrs {
    name: Option<String>,
    scalar: bool,
}

#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    embed: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = parse_container_attrs(&input.attrs)?;
    let ident = &input.ident;
    let type_name = attrs
        .name
        .clone()
        .unwrap_or_else(|| unraw(&ident.to_string()).to_string());

    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    if attrs.scalar {
        return Ok(quote! {
            impl #impl_generics ::shapeql::ScalarCodec for #ident #ty_generics #where_clause {
                const NAME: &'static str = #type_name;
            }

            impl #impl_generics ::shapeql::Queryable for #ident #ty_generics #where_clause {
                fn type_ref() -> ::shapeql::TypeRef {
                    <Self as ::shapeql::ScalarCodec>::scalar_type_ref()
                }
            }
        });
    }

    let body = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => record_body(&type_name, fields)?,
            Fields::Unnamed(_) => scalar_body(&type_name),
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "unit structs have no GraphQL shape",
                ));
            }
        },
        Data::Enum(data) => {
            ensure_fieldless(data)?;
            scalar_body(&type_name)
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "unions cannot derive Queryable",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::shapeql::Queryable for #ident #ty_generics #where_clause {
            fn type_ref() -> ::shapeql::TypeRef {
                #body
            }
        }
    })
}

fn record_body(type_name: &str, fields: &FieldsNamed) -> syn::Result<TokenStream2> {
    let mut field_exprs = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let attrs = parse_field_attrs(&field.attrs)?;
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = to_camel_case(unraw(&ident.to_string()));
        let ty = &field.ty;

        let mut expr = quote! {
            ::shapeql::Field::new(#name, <#ty as ::shapeql::Queryable>::type_ref())
        };
        if let Some(rename) = attrs.name {
            expr = quote! { #expr.rename(#rename) };
        }
        if attrs.embed {
            expr = quote! { #expr.embedded() };
        }
        field_exprs.push(expr);
    }

    Ok(quote! {
        ::shapeql::TypeRef::Record(
            ::shapeql::Record::named(#type_name)
                #(.field(#field_exprs))*
        )
    })
}

fn scalar_body(type_name: &str) -> TokenStream2 {
    quote! { ::shapeql::TypeRef::scalar(#type_name) }
}

fn ensure_fieldless(data: &DataEnum) -> syn::Result<()> {
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "only fieldless enums can derive Queryable; use #[graphql(scalar)] for others",
            ));
        }
    }
    Ok(())
}

fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::shapeql::Queryable));
    }
    generics
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                out.name = Some(parse_non_empty(&meta)?);
                Ok(())
            } else if meta.path.is_ident("scalar") {
                out.scalar = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `scalar`"))
            }
        })?;
    }
    Ok(out)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                out.name = Some(parse_non_empty(&meta)?);
                Ok(())
            } else if meta.path.is_ident("embed") {
                out.embed = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `embed`"))
            }
        })?;
    }
    Ok(out)
}

fn parse_non_empty(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    let value = lit.value();
    if value.is_empty() {
        return Err(syn::Error::new_spanned(lit, "name must not be empty"));
    }
    Ok(value)
}
