//! Procedural macros for defining board operations
//!
//! `#[operation]` reads the struct's fields and doc comments and implements
//! `taskboard_operations::Operation` for it, so parameter metadata is never
//! written twice. `#[param]` is a marker the operation macro reads.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Field, Ident, Lit, Meta, Token, Type,
};

/// Attribute macro for defining an operation
///
/// # Usage
///
/// ```ignore
/// #[operation(verb = "add", noun = "task", description = "Create a new task")]
/// #[derive(Debug, Deserialize, Serialize)]
/// pub struct AddTask {
///     /// The task title
///     #[param(short = 't', alias = "name")]
///     pub title: String,
///
///     /// Optional description
///     #[param(alias = "desc")]
///     pub description: Option<String>,
/// }
///
/// #[operation(verb = "get", noun = "board", description = "Show the board", read_only)]
/// #[derive(Debug, Default, Deserialize, Serialize)]
/// pub struct GetBoard {}
/// ```
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as OperationArgs);
    let input = parse_macro_input!(item as DeriveInput);

    match expand_operation(&args, &input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_operation(
    args: &OperationArgs,
    input: &DeriveInput,
) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let verb = &args.verb;
    let noun = &args.noun;
    let description = &args.description;
    let read_only = args.read_only;
    let op = format!("{} {}", verb, noun);

    let param_metas: Vec<_> = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => fields.named.iter().map(generate_param_meta).collect(),
            syn::Fields::Unit => Vec::new(),
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "operation macro does not support tuple structs",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "operation macro only supports structs",
            ))
        }
    };

    let num_params = param_metas.len();

    // `#[param]` is only meaningful to this macro; drop it from the emitted struct
    let mut item = input.clone();
    if let syn::Data::Struct(data) = &mut item.data {
        for field in data.fields.iter_mut() {
            field.attrs.retain(|attr| !attr.path().is_ident("param"));
        }
    }

    Ok(quote! {
        #item

        impl #name {
            /// Canonical "verb noun" string for this operation
            pub const OP: &'static str = #op;
        }

        impl taskboard_operations::Operation for #name {
            fn verb(&self) -> &'static str {
                #verb
            }

            fn noun(&self) -> &'static str {
                #noun
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn op_string(&self) -> &'static str {
                #op
            }

            fn is_read_only(&self) -> bool {
                #read_only
            }

            fn parameters(&self) -> &'static [taskboard_operations::ParamMeta] {
                static PARAMS: [taskboard_operations::ParamMeta; #num_params] = [
                    #(#param_metas),*
                ];
                &PARAMS
            }
        }
    })
}

/// Arguments for the #[operation(...)] attribute
struct OperationArgs {
    verb: String,
    noun: String,
    description: String,
    read_only: bool,
}

impl Parse for OperationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut verb = None;
        let mut noun = None;
        let mut description = None;
        let mut read_only = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            // Bare flags carry no value
            if ident == "read_only" {
                read_only = true;
            } else {
                input.parse::<Token![=]>()?;
                let value: Lit = input.parse()?;

                let value_str = match value {
                    Lit::Str(s) => s.value(),
                    _ => return Err(syn::Error::new_spanned(value, "expected string literal")),
                };

                match ident.to_string().as_str() {
                    "verb" => verb = Some(value_str),
                    "noun" => noun = Some(value_str),
                    "description" => description = Some(value_str),
                    other => {
                        return Err(syn::Error::new_spanned(
                            ident,
                            format!("unknown attribute: {}", other),
                        ))
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(OperationArgs {
            verb: verb.ok_or_else(|| input.error("missing 'verb' attribute"))?,
            noun: noun.ok_or_else(|| input.error("missing 'noun' attribute"))?,
            description: description
                .ok_or_else(|| input.error("missing 'description' attribute"))?,
            read_only,
        })
    }
}

/// Generate ParamMeta for a named field
fn generate_param_meta(field: &Field) -> proc_macro2::TokenStream {
    let name = field
        .ident
        .as_ref()
        .map(|ident| ident.to_string())
        .unwrap_or_default();

    let description = extract_doc_comment(&field.attrs);

    // Option<T> and #[serde(default)] fields are optional
    let required = !is_option_type(&field.ty) && !has_serde_default(&field.attrs);

    let param_type = rust_type_to_param_type(&field.ty);

    let (short, aliases) = extract_param_attrs(&field.attrs);

    let short_expr = match short {
        Some(c) => quote! { Some(#c) },
        None => quote! { None },
    };

    let required_call = if required {
        quote! { .required() }
    } else {
        quote! {}
    };

    quote! {
        taskboard_operations::ParamMeta::new(#name)
            .description(#description)
            .param_type(#param_type)
            #required_call
            .short_opt(#short_expr)
            .aliases(&[#(#aliases),*])
    }
}

/// Join the `///` lines of a field into one description
fn extract_doc_comment(attrs: &[Attribute]) -> String {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            match &attr.meta {
                Meta::NameValue(nv) => match &nv.value {
                    Expr::Lit(lit) => match &lit.lit {
                        Lit::Str(s) => Some(s.value().trim().to_string()),
                        _ => None,
                    },
                    _ => None,
                },
                _ => None,
            }
        })
        .collect();

    docs.join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}

/// Detect `#[serde(default)]` or `#[serde(default = "...")]`
fn has_serde_default(attrs: &[Attribute]) -> bool {
    let mut found = false;
    for attr in attrs {
        if attr.path().is_ident("serde") {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    found = true;
                    if meta.input.peek(Token![=]) {
                        meta.input.parse::<Token![=]>()?;
                        let _: Lit = meta.input.parse()?;
                    }
                } else if meta.input.peek(Token![=]) {
                    meta.input.parse::<Token![=]>()?;
                    let _: Lit = meta.input.parse()?;
                }
                Ok(())
            });
        }
    }
    found
}

/// Map a Rust field type to its ParamType
fn rust_type_to_param_type(ty: &Type) -> proc_macro2::TokenStream {
    if let Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            let ident = segment.ident.to_string();
            match ident.as_str() {
                "Option" => {
                    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                        if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                            return rust_type_to_param_type(inner);
                        }
                    }
                }
                "Vec" | "Tags" => {
                    return quote! { taskboard_operations::ParamType::Array };
                }
                "bool" => {
                    return quote! { taskboard_operations::ParamType::Boolean };
                }
                "i32" | "i64" | "u32" | "u64" | "usize" | "isize" => {
                    return quote! { taskboard_operations::ParamType::Integer };
                }
                "f32" | "f64" => {
                    return quote! { taskboard_operations::ParamType::Number };
                }
                _ => {}
            }
        }
    }
    // Strings, ids and enums all travel as strings
    quote! { taskboard_operations::ParamType::String }
}

/// Extract #[param(short = 'x', alias = "y")] attributes
fn extract_param_attrs(attrs: &[Attribute]) -> (Option<char>, Vec<String>) {
    let mut short = None;
    let mut aliases = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("param") {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("short") {
                    meta.input.parse::<Token![=]>()?;
                    let lit: Lit = meta.input.parse()?;
                    if let Lit::Char(c) = lit {
                        short = Some(c.value());
                    }
                } else if meta.path.is_ident("alias") {
                    meta.input.parse::<Token![=]>()?;
                    let lit: Lit = meta.input.parse()?;
                    if let Lit::Str(s) = lit {
                        aliases.push(s.value());
                    }
                }
                Ok(())
            });
        }
    }

    (short, aliases)
}

/// Marker for field-level parameter metadata; read by `#[operation]`
#[proc_macro_attribute]
pub fn param(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
