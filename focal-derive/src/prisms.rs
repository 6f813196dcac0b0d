//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every variant gets a prism whose part is an owned copy of the payload:
//! `()` for unit variants, the field type for single-field tuple variants, and
//! a tuple of the field types (declaration order) for everything else.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => generate_unit_variant_prism(variant_name, &method_name),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            generate_single_field_prism(variant_name, &method_name, field_type)
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("field_{}", index))
                .collect();
            let pattern = quote! { Self::#variant_name(#(#bindings),*) };
            generate_tuple_part_prism(variant_name, &method_name, &field_types, &bindings, &pattern)
        }
        Fields::Named(fields) => {
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            let bindings: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let pattern = quote! { Self::#variant_name { #(#bindings),* } };
            generate_tuple_part_prism(variant_name, &method_name, &field_types, &bindings, &pattern)
        }
    }
}

fn prism_doc(variant_name: &Ident) -> String {
    format!(" Returns a prism focusing on the `{variant_name}` variant.")
}

/// Generates a prism for a unit variant. The part type is `()`.
fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let doc = prism_doc(variant_name);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::Prism<Self, ()> + ::core::clone::Clone {
            ::focal::optics::FunctionPrism::new(
                |whole: &Self| match whole {
                    Self::#variant_name => ::core::option::Option::Some(()),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |(): ()| Self::#variant_name,
            )
        }
    }
}

/// Generates a prism for a tuple variant with a single field.
fn generate_single_field_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
) -> TokenStream2 {
    let doc = prism_doc(variant_name);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::Prism<Self, #field_type> + ::core::clone::Clone
        where
            #field_type: ::core::clone::Clone,
        {
            ::focal::optics::FunctionPrism::new(
                |whole: &Self| match whole {
                    Self::#variant_name(part) => ::core::option::Option::Some(::core::clone::Clone::clone(part)),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |part: #field_type| Self::#variant_name(part),
            )
        }
    }
}

/// Generates a prism whose part is a tuple of the variant's fields.
///
/// Used for multi-field tuple variants and for struct variants; `pattern`
/// binds every field to the matching name in `bindings`.
fn generate_tuple_part_prism<B: quote::ToTokens>(
    variant_name: &Ident,
    method_name: &Ident,
    field_types: &[&Type],
    bindings: &[B],
    pattern: &TokenStream2,
) -> TokenStream2 {
    let doc = prism_doc(variant_name);
    let tuple_type = quote! { (#(#field_types,)*) };

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::Prism<Self, #tuple_type> + ::core::clone::Clone
        where
            #tuple_type: ::core::clone::Clone,
        {
            ::focal::optics::FunctionPrism::new(
                |whole: &Self| match whole {
                    #pattern => ::core::option::Option::Some((#(::core::clone::Clone::clone(#bindings),)*)),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |(#(#bindings,)*): #tuple_type| #pattern,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
