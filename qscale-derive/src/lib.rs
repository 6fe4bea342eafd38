//! Derive macro implementation used by `qscale`.
//!
//! `qscale-derive` is re-exported by the `qscale` facade. The `Representation` derive expands in terms of
//! `::qscale::Representation` and `::qscale::QuantityValues` unless another crate path is given, so crates that
//! depend on `qscale-core` directly must pass `#[representation(crate = ::qscale_core)]`.
//!
//! # Generated impls
//!
//! For a single-field struct `MyRep(Inner)` (tuple or named), the derive implements:
//!
//! - `Representation for MyRep`, delegating every item to `Inner`
//! - `QuantityValues for MyRep`, delegating to `Inner`
//! - `Add`, `Sub`, `Mul`, `Div` and `Rem` with `Output = MyRep`, applied to the wrapped values
//!
//! `Copy`, `PartialEq` and `PartialOrd` are not generated; derive them with the standard derives.
//!
//! # Attributes
//!
//! The derive reads an optional `#[representation(...)]` attribute:
//!
//! - `floating = true | false`: overrides the floating-point flag of `Inner`
//! - `crate = path`: path of the crate exporting the traits (default `::qscale`)
//! - `arithmetic = false`: skip the operator impls when the type defines its own

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, Ident, LitBool, Member, Path, Token,
    Type,
};

/// Derive `Representation`, `QuantityValues` and the arithmetic operators for a single-field wrapper.
///
/// The optional `#[representation(...)]` attribute accepts `floating`, `crate` and `arithmetic`.
#[proc_macro_derive(Representation, attributes(representation))]
pub fn derive_representation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_representation_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_representation_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = parse_representation_attribute(&input.attrs)?;
    let (member, inner) = wrapped_field(&input)?;
    let krate = &attr.krate;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#inner: #krate::Representation));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let wrap = |value: TokenStream2| match &member {
        Member::Named(ident) => quote!(Self { #ident: #value }),
        Member::Unnamed(_) => quote!(Self(#value)),
    };

    let floating = match attr.floating {
        Some(true) => quote!(#krate::typenum::B1),
        Some(false) => quote!(#krate::typenum::B0),
        None => quote!(<#inner as #krate::Representation>::Floating),
    };

    let one = wrap(quote!(<#inner as #krate::Representation>::one()));
    let from_factor = wrap(quote!(<#inner as #krate::Representation>::from_factor(factor)));
    let checked = ["checked_add", "checked_sub", "checked_mul", "checked_div", "checked_rem"]
        .iter()
        .map(|method| {
            let method = Ident::new(method, proc_macro2::Span::call_site());
            let rewrapped = wrap(quote!(value));
            quote! {
                #[inline]
                fn #method(self, rhs: Self) -> ::core::option::Option<Self> {
                    <#inner as #krate::Representation>::#method(self.#member, rhs.#member)
                        .map(|value| #rewrapped)
                }
            }
        });

    let mut values_generics = input.generics.clone();
    values_generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#inner: #krate::QuantityValues));
    let (values_impl_generics, _, values_where_clause) = values_generics.split_for_impl();
    let zero = wrap(quote!(<#inner as #krate::QuantityValues>::zero()));
    let min = wrap(quote!(<#inner as #krate::QuantityValues>::min()));
    let max = wrap(quote!(<#inner as #krate::QuantityValues>::max()));

    let arithmetic = if attr.arithmetic {
        arithmetic_impls(&input, &member, &inner, &wrap)
    } else {
        TokenStream2::new()
    };

    let expanded = quote! {
        impl #impl_generics #krate::Representation for #name #ty_generics #where_clause {
            type Floating = #floating;

            const FACTOR_LIMIT: u64 = <#inner as #krate::Representation>::FACTOR_LIMIT;

            #[inline]
            fn one() -> Self {
                #one
            }

            #[inline]
            fn from_factor(factor: u64) -> Self {
                #from_factor
            }

            #(#checked)*
        }

        impl #values_impl_generics #krate::QuantityValues for #name #ty_generics #values_where_clause {
            #[inline]
            fn zero() -> Self {
                #zero
            }

            #[inline]
            fn min() -> Self {
                #min
            }

            #[inline]
            fn max() -> Self {
                #max
            }
        }

        #arithmetic
    };

    Ok(expanded)
}

fn arithmetic_impls(
    input: &DeriveInput,
    member: &Member,
    inner: &Type,
    wrap: &dyn Fn(TokenStream2) -> TokenStream2,
) -> TokenStream2 {
    let name = &input.ident;
    let ops = [("Add", "add"), ("Sub", "sub"), ("Mul", "mul"), ("Div", "div"), ("Rem", "rem")];

    ops.iter()
        .map(|(trait_name, method)| {
            let trait_ident = Ident::new(trait_name, proc_macro2::Span::call_site());
            let method_ident = Ident::new(method, proc_macro2::Span::call_site());

            let mut generics = input.generics.clone();
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#inner: ::core::ops::#trait_ident<Output = #inner>));
            let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
            let result = wrap(quote!(::core::ops::#trait_ident::#method_ident(self.#member, rhs.#member)));

            quote! {
                impl #impl_generics ::core::ops::#trait_ident for #name #ty_generics #where_clause {
                    type Output = Self;
                    #[inline]
                    fn #method_ident(self, rhs: Self) -> Self {
                        #result
                    }
                }
            }
        })
        .collect()
}

/// The single field of a struct, as a member accessor and its type.
fn wrapped_field(input: &DeriveInput) -> syn::Result<(Member, Type)> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Representation can only be derived for structs",
            ))
        }
    };

    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unnamed(fields) => &fields.unnamed,
        Fields::Unit => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Representation requires a struct with exactly one field",
            ))
        }
    };

    if fields.len() != 1 {
        return Err(syn::Error::new(
            input.ident.span(),
            "Representation requires a struct with exactly one field",
        ));
    }

    let field = &fields[0];
    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(0.into()),
    };
    Ok((member, field.ty.clone()))
}

/// Parsed contents of the `#[representation(...)]` attribute.
struct RepresentationAttribute {
    floating: Option<bool>,
    krate: Path,
    arithmetic: bool,
}

impl Default for RepresentationAttribute {
    fn default() -> Self {
        RepresentationAttribute {
            floating: None,
            krate: parse_quote!(::qscale),
            arithmetic: true,
        }
    }
}

impl Parse for RepresentationAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = RepresentationAttribute::default();

        while !input.is_empty() {
            let ident = Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "floating" => {
                    attr.floating = Some(input.parse::<LitBool>()?.value);
                }
                "crate" => {
                    attr.krate = input.parse()?;
                }
                "arithmetic" => {
                    attr.arithmetic = input.parse::<LitBool>()?.value;
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(attr)
    }
}

fn parse_representation_attribute(attrs: &[Attribute]) -> syn::Result<RepresentationAttribute> {
    for attr in attrs {
        if attr.path().is_ident("representation") {
            return attr.parse_args::<RepresentationAttribute>();
        }
    }

    Ok(RepresentationAttribute::default())
}
