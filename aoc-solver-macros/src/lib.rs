//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, Fields, Lit, LitInt, LitStr};

/// Largest part count accepted by `#[aoc_solver(max_parts = N)]`
const MAX_PARTS: u8 = 25;

/// Derive macro that implements `Solver` by dispatching to `PartSolver<N>`
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts (1-25); each of
///   `PartSolver<1>..=PartSolver<max_parts>` must be implemented.
///
/// Part numbers outside `1..=max_parts` return
/// `SolveError::PartNotImplemented(part)`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day8;
///
/// impl AocParser for Day8 { /* ... */ }
/// impl PartSolver<1> for Day8 { /* ... */ }
/// impl PartSolver<2> for Day8 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = find_attr(&input.attrs, "aoc_solver").ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
        )
    })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            let parts: u8 = lit.base10_parse()?;
            if !(1..=MAX_PARTS).contains(&parts) {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("max_parts must be between 1 and {}", MAX_PARTS),
                ));
            }
            max_parts = Some(parts);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts =
        max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max_parts`"))?;

    let parts = (1..=max_parts).map(Literal::u8_unsuffixed);
    let arms = parts.map(|n| {
        quote! {
            #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
        }
    });
    let parts_lit = Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2020)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "grid"])
///
/// The type must be a unit struct implementing `Solver`; otherwise the
/// generated bound check fails with
/// `the trait bound `YourSolver: Solver` is not satisfied`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2020, day = 8, tags = ["interpreter"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    match &input.data {
        syn::Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AutoRegisterSolver can only be derived for unit structs",
            ));
        }
    }

    let aoc_attr = find_attr(&input.attrs, "aoc").ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "AutoRegisterSolver derive macro requires #[aoc(...)] attribute",
        )
    })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;
    let year = Literal::u16_unsuffixed(year);
    let day = Literal::u8_unsuffixed(day);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ident))
}
