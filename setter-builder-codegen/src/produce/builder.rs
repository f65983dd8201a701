// Copyright (c) 2024 Andy Allison
//
// Licensed under either of
//
// * MIT license (LICENSE-MIT or http://opensource.org/licenses/MIT)
// * Apache License, Version 2.0 (LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0)
//
// at your option.
//
// Unless you explicitly state otherwise, any contribution intentionally submitted
// for inclusion in the work by you, as defined in the Apache-2.0 license, shall
// be dual licensed as above, without any additional terms or conditions.

//! The builder struct and its field slots.

use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;

use crate::model::Field;

/// One private `Option<T>` slot per field; unset until its setter runs.
pub fn generate_field_declarations(fields: &[Field]) -> Vec<TokenStream2> {
    fields
        .iter()
        .map(|Field { ident, ty }| quote! { #ident: ::core::option::Option<#ty> })
        .collect()
}

pub(crate) fn generate_struct(
    vis: &syn::Visibility,
    target: &Ident,
    ident: &Ident,
    decls: &[TokenStream2],
) -> TokenStream2 {
    let doc = format!("Builder for [`{}`].", target.unraw());
    quote! {
        #[doc = #doc]
        #[derive(Default)]
        #vis struct #ident {
            #(#decls),*
        }
    }
}
