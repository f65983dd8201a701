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

//! Fluent setters.

use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;

use crate::model::Field;

/// `pub fn <field>(&mut self, <field>: T) -> &mut <Builder>`, one per field.
/// Each stores its argument and hands back the same builder, so calls chain.
pub fn generate_setter_methods(builder: &Ident, fields: &[Field]) -> Vec<TokenStream2> {
    fields
        .iter()
        .map(|field| {
            let Field { ident, ty } = field;
            let doc = format!("Sets `{}`.", field.name());
            quote! {
                #[doc = #doc]
                pub fn #ident(&mut self, #ident: #ty) -> &mut #builder {
                    self.#ident = ::core::option::Option::Some(#ident);
                    self
                }
            }
        })
        .collect()
}
