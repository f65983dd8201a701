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

//! The terminal `build()` call.

use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;

use crate::{
    helper::string::{conventional_setter_name, value_binding_name},
    model::Field,
};

/// `pub fn build(&mut self) -> <Target>`.
///
/// The target is created through `Default` and every stored value is moved
/// out of the builder into it through the target's own `set_<field>` setter,
/// in field order. Fields left unset keep the target's default. The builder
/// is left empty, so field types need no `Clone`. The setter call is spanned
/// on the field, so a missing setter is reported there by rustc.
pub fn generate_build_method(target: &Ident, target_var: &Ident, fields: &[Field]) -> TokenStream2 {
    let binding = Ident::new(
        &value_binding_name(&target_var.to_string()),
        Span::mixed_site(),
    );
    let calls = fields.iter().map(|field| {
        let ident = &field.ident;
        let setter = Ident::new(&conventional_setter_name(&field.name()), ident.span());
        quote! {
            if let ::core::option::Option::Some(#binding) =
                ::core::option::Option::take(&mut self.#ident)
            {
                #target_var.#setter(#binding);
            }
        }
    });

    let doc = format!(
        "Creates a [`{}`] and moves every value set so far into it.",
        target.unraw()
    );

    quote! {
        #[doc = #doc]
        #[allow(non_snake_case, unused_mut)]
        pub fn build(&mut self) -> #target {
            let mut #target_var: #target = ::core::default::Default::default();
            #(#calls)*
            #target_var
        }
    }
}
