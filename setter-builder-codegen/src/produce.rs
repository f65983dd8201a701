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

//! Turns a [`TargetType`] into the builder's tokens and source text.

pub mod build_method;
pub mod builder;
pub mod setters;

use std::path::PathBuf;

use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use syn::ext::IdentExt;

use crate::{
    analyze,
    graph::{self, mapkey, StructElement},
    helper::{
        package_dir,
        string::{derive_builder_name, derive_target_variable_name},
    },
    model::{Field, TargetType},
};

/// One fluent setter of a generated builder.
#[derive(Debug, Clone, Serialize)]
pub struct Setter {
    /// Method name, identical to the field name.
    pub name: String,
    /// Field the setter stores into.
    pub field: String,
    /// Always the builder itself.
    pub returns: String,
}

/// Everything needed to emit one builder.
#[derive(Debug, Clone)]
pub struct GeneratedBuilder {
    /// Module path of the target, `::`-separated.
    pub package: String,
    /// The marked struct.
    pub target: Ident,
    /// `<Target>Builder`.
    pub ident: Ident,
    /// Local variable holding the instance inside `build()`.
    pub target_var: Ident,
    /// Visibility shared with the target.
    pub vis: syn::Visibility,
    /// Builder-managed fields, in declaration order.
    pub fields: Vec<Field>,
    /// One setter per field, same order.
    pub setters: Vec<Setter>,
}

impl GeneratedBuilder {
    /// Selects the target's private fields and derives every name the
    /// builder needs.
    pub fn new(target: &TargetType) -> Self {
        let (mut graph, mut map) = graph::from_target(target);
        analyze::run(&mut graph, &mut map);

        let ident = match map.get(mapkey::uniq::BUILDER_IDENT).map(|&ix| &graph[ix]) {
            Some(StructElement::BuilderIdent(ident)) => Ident::clone(ident),
            _ => Ident::new(&derive_builder_name(&target.simple_name()), Span::call_site()),
        };
        let target_var = local_ident(&derive_target_variable_name(&target.simple_name()));
        let fields = analyze::builder_fields(&graph, &map);
        let setters = fields
            .iter()
            .map(|field| Setter {
                name: field.name(),
                field: field.name(),
                returns: ident.unraw().to_string(),
            })
            .collect();

        tracing::debug!(
            name = %target.qualified_name(),
            graph = ?graph,
            fields = fields.len(),
            "selected builder fields"
        );

        Self {
            package: target.package.clone(),
            target: target.ident.clone(),
            ident,
            target_var,
            vis: target.vis.clone(),
            fields,
            setters,
        }
    }

    /// The builder struct and its inherent impl.
    pub fn tokens(&self) -> TokenStream2 {
        let decls = builder::generate_field_declarations(&self.fields);
        let builder = builder::generate_struct(&self.vis, &self.target, &self.ident, &decls);
        let setters = setters::generate_setter_methods(&self.ident, &self.fields);
        let build = build_method::generate_build_method(&self.target, &self.target_var, &self.fields);
        let ident = &self.ident;

        quote! {
            #builder

            impl #ident {
                /// An empty builder; every field starts unset.
                pub fn new() -> Self {
                    ::core::default::Default::default()
                }

                #(#setters)*

                #build
            }
        }
    }

    /// Source text of one compilable unit, formatted with `prettyplease` and
    /// optionally behind an `@generated` banner.
    pub fn render(&self, header: bool) -> String {
        let mut source = String::new();
        if header {
            source.push_str(&format!(
                "// @generated by setter-builder from `{}`. Do not edit.\n\n",
                self.qualified_target()
            ));
        }
        let tokens = self.tokens();
        match syn::parse2::<syn::File>(tokens.clone()) {
            Ok(file) => source.push_str(&prettyplease::unparse(&file)),
            Err(err) => {
                tracing::warn!(name = %self.qualified_target(), error = %err, "rendering unformatted tokens");
                source.push_str(&tokens.to_string());
                source.push('\n');
            }
        }
        source
    }

    /// `<package dir>/<Target>Builder.rs`, relative to the output root.
    pub fn relative_path(&self) -> PathBuf {
        package_dir(&self.package).join(format!("{}.rs", self.ident.unraw()))
    }

    pub(crate) fn qualified_target(&self) -> String {
        let target = self.target.unraw().to_string();
        if self.package.is_empty() {
            target
        } else {
            format!("{}::{}", self.package, target)
        }
    }
}

/** `Type` lowers to the keyword `type`, which only works as a raw identifier;
`self`, `super` and `crate` cannot be raw at all. */
fn local_ident(name: &str) -> Ident {
    match name {
        "crate" | "self" | "super" => Ident::new(&format!("{}_", name), Span::call_site()),
        _ if syn::parse_str::<Ident>(name).is_err() => Ident::new_raw(name, Span::call_site()),
        _ => Ident::new(name, Span::call_site()),
    }
}

impl Serialize for GeneratedBuilder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut res = serializer.serialize_struct("GeneratedBuilder", 5)?;
        res.serialize_field("package", &self.package)?;
        res.serialize_field("class_name", &self.ident.unraw().to_string())?;
        res.serialize_field("target", &self.target.unraw().to_string())?;
        res.serialize_field("fields", &self.fields)?;
        res.serialize_field("setters", &self.setters)?;
        res.end()
    }
}

#[cfg(test)]
mod tests {
    use quote::format_ident;

    use super::*;
    use crate::model::{Member, TypeDescriptor, Visibility};

    fn user() -> TargetType {
        let string = TypeDescriptor::parse("String").unwrap();
        ["name", "email", "address", "phone"].into_iter().fold(
            TargetType::new(format_ident!("User"), "demo::model"),
            |target, name| {
                target.with_member(Member::field(
                    format_ident!("{}", name),
                    Visibility::Private,
                    string.clone(),
                ))
            },
        )
    }

    #[test]
    fn user_builder_shape() {
        let builder = GeneratedBuilder::new(&user());
        assert_eq!(builder.ident, "UserBuilder");
        assert_eq!(builder.target_var, "user");
        assert_eq!(builder.fields.len(), 4);
        assert_eq!(builder.setters.len(), 4);
        assert!(builder.setters.iter().all(|s| s.returns == "UserBuilder"));
        assert_eq!(builder.relative_path(), PathBuf::from("demo/model/UserBuilder.rs"));
    }

    #[test]
    fn render_is_reproducible() {
        let first = GeneratedBuilder::new(&user()).render(true);
        let second = GeneratedBuilder::new(&user()).render(true);
        assert_eq!(first, second);
        assert!(first.starts_with("// @generated by setter-builder from `demo::model::User`."));
    }

    #[test]
    fn render_is_formatted() {
        let source = GeneratedBuilder::new(&user()).render(false);
        assert!(source.lines().count() > 20);
        assert!(source.contains("\nstruct UserBuilder {\n"));
        assert!(source.contains("    pub fn build(&mut self) -> User {\n"));
        assert!(source.contains("    name: ::core::option::Option<String>,\n"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn render_follows_declaration_order() {
        let source = GeneratedBuilder::new(&user()).render(false);
        let positions = ["set_name", "set_email", "set_address", "set_phone"]
            .map(|setter| source.find(setter).unwrap());
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tokens_parse_as_items() {
        let tokens = GeneratedBuilder::new(&user()).tokens();
        let file: syn::File = syn::parse2(tokens).unwrap();
        assert_eq!(file.items.len(), 2);
    }

    #[test]
    fn acronym_target_variable() {
        let target = TargetType::new(format_ident!("URL"), "");
        let builder = GeneratedBuilder::new(&target);
        assert_eq!(builder.ident, "URLBuilder");
        assert_eq!(builder.target_var, "uRL");
        assert_eq!(builder.relative_path(), PathBuf::from("URLBuilder.rs"));
    }

    #[test]
    fn keyword_target_variable_is_escaped() {
        let builder = GeneratedBuilder::new(&TargetType::new(format_ident!("Type"), ""));
        assert_eq!(builder.target_var.to_string(), "r#type");
        let builder = GeneratedBuilder::new(&TargetType::new(format_ident!("Super"), ""));
        assert_eq!(builder.target_var, "super_");
        assert!(syn::parse2::<syn::File>(builder.tokens()).is_ok());
    }

    #[test]
    fn serializes_as_manifest() {
        let json = serde_json::to_value(GeneratedBuilder::new(&user())).unwrap();
        assert_eq!(json["class_name"], "UserBuilder");
        assert_eq!(json["fields"][2]["name"], "address");
        assert_eq!(json["setters"][3]["returns"], "UserBuilder");
    }
}
