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

//! Front-ends that extract [`TargetType`] metadata from `syn` syntax trees.

use syn::{
    Attribute, Data, DeriveInput, Fields, ImplItem, Item, ItemImpl, ItemStruct, Meta, Type,
};

use crate::model::{Member, TargetType, TypeDescriptor, Visibility};

/// Metadata of a `#[derive(Builder)]` input.
///
/// Only named fields become members; tuple fields have no name to build a
/// setter from. Enums, unions and generic structs are rejected.
pub fn from_derive_input(input: &DeriveInput, package: &str) -> syn::Result<TargetType> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Builder can only be derived for structs",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Builder does not support generic parameters",
        ));
    }

    let target = TargetType::new(input.ident.clone(), package).with_vis(input.vis.clone());
    Ok(with_fields(target, &data_struct.fields))
}

/// Whether `attrs` carry the argument-less `#[builder]` marker, under any path.
pub fn is_marked(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| match &attr.meta {
        Meta::Path(path) => path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "builder"),
        _ => false,
    })
}

/// Every `#[builder]`-marked struct at the top level of `file`.
///
/// Methods and constants of inherent `impl` blocks for the struct found in the
/// same file are recorded as members too. Generic structs are skipped.
pub fn discover(file: &syn::File, package: &str) -> Vec<TargetType> {
    let mut targets = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item_struct) if is_marked(&item_struct.attrs) => Some(item_struct),
            _ => None,
        })
        .filter_map(|item_struct| from_item_struct(item_struct, package))
        .collect::<Vec<_>>();

    for item_impl in file.items.iter().filter_map(|item| match item {
        Item::Impl(item_impl) => Some(item_impl),
        _ => None,
    }) {
        let Some(target) = targets
            .iter_mut()
            .find(|target| is_inherent_impl_of(item_impl, target))
        else {
            continue;
        };
        for impl_item in &item_impl.items {
            match impl_item {
                ImplItem::Fn(method) => target.members.push(Member::method(
                    method.sig.ident.clone(),
                    Visibility::from(&method.vis),
                )),
                ImplItem::Const(constant) => target.members.push(Member::constant(
                    constant.ident.clone(),
                    Visibility::from(&constant.vis),
                    TypeDescriptor::new(constant.ty.clone()),
                )),
                _ => {}
            }
        }
    }

    tracing::debug!(package, count = targets.len(), "discovered marked structs");
    targets
}

fn from_item_struct(item_struct: &ItemStruct, package: &str) -> Option<TargetType> {
    if !item_struct.generics.params.is_empty() {
        tracing::warn!(
            package,
            name = %item_struct.ident,
            "skipping generic struct, generic parameters are not supported"
        );
        return None;
    }
    let target =
        TargetType::new(item_struct.ident.clone(), package).with_vis(item_struct.vis.clone());
    Some(with_fields(target, &item_struct.fields))
}

fn with_fields(target: TargetType, fields: &Fields) -> TargetType {
    let Fields::Named(named) = fields else {
        return target;
    };
    named.named.iter().fold(target, |target, field| match &field.ident {
        Some(ident) => target.with_member(Member::field(
            ident.clone(),
            Visibility::from(&field.vis),
            TypeDescriptor::new(field.ty.clone()),
        )),
        None => target,
    })
}

fn is_inherent_impl_of(item_impl: &ItemImpl, target: &TargetType) -> bool {
    if item_impl.trait_.is_some() || !item_impl.generics.params.is_empty() {
        return false;
    }
    let Type::Path(type_path) = item_impl.self_ty.as_ref() else {
        return false;
    };
    type_path.qself.is_none()
        && type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == target.ident && segment.arguments.is_empty())
}
