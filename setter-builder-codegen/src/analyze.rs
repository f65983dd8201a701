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

use std::rc::Rc;

use proc_macro2::Ident;
use syn::ext::IdentExt;

use crate::{
    graph::{
        self, add_train, mapkey, traverse, StructElement, StructGraph, StructMap, StructRelation,
    },
    helper::string::{conventional_setter_name, derive_builder_name},
    model::{Field, MemberKind, TargetType, Visibility},
};

pub fn run(graph: &mut StructGraph, map: &mut StructMap) {
    create_builder_ident(graph, map);
    create_builder_fields(graph, map);
}

fn create_builder_ident(graph: &mut StructGraph, map: &mut StructMap) {
    let Some(&ix) = map.get(mapkey::uniq::IDENT) else {
        return;
    };
    let StructElement::Ident(ident) = &graph[ix] else {
        return;
    };
    let builder = Ident::new(&derive_builder_name(&ident.unraw().to_string()), ident.span());
    let ix_builder = graph.add_node(StructElement::BuilderIdent(Rc::new(builder)));
    graph.add_edge(ix, ix_builder, StructRelation::IdentToBuilderIdent);
    map.insert(mapkey::uniq::BUILDER_IDENT.to_string(), ix_builder);
}

/** Only private instance fields are builder-managed; everything else on the
member train is left alone. */
fn create_builder_fields(graph: &mut StructGraph, map: &mut StructMap) {
    let Some(&start) = map.get(mapkey::startp::MEMBER) else {
        return;
    };
    let selected = traverse(graph, &StructRelation::MemberTrain, start, |graph, node| {
        let StructElement::Member(member) = &graph[node] else {
            return None;
        };
        if member.kind != MemberKind::Field || member.vis != Visibility::Private {
            return None;
        }
        let ty = member.ty.clone()?;
        Some((
            node,
            Field {
                ident: member.ident.clone(),
                ty,
            },
        ))
    });

    let (members, fields): (Vec<_>, Vec<_>) = selected.into_iter().unzip();
    add_train!(graph, map, fields, BuilderField, BuilderFieldTrain);
    for (i, member) in members.into_iter().enumerate() {
        if let Some(&field) = map.get(&format!("BuilderField{}", i)) {
            graph.add_edge(member, field, StructRelation::MemberToBuilderField);
        }
    }
}

/// The builder fields laid down by [`run`], in emission order.
pub fn builder_fields(graph: &StructGraph, map: &StructMap) -> Vec<Field> {
    let Some(&start) = map.get(mapkey::startp::BUILDER_FIELD) else {
        return Vec::new();
    };
    traverse(
        graph,
        &StructRelation::BuilderFieldTrain,
        start,
        |graph, node| match &graph[node] {
            StructElement::BuilderField(field) => Some(field.clone()),
            _ => None,
        },
    )
}

/// Private instance fields of `target`, in declaration order.
///
/// Fields carrying any `pub` qualifier, methods and constants are skipped.
pub fn select_builder_fields(target: &TargetType) -> Vec<Field> {
    let (mut graph, mut map) = graph::from_target(target);
    run(&mut graph, &mut map);
    builder_fields(&graph, &map)
}

/// Conventional setters that `fields` rely on but `target` does not declare.
///
/// Only meaningful when the front-end saw the target's `impl` blocks.
pub fn missing_setters(target: &TargetType, fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .map(|field| conventional_setter_name(&field.name()))
        .filter(|setter| !target.has_method(setter))
        .collect()
}
