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

use std::{collections::VecDeque, rc::Rc};

use indexmap::{IndexMap, IndexSet};
use petgraph::{graph::NodeIndex, visit::EdgeRef, Direction, Graph};
use proc_macro2::Ident;
use serde::{Serialize, Serializer};
use serde_json::json;

use crate::model::{Field, Member, TargetType};

pub mod mapkey {
    pub mod uniq {
        pub const IDENT: &str = "Ident";
        pub const PACKAGE: &str = "Package";
        pub const BUILDER_IDENT: &str = "BuilderIdent";
    }
    pub mod startp {
        pub const MEMBER: &str = "Member0";
        pub const BUILDER_FIELD: &str = "BuilderField0";
    }
}

pub enum StructElement {
    Ident(Rc<Ident>),
    Package(String),
    Member(Member),
    BuilderIdent(Rc<Ident>),
    BuilderField(Field),
}

impl Serialize for StructElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StructElement::Ident(ident) => serializer.serialize_newtype_variant(
                "StructElement",
                0,
                "Ident",
                &json!(ident.to_string()),
            ),
            StructElement::Package(package) => {
                serializer.serialize_newtype_variant("StructElement", 1, "Package", package)
            }
            StructElement::Member(member) => {
                serializer.serialize_newtype_variant("StructElement", 2, "Member", member)
            }
            StructElement::BuilderIdent(ident) => serializer.serialize_newtype_variant(
                "StructElement",
                3,
                "BuilderIdent",
                &json!(ident.to_string()),
            ),
            StructElement::BuilderField(field) => {
                serializer.serialize_newtype_variant("StructElement", 4, "BuilderField", field)
            }
        }
    }
}

impl std::fmt::Debug for StructElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "StructElement(?)"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum StructRelation {
    /// Declaration order of the target's members.
    MemberTrain,
    /// Emission order of the builder's fields.
    BuilderFieldTrain,
    MemberToBuilderField,
    IdentToBuilderIdent,
}

pub type StructGraph = Graph<StructElement, StructRelation>;
pub type StructMap = IndexMap<String, NodeIndex>;

macro_rules! add_train {
    ($graph:expr, $map:expr, $list:expr, $node:ident, $edge:ident) => {{
        let mut predecessor = None;
        for (i, item) in $list.into_iter().enumerate() {
            let successor = $graph.add_node(StructElement::$node(item));
            if let Some(predecessor) = predecessor.take() {
                $graph.add_edge(predecessor, successor, StructRelation::$edge);
            }
            predecessor.get_or_insert(successor);
            let key = format!("{}{}", stringify!($node), i);
            $map.insert(key, successor);
        }
    }};
}
pub(crate) use add_train;

/// Lays the target out as a graph: its identity nodes plus a train of members.
pub fn from_target(target: &TargetType) -> (StructGraph, StructMap) {
    let mut graph = StructGraph::new();
    let mut map = StructMap::new();

    let ix = graph.add_node(StructElement::Ident(Rc::new(target.ident.clone())));
    map.insert(mapkey::uniq::IDENT.to_string(), ix);
    let ix = graph.add_node(StructElement::Package(target.package.clone()));
    map.insert(mapkey::uniq::PACKAGE.to_string(), ix);

    add_train!(graph, map, target.members.iter().cloned(), Member, MemberTrain);

    (graph, map)
}

/// Walks the train of `relation` edges from `start`, collecting whatever
/// `action` yields for each visited node, `start` included.
pub fn traverse<T, F>(
    graph: &StructGraph,
    relation: &StructRelation,
    start: NodeIndex,
    mut action: F,
) -> Vec<T>
where
    F: FnMut(&StructGraph, NodeIndex) -> Option<T>,
{
    let mut queue = VecDeque::new();
    let mut visited = IndexSet::new();
    let mut collected = Vec::new();
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(item) = action(graph, node) {
            collected.push(item);
        }
        let mut successors = graph
            .edges_directed(node, Direction::Outgoing)
            .filter(|edge| edge.weight() == relation)
            .map(|edge| edge.target())
            .filter(|target| !visited.contains(target))
            .collect::<Vec<_>>();
        // petgraph yields outgoing edges newest first.
        successors.reverse();
        queue.extend(successors);
    }
    collected
}
