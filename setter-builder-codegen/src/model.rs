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

//! Structural metadata handed to the generator by a front-end.

use std::fmt;

use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::ToTokens;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use syn::{ext::IdentExt, Type};

/// Visibility of a member, reduced to what builder selection cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    /// No `pub` qualifier at all.
    Private,
    /// `pub(crate)`, `pub(super)` or `pub(in path)`.
    Restricted,
    /// Plain `pub`.
    Public,
}

impl From<&syn::Visibility> for Visibility {
    fn from(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Inherited => Self::Private,
            syn::Visibility::Restricted(_) => Self::Restricted,
            syn::Visibility::Public(_) => Self::Public,
        }
    }
}

/// What a member of a type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemberKind {
    /// Instance field of the struct.
    Field,
    /// Method from an inherent `impl` block.
    Method,
    /// Associated constant from an inherent `impl` block.
    Constant,
}

/// Opaque type reference, re-emitted verbatim in field and parameter position.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeDescriptor(Type);

impl TypeDescriptor {
    /// Wraps an already parsed type.
    pub fn new(ty: Type) -> Self {
        Self(ty)
    }

    /// Parses a type from its source text, e.g. `"Option<String>"`.
    pub fn parse(source: &str) -> syn::Result<Self> {
        syn::parse_str(source).map(Self)
    }

    /// The underlying `syn` type.
    pub fn as_type(&self) -> &Type {
        &self.0
    }
}

impl ToTokens for TypeDescriptor {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        self.0.to_tokens(tokens);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_token_stream())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self)
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One member of a [`TargetType`], in the order it was declared.
#[derive(Debug, Clone)]
pub struct Member {
    /// Member name as written, possibly raw (`r#type`).
    pub ident: Ident,
    /// Field, method or constant.
    pub kind: MemberKind,
    /// Declared visibility.
    pub vis: Visibility,
    /// Declared type; absent for methods.
    pub ty: Option<TypeDescriptor>,
}

impl Member {
    /// A struct field.
    pub fn field(ident: Ident, vis: Visibility, ty: TypeDescriptor) -> Self {
        Self {
            ident,
            kind: MemberKind::Field,
            vis,
            ty: Some(ty),
        }
    }

    /// A method from an inherent `impl` block.
    pub fn method(ident: Ident, vis: Visibility) -> Self {
        Self {
            ident,
            kind: MemberKind::Method,
            vis,
            ty: None,
        }
    }

    /// An associated constant.
    pub fn constant(ident: Ident, vis: Visibility, ty: TypeDescriptor) -> Self {
        Self {
            ident,
            kind: MemberKind::Constant,
            vis,
            ty: Some(ty),
        }
    }

    /// Name with any `r#` prefix stripped.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut res = serializer.serialize_struct("Member", 4)?;
        res.serialize_field("name", &self.name())?;
        res.serialize_field("kind", &self.kind)?;
        res.serialize_field("vis", &self.vis)?;
        res.serialize_field("ty", &self.ty)?;
        res.end()
    }
}

/// A builder-managed field: a private struct field and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as written.
    pub ident: Ident,
    /// Field type.
    pub ty: TypeDescriptor,
}

impl Field {
    /// Name with any `r#` prefix stripped.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut res = serializer.serialize_struct("Field", 2)?;
        res.serialize_field("name", &self.name())?;
        res.serialize_field("ty", &self.ty)?;
        res.end()
    }
}

/// The marked struct being processed.
#[derive(Debug, Clone)]
pub struct TargetType {
    /// Simple name of the struct.
    pub ident: Ident,
    /// Module path the struct lives in, `::`-separated. Empty for the crate root
    /// or when the front-end cannot know it.
    pub package: String,
    /// Visibility of the struct, reused for the builder.
    pub vis: syn::Visibility,
    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl TargetType {
    /// A private struct with no members yet.
    pub fn new(ident: Ident, package: impl Into<String>) -> Self {
        Self {
            ident,
            package: package.into(),
            vis: syn::Visibility::Inherited,
            members: Vec::new(),
        }
    }

    /// Replaces the struct visibility.
    pub fn with_vis(mut self, vis: syn::Visibility) -> Self {
        self.vis = vis;
        self
    }

    /// Appends a member after the ones already declared.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Name with any `r#` prefix stripped.
    pub fn simple_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// `package::Name`, or just `Name` without a package.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name()
        } else {
            format!("{}::{}", self.package, self.simple_name())
        }
    }

    /// Whether an inherent method with this name was seen.
    pub fn has_method(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.kind == MemberKind::Method && member.name() == name)
    }
}
