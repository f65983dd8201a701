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

use setter_builder::Builder;

#[derive(Builder, Default, Debug, PartialEq)]
pub struct User {
    name: String,
    email: String,
    address: String,
    phone: String,
}

impl User {
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }
    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }
    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }
}

fn tester() -> User {
    User {
        name: "Tester".to_string(),
        email: "tester@ekahau.com".to_string(),
        address: "Jaakonkatu 5, Helsinki".to_string(),
        phone: "+358-4456-65432".to_string(),
    }
}

#[test]
fn builds_user_from_chained_setters() {
    let user = UserBuilder::new()
        .address("Jaakonkatu 5, Helsinki".to_string())
        .email("tester@ekahau.com".to_string())
        .phone("+358-4456-65432".to_string())
        .name("Tester".to_string())
        .build();
    assert_eq!(user, tester());
}

#[test]
fn setter_call_order_does_not_matter() {
    let user = UserBuilder::new()
        .name("Tester".to_string())
        .phone("+358-4456-65432".to_string())
        .address("Jaakonkatu 5, Helsinki".to_string())
        .email("tester@ekahau.com".to_string())
        .build();
    assert_eq!(user, tester());
}

#[test]
fn last_value_wins() {
    let user = UserBuilder::new()
        .name("First".to_string())
        .name("Tester".to_string())
        .build();
    assert_eq!(user.name, "Tester");
    assert_eq!(user.email, "");
}

#[test]
fn setters_return_the_same_builder() {
    let mut builder = UserBuilder::new();
    let origin: *const UserBuilder = &builder;
    assert!(std::ptr::eq(builder.name("a".to_string()), origin));
    assert!(std::ptr::eq(builder.email("b".to_string()), origin));
    assert!(std::ptr::eq(builder.address("c".to_string()), origin));
    assert!(std::ptr::eq(builder.phone("d".to_string()), origin));
}

#[test]
fn build_drains_the_builder() {
    let mut builder = UserBuilder::default();
    builder.name("Tester".to_string());
    let first = builder.build();
    let second = builder.email("tester@ekahau.com".to_string()).build();
    assert_eq!(first.name, "Tester");
    assert_eq!(first.email, "");
    assert_eq!(second.name, "");
    assert_eq!(second.email, "tester@ekahau.com");
}

#[derive(Debug, Default, PartialEq)]
struct Handle(u32);

#[derive(Builder, Default, Debug)]
struct Conn {
    handle: Handle,
}

impl Conn {
    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }
}

#[test]
fn field_types_need_not_be_clone() {
    let conn = ConnBuilder::new().handle(Handle(42)).build();
    assert_eq!(conn.handle, Handle(42));
}

#[derive(Builder, Default, Debug, PartialEq)]
struct Empty {
    pub label: &'static str,
}

#[test]
fn no_private_fields_builds_default() {
    assert_eq!(EmptyBuilder::new().build(), Empty::default());
}

#[derive(Builder, Default, Debug, PartialEq)]
pub struct Account {
    owner: String,
    pub id: u64,
    pub(crate) balance: i64,
}

impl Account {
    fn set_owner(&mut self, owner: String) {
        self.owner = owner;
    }
}

#[test]
fn only_private_fields_get_setters() {
    let mut account = AccountBuilder::new().owner("Tester".to_string()).build();
    account.id = 7;
    account.balance = -1;
    assert_eq!(
        account,
        Account {
            owner: "Tester".to_string(),
            id: 7,
            balance: -1,
        }
    );
}

#[derive(Builder, Default, Debug)]
#[allow(clippy::upper_case_acronyms)]
struct URL {
    host: String,
}

impl URL {
    fn set_host(&mut self, host: String) {
        self.host = host;
    }
}

#[test]
fn acronym_names_build() {
    let url = URLBuilder::new().host("example.org".to_string()).build();
    assert_eq!(url.host, "example.org");
}

#[derive(Builder, Default, Debug)]
struct Token {
    r#type: u8,
    value: Vec<u8>,
}

impl Token {
    fn set_type(&mut self, kind: u8) {
        self.r#type = kind;
    }
    fn set_value(&mut self, value: Vec<u8>) {
        self.value = value;
    }
}

#[test]
fn raw_identifiers_use_plain_setter_names() {
    let token = TokenBuilder::new().r#type(3).value(vec![1, 2]).build();
    assert_eq!(token.r#type, 3);
    assert_eq!(token.value, [1, 2]);
}

#[derive(Builder, Default, Debug)]
struct Value {
    raw: String,
}

impl Value {
    fn set_raw(&mut self, raw: String) {
        self.raw = raw;
    }
}

#[test]
fn target_named_value_builds() {
    let value = ValueBuilder::new().raw("x".to_string()).build();
    assert_eq!(value.raw, "x");
}
