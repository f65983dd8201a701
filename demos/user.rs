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

use std::fmt;

use setter_builder::Builder;

#[derive(Builder, Default)]
pub struct User {
    name: String,
    email: String,
    address: String,
    phone: String,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User{{name='{}', email='{}', address='{}', phone='{}'}}",
            self.name(),
            self.email(),
            self.address(),
            self.phone()
        )
    }
}

fn main() {
    let tester = UserBuilder::new()
        .address("Jaakonkatu 5, Helsinki".to_string())
        .email("tester@ekahau.com".to_string())
        .phone("+358-4456-65432".to_string())
        .name("Tester".to_string())
        .build();
    println!("{}", tester);
}
