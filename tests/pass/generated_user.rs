use setter_builder::builder;

#[builder]
#[derive(Default, Debug, PartialEq)]
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

// Written by `tests/ui.rs` before this file is compiled.
include!("generated/UserBuilder.rs");

fn main() {
    let user = UserBuilder::new()
        .address("Jaakonkatu 5, Helsinki".to_string())
        .email("tester@ekahau.com".to_string())
        .phone("+358-4456-65432".to_string())
        .name("Tester".to_string())
        .build();
    assert_eq!(
        user,
        User {
            name: "Tester".to_string(),
            email: "tester@ekahau.com".to_string(),
            address: "Jaakonkatu 5, Helsinki".to_string(),
            phone: "+358-4456-65432".to_string(),
        }
    );
}
