// @generated by setter-builder from `User`. Do not edit.

///Builder for [`User`].
#[derive(Default)]
pub struct UserBuilder {
    name: ::core::option::Option<String>,
    email: ::core::option::Option<String>,
    address: ::core::option::Option<String>,
    phone: ::core::option::Option<String>,
}
impl UserBuilder {
    /// An empty builder; every field starts unset.
    pub fn new() -> Self {
        ::core::default::Default::default()
    }
    ///Sets `name`.
    pub fn name(&mut self, name: String) -> &mut UserBuilder {
        self.name = ::core::option::Option::Some(name);
        self
    }
    ///Sets `email`.
    pub fn email(&mut self, email: String) -> &mut UserBuilder {
        self.email = ::core::option::Option::Some(email);
        self
    }
    ///Sets `address`.
    pub fn address(&mut self, address: String) -> &mut UserBuilder {
        self.address = ::core::option::Option::Some(address);
        self
    }
    ///Sets `phone`.
    pub fn phone(&mut self, phone: String) -> &mut UserBuilder {
        self.phone = ::core::option::Option::Some(phone);
        self
    }
    ///Creates a [`User`] and moves every value set so far into it.
    #[allow(non_snake_case, unused_mut)]
    pub fn build(&mut self) -> User {
        let mut user: User = ::core::default::Default::default();
        if let ::core::option::Option::Some(value) = ::core::option::Option::take(
            &mut self.name,
        ) {
            user.set_name(value);
        }
        if let ::core::option::Option::Some(value) = ::core::option::Option::take(
            &mut self.email,
        ) {
            user.set_email(value);
        }
        if let ::core::option::Option::Some(value) = ::core::option::Option::take(
            &mut self.address,
        ) {
            user.set_address(value);
        }
        if let ::core::option::Option::Some(value) = ::core::option::Option::take(
            &mut self.phone,
        ) {
            user.set_phone(value);
        }
        user
    }
}
