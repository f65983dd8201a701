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

#![warn(missing_docs)]

/*! Builder companions for structs that already expose conventional setters.

`#[derive(Builder)]` generates `<Name>Builder` with one fluent setter per
private field; `build()` creates the struct through `Default` and feeds every
stored value to the struct's `set_<field>` setter.

```rust
use setter_builder::Builder;

#[derive(Builder, Default, Debug)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }
}

let user = UserBuilder::new()
    .email("tester@ekahau.com".to_string())
    .name("Tester".to_string())
    .build();
assert_eq!(user.name, "Tester");
```

For `build.rs` scripts, mark structs with [`builder`] instead and run the
[`codegen::Processor`] over the source files; each marked struct gets a
`<Name>Builder.rs` file meant to be `include!`d next to it.
*/

pub use setter_builder_codegen as codegen;
pub use setter_builder_macro::{builder, Builder};
