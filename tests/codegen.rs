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

use std::fs;

use setter_builder::codegen::{
    Config, Context, Diagnostics, FsFiler, MemoryFiler, Processor, SetterPolicy,
};

const MODEL: &str = r#"
    use setter_builder::builder;

    #[builder]
    #[derive(Default, Debug)]
    pub struct User {
        name: String,
        email: String,
        address: String,
        phone: String,
    }

    impl User {
        pub fn set_name(&mut self, name: String) { self.name = name; }
        pub fn set_email(&mut self, email: String) { self.email = email; }
        pub fn set_address(&mut self, address: String) { self.address = address; }
        pub fn set_phone(&mut self, phone: String) { self.phone = phone; }
    }
"#;

#[test]
fn writes_builder_files_under_package_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("user.rs");
    fs::write(&source, MODEL).unwrap();
    let out = dir.path().join("out");

    let mut filer = FsFiler::new(&out);
    let mut messager = Diagnostics::default();
    let mut cx = Context::new(&mut filer, &mut messager);
    let processor = Processor::new(Config::default().with_setter_policy(SetterPolicy::Validate));
    let summary = processor
        .process_file(&source, "demo::model", &mut cx)
        .unwrap();

    let expected = out.join("demo/model/UserBuilder.rs");
    assert_eq!(summary.written, [expected.clone()]);
    assert!(messager.is_empty());

    let generated = fs::read_to_string(expected).unwrap();
    let file = syn::parse_file(&generated).unwrap();
    assert_eq!(file.items.len(), 2);
    assert!(generated.contains("pub struct UserBuilder"));
}

#[test]
fn regeneration_is_byte_identical() {
    let render = || {
        let mut filer = MemoryFiler::default();
        let mut messager = Diagnostics::default();
        let mut cx = Context::new(&mut filer, &mut messager);
        Processor::default()
            .process_source(MODEL, "demo::model", &mut cx)
            .unwrap();
        filer
            .get("demo/model/UserBuilder.rs")
            .map(str::to_string)
            .unwrap()
    };
    assert_eq!(render(), render());
}
