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

//! What a `build.rs` would do: scan a model file and write builders out.

use setter_builder::codegen::{CargoMessager, Config, Context, FsFiler, Processor};

const MODEL: &str = r#"
    #[builder]
    #[derive(Default)]
    pub struct User {
        name: String,
        email: String,
    }

    impl User {
        pub fn set_name(&mut self, name: String) { self.name = name; }
        pub fn set_email(&mut self, email: String) { self.email = email; }
    }
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out = tempfile::tempdir()?;
    let mut filer = FsFiler::new(out.path());
    let mut messager = CargoMessager;
    let mut cx = Context::new(&mut filer, &mut messager);

    let summary =
        Processor::new(Config::default()).process_source(MODEL, "demo::model", &mut cx)?;
    for path in &summary.written {
        println!("{}", path.display());
        println!("{}", std::fs::read_to_string(path)?);
    }
    Ok(())
}
