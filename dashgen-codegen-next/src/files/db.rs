//! `src/lib/db.ts`: cached Mongoose connection used by every controller.
//!
//! Written once; later runs leave the project's copy alone.

use std::path::{Path, PathBuf};

use dashgen_core::{FileRules, GeneratedFile};

use crate::{
    CodeFile, RawCode,
    ast::{Fn, Import},
};

/// Environment variable holding the MongoDB connection string.
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

pub struct Db;

impl GeneratedFile for Db {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src/lib/db.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let connect = Fn::new("connectToDatabase")
            .async_()
            .returns("Promise<typeof mongoose>")
            .body_line(format!("const uri = process.env.{};", MONGODB_URI_ENV))
            .body_line("if (!uri) {")
            .body_line(format!(
                "  throw new Error(\"{} is not set\");",
                MONGODB_URI_ENV
            ))
            .body_line("}")
            .body(
                r#"if (!cached) {
  cached = mongoose.connect(uri).catch((error) => {
    cached = null;
    throw error;
  });
}
return cached;"#,
            );

        CodeFile::new()
            .header("// Created by dashgen. This file is yours to edit.")
            .import(Import::new("mongoose").default("mongoose"))
            .add(RawCode::new(
                "let cached: Promise<typeof mongoose> | null = null;",
            ))
            .add(connect)
            .render()
    }
}
