//! Next.js code generator for the dashgen dashboard generator.
//!
//! Turns a validated interface into a CRUD feature for one resource:
//! a Mongoose model, API route handlers, a Zustand store and React
//! components and pages.
//!
//! # Usage
//!
//! ```ignore
//! use dashgen_codegen::{language::LanguageCodegen, schema::ResolvedInterface};
//! use dashgen_codegen_next::Generator;
//! use dashgen_manifest::Interface;
//! use std::path::Path;
//!
//! let interface = Interface::from_file("interface.json")?;
//! let resolved = ResolvedInterface::resolve(&interface)?;
//! let generator = Generator::new(&resolved);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! Relative to the project root, for resource `books` / entity `Book`:
//!
//! - `src/models/Book.ts` - Mongoose schema and model
//! - `src/lib/db.ts` - Cached database connection (created once)
//! - `src/app/api/v1/books/controller.ts` - list/get/create/update/remove
//! - `src/app/api/v1/books/route.ts`, `[id]/route.ts` - Route handlers
//! - `src/app/dashboard/books/types.ts`, `store.ts` - Client types and store
//! - `src/app/dashboard/books/components/*.tsx` - Form fields and links
//! - `src/app/dashboard/books/all/page.tsx` - Server-rendered list page
//!
//! With `use_generate_folder` the dashboard files move to `src/app/generate`.

mod artifact;
mod code_file;
mod emit;
mod generator;
mod options;
mod type_mapper;

pub mod ast;
pub mod files;

pub use artifact::{Artifact, UnknownArtifact};
pub use code_file::{CodeFile, GENERATED_HEADER, RawCode};
pub use dashgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use emit::{EmitError, emit, emit_interface, emit_with_options};
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use type_mapper::{InputTypeMapper, MongooseTypeMapper, TypeScriptTypeMapper};
