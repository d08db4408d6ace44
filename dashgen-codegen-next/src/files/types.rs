//! `types.ts`: the entity interface shared by the store, fields and pages.

use std::path::{Path, PathBuf};

use dashgen_codegen::{language::TypeMapper, schema::ResolvedInterface};
use dashgen_core::GeneratedFile;

use super::{fold_schema, input_type};
use crate::{
    CodeFile, RawCode, TypeScriptTypeMapper,
    ast::{Interface, TypeExpr, TypeField, string_literal},
};

/// Keys the API adds to every stored document.
const DOCUMENT_KEYS: [&str; 3] = ["_id", "createdAt", "updatedAt"];

pub struct Types<'a> {
    resolved: &'a ResolvedInterface,
}

impl<'a> Types<'a> {
    pub fn new(resolved: &'a ResolvedInterface) -> Self {
        Self { resolved }
    }

    fn entity(&self) -> Interface {
        let fields = fold_schema(
            &self.resolved.schema,
            |path, kind| {
                TypeField::new(
                    path.name(),
                    TypeExpr::Named(TypeScriptTypeMapper.map_kind(kind)),
                )
            },
            |path, fields| TypeField::new(path.name(), TypeExpr::Object(fields)),
        );

        Interface::new(self.resolved.naming.singular_pascal.as_str())
            .field("_id", "string")
            .fields(fields)
            .optional_field("createdAt", "string")
            .optional_field("updatedAt", "string")
    }

    fn response(&self) -> Interface {
        let naming = &self.resolved.naming;
        Interface::new(format!("{}Response", naming.plural_pascal)).typed_field(TypeField::new(
            "data",
            TypeExpr::Object(vec![
                TypeField::new(
                    naming.resource(),
                    TypeExpr::Named(format!("{}[]", naming.singular_pascal)),
                ),
                TypeField::new("total", TypeExpr::named("number")),
                TypeField::new("page", TypeExpr::named("number")),
                TypeField::new("limit", TypeExpr::named("number")),
            ]),
        ))
    }
}

impl GeneratedFile for Types<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}/types.ts", self.resolved.naming.resource_dir()))
    }

    fn render(&self) -> String {
        let naming = &self.resolved.naming;
        let omitted = DOCUMENT_KEYS
            .iter()
            .map(|key| string_literal(key))
            .collect::<Vec<_>>()
            .join(" | ");

        CodeFile::generated()
            .add(self.entity())
            .add(RawCode::new(format!(
                "export type {} = Omit<{}, {}>;",
                input_type(naming),
                naming.singular_pascal,
                omitted
            )))
            .add(self.response())
            .render()
    }
}
