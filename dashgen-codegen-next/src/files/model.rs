//! `src/models/{Singular}.ts`: Mongoose schema and model.

use std::path::{Path, PathBuf};

use dashgen_codegen::{language::TypeMapper, schema::ResolvedInterface};
use dashgen_core::GeneratedFile;

use super::fold_schema;
use crate::{
    CodeFile, MongooseTypeMapper, RawCode,
    ast::{Export, Import, JsObject, Property, member, string_literal},
};

pub struct Model<'a> {
    resolved: &'a ResolvedInterface,
}

impl<'a> Model<'a> {
    pub fn new(resolved: &'a ResolvedInterface) -> Self {
        Self { resolved }
    }

    fn definition(&self) -> JsObject {
        JsObject::from_properties(fold_schema(
            &self.resolved.schema,
            |path, kind| Property::raw(path.name(), MongooseTypeMapper.map_kind(kind)),
            |path, fields| Property::object(path.name(), JsObject::from_properties(fields)),
        ))
    }
}

impl GeneratedFile for Model<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "src/models/{}.ts",
            self.resolved.naming.singular_pascal
        ))
    }

    fn render(&self) -> String {
        let name = &self.resolved.naming.singular_pascal;
        let schema = format!("{}Schema", name);
        let document = format!("{}Document", name);

        let model = RawCode::lines([
            format!("const {}: Model<{}> =", name, document),
            format!(
                "  ({} as Model<{}> | undefined) ??",
                member("mongoose.models", name),
                document
            ),
            format!(
                "  mongoose.model<{}>({}, {});",
                document,
                string_literal(name),
                schema
            ),
        ]);

        CodeFile::generated()
            .import(
                Import::new("mongoose")
                    .default("mongoose")
                    .named("Schema")
                    .named_type("InferSchemaType")
                    .named_type("Model"),
            )
            .add(
                self.definition()
                    .block(&format!("const {} = new Schema(", schema), ", { timestamps: true });"),
            )
            .add(RawCode::new(format!(
                "export type {} = InferSchemaType<typeof {}>;",
                document, schema
            )))
            .add(model)
            .export(Export::new().default(name.as_str()))
            .render()
    }
}
