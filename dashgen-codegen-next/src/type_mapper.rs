//! Field kind mappings for the TypeScript, Mongoose and HTML form targets.

use dashgen_codegen::language::TypeMapper;
use dashgen_core::FieldKind;

/// TypeScript types for `types.ts`.
///
/// Dates travel as ISO strings over JSON, so they map to `string`.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn target(&self) -> &'static str {
        "typescript"
    }

    fn map_kind(&self, kind: &FieldKind) -> String {
        match kind {
            FieldKind::String | FieldKind::Date => "string".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Array(inner) => format!("{}[]", self.map_kind(inner)),
            FieldKind::Other(_) => "unknown".to_string(),
        }
    }
}

/// Mongoose schema types for the model file.
pub struct MongooseTypeMapper;

impl TypeMapper for MongooseTypeMapper {
    fn target(&self) -> &'static str {
        "mongoose"
    }

    fn map_kind(&self, kind: &FieldKind) -> String {
        match kind {
            FieldKind::String => "String".to_string(),
            FieldKind::Number => "Number".to_string(),
            FieldKind::Boolean => "Boolean".to_string(),
            FieldKind::Date => "Date".to_string(),
            FieldKind::Array(inner) => format!("[{}]", self.map_kind(inner)),
            FieldKind::Other(_) => "Schema.Types.Mixed".to_string(),
        }
    }
}

/// `<input type>` values for the fields component.
pub struct InputTypeMapper;

impl TypeMapper for InputTypeMapper {
    fn target(&self) -> &'static str {
        "html-input"
    }

    fn map_kind(&self, kind: &FieldKind) -> String {
        match kind {
            FieldKind::Number => "number",
            FieldKind::Boolean => "checkbox",
            FieldKind::Date => "date",
            FieldKind::String | FieldKind::Array(_) | FieldKind::Other(_) => "text",
        }
        .to_string()
    }
}
