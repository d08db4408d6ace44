//! `components/{Singular}Fields.tsx`: one form input per leaf field.

use std::path::{Path, PathBuf};

use dashgen_codegen::{
    builder::{CodeFragment, Renderable},
    language::TypeMapper,
    schema::{LeafField, ResolvedInterface},
};
use dashgen_core::{FieldKind, GeneratedFile, to_kebab_case};

use super::{member_chain, store_hook};
use crate::{
    CodeFile, InputTypeMapper,
    ast::{Fn, Import, JsxElement, property_key},
};

pub struct Fields<'a> {
    resolved: &'a ResolvedInterface,
}

impl<'a> Fields<'a> {
    pub fn new(resolved: &'a ResolvedInterface) -> Self {
        Self { resolved }
    }

    fn component_name(&self) -> String {
        format!("{}Fields", self.resolved.naming.singular_pascal)
    }

    fn field_inputs(&self, field: &LeafField) -> Vec<CodeFragment> {
        let segments = field.path.segments();
        let id = segments.join("-");
        let current = member_chain("draft", segments);
        let input_type = InputTypeMapper.map_kind(&field.kind);

        let (value_attr, value_expr, new_value) = match &field.kind {
            FieldKind::Boolean => ("checked", current, "e.target.checked".to_string()),
            FieldKind::Number => ("value", current, "Number(e.target.value)".to_string()),
            FieldKind::Date => (
                "value",
                format!("{}.slice(0, 10)", current),
                "e.target.value".to_string(),
            ),
            FieldKind::Array(inner) => (
                "value",
                format!("{}.join(\", \")", current),
                split_list(inner),
            ),
            FieldKind::String => ("value", current, "e.target.value".to_string()),
            FieldKind::Other(_) => (
                "value",
                format!("String({} ?? \"\")", current),
                "e.target.value".to_string(),
            ),
        };

        let label = JsxElement::new("label")
            .attr("htmlFor", id.as_str())
            .text(field.path.dotted());
        let input = JsxElement::new("input")
            .attr("id", id.as_str())
            .attr("type", input_type)
            .attr_expr(value_attr, value_expr)
            .attr_expr(
                "onChange",
                format!("(e) => setDraft({})", draft_patch(segments, new_value)),
            );

        let mut fragments = label.to_fragments();
        fragments.extend(input.to_fragments());
        fragments
    }
}

/// Parse a comma-separated input into a list of `inner` values.
fn split_list(inner: &FieldKind) -> String {
    let split = "e.target.value.split(\",\").map((v) => v.trim()).filter((v) => v !== \"\")";
    match inner {
        FieldKind::Number => format!("{}.map(Number)", split),
        FieldKind::Boolean => format!("{}.map((v) => v === \"true\")", split),
        _ => split.to_string(),
    }
}

/// The partial draft replacing the value at `segments`, spreading every
/// enclosing object so sibling fields survive.
fn draft_patch(segments: &[String], value: String) -> String {
    let mut expr = value;
    for depth in (1..segments.len()).rev() {
        expr = format!(
            "{{ ...{}, {}: {} }}",
            member_chain("draft", &segments[..depth]),
            property_key(&segments[depth]),
            expr
        );
    }
    match segments.first() {
        Some(first) => format!("{{ {}: {} }}", property_key(first), expr),
        None => expr,
    }
}

impl GeneratedFile for Fields<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/components/{}.tsx",
            self.resolved.naming.resource_dir(),
            self.component_name()
        ))
    }

    fn render(&self) -> String {
        let naming = &self.resolved.naming;
        let hook = store_hook(naming);

        let mut fieldset = JsxElement::new("fieldset")
            .attr(
                "className",
                format!("{}-fields", to_kebab_case(&naming.singular_pascal)),
            )
            .child(JsxElement::new("legend").text(naming.singular_pascal.as_str()));
        for field in &self.resolved.fields {
            fieldset = fieldset.fragments(self.field_inputs(field));
        }

        let component = Fn::new(self.component_name())
            .default_export()
            .body_line(format!("const draft = {}((state) => state.draft);", hook))
            .body_line(format!(
                "const setDraft = {}((state) => state.setDraft);",
                hook
            ))
            .body_line("")
            .body_node(&fieldset.returned());

        CodeFile::generated()
            .use_client()
            .import(Import::new("../store").named(hook.as_str()))
            .add(component)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_draft_patch_spreads_parents() {
        let segments = vec!["publisher".to_string(), "name".to_string()];
        assert_eq!(
            draft_patch(&segments, "v".to_string()),
            "{ publisher: { ...draft.publisher, name: v } }"
        );
        assert_eq!(
            draft_patch(&["title".to_string()], "v".to_string()),
            "{ title: v }"
        );
    }

    #[test]
    fn test_renders_client_component() {
        let books = fixtures::books();
        let code = Fields::new(&books).render();
        assert!(code.contains("\"use client\";"));
        assert!(code.contains("import { useBooksStore } from \"../store\";"));
        assert!(code.contains("export default function BookFields() {"));
        assert!(code.contains("<legend>Book</legend>"));
    }

    #[test]
    fn test_input_per_leaf_field() {
        let books = fixtures::books();
        let code = Fields::new(&books).render();
        assert!(code.contains("<label htmlFor=\"title\">title</label>"));
        assert!(code.contains("onChange={(e) => setDraft({ pages: Number(e.target.value) })}"));
        assert!(code.contains("<label htmlFor=\"publisher-founded\">publisher.founded</label>"));
        assert!(code.contains("value={draft.publisher.founded.slice(0, 10)}"));
        assert!(code.contains(
            "setDraft({ publisher: { ...draft.publisher, name: e.target.value } })"
        ));
    }

    #[test]
    fn test_quoted_key_stays_valid_jsx() {
        let quotes = ResolvedInterface::resolve(&dashgen_manifest::Interface::new(
            dashgen_manifest::Schema::new().with_tag(r#"say "hi""#, "string"),
            dashgen_manifest::NamingConvention::from_singular("quote", None),
        ))
        .unwrap();
        let code = Fields::new(&quotes).render();
        assert!(!code.contains(r#"htmlFor="say \""#));
        assert!(code.contains(r#"htmlFor={"say \"hi\""}>say "hi"</label>"#));
    }

    #[test]
    fn test_path_uses_singular() {
        let books = fixtures::books();
        let path = Fields::new(&books).path(Path::new(""));
        assert_eq!(
            path,
            Path::new("src/app/dashboard/books/components/BookFields.tsx")
        );
    }
}
