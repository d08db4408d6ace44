//! `store.ts`: Zustand store holding the loaded page and the form draft.

use std::path::{Path, PathBuf};

use dashgen_codegen::schema::ResolvedInterface;
use dashgen_core::{FieldKind, GeneratedFile};

use super::{fold_schema, input_type, store_hook};
use crate::{
    CodeFile, GeneratorOptions,
    ast::{Import, Interface, JsObject, Property},
};

pub struct Store<'a> {
    resolved: &'a ResolvedInterface,
    options: &'a GeneratorOptions,
}

/// Initial form value for a field of `kind`.
fn empty_value(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::String | FieldKind::Date => "\"\"",
        FieldKind::Number => "0",
        FieldKind::Boolean => "false",
        FieldKind::Array(_) => "[]",
        FieldKind::Other(_) => "null",
    }
}

impl<'a> Store<'a> {
    pub fn new(resolved: &'a ResolvedInterface, options: &'a GeneratorOptions) -> Self {
        Self { resolved, options }
    }

    fn empty_name(&self) -> String {
        format!("empty{}", self.resolved.naming.singular_pascal)
    }

    fn state_name(&self) -> String {
        format!("{}State", self.resolved.naming.plural_pascal)
    }

    fn empty_draft(&self) -> JsObject {
        JsObject::from_properties(fold_schema(
            &self.resolved.schema,
            |path, kind| Property::raw(path.name(), empty_value(kind)),
            |path, fields| Property::object(path.name(), JsObject::from_properties(fields)),
        ))
    }

    fn state_interface(&self) -> Interface {
        let entity = &self.resolved.naming.singular_pascal;
        let input = input_type(&self.resolved.naming);
        Interface::new(self.state_name())
            .field("items", format!("{}[]", entity))
            .field("page", "number")
            .field("limit", "number")
            .field("total", "number")
            .field("draft", input.as_str())
            .field("setItems", format!("(items: {}[], total: number) => void", entity))
            .field("setPage", "(page: number) => void")
            .field("setDraft", format!("(patch: Partial<{}>) => void", input))
            .field("resetDraft", "() => void")
    }

    fn store(&self) -> JsObject {
        let empty = self.empty_name();
        JsObject::new()
            .raw("items", "[]")
            .raw("page", "1")
            .raw("limit", self.options.page_limit.to_string())
            .raw("total", "0")
            .raw("draft", empty.as_str())
            .raw("setItems", "(items, total) => set({ items, total })")
            .raw("setPage", "(page) => set({ page })")
            .raw(
                "setDraft",
                "(patch) => set((state) => ({ draft: { ...state.draft, ...patch } }))",
            )
            .raw("resetDraft", format!("() => set({{ draft: {} }})", empty))
    }
}

impl GeneratedFile for Store<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}/store.ts", self.resolved.naming.resource_dir()))
    }

    fn render(&self) -> String {
        let naming = &self.resolved.naming;
        let input = input_type(naming);

        CodeFile::generated()
            .import(Import::new("zustand").named("create"))
            .import(
                Import::new("./types")
                    .named(naming.singular_pascal.as_str())
                    .named(input.as_str())
                    .type_only(),
            )
            .add(
                self.empty_draft()
                    .block(&format!("export const {}: {} = ", self.empty_name(), input), ";"),
            )
            .add(self.state_interface())
            .add(self.store().block(
                &format!(
                    "export const {} = create<{}>()((set) => (",
                    store_hook(naming),
                    self.state_name()
                ),
                "));",
            ))
            .render()
    }
}
