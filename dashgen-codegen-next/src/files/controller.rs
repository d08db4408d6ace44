//! `controller.ts`: data access for the resource's route handlers.

use std::path::{Path, PathBuf};

use dashgen_codegen::schema::{FieldPath, ResolvedInterface};
use dashgen_core::GeneratedFile;

use super::api_dir;
use crate::{
    CodeFile, GeneratorOptions, RawCode,
    ast::{Fn, Import, Interface, Param, string_literal},
};

pub struct Controller<'a> {
    resolved: &'a ResolvedInterface,
    options: &'a GeneratorOptions,
}

impl<'a> Controller<'a> {
    pub fn new(resolved: &'a ResolvedInterface, options: &'a GeneratorOptions) -> Self {
        Self { resolved, options }
    }

    /// `const SEARCH_FIELDS: string[] = [...]` over the searchable paths.
    fn search_fields(&self) -> RawCode {
        let fields = self
            .resolved
            .search_paths()
            .map(FieldPath::dotted)
            .map(|path| string_literal(&path))
            .collect::<Vec<_>>()
            .join(", ");
        RawCode::new(format!("const SEARCH_FIELDS: string[] = [{}];", fields))
    }

    fn list(&self, model: &str) -> Fn {
        Fn::new("list")
            .async_()
            .param(Param::new("{ page, limit, search }", "ListParams"))
            .body_line("await connectToDatabase();")
            .body(
                r#"const filter =
  search && SEARCH_FIELDS.length > 0
    ? {
        $or: SEARCH_FIELDS.map((field) => ({
          [field]: { $regex: escapeRegex(search), $options: "i" },
        })),
      }
    : {};"#,
            )
            .body_line("const [items, total] = await Promise.all([")
            .body_line(format!("  {}.find(filter)", model))
            .body(
                r#"    .sort({ createdAt: -1 })
    .skip((page - 1) * limit)
    .limit(limit)
    .lean(),"#,
            )
            .body_line(format!("  {}.countDocuments(filter),", model))
            .body_line("]);")
            .body_line("return { items, total };")
    }
}

impl GeneratedFile for Controller<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/controller.ts",
            api_dir(&self.resolved.naming, self.options)
        ))
    }

    fn render(&self) -> String {
        let model = self.resolved.naming.singular_pascal.as_str();
        let input = format!("Partial<{}Document>", model);

        let escape_regex = Fn::new("escapeRegex")
            .private()
            .param(Param::new("value", "string"))
            .returns("string")
            .body_line(r#"return value.replace(/[.*+?^${}()|[\]\\]/g, "\\$&");"#);

        let get = Fn::new("get")
            .async_()
            .param(Param::new("id", "string"))
            .body_line("await connectToDatabase();")
            .body_line(format!("return {}.findById(id).lean();", model));

        let create = Fn::new("create")
            .async_()
            .param(Param::new("input", input.as_str()))
            .body_line("await connectToDatabase();")
            .body_line(format!("const created = await {}.create(input);", model))
            .body_line("return created.toObject();");

        let update = Fn::new("update")
            .async_()
            .param(Param::new("id", "string"))
            .param(Param::new("input", input.as_str()))
            .body_line("await connectToDatabase();")
            .body_line(format!(
                "return {}.findByIdAndUpdate(id, input, {{ new: true, runValidators: true }}).lean();",
                model
            ));

        let remove = Fn::new("remove")
            .async_()
            .param(Param::new("id", "string"))
            .body_line("await connectToDatabase();")
            .body_line(format!("return {}.findByIdAndDelete(id).lean();", model));

        CodeFile::generated()
            .import(Import::new("@/lib/db").named("connectToDatabase"))
            .import(
                Import::new(format!("@/models/{}", model))
                    .default(model)
                    .named_type(format!("{}Document", model)),
            )
            .add(self.search_fields())
            .add(
                Interface::new("ListParams")
                    .field("page", "number")
                    .field("limit", "number")
                    .optional_field("search", "string"),
            )
            .add(escape_regex)
            .add(self.list(model))
            .add(get)
            .add(create)
            .add(update)
            .add(remove)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_searches_string_paths() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = Controller::new(&books, &options).render();
        assert!(code.contains("const SEARCH_FIELDS: string[] = [\"title\", \"publisher.name\"];"));
        assert!(code.contains("export async function list({ page, limit, search }: ListParams) {"));
        assert!(code.contains("    Book.find(filter)\n      .sort({ createdAt: -1 })\n"));
    }

    #[test]
    fn test_crud_operations() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = Controller::new(&books, &options).render();
        assert!(code.contains("import Book, { type BookDocument } from \"@/models/Book\";"));
        for op in ["get(id: string)", "create(input: Partial<BookDocument>)", "remove(id: string)"] {
            assert!(code.contains(&format!("export async function {} {{", op)), "{}", op);
        }
        assert!(code.contains("findByIdAndUpdate(id, input, { new: true, runValidators: true })"));
    }

    #[test]
    fn test_path_under_api_mount() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        assert_eq!(
            Controller::new(&books, &options).path(Path::new("")),
            Path::new("src/app/api/v1/books/controller.ts")
        );
    }
}
