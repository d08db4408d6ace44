//! `route.ts`: collection handlers (`GET` list, `POST` create).

use std::path::{Path, PathBuf};

use dashgen_codegen::schema::ResolvedInterface;
use dashgen_core::GeneratedFile;

use super::{api_dir, api_url};
use crate::{
    CodeFile, GeneratorOptions,
    ast::{Fn, Import, Param, property_key, string_literal},
};

pub struct Route<'a> {
    resolved: &'a ResolvedInterface,
    options: &'a GeneratorOptions,
}

impl<'a> Route<'a> {
    pub fn new(resolved: &'a ResolvedInterface, options: &'a GeneratorOptions) -> Self {
        Self { resolved, options }
    }
}

impl GeneratedFile for Route<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/route.ts",
            api_dir(&self.resolved.naming, self.options)
        ))
    }

    fn render(&self) -> String {
        let naming = &self.resolved.naming;
        let url = api_url(naming, self.options);

        let get = Fn::new("GET")
            .async_()
            .param(Param::new("request", "NextRequest"))
            .body_line("try {")
            .body(format!(
                r#"  const params = request.nextUrl.searchParams;
  const page = Math.max(1, Number(params.get("page")) || 1);
  const limit = Math.max(1, Number(params.get("limit")) || {limit});
  const search = params.get("search") ?? undefined;
  const {{ items, total }} = await list({{ page, limit, search }});
  return NextResponse.json({{ data: {{ {key}: items, total, page, limit }} }});"#,
                limit = self.options.page_limit,
                key = property_key(naming.resource()),
            ))
            .body_line("} catch (error) {")
            .body_line(format!(
                "  console.error({}, error);",
                string_literal(&format!("GET {} failed", url))
            ))
            .body_line(format!(
                "  return NextResponse.json({{ error: {} }}, {{ status: 500 }});",
                string_literal(&format!("failed to list {}", naming.resource()))
            ))
            .body_line("}");

        let post = Fn::new("POST")
            .async_()
            .param(Param::new("request", "NextRequest"))
            .body_line("try {")
            .body_line("  const input = await request.json();")
            .body_line("  const item = await create(input);")
            .body_line(format!(
                "  return NextResponse.json({{ data: {{ {}: item }} }}, {{ status: 201 }});",
                property_key(&naming.singular)
            ))
            .body_line("} catch (error) {")
            .body_line(format!(
                "  console.error({}, error);",
                string_literal(&format!("POST {} failed", url))
            ))
            .body_line(format!(
                "  return NextResponse.json({{ error: {} }}, {{ status: 400 }});",
                string_literal(&format!("invalid {}", naming.singular))
            ))
            .body_line("}");

        CodeFile::generated()
            .import(
                Import::new("next/server")
                    .named("NextResponse")
                    .named_type("NextRequest"),
            )
            .import(Import::new("./controller").named("create").named("list"))
            .add(get)
            .add(post)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_list_envelope() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = Route::new(&books, &options).render();
        assert!(code.contains("export async function GET(request: NextRequest) {"));
        assert!(code.contains("Number(params.get(\"limit\")) || 10);"));
        assert!(code.contains(
            "return NextResponse.json({ data: { books: items, total, page, limit } });"
        ));
        assert!(code.contains("console.error(\"GET /api/v1/books failed\", error);"));
    }

    #[test]
    fn test_create_returns_201() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = Route::new(&books, &options).render();
        assert!(code.contains(
            "return NextResponse.json({ data: { book: item } }, { status: 201 });"
        ));
        assert!(code.contains("{ status: 400 }"));
    }
}
