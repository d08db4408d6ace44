//! `all/page.tsx`: server-rendered list of the resource.
//!
//! Fetches one page from the resource's collection route with a bearer
//! token. Fetch failures are logged and render as an empty list.

use std::path::{Path, PathBuf};

use dashgen_codegen::{
    builder::{CodeFragment, Renderable},
    schema::ResolvedInterface,
};
use dashgen_core::{FieldKind, GeneratedFile};

use super::{api_url, member_chain};
use crate::{
    CodeFile, GeneratorOptions, RawCode,
    ast::{Fn, Import, Interface, JsxElement, Param, member, optional_member, string_literal},
};

pub struct ListPage<'a> {
    resolved: &'a ResolvedInterface,
    options: &'a GeneratorOptions,
}

impl<'a> ListPage<'a> {
    pub fn new(resolved: &'a ResolvedInterface, options: &'a GeneratorOptions) -> Self {
        Self { resolved, options }
    }

    fn fetch_name(&self) -> String {
        format!("fetch{}", self.resolved.naming.plural_pascal)
    }

    /// Expression shown for each item: the first text field, else its id.
    fn label(&self) -> String {
        self.resolved
            .fields
            .iter()
            .find(|field| field.kind == FieldKind::String)
            .map(|field| member_chain("item", field.path.segments()))
            .unwrap_or_else(|| "item._id".to_string())
    }

    fn fetch(&self) -> Fn {
        let naming = &self.resolved.naming;
        let base = member("process.env", &self.options.base_url_env);
        let token = member("process.env", &self.options.token_env);

        Fn::new(self.fetch_name())
            .private()
            .async_()
            .param(Param::new("page", "number"))
            .returns(format!("Promise<{}[]>", naming.singular_pascal))
            .body_line("try {")
            .body_line("  const res = await fetch(")
            .body_line(format!(
                "    `${{{}}}{}?page=${{page}}&limit=${{PAGE_LIMIT}}`,",
                base,
                api_url(naming, self.options)
            ))
            .body_line("    {")
            .body_line(format!(
                "      headers: {{ Authorization: `Bearer ${{{}}}` }},",
                token
            ))
            .body_line("      cache: \"no-store\",")
            .body_line("    },")
            .body_line("  );")
            .body_line("  if (!res.ok) {")
            .body_line("    throw new Error(`request failed with status ${res.status}`);")
            .body_line("  }")
            .body_line(format!(
                "  const body: {}Response = await res.json();",
                naming.plural_pascal
            ))
            .body_line(format!(
                "  return {} ?? [];",
                optional_member("body.data", naming.resource())
            ))
            .body_line("} catch (error) {")
            .body_line(format!(
                "  console.error({}, error);",
                string_literal(&format!("failed to fetch {}", naming.resource()))
            ))
            .body_line("  return [];")
            .body_line("}")
    }

    fn page(&self) -> Fn {
        let naming = &self.resolved.naming;
        let item = JsxElement::new("li")
            .attr_expr("key", "item._id")
            .expr(self.label());
        let list = JsxElement::new("ul").fragments(vec![CodeFragment::Block {
            header: "{items.map((item) => (".to_string(),
            body: item.to_fragments(),
            close: Some("))}".to_string()),
        }]);
        let main = JsxElement::new("main")
            .child(JsxElement::new("h1").text(naming.plural_pascal.as_str()))
            .child(list);

        Fn::new(format!("{}Page", naming.plural_pascal))
            .default_export()
            .async_()
            .param(Param::new("{ searchParams }", "PageProps"))
            .body_line("const { page } = await searchParams;")
            .body_line("const current = Math.max(1, Number(page) || 1);")
            .body_line(format!("const items = await {}(current);", self.fetch_name()))
            .body_line("")
            .body_node(&main.returned())
    }
}

impl GeneratedFile for ListPage<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/all/page.tsx",
            self.resolved.naming.resource_dir()
        ))
    }

    fn render(&self) -> String {
        let naming = &self.resolved.naming;

        CodeFile::generated()
            .import(
                Import::new("../types")
                    .named(naming.singular_pascal.as_str())
                    .named(format!("{}Response", naming.plural_pascal))
                    .type_only(),
            )
            .add(RawCode::new(format!(
                "const PAGE_LIMIT = {};",
                self.options.page_limit
            )))
            .add(self.fetch())
            .add(
                Interface::new("PageProps")
                    .private()
                    .field("searchParams", "Promise<{ page?: string }>"),
            )
            .add(self.page())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::fixtures;

    #[test]
    fn test_fetches_with_bearer_token() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = ListPage::new(&books, &options).render();
        assert!(code.contains(
            "`${process.env.NEXT_PUBLIC_API_URL}/api/v1/books?page=${page}&limit=${PAGE_LIMIT}`,"
        ));
        assert!(code.contains("headers: { Authorization: `Bearer ${process.env.API_TOKEN}` },"));
        assert!(code.contains("cache: \"no-store\","));
        assert!(code.contains("return body.data?.books ?? [];"));
    }

    #[test]
    fn test_fetch_failure_degrades_to_empty_list() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = ListPage::new(&books, &options).render();
        assert!(code.contains(
            "  } catch (error) {\n    console.error(\"failed to fetch books\", error);\n    return [];\n  }\n"
        ));
    }

    #[test]
    fn test_renders_list_items() {
        let books = fixtures::books();
        let options = GeneratorOptions::default();
        let code = ListPage::new(&books, &options).render();
        assert!(code.contains("export default async function BooksPage({ searchParams }: PageProps) {"));
        assert!(code.contains("{items.map((item) => (\n"));
        assert!(code.contains("<li key={item._id}>{item.title}</li>"));
    }

    #[test]
    fn test_fetches_the_collection_route() {
        let books = fixtures::books();
        let options = GeneratorOptions {
            api_mount: "/api/v2".to_string(),
            ..GeneratorOptions::default()
        };
        let code = ListPage::new(&books, &options).render();
        let route = crate::files::Route::new(&books, &options);
        assert_eq!(
            route.path(Path::new("")),
            Path::new("src/app/api/v2/books/route.ts")
        );
        assert!(code.contains("}/api/v2/books?page=${page}"));
    }

    #[test]
    fn test_configured_env_names() {
        let books = fixtures::books();
        let options = GeneratorOptions {
            base_url_env: "ADMIN_API".to_string(),
            token_env: "ADMIN_TOKEN".to_string(),
            page_limit: 50,
            ..GeneratorOptions::default()
        };
        let code = ListPage::new(&books, &options).render();
        assert!(code.contains("${process.env.ADMIN_API}"));
        assert!(code.contains("${process.env.ADMIN_TOKEN}"));
        assert!(code.contains("const PAGE_LIMIT = 50;"));
    }
}
