//! `[id]/route.ts`: single-document handlers (`GET`, `PATCH`, `DELETE`).

use std::path::{Path, PathBuf};

use dashgen_codegen::schema::ResolvedInterface;
use dashgen_core::GeneratedFile;

use super::{api_dir, api_url};
use crate::{
    CodeFile, GeneratorOptions,
    ast::{Fn, Import, Interface, Param, property_key, string_literal},
};

pub struct ItemRoute<'a> {
    resolved: &'a ResolvedInterface,
    options: &'a GeneratorOptions,
}

impl<'a> ItemRoute<'a> {
    pub fn new(resolved: &'a ResolvedInterface, options: &'a GeneratorOptions) -> Self {
        Self { resolved, options }
    }

    /// A handler that loads `item` with `call`, answering 404 when it is null.
    fn handler(&self, method: &str, request: &str, prelude: &[&str], call: &str) -> Fn {
        let naming = &self.resolved.naming;
        let url = api_url(naming, self.options);

        let mut handler = Fn::new(method)
            .async_()
            .param(Param::new(request, "NextRequest"))
            .param(Param::new("{ params }", "RouteContext"))
            .body_line("try {")
            .body_line("  const { id } = await params;");
        for line in prelude {
            handler = handler.body_line(format!("  {}", line));
        }
        handler
            .body_line(format!("  const item = await {};", call))
            .body_line("  if (!item) {")
            .body_line(format!(
                "    return NextResponse.json({{ error: {} }}, {{ status: 404 }});",
                string_literal(&format!("{} not found", naming.singular))
            ))
            .body_line("  }")
            .body_line(format!(
                "  return NextResponse.json({{ data: {{ {}: item }} }});",
                property_key(&naming.singular)
            ))
            .body_line("} catch (error) {")
            .body_line(format!(
                "  console.error({}, error);",
                string_literal(&format!("{} {}/[id] failed", method, url))
            ))
            .body_line(format!(
                "  return NextResponse.json({{ error: {} }}, {{ status: 500 }});",
                string_literal(&format!("failed to {} {}", method.to_lowercase(), naming.singular))
            ))
            .body_line("}")
    }
}

impl GeneratedFile for ItemRoute<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!(
            "{}/[id]/route.ts",
            api_dir(&self.resolved.naming, self.options)
        ))
    }

    fn render(&self) -> String {
        CodeFile::generated()
            .import(
                Import::new("next/server")
                    .named("NextResponse")
                    .named_type("NextRequest"),
            )
            .import(
                Import::new("../controller")
                    .named("get")
                    .named("remove")
                    .named("update"),
            )
            .add(
                Interface::new("RouteContext")
                    .private()
                    .field("params", "Promise<{ id: string }>"),
            )
            .add(self.handler("GET", "_request", &[], "get(id)"))
            .add(self.handler(
                "PATCH",
                "request",
                &["const input = await request.json();"],
                "update(id, input)",
            ))
            .add(self.handler("DELETE", "_request", &[], "remove(id)"))
            .render()
    }
}
