//! Next.js file generators, one per [`Artifact`](crate::Artifact).

mod controller;
mod custom_link;
mod db;
mod fields;
mod home_button;
mod item_route;
mod list_page;
mod model;
mod route;
mod server_component;
mod store;
mod types;

pub use controller::Controller;
pub use custom_link::CustomLink;
pub use db::{Db, MONGODB_URI_ENV};
pub use fields::Fields;
pub use home_button::HomeButton;
pub use item_route::ItemRoute;
pub use list_page::ListPage;
pub use model::Model;
pub use route::Route;
pub use server_component::ServerComponent;
pub use store::Store;
pub use types::Types;

use dashgen_codegen::schema::{FieldPath, SchemaExt, SchemaVisitor};
use dashgen_core::FieldKind;
use dashgen_manifest::{Naming, Schema};

use crate::{GeneratorOptions, ast::member};

/// Directory of the API handlers for a resource, e.g. `src/app/api/v1/books`.
fn api_dir(naming: &Naming, options: &GeneratorOptions) -> String {
    format!(
        "src/app{}/{}",
        options.api_mount.trim_end_matches('/'),
        naming.resource()
    )
}

/// Public URL of a resource's API, e.g. `/api/v1/books`.
fn api_url(naming: &Naming, options: &GeneratorOptions) -> String {
    format!(
        "{}/{}",
        options.api_mount.trim_end_matches('/'),
        naming.resource()
    )
}

/// `base.a.b` for the given path segments.
fn member_chain(base: &str, segments: &[String]) -> String {
    segments
        .iter()
        .fold(base.to_string(), |expr, segment| member(&expr, segment))
}

/// Name of the store hook, e.g. `useBooksStore`.
fn store_hook(naming: &Naming) -> String {
    format!("use{}Store", naming.plural_pascal)
}

/// Name of the form state type, e.g. `BookInput`.
fn input_type(naming: &Naming) -> String {
    format!("{}Input", naming.singular_pascal)
}

/// Rebuild the nested shape of `schema`: `leaf` maps each primitive field,
/// `object` combines the mapped fields of each nested object.
fn fold_schema<T>(
    schema: &Schema,
    leaf: impl FnMut(&FieldPath, &FieldKind) -> T,
    object: impl FnMut(&FieldPath, Vec<T>) -> T,
) -> Vec<T> {
    let mut fold = Fold {
        stack: vec![Vec::new()],
        leaf,
        object,
    };
    schema.walk(&mut fold);
    fold.stack.pop().unwrap_or_default()
}

struct Fold<T, L, O> {
    stack: Vec<Vec<T>>,
    leaf: L,
    object: O,
}

impl<T, L, O> SchemaVisitor for Fold<T, L, O>
where
    L: FnMut(&FieldPath, &FieldKind) -> T,
    O: FnMut(&FieldPath, Vec<T>) -> T,
{
    fn enter_object(&mut self, _path: &FieldPath) {
        self.stack.push(Vec::new());
    }

    fn visit_field(&mut self, path: &FieldPath, kind: &FieldKind) {
        let node = (self.leaf)(path, kind);
        if let Some(level) = self.stack.last_mut() {
            level.push(node);
        }
    }

    fn leave_object(&mut self, path: &FieldPath) {
        let fields = self.stack.pop().unwrap_or_default();
        let node = (self.object)(path, fields);
        if let Some(parent) = self.stack.last_mut() {
            parent.push(node);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_schema_keeps_nesting() {
        let schema = fixtures::books().schema;
        let folded = fold_schema(
            &schema,
            |path, kind| format!("{}:{}", path.name(), kind),
            |path, fields| format!("{}{{{}}}", path.name(), fields.join(",")),
        );
        assert_eq!(
            folded,
            vec![
                "title:string",
                "pages:number",
                "publisher{name:string,founded:date}"
            ]
        );
    }

    #[test]
    fn test_member_chain() {
        let segments = vec!["publisher".to_string(), "first-name".to_string()];
        assert_eq!(
            member_chain("draft", &segments),
            "draft.publisher[\"first-name\"]"
        );
    }

    #[test]
    fn test_api_dir_follows_mount() {
        let naming = fixtures::books().naming;
        let options = GeneratorOptions {
            api_mount: "/api/v2/".to_string(),
            ..GeneratorOptions::default()
        };
        assert_eq!(api_dir(&naming, &options), "src/app/api/v2/books");
        assert_eq!(api_url(&naming, &options), "/api/v2/books");
    }
}
