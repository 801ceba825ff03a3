//! Type-expression rendering for attributes.
//!
//! Converts one attribute definition into a TypeScript type-expression
//! fragment, consulting the name binding for cross-schema references. This
//! is where every kind's optionality, nullability, array-ness, and
//! projection-generic rules live:
//!
//! - scalars union `null` unless certainly-required; enumerations union
//!   `null` unconditionally; `json` and unknown kinds render `any`
//! - password fields are suppressed entirely
//! - populatable fields (relation, component, media, dynamic zone, nullable
//!   nested group) get an optional key; relations and media wrap in
//!   `{ data: …; }`
//! - references to projection-aware schemas append
//!   `<ExtractNested<Populate, 'field'>>`, narrowing the caller's populate
//!   path to the sub-path rooted at this field
//! - unresolved references render the permissive `any` and a diagnostic;
//!   rendering never fails

use crate::binding::NameBinding;
use crate::classify::is_populatable;
use crate::diag::Diagnostic;
use crate::options::GenerateOptions;
use content_schema::{AttributeDefinition, Attributes, RelationKind, ScalarKind};
use std::fmt::Write;

/// Fallback for references that cannot be resolved.
const FALLBACK_TYPE: &str = "any";

/// Fallback combinator names when the binding cannot resolve them.
const DEFAULT_EXTRACT_NESTED: &str = "ExtractNested";

/// Renders attribute collections as TypeScript field lines.
pub struct FieldRenderer<'a> {
    schema_uid: &'a str,
    binding: &'a NameBinding,
    options: &'a GenerateOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> FieldRenderer<'a> {
    pub fn new(schema_uid: &'a str, binding: &'a NameBinding, options: &'a GenerateOptions) -> Self {
        Self {
            schema_uid,
            binding,
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Render every attribute as a field line at `indent` levels, one per
    /// line, suppressed fields skipped.
    pub fn fields(&mut self, attrs: &Attributes, indent: usize) -> String {
        let mut out = String::new();
        for (name, attr) in attrs {
            if let Some(line) = self.field(name, attr, indent) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }

    /// Render one attribute as a `name: type;` field line.
    ///
    /// Returns `None` for password attributes. Populatable attributes get an
    /// optional key independent of their `required` flag; nested groups only
    /// when nullable.
    pub fn field(&mut self, name: &str, attr: &AttributeDefinition, indent: usize) -> Option<String> {
        if matches!(
            attr,
            AttributeDefinition::Scalar {
                scalar: ScalarKind::Password,
                ..
            }
        ) {
            return None;
        }
        let optional = if is_populatable(attr) { "?" } else { "" };
        let expr = self.type_expr(name, attr, indent);
        Some(format!("{}{name}{optional}: {expr};", pad(indent)))
    }

    fn type_expr(&mut self, name: &str, attr: &AttributeDefinition, indent: usize) -> String {
        match attr {
            AttributeDefinition::Scalar {
                scalar,
                certainly_required,
                ..
            } => scalar_expr(*scalar, *certainly_required),
            AttributeDefinition::Enumeration { values, .. } => self.enumeration_expr(name, values),
            AttributeDefinition::Relation {
                target, relation, ..
            } => self.relation_expr(name, target, *relation),
            AttributeDefinition::Component {
                target, repeatable, ..
            } => self.component_expr(name, target, *repeatable),
            AttributeDefinition::DynamicZone { components } => {
                self.dynamic_zone_expr(name, components)
            }
            AttributeDefinition::Media {
                multiple,
                certainly_required,
                ..
            } => self.media_expr(name, *multiple, *certainly_required),
            AttributeDefinition::NestedGroup { fields, nullable } => {
                self.nested_expr(fields, *nullable, indent)
            }
            AttributeDefinition::Opaque => FALLBACK_TYPE.to_string(),
        }
    }

    /// Literal union of the enumeration values. Always nullable: delivery
    /// omits unset enumerations regardless of `required`.
    fn enumeration_expr(&mut self, name: &str, values: &[String]) -> String {
        if values.is_empty() {
            self.diagnostics.push(Diagnostic::EmptyEnumeration {
                schema: self.schema_uid.to_string(),
                attribute: name.to_string(),
            });
        }
        let mut parts: Vec<String> = values
            .iter()
            .map(|value| format!("\"{}\"", escape(value)))
            .collect();
        parts.push("null".to_string());
        parts.join(" | ")
    }

    fn relation_expr(&mut self, name: &str, target: &str, relation: RelationKind) -> String {
        let mut expr = String::from("{ data: ");
        match self.binding.get(target) {
            Some(bound) => {
                expr.push_str(&bound.name);
                if bound.populatable {
                    let projection = self.projection(name);
                    expr.push_str(&projection);
                }
            }
            None => {
                self.unresolved(name, target);
                expr.push_str(FALLBACK_TYPE);
            }
        }
        if relation.is_to_many() {
            expr.push_str("[]");
        } else {
            expr.push_str(" | null");
        }
        expr.push_str("; }");
        expr
    }

    /// Components are never unioned with `null`; structural absence is the
    /// optional key.
    fn component_expr(&mut self, name: &str, target: &str, repeatable: bool) -> String {
        let mut expr = match self.binding.get(target) {
            Some(bound) => {
                let mut reference = bound.name.clone();
                if bound.populatable {
                    let projection = self.projection(name);
                    reference.push_str(&projection);
                }
                reference
            }
            None => {
                self.unresolved(name, target);
                FALLBACK_TYPE.to_string()
            }
        };
        if repeatable {
            expr.push_str("[]");
        }
        expr
    }

    fn dynamic_zone_expr(&mut self, name: &str, components: &[String]) -> String {
        if components.is_empty() {
            self.diagnostics.push(Diagnostic::EmptyDynamicZone {
                schema: self.schema_uid.to_string(),
                attribute: name.to_string(),
            });
            return "Array<never>".to_string();
        }
        let mut members = Vec::with_capacity(components.len());
        for uid in components {
            match self.binding.get(uid) {
                Some(bound) if bound.populatable => {
                    members.push(format!("{}{}", bound.name, self.projection(name)));
                }
                Some(bound) => members.push(bound.name.clone()),
                None => {
                    self.unresolved(name, uid);
                    members.push(FALLBACK_TYPE.to_string());
                }
            }
        }
        format!("Array<{}>", members.join(" | "))
    }

    fn media_expr(&mut self, name: &str, multiple: bool, certainly_required: bool) -> String {
        let media = match self.binding.get(&self.options.media_uid) {
            Some(bound) => bound.name.clone(),
            None => {
                let target = self.options.media_uid.clone();
                self.unresolved(name, &target);
                FALLBACK_TYPE.to_string()
            }
        };
        let mut expr = format!("{{ data: {media}");
        if multiple {
            expr.push_str("[]");
        } else if !certainly_required {
            expr.push_str(" | null");
        }
        expr.push_str("; }");
        expr
    }

    fn nested_expr(&mut self, fields: &Attributes, nullable: bool, indent: usize) -> String {
        let mut expr = String::from("{\n");
        expr.push_str(&self.fields(fields, indent + 1));
        write!(expr, "{}}}", pad(indent)).unwrap();
        if nullable {
            expr.push_str(" | null");
        }
        expr
    }

    /// Narrow the caller's populate path to the sub-path rooted at `field`.
    fn projection(&self, field: &str) -> String {
        let extract = self
            .binding
            .name(&self.options.extract_nested_uid)
            .unwrap_or(DEFAULT_EXTRACT_NESTED);
        format!("<{extract}<{}, '{field}'>>", self.options.populate_param)
    }

    fn unresolved(&mut self, attribute: &str, target: &str) {
        self.diagnostics.push(Diagnostic::UnresolvedReference {
            schema: self.schema_uid.to_string(),
            attribute: attribute.to_string(),
            target: target.to_string(),
        });
    }
}

fn scalar_expr(kind: ScalarKind, certainly_required: bool) -> String {
    let base = match kind {
        ScalarKind::String
        | ScalarKind::Text
        | ScalarKind::RichText
        | ScalarKind::Email
        | ScalarKind::Uid => "string",
        ScalarKind::Integer | ScalarKind::BigInteger | ScalarKind::Decimal | ScalarKind::Float => {
            "number"
        }
        ScalarKind::Date | ScalarKind::DateTime | ScalarKind::Time => "string",
        ScalarKind::Boolean => "boolean",
        // json carries arbitrary data; no null union.
        ScalarKind::Json => return "any".to_string(),
        // Suppressed before rendering; keep the match total.
        ScalarKind::Password => return "never".to_string(),
    };
    if certainly_required {
        base.to_string()
    } else {
        format!("{base} | null")
    }
}

fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;

    fn renderer_with<'a>(
        binding: &'a NameBinding,
        options: &'a GenerateOptions,
    ) -> FieldRenderer<'a> {
        FieldRenderer::new("api::article.article", binding, options)
    }

    fn binding_with(entries: &[(&str, &str, bool)]) -> NameBinding {
        let mut binding = NameBinding::new();
        for (uid, name, populatable) in entries {
            binding.insert(
                *uid,
                Binding {
                    name: name.to_string(),
                    populatable: *populatable,
                },
            );
        }
        binding.insert(
            "builtins::ExtractNested",
            Binding {
                name: "ExtractNested".to_string(),
                populatable: false,
            },
        );
        binding
    }

    #[test]
    fn scalar_fields_union_null() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("title", &AttributeDefinition::string().required(), 1)
            .unwrap();
        assert_eq!(line, "  title: string | null;");

        let line = renderer
            .field("views", &AttributeDefinition::integer(), 1)
            .unwrap();
        assert_eq!(line, "  views: number | null;");

        let line = renderer
            .field(
                "active",
                &AttributeDefinition::scalar(ScalarKind::Boolean),
                1,
            )
            .unwrap();
        assert_eq!(line, "  active: boolean | null;");

        let line = renderer
            .field(
                "publishedAt",
                &AttributeDefinition::scalar(ScalarKind::DateTime),
                1,
            )
            .unwrap();
        assert_eq!(line, "  publishedAt: string | null;");
    }

    #[test]
    fn certainly_required_drops_null() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("locale", &AttributeDefinition::string().certainly_required(), 1)
            .unwrap();
        assert_eq!(line, "  locale: string;");
    }

    #[test]
    fn json_and_opaque_render_any() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("meta", &AttributeDefinition::scalar(ScalarKind::Json), 1)
            .unwrap();
        assert_eq!(line, "  meta: any;");

        let line = renderer.field("custom", &AttributeDefinition::Opaque, 1).unwrap();
        assert_eq!(line, "  custom: any;");
    }

    #[test]
    fn password_fields_are_suppressed() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        assert!(
            renderer
                .field(
                    "secret",
                    &AttributeDefinition::scalar(ScalarKind::Password).required(),
                    1,
                )
                .is_none()
        );

        let mut attrs = Attributes::new();
        attrs.insert(
            "secret".into(),
            AttributeDefinition::scalar(ScalarKind::Password),
        );
        attrs.insert("title".into(), AttributeDefinition::string());
        let fields = renderer.fields(&attrs, 1);
        assert!(!fields.contains("secret"));
        assert!(fields.contains("title"));
    }

    #[test]
    fn enumeration_is_always_nullable() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "state",
                &AttributeDefinition::enumeration(&["A", "B"]).required(),
                1,
            )
            .unwrap();
        assert_eq!(line, "  state: \"A\" | \"B\" | null;");
    }

    #[test]
    fn empty_enumeration_degrades_with_diagnostic() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("state", &AttributeDefinition::enumeration(&[]), 1)
            .unwrap();
        assert_eq!(line, "  state: null;");
        assert_eq!(
            renderer.into_diagnostics(),
            vec![Diagnostic::EmptyEnumeration {
                schema: "api::article.article".into(),
                attribute: "state".into(),
            }]
        );
    }

    #[test]
    fn enumeration_values_are_escaped() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("quote", &AttributeDefinition::enumeration(&["say \"hi\""]), 1)
            .unwrap();
        assert_eq!(line, "  quote: \"say \\\"hi\\\"\" | null;");
    }

    #[test]
    fn relation_to_one_wraps_data_with_null() {
        let binding = binding_with(&[("api::writer.writer", "IWriter", false)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "author",
                &AttributeDefinition::relation("api::writer.writer", RelationKind::ManyToOne)
                    .required(),
                1,
            )
            .unwrap();
        // Optional key despite `required`; null despite everything.
        assert_eq!(line, "  author?: { data: IWriter | null; };");
    }

    #[test]
    fn relation_to_many_is_an_array() {
        let binding = binding_with(&[("api::tag.tag", "ITag", false)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "tags",
                &AttributeDefinition::relation("api::tag.tag", RelationKind::ManyToMany),
                1,
            )
            .unwrap();
        assert_eq!(line, "  tags?: { data: ITag[]; };");
    }

    #[test]
    fn relation_to_populatable_target_threads_projection() {
        let binding = binding_with(&[("api::writer.writer", "IWriter", true)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "author",
                &AttributeDefinition::relation("api::writer.writer", RelationKind::ManyToOne),
                1,
            )
            .unwrap();
        assert_eq!(
            line,
            "  author?: { data: IWriter<ExtractNested<Populate, 'author'>> | null; };"
        );
    }

    #[test]
    fn unresolved_relation_falls_back_to_any() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "ghost",
                &AttributeDefinition::relation("api::missing.missing", RelationKind::OneToOne),
                1,
            )
            .unwrap();
        assert_eq!(line, "  ghost?: { data: any | null; };");
        assert_eq!(
            renderer.into_diagnostics(),
            vec![Diagnostic::UnresolvedReference {
                schema: "api::article.article".into(),
                attribute: "ghost".into(),
                target: "api::missing.missing".into(),
            }]
        );
    }

    #[test]
    fn component_never_unions_null() {
        let binding = binding_with(&[("blocks.hero", "IBlocksHero", false)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field(
                "hero",
                &AttributeDefinition::component("blocks.hero", false).required(),
                1,
            )
            .unwrap();
        assert_eq!(line, "  hero?: IBlocksHero;");

        let line = renderer
            .field("heroes", &AttributeDefinition::component("blocks.hero", true), 1)
            .unwrap();
        assert_eq!(line, "  heroes?: IBlocksHero[];");
    }

    #[test]
    fn repeatable_populatable_component() {
        let binding = binding_with(&[("blocks.hero", "IBlocksHero", true)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("heroes", &AttributeDefinition::component("blocks.hero", true), 1)
            .unwrap();
        assert_eq!(
            line,
            "  heroes?: IBlocksHero<ExtractNested<Populate, 'heroes'>>[];"
        );
    }

    #[test]
    fn dynamic_zone_parameterizes_only_populatable_members() {
        let binding = binding_with(&[
            ("a.b", "IAB", false),
            ("a.c", "IAC", true),
        ]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("zone", &AttributeDefinition::dynamic_zone(&["a.b", "a.c"]), 1)
            .unwrap();
        assert_eq!(
            line,
            "  zone?: Array<IAB | IAC<ExtractNested<Populate, 'zone'>>>;"
        );
    }

    #[test]
    fn empty_dynamic_zone_degrades_with_diagnostic() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("zone", &AttributeDefinition::dynamic_zone(&[]), 1)
            .unwrap();
        assert_eq!(line, "  zone?: Array<never>;");
        assert!(matches!(
            renderer.into_diagnostics()[..],
            [Diagnostic::EmptyDynamicZone { .. }]
        ));
    }

    #[test]
    fn media_shapes() {
        let binding = binding_with(&[("builtins::Media", "IMedia", true)]);
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let line = renderer
            .field("cover", &AttributeDefinition::media(false), 1)
            .unwrap();
        assert_eq!(line, "  cover?: { data: IMedia | null; };");

        let line = renderer
            .field("gallery", &AttributeDefinition::media(true), 1)
            .unwrap();
        assert_eq!(line, "  gallery?: { data: IMedia[]; };");

        let line = renderer
            .field(
                "logo",
                &AttributeDefinition::media(false).certainly_required(),
                1,
            )
            .unwrap();
        assert_eq!(line, "  logo?: { data: IMedia; };");
    }

    #[test]
    fn nested_groups_render_recursively() {
        let binding = NameBinding::new();
        let options = GenerateOptions::default();
        let mut renderer = renderer_with(&binding, &options);

        let mut inner = Attributes::new();
        inner.insert("deep".into(), AttributeDefinition::string());
        let mut outer = Attributes::new();
        outer.insert("inner".into(), AttributeDefinition::nested(inner, true));
        outer.insert("flag".into(), AttributeDefinition::scalar(ScalarKind::Boolean));

        let line = renderer
            .field("meta", &AttributeDefinition::nested(outer, false), 1)
            .unwrap();
        let expected = "  meta: {\n    flag: boolean | null;\n    inner?: {\n      deep: string | null;\n    } | null;\n  };";
        assert_eq!(line, expected);
    }
}
