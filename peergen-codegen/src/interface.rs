//! Interface model: the variants, fields and types of one generated peer.

use std::collections::BTreeSet;

use peergen_dsl::{Declaration, MethodDecl, Param, Parsed, PropertyDecl, base_type};

use crate::{
    config::Guards,
    equality::EqualitySupport,
    templates::{PROPERTY_READ, PROPERTY_WRITE, PROPERTY_WRITE_NOCHECK, TemplateStore},
    types::{DEFAULT_FRAMEWORK_PREFIX, framework_types},
    variant::{MethodKind, Section, Variant, VariantKind, render_body},
};

/// Collaborators needed while synthesizing variants.
pub struct SynthesisContext<'a> {
    pub templates: &'a TemplateStore,
    pub equality: &'a dyn EqualitySupport,
    pub guards: &'a Guards,
    pub framework_prefix: &'a str,
}

impl<'a> SynthesisContext<'a> {
    /// Context with default guards and framework prefix.
    pub fn new(templates: &'a TemplateStore, equality: &'a dyn EqualitySupport) -> Self {
        static DEFAULT_GUARDS: std::sync::LazyLock<Guards> =
            std::sync::LazyLock::new(Guards::default);

        Self {
            templates,
            equality,
            guards: &DEFAULT_GUARDS,
            framework_prefix: DEFAULT_FRAMEWORK_PREFIX,
        }
    }

    pub fn with_guards(mut self, guards: &'a Guards) -> Self {
        self.guards = guards;
        self
    }

    pub fn with_framework_prefix(mut self, prefix: &'a str) -> Self {
        self.framework_prefix = prefix;
        self
    }
}

/// A finished interface, ready for rendering.
///
/// Variants are sorted by (section, name, signature), so rendering the same
/// declarations always produces the same documents.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    properties: Vec<String>,
    variables: Vec<String>,
    used_types: BTreeSet<String>,
    includes: BTreeSet<String>,
    variants: Vec<Variant>,
}

impl Interface {
    /// Build an interface from every declaration of a parse result.
    pub fn from_parsed(name: &str, parsed: &Parsed, ctx: &SynthesisContext<'_>) -> Self {
        let mut builder = InterfaceBuilder::new(name, ctx);
        for decl in &parsed.declarations {
            builder.declare(decl);
        }
        builder.finish()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property declarations annotated with `USER true`.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Backing field declarations.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Every parameter and return type seen, without qualifiers.
    pub fn used_types(&self) -> &BTreeSet<String> {
        &self.used_types
    }

    /// Framework types to `#include`.
    pub fn includes(&self) -> &BTreeSet<String> {
        &self.includes
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

/// Accumulates variants while declarations are fed in.
pub struct InterfaceBuilder<'a> {
    ctx: &'a SynthesisContext<'a>,
    name: String,
    properties: Vec<String>,
    variables: Vec<String>,
    used_types: BTreeSet<String>,
    variants: Vec<Variant>,
}

impl<'a> InterfaceBuilder<'a> {
    pub fn new(name: impl Into<String>, ctx: &'a SynthesisContext<'a>) -> Self {
        Self {
            ctx,
            name: name.into(),
            properties: Vec::new(),
            variables: Vec::new(),
            used_types: BTreeSet::new(),
            variants: Vec::new(),
        }
    }

    /// Route a declaration to method or property synthesis.
    pub fn declare(&mut self, decl: &Declaration) -> &mut Self {
        match decl {
            Declaration::Method(method) => self.add_method(method),
            Declaration::Property(property) => self.add_property(property),
        }
    }

    /// Append the eight invocation variants of a remote method.
    pub fn add_method(&mut self, method: &MethodDecl) -> &mut Self {
        let declared = method.signature();
        let names = method.param_names();
        let separator = if method.params.is_empty() { "" } else { ", " };
        let suffix = if method.is_void() { "_void" } else { "" };
        // Every variant hands back a temporary, so references decay to values.
        let value = method.value_type();

        for kind in MethodKind::ALL {
            let extras = kind.extra_params(&value);
            let signature = if extras.is_empty() {
                declared.clone()
            } else {
                format!("{}{}{}", declared, separator, extras.join(", "))
            };

            let body = kind.template_key().map(|key| {
                render_body(
                    self.ctx.templates,
                    &format!("{}{}", key, suffix),
                    &[
                        method.name.as_str(),
                        separator,
                        names.as_str(),
                        value.as_str(),
                    ],
                )
            });

            self.variants.push(Variant {
                kind: VariantKind::Method(kind),
                name: kind.name(&method.name),
                return_type: kind.return_type(&value).to_string(),
                signature,
                separator: separator.to_string(),
                section: kind.section(),
                invokable: kind.is_invokable(),
                guard: kind.guard(self.ctx.guards),
                body,
            });
        }

        for param in &method.params {
            self.use_type(&param.ty);
        }
        self.use_type(&method.return_type);

        tracing::debug!(method = %method.name, "synthesized method variants");
        self
    }

    /// Append the field, reader, writer and notifier of a property.
    pub fn add_property(&mut self, property: &PropertyDecl) -> &mut Self {
        let args: [&str; 2] = [&property.name, &property.notify];
        let param = Param::new(&property.ty, &property.name).to_string();

        self.properties.push(annotate_user(&property.text));
        self.variables
            .push(format!("{} {};", property.ty, property.field_name()));

        let write_key = if self.ctx.equality.supports_equality(&property.ty) {
            PROPERTY_WRITE
        } else {
            PROPERTY_WRITE_NOCHECK
        };

        self.variants.push(Variant {
            kind: VariantKind::PropertyRead,
            name: property.read.clone(),
            return_type: property.ty.clone(),
            signature: String::new(),
            separator: String::new(),
            section: Section::Public,
            invokable: false,
            guard: None,
            body: Some(render_body(self.ctx.templates, PROPERTY_READ, &args)),
        });
        self.variants.push(Variant {
            kind: VariantKind::PropertyWrite,
            name: property.write.clone(),
            return_type: "void".to_string(),
            signature: param.clone(),
            separator: String::new(),
            section: Section::PublicSlots,
            invokable: false,
            guard: None,
            body: Some(render_body(self.ctx.templates, write_key, &args)),
        });
        self.variants.push(Variant {
            kind: VariantKind::PropertyNotify,
            name: property.notify.clone(),
            return_type: "void".to_string(),
            signature: param,
            separator: String::new(),
            section: Section::Signals,
            invokable: false,
            guard: None,
            body: None,
        });

        self.use_type(&property.ty);

        tracing::debug!(property = %property.name, write_template = write_key, "synthesized property");
        self
    }

    /// Sort variants and freeze the interface.
    pub fn finish(self) -> Interface {
        let mut variants = self.variants;
        variants.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let includes = self
            .used_types
            .iter()
            .flat_map(|ty| framework_types(ty, self.ctx.framework_prefix))
            .map(str::to_string)
            .collect();

        Interface {
            name: self.name,
            properties: self.properties,
            variables: self.variables,
            used_types: self.used_types,
            includes,
            variants,
        }
    }

    fn use_type(&mut self, ty: &str) {
        let base = base_type(ty);
        if !base.is_empty() {
            self.used_types.insert(base);
        }
    }
}

/// Mark a property declaration as user-editable:
/// `Q_PROPERTY(int a READ a ...)` -> `Q_PROPERTY(int a READ a ... USER true)`.
fn annotate_user(text: &str) -> String {
    match text.rfind(')') {
        Some(close) => format!("{} USER true{}", text[..close].trim_end(), &text[close..]),
        None => text.to_string(),
    }
}
