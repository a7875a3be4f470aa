//! Capability closure extraction.
//!
//! Maps each extension schema to the methods and fields its type exposes.
//! Abstract zero-argument `getX` accessors also surface as a field `x`
//! (managed properties).

use tracing::{debug, instrument};

use crate::{
    application::ports::CapabilityDescriber,
    domain::{
        CapabilityClosure, ExtensionSchema, FieldDescriptor, MemberMethod, MethodDescriptor,
        ModelDiagnostics, TypeDescription,
    },
};

/// Builds [`CapabilityClosure`]s through an injected describer.
pub struct CapabilityClosureExtractor<'a> {
    describer: &'a dyn CapabilityDescriber,
}

impl<'a> CapabilityClosureExtractor<'a> {
    pub fn new(describer: &'a dyn CapabilityDescriber) -> Self {
        Self { describer }
    }

    /// One closure per schema, in schema order.
    ///
    /// A type the describer does not know still yields a closure, with no
    /// members, and is counted in `diagnostics`.
    #[instrument(skip_all, fields(schemas = schemas.len()))]
    pub fn extract(
        &self,
        schemas: &[ExtensionSchema],
        diagnostics: &mut ModelDiagnostics,
    ) -> Vec<CapabilityClosure> {
        schemas
            .iter()
            .map(|schema| match self.describer.describe(&schema.capability_type) {
                Some(description) => closure_from(&schema.name, &description),
                None => {
                    debug!(
                        extension = %schema.name,
                        capability_type = %schema.capability_type,
                        "no description for capability type"
                    );
                    diagnostics.undescribed_capability_types += 1;
                    CapabilityClosure::new(&schema.name)
                }
            })
            .collect()
    }
}

fn closure_from(name: &str, description: &TypeDescription) -> CapabilityClosure {
    let mut closure = CapabilityClosure::new(name);

    for method in description.methods.iter().filter(|m| m.public) {
        closure.methods.push(MethodDescriptor {
            name: method.name.clone(),
            parameter_types: method.parameter_types.clone(),
            deprecated: method.deprecated,
        });

        if let Some(field) = managed_property(method) {
            closure.fields.push(FieldDescriptor {
                name: field,
                deprecated: method.deprecated,
            });
        }
    }

    for field in description
        .fields
        .iter()
        .filter(|f| f.public && !f.is_static)
    {
        closure.fields.push(FieldDescriptor {
            name: field.name.clone(),
            deprecated: field.deprecated,
        });
    }

    closure
}

/// Field name synthesized from a public abstract no-arg `getX` method.
fn managed_property(method: &MemberMethod) -> Option<String> {
    if !(method.public && method.is_abstract && method.parameter_types.is_empty()) {
        return None;
    }
    property_name(&method.name)
}

/// `getFooBar` -> `fooBar`. Only the first character of the suffix is
/// lower-cased, so `getURL` becomes `uRL`.
pub fn property_name(getter: &str) -> Option<String> {
    let suffix = getter.strip_prefix("get")?;
    let mut chars = suffix.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCapabilityDescriber;
    use crate::domain::MemberField;
    use mockall::predicate::eq;

    fn method(name: &str, params: &[&str], is_abstract: bool) -> MemberMethod {
        MemberMethod {
            name: name.into(),
            parameter_types: params.iter().map(|p| p.to_string()).collect(),
            public: true,
            is_abstract,
            deprecated: false,
        }
    }

    fn field(name: &str) -> MemberField {
        MemberField {
            name: name.into(),
            public: true,
            is_static: false,
            deprecated: false,
        }
    }

    fn extract_one(description: TypeDescription) -> CapabilityClosure {
        let mut describer = MockCapabilityDescriber::new();
        describer
            .expect_describe()
            .with(eq("com.example.Ext"))
            .times(1)
            .return_const(Some(description));

        let mut diagnostics = ModelDiagnostics::new();
        let closures = CapabilityClosureExtractor::new(&describer).extract(
            &[ExtensionSchema::new("ext", "com.example.Ext")],
            &mut diagnostics,
        );
        assert_eq!(closures.len(), 1);
        closures.into_iter().next().unwrap()
    }

    #[test]
    fn abstract_getter_synthesizes_field() {
        let closure = extract_one(TypeDescription {
            methods: vec![method("getFooBar", &[], true)],
            fields: vec![],
        });

        assert_eq!(closure.name, "ext");
        assert!(closure.method("getFooBar").is_some());
        assert!(closure.field("fooBar").is_some());
    }

    #[test]
    fn plain_field_is_not_duplicated() {
        let closure = extract_one(TypeDescription {
            methods: vec![],
            fields: vec![field("baz")],
        });

        let names: Vec<_> = closure.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["baz"]);
    }

    #[test]
    fn concrete_or_parameterized_getters_do_not_synthesize() {
        let closure = extract_one(TypeDescription {
            methods: vec![
                method("getName", &[], false),
                method("getValue", &["java.lang.String"], true),
                method("get", &[], true),
                method("setName", &["java.lang.String"], true),
            ],
            fields: vec![],
        });

        assert_eq!(closure.methods.len(), 4);
        assert!(closure.fields.is_empty());
    }

    #[test]
    fn non_public_and_static_members_are_skipped() {
        let mut hidden = method("getSecret", &[], true);
        hidden.public = false;
        let mut constant = field("DEFAULT");
        constant.is_static = true;
        let mut private = field("internal");
        private.public = false;

        let closure = extract_one(TypeDescription {
            methods: vec![hidden],
            fields: vec![constant, private, field("visible")],
        });

        assert!(closure.methods.is_empty());
        let names: Vec<_> = closure.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["visible"]);
    }

    #[test]
    fn deprecation_carries_over_to_synthesized_field() {
        let mut getter = method("getOldThing", &[], true);
        getter.deprecated = true;

        let closure = extract_one(TypeDescription {
            methods: vec![getter],
            fields: vec![],
        });

        assert!(closure.method("getOldThing").unwrap().deprecated);
        assert!(closure.field("oldThing").unwrap().deprecated);
    }

    #[test]
    fn unknown_type_yields_empty_closure_and_is_counted() {
        let mut describer = MockCapabilityDescriber::new();
        describer.expect_describe().return_const(None);

        let mut diagnostics = ModelDiagnostics::new();
        let closures = CapabilityClosureExtractor::new(&describer).extract(
            &[ExtensionSchema::new("mystery", "com.example.Unknown")],
            &mut diagnostics,
        );

        assert_eq!(closures, vec![CapabilityClosure::new("mystery")]);
        assert_eq!(diagnostics.undescribed_capability_types, 1);
    }

    #[test]
    fn property_name_lowercases_first_char_only() {
        assert_eq!(property_name("getFooBar").as_deref(), Some("fooBar"));
        assert_eq!(property_name("getURL").as_deref(), Some("uRL"));
        assert_eq!(property_name("getx").as_deref(), Some("x"));
        assert_eq!(property_name("get"), None);
        assert_eq!(property_name("isEnabled"), None);
    }
}
