//! Fast enum extension synthesis.
//!
//! Because the variant set is known at generation time, every helper bakes in
//! as a static slice or match table: O(1) or O(n) in declared-variant count
//! with no reflection. `is_defined_fast` and `to_string_fast` take the
//! underlying `i64` value rather than an instance receiver; Rust enums are
//! closed, so the undefined-value domain only exists before conversion.

use scrivener_foundation::{Error, Result};
use scrivener_model::{Declaration, DeclarationCatalog, Member};

use crate::request::EnumeratorExtensionsRequest;
use crate::writer::CodeWriter;

/// Ordered name/value pairs for one enum, with the lookups the generated
/// helper text is built from.
///
/// Alias values (two variants sharing one underlying value) keep the first
/// name in declaration order for display, matching one match arm per value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumTable {
    entries: Vec<(String, i64)>,
}

impl EnumTable {
    /// Builds a table from an enum declaration's variants in declaration order.
    #[must_use]
    pub fn from_declaration(declaration: &Declaration) -> Self {
        let entries = declaration
            .members
            .iter()
            .filter_map(|m| match m {
                Member::Variant { name, value } => Some((name.clone(), *value)),
                _ => None,
            })
            .collect();
        Self { entries }
    }

    /// Returns declared names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns declared values in declaration order.
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Returns the unique values in declaration order, first name winning.
    #[must_use]
    pub fn distinct(&self) -> Vec<(&str, i64)> {
        let mut seen = Vec::new();
        let mut out = Vec::new();
        for (name, value) in &self.entries {
            if !seen.contains(value) {
                seen.push(*value);
                out.push((name.as_str(), *value));
            }
        }
        out
    }

    /// True iff `value` equals one declared variant's underlying value.
    #[must_use]
    pub fn contains_value(&self, value: i64) -> bool {
        self.entries.iter().any(|(_, v)| *v == value)
    }

    /// True iff `name` exactly matches one declared identifier.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The declared name for `value`, or its decimal rendering. Total over
    /// the full `i64` domain.
    #[must_use]
    pub fn display(&self, value: i64) -> String {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map_or_else(|| value.to_string(), |(n, _)| n.clone())
    }

    /// Returns true if the enum declares no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generates the full fast helper surface for a validated request.
///
/// # Errors
/// Returns an error if the target enum can no longer be resolved.
pub fn generate(
    request: &EnumeratorExtensionsRequest,
    catalog: &DeclarationCatalog,
) -> Result<String> {
    let target = catalog.resolve(request.target.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.target.as_str(), request.target.as_str())
    })?;
    let table = EnumTable::from_declaration(target);
    let enum_name = request.target.simple_name();

    let quoted: Vec<String> = table.names().iter().map(|n| format!("\"{n}\"")).collect();
    let variants: Vec<String> = table
        .names()
        .iter()
        .map(|n| format!("Self::{n}"))
        .collect();

    let mut w = CodeWriter::with_banner();
    w.open(&format!("impl {enum_name}"));

    w.open("pub fn names() -> &'static [&'static str]");
    w.line(&format!("&[{}]", quoted.join(", ")));
    w.close();
    w.blank();

    w.open("pub fn names_fast(&self) -> &'static [&'static str]");
    w.line("Self::names()");
    w.close();
    w.blank();

    w.open("pub fn values_fast(&self) -> &'static [Self]");
    w.line(&format!("&[{}]", variants.join(", ")));
    w.close();
    w.blank();

    if table.is_empty() {
        w.open("pub fn is_defined_fast(_value: i64) -> bool");
        w.line("false");
        w.close();
        w.blank();

        w.open("pub fn is_name_defined_fast(_name: &str) -> bool");
        w.line("false");
        w.close();
        w.blank();

        w.open("pub fn to_string_fast(value: i64) -> String");
        w.line("value.to_string()");
        w.close();
    } else {
        let value_arms: Vec<String> = table
            .distinct()
            .iter()
            .map(|(_, v)| v.to_string())
            .collect();
        w.open("pub fn is_defined_fast(value: i64) -> bool");
        w.line(&format!("matches!(value, {})", value_arms.join(" | ")));
        w.close();
        w.blank();

        w.open("pub fn is_name_defined_fast(name: &str) -> bool");
        w.line(&format!("matches!(name, {})", quoted.join(" | ")));
        w.close();
        w.blank();

        w.open("pub fn to_string_fast(value: i64) -> String");
        w.open("match value");
        for (name, value) in table.distinct() {
            w.line(&format!("{value} => \"{name}\".to_string(),"));
        }
        w.line("other => other.to_string(),");
        w.close();
        w.close();
    }

    w.close();
    Ok(w.finish())
}
