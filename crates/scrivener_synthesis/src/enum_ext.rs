//! Reflection-style enum extension synthesis.
//!
//! This family deliberately stays small: one `names` helper returning the
//! declared variant names in declaration order. The instance receiver only
//! selects the enum type at the call site. The fast, table-backed surface
//! lives in [`crate::enumerator_ext`].

use scrivener_foundation::{Error, Result};
use scrivener_model::{DeclarationCatalog, Member};

use crate::request::EnumExtensionsRequest;
use crate::writer::CodeWriter;

/// Generates the minimal helper for a validated request.
///
/// # Errors
/// Returns an error if the target enum can no longer be resolved.
pub fn generate(request: &EnumExtensionsRequest, catalog: &DeclarationCatalog) -> Result<String> {
    let target = catalog.resolve(request.target.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.target.as_str(), request.target.as_str())
    })?;

    let names: Vec<&str> = target
        .members
        .iter()
        .filter_map(|m| match m {
            Member::Variant { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();

    let mut w = CodeWriter::with_banner();
    w.open(&format!("impl {}", request.target.simple_name()));
    w.open("pub fn names(&self) -> &'static [&'static str]");
    w.line(&format!("&[{}]", quoted.join(", ")));
    w.close();
    w.close();

    Ok(w.finish())
}
