//! Abstraction synthesis: a trait plus a delegating adapter.
//!
//! Turns a static facade into an injectable instance contract: every public,
//! static, non-excluded method or property of the target becomes a `&self`
//! trait method, and the adapter delegates each one back to the facade's
//! associated functions. Excluded names are omitted from both outputs;
//! private members, instance members, and fields are never mirrored — the
//! adapter holds no target instance to receive them.

use scrivener_foundation::{Error, Result};
use scrivener_model::{DeclarationCatalog, Member};

use crate::request::AbstractionRequest;
use crate::writer::{CodeWriter, OverloadNames, rust_type, snake_ident};

/// Generates the trait + adapter pair for a validated request.
///
/// # Errors
/// Returns an error if the target can no longer be resolved in the catalog.
pub fn generate(request: &AbstractionRequest, catalog: &DeclarationCatalog) -> Result<String> {
    let target = catalog.resolve(request.target.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.target.as_str(), request.origin.as_str())
    })?;

    let trait_name = request.abstraction.simple_name();
    let adapter_name = request.implementation.simple_name();
    let target_name = request.target.simple_name();

    let mirrored: Vec<&Member> = target
        .members
        .iter()
        .filter(|m| m.is_public() && m.is_static())
        .filter(|m| matches!(m, Member::Method { .. } | Member::Property { .. }))
        .filter(|m| !request.exclude_methods.contains(&m.name().to_string()))
        .collect();

    let mut w = CodeWriter::with_banner();

    let mut names = OverloadNames::new();
    w.open(&format!("pub trait {trait_name}"));
    for member in &mirrored {
        match member {
            Member::Method {
                name, params, ret, ..
            } => {
                let emitted = names.emitted(name);
                w.line(&format!(
                    "fn {emitted}(&self{}){};",
                    render_params(params),
                    render_ret(ret.as_ref())
                ));
            }
            Member::Property {
                name,
                ty,
                has_setter,
                ..
            } => {
                let prop = snake_ident(name);
                w.line(&format!("fn {prop}(&self) -> {};", rust_type(ty)));
                if *has_setter {
                    w.line(&format!("fn set_{prop}(&self, value: {});", rust_type(ty)));
                }
            }
            Member::Field { .. } | Member::Variant { .. } => {}
        }
    }
    w.close();
    w.blank();

    w.line(&format!("pub struct {adapter_name};"));
    w.blank();

    let mut names = OverloadNames::new();
    w.open(&format!("impl {trait_name} for {adapter_name}"));
    for (i, member) in mirrored.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        match member {
            Member::Method {
                name, params, ret, ..
            } => {
                let emitted = names.emitted(name);
                w.open(&format!(
                    "fn {emitted}(&self{}){}",
                    render_params(params),
                    render_ret(ret.as_ref())
                ));
                let args: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
                w.line(&format!("{target_name}::{name}({})", args.join(", ")));
                w.close();
            }
            Member::Property {
                name,
                ty,
                has_setter,
                ..
            } => {
                let prop = snake_ident(name);
                w.open(&format!("fn {prop}(&self) -> {}", rust_type(ty)));
                w.line(&format!("{target_name}::{name}()"));
                w.close();
                if *has_setter {
                    w.blank();
                    w.open(&format!("fn set_{prop}(&self, value: {})", rust_type(ty)));
                    w.line(&format!("{target_name}::set_{prop}(value);"));
                    w.close();
                }
            }
            Member::Field { .. } | Member::Variant { .. } => {}
        }
    }
    w.close();

    Ok(w.finish())
}

fn render_params(params: &[scrivener_model::Param]) -> String {
    let mut out = String::new();
    for param in params {
        out.push_str(", ");
        out.push_str(&param.name);
        out.push_str(": ");
        out.push_str(&rust_type(&param.ty));
    }
    out
}

fn render_ret(ret: Option<&scrivener_model::TypeRef>) -> String {
    match ret {
        Some(ty) => format!(" -> {}", rust_type(ty)),
        None => String::new(),
    }
}
