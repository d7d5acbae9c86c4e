//! Delegating wrapper synthesis.
//!
//! Gives a concrete (often sealed or external) class a substitutable surface
//! without inheritance: the wrapper owns an instance and forwards every
//! public instance member unchanged.

use scrivener_foundation::{Error, Result};
use scrivener_model::{DeclarationCatalog, Member};

use crate::request::WrapperRequest;
use crate::writer::{CodeWriter, OverloadNames, rust_type, snake_ident};

/// Generates the wrapper struct and its delegating members.
///
/// # Errors
/// Returns an error if the wrapped class can no longer be resolved.
pub fn generate(request: &WrapperRequest, catalog: &DeclarationCatalog) -> Result<String> {
    let wrapped = catalog.resolve(request.wrapped.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.wrapped.as_str(), request.wrapper.as_str())
    })?;

    let wrapper_name = request.wrapper.simple_name();
    let wrapped_name = request.wrapped.simple_name();

    let mut w = CodeWriter::with_banner();
    w.open(&format!("pub struct {wrapper_name}"));
    w.line(&format!("inner: {wrapped_name},"));
    w.close();
    w.blank();

    w.open(&format!("impl {wrapper_name}"));
    w.open(&format!("pub fn new(inner: {wrapped_name}) -> Self"));
    w.line("Self { inner }");
    w.close();

    let mut names = OverloadNames::new();
    for member in &wrapped.members {
        if !member.is_public() || member.is_static() {
            continue;
        }
        match member {
            Member::Method {
                name, params, ret, ..
            } => {
                let emitted = names.emitted(name);
                let rendered_params: String = params
                    .iter()
                    .map(|p| format!(", {}: {}", p.name, rust_type(&p.ty)))
                    .collect();
                let rendered_ret = match ret {
                    Some(ty) => format!(" -> {}", rust_type(ty)),
                    None => String::new(),
                };
                let args: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();

                w.blank();
                w.open(&format!("pub fn {emitted}(&self{rendered_params}){rendered_ret}"));
                w.line(&format!("self.inner.{name}({})", args.join(", ")));
                w.close();
            }
            Member::Property {
                name,
                ty,
                has_setter,
                ..
            } => {
                let prop = snake_ident(name);
                let rendered = rust_type(ty);

                w.blank();
                w.open(&format!("pub fn {prop}(&self) -> {rendered}"));
                w.line(&format!("self.inner.{name}()"));
                w.close();
                if *has_setter {
                    w.blank();
                    w.open(&format!("pub fn set_{prop}(&mut self, value: {rendered})"));
                    w.line(&format!("self.inner.set_{prop}(value);"));
                    w.close();
                }
            }
            Member::Field { .. } | Member::Variant { .. } => {}
        }
    }
    w.close();

    Ok(w.finish())
}
