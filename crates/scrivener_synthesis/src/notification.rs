//! Change-notification accessor synthesis.
//!
//! Per eligible field `_x: T`, emits a getter and a two-phase setter: equal
//! values mutate nothing and raise nothing; a differing value raises
//! "changing" before the assignment and "changed" after it, through the
//! `notifier: PropertyNotifier` field assumed present on the class.

use scrivener_foundation::{Error, Result};
use scrivener_model::{
    DeclarationCatalog, DeclarationKind, IntentMarker, Member, QualifiedName, TypeRef,
};

use crate::request::{NotificationPropertyRequest, NotificationsRequest};
use crate::writer::{CodeWriter, rust_type, snake_ident};

/// Generates accessors for every eligible field of the marked class.
///
/// Eligible fields are private, non-static, not named `notifier`, and not
/// opted out via a field-level exclude marker. A field whose derived accessor
/// name collides with an earlier field's is skipped; the first declared field
/// owns the name.
///
/// # Errors
/// Returns an error if the target class can no longer be resolved.
pub fn generate(request: &NotificationsRequest, catalog: &DeclarationCatalog) -> Result<String> {
    let target = catalog.resolve(request.target.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.target.as_str(), request.target.as_str())
    })?;

    let mut w = CodeWriter::with_banner();
    w.open(&format!("impl {}", request.target.simple_name()));

    let mut emitted_names: Vec<String> = Vec::new();
    let mut first = true;
    for member in &target.members {
        let Member::Field {
            name,
            ty,
            is_static,
            ..
        } = member
        else {
            continue;
        };
        if *is_static || member.is_public() || name == "notifier" {
            continue;
        }
        if field_opted_out(catalog, &request.target, name) {
            continue;
        }
        let prop = snake_ident(name);
        if emitted_names.contains(&prop) {
            continue;
        }
        emitted_names.push(prop.clone());

        if !first {
            w.blank();
        }
        first = false;
        write_accessor_pair(&mut w, name, &prop, ty);
    }

    if request.is_changed {
        if !first {
            w.blank();
        }
        w.open("pub fn is_changed(&self) -> bool");
        w.line("self.notifier.is_changed()");
        w.close();
    }

    w.close();
    Ok(w.finish())
}

/// Generates the accessor pair for exactly one marked field.
///
/// # Errors
/// Returns an error if the field declaration can no longer be resolved or no
/// longer carries a field signature.
pub fn generate_property(
    request: &NotificationPropertyRequest,
    catalog: &DeclarationCatalog,
) -> Result<String> {
    let field = catalog.resolve(request.field.as_str()).ok_or_else(|| {
        Error::unresolved_reference(request.field.as_str(), request.parent.as_str())
    })?;
    let (name, ty) = field.field_signature().ok_or_else(|| {
        Error::ineligible_declaration("notification-property", field.kind.to_string())
    })?;

    let mut w = CodeWriter::with_banner();
    w.open(&format!("impl {}", request.parent.simple_name()));
    write_accessor_pair(&mut w, name, &snake_ident(name), ty);
    w.close();
    Ok(w.finish())
}

/// Returns true if a standalone field declaration of `class` named
/// `field_name` carries the exclude marker.
pub(crate) fn field_opted_out(
    catalog: &DeclarationCatalog,
    class: &QualifiedName,
    field_name: &str,
) -> bool {
    catalog.declarations().any(|d| {
        d.kind == DeclarationKind::Field
            && d.parent.as_ref() == Some(class)
            && d.name.simple_name() == field_name
            && d.markers.contains(&IntentMarker::NotificationExclude)
    })
}

fn write_accessor_pair(w: &mut CodeWriter, field: &str, prop: &str, ty: &TypeRef) {
    let rendered = rust_type(ty);

    w.open(&format!("pub fn {prop}(&self) -> &{rendered}"));
    w.line(&format!("&self.{field}"));
    w.close();
    w.blank();

    w.open(&format!("pub fn set_{prop}(&mut self, value: {rendered})"));
    w.open(&format!("if self.{field} == value"));
    w.line("return;");
    w.close();
    w.line(&format!("self.notifier.raise_changing(\"{prop}\");"));
    w.line(&format!("self.{field} = value;"));
    w.line(&format!("self.notifier.raise_changed(\"{prop}\");"));
    w.close();
}
