//! Rule matching: from attached markers to typed, validated requests.
//!
//! The matcher is stateless. Each per-family method answers in O(1) for
//! declarations without that family's marker (`Ok(None)`), rejects malformed,
//! duplicate, ineligible, or unresolvable markers with an error, and
//! otherwise returns the extracted request. All cross-references are resolved
//! against the catalog here, so engines can assume referenced declarations
//! exist at dispatch time.

use scrivener_foundation::{Error, Result};
use scrivener_model::{
    ArtifactFamily, Declaration, DeclarationCatalog, DeclarationKind, IntentMarker, QualifiedName,
};
use scrivener_synthesis::request::{
    AbstractionRequest, EnumExtensionsRequest, EnumeratorExtensionsRequest,
    NotificationPropertyRequest, NotificationsRequest, Request, WrapperRequest,
};

/// Stateless marker-to-request extraction.
pub struct RuleMatcher;

impl RuleMatcher {
    /// Collects every family's request for one declaration.
    ///
    /// A declaration may carry markers of several families (at most one
    /// each); each marker yields one entry, `Err` for rejected markers so a
    /// bad marker never hides a valid sibling.
    #[must_use]
    pub fn match_declaration(
        declaration: &Declaration,
        catalog: &DeclarationCatalog,
    ) -> Vec<Result<Request>> {
        if declaration.is_unmarked() {
            return Vec::new();
        }

        let mut requests = Vec::new();
        match Self::match_abstraction(declaration, catalog) {
            Ok(Some(r)) => requests.push(Ok(Request::Abstraction(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        match Self::match_enum_extensions(declaration) {
            Ok(Some(r)) => requests.push(Ok(Request::EnumExtensions(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        match Self::match_enumerator_extensions(declaration) {
            Ok(Some(r)) => requests.push(Ok(Request::EnumeratorExtensions(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        match Self::match_notifications(declaration) {
            Ok(Some(r)) => requests.push(Ok(Request::Notifications(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        match Self::match_notification_property(declaration, catalog) {
            Ok(Some(r)) => requests.push(Ok(Request::NotificationProperty(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        match Self::match_wrapper(declaration, catalog) {
            Ok(Some(r)) => requests.push(Ok(Request::Wrapper(r))),
            Ok(None) => {}
            Err(e) => requests.push(Err(e)),
        }
        requests
    }

    /// Matches the abstraction marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers, non-class declarations, empty
    /// type names, or references that do not resolve in the catalog.
    pub fn match_abstraction(
        declaration: &Declaration,
        catalog: &DeclarationCatalog,
    ) -> Result<Option<AbstractionRequest>> {
        let Some(marker) = Self::single_marker(declaration, ArtifactFamily::Abstraction)? else {
            return Ok(None);
        };
        let IntentMarker::Abstraction {
            target,
            abstraction,
            implementation,
            exclude_methods,
        } = marker
        else {
            return Ok(None);
        };

        Self::require_kind(declaration, ArtifactFamily::Abstraction, DeclarationKind::Class)?;
        for (label, name) in [
            ("target", target),
            ("abstraction", abstraction),
            ("implementation", implementation),
        ] {
            if name.is_empty() {
                return Err(Error::malformed_marker(
                    ArtifactFamily::Abstraction.token(),
                    format!("empty {label} type name"),
                ));
            }
        }

        let resolved_target = catalog
            .resolve(target)
            .ok_or_else(|| Error::unresolved_reference(target, declaration.name.as_str()))?;
        if resolved_target.kind != DeclarationKind::Class {
            return Err(Error::ineligible_declaration(
                ArtifactFamily::Abstraction.token(),
                resolved_target.kind.to_string(),
            ));
        }
        for name in [abstraction, implementation] {
            if catalog.resolve(name).is_none() {
                return Err(Error::unresolved_reference(name, declaration.name.as_str()));
            }
        }

        Ok(Some(AbstractionRequest {
            origin: declaration.name.clone(),
            target: QualifiedName::new(target),
            abstraction: QualifiedName::new(abstraction),
            implementation: QualifiedName::new(implementation),
            exclude_methods: exclude_methods.clone(),
        }))
    }

    /// Matches the reflection-style enum extension marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers or non-enum declarations.
    pub fn match_enum_extensions(
        declaration: &Declaration,
    ) -> Result<Option<EnumExtensionsRequest>> {
        if Self::single_marker(declaration, ArtifactFamily::EnumExtensions)?.is_none() {
            return Ok(None);
        }
        Self::require_kind(declaration, ArtifactFamily::EnumExtensions, DeclarationKind::Enum)?;
        Ok(Some(EnumExtensionsRequest {
            target: declaration.name.clone(),
        }))
    }

    /// Matches the fast enum extension marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers or non-enum declarations.
    pub fn match_enumerator_extensions(
        declaration: &Declaration,
    ) -> Result<Option<EnumeratorExtensionsRequest>> {
        if Self::single_marker(declaration, ArtifactFamily::EnumeratorExtensions)?.is_none() {
            return Ok(None);
        }
        Self::require_kind(
            declaration,
            ArtifactFamily::EnumeratorExtensions,
            DeclarationKind::Enum,
        )?;
        Ok(Some(EnumeratorExtensionsRequest {
            target: declaration.name.clone(),
        }))
    }

    /// Matches the class-level notifications marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers or non-class declarations.
    pub fn match_notifications(declaration: &Declaration) -> Result<Option<NotificationsRequest>> {
        let Some(marker) = Self::single_marker(declaration, ArtifactFamily::Notifications)? else {
            return Ok(None);
        };
        let IntentMarker::Notifications { is_changed } = marker else {
            return Ok(None);
        };
        Self::require_kind(declaration, ArtifactFamily::Notifications, DeclarationKind::Class)?;
        Ok(Some(NotificationsRequest {
            target: declaration.name.clone(),
            is_changed: *is_changed,
        }))
    }

    /// Matches the field-level notification marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers, non-field declarations,
    /// fields without an owning class, or parents that do not resolve to a
    /// class in the catalog.
    pub fn match_notification_property(
        declaration: &Declaration,
        catalog: &DeclarationCatalog,
    ) -> Result<Option<NotificationPropertyRequest>> {
        if Self::single_marker(declaration, ArtifactFamily::NotificationProperty)?.is_none() {
            return Ok(None);
        }
        Self::require_kind(
            declaration,
            ArtifactFamily::NotificationProperty,
            DeclarationKind::Field,
        )?;
        let Some(parent) = &declaration.parent else {
            return Err(Error::malformed_marker(
                ArtifactFamily::NotificationProperty.token(),
                "field has no owning class",
            ));
        };
        if declaration.field_signature().is_none() {
            return Err(Error::malformed_marker(
                ArtifactFamily::NotificationProperty.token(),
                "field declaration carries no field signature",
            ));
        }
        let resolved = catalog
            .resolve(parent.as_str())
            .ok_or_else(|| Error::unresolved_reference(parent.as_str(), declaration.name.as_str()))?;
        if resolved.kind != DeclarationKind::Class {
            return Err(Error::ineligible_declaration(
                ArtifactFamily::NotificationProperty.token(),
                resolved.kind.to_string(),
            ));
        }

        Ok(Some(NotificationPropertyRequest {
            field: declaration.name.clone(),
            parent: parent.clone(),
        }))
    }

    /// Matches the wrapper marker.
    ///
    /// # Errors
    /// Returns an error for duplicate markers, non-class declarations, an
    /// empty wrapped-class name, or a wrapped class that does not resolve.
    pub fn match_wrapper(
        declaration: &Declaration,
        catalog: &DeclarationCatalog,
    ) -> Result<Option<WrapperRequest>> {
        let Some(marker) = Self::single_marker(declaration, ArtifactFamily::Wrapper)? else {
            return Ok(None);
        };
        let IntentMarker::Wrapper { class_name } = marker else {
            return Ok(None);
        };

        Self::require_kind(declaration, ArtifactFamily::Wrapper, DeclarationKind::Class)?;
        if class_name.is_empty() {
            return Err(Error::malformed_marker(
                ArtifactFamily::Wrapper.token(),
                "empty wrapped class name",
            ));
        }
        let resolved = catalog
            .resolve(class_name)
            .ok_or_else(|| Error::unresolved_reference(class_name, declaration.name.as_str()))?;
        if resolved.kind != DeclarationKind::Class {
            return Err(Error::ineligible_declaration(
                ArtifactFamily::Wrapper.token(),
                resolved.kind.to_string(),
            ));
        }

        Ok(Some(WrapperRequest {
            wrapper: declaration.name.clone(),
            wrapped: QualifiedName::new(class_name),
        }))
    }

    /// Returns the family's single marker, or an error if it repeats.
    fn single_marker(
        declaration: &Declaration,
        family: ArtifactFamily,
    ) -> Result<Option<&IntentMarker>> {
        let mut found = declaration
            .markers
            .iter()
            .filter(|m| m.family() == Some(family));
        let first = found.next();
        if found.next().is_some() {
            return Err(Error::duplicate_marker(family.token()));
        }
        Ok(first)
    }

    fn require_kind(
        declaration: &Declaration,
        family: ArtifactFamily,
        expected: DeclarationKind,
    ) -> Result<()> {
        if declaration.kind == expected {
            Ok(())
        } else {
            Err(Error::ineligible_declaration(
                family.token(),
                declaration.kind.to_string(),
            ))
        }
    }
}
