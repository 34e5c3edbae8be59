//! Gating of "create X" affordances.
//!
//! An affordance can be disabled for two unrelated reasons: the capability
//! behind it is not available yet, or the form it submits is incomplete.
//! [`Disablement`] keeps the two apart so a host can explain each one
//! differently.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{constants::labels, form::Field, labels::LabelLookup};

/// Why an affordance is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disablement {
    /// The feature behind the affordance is not available. `explanation` is
    /// a label key for the hint shown next to it.
    CapabilityUnavailable { explanation: &'static str },
    /// The form is missing values for these visible required fields.
    Incomplete { missing: Vec<Field> },
}

impl Disablement {
    /// Human readable reason, resolved through `labels`.
    pub fn describe(&self, labels: &dyn LabelLookup) -> String {
        match self {
            Self::CapabilityUnavailable { explanation } => labels.label(explanation),
            Self::Incomplete { missing } => {
                let fields: Vec<String> = missing
                    .iter()
                    .map(|field| labels.label(field.label_key()))
                    .collect();
                format!("Missing: {}", fields.join(", "))
            }
        }
    }
}

/// A predicate deciding whether something may be created, plus the hint to
/// show when it may not.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capability {
    available: bool,
    explanation: &'static str,
}

impl Capability {
    pub fn new(available: bool, explanation: &'static str) -> Self {
        Self {
            available,
            explanation,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn disablement(&self) -> Option<Disablement> {
        (!self.available).then_some(Disablement::CapabilityUnavailable {
            explanation: self.explanation,
        })
    }
}

/// A button-like "create X" affordance gated by a [`Capability`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAffordance<T> {
    label: &'static str,
    target: T,
    capability: Capability,
}

impl<T: Clone> CreateAffordance<T> {
    pub fn new(label: &'static str, target: T, capability: Capability) -> Self {
        Self {
            label,
            target,
            capability,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.capability.is_available()
    }

    pub fn disablement(&self) -> Option<Disablement> {
        self.capability.disablement()
    }

    /// Returns what to create, or `None` if the affordance is gated.
    /// Activating a gated affordance does nothing.
    pub fn activate(&self) -> Option<T> {
        self.is_enabled().then(|| self.target.clone())
    }
}

/// The kinds of authorization permission a client can own.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PermissionType {
    Resource,
    Scope,
}

impl PermissionType {
    pub fn create_label(self) -> &'static str {
        match self {
            Self::Resource => "createResourceBasedPermission",
            Self::Scope => "createScopeBasedPermission",
        }
    }

    pub fn unavailable_hint(self) -> &'static str {
        match self {
            Self::Resource => "noResourceCreateHint",
            Self::Scope => "noScopeCreateHint",
        }
    }
}

/// What a client with no authorization permissions shows: a title, some
/// instructions and one create affordance per [`PermissionType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPermissionsState {
    pub client_id: String,
    pub title: &'static str,
    pub instructions: &'static str,
    pub affordances: Vec<CreateAffordance<PermissionType>>,
}

impl EmptyPermissionsState {
    /// `resource_available` and `scope_available` say whether the client has
    /// anything a permission of that type could refer to.
    pub fn new(
        client_id: impl Into<String>,
        resource_available: bool,
        scope_available: bool,
    ) -> Self {
        let affordance = |permission_type: PermissionType, available: bool| {
            CreateAffordance::new(
                permission_type.create_label(),
                permission_type,
                Capability::new(available, permission_type.unavailable_hint()),
            )
        };

        Self {
            client_id: client_id.into(),
            title: labels::EMPTY_PERMISSIONS,
            instructions: labels::EMPTY_PERMISSION_INSTRUCTIONS,
            affordances: vec![
                affordance(PermissionType::Resource, resource_available),
                affordance(PermissionType::Scope, scope_available),
            ],
        }
    }
}
