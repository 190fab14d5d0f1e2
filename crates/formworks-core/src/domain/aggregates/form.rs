//! Form Aggregate
//!
//! Aggregate root for a form: an ordered, heterogeneous module list plus
//! form-level display settings. Assembled by the form decoder; the module
//! list is replaced wholesale on update.

use chrono::{DateTime, Utc};

use crate::domain::events::{DomainEvent, FormEvent};
use crate::domain::modules::schema::{FieldBag, FieldKind, FieldSpec, FieldValue};
use crate::domain::modules::Module;
use crate::domain::value_objects::EntityId;

/// Field table for the form-level `properties` section.
pub static PROPERTY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("background_color", FieldKind::Text),
    FieldSpec::new("font_color", FieldKind::Text),
];

/// Field table for the form-level `button` section.
pub static BUTTON_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("background_color", FieldKind::Text),
    FieldSpec::new("color", FieldKind::Text),
    FieldSpec::new("font_size", FieldKind::Text),
    FieldSpec::new("font_family", FieldKind::Text),
];

/// Form-level display properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormProperties {
    pub background_color: String,
    pub font_color: String,
}

impl FormProperties {
    pub(crate) fn from_bag(bag: &mut FieldBag) -> Option<Self> {
        Some(Self {
            background_color: bag.take_text("background_color")?,
            font_color: bag.take_text("font_color")?,
        })
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert(
            "background_color",
            FieldValue::Text(self.background_color.clone()),
        );
        bag.insert("font_color", FieldValue::Text(self.font_color.clone()));
        bag
    }
}

/// Submit-button styling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormButton {
    pub background_color: String,
    pub color: String,
    pub font_size: String,
    pub font_family: String,
}

impl FormButton {
    pub(crate) fn from_bag(bag: &mut FieldBag) -> Option<Self> {
        Some(Self {
            background_color: bag.take_text("background_color")?,
            color: bag.take_text("color")?,
            font_size: bag.take_text("font_size")?,
            font_family: bag.take_text("font_family")?,
        })
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert(
            "background_color",
            FieldValue::Text(self.background_color.clone()),
        );
        bag.insert("color", FieldValue::Text(self.color.clone()));
        bag.insert("font_size", FieldValue::Text(self.font_size.clone()));
        bag.insert("font_family", FieldValue::Text(self.font_family.clone()));
        bag
    }
}

/// Form aggregate root
#[derive(Clone, Debug)]
pub struct Form {
    id: EntityId,
    project_id: EntityId,
    name: String,
    properties: FormProperties,
    button: FormButton,
    modules: Vec<Module>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    // Domain events accumulated during operations
    events: Vec<DomainEvent>,
}

impl Form {
    /// Assemble a decoded form (factory method).
    ///
    /// Mints a fresh identifier when none is supplied; the update path
    /// supplies the identifier from the request.
    pub fn from_decoded(
        id: Option<EntityId>,
        project_id: EntityId,
        name: impl Into<String>,
        properties: FormProperties,
        button: FormButton,
        modules: Vec<Module>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.unwrap_or_else(EntityId::new),
            project_id,
            name: name.into(),
            properties,
            button,
            modules,
            created_at: now,
            updated_at: now,
            events: vec![],
        }
    }

    /// Rebuild a form from persisted state. Raises no events.
    pub fn rehydrate(
        id: EntityId,
        project_id: EntityId,
        name: impl Into<String>,
        properties: FormProperties,
        button: FormButton,
        modules: Vec<Module>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            name: name.into(),
            properties,
            button,
            modules,
            created_at,
            updated_at,
            events: vec![],
        }
    }

    // =========================================================================
    // Getters (immutable access to internal state)
    // =========================================================================

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn project_id(&self) -> &EntityId { &self.project_id }
    pub fn name(&self) -> &str { &self.name }
    pub fn properties(&self) -> &FormProperties { &self.properties }
    pub fn button(&self) -> &FormButton { &self.button }
    pub fn modules(&self) -> &[Module] { &self.modules }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    // =========================================================================
    // Business Operations
    // =========================================================================

    /// Record that this form was newly created.
    pub fn mark_created(&mut self) {
        self.raise_event(DomainEvent::Form(FormEvent::Created {
            form_id: self.id.clone(),
            project_id: self.project_id.clone(),
            name: self.name.clone(),
            module_count: self.modules.len(),
            created_at: self.created_at,
        }));
    }

    /// Record that this form replaced a stored revision.
    pub fn mark_updated(&mut self) {
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::Updated {
            form_id: self.id.clone(),
            module_count: self.modules.len(),
            updated_at: self.updated_at,
        }));
    }

    /// Adopt the creation timestamp of the revision this form replaces.
    pub fn inherit_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    /// Get and clear accumulated domain events
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::modules::{ModuleProperties, ShortTextProperties};

    fn short_text_module(label: &str) -> Module {
        Module::new(
            label,
            ModuleProperties::ShortText(ShortTextProperties {
                label: label.to_string(),
                sublabel: String::new(),
                tooltip: String::new(),
                required: true,
                placeholder: String::new(),
                suffix: String::new(),
                width_type: false,
                width: 100,
                validation: String::new(),
            }),
        )
    }

    fn sample_form(id: Option<EntityId>) -> Form {
        Form::from_decoded(
            id,
            EntityId::from_string("project-1"),
            "Signup form",
            FormProperties::default(),
            FormButton::default(),
            vec![short_text_module("q1"), short_text_module("q2")],
        )
    }

    #[test]
    fn test_from_decoded_mints_id_when_absent() {
        let form = sample_form(None);
        assert!(!form.id().as_str().is_empty());
        assert_eq!(form.modules().len(), 2);
    }

    #[test]
    fn test_from_decoded_keeps_supplied_id() {
        let form = sample_form(Some(EntityId::from_string("form-7")));
        assert_eq!(form.id().as_str(), "form-7");
    }

    #[test]
    fn test_mark_created_raises_event() {
        let mut form = sample_form(None);
        form.mark_created();

        let events = form.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            DomainEvent::Form(FormEvent::Created { module_count: 2, .. })
        ));
        assert!(form.take_events().is_empty());
    }

    #[test]
    fn test_mark_updated_touches_timestamp() {
        let mut form = sample_form(None);
        let before = form.updated_at();
        form.mark_updated();

        assert!(form.updated_at() >= before);
        assert!(matches!(
            form.take_events()[0],
            DomainEvent::Form(FormEvent::Updated { .. })
        ));
    }

    #[test]
    fn test_rehydrate_keeps_timestamps() {
        let created = Utc::now();
        let form = Form::rehydrate(
            EntityId::from_string("form-1"),
            EntityId::from_string("project-1"),
            "Stored form",
            FormProperties::default(),
            FormButton::default(),
            vec![],
            created,
            created,
        );

        assert_eq!(form.created_at(), created);
        assert!(form.modules().is_empty());
    }
}
