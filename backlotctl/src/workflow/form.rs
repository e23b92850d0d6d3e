use std::collections::BTreeMap;

use backlot_model::{MediaAttachment, MediaCategory};

use crate::workflow::validation;

/// Format rule applied to a text field on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    FreeText,
    Email,
    Phone,
    WireDate,
    OneOf(&'static [&'static str]),
}

/// Declarative description of one text field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            rule: FieldRule::FreeText,
        }
    }

    pub const fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Declarative description of one binary attachment slot.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentSlot {
    pub name: &'static str,
    pub label: &'static str,
    pub category: MediaCategory,
}

#[derive(Debug, Clone)]
struct SlotState {
    spec: AttachmentSlot,
    staged: Option<MediaAttachment>,
    error: Option<String>,
}

/// Transient, client-only draft of a create form.
///
/// Holds uncommitted field values and a per-field validation-error
/// map, recomputed synchronously on every change. Submission is gated
/// on the whole draft being valid; the draft is discarded on
/// submit-success or explicit clear and never persisted.
#[derive(Debug, Clone)]
pub struct FormDraft {
    fields: Vec<FieldSpec>,
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
    slots: Vec<SlotState>,
}

impl FormDraft {
    pub fn new(fields: Vec<FieldSpec>, slots: Vec<AttachmentSlot>) -> Self {
        Self {
            fields,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            slots: slots
                .into_iter()
                .map(|spec| SlotState {
                    spec,
                    staged: None,
                    error: None,
                })
                .collect(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn attachment_slots(&self) -> impl Iterator<Item = &AttachmentSlot> {
        self.slots.iter().map(|slot| &slot.spec)
    }

    /// Store a field value and revalidate that field immediately.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let Some(spec) = self.fields.iter().find(|f| f.name == name).copied() else {
            return;
        };
        let value = value.into();
        match Self::validate(spec, &value) {
            Some(message) => {
                self.errors.insert(spec.name, message);
            }
            None => {
                self.errors.remove(spec.name);
            }
        }
        self.values.insert(spec.name, value);
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Stage a binary attachment, rejecting MIME mismatches with a
    /// field-local error instead of staging them.
    pub fn stage_attachment(
        &mut self,
        name: &str,
        attachment: MediaAttachment,
    ) -> Result<(), String> {
        let Some(slot) = self.slots.iter_mut().find(|s| s.spec.name == name) else {
            return Err(format!("no attachment slot named `{name}`"));
        };
        if !slot.spec.category.accepts(&attachment.mime) {
            let message = format!("Please select a valid {} file.", slot.spec.category);
            slot.error = Some(message.clone());
            return Err(message);
        }
        slot.staged = Some(attachment);
        slot.error = None;
        Ok(())
    }

    pub fn clear_attachment(&mut self, name: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.spec.name == name) {
            slot.staged = None;
            slot.error = None;
        }
    }

    pub fn attachment(&self, name: &str) -> Option<&MediaAttachment> {
        self.slots
            .iter()
            .find(|s| s.spec.name == name)
            .and_then(|s| s.staged.as_ref())
    }

    pub fn attachment_error(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.spec.name == name)
            .and_then(|s| s.error.as_deref())
    }

    /// Whether submission may be attempted: every field passes its
    /// rules (untouched required fields count as failing) and every
    /// attachment slot is staged without error.
    pub fn is_submittable(&self) -> bool {
        self.blocking_errors().is_empty()
    }

    /// All problems currently blocking submission, labeled for display.
    pub fn blocking_errors(&self) -> Vec<(&'static str, String)> {
        let mut blocking = Vec::new();
        for spec in &self.fields {
            if let Some(message) = Self::validate(*spec, self.value(spec.name)) {
                blocking.push((spec.label, message));
            }
        }
        for slot in &self.slots {
            if let Some(message) = &slot.error {
                blocking.push((slot.spec.label, message.clone()));
            } else if slot.staged.is_none() {
                blocking.push((slot.spec.label, format!("{} is required.", slot.spec.label)));
            }
        }
        blocking
    }

    /// Return every field and attachment to its initial empty value.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        for slot in &mut self.slots {
            slot.staged = None;
            slot.error = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
            && self.slots.iter().all(|s| s.staged.is_none())
    }

    fn validate(spec: FieldSpec, value: &str) -> Option<String> {
        if let Some(message) = validation::require(spec.label, value) {
            return spec.required.then_some(message);
        }
        match spec.rule {
            FieldRule::FreeText => None,
            FieldRule::Email => validation::check_email(value),
            FieldRule::Phone => validation::check_phone(value),
            FieldRule::WireDate => validation::check_wire_date(value),
            FieldRule::OneOf(options) => validation::check_one_of(value, options),
        }
    }
}
