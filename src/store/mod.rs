//! Template store
//!
//! Single owner of the six form templates, keyed by form type. Reads are
//! open to any caller; every mutation goes through an [`Editor`] session,
//! which checks the actor's role once for the whole authoring surface.
//!
//! Mutations follow a read-validate-write discipline: the proposed next
//! template is built and validated on a clone, then swapped in whole, so
//! a failed validation never leaves a half-edited template visible. Each
//! mutation takes the `last_modified` the caller last read and fails
//! `StaleWrite` when another editor has saved in between.

pub mod seed;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access::Actor;
use crate::error::{FormError, FormResult};
use crate::models::{FieldDraft, FormTemplate, FormType, ScoringRules};

/// Direction for a single-step field reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Keyed registry of form templates, one per form type
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: BTreeMap<FormType, FormTemplate>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_templates(seed::all())
    }
}

impl TemplateStore {
    /// Store seeded with the default six templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Vec<FormTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|t| (t.form_type, t))
                .collect(),
        }
    }

    pub fn get(&self, form_type: FormType) -> FormResult<&FormTemplate> {
        self.templates
            .get(&form_type)
            .ok_or_else(|| FormError::TemplateNotFound {
                name: form_type.name().to_string(),
            })
    }

    /// Templates in form type order
    pub fn iter(&self) -> impl Iterator<Item = &FormTemplate> {
        self.templates.values()
    }

    /// Open an authoring session; fails `RoleDenied` unless the actor's
    /// role is in the authoring set
    pub fn editor(&mut self, actor: &Actor) -> FormResult<Editor<'_>> {
        actor.require_author()?;
        Ok(Editor {
            store: self,
            actor: actor.clone(),
        })
    }
}

/// Authoring session over the store; holds the mutation surface
pub struct Editor<'a> {
    store: &'a mut TemplateStore,
    actor: Actor,
}

impl Editor<'_> {
    /// Snapshot the template for mutation, enforcing the version token
    fn begin(
        &self,
        form_type: FormType,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        let current = self.store.get(form_type)?;
        if current.last_modified != expected {
            return Err(FormError::StaleWrite {
                expected,
                actual: current.last_modified,
            });
        }
        Ok(current.clone())
    }

    /// Validate the proposed next state, stamp it, and swap it in
    fn commit(&mut self, mut next: FormTemplate) -> FormResult<FormTemplate> {
        next.validate()?;
        next.stamp(&self.actor.name);
        self.store.templates.insert(next.form_type, next.clone());
        Ok(next)
    }

    /// Add a field, or replace the field named by `editing_id` keeping
    /// its original position
    pub fn save_field(
        &mut self,
        form_type: FormType,
        draft: FieldDraft,
        editing_id: Option<&str>,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        let mut next = self.begin(form_type, expected)?;

        match editing_id {
            Some(field_id) => {
                let pos = next.position(field_id).ok_or_else(|| {
                    FormError::FieldNotFound {
                        field_id: field_id.to_string(),
                    }
                })?;
                let order = next.fields[pos].order;
                next.fields[pos] = draft.into_field(field_id, order);
            }
            None => {
                let order = next.field_count() as u32 + 1;
                let id = format!("field-{}", Uuid::new_v4());
                next.fields.push(draft.into_field(id, order));
            }
        }

        self.commit(next)
    }

    /// Remove a field and renumber the remaining orders to stay dense
    pub fn delete_field(
        &mut self,
        form_type: FormType,
        field_id: &str,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        let mut next = self.begin(form_type, expected)?;
        let pos = next
            .position(field_id)
            .ok_or_else(|| FormError::FieldNotFound {
                field_id: field_id.to_string(),
            })?;
        next.fields.remove(pos);
        next.renumber();
        self.commit(next)
    }

    /// Clone a field to the end of the template with a fresh id and a
    /// "(Copy)" label; options are deep-copied, never aliased
    pub fn duplicate_field(
        &mut self,
        form_type: FormType,
        field_id: &str,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        let mut next = self.begin(form_type, expected)?;
        let source = next
            .field(field_id)
            .ok_or_else(|| FormError::FieldNotFound {
                field_id: field_id.to_string(),
            })?;

        let mut copy = source.clone();
        copy.id = format!("field-{}", Uuid::new_v4());
        copy.label = format!("{} (Copy)", copy.label);
        copy.order = next.field_count() as u32 + 1;
        next.fields.push(copy);
        self.commit(next)
    }

    /// Swap a field with its neighbor; moving the first field up or the
    /// last field down is a no-op and does not stamp the template
    pub fn reorder_field(
        &mut self,
        form_type: FormType,
        field_id: &str,
        direction: Direction,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        let mut next = self.begin(form_type, expected)?;
        let pos = next
            .position(field_id)
            .ok_or_else(|| FormError::FieldNotFound {
                field_id: field_id.to_string(),
            })?;

        let target = match direction {
            Direction::Up if pos == 0 => return Ok(next),
            Direction::Down if pos == next.field_count() - 1 => return Ok(next),
            Direction::Up => pos - 1,
            Direction::Down => pos + 1,
        };

        next.fields.swap(pos, target);
        next.renumber();
        self.commit(next)
    }

    /// Replace the scoring thresholds; only FRAT/GRAT support scoring
    pub fn update_scoring_rules(
        &mut self,
        form_type: FormType,
        rules: ScoringRules,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        if !form_type.has_scoring() {
            return Err(FormError::ScoringNotSupported { form_type });
        }
        rules.validate()?;

        let mut next = self.begin(form_type, expected)?;
        next.scoring_rules = Some(rules);
        self.commit(next)
    }

    /// Install a whole template (import path); the incoming document is
    /// re-validated exactly like an authored one
    pub fn replace_template(
        &mut self,
        form_type: FormType,
        template: FormTemplate,
        expected: DateTime<Utc>,
    ) -> FormResult<FormTemplate> {
        if template.form_type != form_type {
            return Err(FormError::InvalidStructure(format!(
                "document is a {} template, expected {}",
                template.form_type, form_type
            )));
        }
        self.begin(form_type, expected)?;
        self.commit(template)
    }
}
