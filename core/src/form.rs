//! Add/edit form state machine.
//!
//! The form holds raw user input (quantity stays a string until save) and a
//! mode. In `Edit` mode the name is the lookup key and cannot change.

use crate::error::ValidationError;
use crate::types::{Ingredient, Unit, UpsertIngredient};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit { original_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    mode: FormMode,
    visible: bool,
    name: String,
    quantity: String,
    unit: Unit,
}

impl FormState {
    /// Reset to an empty add form and show it.
    pub fn open_add(&mut self) {
        *self = FormState {
            visible: true,
            ..FormState::default()
        };
    }

    /// Pre-fill from `ingredient` and show it with the name locked.
    pub fn open_edit(&mut self, ingredient: &Ingredient) {
        *self = FormState {
            mode: FormMode::Edit {
                original_name: ingredient.name.clone(),
            },
            visible: true,
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.to_string(),
            unit: ingredient.unit.clone(),
        };
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_name_read_only(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Ingredient",
            FormMode::Edit { .. } => "Edit Ingredient",
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Returns `false` and leaves the name untouched in edit mode.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.is_name_read_only() {
            return false;
        }
        self.name = name.into();
        true
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Turn the current input into an upsert payload.
    pub fn validate(&self) -> Result<UpsertIngredient, ValidationError> {
        let name = match &self.mode {
            FormMode::Add => self.name.clone(),
            FormMode::Edit { original_name } => original_name.clone(),
        };
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidInput);
        }
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidInput)?;
        Ok(UpsertIngredient {
            name,
            quantity,
            unit: self.unit.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt() -> Ingredient {
        Ingredient {
            name: "Salt".to_string(),
            quantity: 3,
            unit: Unit::Kilogram,
            last_edited: "2024-03-05T09:07:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn default_form_is_hidden_add() {
        let form = FormState::default();
        assert!(!form.is_visible());
        assert_eq!(form.mode(), &FormMode::Add);
        assert_eq!(form.unit(), &Unit::Gram);
    }

    #[test]
    fn open_add_resets_fields() {
        let mut form = FormState::default();
        form.open_edit(&salt());
        form.open_add();
        assert!(form.is_visible());
        assert_eq!(form.title(), "Add New Ingredient");
        assert_eq!(form.name(), "");
        assert_eq!(form.quantity(), "");
        assert_eq!(form.unit(), &Unit::Gram);
        assert!(!form.is_name_read_only());
    }

    #[test]
    fn open_edit_prefills_and_locks_name() {
        let mut form = FormState::default();
        form.open_edit(&salt());
        assert!(form.is_visible());
        assert_eq!(form.title(), "Edit Ingredient");
        assert_eq!(form.name(), "Salt");
        assert_eq!(form.quantity(), "3");
        assert_eq!(form.unit(), &Unit::Kilogram);
        assert!(form.is_name_read_only());
        assert!(!form.set_name("Pepper"));
        assert_eq!(form.name(), "Salt");
    }

    #[test]
    fn edit_submits_original_name() {
        let mut form = FormState::default();
        form.open_edit(&salt());
        form.set_quantity("10");
        form.set_unit(Unit::Gram);
        let payload = form.validate().unwrap();
        assert_eq!(
            payload,
            UpsertIngredient {
                name: "Salt".to_string(),
                quantity: 10,
                unit: Unit::Gram
            }
        );
    }

    #[test]
    fn validate_requires_name() {
        let mut form = FormState::default();
        form.open_add();
        form.set_quantity("5");
        assert_eq!(form.validate(), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut form = FormState::default();
        form.open_add();
        form.set_name("   ");
        form.set_quantity("5");
        assert_eq!(form.validate(), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn edit_keeps_unfamiliar_unit() {
        let mut rice = salt();
        rice.name = "Rice".to_string();
        rice.unit = Unit::Other("Cup".to_string());

        let mut form = FormState::default();
        form.open_edit(&rice);
        assert_eq!(form.unit(), &Unit::Other("Cup".to_string()));
        form.set_quantity("4");
        let payload = form.validate().unwrap();
        assert_eq!(payload.unit, Unit::Other("Cup".to_string()));
        assert_eq!(serde_json::to_value(&payload).unwrap()["unit"], "Cup");
    }

    #[test]
    fn validate_rejects_non_numeric_quantity() {
        let mut form = FormState::default();
        form.open_add();
        assert!(form.set_name("Flour"));
        for bad in ["abc", "", "1.5", "-2", "12abc"] {
            form.set_quantity(bad);
            assert_eq!(form.validate(), Err(ValidationError::InvalidInput), "{bad:?}");
        }
    }

    #[test]
    fn validate_trims_quantity() {
        let mut form = FormState::default();
        form.open_add();
        form.set_name("Flour");
        form.set_quantity(" 500 ");
        assert_eq!(form.validate().unwrap().quantity, 500);
    }

    #[test]
    fn hide_keeps_mode() {
        let mut form = FormState::default();
        form.open_edit(&salt());
        form.hide();
        assert!(!form.is_visible());
        assert!(form.is_name_read_only());
    }
}
