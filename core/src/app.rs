//! Application state and event wiring.
//!
//! # Design
//! `AppState` is the single source of truth for the view: the latest list
//! returned by the server, the checked rows and the form. Handlers read from
//! it instead of from whatever the host is displaying. Every successful
//! mutation ends with a full refresh, so the table never drifts from the
//! server for longer than one handler.
//!
//! Network I/O and user dialogs go through the [`Transport`] and [`Dialogs`]
//! seams; the host provides both.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::client::InventoryClient;
use crate::error::{ApiError, ValidationError};
use crate::form::FormState;
use crate::http::Transport;
use crate::render::{render_rows, TableRow};
use crate::types::{Ingredient, Unit};

/// Blocking user dialogs provided by the host.
pub trait Dialogs {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

impl<D: Dialogs + ?Sized> Dialogs for &mut D {
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Refresh,
    ToggleRow { name: String, checked: bool },
    ClickAdd,
    ClickEdit,
    ClickDelete,
    ClickSave,
    ClickCancel,
    EditName(String),
    EditQuantity(String),
    EditUnit(Unit),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub ingredients: Vec<Ingredient>,
    pub selected: BTreeSet<String>,
    pub form: FormState,
}

pub struct InventoryApp<T, D> {
    client: InventoryClient,
    transport: T,
    dialogs: D,
    state: AppState,
}

impl<T: Transport, D: Dialogs> InventoryApp<T, D> {
    pub fn new(client: InventoryClient, transport: T, dialogs: D) -> Self {
        Self {
            client,
            transport,
            dialogs,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn rows(&self) -> Vec<TableRow> {
        render_rows(&self.state.ingredients, &self.state.selected)
    }

    pub fn dispatch(&mut self, event: Event) -> Result<(), ApiError> {
        match event {
            Event::Refresh => self.refresh(),
            Event::ToggleRow { name, checked } => {
                self.toggle_row(&name, checked);
                Ok(())
            }
            Event::ClickAdd => {
                self.click_add();
                Ok(())
            }
            Event::ClickEdit => {
                self.click_edit();
                Ok(())
            }
            Event::ClickDelete => self.click_delete(),
            Event::ClickSave => self.click_save(),
            Event::ClickCancel => {
                self.click_cancel();
                Ok(())
            }
            Event::EditName(name) => {
                if !self.state.form.set_name(name) {
                    debug!("name edit ignored in edit mode");
                    self.dialogs.alert(&ValidationError::ReadOnlyName.to_string());
                }
                Ok(())
            }
            Event::EditQuantity(quantity) => {
                self.state.form.set_quantity(quantity);
                Ok(())
            }
            Event::EditUnit(unit) => {
                self.state.form.set_unit(unit);
                Ok(())
            }
        }
    }

    /// Fetch the list and replace the table. Selection does not survive.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_ingredients();
        let response = self.transport.execute(request)?;
        let ingredients = self.client.parse_list_ingredients(response)?;
        debug!(count = ingredients.len(), "refreshed ingredient list");
        self.state.ingredients = ingredients;
        self.state.selected.clear();
        Ok(())
    }

    /// Check or uncheck a row. Returns `false` if no row has that name.
    pub fn toggle_row(&mut self, name: &str, checked: bool) -> bool {
        if !self.state.ingredients.iter().any(|i| i.name == name) {
            return false;
        }
        if checked {
            self.state.selected.insert(name.to_string());
        } else {
            self.state.selected.remove(name);
        }
        true
    }

    pub fn click_add(&mut self) {
        self.state.form.open_add();
    }

    pub fn click_edit(&mut self) {
        let names = self.selected_names();
        let name = match names.as_slice() {
            [one] => one,
            [] => {
                let e = ValidationError::NoSelection("an ingredient to edit");
                return self.dialogs.alert(&e.to_string());
            }
            _ => return self.dialogs.alert(&ValidationError::MultipleSelection.to_string()),
        };
        if let Some(ingredient) = self.state.ingredients.iter().find(|i| &i.name == name) {
            self.state.form.open_edit(ingredient);
        }
    }

    /// Batch delete the checked rows after confirmation.
    ///
    /// The list is refreshed whether or not the delete succeeded; a delete
    /// failure is still returned to the caller afterwards.
    pub fn click_delete(&mut self) -> Result<(), ApiError> {
        let names = self.selected_names();
        if names.is_empty() {
            self.dialogs
                .alert(&ValidationError::NoSelection("ingredients to delete").to_string());
            return Ok(());
        }
        let prompt = format!("Are you sure you want to delete {} ingredient(s)?", names.len());
        if !self.dialogs.confirm(&prompt) {
            return Ok(());
        }

        let deleted = self.delete(&names);
        let refreshed = self.refresh();
        deleted.and(refreshed)
    }

    /// Validate and submit the form. On failure the form stays open.
    pub fn click_save(&mut self) -> Result<(), ApiError> {
        let payload = match self.state.form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.dialogs.alert(&e.to_string());
                return Ok(());
            }
        };

        let request = self.client.build_upsert_ingredient(&payload)?;
        let response = self.transport.execute(request)?;
        self.client.parse_upsert_ingredient(response)?;
        info!(name = %payload.name, "ingredient saved");

        self.state.form.hide();
        self.refresh()
    }

    pub fn click_cancel(&mut self) {
        self.state.form.hide();
    }

    fn delete(&mut self, names: &[String]) -> Result<(), ApiError> {
        let request = self.client.build_delete_ingredients(names)?;
        let response = self.transport.execute(request)?;
        self.client.parse_delete_ingredients(response)?;
        info!(count = names.len(), "ingredients deleted");
        Ok(())
    }

    /// Checked names in table order.
    fn selected_names(&self) -> Vec<String> {
        self.state
            .ingredients
            .iter()
            .filter(|i| self.state.selected.contains(&i.name))
            .map(|i| i.name.clone())
            .collect()
    }
}
