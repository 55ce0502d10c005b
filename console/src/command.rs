//! Console commands and their mapping onto core events.

use inventory_core::{Event, Unit};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list                 reload the ingredient table
  select <name>        check a row
  unselect <name>      uncheck a row
  add                  open the add form
  edit                 open the edit form for the one checked row
  delete               delete every checked row
  name <text>          set the form name (add mode only)
  qty <number>         set the form quantity
  unit <unit>          set the form unit (Gram, Kilogram, Milliliter, Liter, Piece)
  save                 submit the form
  cancel               close the form
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Unit(#[from] inventory_core::types::UnknownUnit),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |name: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" | "refresh" => Command::Event(Event::Refresh),
        "select" => Command::Event(Event::ToggleRow {
            name: arg("select")?,
            checked: true,
        }),
        "unselect" => Command::Event(Event::ToggleRow {
            name: arg("unselect")?,
            checked: false,
        }),
        "add" => Command::Event(Event::ClickAdd),
        "edit" => Command::Event(Event::ClickEdit),
        "delete" | "rm" => Command::Event(Event::ClickDelete),
        "name" => Command::Event(Event::EditName(arg("name")?)),
        // An empty quantity is a valid edit; save rejects it.
        "qty" | "quantity" => Command::Event(Event::EditQuantity(rest.to_string())),
        "unit" => Command::Event(Event::EditUnit(arg("unit")?.parse::<Unit>()?)),
        "save" => Command::Event(Event::ClickSave),
        "cancel" => Command::Event(Event::ClickCancel),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
