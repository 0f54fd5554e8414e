//! Operator menus
//!
//! A [`Session`] drives the numbered menus over a [`Prompter`]. Every prompt
//! honours the `0` sentinel by unwinding to its parent menu, and closed input
//! ends the session. Validation problems are reported and re-prompted here;
//! only storage failures escape as errors.

use std::io::{BufRead, Write};

use bookbox_core::{
    is_sentinel, parse_quantity, require_text, Answer, Catalog, CatalogError, CatalogRecord,
    CatalogStore, ConfirmEvent, ConfirmState, DeleteOutcome, FieldUpdate, IdSelection, NewRecord,
    SearchField, SelectError, SimilarityOracle,
};
use tracing::{debug, info, warn};

use crate::display::{record_block, record_list};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::tracing::prefix;

const MAIN_MENU: &str = "1 - Enter book
2 - Update book
3 - Delete book
4 - Search books
0 - Exit";

const SEARCH_MENU: &str = "Choose your search parameter:
1 - Select by id
2 - Select by title
3 - Select by author
4 - Show all books
0 - Exit to main menu";

const FIELD_MENU: &str = "Choose the field to update, or '0' for main menu:
1 - Title
2 - Author
3 - Quantity";

/// Where control goes after a sub-menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Outcome of a prompt that may be cancelled
enum Reply<T> {
    Value(T),
    Cancel,
    Closed,
}

/// Unwrap a [`Reply`], returning from the enclosing sub-menu on cancel or EOF.
macro_rules! take {
    ($reply:expr) => {
        match $reply {
            Reply::Value(value) => value,
            Reply::Cancel => return Ok(Flow::Continue),
            Reply::Closed => return Ok(Flow::Quit),
        }
    };
}

/// One interactive operator session over a catalog.
pub struct Session<'a, S, R, W> {
    catalog: &'a mut Catalog<S>,
    oracle: &'a dyn SimilarityOracle,
    io: Prompter<R, W>,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    pub fn new(
        catalog: &'a mut Catalog<S>,
        oracle: &'a dyn SimilarityOracle,
        io: Prompter<R, W>,
    ) -> Self {
        Self { catalog, oracle, io }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.io
    }

    /// Run the main menu until the operator exits or input closes.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.io.ask(MAIN_MENU)? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.update_book()?,
                "3" => self.delete_book()?,
                "4" => self.search()?,
                "0" => break,
                _ => {
                    self.io.say("Selection not recognised")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.io.say("Exiting program")?;
        Ok(())
    }

    fn add_book(&mut self) -> Result<Flow> {
        let title = take!(self.ask_text(
            "Enter the title of the book. It cannot be left blank (type 0 for main menu):",
            "title",
        )?);
        let author = take!(self.ask_text(
            "Enter the name of the author. It cannot be left blank (type 0 for main menu):",
            "author",
        )?);
        let quantity = take!(self.ask_quantity("Enter the number of copies in stock:")?);

        let record = self
            .catalog
            .insert(NewRecord::new(title, author, quantity))?;
        info!("{} inserted book {}", prefix::DB, record.id);

        self.io.say("New book inserted")?;
        self.io.say(record_block(&record))?;
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> Result<Flow> {
        let record = take!(self.select_target("update")?);

        let update = loop {
            let Some(choice) = self.io.ask(FIELD_MENU)? else {
                return Ok(Flow::Quit);
            };
            match choice.trim() {
                "1" => break FieldUpdate::Title(take!(self.ask_text("Enter the new title:", "title")?)),
                "2" => break FieldUpdate::Author(take!(self.ask_text("Enter the new author:", "author")?)),
                "3" => break FieldUpdate::Quantity(take!(self.ask_quantity("Enter the new quantity:")?)),
                "0" => return Ok(Flow::Continue),
                _ => self.io.say("Selection not recognised")?,
            }
        };

        let field = update.field_name();
        match self.catalog.update_field(record.id, update) {
            Ok(updated) => {
                info!("{} updated {} of book {}", prefix::DB, field, updated.id);
                self.io.say("Book updated")?;
                self.io.say(record_block(&updated))?;
            }
            Err(CatalogError::NotFound(id)) => {
                warn!(%id, "book disappeared before update");
                self.io.say(format!("Book {} no longer exists", id))?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        let record = take!(self.select_target("delete")?);

        match self.catalog.delete(record.id) {
            Ok(DeleteOutcome::Deleted(deleted)) => {
                info!("{} deleted book {}", prefix::DB, deleted.id);
                self.io.say("DELETE SUCCESSFUL")?;
            }
            Ok(DeleteOutcome::NothingToDelete) => {
                self.io.say(format!(
                    "Book {} no longer exists, nothing to delete",
                    record.id
                ))?;
            }
            Err(err) if err.is_fatal() => {
                self.io
                    .say(format!("Something has gone wrong: {}", err))?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        loop {
            let Some(choice) = self.io.ask(SEARCH_MENU)? else {
                return Ok(Flow::Quit);
            };
            let flow = match choice.trim() {
                "1" => self.search_by_id()?,
                "2" => self.search_by_text(SearchField::Title)?,
                "3" => self.search_by_text(SearchField::Author)?,
                "4" => {
                    let records = self.catalog.all()?;
                    self.io.say(record_list(&records))?;
                    Flow::Continue
                }
                "0" => {
                    self.io.say("Exiting search")?;
                    return Ok(Flow::Continue);
                }
                _ => {
                    self.io.say("Selection not recognised")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn search_by_id(&mut self) -> Result<Flow> {
        if let Some(bounds) = self.catalog.store().id_bounds()? {
            self.io
                .say(format!("Min ID: {}\nMax ID: {}", bounds.min, bounds.max))?;
        }

        loop {
            let Some(raw) = self
                .io
                .ask("Enter the id of the book you are searching for, or '0' to return:")?
            else {
                return Ok(Flow::Quit);
            };
            match self.catalog.select_id(&raw) {
                Ok(IdSelection::Cancel) => return Ok(Flow::Continue),
                Ok(IdSelection::Selected(id)) => {
                    match self.catalog.find_by_id(id)? {
                        Some(record) => self.io.say(record_block(&record))?,
                        None => self.io.say(format!("No book with ID {} exists", id))?,
                    }
                    return Ok(Flow::Continue);
                }
                Err(err) => self.report_selection(err)?,
            }
        }
    }

    fn search_by_text(&mut self, field: SearchField) -> Result<Flow> {
        let Some(query) = self
            .io
            .ask(format!("Search by the {} of the book, or '0' to return:", field))?
        else {
            return Ok(Flow::Quit);
        };
        if is_sentinel(&query) {
            return Ok(Flow::Continue);
        }

        match self.catalog.search_text(field, &query, self.oracle) {
            Ok(hit) => {
                debug!(resolved = %hit.resolved, score = hit.score, "search hit");
                self.io
                    .say(format!("Search returning results for: {}", hit.resolved))?;
                self.io.say(record_list(&hit.records))?;
            }
            Err(CatalogError::Resolve(err)) => {
                self.io.say(format!("Cannot search: {}", err))?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    /// Pick a record by id and have the operator confirm it.
    fn select_target(&mut self, verb: &str) -> Result<Reply<CatalogRecord>> {
        let mut state = ConfirmState::default();
        let mut shown: Option<CatalogRecord> = None;

        loop {
            state = match state {
                ConfirmState::SelectingTarget => {
                    let question =
                        format!("Enter the ID of the book you wish to {}, or '0' for main menu:", verb);
                    let Some(raw) = self.io.ask(question)? else {
                        return Ok(Reply::Closed);
                    };
                    match self.catalog.select_id(&raw) {
                        Ok(IdSelection::Cancel) => state.next(ConfirmEvent::Cancel),
                        Ok(IdSelection::Selected(id)) => match self.catalog.find_by_id(id)? {
                            Some(record) => {
                                self.io.say(record_block(&record))?;
                                shown = Some(record);
                                state.next(ConfirmEvent::TargetSelected(id))
                            }
                            None => {
                                warn!(%id, "selected id has no record");
                                self.io.say(format!("No book with ID {} exists", id))?;
                                state
                            }
                        },
                        Err(err) => {
                            self.report_selection(err)?;
                            state
                        }
                    }
                }
                ConfirmState::Confirming { .. } => {
                    let question = format!(
                        "Is this the record you wish to {}?\nType 'yes' to confirm, 'no' to change the ID number, or '0' for main menu:",
                        verb
                    );
                    let Some(raw) = self.io.ask(question)? else {
                        return Ok(Reply::Closed);
                    };
                    let answer = Answer::parse(&raw);
                    if answer == Answer::Unrecognized {
                        self.io.say("Input not recognised")?;
                    }
                    state.next(ConfirmEvent::Answer(answer))
                }
                ConfirmState::Applying { .. } => {
                    return Ok(shown.take().map_or(Reply::Cancel, Reply::Value));
                }
                ConfirmState::Cancelled => return Ok(Reply::Cancel),
            };
        }
    }

    /// Explain a rejected id; storage failures end the session.
    fn report_selection(&mut self, err: SelectError) -> Result<()> {
        match err {
            SelectError::Store(e) => return Err(e.into()),
            SelectError::OutOfBounds { min, max } => {
                warn!(%min, %max, "id out of bounds");
                self.io.say("INPUT NOT WITHIN BOUNDS")?;
                self.io.say(format!("Min ID: {}\nMax ID: {}", min, max))?;
            }
            SelectError::EmptyCatalog => {
                self.io
                    .say("The catalog is empty, enter '0' to return")?;
            }
            SelectError::Parse(_) => {
                self.io.say(format!("{}. Please enter an integer", err))?;
            }
        }
        Ok(())
    }

    /// Ask until a non-blank answer or the sentinel.
    fn ask_text(&mut self, question: &str, field: &'static str) -> Result<Reply<String>> {
        loop {
            let Some(raw) = self.io.ask(question)? else {
                return Ok(Reply::Closed);
            };
            if is_sentinel(&raw) {
                return Ok(Reply::Cancel);
            }
            match require_text(&raw, field) {
                Ok(text) => return Ok(Reply::Value(text)),
                Err(err) => self.io.say(err)?,
            }
        }
    }

    /// Ask until a whole number. `0` is a valid quantity here, not the sentinel.
    fn ask_quantity(&mut self, question: &str) -> Result<Reply<u32>> {
        loop {
            let Some(raw) = self.io.ask(question)? else {
                return Ok(Reply::Closed);
            };
            match parse_quantity(&raw) {
                Ok(quantity) => return Ok(Reply::Value(quantity)),
                Err(err) => self.io.say(format!("ENTRY FAILED: {}", err))?,
            }
        }
    }
}
