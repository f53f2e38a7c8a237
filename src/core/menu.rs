//! Interactive main loop.
//!
//! The menu owns the record collection for the whole session and lends it to
//! each action. Only [`EntryLogic`] ever mutates it.

use crate::core::entry::EntryLogic;
use crate::core::listing::ListingLogic;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::ProductionRecord;
use crate::store::RecordStore;
use crate::ui::Console;
use crate::ui::messages::{error, header};
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Report,
    Display,
    Exit,
}

impl MenuChoice {
    /// Exact match on `"1"`..`"4"`; surrounding blanks are not accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::Report),
            "3" => Some(Self::Display),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a> {
    store: &'a RecordStore,
    records: Vec<ProductionRecord>,
    separator: String,
    state: MenuState,
}

impl<'a> Menu<'a> {
    /// Load the data file once and start in [`MenuState::Running`].
    pub fn open(store: &'a RecordStore, separator: &str) -> AppResult<Self> {
        let records = store.load()?;
        Ok(Self {
            store,
            records,
            separator: separator.to_string(),
            state: MenuState::Running,
        })
    }

    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run until the user picks Exit or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<()> {
        info!(records = self.records.len(), "menu started");

        while self.state == MenuState::Running {
            self.print_options(console.out())?;

            let choice = match console.prompt("Enter your choice: ")? {
                Some(line) => MenuChoice::parse(&line).ok_or(line),
                None => {
                    debug!("input closed, leaving menu");
                    Ok(MenuChoice::Exit)
                }
            };

            match choice {
                Ok(choice) => self.dispatch(choice, console)?,
                Err(raw) => {
                    debug!(input = %raw, "unrecognized menu choice");
                    error(console.out(), "Invalid choice. Please try again.")?;
                }
            }
        }

        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        debug!(?choice, "menu dispatch");
        match choice {
            MenuChoice::Add => {
                let outcome = EntryLogic::add(&mut self.records, self.store, console)?;
                debug!(?outcome, "entry finished");
            }
            MenuChoice::Report => {
                ReportLogic::prompt_and_print(&self.records, console, &self.separator)?;
            }
            MenuChoice::Display => {
                ListingLogic::print(&self.records, console.out(), &self.separator)?;
            }
            MenuChoice::Exit => {
                writeln!(console.out(), "Exiting system...")?;
                self.state = MenuState::Exiting;
            }
        }
        Ok(())
    }

    fn print_options<W: Write>(&self, out: &mut W) -> AppResult<()> {
        header(out, "Manufacturing Production Tracking System")?;
        writeln!(out, "1. Add Shift Output")?;
        writeln!(out, "2. Generate Daily Production Report")?;
        writeln!(out, "3. Display All Production Records")?;
        writeln!(out, "4. Exit")?;
        Ok(())
    }
}
