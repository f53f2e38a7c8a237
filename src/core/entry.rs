use crate::errors::{AppError, AppResult};
use crate::models::ProductionRecord;
use crate::store::RecordStore;
use crate::ui::Console;
use crate::ui::messages::{error, header, info, success};
use crate::utils::date;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, warn};

/// What happened to a draft entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Appended and written to disk.
    Saved,
    /// The user did not confirm.
    Discarded,
    /// A numeric field did not parse; nothing was kept.
    Aborted,
    /// The write failed; the in-memory append was rolled back.
    SaveFailed,
}

pub struct EntryLogic;

impl EntryLogic {
    /// Collect a new record for today's date.
    pub fn add<R: BufRead, W: Write>(
        records: &mut Vec<ProductionRecord>,
        store: &RecordStore,
        console: &mut Console<R, W>,
    ) -> AppResult<EntryOutcome> {
        Self::add_dated(records, store, console, &date::today_string())
    }

    /// Collect a new record for `date`.
    ///
    /// Only console I/O failures are returned as errors. Bad numbers, a
    /// declined confirmation and a failed save are reported to the user and
    /// surface as an [`EntryOutcome`].
    pub fn add_dated<R: BufRead, W: Write>(
        records: &mut Vec<ProductionRecord>,
        store: &RecordStore,
        console: &mut Console<R, W>,
        date: &str,
    ) -> AppResult<EntryOutcome> {
        let shift = console.ask("Enter Shift (Morning/Evening/Night): ")?;

        let draft = match Self::read_numbers(console) {
            Ok((units, target)) => ProductionRecord::new(date, shift, units, target),
            Err(AppError::InvalidNumber { field, value }) => {
                debug!(field, value = %value, "entry aborted on invalid number");
                error(
                    console.out(),
                    "Invalid input! Units and Target must be numbers.",
                )?;
                return Ok(EntryOutcome::Aborted);
            }
            Err(AppError::NumberOutOfRange { field, value }) => {
                debug!(field, value = %value, "entry aborted on out of range number");
                error(
                    console.out(),
                    format!(
                        "Invalid input! {} is out of range ({} to {}).",
                        field,
                        i64::MIN,
                        i64::MAX
                    ),
                )?;
                return Ok(EntryOutcome::Aborted);
            }
            Err(e) => return Err(e),
        };

        Self::print_draft(console.out(), &draft)?;

        let answer = console.ask("\nSave this record? (y/n): ")?;
        if !answer.eq_ignore_ascii_case("y") {
            info(console.out(), "Draft entry discarded.")?;
            return Ok(EntryOutcome::Discarded);
        }

        debug!(record = %draft, "draft confirmed");
        records.push(draft);
        if let Err(e) = store.save(records) {
            records.pop();
            warn!(error = %e, "failed to save production data");
            error(console.out(), format!("Could not save production data: {}", e))?;
            return Ok(EntryOutcome::SaveFailed);
        }

        success(console.out(), "Production data saved successfully.")?;
        Ok(EntryOutcome::Saved)
    }

    /// A bad units value stops before the target is asked for.
    fn read_numbers<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<(i64, i64)> {
        let units = console.ask("Enter Units Produced: ")?;
        let units = parse_whole_number("units produced", &units)?;

        let target = console.ask("Enter Production Target: ")?;
        let target = parse_whole_number("target", &target)?;

        Ok((units, target))
    }

    fn print_draft<W: Write>(out: &mut W, draft: &ProductionRecord) -> AppResult<()> {
        header(out, "Draft Production Entry")?;
        writeln!(out, "Date           : {}", draft.date)?;
        writeln!(out, "Shift          : {}", draft.shift)?;
        writeln!(out, "Units Produced : {}", draft.units_produced)?;
        writeln!(out, "Target         : {}", draft.target)?;
        Ok(())
    }
}

/// Integer parse tolerant of surrounding blanks.
///
/// Whole numbers that do not fit in `i64` are reported apart from text that
/// is not a number at all.
pub fn parse_whole_number(field: &'static str, raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::NumberOutOfRange {
            field,
            value: raw.to_string(),
        },
        _ => AppError::InvalidNumber {
            field,
            value: raw.to_string(),
        },
    })
}
