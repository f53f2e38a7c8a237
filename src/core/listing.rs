use crate::errors::AppResult;
use crate::models::ProductionRecord;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use std::io::Write;

pub struct ListingLogic;

impl ListingLogic {
    /// Print every record in stored order, unfiltered.
    pub fn print<W: Write>(
        records: &[ProductionRecord],
        out: &mut W,
        separator: &str,
    ) -> AppResult<()> {
        if records.is_empty() {
            info(out, "No production records available.")?;
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::left("Date"),
                Column::left("Shift"),
                Column::right("Units"),
                Column::right("Target"),
            ],
            separator,
        );
        for r in records {
            table.add_row(r.to_fields().to_vec());
        }

        header(out, "All Production Records")?;
        write!(out, "{}", table.render())?;
        Ok(())
    }
}
