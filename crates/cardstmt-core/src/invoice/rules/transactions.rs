//! Transactions table.

use tracing::{debug, trace};

use super::dates::DateFormat;
use super::page::Page;
use super::patterns::{PAGE_FOOTER, TRANSACTIONS_END, TRANSACTIONS_HEADER};
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::Transaction;

/// Records are `date, description, percent, daily cash, amount`.
const RECORD_WIDTH: usize = 5;

/// Extract transactions from every page that carries a transactions table.
///
/// A table ends at `Total Daily Cash this month` or, on pages where the
/// table continues onto the next page, at the `Page n /m` footer.
///
/// A description that wraps onto a second line shows up as an extra token
/// where the percentage is expected. It is joined onto the description and
/// the rest of that record is read one token later.
///
/// A statement without purchases has no table and yields no transactions.
pub fn extract_transactions(pages: &[Vec<String>]) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();
    let mut tables = 0;

    for (number, tokens) in pages.iter().enumerate() {
        let page = Page::new(tokens, Section::Transactions);

        let Some(header) = page.find(&TRANSACTIONS_HEADER) else {
            continue;
        };
        tables += 1;

        let end = page.find_any(&[&TRANSACTIONS_END, &PAGE_FOOTER]).ok_or_else(|| {
            ExtractionError::incomplete(
                Section::Transactions,
                format!("transactions table on page {} has no end marker", number + 1),
            )
        })?;

        let mut index = header + TRANSACTIONS_HEADER.len();
        while index < end {
            let (transaction, width) = read_transaction(&page, index)?;
            trace!(
                "Transaction {} {} ({} tokens)",
                transaction.date, transaction.amount, width
            );
            transactions.push(transaction);
            index += width;
        }
    }

    debug!("Found {} transactions in {} tables", transactions.len(), tables);
    Ok(transactions)
}

/// Read one record at `index`, returning it with the number of tokens used.
fn read_transaction(page: &Page<'_>, index: usize) -> Result<(Transaction, usize)> {
    let description = page.token(index + 1)?;
    let second_line = page.token(index + 2)?;

    let (description, shift) = if second_line.ends_with('%') {
        (description.to_string(), 0)
    } else {
        (format!("{} {}", description, second_line), 1)
    };

    let transaction = Transaction {
        date: page.date(index, DateFormat::MonthDayYear)?,
        description,
        cash_back_percent: page.percent(index + 2 + shift)?,
        cash_back_amount: page.currency(index + 3 + shift)?,
        amount: page.currency(index + 4 + shift)?,
    };

    Ok((transaction, RECORD_WIDTH + shift))
}
