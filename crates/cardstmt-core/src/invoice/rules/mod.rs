//! Rule-based extractors for Apple Card statement sections.
//!
//! Each extractor locates an anchor phrase in the token stream of a page and
//! reads its values at fixed offsets from it.

pub mod amounts;
pub mod balances;
pub mod cash_back;
pub mod customer;
pub mod dates;
pub mod installments;
pub mod interest;
pub mod minimum_payment;
pub mod page;
pub mod patterns;
pub mod payments;
pub mod period;
pub mod sequence;
pub mod transactions;

pub use amounts::{to_currency, to_percent};
pub use balances::extract_balances;
pub use cash_back::extract_cash_back;
pub use customer::extract_customer;
pub use dates::{infer_start_year, is_date, parse_date, DateFormat, UndatedYear};
pub use installments::extract_installments;
pub use interest::extract_interest;
pub use minimum_payment::extract_minimum_payment;
pub use page::Page;
pub use payments::extract_payments;
pub use period::{extract_statement_dates, StatementDates};
pub use sequence::{find_sequence, Matcher, Pattern};
pub use transactions::extract_transactions;
