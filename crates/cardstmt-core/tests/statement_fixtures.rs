use cardstmt_core::invoice::rules::{
    extract_balances, extract_cash_back, extract_customer, extract_installments,
    extract_interest, extract_minimum_payment, extract_payments, extract_statement_dates,
    extract_transactions,
};
use cardstmt_core::{
    ExtractionError, InvoiceParser, Section, StatementParser, TokenizedDocument, UndatedYear,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::str::FromStr;

const JANUARY: &str = include_str!("fixtures/statement_2024_01.json");
const INSTALLMENT_CASH: &str = include_str!("fixtures/statement_installment_cash.json");

fn load(json: &str) -> Vec<Vec<String>> {
    let doc: TokenizedDocument = serde_json::from_str(json).expect("fixture json");
    doc.pages
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parser() -> StatementParser {
    StatementParser::new().with_reference_date(ymd(2024, 2, 5))
}

#[test]
fn customer_details() {
    let pages = load(JANUARY);
    let customer = extract_customer(&pages[0]).unwrap();
    assert_eq!(customer.name, "First Last");
    assert_eq!(customer.email, "email@example.com");
}

#[test]
fn balances() {
    let pages = load(JANUARY);
    let balance = extract_balances(&pages[0]).unwrap();
    assert_eq!(balance.previous_month, dec("2386.95"));
    assert_eq!(balance.previous_total, dec("3702.79"));
    assert_eq!(balance.total, dec("3813.61"));
}

#[test]
fn statement_dates() {
    let pages = load(JANUARY);
    let dates = extract_statement_dates(&pages[0], ymd(2024, 2, 5), UndatedYear::Clock).unwrap();
    assert_eq!(dates.payment_due_on, ymd(2024, 2, 29));
    assert_eq!(dates.statement_start_date, ymd(2024, 1, 1));
    assert_eq!(dates.statement_end_date, ymd(2024, 1, 31));
}

#[test]
fn interest() {
    let interest = extract_interest(&load(JANUARY)).unwrap();
    assert_eq!(interest.apr, dec("0.2724"));
    assert_eq!(interest.amount_subject_to_interest, Decimal::ZERO);
    assert_eq!(interest.amount_this_month, Decimal::ZERO);
    assert_eq!(interest.amount_ytd, Decimal::ZERO);
}

#[test]
fn minimum_payment() {
    let pages = load(JANUARY);
    let minimum = extract_minimum_payment(&pages[0]).unwrap();
    assert_eq!(minimum.total, dec("156.58"));
    assert_eq!(minimum.transaction, dec("25"));
    assert_eq!(minimum.installment, Some(dec("131.58")));

    let deferred = minimum.estimated_deferred.unwrap();
    assert_eq!(deferred.total, dec("8265"));
    assert_eq!(deferred.time, "14 years");
}

#[test]
fn payments() {
    let payments = extract_payments(&load(JANUARY)).unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].date, ymd(2024, 1, 31));
    assert_eq!(
        payments[0].description,
        "ACH Deposit Internet transfer from account ending in 1234"
    );
    assert_eq!(payments[0].amount, dec("-2386.95"));
}

#[test]
fn monthly_installments() {
    let plan = extract_installments(&load(JANUARY)).unwrap().unwrap();
    assert_eq!(plan.totals.financed, dec("1579"));
    assert_eq!(plan.totals.payments, dec("263.16"));
    assert_eq!(plan.totals.remaining, dec("1315.84"));

    assert_eq!(plan.items.len(), 1);
    let item = &plan.items[0];
    assert_eq!(item.date, ymd(2023, 11, 1));
    assert_eq!(
        item.description,
        "Apple Online Store Cupertino CA TRANSACTION #31631c7bfd69 \
         This month ’ s installment: $131.58 Final installment: Nov 30, 2024"
    );
    assert_eq!(item.amount, dec("1579"));
    assert_eq!(item.cash_back_amount, Decimal::ZERO);
    assert_eq!(item.cash_back_percentage, Decimal::ZERO);
}

#[test]
fn monthly_installments_with_daily_cash() {
    let plan = extract_installments(&load(INSTALLMENT_CASH)).unwrap().unwrap();
    assert_eq!(plan.totals.payments, Decimal::ZERO);
    assert_eq!(plan.totals.remaining, dec("1579"));

    let item = &plan.items[0];
    assert_eq!(item.amount, dec("1579"));
    assert_eq!(item.cash_back_amount, dec("47.37"));
    assert_eq!(item.cash_back_percentage, dec("0.03"));
}

#[test]
fn cash_back_summary() {
    let summary = extract_cash_back(&load(JANUARY)).unwrap();
    assert_eq!(summary.from_card, dec("25.01"));
    assert_eq!(summary.from_installments, Some(Decimal::ZERO));
    assert_eq!(summary.total, dec("25.01"));
}

#[test]
fn transactions() {
    let transactions = extract_transactions(&load(JANUARY)).unwrap();
    assert_eq!(transactions.len(), 46);

    let first = &transactions[0];
    assert_eq!(first.date, ymd(2023, 12, 29));
    assert_eq!(
        first.description,
        "PAYPAL *STEAM GAMES 10400 NE 4th St., Suite 1 4259522985 980045212 WA USA"
    );
    assert_eq!(first.cash_back_percent, dec("0.01"));
    assert_eq!(first.cash_back_amount, dec("0.08"));
    assert_eq!(first.amount, dec("7.50"));

    let last = transactions.last().unwrap();
    assert_eq!(last.date, ymd(2024, 1, 30));
    assert_eq!(
        last.description,
        "SPEEDWAY 07935 3800 LA3800 LAWNDALE DR GREENSBORO 27455 NC USA"
    );
    assert_eq!(last.cash_back_percent, dec("0.01"));
    assert_eq!(last.cash_back_amount, dec("0.20"));
    assert_eq!(last.amount, dec("20.49"));

    let daily_cash: Decimal = transactions.iter().map(|t| t.cash_back_amount).sum();
    assert_eq!(daily_cash, dec("25.01"));
}

#[test]
fn parse_whole_statement() {
    let pages = load(JANUARY);
    let result = parser().parse(&pages).unwrap();

    assert_eq!(result.page_count, 4);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);

    let invoice = result.invoice;
    assert_eq!(invoice.customer, extract_customer(&pages[0]).unwrap());
    assert_eq!(invoice.statement_start_date, ymd(2024, 1, 1));
    assert_eq!(invoice.payments.len(), 1);
    assert_eq!(invoice.transactions.len(), 46);
    assert!(invoice.monthly_installments.is_some());
}

#[test]
fn parse_installment_cash_statement() {
    let result = parser().parse(&load(INSTALLMENT_CASH)).unwrap();
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.invoice.cash_back.from_installments, Some(dec("47.37")));
    assert_eq!(result.invoice.cash_back.total, dec("72.38"));
}

#[test]
fn missing_customer_anchor() {
    let mut pages = load(JANUARY);
    pages[0].retain(|token| token != "Apple Card Customer");

    let err = parser().parse(&pages).unwrap_err();
    assert!(matches!(
        err,
        ExtractionError::MissingAnchor { section: Section::Customer, .. }
    ));
}

#[test]
fn installment_totals_without_table() {
    let mut pages = load(JANUARY);
    for page in &mut pages {
        page.retain(|token| token != "Amounts");
    }

    assert_eq!(extract_installments(&pages).unwrap(), None);
    let result = parser().parse(&pages).unwrap();
    assert_eq!(result.invoice.monthly_installments, None);
}

#[test]
fn installment_without_amount() {
    let mut pages = load(JANUARY);
    let page = pages.last_mut().unwrap();
    let financed = page.iter().position(|t| t == "Total financed").unwrap();
    page.remove(financed - 1);

    assert!(matches!(
        extract_installments(&pages),
        Err(ExtractionError::IncompleteRecord { section: Section::Installments, .. })
    ));
}

#[test]
fn statement_end_year_policy() {
    let mut pages = load(JANUARY);
    let summary = &mut pages[0];
    summary[3] = "Dec 1".to_string();
    summary[5] = "Jan 1, 2024".to_string();

    let result = parser()
        .with_undated_year(UndatedYear::StatementEnd)
        .parse(&pages)
        .unwrap();
    assert_eq!(result.invoice.statement_start_date, ymd(2023, 12, 1));
}

#[test]
fn invoice_json_output() {
    let result = parser().parse(&load(JANUARY)).unwrap();
    let json = serde_json::to_value(&result.invoice).unwrap();

    assert_eq!(json["payment_due_on"], "2024-02-29");
    assert_eq!(json["interest"]["apr"], "0.2724");
    assert_eq!(json["transactions"].as_array().unwrap().len(), 46);
}
