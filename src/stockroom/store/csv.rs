//! # Inventory CSV Dialect
//!
//! The inventory file is a comma separated table with a fixed header:
//!
//! ```text
//! ID,Name,Category,Price,Quantity,Description,Total Value
//! 1,"Hammer","Tools",12.5,4,"Claw hammer, 16oz",50
//! ```
//!
//! ## Writing
//!
//! Textual columns (name, category, description) are **always** quoted, with
//! embedded quotes doubled. Numeric columns are written bare using Rust's
//! shortest round-trip formatting, so `19.99` is written as `19.99` and reads
//! back as the exact same `f64`. `Total Value` is derived and only written.
//!
//! ## Reading
//!
//! Records are split by an explicit state machine ([`Records`]) rather than by
//! splitting on commas, because the quoted columns may contain commas, quotes
//! and line breaks. A line break only ends a record outside quotes, so a
//! description spanning several lines survives a save/load cycle.
//!
//! Rows that do not look like products (too few columns, non-numeric id,
//! price or quantity) are counted and dropped by [`decode`]; they never fail
//! the whole read.

use crate::model::Product;
use std::iter::Peekable;
use std::str::Chars;

pub const HEADER: &str = "ID,Name,Category,Price,Quantity,Description,Total Value";

/// id, name, category, price, quantity, description. Total value is optional.
const MIN_FIELDS: usize = 6;

/// Wraps a text column in quotes, doubling any quote inside it.
pub fn quote(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Renders one product as a single CSV row, without the trailing newline.
pub fn encode_row(product: &Product) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        product.id(),
        quote(&product.name),
        quote(&product.category),
        product.price,
        product.quantity,
        quote(&product.description),
        product.total_value()
    )
}

/// Renders the header plus every product, in order.
pub fn encode(products: &[Product]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + products.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&encode_row(product));
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed for the current field yet.
    FieldStart,
    /// Plain field; quotes are literal.
    Unquoted,
    /// Inside a quoted section; commas and line breaks are literal.
    Quoted,
    /// Just saw a quote while quoted: either the first half of `""` or the
    /// closing quote.
    QuoteInQuoted,
    /// Quoted section closed but the field continues up to the next comma.
    AfterQuoted,
}

/// Iterator over the records of a CSV document, each as its list of fields.
///
/// Blank lines yield nothing. A document ending in an unterminated quoted
/// field yields what was read up to the end of input.
pub struct Records<'a> {
    chars: Peekable<Chars<'a>>,
}

pub fn records(input: &str) -> Records<'_> {
    Records {
        chars: input.chars().peekable(),
    }
}

impl Records<'_> {
    /// Consumes a `\r` if it is the first half of a CRLF pair.
    fn take_crlf(&mut self) -> bool {
        if self.chars.peek() == Some(&'\n') {
            self.chars.next();
            true
        } else {
            false
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut state = State::FieldStart;
        let mut started = false;

        while let Some(c) = self.chars.next() {
            let outside = state != State::Quoted;

            if outside && (c == '\n' || (c == '\r' && self.take_crlf())) {
                if !started {
                    // blank line
                    continue;
                }
                fields.push(field);
                return Some(fields);
            }
            started = true;

            state = match (state, c) {
                (State::Quoted, '"') => State::QuoteInQuoted,
                (State::Quoted, c) => {
                    field.push(c);
                    State::Quoted
                }
                (State::QuoteInQuoted, '"') => {
                    field.push('"');
                    State::Quoted
                }
                (_, ',') => {
                    fields.push(std::mem::take(&mut field));
                    State::FieldStart
                }
                (State::FieldStart, '"') => State::Quoted,
                (State::FieldStart, c) | (State::Unquoted, c) => {
                    field.push(c);
                    State::Unquoted
                }
                (State::QuoteInQuoted, c) | (State::AfterQuoted, c) => {
                    field.push(c);
                    State::AfterQuoted
                }
            };
        }

        if started {
            fields.push(field);
            Some(fields)
        } else {
            None
        }
    }
}

/// Builds a product from one record, or `None` if the record is malformed.
///
/// The returned product carries the id read from the file.
pub fn parse_product(fields: &[String]) -> Option<Product> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let id: u32 = fields[0].trim().parse().ok()?;
    let price: f64 = fields[3].trim().parse().ok()?;
    let quantity: u32 = fields[4].trim().parse().ok()?;

    let mut product = Product::new(fields[1].clone(), fields[2].clone(), price, quantity)
        .with_description(fields[5].clone());
    product.id = id;
    Some(product)
}

/// Products read from a document, plus how many data rows were dropped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub products: Vec<Product>,
    pub skipped: usize,
}

/// Parses a whole document. The first record is the header and is skipped
/// without being checked.
pub fn decode(input: &str) -> Decoded {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut decoded = Decoded::default();

    for fields in records(input).skip(1) {
        match parse_product(&fields) {
            Some(product) => decoded.products.push(product),
            None => decoded.skipped += 1,
        }
    }

    decoded
}
