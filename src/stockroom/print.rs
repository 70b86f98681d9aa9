use colored::Colorize;
use stockroom::api::{CmdMessage, InventoryStats, MessageLevel};
use stockroom::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 18;
const NUMBER_WIDTH: usize = 12;

/// How money and stock levels are shown.
pub(crate) struct Style<'a> {
    pub currency: &'a str,
    pub low_stock_threshold: u32,
}

impl Style<'_> {
    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_products(products: &[Product], style: &Style) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    let header = format!(
        "{:>5}  {}  {}  {:>w$}  {:>6}  {:>w$}",
        "ID",
        pad("Name", NAME_WIDTH),
        pad("Category", CATEGORY_WIDTH),
        "Price",
        "Qty",
        "Total",
        w = NUMBER_WIDTH
    );
    println!("{}", header.bold());

    let mut grand_total = 0.0;
    for product in products {
        grand_total += product.total_value();

        let quantity = format!("{:>6}", product.quantity);
        let quantity = if product.is_low_stock(style.low_stock_threshold) {
            quantity.red().bold()
        } else {
            quantity.normal()
        };

        println!(
            "{}  {}  {}  {:>w$}  {}  {:>w$}",
            format!("{:>5}", product.id()).yellow(),
            pad(&product.name, NAME_WIDTH),
            pad(&product.category, CATEGORY_WIDTH).dimmed(),
            style.money(product.price),
            quantity,
            style.money(product.total_value()),
            w = NUMBER_WIDTH
        );
    }

    println!(
        "{} product(s), total value {}",
        products.len(),
        style.money(grand_total).bold()
    );
}

pub(crate) fn print_full_products(products: &[Product], style: &Style) {
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            format!("#{}", product.id()).yellow(),
            product.name.bold()
        );
        println!("Category:    {}", product.category);
        println!("Price:       {}", style.money(product.price));
        let quantity = product.quantity.to_string();
        if product.is_low_stock(style.low_stock_threshold) {
            println!("Quantity:    {} {}", quantity.red(), "(low stock)".red());
        } else {
            println!("Quantity:    {}", quantity);
        }
        println!("Total value: {}", style.money(product.total_value()));
        if !product.description.is_empty() {
            println!();
            println!("{}", product.description);
        }
    }
}

pub(crate) fn print_stats(stats: &InventoryStats, style: &Style) {
    println!("Products:    {}", stats.count);
    println!("Total value: {}", style.money(stats.total_value).bold());

    if stats.count_by_category.is_empty() {
        return;
    }

    println!();
    let header = format!(
        "{}  {:>6}  {:>w$}",
        pad("Category", CATEGORY_WIDTH),
        "Count",
        "Value",
        w = NUMBER_WIDTH
    );
    println!("{}", header.bold());
    for (category, count) in &stats.count_by_category {
        let value = stats.value_by_category.get(category).copied().unwrap_or(0.0);
        println!(
            "{}  {:>6}  {:>w$}",
            pad(category, CATEGORY_WIDTH),
            count,
            style.money(value),
            w = NUMBER_WIDTH
        );
    }
}

/// Truncates or pads `s` to exactly `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.width() <= max_width {
        return flat;
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
