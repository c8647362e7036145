use colored::Colorize;
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::config::StockConfig;
use stockpile::model::{Product, Summary};
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 28;
const QTY_WIDTH: usize = 8;
const MONEY_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{}{}{:>qw$}{:>mw$}{:>mw$}",
            pad_to_width("ID", ID_WIDTH),
            pad_to_width("Name", NAME_WIDTH),
            "Qty",
            "Price",
            "Value",
            qw = QTY_WIDTH,
            mw = MONEY_WIDTH
        )
        .bold()
    );

    for p in products {
        println!("{}", product_row(p));
    }
}

pub(super) fn print_summary(summary: &Summary) {
    let noun = if summary.count == 1 {
        "product"
    } else {
        "products"
    };
    println!(
        "{} {}, total value {}",
        summary.count,
        noun,
        money(summary.total_value).bold()
    );
}

pub(super) fn print_groups(groups: &[String]) {
    if groups.is_empty() {
        println!("No products found.");
        return;
    }
    for group in groups {
        println!("{}", group);
    }
}

pub(super) fn print_config(config: &StockConfig, home: &Path) {
    println!("format = {}", config.format);
    println!("data-file = {}", config.data_path(home).display());
}

fn product_row(p: &Product) -> String {
    format!(
        "{}{}{:>qw$}{:>mw$}{:>mw$}",
        pad_to_width(p.id(), ID_WIDTH),
        pad_to_width(p.name(), NAME_WIDTH),
        p.quantity(),
        money(p.price()),
        money(p.value()),
        qw = QTY_WIDTH,
        mw = MONEY_WIDTH
    )
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Left-align `s` in a column of `width` terminal cells, truncating with an
/// ellipsis when it does not fit.
fn pad_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
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
