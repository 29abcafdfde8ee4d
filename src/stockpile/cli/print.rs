use colored::Colorize;
use std::io::{self, Write};
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TABLE_WIDTH: usize = 90;
const REPORT_WIDTH: usize = 50;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 10;
const QTY_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 13;

/// Writes messages, one per line. `Info` is only shown when `verbose`.
pub(super) fn write_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
    verbose: bool,
) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Info => {}
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) -> io::Result<()> {
    write_messages(&mut io::stdout().lock(), messages, verbose)
}

/// The full inventory table. `low_threshold` colours quantities below it.
pub(super) fn render_items(items: &[Record], low_threshold: i64) -> String {
    if items.is_empty() {
        return "No items in inventory.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str(&format!("{}\n", center("INVENTORY", TABLE_WIDTH).bold()));
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str(&format!(
        "{}{}{}{}{}{}\n",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Price", PRICE_WIDTH),
        pad("Qty", QTY_WIDTH),
        pad("Type", TYPE_WIDTH),
        "Details"
    ));
    output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

    let fixed = ID_WIDTH + NAME_WIDTH + PRICE_WIDTH + QTY_WIDTH + TYPE_WIDTH;
    let details_width = TABLE_WIDTH.saturating_sub(fixed);

    for item in items {
        let qty = pad(&item.quantity().to_string(), QTY_WIDTH);
        let qty = if item.quantity() < low_threshold {
            qty.red().to_string()
        } else {
            qty
        };
        output.push_str(&format!(
            "{}{}{}{}{}{}\n",
            pad(&item.id().to_string(), ID_WIDTH),
            pad(item.name(), NAME_WIDTH),
            pad(&format!("${:.2}", item.price()), PRICE_WIDTH),
            qty,
            pad(item.tag().as_str(), TYPE_WIDTH),
            truncate_to_width(&item.kind().details(), details_width).dimmed()
        ));
    }
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output
}

/// The low-stock report. An empty `items` still prints the frame; the
/// "nothing below threshold" line comes from the command messages.
pub(super) fn render_low_stock(items: &[Record], threshold: i64) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(REPORT_WIDTH)));
    output.push_str(&format!(
        "{}\n",
        center(
            &format!("LOW STOCK REPORT (Below {} items)", threshold),
            REPORT_WIDTH
        )
        .bold()
    ));
    output.push_str(&format!("{}\n", "=".repeat(REPORT_WIDTH)));
    output.push_str(&format!(
        "{}{}{}{}\n",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Qty", QTY_WIDTH),
        "Type"
    ));
    output.push_str(&format!("{}\n", "-".repeat(REPORT_WIDTH)));
    for item in items {
        output.push_str(&format!(
            "{}{}{}{}\n",
            pad(&item.id().to_string(), ID_WIDTH),
            pad(item.name(), NAME_WIDTH),
            pad(&item.quantity().to_string(), QTY_WIDTH).red(),
            item.tag()
        ));
    }
    output
}

/// Left-aligns `s` in a column of `width` display cells, truncating with an
/// ellipsis and always leaving one cell of gap.
fn pad(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width.saturating_sub(1));
    let fill = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(fill))
}

fn center(s: &str, width: usize) -> String {
    let left = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(left), s)
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
