//! The interactive numbered menu.
//!
//! Reads answers line by line and re-prompts until an answer parses. End of
//! input at any prompt leaves the menu as if Exit had been chosen.

use super::print::{render_items, render_low_stock, write_messages};
use std::io::{BufRead, Write};
use std::str::FromStr;
use stockpile::api::{CmdResult, StockAdjustment, StockApi};
use stockpile::error::Result;
use stockpile::model::{ItemDraft, KindDraft};
use stockpile::store::DataStore;

const MAIN_MENU: &str = "\n=== INVENTORY MANAGEMENT SYSTEM ===
1. Add New Item
2. Update Stock
3. Remove Item
4. View All Items
5. Generate Low Stock Report
6. Search Items
7. Exit
";

const ADD_MENU: &str = "\n=== ADD NEW ITEM ===
1. Electronics
2. Grocery
3. Other
4. Back to Main Menu
";

pub(super) struct Menu<R, W> {
    input: R,
    output: W,
    verbose: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, verbose: bool) -> Self {
        Self {
            input,
            output,
            verbose,
        }
    }

    pub fn run<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Result<()> {
        loop {
            write!(self.output, "{}", MAIN_MENU)?;
            let choice = self.ask_parsed(
                "\nEnter your choice (1-7): ",
                "Invalid choice. Please enter a number between 1 and 7: ",
                |n: &u32| (1..=7).contains(n),
            )?;

            let keep_going = match choice {
                Some(1) => self.add_item(api)?,
                Some(2) => self.update_stock(api)?,
                Some(3) => self.remove_item(api)?,
                Some(4) => {
                    let result = api.list_items()?;
                    let threshold = api.low_stock_threshold();
                    write!(self.output, "\n{}", render_items(&result.listed_items, threshold))?;
                    true
                }
                Some(5) => {
                    let result = api.low_stock(None)?;
                    write!(
                        self.output,
                        "\n{}",
                        render_low_stock(&result.listed_items, result.threshold.unwrap_or_default())
                    )?;
                    self.report(&result)?;
                    true
                }
                Some(6) => self.search(api)?,
                _ => false,
            };

            if !keep_going {
                break;
            }
        }

        writeln!(
            self.output,
            "\nThank you for using the Inventory Management System. Goodbye!"
        )?;
        Ok(())
    }

    fn add_item<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Result<bool> {
        write!(self.output, "{}", ADD_MENU)?;
        let kind = match self.ask_parsed(
            "\nSelect item type (1-4): ",
            "Invalid choice. Please enter a number between 1 and 4: ",
            |n: &u32| (1..=4).contains(n),
        )? {
            Some(4) => return Ok(true),
            Some(kind) => kind,
            None => return Ok(false),
        };

        let Some(name) = self.ask("\nEnter item name: ")? else {
            return Ok(false);
        };
        let Some(price) = self.ask_parsed(
            "Enter price: $",
            "Invalid price. Please enter a positive number: $",
            |p: &f64| p.is_finite() && *p >= 0.0,
        )?
        else {
            return Ok(false);
        };
        let Some(quantity) = self.ask_parsed(
            "Enter quantity: ",
            "Invalid quantity. Please enter a positive integer: ",
            |q: &i64| *q >= 0,
        )?
        else {
            return Ok(false);
        };

        let kind = match kind {
            1 => {
                let Some(brand) = self.ask("Enter brand: ")? else {
                    return Ok(false);
                };
                let Some(warranty_months) = self.ask_parsed(
                    "Enter warranty period (months): ",
                    "Invalid warranty period. Please enter a positive integer: ",
                    |w: &i64| *w >= 0,
                )?
                else {
                    return Ok(false);
                };
                KindDraft::Electronics {
                    brand,
                    warranty_months,
                }
            }
            2 => {
                let Some(category) = self.ask("Enter category (e.g., Dairy, Snacks, etc.): ")?
                else {
                    return Ok(false);
                };
                let Some(expiry_date) = self.ask("Enter expiry date (YYYY-MM-DD): ")? else {
                    return Ok(false);
                };
                KindDraft::Grocery {
                    expiry_date,
                    category,
                }
            }
            _ => {
                let Some(category) = self.ask("Enter category (blank for General): ")? else {
                    return Ok(false);
                };
                KindDraft::Generic {
                    category: Some(category).filter(|c| !c.trim().is_empty()),
                }
            }
        };

        let draft = ItemDraft {
            name,
            price,
            quantity,
            kind,
        };
        self.attempt(api.create_item(draft))?;
        Ok(true)
    }

    fn update_stock<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Result<bool> {
        writeln!(self.output, "\n=== UPDATE STOCK ===")?;
        let Some(id) = self.ask_id("Enter item ID: ")? else {
            return Ok(false);
        };
        let Some(action) = self.ask_parsed(
            "Add (A) or remove (R) stock? (A/R): ",
            "Invalid choice. Please enter 'A' to add or 'R' to remove: ",
            |c: &char| matches!(c.to_ascii_uppercase(), 'A' | 'R'),
        )?
        else {
            return Ok(false);
        };
        let adding = action.eq_ignore_ascii_case(&'A');
        let prompt = format!(
            "Enter quantity to {}: ",
            if adding { "add" } else { "remove" }
        );
        let Some(amount) = self.ask_parsed(
            &prompt,
            "Invalid amount. Please enter a positive number: ",
            |n: &u64| *n > 0,
        )?
        else {
            return Ok(false);
        };

        let adjustment = if adding {
            StockAdjustment::Add(amount)
        } else {
            StockAdjustment::Remove(amount)
        };
        self.attempt(api.adjust_stock(id, adjustment))?;
        Ok(true)
    }

    fn remove_item<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Result<bool> {
        writeln!(self.output, "\n=== REMOVE ITEM ===")?;
        let Some(id) = self.ask_id("Enter item ID to remove: ")? else {
            return Ok(false);
        };
        self.attempt(api.remove_item(id))?;
        Ok(true)
    }

    fn search<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Result<bool> {
        let Some(term) = self.ask("\nEnter search term: ")? else {
            return Ok(false);
        };
        let result = api.search_items(&term)?;
        if !result.listed_items.is_empty() {
            let threshold = api.low_stock_threshold();
            write!(self.output, "\n{}", render_items(&result.listed_items, threshold))?;
        }
        // The "no match" notice is Info, which the menu always shows.
        write_messages(&mut self.output, &result.messages, true)?;
        Ok(true)
    }

    /// Operation errors (unknown id, stock would go negative, invalid
    /// input) are shown and the menu carries on.
    fn attempt(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => self.report(&result),
            Err(e) => {
                writeln!(self.output, "\nError: {}", e)?;
                Ok(())
            }
        }
    }

    fn report(&mut self, result: &CmdResult) -> Result<()> {
        write_messages(&mut self.output, &result.messages, true)?;
        if self.verbose {
            for item in &result.affected_items {
                writeln!(self.output, "  {}", item.kind().details())?;
            }
        }
        Ok(())
    }

    fn ask_id(&mut self, prompt: &str) -> Result<Option<u64>> {
        self.ask_parsed(
            prompt,
            "Invalid ID. Please enter a positive number: ",
            |id: &u64| *id >= 1,
        )
    }

    /// Prompts once, then keeps showing `retry` until the answer parses and
    /// passes `accept`.
    fn ask_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        retry: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<Option<T>> {
        let mut current = prompt;
        loop {
            let Some(answer) = self.ask(current)? else {
                return Ok(None);
            };
            match answer.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => current = retry,
            }
        }
    }

    /// `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
