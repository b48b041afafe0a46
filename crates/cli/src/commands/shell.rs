//! Interactive cart session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use clementine_cart::{CartPage, CartView, MemoryCartStore, page::EMPTY_CART_MESSAGE};
use clementine_core::ProductId;

use crate::commands::catalog;
use crate::console::{ConsoleNotifier, ConsolePrompt};

const HELP: &str = "\
Commands:
  show              display the cart and totals
  qty <id> <value>  set the quantity of a line item
  remove <id>       remove a line item
  checkout          confirm and clear the cart
  help              show this message
  quit              leave the shell";

/// Run the interactive shell, seeded from `catalog` or the built-in
/// sample items.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded or stdin
/// fails.
pub fn run(catalog: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let items = match catalog {
        Some(path) => catalog::load(path)?,
        None => catalog::sample_items(),
    };
    let store = MemoryCartStore::with_items(items);
    let mut view = CartView::new(store, ConsoleNotifier, ConsolePrompt);

    println!("Your Cart");
    print_page(&view.page());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["show"] => print_page(&view.page()),
            ["qty", id, value] => {
                if let Some(id) = parse_id(id) {
                    view.set_quantity(id, value);
                    print_page(&view.page());
                }
            }
            ["remove", id] => {
                if let Some(id) = parse_id(id) {
                    view.remove(id);
                    print_page(&view.page());
                }
            }
            ["checkout"] => {
                view.checkout();
                print_page(&view.page());
            }
            ["help"] => println!("{HELP}"),
            ["quit" | "exit"] => break,
            _ => println!("Unrecognized command. Type 'help' for commands."),
        }
    }

    Ok(())
}

/// Parse a product id token, reporting bad input on the console.
fn parse_id(token: &str) -> Option<ProductId> {
    match token.parse::<i32>() {
        Ok(id) => Some(ProductId::new(id)),
        Err(_) => {
            println!("'{token}' is not a product id");
            None
        }
    }
}

/// Render the cart page as text.
pub fn print_page(page: &CartPage) {
    if page.is_empty() {
        println!("{EMPTY_CART_MESSAGE}");
    } else {
        for item in &page.items {
            println!(
                "  [{id}] {name}  {qty} x {price} = {total}",
                id = item.id,
                name = item.name,
                qty = item.quantity,
                price = item.price,
                total = item.line_total,
            );
        }
    }
    println!("  Total:       {}", page.subtotal);
    println!("  SGST (9%):   {}", page.sgst);
    println!("  CGST (9%):   {}", page.cgst);
    println!("  Final Price: {}", page.grand_total);
}
