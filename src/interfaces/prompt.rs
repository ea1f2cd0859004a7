use crate::domain::catalog::Catalog;
use crate::domain::order::{Order, OrderLine};
use crate::domain::ports::OrderSource;
use crate::error::{CartError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Collects an order interactively, one question pair per catalog product.
///
/// Quantities that are not non-negative integers are rejected and asked
/// again. Any answer other than `yes` (case-insensitive) means no gift wrap.
pub struct PromptOrderSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptOrderSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(CartError::UnexpectedEof(question.trim().to_string()));
        }
        Ok(answer.trim().to_string())
    }

    fn ask_quantity(&mut self, product: &str) -> Result<u32> {
        let question = format!("Enter the quantity of {product}: ");
        loop {
            let answer = self.ask(&question)?;
            match answer.parse::<u32>() {
                Ok(quantity) => return Ok(quantity),
                Err(e) => {
                    debug!(product, answer = %answer, error = %e, "Rejected quantity");
                    writeln!(
                        self.output,
                        "Please enter a whole number of zero or more."
                    )?;
                }
            }
        }
    }

    fn ask_gift_wrap(&mut self, product: &str) -> Result<bool> {
        let answer = self.ask(&format!("Is {product} wrapped as a gift? (yes/no): "))?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }
}

impl<R: BufRead, W: Write> OrderSource for PromptOrderSource<R, W> {
    fn read_order(&mut self, catalog: &Catalog) -> Result<Order> {
        let mut order = Order::for_catalog(catalog);
        for product in catalog.products() {
            let quantity = self.ask_quantity(&product.name)?;
            let gift_wrap = self.ask_gift_wrap(&product.name)?;
            order.set_line(&product.name, OrderLine::new(quantity, gift_wrap))?;
        }
        writeln!(self.output)?;
        Ok(order)
    }
}
