use crate::application::adapter::ReturnOutcome;
use crate::domain::order::{Order, OrderPaymentStatus};
use crate::domain::transaction::PaymentTransaction;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of CLI output describing a processed callback.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReturnReport<'a> {
    pub changed: bool,
    pub transaction: &'a PaymentTransaction,
    pub order_payment_status: OrderPaymentStatus,
}

impl<'a> ReturnReport<'a> {
    pub fn new(outcome: &ReturnOutcome, transaction: &'a PaymentTransaction, order: &Order) -> Self {
        Self {
            changed: outcome.status.is_some(),
            transaction,
            order_payment_status: order.payment_status,
        }
    }
}

/// Writes reports as compact JSON, one per line.
pub struct OutcomeWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &ReturnReport<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
