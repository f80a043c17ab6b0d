//! Expense-share payloads: a small JSON record, base64-encoded so it can ride
//! in a URL or a QR code.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::codes::CodeGenerator;
use crate::entropy::RandomSource;
use crate::error::{CodeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub amount: f64,
    pub description: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Transaction code minted for this share.
    pub code: String,
}

impl ExpenseShare {
    /// JSON, as UTF-8 bytes, in standard padded base64. Any description is
    /// representable; non-finite amounts have no JSON form and are rejected.
    pub fn encode(&self) -> Result<String> {
        if !self.amount.is_finite() {
            return Err(CodeError::InvalidAmount(self.amount));
        }
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    pub fn decode(payload: &str) -> Result<Self> {
        let bytes = STANDARD.decode(payload.trim())?;
        let share: ExpenseShare = serde_json::from_slice(&bytes)?;
        debug!(code = %share.code, "decoded expense share");
        Ok(share)
    }
}

impl<C: Clock, R: RandomSource> CodeGenerator<C, R> {
    /// Stamp the share with the current time, then mint its transaction code.
    pub fn expense_share(&mut self, amount: f64, description: &str) -> ExpenseShare {
        let timestamp = self.clock().now_millis();
        let code = self.transaction_code();
        ExpenseShare {
            amount,
            description: description.to_string(),
            timestamp,
            code,
        }
    }

    pub fn expense_share_code(&mut self, amount: f64, description: &str) -> Result<String> {
        self.expense_share(amount, description).encode()
    }
}

pub fn generate_expense_share_code(amount: f64, description: &str) -> Result<String> {
    CodeGenerator::system().expense_share_code(amount, description)
}

pub fn decode_expense_share_code(payload: &str) -> Result<ExpenseShare> {
    ExpenseShare::decode(payload)
}
