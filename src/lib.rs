//! Human-readable reference codes for personal-finance records.
//!
//! ```
//! use fincodes::clock::FixedClock;
//! use fincodes::codes::{validate_transaction_code, CodeGenerator};
//! use fincodes::entropy::FixedFractions;
//!
//! let clock = FixedClock::parse("2024-03-05").unwrap();
//! let mut gen = CodeGenerator::new(clock, FixedFractions::new([0.55078125]));
//! let code = gen.transaction_code();
//! assert_eq!(code, "TXN-LTDLSLC0-JTT9");
//! assert!(validate_transaction_code(&code));
//! ```

pub mod cli;
pub mod clock;
pub mod codes;
pub mod entropy;
pub mod error;
pub mod fmt;
pub mod radix;
pub mod settings;
pub mod share;

pub use codes::{
    generate_account_reference, generate_alert_code, generate_category_code, generate_goal_code,
    generate_session_code, generate_transaction_code, validate_transaction_code, CodeGenerator,
    CodeKind, GoalSuffix,
};
pub use error::{CodeError, Result};
pub use share::{decode_expense_share_code, generate_expense_share_code, ExpenseShare};
