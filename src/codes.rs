//! Reference codes for transactions, categories, goals, alerts, sessions and
//! accounts.
//!
//! Codes are human-readable and only probabilistically unique: two calls in
//! the same millisecond can collide, and nothing records what was issued.

use std::fmt;

use once_cell::sync::Lazy;
use rand::rngs::ThreadRng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::entropy::{RandomSource, RngSource};
use crate::radix::{base36, random_segment};

/// Characters kept from the base-36 timestamp in a goal code.
pub const GOAL_SUFFIX_LEN: usize = 4;

/// How the timestamp segment of a goal code is rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GoalSuffix {
    /// Last four base-36 digits of the timestamp.
    #[default]
    Trailing,
    /// The whole base-36 timestamp, as older builds emitted it.
    Full,
}

/// The six code families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CodeKind {
    Transaction,
    Category,
    Goal,
    Alert,
    Session,
    Account,
}

impl CodeKind {
    pub const ALL: [CodeKind; 6] = [
        CodeKind::Transaction,
        CodeKind::Category,
        CodeKind::Goal,
        CodeKind::Alert,
        CodeKind::Session,
        CodeKind::Account,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CodeKind::Transaction => "transaction",
            CodeKind::Category => "category",
            CodeKind::Goal => "goal",
            CodeKind::Alert => "alert",
            CodeKind::Session => "session",
            CodeKind::Account => "account",
        }
    }

    /// Leading text of every code in this family, separator included.
    pub fn prefix(self) -> &'static str {
        match self {
            CodeKind::Transaction => "TXN-",
            CodeKind::Category => "CAT-",
            CodeKind::Goal => "GOAL-",
            CodeKind::Alert => "ALERT-",
            CodeKind::Session => "SESS-",
            CodeKind::Account => "ACC",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CodeKind::Transaction => "Transaction Reference",
            CodeKind::Category => "Category Code",
            CodeKind::Goal => "Goal Tracking Code",
            CodeKind::Alert => "Budget Alert ID",
            CodeKind::Session => "Analysis Session",
            CodeKind::Account => "Account Reference",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CodeKind::Transaction => "Unique identifier for financial transactions",
            CodeKind::Category => "Automated expense categorization identifier",
            CodeKind::Goal => "Financial goal monitoring reference",
            CodeKind::Alert => "Smart notification tracking code",
            CodeKind::Session => "Predictive analytics session identifier",
            CodeKind::Account => "Unique student account identifier",
        }
    }

    /// Whether codes of this family embed part of a name.
    pub fn takes_name(self) -> bool {
        matches!(self, CodeKind::Category | CodeKind::Goal)
    }

    /// Full-string pattern for this family. Random segments may be shorter
    /// than nominal because they are never padded; only transaction codes
    /// insist on four random characters.
    pub fn pattern(self) -> &'static str {
        match self {
            CodeKind::Transaction => r"^TXN-[A-Z0-9]+-[A-Z0-9]{4}$",
            CodeKind::Category => r"^CAT-[A-Z0-9]{0,4}-[A-Z0-9]{0,2}$",
            CodeKind::Goal => r"^GOAL-[A-Z0-9]{0,3}-[A-Z0-9]+$",
            CodeKind::Alert => r"^ALERT-[A-Z0-9]+$",
            CodeKind::Session => r"^SESS-[0-9]{8}-[A-Z0-9]{0,4}$",
            CodeKind::Account => r"^ACC[A-Z0-9]+$",
        }
    }

    pub fn validate(self, code: &str) -> bool {
        PATTERNS[self as usize].is_match(code)
    }

    /// Guess the family from the code's prefix.
    pub fn detect(code: &str) -> Option<CodeKind> {
        CodeKind::ALL
            .into_iter()
            .find(|kind| code.starts_with(kind.prefix()))
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static PATTERNS: Lazy<[Regex; 6]> = Lazy::new(|| {
    CodeKind::ALL.map(|kind| Regex::new(kind.pattern()).expect("code patterns are valid regexes"))
});

/// True iff `code` is `TXN-`, one or more of `[A-Z0-9]`, `-`, then exactly
/// four of `[A-Z0-9]`.
pub fn validate_transaction_code(code: &str) -> bool {
    CodeKind::Transaction.validate(code)
}

/// Validate against whichever family the prefix names. Unknown prefixes are invalid.
pub fn validate_any(code: &str) -> Option<(CodeKind, bool)> {
    CodeKind::detect(code).map(|kind| (kind, kind.validate(code)))
}

/// First `len` ASCII letters and digits of `name`, uppercased.
fn name_segment(name: &str, len: usize) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(len)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Builds codes from an injected clock and random source.
pub struct CodeGenerator<C, R> {
    clock: C,
    random: R,
    goal_suffix: GoalSuffix,
}

impl CodeGenerator<SystemClock, RngSource<ThreadRng>> {
    /// Wall clock plus the thread-local RNG.
    pub fn system() -> Self {
        Self::new(SystemClock, RngSource::thread())
    }
}

impl<C: Clock, R: RandomSource> CodeGenerator<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self {
            clock,
            random,
            goal_suffix: GoalSuffix::default(),
        }
    }

    pub fn with_goal_suffix(mut self, goal_suffix: GoalSuffix) -> Self {
        self.goal_suffix = goal_suffix;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn timestamp(&self) -> String {
        base36(self.clock.now_millis())
    }

    fn random(&mut self, len: usize) -> String {
        random_segment(self.random.next_fraction(), len)
    }

    /// `TXN-<timestamp>-<4 random>`
    pub fn transaction_code(&mut self) -> String {
        let timestamp = self.timestamp();
        let random = self.random(4);
        format!("TXN-{timestamp}-{random}")
    }

    /// `CAT-<first 4 alnum of name>-<2 random>`. A name without letters or
    /// digits leaves the middle segment empty: `CAT--XY`.
    pub fn category_code(&mut self, name: &str) -> String {
        let name_code = name_segment(name, 4);
        let random = self.random(2);
        format!("CAT-{name_code}-{random}")
    }

    /// `GOAL-<first 3 alnum of name>-<timestamp suffix>`
    pub fn goal_code(&self, name: &str) -> String {
        let name_code = name_segment(name, 3);
        let timestamp = self.timestamp();
        let suffix = match self.goal_suffix {
            GoalSuffix::Trailing => &timestamp[timestamp.len().saturating_sub(GOAL_SUFFIX_LEN)..],
            GoalSuffix::Full => timestamp.as_str(),
        };
        format!("GOAL-{name_code}-{suffix}")
    }

    /// `ALERT-<timestamp><1 random>`
    pub fn alert_code(&mut self) -> String {
        let timestamp = self.timestamp();
        let random = self.random(1);
        format!("ALERT-{timestamp}{random}")
    }

    /// `SESS-<YYYYMMDD, UTC>-<4 random>`
    pub fn session_code(&mut self) -> String {
        let date = self.clock.today().format("%Y%m%d");
        let random = self.random(4);
        format!("SESS-{date}-{random}")
    }

    /// `ACC<timestamp><2 random>`, no separators.
    pub fn account_reference(&mut self) -> String {
        let timestamp = self.timestamp();
        let checksum = self.random(2);
        format!("ACC{timestamp}{checksum}")
    }

    /// Generate a code of any family. `name` is ignored by families that
    /// don't embed one.
    pub fn generate(&mut self, kind: CodeKind, name: &str) -> String {
        let code = match kind {
            CodeKind::Transaction => self.transaction_code(),
            CodeKind::Category => self.category_code(name),
            CodeKind::Goal => self.goal_code(name),
            CodeKind::Alert => self.alert_code(),
            CodeKind::Session => self.session_code(),
            CodeKind::Account => self.account_reference(),
        };
        trace!(%kind, %code, "generated code");
        code
    }
}

pub fn generate_transaction_code() -> String {
    CodeGenerator::system().transaction_code()
}

pub fn generate_category_code(name: &str) -> String {
    CodeGenerator::system().category_code(name)
}

pub fn generate_goal_code(name: &str) -> String {
    CodeGenerator::system().goal_code(name)
}

pub fn generate_alert_code() -> String {
    CodeGenerator::system().alert_code()
}

pub fn generate_session_code() -> String {
    CodeGenerator::system().session_code()
}

pub fn generate_account_reference() -> String {
    CodeGenerator::system().account_reference()
}
