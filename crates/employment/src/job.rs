use serde::{Deserialize, Serialize};

/// Hours in a working year, used when income is computed without explicit hours.
pub const DEFAULT_ANNUAL_HOURS: i64 = 2000;

/// How a job pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum Compensation {
    /// Wage per hour worked.
    Hourly(f64),
    /// Fixed yearly amount.
    Salary(u64),
}

/// A job: a title plus its compensation.
///
/// Compensation changes in place through [`Job::raise_by_amount`] and
/// [`Job::raise_by_percent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    /// Income for `hours` worked. Hourly pay is truncated toward zero; a
    /// salary ignores `hours`.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Hourly(wage) => (hours as f64 * wage) as i64,
            Compensation::Salary(amount) => i64::try_from(amount).unwrap_or(i64::MAX),
        }
    }

    /// Income for a [`DEFAULT_ANNUAL_HOURS`] year.
    pub fn annual_income(&self) -> i64 {
        self.calculate_income(DEFAULT_ANNUAL_HOURS)
    }

    /// Add an absolute amount to the wage or salary.
    ///
    /// A salary that would drop below zero is clamped to zero.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(wage) => Compensation::Hourly(wage + amount),
            Compensation::Salary(salary) => {
                Compensation::Salary(self.clamp_salary(salary as f64 + amount))
            }
        };
    }

    /// Scale the wage or salary by `1 + fraction` (`0.10` is a 10% raise).
    pub fn raise_by_percent(&mut self, fraction: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(wage) => Compensation::Hourly(wage * (1.0 + fraction)),
            Compensation::Salary(salary) => {
                Compensation::Salary(self.clamp_salary(salary as f64 * (1.0 + fraction)))
            }
        };
    }

    fn clamp_salary(&self, raw: f64) -> u64 {
        if raw < 0.0 {
            tracing::debug!(title = %self.title, raw, "salary below zero, clamping to zero");
            return 0;
        }
        // Truncates the fraction; NaN becomes 0.
        raw as u64
    }
}
