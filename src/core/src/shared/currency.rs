use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub amount: f64,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: f64, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn usd(amount: f64) -> Self {
        CurrencyValue::new(amount, Currency::Usd)
    }

    pub fn zero() -> Self {
        CurrencyValue::usd(0.0)
    }

    pub fn can_afford(&self, price: f64) -> bool {
        self.amount >= price
    }

    pub fn credit(&mut self, amount: f64) {
        self.amount += amount;
    }

    pub fn debit(&mut self, amount: f64) {
        self.amount -= amount;
    }
}

impl Add<f64> for CurrencyValue {
    type Output = CurrencyValue;

    fn add(self, rhs: f64) -> Self::Output {
        CurrencyValue::new(self.amount + rhs, self.currency)
    }
}

impl Sub<f64> for CurrencyValue {
    type Output = CurrencyValue;

    fn sub(self, rhs: f64) -> Self::Output {
        CurrencyValue::new(self.amount - rhs, self.currency)
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.currency {
            Currency::Usd => write!(f, "${:.0}", self.amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
}
