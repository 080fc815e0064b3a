use crate::utils::error::{Result, RuleError, TaxArgument};

/// Percentage-based tax arithmetic. Results are not rounded; callers own
/// any currency formatting.
pub struct TaxCalculator;

impl TaxCalculator {
    /// `amount + amount * (rate / 100)`
    pub fn total_with_tax(amount: f64, rate: f64) -> Result<f64> {
        let tax = Self::tax_amount(amount, rate)?;
        Ok(amount + tax)
    }

    /// `amount * (rate / 100)`
    pub fn tax_amount(amount: f64, rate: f64) -> Result<f64> {
        Self::check_non_negative(TaxArgument::Amount, amount)?;
        Self::check_non_negative(TaxArgument::Rate, rate)?;
        Ok(amount * (rate / 100.0))
    }

    fn check_non_negative(argument: TaxArgument, value: f64) -> Result<()> {
        if value < 0.0 {
            return Err(RuleError::InvalidArgument { argument, value });
        }
        Ok(())
    }
}
