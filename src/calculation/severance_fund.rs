//! Severance-fund (FGTS) penalty calculation (Lei 8.036/1990, art. 18).
//!
//! The penalty is a percentage of the fund balance deposited into the
//! employee's account. The balance is either stated by the caller or
//! estimated from the monthly deposit rate over the months the employment
//! touched, up to the projected date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{SettlementRules, SeveranceFundRules};
use crate::models::{AuditStep, SettlementInput, TerminationCategory, UnemploymentInsurance};

use super::calendar::months_touched;
use super::money::round_money;

/// Legal reference for the fund penalty.
pub const SEVERANCE_FUND_REF: &str = "Lei 8.036/1990, art. 18, §1º; CLT art. 484-A";

/// What a termination category entitles the employee to from the fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundOutcome {
    /// Share of the balance paid as penalty.
    pub penalty_rate: Decimal,
    /// Share of the balance the employee may withdraw.
    pub withdrawal_percent: u8,
    /// Unemployment insurance eligibility.
    pub unemployment_insurance: UnemploymentInsurance,
}

/// Returns the fund outcome for a termination category.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::fund_outcome;
/// use severance_engine::config::SettlementRules;
/// use severance_engine::models::{TerminationCategory, UnemploymentInsurance};
/// use rust_decimal::Decimal;
///
/// let rules = SettlementRules::statutory().severance_fund;
/// let outcome = fund_outcome(TerminationCategory::MutualAgreement, &rules);
/// assert_eq!(outcome.penalty_rate, Decimal::new(20, 2));
/// assert_eq!(outcome.withdrawal_percent, 80);
/// assert_eq!(outcome.unemployment_insurance, UnemploymentInsurance::No);
/// ```
pub fn fund_outcome(category: TerminationCategory, rules: &SeveranceFundRules) -> FundOutcome {
    match category {
        TerminationCategory::EmployerNoCause | TerminationCategory::ConstructiveDismissal => {
            FundOutcome {
                penalty_rate: rules.dismissal_penalty_rate,
                withdrawal_percent: 100,
                unemployment_insurance: UnemploymentInsurance::Yes,
            }
        }
        TerminationCategory::MutualAgreement => FundOutcome {
            penalty_rate: rules.mutual_agreement_penalty_rate,
            withdrawal_percent: 80,
            unemployment_insurance: UnemploymentInsurance::No,
        },
        TerminationCategory::EmployeeResignation | TerminationCategory::EmployerForCause => {
            FundOutcome {
                penalty_rate: Decimal::ZERO,
                withdrawal_percent: 0,
                unemployment_insurance: UnemploymentInsurance::No,
            }
        }
    }
}

/// The result of calculating the fund penalty.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// Months touched between hire and the projected date (never negative).
    pub estimated_months: i64,
    /// True when the balance was estimated rather than stated.
    pub estimated: bool,
    /// The balance the penalty is computed on.
    pub balance: Decimal,
    /// The penalty deposited into the fund account.
    pub penalty: Decimal,
    /// Share of the fund the employee may withdraw.
    pub withdrawal_percent: u8,
    /// Unemployment insurance eligibility.
    pub unemployment_insurance: UnemploymentInsurance,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the fund balance, penalty, withdrawal share and insurance eligibility.
pub fn calculate_severance_fund(
    input: &SettlementInput,
    projected_date: NaiveDate,
    rules: &SettlementRules,
    step_number: u32,
) -> SeveranceFundResult {
    let salary = input.effective_salary();
    let fund_rules = &rules.severance_fund;
    let estimated_months = months_touched(input.hire_date, projected_date).max(0);

    let estimated = !input.severance_fund.use_stated_balance;
    let balance = if estimated {
        round_money(salary * fund_rules.monthly_deposit_rate * Decimal::from(estimated_months))
    } else {
        round_money(input.effective_stated_balance())
    };

    let outcome = fund_outcome(input.category, fund_rules);
    let penalty = round_money(balance * outcome.penalty_rate);

    let balance_reasoning = if estimated {
        format!(
            "estimated balance ${} x {} x {} months = ${}",
            salary.normalize(),
            fund_rules.monthly_deposit_rate.normalize(),
            estimated_months,
            balance.normalize()
        )
    } else {
        format!("stated balance ${}", balance.normalize())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund Penalty".to_string(),
        legal_ref: SEVERANCE_FUND_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.normalize().to_string(),
            "category": input.category.as_str(),
            "use_stated_balance": input.severance_fund.use_stated_balance,
            "stated_balance": input.severance_fund.stated_balance.normalize().to_string(),
            "hire_date": input.hire_date.to_string(),
            "projected_date": projected_date.to_string()
        }),
        output: serde_json::json!({
            "estimated_months": estimated_months,
            "balance": balance.normalize().to_string(),
            "penalty_rate": outcome.penalty_rate.normalize().to_string(),
            "penalty": penalty.normalize().to_string(),
            "withdrawal_percent": outcome.withdrawal_percent,
            "unemployment_insurance": outcome.unemployment_insurance
        }),
        reasoning: format!(
            "{}; penalty {} x {} = ${}",
            balance_reasoning,
            balance.normalize(),
            outcome.penalty_rate.normalize(),
            penalty.normalize()
        ),
    };

    SeveranceFundResult {
        estimated_months,
        estimated,
        balance,
        penalty,
        withdrawal_percent: outcome.withdrawal_percent,
        unemployment_insurance: outcome.unemployment_insurance,
        audit_step,
    }
}
