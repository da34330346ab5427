//! Notice period resolution and termination date projection.
//!
//! The notice period length depends on the termination category and the
//! employee's tenure (Lei 12.506/2011). When notice is paid in lieu, the
//! termination date is projected forward by the notice length and every
//! proportional accrual is counted up to that projected date
//! (CLT art. 487, §1º).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::NoticeRules;
use crate::models::{AuditStep, NoticeEntitlement, NoticeMode, SettlementInput, TerminationCategory};

use super::calendar::{add_days, complete_years_between};

/// Legal reference for the proportional notice period.
pub const NOTICE_PERIOD_REF: &str = "Lei 12.506/2011";

/// Legal reference for the projection of indemnified notice.
pub const NOTICE_PROJECTION_REF: &str = "CLT art. 487, §1º";

/// The resolved notice period.
#[derive(Debug, Clone)]
pub struct NoticePeriodResult {
    /// Full years of service between hire and termination.
    pub complete_years: i64,
    /// The notice period length in days.
    pub notice_days: i64,
    /// Scaling applied to the indemnified notice payment.
    pub notice_factor: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The projected end date used for proportional accruals.
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    /// The date accruals are anchored to.
    pub projected_date: NaiveDate,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the proportional notice length for `complete_years` of service.
///
/// Base days plus the per-year extra for each full year beyond the first,
/// clamped to `[base_days, max_days]`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::proportional_notice_days;
/// use severance_engine::config::SettlementRules;
///
/// let rules = SettlementRules::statutory().notice;
/// assert_eq!(proportional_notice_days(0, &rules), 30);
/// assert_eq!(proportional_notice_days(1, &rules), 30);
/// assert_eq!(proportional_notice_days(2, &rules), 33);
/// assert_eq!(proportional_notice_days(21, &rules), 90);
/// assert_eq!(proportional_notice_days(40, &rules), 90);
/// ```
pub fn proportional_notice_days(complete_years: i64, rules: &NoticeRules) -> i64 {
    let extra = if complete_years <= 1 {
        0
    } else {
        rules.extra_days_per_year * (complete_years - 1)
    };
    (rules.base_days + extra).clamp(rules.base_days, rules.max_days)
}

/// Resolves the notice period length and payment factor for a termination.
///
/// # Arguments
///
/// * `input` - The settlement input
/// * `rules` - The notice rules in force
/// * `step_number` - The step number for audit trail sequencing
///
/// # Behavior
///
/// - No-cause dismissal, constructive dismissal and mutual agreement get the
///   proportional notice period
/// - Resignation gets the fixed resignation notice
/// - For-cause dismissal gets no notice
/// - The payment factor is halved only under mutual agreement; the day count
///   itself is never halved
pub fn resolve_notice_period(
    input: &SettlementInput,
    rules: &NoticeRules,
    step_number: u32,
) -> NoticePeriodResult {
    let complete_years = complete_years_between(input.hire_date, input.termination_date);

    let notice_days = match input.category.notice_entitlement() {
        NoticeEntitlement::Proportional => proportional_notice_days(complete_years, rules),
        NoticeEntitlement::Resignation => rules.resignation_days,
        NoticeEntitlement::None => 0,
    };

    let notice_factor = match input.category {
        TerminationCategory::MutualAgreement => rules.mutual_agreement_factor,
        TerminationCategory::EmployerNoCause
        | TerminationCategory::EmployeeResignation
        | TerminationCategory::EmployerForCause
        | TerminationCategory::ConstructiveDismissal => Decimal::ONE,
    };

    let reasoning = match input.category.notice_entitlement() {
        NoticeEntitlement::Proportional => format!(
            "{} complete years of service: {} + {} x {} extra years = {} days (capped at {})",
            complete_years,
            rules.base_days,
            rules.extra_days_per_year,
            (complete_years - 1).max(0),
            notice_days,
            rules.max_days
        ),
        NoticeEntitlement::Resignation => {
            format!("Resignation carries a fixed {} day notice", notice_days)
        }
        NoticeEntitlement::None => "No notice period for dismissal for cause".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_period".to_string(),
        rule_name: "Notice Period".to_string(),
        legal_ref: NOTICE_PERIOD_REF.to_string(),
        input: serde_json::json!({
            "category": input.category.as_str(),
            "hire_date": input.hire_date.to_string(),
            "termination_date": input.termination_date.to_string(),
            "complete_years": complete_years
        }),
        output: serde_json::json!({
            "notice_days": notice_days,
            "notice_factor": notice_factor.normalize().to_string()
        }),
        reasoning,
    };

    NoticePeriodResult {
        complete_years,
        notice_days,
        notice_factor,
        audit_step,
    }
}

/// Projects the termination date by indemnified notice.
///
/// The projected date is `termination_date + notice_days` when notice is paid
/// in lieu and there is a notice period; otherwise it is the termination date.
pub fn project_termination_date(
    input: &SettlementInput,
    notice_days: i64,
    step_number: u32,
) -> ProjectionResult {
    let projects = input.notice.mode == NoticeMode::PaidInLieu && notice_days > 0;
    let projected_date = if projects {
        add_days(input.termination_date, notice_days)
    } else {
        input.termination_date
    };

    let reasoning = if projects {
        format!(
            "Indemnified notice extends {} by {} days to {}",
            input.termination_date, notice_days, projected_date
        )
    } else {
        format!(
            "Notice is {} - accruals end on {}",
            input.notice.mode.as_str(),
            projected_date
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_projection".to_string(),
        rule_name: "Notice Projection".to_string(),
        legal_ref: NOTICE_PROJECTION_REF.to_string(),
        input: serde_json::json!({
            "termination_date": input.termination_date.to_string(),
            "notice_mode": input.notice.mode.as_str(),
            "notice_days": notice_days
        }),
        output: serde_json::json!({
            "projected_date": projected_date.to_string(),
            "projected": projects
        }),
        reasoning,
    };

    ProjectionResult {
        projected_date,
        audit_step,
    }
}
