//! Rationale catalogs, one per recommendation outcome
//!
//! Each rule pairs a predicate over the household with the text it adds.
//! Order within a catalog is the order bullets appear in.

use std::fmt;

use super::{ProjectedTotals, RecommendationKind};
use crate::assumptions::Assumptions;
use crate::format::{format_currency, format_percentage};
use crate::household::{Goal, Household, LiquidityNeed, RiskTolerance};

/// Everything a rationale rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub household: &'a Household,
    pub totals: &'a ProjectedTotals,
    pub assumptions: &'a Assumptions,
}

/// Bullet text, fixed or rendered from the context
#[derive(Clone, Copy)]
pub enum RationaleText {
    Fixed(&'static str),
    Computed(fn(&RuleContext<'_>) -> String),
}

#[derive(Clone, Copy)]
pub struct RationaleRule {
    pub id: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub text: RationaleText,
}

impl fmt::Debug for RationaleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationaleText::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            RationaleText::Computed(_) => f.write_str("Computed"),
        }
    }
}

impl fmt::Debug for RationaleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RationaleRule")
            .field("id", &self.id)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl RationaleRule {
    pub fn render(&self, ctx: &RuleContext<'_>) -> String {
        match self.text {
            RationaleText::Fixed(text) => text.to_string(),
            RationaleText::Computed(render) => render(ctx),
        }
    }
}

/// Ordered "why" and "considerations" rules for one outcome
#[derive(Debug)]
pub struct BranchCatalog {
    pub why: &'static [RationaleRule],
    pub considerations: &'static [RationaleRule],
}

impl BranchCatalog {
    /// Texts of the first `limit` applicable "why" rules
    pub fn why_bullets(&self, ctx: &RuleContext<'_>, limit: usize) -> Vec<String> {
        select(self.why, ctx, limit)
    }

    /// Texts of the first `limit` applicable consideration rules
    pub fn consideration_bullets(&self, ctx: &RuleContext<'_>, limit: usize) -> Vec<String> {
        select(self.considerations, ctx, limit)
    }
}

fn select(rules: &[RationaleRule], ctx: &RuleContext<'_>, limit: usize) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .take(limit)
        .map(|rule| rule.render(ctx))
        .collect()
}

pub fn catalog_for(kind: RecommendationKind) -> &'static BranchCatalog {
    match kind {
        RecommendationKind::Plan529Primary => &PLAN_529_PRIMARY,
        RecommendationKind::IulConsideration => &IUL_CONSIDERATION,
        RecommendationKind::Hybrid => &HYBRID,
    }
}

/// One-sentence summary for each outcome
pub fn summary_for(kind: RecommendationKind) -> &'static str {
    match kind {
        RecommendationKind::Plan529Primary => {
            "A 529 plan should be your primary education savings vehicle."
        }
        RecommendationKind::IulConsideration => {
            "An IUL policy is worth considering for flexibility beyond education."
        }
        RecommendationKind::Hybrid => {
            "A combination of a 529 plan and an IUL policy balances tax-free education growth with flexibility."
        }
    }
}

// Predicates

fn always(_: &RuleContext<'_>) -> bool {
    true
}

fn state_benefit_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.household.state_tax_benefit_enabled
        && ctx.household.state_tax_benefit_amount > 0.0
        && ctx.totals.total_contributed > 0.0
}

fn low_liquidity(ctx: &RuleContext<'_>) -> bool {
    ctx.household.liquidity_need == LiquidityNeed::Low
}

fn high_liquidity(ctx: &RuleContext<'_>) -> bool {
    ctx.household.liquidity_need == LiquidityNeed::High
}

fn rollover_considered(ctx: &RuleContext<'_>) -> bool {
    ctx.household.consider_roth_rollover
}

fn growth_allocation(ctx: &RuleContext<'_>) -> bool {
    ctx.household.risk_tolerance == RiskTolerance::Growth
}

fn scholarship_likely(ctx: &RuleContext<'_>) -> bool {
    ctx.household.scholarship_likely
}

fn wants_legacy(ctx: &RuleContext<'_>) -> bool {
    ctx.household.has_goal(Goal::Legacy)
}

fn wants_flex_savings(ctx: &RuleContext<'_>) -> bool {
    ctx.household.has_goal(Goal::FlexSavings)
}

fn wants_retirement(ctx: &RuleContext<'_>) -> bool {
    ctx.household.has_goal(Goal::Retirement)
}

fn uncertain_education(ctx: &RuleContext<'_>) -> bool {
    ctx.household.education_probability <= ctx.assumptions.thresholds.flexible_max_probability
}

fn non_traditional(ctx: &RuleContext<'_>) -> bool {
    ctx.household.non_traditional_path
}

fn short_horizon(ctx: &RuleContext<'_>) -> bool {
    ctx.household.years_to_goal <= 5
}

fn mec_unguarded(ctx: &RuleContext<'_>) -> bool {
    !ctx.household.mec_risk_guard
}

fn loan_ratio_risky(ctx: &RuleContext<'_>) -> bool {
    ctx.household.max_loan_to_value_ratio > ctx.assumptions.rules.loan_risk_threshold
}

// Computed texts

fn education_likelihood_text(ctx: &RuleContext<'_>) -> String {
    format!(
        "A {:.0}% likelihood of qualified education use means growth is likely to stay tax-free.",
        ctx.household.education_probability
    )
}

fn hybrid_likelihood_text(ctx: &RuleContext<'_>) -> String {
    format!(
        "A {:.0}% likelihood of college supports saving for both education and flexibility.",
        ctx.household.education_probability
    )
}

fn state_benefit_text(ctx: &RuleContext<'_>) -> String {
    let share = ctx.totals.state_tax_benefit / ctx.totals.total_contributed;
    format!(
        "Your state tax benefit adds about {} on top of what you contribute.",
        format_percentage(share, 1)
    )
}

fn rollover_text(ctx: &RuleContext<'_>) -> String {
    let cap = format_currency(ctx.household.roth_rollover_limit);
    if ctx.totals.roth_rollover_possible > 0.0 {
        format!(
            "Unused funds can roll into the beneficiary's Roth IRA: about {} today, up to {} over their lifetime.",
            format_currency(ctx.totals.roth_rollover_possible),
            cap
        )
    } else {
        format!(
            "Unused funds can roll into the beneficiary's Roth IRA, up to {} over their lifetime.",
            cap
        )
    }
}

fn penalty_text(ctx: &RuleContext<'_>) -> String {
    format!(
        "Money withdrawn for non-education use pays income tax plus a {} penalty on earnings.",
        format_percentage(ctx.assumptions.rules.non_qualified_penalty_rate, 0)
    )
}

fn loan_ratio_text(ctx: &RuleContext<'_>) -> String {
    format!(
        "Borrowing above {} of cash value raises the risk of the policy lapsing.",
        format_percentage(ctx.assumptions.rules.loan_risk_threshold, 0)
    )
}

const MEC_WARNING: &str = "Without a MEC guard, overfunding can turn the policy into a modified \
endowment contract and make loans taxable.";

static PLAN_529_PRIMARY: BranchCatalog = BranchCatalog {
    why: &[
        RationaleRule {
            id: "education_likelihood",
            applies: always,
            text: RationaleText::Computed(education_likelihood_text),
        },
        RationaleRule {
            id: "state_tax_benefit",
            applies: state_benefit_applies,
            text: RationaleText::Computed(state_benefit_text),
        },
        RationaleRule {
            id: "low_liquidity",
            applies: low_liquidity,
            text: RationaleText::Fixed(
                "You don't expect to need this money before college, so the 529's withdrawal rules cost you little.",
            ),
        },
        RationaleRule {
            id: "roth_rollover",
            applies: rollover_considered,
            text: RationaleText::Computed(rollover_text),
        },
        RationaleRule {
            id: "age_based_glide",
            applies: growth_allocation,
            text: RationaleText::Fixed(
                "Age-based portfolios let a growth allocation glide toward safety as enrollment nears.",
            ),
        },
        RationaleRule {
            id: "scholarship_exception",
            applies: scholarship_likely,
            text: RationaleText::Fixed(
                "Amounts matching a scholarship can be withdrawn without the additional penalty.",
            ),
        },
        RationaleRule {
            id: "financial_aid",
            applies: always,
            text: RationaleText::Fixed(
                "A parent-owned 529 has only a modest effect on financial aid eligibility.",
            ),
        },
    ],
    considerations: &[
        RationaleRule {
            id: "non_qualified_penalty",
            applies: always,
            text: RationaleText::Computed(penalty_text),
        },
        RationaleRule {
            id: "no_death_benefit",
            applies: wants_legacy,
            text: RationaleText::Fixed(
                "A 529 carries no death benefit; pair it with term coverage if leaving a legacy matters.",
            ),
        },
        RationaleRule {
            id: "short_horizon",
            applies: short_horizon,
            text: RationaleText::Fixed(
                "With a short horizon, keep the allocation conservative to protect what you have saved.",
            ),
        },
        RationaleRule {
            id: "annual_review",
            applies: always,
            text: RationaleText::Fixed("Review the beneficiary and investment options each year."),
        },
    ],
};

static IUL_CONSIDERATION: BranchCatalog = BranchCatalog {
    why: &[
        RationaleRule {
            id: "uncertain_education",
            applies: uncertain_education,
            text: RationaleText::Fixed(
                "Education plans are uncertain, so the freedom to use the money for anything is valuable.",
            ),
        },
        RationaleRule {
            id: "non_traditional_path",
            applies: non_traditional,
            text: RationaleText::Fixed(
                "Trade school, a business venture or gap years may not count as qualified 529 expenses.",
            ),
        },
        RationaleRule {
            id: "high_liquidity",
            applies: high_liquidity,
            text: RationaleText::Fixed(
                "Policy loans give you access to cash value for any purpose without a tax penalty.",
            ),
        },
        RationaleRule {
            id: "legacy",
            applies: wants_legacy,
            text: RationaleText::Fixed("The permanent death benefit supports your legacy goal."),
        },
        RationaleRule {
            id: "flex_savings",
            applies: wants_flex_savings,
            text: RationaleText::Fixed("Cash value can double as a flexible savings reserve."),
        },
        RationaleRule {
            id: "retirement_income",
            applies: wants_retirement,
            text: RationaleText::Fixed(
                "Cash value left after college can supplement retirement income through policy loans.",
            ),
        },
        RationaleRule {
            id: "financial_aid",
            applies: always,
            text: RationaleText::Fixed(
                "Life insurance cash value is not reported as an asset on federal financial aid forms.",
            ),
        },
    ],
    considerations: &[
        RationaleRule {
            id: "early_costs",
            applies: always,
            text: RationaleText::Fixed(
                "Policy charges slow early cash value growth; plan to fund the policy for 10 years or more.",
            ),
        },
        RationaleRule {
            id: "mec_risk",
            applies: mec_unguarded,
            text: RationaleText::Fixed(MEC_WARNING),
        },
        RationaleRule {
            id: "loan_ratio",
            applies: loan_ratio_risky,
            text: RationaleText::Computed(loan_ratio_text),
        },
        RationaleRule {
            id: "illustration_risk",
            applies: always,
            text: RationaleText::Fixed(
                "Illustrated crediting rates are not guaranteed; caps and participation rates can change.",
            ),
        },
    ],
};

static HYBRID: BranchCatalog = BranchCatalog {
    why: &[
        RationaleRule {
            id: "moderate_likelihood",
            applies: always,
            text: RationaleText::Computed(hybrid_likelihood_text),
        },
        RationaleRule {
            id: "state_tax_benefit",
            applies: state_benefit_applies,
            text: RationaleText::Computed(state_benefit_text),
        },
        RationaleRule {
            id: "tax_free_share",
            applies: always,
            text: RationaleText::Fixed(
                "The 529 share captures tax-free growth for the education costs you do expect.",
            ),
        },
        RationaleRule {
            id: "flexible_share",
            applies: always,
            text: RationaleText::Fixed("The policy share keeps money available if plans change."),
        },
        RationaleRule {
            id: "roth_rollover",
            applies: rollover_considered,
            text: RationaleText::Computed(rollover_text),
        },
        RationaleRule {
            id: "legacy",
            applies: wants_legacy,
            text: RationaleText::Fixed("The policy's death benefit supports your legacy goal."),
        },
    ],
    considerations: &[
        RationaleRule {
            id: "split_funding",
            applies: always,
            text: RationaleText::Fixed(
                "Splitting contributions means neither vehicle is funded to its full potential.",
            ),
        },
        RationaleRule {
            id: "mec_risk",
            applies: mec_unguarded,
            text: RationaleText::Fixed(MEC_WARNING),
        },
        RationaleRule {
            id: "scholarship_shift",
            applies: scholarship_likely,
            text: RationaleText::Fixed(
                "If scholarships cover more of the cost, shift new contributions toward the policy.",
            ),
        },
        RationaleRule {
            id: "annual_review",
            applies: always,
            text: RationaleText::Fixed("Revisit the split each year as education plans become clearer."),
        },
    ],
};
