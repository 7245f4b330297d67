//! Turns net balances into transfer instructions.
//!
//! Greedy heuristic: perfect fits first, then debtors smaller than the largest
//! creditor, then the largest creditor against the largest debtor. It keeps the
//! instruction count low but is not a proven minimum.

use crate::core::models::{balance::NetBalance, debt::DebtInstruction};
use log::debug;

#[derive(Clone, Debug, PartialEq)]
struct Position {
    member_id: String,
    amount: f64,
}

/// Positions in descending order of amount. Equal amounts keep the order they
/// arrived in, both on construction and on re-insertion.
#[derive(Debug, Default)]
struct RankedPositions {
    entries: Vec<Position>,
}

impl RankedPositions {
    fn from_unsorted(mut entries: Vec<Position>) -> Self {
        entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        RankedPositions { entries }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn largest(&self) -> Option<&Position> {
        self.entries.first()
    }

    fn iter(&self) -> impl Iterator<Item = &Position> {
        self.entries.iter()
    }

    fn remove(&mut self, index: usize) -> Position {
        self.entries.remove(index)
    }

    /// Puts a partially settled position back, or drops it once its residual is
    /// within `threshold`.
    fn reinsert_if_above(&mut self, position: Position, threshold: f64) {
        if position.amount <= threshold {
            debug!(
                "Dropping {} with residual {:.4}",
                position.member_id, position.amount
            );
            return;
        }
        let index = self.entries.partition_point(|e| e.amount >= position.amount);
        self.entries.insert(index, position);
    }
}

pub struct SettlementPlanner {
    rounding: f64,
    currency: String,
}

impl SettlementPlanner {
    /// `rounding` must be positive; callers validate it before planning.
    pub fn new(rounding: f64, currency: &str) -> Self {
        SettlementPlanner {
            rounding,
            currency: currency.to_string(),
        }
    }

    pub fn plan(&self, balances: &[NetBalance]) -> Vec<DebtInstruction> {
        if balances.is_empty() {
            return Vec::new();
        }

        let mean = balances.iter().map(|b| b.amount).sum::<f64>() / balances.len() as f64;
        let mut creditors = Vec::new();
        let mut debtors = Vec::new();
        for balance in balances {
            let deviation = balance.amount - mean;
            if deviation > self.rounding {
                creditors.push(Position {
                    member_id: balance.member_id.clone(),
                    amount: deviation,
                });
            } else if deviation < -self.rounding {
                debtors.push(Position {
                    member_id: balance.member_id.clone(),
                    amount: -deviation,
                });
            }
        }
        debug!(
            "Planning {} members around mean {:.4}: {} creditors, {} debtors",
            balances.len(),
            mean,
            creditors.len(),
            debtors.len()
        );

        let mut run = PlanRun {
            planner: self,
            creditors: RankedPositions::from_unsorted(creditors),
            debtors: RankedPositions::from_unsorted(debtors),
            instructions: Vec::new(),
        };
        run.execute();
        run.instructions
    }

    /// Nearest multiple of the rounding unit, halves rounded up.
    fn round(&self, value: f64) -> f64 {
        (value / self.rounding + 0.5).floor() * self.rounding
    }
}

struct PlanRun<'p> {
    planner: &'p SettlementPlanner,
    creditors: RankedPositions,
    debtors: RankedPositions,
    instructions: Vec<DebtInstruction>,
}

impl PlanRun<'_> {
    fn execute(&mut self) {
        while !self.creditors.is_empty() && !self.debtors.is_empty() {
            while self.settle_perfect_fit() {}
            if self.creditors.is_empty() || self.debtors.is_empty() {
                break;
            }
            if !self.settle_dominated_debtor() {
                self.settle_largest_pair();
            }
        }
    }

    /// First creditor/debtor pair (creditors outer, debtors inner) whose amounts
    /// differ by at most half a rounding unit; both sides close completely.
    fn settle_perfect_fit(&mut self) -> bool {
        let tolerance = self.planner.rounding / 2.0;
        let found = self.creditors.iter().enumerate().find_map(|(ci, creditor)| {
            self.debtors
                .iter()
                .position(|debtor| (creditor.amount - debtor.amount).abs() <= tolerance)
                .map(|di| (ci, di))
        });
        let Some((ci, di)) = found else {
            return false;
        };

        let creditor = self.creditors.remove(ci);
        let debtor = self.debtors.remove(di);
        let value = self.planner.round(creditor.amount);
        self.emit(&debtor, &creditor, value);
        true
    }

    /// First debtor owing less than the largest creditor is owed pays off in full.
    fn settle_dominated_debtor(&mut self) -> bool {
        let Some(largest_credit) = self.creditors.largest().map(|c| c.amount) else {
            return false;
        };
        let Some(di) = self.debtors.iter().position(|d| d.amount < largest_credit) else {
            return false;
        };

        let debtor = self.debtors.remove(di);
        let mut creditor = self.creditors.remove(0);
        let value = self.planner.round(debtor.amount);
        self.emit(&debtor, &creditor, value);
        creditor.amount -= value;
        self.creditors.reinsert_if_above(creditor, self.planner.rounding);
        true
    }

    /// Every debtor owes at least the largest credit: close that creditor
    /// against the largest debtor.
    fn settle_largest_pair(&mut self) {
        let creditor = self.creditors.remove(0);
        let mut debtor = self.debtors.remove(0);
        let value = self.planner.round(creditor.amount);
        self.emit(&debtor, &creditor, value);
        debtor.amount -= value;
        self.debtors.reinsert_if_above(debtor, self.planner.rounding);
    }

    fn emit(&mut self, debtor: &Position, creditor: &Position, value: f64) {
        debug!("{} -> {}: {}", debtor.member_id, creditor.member_id, value);
        self.instructions.push(DebtInstruction {
            from_member_id: debtor.member_id.clone(),
            to_member_id: creditor.member_id.clone(),
            amount: value,
            currency: self.planner.currency.clone(),
            arranged: false,
        });
    }
}
