use std::collections::{BTreeMap, HashMap};

use crate::award::Award;
use crate::filter::GeoFilter;

pub const DEFAULT_RECIPIENT_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateAggregate {
    pub amount: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipientAggregate {
    pub name: String,
    pub amount: f64,
    pub count: i64,
}

/// Groups filtered awards by state. Awards with an empty state or a
/// non-positive amount are skipped; both amount and count are always
/// accumulated regardless of which metric the caller will display.
pub fn aggregate_by_state(awards: &[Award], filter: &GeoFilter) -> BTreeMap<String, StateAggregate> {
    let mut states: BTreeMap<String, StateAggregate> = BTreeMap::new();
    for award in awards {
        if !award.geo_eligible() || !filter.matches(award) {
            continue;
        }
        let entry = states.entry(award.state.clone()).or_default();
        entry.amount += award.award_amount;
        entry.count += 1;
    }
    states
}

/// Ranks recipients by total amount within one state (or nationally when
/// `state` is `None`). Ties break on count, then keep first-encounter
/// order; the stable sort guarantees the last part.
pub fn top_recipients(
    awards: &[Award],
    state: Option<&str>,
    filter: &GeoFilter,
    limit: usize,
) -> Vec<RecipientAggregate> {
    let mut order: Vec<RecipientAggregate> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for award in awards {
        if !award.has_positive_amount() || !filter.matches(award) {
            continue;
        }
        if let Some(wanted) = state
            && award.state != wanted
        {
            continue;
        }
        if award.recipient_name.is_empty() {
            continue;
        }

        let slot = match index_by_name.get(&award.recipient_name) {
            Some(existing) => *existing,
            None => {
                order.push(RecipientAggregate {
                    name: award.recipient_name.clone(),
                    amount: 0.0,
                    count: 0,
                });
                let new_index = order.len() - 1;
                index_by_name.insert(award.recipient_name.clone(), new_index);
                new_index
            }
        };
        order[slot].amount += award.award_amount;
        order[slot].count += 1;
    }

    order.sort_by(|left, right| {
        right
            .amount
            .total_cmp(&left.amount)
            .then_with(|| right.count.cmp(&left.count))
    });
    order.truncate(limit);
    order
}
