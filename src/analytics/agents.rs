// src/analytics/agents.rs

use super::stats::{group_in_order, mean, percentage, round_to};
use crate::domain::AnnotatedProperty;
use serde::Serialize;

const TOP_AGENTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRow {
    pub agent: String,
    pub count: usize,
    pub total_value: f64,
    pub average_value: f64,
    pub market_share: f64,
}

/// Ten busiest agents by listing count. Values are in EUR.
pub fn agent_performance(properties: &[AnnotatedProperty]) -> Vec<AgentRow> {
    let total = properties.len();
    let mut rows: Vec<AgentRow> = group_in_order(properties, |p| p.agent_label().to_string())
        .into_iter()
        .map(|(agent, group)| {
            let values: Vec<f64> = group.iter().map(|p| p.price_eur).collect();
            AgentRow {
                agent,
                count: group.len(),
                total_value: values.iter().sum(),
                average_value: mean(&values).unwrap_or_default(),
                market_share: round_to(percentage(group.len(), total).unwrap_or_default(), 1),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(TOP_AGENTS);
    rows
}
