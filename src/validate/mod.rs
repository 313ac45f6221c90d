// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Referential and temporal integrity checks.
//!
//! The validator never mutates: it recomputes the full issue list from a node set.

use std::collections::HashMap;
use std::fmt;

use crate::model::{NodeId, ScenarioId, ScenarioNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    /// Not produced by any current rule.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    MissingScenarioId,
    DuplicateScenarioId,
    TargetNotFound { target: ScenarioId },
    TimeParadox { target: ScenarioId },
}

impl IssueKind {
    fn message(&self) -> String {
        match self {
            Self::MissingScenarioId => "Missing Scenario ID".to_owned(),
            Self::DuplicateScenarioId => "Duplicate Scenario ID".to_owned(),
            Self::TargetNotFound { target } => format!("Target scenario {target} not found"),
            Self::TimeParadox { target } => format!("Time paradox: connects to past ({target})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub node_id: NodeId,
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    fn error(node_id: &NodeId, kind: IssueKind) -> Self {
        Self {
            node_id: node_id.clone(),
            severity: Severity::Error,
            message: kind.message(),
            kind,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.node_id, self.message)
    }
}

/// Recomputes every issue of `nodes`, in node order.
///
/// Per node: a blank scenario id, a scenario id shared with another node, and for each
/// outgoing edge either an unresolved target or a target at a strictly earlier slot.
/// When several nodes share a target id, the last one in set order is the resolved target.
pub fn validate_all(nodes: &[ScenarioNode]) -> Vec<ValidationIssue> {
    let mut holders = HashMap::<&str, usize>::with_capacity(nodes.len());
    let mut by_scenario = HashMap::<&str, &ScenarioNode>::with_capacity(nodes.len());
    for node in nodes {
        let key = node.scenario_id().as_str();
        *holders.entry(key).or_default() += 1;
        by_scenario.insert(key, node);
    }

    let mut issues = Vec::new();
    for node in nodes {
        let scenario_id = node.scenario_id();
        if scenario_id.is_blank() {
            issues.push(ValidationIssue::error(node.id(), IssueKind::MissingScenarioId));
        }
        if holders.get(scenario_id.as_str()).copied().unwrap_or(0) > 1 {
            issues.push(ValidationIssue::error(node.id(), IssueKind::DuplicateScenarioId));
        }

        let source_time = node.grid_position().global_time_index();
        for target in node.next_scenarios() {
            let kind = match by_scenario.get(target.as_str()) {
                None => IssueKind::TargetNotFound {
                    target: target.clone(),
                },
                Some(resolved) if resolved.grid_position().global_time_index() < source_time => {
                    IssueKind::TimeParadox {
                        target: target.clone(),
                    }
                }
                Some(_) => continue,
            };
            issues.push(ValidationIssue::error(node.id(), kind));
        }
    }
    issues
}

/// Summary view over a computed issue list.
#[derive(Debug, Clone, Copy)]
pub struct ValidationReport<'a> {
    issues: &'a [ValidationIssue],
}

impl<'a> ValidationReport<'a> {
    pub fn new(issues: &'a [ValidationIssue]) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &'a [ValidationIssue] {
        self.issues
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for<'n>(
        &self,
        node_id: &'n NodeId,
    ) -> impl Iterator<Item = &'a ValidationIssue> + 'n
    where
        'a: 'n,
    {
        let issues = self.issues;
        issues.iter().filter(move |issue| &issue.node_id == node_id)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{validate_all, IssueKind, Severity, ValidationReport};
    use crate::model::fixtures::{link, nid, node, sid, small_chain};

    #[test]
    fn clean_chain_has_no_issues() {
        assert!(validate_all(&small_chain()).is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let mut nodes = small_chain();
        nodes.push(node("d", "", 3, 0, "Rhea"));
        nodes.push(node("e", "A", 0, 0, "Rhea"));
        nodes[2].next_scenarios_mut().push(sid("Ghost"));
        nodes[2].next_scenarios_mut().push(sid("A"));

        let first = validate_all(&nodes);
        let second = validate_all(&nodes);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn blank_id_is_missing() {
        let issues = validate_all(&[node("a", "  ", 0, 0, "Common")]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingScenarioId);
        assert_eq!(issues[0].message, "Missing Scenario ID");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn every_holder_of_a_shared_id_is_flagged() {
        let nodes = vec![
            node("a", "X", 0, 0, "Common"),
            node("b", "X", 1, 0, "Common"),
            node("c", "Y", 2, 0, "Common"),
        ];

        let flagged = validate_all(&nodes)
            .into_iter()
            .filter(|issue| issue.kind == IssueKind::DuplicateScenarioId)
            .map(|issue| issue.node_id)
            .collect::<Vec<_>>();
        assert_eq!(flagged, vec![nid("a"), nid("b")]);
    }

    #[test]
    fn dangling_edge_reports_the_target() {
        let mut nodes = vec![node("a", "A", 0, 0, "Common")];
        nodes[0].next_scenarios_mut().push(sid("Nowhere"));

        let issues = validate_all(&nodes);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Target scenario Nowhere not found");
    }

    #[rstest]
    #[case::previous_night(1, 3, true)]
    #[case::same_day_later_slot(2, 1, false)]
    #[case::same_slot(2, 0, false)]
    fn backward_edges_are_time_paradoxes(
        #[case] target_day: u32,
        #[case] target_time: u32,
        #[case] paradox: bool,
    ) {
        let mut nodes = vec![
            node("s", "S", 2, 0, "Common"),
            node("t", "T", target_day, target_time, "Rhea"),
        ];
        link(&mut nodes, "S", "T");

        let issues = validate_all(&nodes);
        assert_eq!(issues.len(), usize::from(paradox));
        if paradox {
            assert_eq!(issues[0].node_id, nid("s"));
            assert_eq!(issues[0].message, "Time paradox: connects to past (T)");
        }
    }

    #[test]
    fn duplicate_targets_resolve_to_the_last_holder() {
        let mut nodes = vec![
            node("s", "S", 2, 0, "Common"),
            node("early", "T", 0, 0, "Common"),
            node("late", "T", 5, 0, "Common"),
        ];
        nodes[0].next_scenarios_mut().push(sid("T"));

        let paradoxes = validate_all(&nodes)
            .into_iter()
            .filter(|issue| matches!(issue.kind, IssueKind::TimeParadox { .. }))
            .count();
        assert_eq!(paradoxes, 0);

        nodes.swap(1, 2);
        let paradoxes = validate_all(&nodes)
            .into_iter()
            .filter(|issue| matches!(issue.kind, IssueKind::TimeParadox { .. }))
            .count();
        assert_eq!(paradoxes, 1);
    }

    #[test]
    fn report_counts_and_groups_by_node() {
        let mut nodes = vec![node("a", "", 0, 0, "Common"), node("b", "B", 0, 0, "Common")];
        nodes[0].next_scenarios_mut().push(sid("Ghost"));

        let issues = validate_all(&nodes);
        let report = ValidationReport::new(&issues);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 0);
        assert!(report.has_errors());
        assert_eq!(report.issues_for(&nid("a")).count(), 2);
        assert_eq!(report.issues_for(&nid("b")).count(), 0);
    }
}
