// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use jiff::civil::Date;

use crate::{
    DateRange, Expander, Occurrences, RecurrencePattern, RecurrenceRule, RuleDraft,
    ValidationError, Weekday, WeekdaySet,
};

/// Callback invoked after every recompute with the new version and dates.
pub type Observer = Box<dyn FnMut(u64, &Arc<Occurrences>)>;

/// Handle returned by [`RuleState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Partial update of a [`RuleState`]. `None` leaves a field unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RulePatch {
    /// The recurrence pattern.
    pub pattern: Option<RecurrencePattern>,

    /// The interval, normalized like [`RecurrenceRule::new`].
    pub interval: Option<i64>,

    /// The weekday filter.
    pub weekdays: Option<WeekdaySet>,

    /// The nth day of month, `Some(None)` clears it.
    pub nth_day_of_month: Option<Option<i64>>,

    /// The range start, `Some(None)` clears it.
    pub start: Option<Option<Date>>,

    /// The range end, `Some(None)` clears it.
    pub end: Option<Option<Date>>,
}

impl RulePatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
            && self.interval.is_none()
            && self.weekdays.is_none()
            && self.nth_day_of_month.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }

    /// Builds a patch replacing every rule field with the draft's values.
    pub fn from_draft(draft: &RuleDraft) -> Result<Self, ValidationError> {
        let rule = RecurrenceRule::try_from(draft)?;
        Ok(Self {
            pattern: Some(rule.pattern()),
            interval: Some(i64::from(rule.interval().get())),
            weekdays: Some(rule.weekdays()),
            nth_day_of_month: Some(rule.nth_day_of_month().map(i64::from)),
            ..Default::default()
        })
    }

    fn apply_to(
        &self,
        mut rule: RecurrenceRule,
        range: &mut (Option<Date>, Option<Date>),
    ) -> RecurrenceRule {
        if let Some(pattern) = self.pattern {
            rule = rule.with_pattern(pattern);
        }

        if let Some(interval) = self.interval {
            rule = rule.with_interval(interval);
        }

        if let Some(weekdays) = self.weekdays {
            rule = rule.with_weekdays(weekdays);
        }

        if let Some(nth) = self.nth_day_of_month {
            rule = rule.with_nth_day_of_month(nth);
        }

        if let Some(start) = self.start {
            range.0 = start;
        }

        if let Some(end) = self.end {
            range.1 = end;
        }

        rule
    }
}

/// The single owner of the rule being edited and of its expanded dates.
///
/// Every update recomputes the whole date set and replaces it wholesale, so
/// readers holding a previous `Arc<Occurrences>` never observe a partial set.
/// Until a start date is set the date set is empty.
pub struct RuleState {
    rule: RecurrenceRule,
    start: Option<Date>,
    end: Option<Date>,
    expander: Expander,
    occurrences: Arc<Occurrences>,
    version: u64,
    next_subscription: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl fmt::Debug for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleState")
            .field("rule", &self.rule)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("expander", &self.expander)
            .field("occurrences", &self.occurrences.len())
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for RuleState {
    fn default() -> Self {
        Self::new(Expander::default())
    }
}

impl RuleState {
    /// Creates a state holding a daily rule and no range.
    pub fn new(expander: Expander) -> Self {
        Self {
            rule: RecurrenceRule::default(),
            start: None,
            end: None,
            expander,
            occurrences: Arc::default(),
            version: 0,
            next_subscription: 0,
            observers: Vec::new(),
        }
    }

    /// The current rule.
    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    /// The current range, `None` until a start date is set.
    pub fn range(&self) -> Option<DateRange> {
        self.start.map(|start| DateRange::new(start, self.end))
    }

    /// The dates of the latest recompute.
    pub fn occurrences(&self) -> &Arc<Occurrences> {
        &self.occurrences
    }

    /// Incremented on every recompute, for consumers that poll.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies a partial update, recomputes the dates and notifies observers.
    ///
    /// An empty patch changes nothing and notifies nobody.
    pub fn update(&mut self, patch: RulePatch) -> &Arc<Occurrences> {
        if patch.is_empty() {
            return &self.occurrences;
        }

        let mut range = (self.start, self.end);
        self.rule = patch.apply_to(self.rule, &mut range);
        (self.start, self.end) = range;
        self.recompute();
        &self.occurrences
    }

    /// Validates raw form input and applies it to the rule fields.
    ///
    /// On error the state is left untouched.
    pub fn apply_draft(&mut self, draft: &RuleDraft) -> Result<&Arc<Occurrences>, ValidationError> {
        let patch = RulePatch::from_draft(draft)?;
        Ok(self.update(patch))
    }

    /// Selects `day` if unselected, unselects it otherwise.
    pub fn toggle_weekday(&mut self, day: Weekday) -> &Arc<Occurrences> {
        let mut weekdays = self.rule.weekdays();
        weekdays.toggle(day);
        self.update(RulePatch {
            weekdays: Some(weekdays),
            ..Default::default()
        })
    }

    /// Registers a callback run after every recompute.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(u64, &Arc<Occurrences>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback, returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(a, _)| *a != id);
        self.observers.len() != before
    }

    fn recompute(&mut self) {
        self.occurrences = Arc::new(match self.range() {
            Some(range) => self.expander.expand(&self.rule, &range),
            None => Occurrences::default(),
        });
        self.version += 1;
        tracing::debug!(
            version = self.version,
            count = self.occurrences.len(),
            "rule state recomputed"
        );

        let occurrences = Arc::clone(&self.occurrences);
        for (_, observer) in &mut self.observers {
            observer(self.version, &occurrences);
        }
    }
}
