//! Chart groups: charts that redraw together when one of them changes its filter.

use crate::{Error, Result};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A chart that can take part in a coordinated group redraw.
pub trait GroupMember {
    fn chart_id(&self) -> &str;
    fn group_redraw(&mut self) -> Result<()>;
}

pub type SharedChart = Rc<RefCell<dyn GroupMember>>;

struct Member {
    id: String,
    chart: SharedChart,
}

/// Charts grouped by name. Member ids are captured at registration, so a group redraw can skip
/// the chart that triggered it while that chart is still mutably borrowed.
#[derive(Default)]
pub struct ChartRegistry {
    groups: IndexMap<String, Vec<Member>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `chart` to `group`, replacing any member with the same id.
    pub fn register(&mut self, group: &str, chart: SharedChart) -> Result<()> {
        let id = chart
            .try_borrow()
            .map(|c| c.chart_id().to_string())
            .map_err(|_| Error::ChartBusy {
                chart_id: format!("<unregistered member of {group}>"),
            })?;
        let members = self.groups.entry(group.to_string()).or_default();
        match members.iter_mut().find(|m| m.id == id) {
            Some(existing) => existing.chart = chart,
            None => members.push(Member { id, chart }),
        }
        Ok(())
    }

    pub fn deregister(&mut self, group: &str, chart_id: &str) -> bool {
        let Some(members) = self.groups.get_mut(group) else {
            return false;
        };
        let before = members.len();
        members.retain(|m| m.id != chart_id);
        members.len() != before
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    pub fn chart_ids(&self, group: &str) -> Vec<String> {
        self.groups
            .get(group)
            .map(|members| members.iter().map(|m| m.id.clone()).collect())
            .unwrap_or_default()
    }

    /// Redraws every chart in `group`. Returns how many charts were redrawn.
    pub fn redraw_group(&self, group: &str) -> Result<usize> {
        self.redraw_members(group, None)
    }

    /// Redraws every chart in `group` except `skip_id`, which the caller already redrew.
    pub fn redraw_group_except(&self, group: &str, skip_id: &str) -> Result<usize> {
        self.redraw_members(group, Some(skip_id))
    }

    fn redraw_members(&self, group: &str, skip_id: Option<&str>) -> Result<usize> {
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| Error::UnknownChartGroup {
                group: group.to_string(),
            })?;
        let mut redrawn = 0;
        for member in members {
            if skip_id == Some(member.id.as_str()) {
                continue;
            }
            let mut chart = member
                .chart
                .try_borrow_mut()
                .map_err(|_| Error::ChartBusy {
                    chart_id: member.id.clone(),
                })?;
            tracing::trace!(group, chart = %member.id, "group redraw");
            chart.group_redraw()?;
            redrawn += 1;
        }
        Ok(redrawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        id: &'static str,
        redraws: usize,
    }

    impl GroupMember for Counter {
        fn chart_id(&self) -> &str {
            self.id
        }

        fn group_redraw(&mut self) -> Result<()> {
            self.redraws += 1;
            Ok(())
        }
    }

    fn counter(id: &'static str) -> Rc<RefCell<Counter>> {
        Rc::new(RefCell::new(Counter { id, redraws: 0 }))
    }

    #[test]
    fn redraws_every_member_of_the_group() {
        let a = counter("a");
        let b = counter("b");
        let other = counter("c");
        let mut registry = ChartRegistry::new();
        registry.register("g", a.clone()).unwrap();
        registry.register("g", b.clone()).unwrap();
        registry.register("h", other.clone()).unwrap();

        assert_eq!(registry.redraw_group("g").unwrap(), 2);
        assert_eq!(registry.redraw_group_except("g", "a").unwrap(), 1);
        assert_eq!(a.borrow().redraws, 1);
        assert_eq!(b.borrow().redraws, 2);
        assert_eq!(other.borrow().redraws, 0);
    }

    #[test]
    fn re_registering_an_id_replaces_it() {
        let mut registry = ChartRegistry::new();
        registry.register("g", counter("a")).unwrap();
        registry.register("g", counter("a")).unwrap();
        assert_eq!(registry.chart_ids("g"), vec!["a"]);
        assert!(registry.deregister("g", "a"));
        assert!(registry.chart_ids("g").is_empty());
    }

    #[test]
    fn unknown_group_is_an_error() {
        let registry = ChartRegistry::new();
        let err = registry.redraw_group("missing").unwrap_err();
        assert!(matches!(err, Error::UnknownChartGroup { .. }));
    }

    #[test]
    fn busy_member_is_reported_not_panicking() {
        let a = counter("a");
        let mut registry = ChartRegistry::new();
        registry.register("g", a.clone()).unwrap();
        let _held = a.borrow_mut();
        assert!(matches!(
            registry.redraw_group("g").unwrap_err(),
            Error::ChartBusy { .. }
        ));
    }
}
