// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Synchronous change notification.
//!
//! Observers register on a target in the state tree. A change on some target notifies every
//! observer registered on it or on one of its ancestors, in registration order.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::model::{ColumnId, MemoId, TableId};

/// A node of the observable state tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObserveTarget {
    Canvas,
    CanvasShow,
    Tables,
    Table(TableId),
    TableUi(TableId),
    TableColumns(TableId),
    Column(TableId, ColumnId),
    Memos,
    Memo(MemoId),
    MemoUi(MemoId),
    Editor,
    FocusTable,
}

impl ObserveTarget {
    pub fn parent(&self) -> Option<ObserveTarget> {
        match self {
            Self::Canvas | Self::Tables | Self::Memos | Self::Editor => None,
            Self::CanvasShow => Some(Self::Canvas),
            Self::Table(_) => Some(Self::Tables),
            Self::TableUi(table_id) | Self::TableColumns(table_id) => {
                Some(Self::Table(table_id.clone()))
            }
            Self::Column(table_id, _) => Some(Self::TableColumns(table_id.clone())),
            Self::Memo(_) => Some(Self::Memos),
            Self::MemoUi(memo_id) => Some(Self::Memo(memo_id.clone())),
            Self::FocusTable => Some(Self::Editor),
        }
    }

    /// Whether a change on `changed` is reachable from `self`.
    pub fn reaches(&self, changed: &ObserveTarget) -> bool {
        let mut current = Some(changed.clone());
        while let Some(target) = current {
            if &target == self {
                return true;
            }
            current = target.parent();
        }
        false
    }
}

/// What changed: the innermost target plus the property key that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub target: ObserveTarget,
    pub key: &'static str,
}

impl Change {
    pub fn new(target: ObserveTarget, key: &'static str) -> Self {
        Self { target, key }
    }
}

type Callback = Rc<dyn Fn(&Change)>;

struct Observer {
    id: u64,
    target: ObserveTarget,
    callback: Callback,
}

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: Vec<Observer>,
}

#[derive(Clone, Default)]
pub(crate) struct Observers {
    inner: Rc<RefCell<ObserverList>>,
}

impl Observers {
    pub(crate) fn observe(
        &self,
        target: ObserveTarget,
        callback: impl Fn(&Change) + 'static,
    ) -> Subscription {
        let mut list = self.inner.borrow_mut();
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push(Observer {
            id,
            target,
            callback: Rc::new(callback),
        });
        Subscription {
            id,
            observers: Rc::downgrade(&self.inner),
        }
    }

    pub(crate) fn notify(&self, change: Change) {
        // Collect first so callbacks may subscribe or dispose while being notified.
        let callbacks = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|observer| observer.target.reaches(&change.target))
            .map(|observer| Rc::clone(&observer.callback))
            .collect::<Vec<_>>();
        for callback in callbacks {
            callback(&change);
        }
    }

    pub(crate) fn count(&self, target: Option<&ObserveTarget>) -> usize {
        let list = self.inner.borrow();
        let count = match target {
            Some(target) => list.entries.iter().filter(|o| &o.target == target).count(),
            None => list.entries.len(),
        };
        count
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.count(None))
            .finish()
    }
}

/// Handle for a registered observer. Dropping it (or calling [`Subscription::dispose`])
/// unregisters the callback.
#[must_use = "dropping a Subscription unregisters the observer immediately"]
pub struct Subscription {
    id: u64,
    observers: Weak<RefCell<ObserverList>>,
}

impl Subscription {
    pub fn dispose(self) {}

    pub fn is_active(&self) -> bool {
        let Some(list) = self.observers.upgrade() else {
            return false;
        };
        let active = list.borrow().entries.iter().any(|o| o.id == self.id);
        active
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.observers.upgrade() {
            list.borrow_mut().entries.retain(|observer| observer.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rstest::rstest;

    use super::{Change, ObserveTarget, Observers};
    use crate::model::{ColumnId, TableId};

    fn tid(value: &str) -> TableId {
        TableId::new(value).expect("table id")
    }

    #[rstest]
    #[case(ObserveTarget::Tables, true)]
    #[case(ObserveTarget::Table(tid("t1")), true)]
    #[case(ObserveTarget::TableColumns(tid("t1")), true)]
    #[case(ObserveTarget::TableUi(tid("t1")), false)]
    #[case(ObserveTarget::Table(tid("t2")), false)]
    #[case(ObserveTarget::Canvas, false)]
    fn column_change_reaches_its_ancestors(#[case] observer: ObserveTarget, #[case] hit: bool) {
        let changed = ObserveTarget::Column(tid("t1"), ColumnId::new("c1").expect("column id"));
        assert_eq!(observer.reaches(&changed), hit);
    }

    #[test]
    fn observers_fire_in_registration_order() {
        let observers = Observers::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let _first = observers.observe(ObserveTarget::Canvas, move |change| {
            first_log.borrow_mut().push(format!("first:{}", change.key));
        });
        let second_log = Rc::clone(&log);
        let _second = observers.observe(ObserveTarget::CanvasShow, move |change| {
            second_log.borrow_mut().push(format!("second:{}", change.key));
        });

        observers.notify(Change::new(ObserveTarget::CanvasShow, "tableComment"));
        observers.notify(Change::new(ObserveTarget::Canvas, "language"));

        assert_eq!(
            *log.borrow(),
            vec!["first:tableComment", "second:tableComment", "first:language"]
        );
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let observers = Observers::default();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let subscription = observers.observe(ObserveTarget::Editor, move |_| {
            *counter.borrow_mut() += 1;
        });
        assert!(subscription.is_active());

        observers.notify(Change::new(ObserveTarget::FocusTable, "focus"));
        subscription.dispose();
        observers.notify(Change::new(ObserveTarget::FocusTable, "focus"));

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(observers.count(None), 0);
    }

    #[test]
    fn subscription_outliving_observers_is_inert() {
        let observers = Observers::default();
        let subscription = observers.observe(ObserveTarget::Memos, |_| {});
        drop(observers);
        assert!(!subscription.is_active());
    }
}
