//! Текущий выбор компании на время сессии.
//!
//! `ScopeContext` is created once when the shell mounts and handed to every
//! consumer. It holds the selected unit id and a subscriber list; `select` is
//! the only mutator.
//!
//! Invariants:
//! 1. The selection always resolves in the registry or is `all`; the initial
//!    one is a group or `all`.
//! 2. `ScopeChange::version` increments exactly once per selection that changes the value.
//! 3. Selecting the current value is a no-op: no version bump, no notifications.
//! 4. Subscribers run synchronously, in registration order, before `select` returns.
//! 5. No lock is held while subscribers run, so they may read the context.

use super::config::ScopeConfig;
use super::error::{ScopeError, ScopeResult};
use super::filter::{ScopeFilter, ScopeFilterMode};
use super::registry::ScopeRegistry;
use super::unit::{UnitId, ALL_SCOPE};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Notification delivered to subscribers after an effective `select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeChange {
    pub previous: UnitId,
    pub current: UnitId,
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&ScopeChange) + Send + Sync>;

struct SelectionState {
    selected: UnitId,
    version: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Shared handle; clones see the same selection
#[derive(Clone)]
pub struct ScopeContext {
    registry: Arc<ScopeRegistry>,
    mode: ScopeFilterMode,
    state: Arc<RwLock<SelectionState>>,
}

impl fmt::Debug for ScopeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("ScopeContext")
            .field("selected", &state.selected)
            .field("version", &state.version)
            .field("subscribers", &state.listeners.len())
            .field("mode", &self.mode)
            .finish()
    }
}

impl ScopeContext {
    pub fn new(
        registry: ScopeRegistry,
        initial: impl Into<UnitId>,
        mode: ScopeFilterMode,
    ) -> ScopeResult<Self> {
        let initial = initial.into();
        registry.ensure_default_selection(&initial)?;

        Ok(Self {
            registry: Arc::new(registry),
            mode,
            state: Arc::new(RwLock::new(SelectionState {
                selected: initial,
                version: 0,
                next_subscription: 0,
                listeners: Vec::new(),
            })),
        })
    }

    pub fn from_config(config: ScopeConfig) -> ScopeResult<Self> {
        let (registry, default_selection, mode) = config.build()?;
        Self::new(registry, default_selection, mode)
    }

    /// Context over the embedded default hierarchy
    pub fn embedded() -> ScopeResult<Self> {
        Self::from_config(ScopeConfig::embedded()?)
    }

    fn read(&self) -> RwLockReadGuard<'_, SelectionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SelectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn registry(&self) -> &ScopeRegistry {
        &self.registry
    }

    pub fn mode(&self) -> ScopeFilterMode {
        self.mode
    }

    /// Currently selected unit id
    pub fn current(&self) -> UnitId {
        self.read().selected.clone()
    }

    /// Replace the selection and notify subscribers.
    ///
    /// Returns `Ok(true)` when the selection changed, `Ok(false)` when `id`
    /// was already selected, and `NotFound` (state untouched) for ids that
    /// are neither in the registry nor `all`.
    pub fn select<Q>(&self, id: &Q) -> ScopeResult<bool>
    where
        Q: AsRef<str> + ?Sized,
    {
        let id = id.as_ref();
        if id != ALL_SCOPE && !self.registry.contains(id) {
            log::warn!("scope selection rejected: unknown unit '{}'", id);
            return Err(ScopeError::NotFound(UnitId::new(id)));
        }

        let (change, listeners) = {
            let mut state = self.write();
            if state.selected.as_str() == id {
                return Ok(false);
            }
            let previous = std::mem::replace(&mut state.selected, UnitId::new(id));
            state.version += 1;
            let change = ScopeChange {
                previous,
                current: state.selected.clone(),
                version: state.version,
            };
            let listeners: Vec<Listener> =
                state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (change, listeners)
        };

        log::info!(
            "scope changed: '{}' -> '{}' (v{})",
            change.previous,
            change.current,
            change.version
        );

        for listener in listeners {
            listener(&change);
        }

        Ok(true)
    }

    /// Display name of a unit, empty when the id does not resolve
    pub fn name_of<Q>(&self, id: &Q) -> String
    where
        Q: AsRef<str> + ?Sized,
    {
        self.registry
            .resolve(id)
            .map(|unit| unit.name.clone())
            .unwrap_or_default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ScopeChange) + Send + Sync + 'static,
    {
        let mut state = self.write();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already removed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.write();
        let before = state.listeners.len();
        state.listeners.retain(|(sid, _)| *sid != id);
        state.listeners.len() != before
    }

    /// Scope predicate for the current selection
    pub fn filter(&self) -> ScopeFilter<'_> {
        ScopeFilter::new(&self.registry, self.current(), self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scope::filter::BusinessScoped;
    use crate::shared::scope::registry::tests::sample_registry;
    use crate::shared::scope::unit::{OrganizationalUnit, UnitKind};
    use std::sync::Mutex;

    fn context() -> ScopeContext {
        ScopeContext::new(sample_registry(), "group-1", ScopeFilterMode::Hierarchical).unwrap()
    }

    struct Row(UnitId);

    impl BusinessScoped for Row {
        fn business_id(&self) -> &UnitId {
            &self.0
        }
    }

    #[test]
    fn test_initial_selection() {
        let ctx = context();
        assert_eq!(ctx.current().as_str(), "group-1");
        assert_eq!(
            ctx.registry().resolve(&ctx.current()).map(|u| u.kind),
            Some(UnitKind::Group)
        );
    }

    #[test]
    fn test_initial_selection_must_resolve() {
        let err = ScopeContext::new(sample_registry(), "nowhere", ScopeFilterMode::Hierarchical)
            .unwrap_err();
        assert_eq!(err, ScopeError::NotFound(UnitId::from("nowhere")));
    }

    #[test]
    fn test_select_then_current() {
        let ctx = context();
        for id in ["business-3", "project-2", "group-2", "all"] {
            assert_eq!(ctx.select(id), Ok(true));
            assert_eq!(ctx.current().as_str(), id);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let ctx = context();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        ctx.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert_eq!(ctx.select("business-1"), Ok(true));
        assert_eq!(ctx.select("business-1"), Ok(false));
        assert_eq!(ctx.current().as_str(), "business-1");
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_change_version_counts_effective_selections() {
        let ctx = context();
        let versions = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&versions);
        ctx.subscribe(move |change| sink.lock().unwrap().push(change.version));

        ctx.select("business-1").unwrap();
        ctx.select("business-1").unwrap();
        assert!(ctx.select("business-42").is_err());
        ctx.select("group-2").unwrap();
        assert_eq!(*versions.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_initial_selection_must_be_group_or_all() {
        for id in ["business-1", "project-2"] {
            let err = ScopeContext::new(sample_registry(), id, ScopeFilterMode::Hierarchical)
                .unwrap_err();
            assert!(matches!(err, ScopeError::Config(_)), "{id}");
        }
        let ctx = ScopeContext::new(sample_registry(), "all", ScopeFilterMode::Legacy).unwrap();
        assert!(ctx.current().is_all());
    }

    #[test]
    fn test_select_unknown_leaves_state() {
        let ctx = context();
        assert_eq!(
            ctx.select("business-42"),
            Err(ScopeError::NotFound(UnitId::from("business-42")))
        );
        assert_eq!(ctx.current().as_str(), "group-1");
    }

    #[test]
    fn test_subscribers_notified_in_order_before_return() {
        let ctx = context();
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&log);
        ctx.subscribe(move |change: &ScopeChange| {
            first.lock().unwrap().push(format!("a:{}", change.current));
        });
        let second = Arc::clone(&log);
        ctx.subscribe(move |change: &ScopeChange| {
            second.lock().unwrap().push(format!("b:{}->{}", change.previous, change.current));
        });

        ctx.select("business-2").unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["a:business-2".to_string(), "b:group-1->business-2".to_string()]
        );
    }

    #[test]
    fn test_subscriber_can_read_context() {
        let ctx = context();
        let seen = Arc::new(Mutex::new(None));
        let reader = ctx.clone();
        let sink = Arc::clone(&seen);
        ctx.subscribe(move |_| {
            *sink.lock().unwrap() = Some(reader.name_of(&reader.current()));
        });

        ctx.select("business-3").unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("Transportes Rápidos"));
    }

    #[test]
    fn test_unsubscribe() {
        let ctx = context();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = ctx.subscribe(move |_| *counter.lock().unwrap() += 1);

        ctx.select("group-2").unwrap();
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.select("group-1").unwrap();
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_name_of() {
        let ctx = context();
        assert_eq!(ctx.name_of("group-2"), "Grupo Transportes Unidos");
        assert_eq!(ctx.name_of("unknown"), "");
        assert_eq!(ctx.name_of("all"), "");
    }

    #[test]
    fn test_select_business_end_to_end() {
        let registry = ScopeRegistry::new(vec![
            OrganizationalUnit::group("group-1", "Group One"),
            OrganizationalUnit::business("business-1", "Business One", "group-1"),
            OrganizationalUnit::business("business-2", "Business Two", "group-1"),
            OrganizationalUnit::project("project-1", "Project One", "business-1"),
        ])
        .unwrap();
        let ctx = ScopeContext::new(registry, "group-1", ScopeFilterMode::Hierarchical).unwrap();
        ctx.select("business-1").unwrap();

        let projects: Vec<&str> = ctx
            .registry()
            .children_of("business-1", UnitKind::Project)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(projects, vec!["project-1"]);

        let filter = ctx.filter();
        assert!(!filter.is_visible(&Row(UnitId::from("business-2"))));
        assert!(filter.is_visible(&Row(UnitId::from("business-1"))));
    }

    #[test]
    fn test_context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScopeContext>();
    }
}
