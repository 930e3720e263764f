//! Column visibility negotiation: hides columns instead of overflowing.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::column::{Column, TableConfig};
use crate::trigger::{Clock, CoalescingTrigger};

/// Quiet period before an overflow decision is committed, so continuous
/// container resizing does not flicker columns in and out.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Client-side persistent key/value storage.
///
/// Injected rather than reached for globally, so tests can observe and seed
/// the persisted enabled-column set.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and storage-less embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Decides which hideable columns must be hidden when their accumulated
/// widths exceed the available container space.
///
/// Decisions settle through a [`CoalescingTrigger`] before they are
/// committed; the user-driven enabled set is persisted through the injected
/// store as a comma-delimited key list.
#[derive(Debug)]
pub struct VisibilityController<S: KeyValueStore, C: Clock> {
    store: S,
    storage_key: Option<String>,
    trigger: CoalescingTrigger<C>,
    /// Hideable keys the user has switched on. `None` means everything is
    /// enabled (nothing persisted yet).
    user_enabled: Option<HashSet<String>>,
    /// Committed overflow cut, in declaration order.
    space_disabled: Vec<String>,
    /// Cut awaiting the settle delay.
    pending: Option<Vec<String>>,
    /// Keys that would not fit if (re-)enabled right now.
    unfittable: HashSet<String>,
    sort_key: Option<String>,
}

impl<S: KeyValueStore, C: Clock> VisibilityController<S, C> {
    pub fn new(store: S, clock: C, storage_key: Option<String>) -> Self {
        let user_enabled = storage_key
            .as_deref()
            .and_then(|key| store.get(key))
            .map(|stored| {
                stored
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            });
        Self {
            store,
            storage_key,
            trigger: CoalescingTrigger::new(clock, SETTLE_DELAY),
            user_enabled,
            space_disabled: Vec::new(),
            pending: None,
            unfittable: HashSet::new(),
            sort_key: None,
        }
    }

    /// The column whose sort order is active; it is exempt from hiding.
    pub fn set_sort_key(&mut self, key: Option<&str>) {
        self.sort_key = key.map(str::to_string);
    }

    /// The injected store, for embedders that share it elsewhere.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether this column is currently shown.
    ///
    /// Non-hideable columns always are; hideable ones must be user-enabled
    /// and not cut by the committed overflow decision.
    pub fn visible(&self, col: &Column) -> bool {
        if !col.kind.hideable() {
            return true;
        }
        self.user_enabled(&col.key) && !self.space_disabled.iter().any(|k| k == &col.key)
    }

    /// Keys hidden by the committed overflow decision, in declaration order.
    pub fn disabled_keys(&self) -> &[String] {
        &self.space_disabled
    }

    /// Whether the configuration UI may offer to enable this column.
    pub fn can_enable(&self, key: &str) -> bool {
        !self.unfittable.contains(key)
    }

    /// Whether the user has this column switched on.
    pub fn user_enabled(&self, key: &str) -> bool {
        self.user_enabled
            .as_ref()
            .is_none_or(|enabled| enabled.contains(key))
    }

    /// Recompute the overflow cut for the given container width.
    ///
    /// Max measured content widths are accumulated in declaration order; the
    /// first running sum past `container - scrollbar_reserve` marks the cut,
    /// and every hideable column from there on is slated for hiding. Columns
    /// that cannot be hidden (kind or active sort) still consume capacity.
    /// The new cut only becomes visible once [`poll`](Self::poll) observes a
    /// settled trigger.
    pub fn evaluate(
        &mut self,
        container_width: i64,
        config: &TableConfig,
        max_widths: &HashMap<String, u32>,
    ) {
        let capacity = container_width
            .saturating_sub(i64::from(config.scrollbar_reserve))
            .max(0) as u64;

        let mut cut = Vec::new();
        let mut unfittable = HashSet::new();
        let mut sum: u64 = 0;

        for col in &config.columns {
            let width = u64::from(
                max_widths
                    .get(&col.key)
                    .copied()
                    .unwrap_or(config.min_col_width),
            );

            if col.kind.hideable() && !self.user_enabled(&col.key) {
                // Already hidden by the user: consumes no space, but record
                // whether re-enabling it would fit.
                if sum + width > capacity {
                    unfittable.insert(col.key.clone());
                }
                continue;
            }

            sum += width;
            if sum > capacity && self.exposed_to_cut(col) {
                cut.push(col.key.clone());
                unfittable.insert(col.key.clone());
            }
        }

        self.unfittable = unfittable;
        if cut != self.space_disabled {
            self.pending = Some(cut);
            self.trigger.invalidate();
        } else {
            self.pending = None;
        }
    }

    /// Commit a settled overflow decision. Returns true when the visible set
    /// changed.
    pub fn poll(&mut self) -> bool {
        if !self.trigger.fire() {
            return false;
        }
        self.commit_pending()
    }

    /// Commit any pending decision immediately, ignoring the settle delay.
    pub fn settle(&mut self) -> bool {
        self.trigger.flush();
        self.commit_pending()
    }

    fn commit_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(cut) if cut != self.space_disabled => {
                log::debug!("[visibility] hiding {} column(s): {:?}", cut.len(), cut);
                self.space_disabled = cut;
                true
            }
            _ => false,
        }
    }

    /// Switch a column on or off from the configuration UI.
    ///
    /// Enabling is rejected while the column would not fit, so the caller's
    /// checkbox stays disabled. The resulting enabled set is persisted under
    /// the configured storage key.
    pub fn set_enabled(&mut self, config: &TableConfig, key: &str, enabled: bool) -> bool {
        let Some(col) = config.column(key) else {
            log::warn!("[visibility] unknown column key {:?}; toggle ignored", key);
            return false;
        };
        if !col.kind.hideable() {
            return false;
        }
        if enabled && !self.can_enable(key) {
            return false;
        }

        let mut set = self.user_enabled.clone().unwrap_or_else(|| {
            config
                .columns
                .iter()
                .filter(|c| c.kind.hideable())
                .map(|c| c.key.clone())
                .collect()
        });
        if enabled {
            set.insert(key.to_string());
        } else {
            set.remove(key);
        }
        self.user_enabled = Some(set);
        self.persist(config);
        true
    }

    fn persist(&mut self, config: &TableConfig) {
        let Some(storage_key) = self.storage_key.clone() else {
            return;
        };
        let enabled: Vec<&str> = config
            .columns
            .iter()
            .filter(|c| c.kind.hideable() && self.user_enabled(&c.key))
            .map(|c| c.key.as_str())
            .collect();
        self.store.set(&storage_key, &enabled.join(","));
    }

    fn exposed_to_cut(&self, col: &Column) -> bool {
        col.kind.hideable() && self.sort_key.as_deref() != Some(col.key.as_str())
    }
}
