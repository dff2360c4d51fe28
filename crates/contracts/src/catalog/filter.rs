use crate::domain::a001_product::ProductRecord;
use crate::shared::text::slugify;
use std::collections::BTreeSet;

/// The three independent filter groups of the catalog page.
///
/// The name doubles as the URL parameter and as the `data-group`
/// attribute value of the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Jenis,
    Ukuran,
    Kabko,
}

impl FilterGroup {
    pub fn name(&self) -> &'static str {
        match self {
            FilterGroup::Jenis => "jenis",
            FilterGroup::Ukuran => "ukuran",
            FilterGroup::Kabko => "kabko",
        }
    }

    /// URL order: jenis, ukuran, kabko
    pub fn all() -> [FilterGroup; 3] {
        [FilterGroup::Jenis, FilterGroup::Ukuran, FilterGroup::Kabko]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|g| g.name() == name)
    }

    /// Raw (label form) value of the field this group inspects
    pub fn value_of<'a>(&self, item: &'a ProductRecord) -> &'a str {
        match self {
            FilterGroup::Jenis => item.jenis.label(),
            FilterGroup::Ukuran => item.ukuran.label(),
            FilterGroup::Kabko => &item.kabko,
        }
    }
}

/// Selected filter tokens, always in slug form.
///
/// An empty group is a wildcard; groups combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    jenis: BTreeSet<String>,
    ukuran: BTreeSet<String>,
    kabko: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self, group: FilterGroup) -> &BTreeSet<String> {
        match group {
            FilterGroup::Jenis => &self.jenis,
            FilterGroup::Ukuran => &self.ukuran,
            FilterGroup::Kabko => &self.kabko,
        }
    }

    fn tokens_mut(&mut self, group: FilterGroup) -> &mut BTreeSet<String> {
        match group {
            FilterGroup::Jenis => &mut self.jenis,
            FilterGroup::Ukuran => &mut self.ukuran,
            FilterGroup::Kabko => &mut self.kabko,
        }
    }

    /// Add a raw value or slug; values that slugify to nothing are dropped
    pub fn insert(&mut self, group: FilterGroup, value: &str) -> bool {
        let token = slugify(value);
        if token.is_empty() {
            return false;
        }
        self.tokens_mut(group).insert(token)
    }

    /// Replace a whole group, as the filter controls do on every change
    pub fn replace_group<I, S>(&mut self, group: FilterGroup, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokens_mut(group).clear();
        for value in values {
            self.insert(group, value.as_ref());
        }
    }

    pub fn with(mut self, group: FilterGroup, value: &str) -> Self {
        self.insert(group, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        FilterGroup::all()
            .iter()
            .all(|group| self.tokens(*group).is_empty())
    }

    /// Exact token match per group after normalizing the item's field
    pub fn matches(&self, item: &ProductRecord) -> bool {
        FilterGroup::all().iter().all(|group| {
            let tokens = self.tokens(*group);
            tokens.is_empty() || tokens.contains(&slugify(group.value_of(item)))
        })
    }

    /// Indices of the items passing every group, in input order
    pub fn apply(&self, items: &[ProductRecord]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(idx, _)| idx)
            .collect()
    }
}
