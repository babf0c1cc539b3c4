//! Storage layer for the expense tracker
//!
//! [`ExpenseStore`] is the single owner of income, currency and both expense
//! lists. Every mutation writes the complete affected value to its key in a
//! [`StorageBackend`] and only then updates the in-memory state, so a failed
//! write leaves the store exactly as it was.

pub mod backend;
pub mod file_io;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Currency, FixedExpenseId, FixedExpenseItem, MonthlyIncome, VariableExpenseId,
    VariableExpenseItem,
};

/// Persisted key names, one per entity
pub mod keys {
    pub const MONTHLY_INCOME: &str = "monthlyIncome";
    pub const CURRENCY: &str = "currency";
    pub const FIXED_EXPENSES: &str = "fixedExpenses";
    pub const VARIABLE_EXPENSES: &str = "variableExpenses";
}

/// Owned copy of the complete store state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Snapshot {
    pub income: MonthlyIncome,
    pub fixed_expenses: Vec<FixedExpenseItem>,
    pub variable_expenses: Vec<VariableExpenseItem>,
}

/// Source of truth for income and expenses
pub struct ExpenseStore<B: StorageBackend> {
    backend: B,
    income: f64,
    currency: Currency,
    fixed: Vec<FixedExpenseItem>,
    variable: Vec<VariableExpenseItem>,
}

impl ExpenseStore<FileBackend> {
    /// Open the file-backed store under `paths`, creating directories as needed
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;
        Self::load_all(FileBackend::new(paths.data_dir()))
    }
}

impl<B: StorageBackend> ExpenseStore<B> {
    /// Load every key from `backend`; missing keys yield defaults
    pub fn load_all(backend: B) -> TrackerResult<Self> {
        let income = load_income(&backend)?;
        let currency = load_currency(&backend)?;
        let fixed: Vec<FixedExpenseItem> = load_list(&backend, keys::FIXED_EXPENSES)?;
        let variable: Vec<VariableExpenseItem> = load_list(&backend, keys::VARIABLE_EXPENSES)?;

        info!(
            income,
            currency = currency.code(),
            fixed = fixed.len(),
            variable = variable.len(),
            "Loaded expense store"
        );

        Ok(Self {
            backend,
            income,
            currency,
            fixed,
            variable,
        })
    }

    /// Borrow the storage backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give back the storage backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Current monthly income with its currency
    pub fn income(&self) -> MonthlyIncome {
        MonthlyIncome::new(self.income, self.currency)
    }

    /// Current display currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Current fixed expenses
    pub fn fixed_expenses(&self) -> &[FixedExpenseItem] {
        &self.fixed
    }

    /// Current variable expenses
    pub fn variable_expenses(&self) -> &[VariableExpenseItem] {
        &self.variable
    }

    /// Owned copy of the whole state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            income: self.income(),
            fixed_expenses: self.fixed.clone(),
            variable_expenses: self.variable.clone(),
        }
    }

    /// Replace the monthly income.
    ///
    /// Any number is accepted here; rejecting negative input is the
    /// caller's concern.
    pub fn set_income(&mut self, value: f64) -> TrackerResult<()> {
        self.backend.set(keys::MONTHLY_INCOME, &value.to_string())?;
        debug!(key = keys::MONTHLY_INCOME, value, "Persisted monthly income");
        self.income = value;
        Ok(())
    }

    /// Replace the display currency
    pub fn set_currency(&mut self, currency: Currency) -> TrackerResult<()> {
        self.backend.set(keys::CURRENCY, currency.symbol())?;
        debug!(key = keys::CURRENCY, currency = currency.code(), "Persisted currency");
        self.currency = currency;
        Ok(())
    }

    /// Append a fixed expense. The item must carry a fresh id.
    pub fn add_fixed(&mut self, item: FixedExpenseItem) -> TrackerResult<&[FixedExpenseItem]> {
        let mut next = self.fixed.clone();
        next.push(item);
        self.commit_fixed(next)
    }

    /// Replace the fixed expense with the same id; unknown ids leave the list unchanged
    pub fn update_fixed(&mut self, item: FixedExpenseItem) -> TrackerResult<&[FixedExpenseItem]> {
        if !self.fixed.iter().any(|e| e.id == item.id) {
            debug!(id = %item.id, "No fixed expense to update");
        }
        let next = self
            .fixed
            .iter()
            .map(|e| if e.id == item.id { item.clone() } else { e.clone() })
            .collect();
        self.commit_fixed(next)
    }

    /// Remove the fixed expense with `id`; unknown ids leave the list unchanged
    pub fn remove_fixed(&mut self, id: FixedExpenseId) -> TrackerResult<&[FixedExpenseItem]> {
        let next: Vec<_> = self.fixed.iter().filter(|e| e.id != id).cloned().collect();
        if next.len() == self.fixed.len() {
            debug!(%id, "No fixed expense to remove");
        }
        self.commit_fixed(next)
    }

    /// Append a variable expense. The item must carry a fresh id.
    pub fn add_variable(
        &mut self,
        item: VariableExpenseItem,
    ) -> TrackerResult<&[VariableExpenseItem]> {
        let mut next = self.variable.clone();
        next.push(item);
        self.commit_variable(next)
    }

    /// Replace the variable expense with the same id; unknown ids leave the list unchanged
    pub fn update_variable(
        &mut self,
        item: VariableExpenseItem,
    ) -> TrackerResult<&[VariableExpenseItem]> {
        if !self.variable.iter().any(|e| e.id == item.id) {
            debug!(id = %item.id, "No variable expense to update");
        }
        let next = self
            .variable
            .iter()
            .map(|e| if e.id == item.id { item.clone() } else { e.clone() })
            .collect();
        self.commit_variable(next)
    }

    /// Remove the variable expense with `id`; unknown ids leave the list unchanged
    pub fn remove_variable(
        &mut self,
        id: VariableExpenseId,
    ) -> TrackerResult<&[VariableExpenseItem]> {
        let next: Vec<_> = self.variable.iter().filter(|e| e.id != id).cloned().collect();
        if next.len() == self.variable.len() {
            debug!(%id, "No variable expense to remove");
        }
        self.commit_variable(next)
    }

    /// Find a fixed expense by full id, short id (`fix-1a2b3c4d`) or exact name
    pub fn find_fixed(&self, query: &str) -> TrackerResult<&FixedExpenseItem> {
        find_by(&self.fixed, query, |e| e.id.matches(query), |e| e.name.as_str()).map_err(|miss| {
            miss.into_error("fixed expense", query, |q| {
                TrackerError::fixed_expense_not_found(q)
            })
        })
    }

    /// Find a variable expense by full id, short id (`var-1a2b3c4d`) or exact name
    pub fn find_variable(&self, query: &str) -> TrackerResult<&VariableExpenseItem> {
        find_by(&self.variable, query, |e| e.id.matches(query), |e| e.name.as_str()).map_err(
            |miss| {
                miss.into_error("variable expense", query, |q| {
                    TrackerError::variable_expense_not_found(q)
                })
            },
        )
    }

    fn commit_fixed(&mut self, next: Vec<FixedExpenseItem>) -> TrackerResult<&[FixedExpenseItem]> {
        persist_list(&mut self.backend, keys::FIXED_EXPENSES, &next)?;
        self.fixed = next;
        Ok(&self.fixed)
    }

    fn commit_variable(
        &mut self,
        next: Vec<VariableExpenseItem>,
    ) -> TrackerResult<&[VariableExpenseItem]> {
        persist_list(&mut self.backend, keys::VARIABLE_EXPENSES, &next)?;
        self.variable = next;
        Ok(&self.variable)
    }
}

fn persist_list<B: StorageBackend, T: Serialize>(
    backend: &mut B,
    key: &str,
    list: &[T],
) -> TrackerResult<()> {
    let json = serde_json::to_string(list)?;
    backend.set(key, &json)?;
    debug!(key, items = list.len(), bytes = json.len(), "Persisted list");
    Ok(())
}

fn load_income<B: StorageBackend>(backend: &B) -> TrackerResult<f64> {
    match backend.get(keys::MONTHLY_INCOME)? {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<f64>().map_err(|_| {
            TrackerError::Storage(format!(
                "Stored {} is not a number: '{}'",
                keys::MONTHLY_INCOME,
                raw
            ))
        }),
        _ => Ok(0.0),
    }
}

fn load_currency<B: StorageBackend>(backend: &B) -> TrackerResult<Currency> {
    match backend.get(keys::CURRENCY)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse()
            .map_err(|e| TrackerError::Storage(format!("Stored {}: {}", keys::CURRENCY, e))),
        _ => Ok(Currency::default()),
    }
}

fn load_list<B: StorageBackend, T: DeserializeOwned>(
    backend: &B,
    key: &str,
) -> TrackerResult<Vec<T>> {
    match backend.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", key, e))),
        _ => Ok(Vec::new()),
    }
}

enum LookupMiss {
    None,
    Many,
}

impl LookupMiss {
    fn into_error(
        self,
        entity_type: &'static str,
        query: &str,
        not_found: fn(String) -> TrackerError,
    ) -> TrackerError {
        match self {
            Self::None => not_found(query.to_string()),
            Self::Many => TrackerError::Ambiguous {
                entity_type,
                identifier: query.to_string(),
            },
        }
    }
}

/// Id matches win outright; otherwise the name must match exactly one item
fn find_by<'a, T>(
    items: &'a [T],
    query: &str,
    id_matches: impl Fn(&T) -> bool,
    name: impl Fn(&T) -> &str,
) -> Result<&'a T, LookupMiss> {
    if let Some(item) = items.iter().find(|e| id_matches(e)) {
        return Ok(item);
    }

    let query = query.trim();
    let mut by_name = items.iter().filter(|e| name(e).eq_ignore_ascii_case(query));
    match (by_name.next(), by_name.next()) {
        (Some(item), None) => Ok(item),
        (Some(_), Some(_)) => Err(LookupMiss::Many),
        _ => Err(LookupMiss::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedExpenseCategory, VariableExpenseCategory};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn memory_store() -> ExpenseStore<MemoryBackend> {
        ExpenseStore::load_all(MemoryBackend::new()).unwrap()
    }

    /// Backend whose writes always fail, for persistence-failure tests
    #[derive(Default)]
    struct FullDiskBackend {
        inner: MemoryBackend,
    }

    impl StorageBackend for FullDiskBackend {
        fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), TrackerError> {
            Err(TrackerError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_load_defaults_from_empty_backend() {
        let store = memory_store();
        assert_eq!(store.income().amount, 0.0);
        assert_eq!(store.currency(), Currency::Sek);
        assert!(store.fixed_expenses().is_empty());
        assert!(store.variable_expenses().is_empty());
        assert_eq!(store.snapshot(), Snapshot::default());
    }

    #[test]
    fn test_set_income_persists_stringified_number() {
        let mut store = memory_store();
        store.set_income(3000.0).unwrap();
        assert_eq!(store.backend().raw(keys::MONTHLY_INCOME), Some("3000"));

        store.set_income(1250.5).unwrap();
        assert_eq!(store.backend().raw(keys::MONTHLY_INCOME), Some("1250.5"));
        assert_eq!(store.income().amount, 1250.5);
    }

    #[test]
    fn test_negative_income_is_accepted_by_store() {
        let mut store = memory_store();
        store.set_income(-10.0).unwrap();
        assert_eq!(store.income().amount, -10.0);
        assert!(!store.income().is_set());
    }

    #[test]
    fn test_set_currency_persists_symbol() {
        let mut store = memory_store();
        store.set_currency(Currency::Euro).unwrap();
        assert_eq!(store.backend().raw(keys::CURRENCY), Some("€"));

        let reloaded = ExpenseStore::load_all(store.into_backend()).unwrap();
        assert_eq!(reloaded.currency(), Currency::Euro);
    }

    #[test]
    fn test_add_fixed_returns_new_snapshot() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        let gym = FixedExpenseItem::new("Gym", 399.0, FixedExpenseCategory::Membership);

        store.add_fixed(rent.clone()).unwrap();
        let list = store.add_fixed(gym.clone()).unwrap();

        assert_eq!(list, &[rent, gym][..]);
        let stored = store.backend().raw(keys::FIXED_EXPENSES).unwrap();
        assert!(stored.starts_with('['));
        assert!(stored.contains("\"Membership\""));
    }

    #[test]
    fn test_update_fixed_replaces_by_id() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        store.add_fixed(rent.clone()).unwrap();

        let mut raised = rent.clone();
        raised.amount = 8500.0;
        let list = store.update_fixed(raised.clone()).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0], raised);
    }

    #[test]
    fn test_update_fixed_is_idempotent() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        let phone = FixedExpenseItem::new("Phone", 199.0, FixedExpenseCategory::Bills);
        store.add_fixed(rent.clone()).unwrap();
        store.add_fixed(phone).unwrap();

        let mut renamed = rent;
        renamed.name = "Apartment".into();

        let once = store.update_fixed(renamed.clone()).unwrap().to_vec();
        let twice = store.update_fixed(renamed).unwrap().to_vec();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        store.add_fixed(rent.clone()).unwrap();

        let stranger = FixedExpenseItem::new("Stranger", 1.0, FixedExpenseCategory::Other);
        let list = store.update_fixed(stranger).unwrap();
        assert_eq!(list, &[rent][..]);
    }

    #[test]
    fn test_remove_fixed_missing_id_is_noop() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        store.add_fixed(rent.clone()).unwrap();
        let before = store.fixed_expenses().to_vec();

        let after = store.remove_fixed(FixedExpenseId::new()).unwrap();
        assert_eq!(after, &before[..]);
    }

    #[test]
    fn test_remove_fixed() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        let gym = FixedExpenseItem::new("Gym", 399.0, FixedExpenseCategory::Membership);
        store.add_fixed(rent.clone()).unwrap();
        store.add_fixed(gym.clone()).unwrap();

        let list = store.remove_fixed(rent.id).unwrap();
        assert_eq!(list, &[gym][..]);
    }

    #[test]
    fn test_variable_crud() {
        let mut store = memory_store();
        let coffee = VariableExpenseItem::new(
            date(2024, 3, 2),
            "Coffee",
            45.0,
            VariableExpenseCategory::Food,
        );
        let cinema = VariableExpenseItem::new(
            date(2024, 3, 5),
            "Cinema",
            140.0,
            VariableExpenseCategory::Activities,
        );

        store.add_variable(coffee.clone()).unwrap();
        store.add_variable(cinema.clone()).unwrap();

        let mut later = coffee.clone();
        later.date = date(2024, 3, 3);
        store.update_variable(later.clone()).unwrap();
        assert_eq!(store.variable_expenses()[0].date, date(2024, 3, 3));

        let list = store.remove_variable(cinema.id).unwrap();
        assert_eq!(list, &[later][..]);

        let list = store.remove_variable(VariableExpenseId::new()).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_variable_round_trip_preserves_dates() {
        let mut store = memory_store();
        let dentist = VariableExpenseItem::new(
            date(2024, 2, 29),
            "Dentist",
            650.25,
            VariableExpenseCategory::Health,
        );
        store.add_variable(dentist.clone()).unwrap();
        store.set_income(32_000.0).unwrap();

        let reloaded = ExpenseStore::load_all(store.into_backend()).unwrap();
        let loaded = &reloaded.variable_expenses()[0];

        assert_eq!(loaded, &dentist);
        assert_eq!(loaded.date, date(2024, 2, 29));
        assert_eq!(reloaded.income().amount, 32_000.0);
    }

    #[test]
    fn test_load_browser_era_data() {
        let fixed = concat!(
            r#"[{"id":"0b7e2f66-5a53-4a4b-9d6e-0e7d5c1b2a01","#,
            r#""name":"Rent","amount":7500,"category":"Bills"}]"#,
        );
        let variable = concat!(
            r#"[{"id":"8c1d3f70-1111-4c2b-8a7e-2f9b6d4e3c02","date":"2024-03-10","#,
            r#""name":"Groceries","amount":412.5,"category":"Food"},"#,
            r#"{"id":"8c1d3f70-1111-4c2b-8a7e-2f9b6d4e3c03","date":"2024-03-12T12:00:00.000Z","#,
            r#""name":"Bus","amount":39,"category":"Travel"}]"#,
        );
        let backend = MemoryBackend::with_entries([
            (keys::MONTHLY_INCOME, "28000"),
            (keys::CURRENCY, "$"),
            (keys::FIXED_EXPENSES, fixed),
            (keys::VARIABLE_EXPENSES, variable),
        ]);

        let store = ExpenseStore::load_all(backend).unwrap();
        assert_eq!(store.income(), MonthlyIncome::new(28000.0, Currency::Usd));
        assert_eq!(store.fixed_expenses()[0].category, FixedExpenseCategory::Bills);
        assert_eq!(store.variable_expenses()[0].date, date(2024, 3, 10));

        // Timestamps land on the local calendar date, within a day of UTC
        let bus = store.variable_expenses()[1].date;
        assert!(bus >= date(2024, 3, 11) && bus <= date(2024, 3, 13));
    }

    #[test]
    fn test_corrupt_income_is_an_error() {
        let backend = MemoryBackend::with_entries([(keys::MONTHLY_INCOME, "lots")]);
        let err = ExpenseStore::load_all(backend).err().unwrap();
        assert!(matches!(err, TrackerError::Storage(_)));
    }

    #[test]
    fn test_corrupt_list_is_an_error() {
        let backend = MemoryBackend::with_entries([(keys::FIXED_EXPENSES, "{not json")]);
        assert!(ExpenseStore::load_all(backend).is_err());
    }

    #[test]
    fn test_failed_write_leaves_state_untouched() {
        let mut store = ExpenseStore::load_all(FullDiskBackend::default()).unwrap();

        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        let err = store.add_fixed(rent).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(store.fixed_expenses().is_empty());

        assert!(store.set_income(100.0).is_err());
        assert_eq!(store.income().amount, 0.0);

        assert!(store.set_currency(Currency::Usd).is_err());
        assert_eq!(store.currency(), Currency::Sek);
    }

    #[test]
    fn test_find_by_id_short_id_and_name() {
        let mut store = memory_store();
        let rent = FixedExpenseItem::new("Rent", 8000.0, FixedExpenseCategory::Bills);
        store.add_fixed(rent.clone()).unwrap();

        assert_eq!(store.find_fixed(&rent.id.as_uuid().to_string()).unwrap(), &rent);
        assert_eq!(store.find_fixed(&rent.id.to_string()).unwrap(), &rent);
        assert_eq!(store.find_fixed("rent").unwrap(), &rent);
        assert!(store.find_fixed("Gym").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_ambiguous_name() {
        let mut store = memory_store();
        for (day, amount) in [(1, 40.0), (2, 42.0)] {
            let coffee = VariableExpenseItem::new(
                date(2024, 3, day),
                "Coffee",
                amount,
                VariableExpenseCategory::Food,
            );
            store.add_variable(coffee).unwrap();
        }

        let err = store.find_variable("coffee").unwrap_err();
        assert!(matches!(err, TrackerError::Ambiguous { .. }));
    }

    #[test]
    fn test_open_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut store = ExpenseStore::open(&paths).unwrap();
            store.set_income(3000.0).unwrap();
            let spotify =
                FixedExpenseItem::new("Spotify", 119.0, FixedExpenseCategory::Entertainment);
            store.add_fixed(spotify).unwrap();
        }

        assert!(paths.data_dir().join("monthlyIncome.json").exists());
        assert!(paths.data_dir().join("fixedExpenses.json").exists());

        let store = ExpenseStore::open(&paths).unwrap();
        assert_eq!(store.income().amount, 3000.0);
        assert_eq!(store.fixed_expenses()[0].name, "Spotify");
    }
}
