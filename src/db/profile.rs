use tracing::{debug, warn};

use crate::{
    DatabaseError,
    catalog::builtin::ProfileDefinition,
    db::table::{DataStore, Record, RecordId, Schema},
};

/// An in-memory data system: fixed metadata plus a mutable list of records.
///
/// All four built-in data systems are instances of this one type; they only
/// differ in the [`ProfileDefinition`] they were built from.
///
/// # Example
///
/// ```
/// use paradigm_db::{DataStore, Profile, BUILTIN_PROFILES};
///
/// let mut mongo = Profile::from_definition(&BUILTIN_PROFILES[1]);
/// assert_eq!(mongo.name(), "MongoDB");
/// assert_eq!(mongo.read().len(), 2);
///
/// mongo.create(vec!["3".into(), "Açúcar".into(), "R$ 6.00".into()]).unwrap();
/// assert_eq!(mongo.read()[2].fields(), ["3", "Açúcar", "R$ 6.00"]);
///
/// mongo.delete(0).unwrap();
/// assert_eq!(mongo.read()[0].get_value(1), Some("Feijão"));
/// ```
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    title: String,
    use_case: String,
    rationale: String,
    schema: Schema,
    records: Vec<Record>,

    /// Next id to hand out. Only ever grows.
    next_id: u64,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        use_case: impl Into<String>,
        rationale: impl Into<String>,
        schema: Schema,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            use_case: use_case.into(),
            rationale: rationale.into(),
            schema,
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a profile and loads the definition's seed rows.
    pub fn from_definition(def: &ProfileDefinition) -> Self {
        let mut profile = Self::new(
            def.name,
            def.title,
            def.use_case,
            def.rationale,
            Schema::new(def.columns.iter().copied()),
        );

        for row in def.seed {
            let fields = row.iter().map(|field| (*field).to_owned()).collect();
            // Seed rows are checked against their columns by the catalog tests.
            if let Err(err) = profile.create(fields) {
                warn!(profile = def.name, %err, "skipping malformed seed row");
            }
        }

        profile
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets the record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), DatabaseError> {
        if index >= self.records.len() {
            return Err(DatabaseError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        Ok(())
    }
}

impl DataStore for Profile {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn use_case(&self) -> &str {
        &self.use_case
    }

    fn rationale(&self) -> &str {
        &self.rationale
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn create(&mut self, fields: Vec<String>) -> Result<RecordId, DatabaseError> {
        self.schema.check_fields(&fields)?;

        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.push(Record::new(id, fields));

        debug!(profile = %self.name, %id, len = self.records.len(), "record created");
        Ok(id)
    }

    fn read(&self) -> &[Record] {
        &self.records
    }

    fn update(&mut self, index: usize, fields: Vec<String>) -> Result<(), DatabaseError> {
        self.check_index(index)?;
        self.schema.check_fields(&fields)?;

        self.records[index].replace_fields(fields);

        debug!(profile = %self.name, index, "record updated");
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<Record, DatabaseError> {
        self.check_index(index)?;

        let removed = self.records.remove(index);

        debug!(profile = %self.name, index, id = %removed.id(), "record deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{self, BUILTIN_PROFILES};

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    fn snapshot(profile: &Profile) -> Vec<Vec<String>> {
        profile
            .read()
            .iter()
            .map(|record| record.fields().to_vec())
            .collect()
    }

    fn mongo() -> Profile {
        Profile::from_definition(builtin::find("MongoDB").expect("MongoDB is built in"))
    }

    #[test]
    fn test_from_definition_loads_metadata_and_seed() {
        for def in &BUILTIN_PROFILES {
            let profile = Profile::from_definition(def);

            assert_eq!(profile.name(), def.name);
            assert_eq!(profile.title(), def.title);
            assert_eq!(profile.use_case(), def.use_case);
            assert_eq!(profile.rationale(), def.rationale);
            assert_eq!(profile.columns(), def.columns);
            assert_eq!(profile.len(), 2);
            assert!(
                profile
                    .read()
                    .iter()
                    .all(|record| record.fields().len() == def.columns.len())
            );
        }
    }

    #[test]
    fn test_create_appends_to_end() {
        for def in &BUILTIN_PROFILES {
            let mut profile = Profile::from_definition(def);
            let row = vec!["x".to_owned(); def.columns.len()];

            profile.create(row.clone()).unwrap();

            assert_eq!(profile.len(), 3);
            assert_eq!(profile.read().last().unwrap().fields(), row.as_slice());
        }
    }

    #[test]
    fn test_create_accepts_empty_strings() {
        let mut profile = mongo();

        profile.create(fields(&["", "", ""])).unwrap();

        assert_eq!(profile.get(2).unwrap().fields(), ["", "", ""]);
    }

    #[test]
    fn test_create_rejects_schema_mismatch() {
        let mut profile = mongo();
        let before = snapshot(&profile);

        let err = profile.create(fields(&["3", "Açúcar"])).unwrap_err();

        assert_eq!(
            err,
            DatabaseError::SchemaMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(snapshot(&profile), before);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut profile = mongo();

        profile
            .update(1, fields(&["2", "Feijão Preto", "R$ 9.00"]))
            .unwrap();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.read()[1].fields(), ["2", "Feijão Preto", "R$ 9.00"]);
        assert_eq!(profile.read()[0].fields(), ["1", "Arroz 5kg", "R$ 25.00"]);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut profile = mongo();
        let before = snapshot(&profile);

        let err = profile.update(2, fields(&["a", "b", "c"])).unwrap_err();

        assert_eq!(err, DatabaseError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(snapshot(&profile), before);
    }

    #[test]
    fn test_update_rejects_schema_mismatch() {
        let mut profile = mongo();
        let before = snapshot(&profile);

        assert!(matches!(
            profile.update(0, fields(&["1"])),
            Err(DatabaseError::SchemaMismatch { .. })
        ));
        assert_eq!(snapshot(&profile), before);
    }

    #[test]
    fn test_delete_shifts_following_records() {
        let mut profile = mongo();
        profile.create(fields(&["3", "Açúcar", "R$ 6.00"])).unwrap();
        profile.create(fields(&["4", "Café", "R$ 15.00"])).unwrap();

        let removed = profile.delete(1).unwrap();

        assert_eq!(removed.fields(), ["2", "Feijão", "R$ 8.50"]);
        assert_eq!(
            snapshot(&profile),
            vec![
                fields(&["1", "Arroz 5kg", "R$ 25.00"]),
                fields(&["3", "Açúcar", "R$ 6.00"]),
                fields(&["4", "Café", "R$ 15.00"]),
            ]
        );
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut profile = mongo();
        let before = snapshot(&profile);

        assert_eq!(
            profile.delete(5).unwrap_err(),
            DatabaseError::IndexOutOfRange { index: 5, len: 2 }
        );
        assert_eq!(snapshot(&profile), before);
    }

    #[test]
    fn test_delete_until_empty() {
        let mut profile = mongo();

        profile.delete(0).unwrap();
        profile.delete(0).unwrap();

        assert!(profile.is_empty());
        assert_eq!(
            profile.delete(0).unwrap_err(),
            DatabaseError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_mongo_scenario() {
        let mut profile = mongo();
        assert_eq!(profile.columns(), ["ID", "Produto", "Preço"]);

        profile.create(fields(&["3", "Açúcar", "R$ 6.00"])).unwrap();
        assert_eq!(profile.len(), 3);

        profile
            .update(0, fields(&["1", "Arroz 5kg", "R$ 27.00"]))
            .unwrap();
        assert_eq!(profile.read()[0].fields(), ["1", "Arroz 5kg", "R$ 27.00"]);
        assert_eq!(profile.read()[1].fields(), ["2", "Feijão", "R$ 8.50"]);

        profile.delete(1).unwrap();
        assert_eq!(
            snapshot(&profile),
            vec![
                fields(&["1", "Arroz 5kg", "R$ 27.00"]),
                fields(&["3", "Açúcar", "R$ 6.00"]),
            ]
        );
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut profile = mongo();
        let first = profile.read()[0].id();
        let second = profile.read()[1].id();
        assert_ne!(first, second);

        profile.delete(0).unwrap();
        let third = profile.create(fields(&["3", "Açúcar", "R$ 6.00"])).unwrap();

        assert_ne!(third, first);
        assert_ne!(third, second);
        assert_eq!(profile.position_of(second), Some(0));
        assert_eq!(profile.position_of(third), Some(1));
        assert_eq!(profile.position_of(first), None);

        profile.update(0, fields(&["2", "Feijão", "R$ 9.00"])).unwrap();
        assert_eq!(profile.read()[0].id(), second);
    }

    #[test]
    fn test_id_addressing() {
        let mut profile = mongo();
        let id = profile.read()[1].id();

        profile.delete(0).unwrap();
        profile
            .update_by_id(id, fields(&["2", "Feijão", "R$ 9.50"]))
            .unwrap();
        assert_eq!(profile.read()[0].get_value(2), Some("R$ 9.50"));

        let removed = profile.delete_by_id(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(profile.is_empty());

        assert_eq!(
            profile.delete_by_id(id).unwrap_err(),
            DatabaseError::RecordNotFound(id)
        );
    }
}
