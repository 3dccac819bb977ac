use tracing::{debug, info, warn};

use crate::{
    DatabaseError,
    catalog::builtin::{BUILTIN_PROFILES, builtin_stores},
    db::table::{DataStore, Record, RecordId},
};

/// What the presentation layer has to re-pull after a successful call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The active profile was (re)selected: columns and records both changed.
    Schema,

    /// Only the rows of the active profile changed.
    Records,
}

/// The session controller.
///
/// `Session` owns every available data system and tracks which one is
/// active. It is the only place the active profile changes; CRUD calls are
/// forwarded to the active profile and answer with a [`Refresh`] telling the
/// presentation layer what to redraw.
///
/// A session built with [`Session::new`] starts with no active profile.
/// [`Session::start`] and [`Session::with_builtin_profiles`] select a default
/// before handing the session out.
///
/// # Example
///
/// ```
/// use paradigm_db::{Refresh, Session};
///
/// let mut session = Session::with_builtin_profiles().unwrap();
/// assert_eq!(session.current_name().unwrap(), "PostgreSQL");
///
/// assert_eq!(session.select_profile("MongoDB").unwrap(), Refresh::Schema);
/// assert_eq!(session.current_columns().unwrap(), ["ID", "Produto", "Preço"]);
///
/// let refresh = session
///     .create_record(vec!["3".into(), "Açúcar".into(), "R$ 6.00".into()])
///     .unwrap();
/// assert_eq!(refresh, Refresh::Records);
/// assert_eq!(session.current_records().unwrap().len(), 3);
/// ```
#[derive(Debug)]
pub struct Session {
    /// Available data systems in chooser order.
    profiles: Vec<Box<dyn DataStore>>,

    /// Position of the active profile in `profiles`.
    active: Option<usize>,
}

impl Session {
    /// Creates a session with no active profile.
    ///
    /// Profile names are lookup keys, so two stores sharing a name are
    /// rejected with [`DatabaseError::DuplicateProfile`].
    pub fn new(profiles: Vec<Box<dyn DataStore>>) -> Result<Self, DatabaseError> {
        for (idx, profile) in profiles.iter().enumerate() {
            if profiles[..idx]
                .iter()
                .any(|earlier| earlier.name() == profile.name())
            {
                return Err(DatabaseError::DuplicateProfile(profile.name().to_string()));
            }
        }

        Ok(Self {
            profiles,
            active: None,
        })
    }

    /// Creates a session and activates `default_profile`.
    pub fn start(
        profiles: Vec<Box<dyn DataStore>>,
        default_profile: &str,
    ) -> Result<Self, DatabaseError> {
        let mut session = Self::new(profiles)?;
        session.select_profile(default_profile)?;
        Ok(session)
    }

    /// Creates a session over the built-in data systems with the first one
    /// active.
    pub fn with_builtin_profiles() -> Result<Self, DatabaseError> {
        Self::start(builtin_stores(), BUILTIN_PROFILES[0].name)
    }

    /// Names of every available profile, in chooser order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.name()).collect()
    }

    /// Name of the active profile, if any.
    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|idx| self.profiles[idx].name())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Gets a profile by name, active or not.
    pub fn get_profile(&self, name: &str) -> Result<&dyn DataStore, DatabaseError> {
        self.position(name)
            .map(|idx| self.profiles[idx].as_ref())
            .ok_or_else(|| DatabaseError::ProfileNotFound(name.to_string()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|profile| profile.name() == name)
    }

    /// Makes `name` the active profile.
    ///
    /// Selecting the already-active profile changes nothing but still asks for
    /// a full redraw. An unknown name leaves the session as it was.
    pub fn select_profile(&mut self, name: &str) -> Result<Refresh, DatabaseError> {
        let Some(idx) = self.position(name) else {
            warn!(profile = name, "unknown profile");
            return Err(DatabaseError::ProfileNotFound(name.to_string()));
        };

        if self.active != Some(idx) {
            info!(
                from = self.active_name().unwrap_or("<none>"),
                to = name,
                "switching profile"
            );
        }
        self.active = Some(idx);

        Ok(Refresh::Schema)
    }

    /// The active profile.
    pub fn active(&self) -> Result<&dyn DataStore, DatabaseError> {
        self.active
            .map(|idx| self.profiles[idx].as_ref())
            .ok_or(DatabaseError::NoActiveProfile)
    }

    fn active_mut(&mut self) -> Result<&mut dyn DataStore, DatabaseError> {
        match self.active {
            Some(idx) => Ok(self.profiles[idx].as_mut()),
            None => Err(DatabaseError::NoActiveProfile),
        }
    }

    pub fn current_name(&self) -> Result<&str, DatabaseError> {
        Ok(self.active()?.name())
    }

    pub fn current_title(&self) -> Result<&str, DatabaseError> {
        Ok(self.active()?.title())
    }

    pub fn current_use_case(&self) -> Result<&str, DatabaseError> {
        Ok(self.active()?.use_case())
    }

    pub fn current_rationale(&self) -> Result<&str, DatabaseError> {
        Ok(self.active()?.rationale())
    }

    pub fn current_columns(&self) -> Result<&[String], DatabaseError> {
        Ok(self.active()?.columns())
    }

    pub fn current_records(&self) -> Result<&[Record], DatabaseError> {
        Ok(self.active()?.read())
    }

    /// Appends a record to the active profile.
    pub fn create_record(&mut self, fields: Vec<String>) -> Result<Refresh, DatabaseError> {
        self.active_mut()?
            .create(fields)
            .inspect_err(|err| warn!(%err, "create rejected"))?;
        Ok(Refresh::Records)
    }

    /// Replaces the record at `index` in the active profile.
    pub fn update_record(
        &mut self,
        index: usize,
        fields: Vec<String>,
    ) -> Result<Refresh, DatabaseError> {
        self.active_mut()?
            .update(index, fields)
            .inspect_err(|err| warn!(%err, "update rejected"))?;
        Ok(Refresh::Records)
    }

    /// Removes the record at `index` from the active profile.
    pub fn delete_record(&mut self, index: usize) -> Result<Refresh, DatabaseError> {
        self.active_mut()?
            .delete(index)
            .inspect_err(|err| warn!(%err, "delete rejected"))?;
        Ok(Refresh::Records)
    }

    pub fn update_record_by_id(
        &mut self,
        id: RecordId,
        fields: Vec<String>,
    ) -> Result<Refresh, DatabaseError> {
        self.active_mut()?
            .update_by_id(id, fields)
            .inspect_err(|err| warn!(%err, "update rejected"))?;
        Ok(Refresh::Records)
    }

    pub fn delete_record_by_id(&mut self, id: RecordId) -> Result<Refresh, DatabaseError> {
        let removed = self
            .active_mut()?
            .delete_by_id(id)
            .inspect_err(|err| warn!(%err, "delete rejected"))?;
        debug!(id = %removed.id(), "deleted by id");
        Ok(Refresh::Records)
    }
}
