use tracing::debug;

use crate::{
    DatabaseError, Session,
    db::session::Refresh,
};

pub mod presenter;

pub use presenter::{FieldRequest, Presenter, View};

/// Glue between user intents and the [`Session`].
///
/// Each handler mirrors one control of the user interface. Handlers never
/// fail: errors are shown through [`Presenter::notify`] and leave the records
/// as they were.
#[derive(Debug)]
pub struct App<P> {
    session: Session,
    presenter: P,
}

impl<P: Presenter> App<P> {
    /// Wraps a started session and draws the initial view.
    ///
    /// Fails with [`DatabaseError::NoActiveProfile`] if no profile has been
    /// selected yet.
    pub fn start(session: Session, presenter: P) -> Result<Self, DatabaseError> {
        session.active()?;

        let mut app = Self { session, presenter };
        app.refresh(Refresh::Schema);
        Ok(app)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (Session, P) {
        (self.session, self.presenter)
    }

    /// Redraws the active profile.
    pub fn refresh(&mut self, refresh: Refresh) {
        match View::of(&self.session) {
            Ok(view) => self.presenter.render(&view, refresh),
            Err(err) => self.presenter.notify(&err.to_string()),
        }
    }

    fn report(&mut self, err: &DatabaseError) {
        self.presenter.notify(&err.to_string());
    }

    fn apply(&mut self, result: Result<Refresh, DatabaseError>) {
        match result {
            Ok(refresh) => self.refresh(refresh),
            Err(err) => self.report(&err),
        }
    }

    /// Asks the user for a profile and switches to it.
    pub fn choose_profile(&mut self) {
        let names = self.session.profile_names();
        let current = self.session.active_name().unwrap_or_default();

        let Some(choice) = self.presenter.choose_profile(&names, current) else {
            debug!("profile choice cancelled");
            return;
        };

        self.select_profile(&choice);
    }

    /// Switches to the named profile.
    pub fn select_profile(&mut self, name: &str) {
        let result = self.session.select_profile(name);
        self.apply(result);
    }

    /// Shows why the active data system suits its scenario.
    pub fn show_info(&mut self) {
        match self.session.active() {
            Ok(active) => {
                let title = format!("About {}", active.title());
                self.presenter.show_text(&title, active.rationale());
            }
            Err(err) => self.report(&err),
        }
    }

    /// Collects a new record and appends it to the active profile.
    pub fn add_record(&mut self) {
        let columns = match self.session.current_columns() {
            Ok(columns) => columns,
            Err(err) => return self.report(&err),
        };

        let request = FieldRequest {
            title: "New record",
            columns,
            initial: None,
        };
        let Some(fields) = self.presenter.collect_fields(&request) else {
            debug!("add cancelled");
            return;
        };

        let result = self.session.create_record(fields);
        self.apply(result);
    }

    /// Edits the selected record in place.
    pub fn edit_record(&mut self) {
        let Some(index) = self.presenter.selected_row() else {
            self.presenter.notify("Select a row to edit.");
            return;
        };

        let active = match self.session.active() {
            Ok(active) => active,
            Err(err) => return self.report(&err),
        };
        let Some(current) = active.read().get(index) else {
            let err = DatabaseError::IndexOutOfRange {
                index,
                len: active.read().len(),
            };
            return self.report(&err);
        };

        let request = FieldRequest {
            title: "Edit record",
            columns: active.columns(),
            initial: Some(current.fields()),
        };
        let Some(fields) = self.presenter.collect_fields(&request) else {
            debug!(index, "edit cancelled");
            return;
        };

        let result = self.session.update_record(index, fields);
        self.apply(result);
    }

    /// Deletes the selected record.
    pub fn delete_record(&mut self) {
        let Some(index) = self.presenter.selected_row() else {
            self.presenter.notify("Select a row to delete.");
            return;
        };

        let result = self.session.delete_record(index);
        self.apply(result);
    }
}
