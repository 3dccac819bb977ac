use crate::{
    DatabaseError, Session,
    db::{session::Refresh, table::Record},
};

/// Everything needed to draw the active profile.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub name: &'a str,
    pub use_case: &'a str,
    pub columns: &'a [String],
    pub records: &'a [Record],
}

impl<'a> View<'a> {
    /// Snapshots the active profile of `session`.
    pub fn of(session: &'a Session) -> Result<Self, DatabaseError> {
        let active = session.active()?;

        Ok(Self {
            name: active.name(),
            use_case: active.use_case(),
            columns: active.columns(),
            records: active.read(),
        })
    }
}

/// A request to collect one text value per column.
#[derive(Debug, Clone, Copy)]
pub struct FieldRequest<'a> {
    /// Heading of the form, e.g. `New record`.
    pub title: &'a str,

    pub columns: &'a [String],

    /// Values to pre-fill, one per column. `None` for an empty form.
    pub initial: Option<&'a [String]>,
}

/// The user-facing side of the application.
///
/// Implementations render state and collect input; they never touch the
/// records themselves. Every call is synchronous: a form either returns its
/// values or `None` when the user cancels.
pub trait Presenter {
    /// Lets the user pick one of `names`. `None` means cancelled.
    fn choose_profile(&mut self, names: &[&str], current: &str) -> Option<String>;

    /// Draws the active profile. A [`Refresh::Schema`] means the columns may
    /// have changed as well as the rows.
    fn render(&mut self, view: &View<'_>, refresh: Refresh);

    /// Collects one value per column, or `None` if the user cancels.
    fn collect_fields(&mut self, request: &FieldRequest<'_>) -> Option<Vec<String>>;

    /// The row the user currently has selected, if any.
    fn selected_row(&self) -> Option<usize>;

    /// Shows a block of descriptive text.
    fn show_text(&mut self, title: &str, body: &str);

    /// Shows a short notification or error message.
    fn notify(&mut self, message: &str);
}
