pub(crate) mod app;
pub(crate) mod catalog;
pub(crate) mod common;
pub(crate) mod config;
pub(crate) mod db;
pub mod shell;

pub use app::{App, FieldRequest, Presenter, View};
pub use catalog::builtin::{BUILTIN_PROFILES, ProfileDefinition, builtin_stores};
pub use common::error::DatabaseError;
pub use config::Config;
pub use db::{
    profile::Profile,
    session::{Refresh, Session},
    table::{DataStore, Record, RecordId, Schema},
};
