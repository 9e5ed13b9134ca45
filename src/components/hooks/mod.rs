mod use_query;
mod use_ui_prefs;

pub(crate) use use_query::{use_query, UseQuery};
pub(crate) use use_ui_prefs::use_ui_prefs;
