use crate::api::ApiError;

/// What a data-dependent view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ViewPhase {
    Loading,
    Empty,
    Populated,
    Errored,
}

/// Results that can be "successfully nothing".
pub(crate) trait Emptiable {
    fn is_empty_result(&self) -> bool;
}

impl<T> Emptiable for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for Option<T> {
    fn is_empty_result(&self) -> bool {
        self.is_none()
    }
}

/// Snapshot handed to views. `data` is always iterable, even while loading.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueryResult<T> {
    pub is_loading: bool,
    pub data: T,
    pub error: Option<ApiError>,
}

impl<T: Default> QueryResult<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            data: T::default(),
            error: None,
        }
    }

    /// Query disabled (no key yet): nothing in flight, nothing to show.
    pub fn idle() -> Self {
        Self {
            is_loading: false,
            data: T::default(),
            error: None,
        }
    }

    pub fn failed(error: ApiError) -> Self {
        Self {
            is_loading: false,
            data: T::default(),
            error: Some(error),
        }
    }
}

impl<T> QueryResult<T> {
    pub fn resolved(data: T) -> Self {
        Self {
            is_loading: false,
            data,
            error: None,
        }
    }
}

impl<T: Emptiable> QueryResult<T> {
    pub fn phase(&self) -> ViewPhase {
        if self.is_loading {
            ViewPhase::Loading
        } else if self.error.is_some() {
            ViewPhase::Errored
        } else if self.data.is_empty_result() {
            ViewPhase::Empty
        } else {
            ViewPhase::Populated
        }
    }
}
