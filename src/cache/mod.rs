pub(crate) mod client;
pub(crate) mod key;
pub(crate) mod result;

pub(crate) use client::{QueryClient, QueryObserver};
pub(crate) use key::QueryKey;
pub(crate) use result::{Emptiable, QueryResult, ViewPhase};
