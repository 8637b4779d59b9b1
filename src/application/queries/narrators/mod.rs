mod service;

pub use service::{GetNarratorBySlugQuery, ListNarratorsQuery, NarratorQueryService};
