mod repo;

pub(crate) use repo::*;
