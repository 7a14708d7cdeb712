pub(crate) mod idle_service;
pub(crate) mod parsing;
pub(crate) mod pipeline;
pub(crate) mod selection;
