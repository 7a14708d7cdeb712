pub(crate) mod local;
pub(crate) mod steam;
