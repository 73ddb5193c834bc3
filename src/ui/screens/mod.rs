mod bootstrap;
mod load_failure;

pub(crate) use bootstrap::render_bootstrap;
pub(crate) use load_failure::render_load_failure;
