pub(crate) mod lutron;
pub(crate) mod tplink;
