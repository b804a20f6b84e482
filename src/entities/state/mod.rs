pub(crate) mod brightness;
